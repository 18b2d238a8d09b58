//! Circulation log entry structures
//!
//! Defines the record written for each state-changing operation: additions
//! to the catalog or roster, and borrow/return transitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Book, BookId, Member, MemberId};

/// Types of operations recorded in the circulation log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A book was added to the catalog
    AddBook,
    /// A member was registered
    AddMember,
    /// A book was lent out
    Borrow,
    /// A book was returned
    Return,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::AddBook => write!(f, "ADD BOOK"),
            Operation::AddMember => write!(f, "ADD MEMBER"),
            Operation::Borrow => write!(f, "BORROW"),
            Operation::Return => write!(f, "RETURN"),
        }
    }
}

/// A single circulation log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// What happened
    pub operation: Operation,

    /// Book involved, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<BookId>,

    /// Member involved, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<MemberId>,

    /// Human-readable summary (title, member name)
    pub summary: String,
}

impl LogEntry {
    /// Entry for a book added to the catalog
    pub fn add_book(book: &Book) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::AddBook,
            book_id: Some(book.id),
            member_id: None,
            summary: format!("{} by {}", book.title, book.author),
        }
    }

    /// Entry for a registered member
    pub fn add_member(member: &Member) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::AddMember,
            book_id: None,
            member_id: Some(member.id),
            summary: member.name.clone(),
        }
    }

    /// Entry for a borrow transition
    pub fn borrow(member_id: MemberId, book: &Book) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Borrow,
            book_id: Some(book.id),
            member_id: Some(member_id),
            summary: format!("{} -> member {}", book.title, member_id),
        }
    }

    /// Entry for a return transition
    pub fn return_book(member_id: MemberId, book: &Book) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Return,
            book_id: Some(book.id),
            member_id: Some(member_id),
            summary: format!("{} <- member {}", book.title, member_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_book_entry() {
        let book = Book::new(BookId::from_raw(1), "Dune", "Herbert");
        let entry = LogEntry::add_book(&book);

        assert_eq!(entry.operation, Operation::AddBook);
        assert_eq!(entry.book_id, Some(book.id));
        assert_eq!(entry.member_id, None);
        assert_eq!(entry.summary, "Dune by Herbert");
    }

    #[test]
    fn test_borrow_entry() {
        let book = Book::new(BookId::from_raw(3), "Dune", "Herbert");
        let entry = LogEntry::borrow(MemberId::from_raw(1), &book);

        assert_eq!(entry.operation, Operation::Borrow);
        assert_eq!(entry.book_id, Some(BookId::from_raw(3)));
        assert_eq!(entry.member_id, Some(MemberId::from_raw(1)));
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Borrow.to_string(), "BORROW");
        assert_eq!(Operation::AddMember.to_string(), "ADD MEMBER");
    }

    #[test]
    fn test_entry_round_trips_as_json() {
        let book = Book::new(BookId::from_raw(1), "Dune", "Herbert");
        let entry = LogEntry::add_book(&book);

        let json = serde_json::to_string(&entry).unwrap();
        // member_id is None and skipped entirely
        assert!(!json.contains("member_id"));

        let parsed: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.operation, Operation::AddBook);
        assert_eq!(parsed.book_id, entry.book_id);
    }
}
