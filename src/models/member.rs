//! Member model
//!
//! Represents a library member and the books they currently have out.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BookId, MemberId};

/// A registered library member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier, assigned sequentially by the roster
    pub id: MemberId,

    /// Member name, accepted as given
    pub name: String,

    /// IDs of books currently borrowed, in borrow order
    #[serde(default)]
    pub borrowed_books: Vec<BookId>,
}

impl Member {
    /// Create a new member with no books out
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            borrowed_books: Vec::new(),
        }
    }

    /// Whether this member currently has the given book out
    pub fn has_borrowed(&self, book_id: BookId) -> bool {
        self.borrowed_books.contains(&book_id)
    }

    /// Record a loan. Appends, preserving borrow order.
    pub fn record_loan(&mut self, book_id: BookId) {
        self.borrowed_books.push(book_id);
    }

    /// Remove the first occurrence of the book from the loan list.
    /// Returns false if the member does not have the book out.
    pub fn clear_loan(&mut self, book_id: BookId) -> bool {
        match self.borrowed_books.iter().position(|&id| id == book_id) {
            Some(index) => {
                self.borrowed_books.remove(index);
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let books: Vec<String> = self.borrowed_books.iter().map(|id| id.to_string()).collect();
        write!(
            f,
            "Member {} | {} | Borrowed: [{}]",
            self.id,
            self.name,
            books.join(", ")
        )
    }
}
