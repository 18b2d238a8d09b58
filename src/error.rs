//! Custom error types for libris
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::{BookId, MemberId};

/// The main error type for libris operations
#[derive(Error, Debug)]
pub enum LibrisError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The book is already lent out
    #[error("Book {book} is already borrowed")]
    AlreadyBorrowed { book: BookId },

    /// The member never borrowed this book
    #[error("Member {member} did not borrow book {book}")]
    NotBorrowedByMember { member: MemberId, book: BookId },

    /// Snapshot storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LibrisError {
    /// Create a "not found" error for books
    pub fn book_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Book",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for members
    pub fn member_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Member",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a lending-state violation (already borrowed,
    /// or returning a book the member never took out)
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            Self::AlreadyBorrowed { .. } | Self::NotBorrowedByMember { .. }
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LibrisError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LibrisError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for libris operations
pub type LibrisResult<T> = Result<T, LibrisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LibrisError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = LibrisError::book_not_found("42");
        assert_eq!(err.to_string(), "Book not found: 42");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_already_borrowed_error() {
        let err = LibrisError::AlreadyBorrowed {
            book: BookId::from_raw(7),
        };
        assert_eq!(err.to_string(), "Book 7 is already borrowed");
        assert!(err.is_invalid_state());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_borrowed_by_member_error() {
        let err = LibrisError::NotBorrowedByMember {
            member: MemberId::from_raw(1),
            book: BookId::from_raw(3),
        };
        assert_eq!(err.to_string(), "Member 1 did not borrow book 3");
        assert!(err.is_invalid_state());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let libris_err: LibrisError = io_err.into();
        assert!(matches!(libris_err, LibrisError::Io(_)));
    }
}
