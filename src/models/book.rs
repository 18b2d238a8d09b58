//! Book model
//!
//! Represents a single title in the catalog and its lending state.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BookId;

/// A book in the library catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier, assigned sequentially by the catalog
    pub id: BookId,

    /// Book title, accepted as given (may be empty, need not be unique)
    pub title: String,

    /// Author name, accepted as given
    pub author: String,

    /// Whether the book is currently lent out
    #[serde(default)]
    pub borrowed: bool,
}

impl Book {
    /// Create a new book, available for lending
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            borrowed: false,
        }
    }

    /// Case-insensitive substring match against title or author.
    /// An empty keyword matches every book.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.title.to_lowercase().contains(&keyword)
            || self.author.to_lowercase().contains(&keyword)
    }

    /// Human-readable lending status
    pub fn status(&self) -> &'static str {
        if self.borrowed {
            "Borrowed"
        } else {
            "Available"
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book {} | {} by {} | {}",
            self.id,
            self.title,
            self.author,
            self.status()
        )
    }
}
