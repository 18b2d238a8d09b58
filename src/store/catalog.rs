//! Catalog: the owning collection of books
//!
//! Owns every `Book` record and the monotonic book-id counter. IDs start at 1
//! and are never reused; books are never deleted. Lookups are linear scans,
//! which is fine at interactive-session scale.

use crate::models::{Book, BookId};

/// Owning collection of books plus the book-id sequence
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    next_id: BookId,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create an empty catalog with the counter at 1
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            next_id: BookId::from_raw(1),
        }
    }

    /// Rebuild a catalog from persisted state, restoring the counter exactly
    pub fn from_parts(books: Vec<Book>, next_id: BookId) -> Self {
        Self { books, next_id }
    }

    /// Add a book. Assigns the next sequential ID and advances the counter.
    /// Title and author are accepted as given, including empty strings.
    pub fn add(&mut self, title: impl Into<String>, author: impl Into<String>) -> Book {
        let book = Book::new(self.next_id, title, author);
        self.next_id = self.next_id.next();
        self.books.push(book.clone());
        book
    }

    /// Look up a book by ID
    pub fn find_by_id(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Mutable lookup, used by the circulation service to flip the borrowed flag
    pub(crate) fn find_by_id_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }

    /// All books that match the keyword (case-insensitive substring on title
    /// or author), in insertion order. An empty keyword matches everything.
    pub fn search(&self, keyword: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| b.matches_keyword(keyword))
            .collect()
    }

    /// All books in insertion order
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// The ID the next added book will receive
    pub fn next_id(&self) -> BookId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
