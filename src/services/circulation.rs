//! Circulation service
//!
//! The borrow/return transition logic spanning the catalog and the roster.
//! This service holds no state of its own: it is the sole writer of the
//! borrowed flag on books and of the loan lists on members, which keeps the
//! cross-collection invariant (a book is borrowed iff exactly one member
//! holds its id) in one place.

use crate::error::{LibrisError, LibrisResult};
use crate::models::{Book, BookId, MemberId};
use crate::store::Library;

/// Service for lending operations
pub struct CirculationService<'a> {
    library: &'a mut Library,
}

impl<'a> CirculationService<'a> {
    /// Create a new circulation service over the session state
    pub fn new(library: &'a mut Library) -> Self {
        Self { library }
    }

    /// Lend a book to a member.
    ///
    /// Fails with `NotFound` if the member or the book is unknown, and with
    /// `AlreadyBorrowed` if the book is already out. On success the book's
    /// borrowed flag is set and its id appended to the member's loan list,
    /// preserving borrow order. There is no cap on loans per member.
    ///
    /// A failed borrow leaves all state unchanged.
    pub fn borrow(&mut self, member_id: MemberId, book_id: BookId) -> LibrisResult<Book> {
        let Library { catalog, roster } = &mut *self.library;

        let member = roster
            .find_by_id_mut(member_id)
            .ok_or_else(|| LibrisError::member_not_found(member_id.to_string()))?;

        let book = catalog
            .find_by_id_mut(book_id)
            .ok_or_else(|| LibrisError::book_not_found(book_id.to_string()))?;

        if book.borrowed {
            return Err(LibrisError::AlreadyBorrowed { book: book_id });
        }

        book.borrowed = true;
        member.record_loan(book_id);

        Ok(book.clone())
    }

    /// Take a book back from a member.
    ///
    /// Fails with `NotFound` if the member is unknown, and with
    /// `NotBorrowedByMember` if the book id is not in that member's loan
    /// list. The membership check runs before the catalog is consulted, so
    /// unknown book ids are rejected here too. A book that passes the
    /// membership check but is missing from the catalog means the stored
    /// state is corrupt; that surfaces as a typed `NotFound` error rather
    /// than a panic.
    ///
    /// A failed return leaves all state unchanged.
    pub fn return_book(&mut self, member_id: MemberId, book_id: BookId) -> LibrisResult<Book> {
        let Library { catalog, roster } = &mut *self.library;

        let member = roster
            .find_by_id_mut(member_id)
            .ok_or_else(|| LibrisError::member_not_found(member_id.to_string()))?;

        if !member.has_borrowed(book_id) {
            return Err(LibrisError::NotBorrowedByMember {
                member: member_id,
                book: book_id,
            });
        }

        // Membership passed but the catalog has no such book: corrupt state.
        // Checked before mutating the member so the failure changes nothing.
        let book = catalog
            .find_by_id_mut(book_id)
            .ok_or_else(|| LibrisError::book_not_found(book_id.to_string()))?;

        book.borrowed = false;
        member.clear_loan(book_id);

        Ok(book.clone())
    }
}
