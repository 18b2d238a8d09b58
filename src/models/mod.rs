//! Core data models for libris
//!
//! This module contains the data structures that represent the library
//! domain: books, members, and their strongly-typed identifiers.

pub mod book;
pub mod ids;
pub mod member;

pub use book::Book;
pub use ids::{BookId, MemberId};
pub use member::Member;
