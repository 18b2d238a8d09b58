//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod book;
pub mod member;

pub use book::{format_book_details, format_book_list};
pub use member::{format_member_details, format_member_list};
