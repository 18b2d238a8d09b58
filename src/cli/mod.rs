//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the store and service layers.

pub mod book;
pub mod circulation;
pub mod member;

pub use book::{handle_book_command, BookCommands};
pub use circulation::{handle_borrow, handle_history, handle_return};
pub use member::{handle_member_command, MemberCommands};
