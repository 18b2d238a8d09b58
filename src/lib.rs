//! libris - Terminal-based library circulation tracker
//!
//! This library provides the core functionality for the libris CLI: a
//! single-session inventory of a library's books and members, with
//! borrow/return tracking, keyword search, and full-state snapshot
//! persistence.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (books, members, typed ids)
//! - `store`: In-memory session state (catalog, roster, id counters)
//! - `services`: Lending logic spanning catalog and roster
//! - `storage`: JSON snapshot persistence with atomic writes
//! - `audit`: Append-only circulation log
//! - `display`: Terminal table and detail formatting
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust
//! use libris::services::CirculationService;
//! use libris::store::Library;
//!
//! let mut library = Library::new();
//! let book = library.catalog.add("Dune", "Frank Herbert");
//! let member = library.roster.add("Alice");
//!
//! CirculationService::new(&mut library)
//!     .borrow(member.id, book.id)
//!     .unwrap();
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;

pub use error::{LibrisError, LibrisResult};
