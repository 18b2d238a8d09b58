//! In-memory state for libris
//!
//! `Library` is the single owned-state struct for a session: it holds the
//! catalog and the roster, is created at startup (from a snapshot or fresh)
//! and saved at shutdown. There are no process-wide singletons.

pub mod catalog;
pub mod roster;

pub use catalog::Catalog;
pub use roster::Roster;

/// The full in-memory state of a library session
#[derive(Debug, Clone, Default)]
pub struct Library {
    pub catalog: Catalog,
    pub roster: Roster,
}

impl Library {
    /// Create an empty library with both counters at 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a library from restored parts
    pub fn from_parts(catalog: Catalog, roster: Roster) -> Self {
        Self { catalog, roster }
    }
}
