//! Persistence layer for libris
//!
//! A single JSON snapshot file holds the full session state, written with an
//! atomic temp-file-and-rename so a crash mid-write can never be mistaken
//! for valid state on the next load.

pub mod file_io;
pub mod snapshot;

pub use file_io::{read_json, write_json_atomic};
pub use snapshot::{LoadOutcome, Snapshot, SnapshotStore};
