//! Circulation logging
//!
//! An append-only JSONL record of every state-changing operation, kept
//! separate from the snapshot so it survives a corrupt or deleted snapshot.

pub mod entry;
pub mod logger;

pub use entry::{LogEntry, Operation};
pub use logger::CirculationLog;
