//! Circulation CLI commands
//!
//! Borrow, return, and the circulation history view.

use crate::audit::{CirculationLog, LogEntry};
use crate::error::LibrisResult;
use crate::models::{BookId, MemberId};
use crate::services::CirculationService;
use crate::store::Library;

/// Handle a borrow command
pub fn handle_borrow(
    library: &mut Library,
    log: Option<&CirculationLog>,
    member_id: u64,
    book_id: u64,
) -> LibrisResult<()> {
    let member_id = MemberId::from_raw(member_id);
    let book_id = BookId::from_raw(book_id);

    let book = CirculationService::new(library).borrow(member_id, book_id)?;

    if let Some(log) = log {
        if let Err(e) = log.record(&LogEntry::borrow(member_id, &book)) {
            eprintln!("Warning: could not record to circulation log: {}", e);
        }
    }

    println!("Member {} borrowed book {}: {}", member_id, book.id, book.title);
    Ok(())
}

/// Handle a return command
pub fn handle_return(
    library: &mut Library,
    log: Option<&CirculationLog>,
    member_id: u64,
    book_id: u64,
) -> LibrisResult<()> {
    let member_id = MemberId::from_raw(member_id);
    let book_id = BookId::from_raw(book_id);

    let book = CirculationService::new(library).return_book(member_id, book_id)?;

    if let Some(log) = log {
        if let Err(e) = log.record(&LogEntry::return_book(member_id, &book)) {
            eprintln!("Warning: could not record to circulation log: {}", e);
        }
    }

    println!("Member {} returned book {}: {}", member_id, book.id, book.title);
    Ok(())
}

/// Handle the history command: print the most recent log entries
pub fn handle_history(log: &CirculationLog, limit: usize) -> LibrisResult<()> {
    let entries = log.read_recent(limit)?;

    if entries.is_empty() {
        println!("No circulation history.");
        return Ok(());
    }

    for entry in entries {
        println!(
            "{}  {:<10}  {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.operation.to_string(),
            entry.summary
        );
    }

    Ok(())
}
