//! Book CLI commands
//!
//! Bridges clap argument parsing with catalog operations.

use clap::Subcommand;

use crate::audit::{CirculationLog, LogEntry};
use crate::display::{format_book_details, format_book_list};
use crate::error::{LibrisError, LibrisResult};
use crate::models::BookId;
use crate::store::Library;

/// Book subcommands
#[derive(Subcommand)]
pub enum BookCommands {
    /// Add a book to the catalog
    Add {
        /// Book title
        title: String,
        /// Author name
        author: String,
    },
    /// List all books
    List,
    /// Search books by keyword (matches title or author, case-insensitive)
    Search {
        /// Keyword to search for; empty matches every book
        keyword: String,
    },
    /// Show one book's details
    Show {
        /// Book ID
        id: u64,
    },
}

/// Handle a book command
pub fn handle_book_command(
    library: &mut Library,
    log: Option<&CirculationLog>,
    cmd: BookCommands,
) -> LibrisResult<()> {
    match cmd {
        BookCommands::Add { title, author } => {
            let book = library.catalog.add(title, author);

            if let Some(log) = log {
                if let Err(e) = log.record(&LogEntry::add_book(&book)) {
                    eprintln!("Warning: could not record to circulation log: {}", e);
                }
            }

            println!("Added book {}: {} by {}", book.id, book.title, book.author);
        }

        BookCommands::List => {
            let books: Vec<_> = library.catalog.list().iter().collect();
            print!("{}", format_book_list(&books));
        }

        BookCommands::Search { keyword } => {
            let results = library.catalog.search(&keyword);
            print!("{}", format_book_list(&results));
        }

        BookCommands::Show { id } => {
            let book = library
                .catalog
                .find_by_id(BookId::from_raw(id))
                .ok_or_else(|| LibrisError::book_not_found(id.to_string()))?;
            print!("{}", format_book_details(book));
        }
    }

    Ok(())
}
