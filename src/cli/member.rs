//! Member CLI commands
//!
//! Bridges clap argument parsing with roster operations.

use clap::Subcommand;

use crate::audit::{CirculationLog, LogEntry};
use crate::display::{format_member_details, format_member_list};
use crate::error::{LibrisError, LibrisResult};
use crate::models::MemberId;
use crate::store::Library;

/// Member subcommands
#[derive(Subcommand)]
pub enum MemberCommands {
    /// Register a new member
    Add {
        /// Member name
        name: String,
    },
    /// List all members
    List,
    /// Show one member's details, with borrowed titles resolved
    Show {
        /// Member ID
        id: u64,
    },
}

/// Handle a member command
pub fn handle_member_command(
    library: &mut Library,
    log: Option<&CirculationLog>,
    cmd: MemberCommands,
) -> LibrisResult<()> {
    match cmd {
        MemberCommands::Add { name } => {
            let member = library.roster.add(name);

            if let Some(log) = log {
                if let Err(e) = log.record(&LogEntry::add_member(&member)) {
                    eprintln!("Warning: could not record to circulation log: {}", e);
                }
            }

            println!("Registered member {}: {}", member.id, member.name);
        }

        MemberCommands::List => {
            print!("{}", format_member_list(library.roster.list()));
        }

        MemberCommands::Show { id } => {
            let member = library
                .roster
                .find_by_id(MemberId::from_raw(id))
                .ok_or_else(|| LibrisError::member_not_found(id.to_string()))?;
            print!("{}", format_member_details(member, &library.catalog));
        }
    }

    Ok(())
}
