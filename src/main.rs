use anyhow::Result;
use clap::{Parser, Subcommand};

use libris::audit::CirculationLog;
use libris::cli::{
    handle_book_command, handle_borrow, handle_history, handle_member_command, handle_return,
    BookCommands, MemberCommands,
};
use libris::config::{paths::LibrisPaths, settings::Settings};
use libris::storage::SnapshotStore;

#[derive(Parser)]
#[command(
    name = "libris",
    version,
    about = "Terminal-based library circulation tracker",
    long_about = "libris tracks a library's books and members from the command \
                  line: register titles and members, lend and take back books, \
                  search the catalog, and keep the full state in a local snapshot."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Book management commands
    #[command(subcommand)]
    Book(BookCommands),

    /// Member management commands
    #[command(subcommand)]
    Member(MemberCommands),

    /// Lend a book to a member
    Borrow {
        /// Member ID
        member_id: u64,
        /// Book ID
        book_id: u64,
    },
    /// Take a book back from a member
    Return {
        /// Member ID
        member_id: u64,
        /// Book ID
        book_id: u64,
    },

    /// Write the snapshot now
    Save,

    /// Show recent circulation history
    History {
        /// Number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LibrisPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    // Load the snapshot exactly once, before any operation. A missing or
    // unreadable snapshot starts an empty library.
    let store = SnapshotStore::new(paths.snapshot_file());
    let mut library = store.load_or_default()?;

    let circulation_log = CirculationLog::new(paths.circulation_log());
    let log = settings
        .circulation_log_enabled
        .then_some(&circulation_log);

    let needs_save = match cli.command {
        Some(Commands::Book(cmd)) => {
            let mutating = matches!(cmd, BookCommands::Add { .. });
            handle_book_command(&mut library, log, cmd)?;
            mutating
        }
        Some(Commands::Member(cmd)) => {
            let mutating = matches!(cmd, MemberCommands::Add { .. });
            handle_member_command(&mut library, log, cmd)?;
            mutating
        }
        Some(Commands::Borrow { member_id, book_id }) => {
            handle_borrow(&mut library, log, member_id, book_id)?;
            true
        }
        Some(Commands::Return { member_id, book_id }) => {
            handle_return(&mut library, log, member_id, book_id)?;
            true
        }
        Some(Commands::Save) => {
            match store.save(&library) {
                Ok(()) => println!("Snapshot written to {}", store.path().display()),
                Err(e) => eprintln!("Error: could not write snapshot: {}", e),
            }
            false
        }
        Some(Commands::History { limit }) => {
            handle_history(
                &circulation_log,
                limit.unwrap_or(settings.history_default_limit),
            )?;
            false
        }
        Some(Commands::Config) => {
            println!("libris configuration");
            println!("====================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Snapshot file:   {}", paths.snapshot_file().display());
            println!("Circulation log: {}", paths.circulation_log().display());
            println!();
            println!("Settings:");
            println!("  Autosave on exit:  {}", settings.autosave_on_exit);
            println!(
                "  Circulation log:   {}",
                if settings.circulation_log_enabled {
                    "enabled"
                } else {
                    "disabled"
                }
            );
            false
        }
        None => {
            println!("libris - terminal library circulation tracker");
            println!();
            println!("Run 'libris --help' for usage information.");
            false
        }
    };

    // Save on exit after a successful state change. A failed write is
    // reported but never aborts the process; the previous snapshot on disk
    // stays intact.
    if needs_save && settings.autosave_on_exit {
        if let Err(e) = store.save(&library) {
            eprintln!("Warning: could not write snapshot: {}", e);
        }
    }

    Ok(())
}
