//! Snapshot persistence for the full library state
//!
//! The snapshot is a single JSON document holding the book list, the member
//! list, and both id counters, in that order. Saving is an atomic overwrite;
//! loading distinguishes "no snapshot yet" from a loaded state, and degrades
//! an unreadable or unparseable file to "no snapshot" so a bad file never
//! aborts startup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{LibrisError, LibrisResult};
use crate::models::{Book, BookId, Member, MemberId};
use crate::store::{Catalog, Library, Roster};

use super::file_io::{read_json, write_json_atomic};

/// The persisted full-state record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    books: Vec<Book>,
    members: Vec<Member>,
    book_counter: BookId,
    member_counter: MemberId,
}

impl Snapshot {
    /// Capture the current session state
    pub fn capture(library: &Library) -> Self {
        Self {
            books: library.catalog.list().to_vec(),
            members: library.roster.list().to_vec(),
            book_counter: library.catalog.next_id(),
            member_counter: library.roster.next_id(),
        }
    }

    /// Rebuild a library from this snapshot, restoring both counters exactly
    pub fn restore(self) -> Library {
        Library::from_parts(
            Catalog::from_parts(self.books, self.book_counter),
            Roster::from_parts(self.members, self.member_counter),
        )
    }
}

/// Result of attempting to load a snapshot
#[derive(Debug)]
pub enum LoadOutcome {
    /// A snapshot was found and restored
    Loaded(Library),
    /// No usable snapshot on disk; start with an empty library
    NoSnapshot,
}

/// Reads and writes the snapshot file
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store over the given snapshot path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Whether a snapshot file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Persist the full library state.
    ///
    /// Atomic from the caller's perspective: either the new snapshot replaces
    /// the old one completely, or the old one is left untouched.
    pub fn save(&self, library: &Library) -> LibrisResult<()> {
        write_json_atomic(&self.path, &Snapshot::capture(library))
    }

    /// Load the snapshot, if there is one.
    ///
    /// A missing file yields `NoSnapshot`. A file that exists but cannot be
    /// read or parsed also yields `NoSnapshot`, with a warning on stderr:
    /// corrupt state degrades to an empty start rather than a crash.
    pub fn load(&self) -> LibrisResult<LoadOutcome> {
        if !self.path.exists() {
            return Ok(LoadOutcome::NoSnapshot);
        }

        match read_json::<Snapshot, _>(&self.path) {
            Ok(snapshot) => Ok(LoadOutcome::Loaded(snapshot.restore())),
            Err(LibrisError::Storage(reason)) => {
                eprintln!("Warning: ignoring unreadable snapshot: {}", reason);
                Ok(LoadOutcome::NoSnapshot)
            }
            Err(other) => Err(other),
        }
    }

    /// Load the snapshot, falling back to an empty library
    pub fn load_or_default(&self) -> LibrisResult<Library> {
        Ok(match self.load()? {
            LoadOutcome::Loaded(library) => library,
            LoadOutcome::NoSnapshot => Library::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::CirculationService;
    use tempfile::TempDir;

    fn store_in(temp_dir: &TempDir) -> SnapshotStore {
        SnapshotStore::new(temp_dir.path().join("library.json"))
    }

    #[test]
    fn test_load_missing_is_no_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        assert!(!store.exists());
        assert!(matches!(store.load().unwrap(), LoadOutcome::NoSnapshot));
    }

    #[test]
    fn test_round_trip_preserves_everything() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        let mut library = Library::new();
        let book_id = library.catalog.add("Dune", "Herbert").id;
        library.catalog.add("Hyperion", "Simmons");
        let member_id = library.roster.add("Alice").id;
        library.roster.add("Bob");
        CirculationService::new(&mut library)
            .borrow(member_id, book_id)
            .unwrap();

        store.save(&library).unwrap();

        let loaded = match store.load().unwrap() {
            LoadOutcome::Loaded(l) => l,
            LoadOutcome::NoSnapshot => panic!("expected a snapshot"),
        };

        assert_eq!(loaded.catalog.list(), library.catalog.list());
        assert_eq!(loaded.roster.list(), library.roster.list());
        assert_eq!(loaded.catalog.next_id(), library.catalog.next_id());
        assert_eq!(loaded.roster.next_id(), library.roster.next_id());
        assert!(loaded.catalog.find_by_id(book_id).unwrap().borrowed);
    }

    #[test]
    fn test_counters_survive_reload() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        let mut library = Library::new();
        library.catalog.add("Dune", "Herbert");
        library.roster.add("Alice");
        store.save(&library).unwrap();

        let mut reloaded = store.load_or_default().unwrap();

        // IDs continue the original sequences after a reload
        assert_eq!(
            reloaded.catalog.add("Hyperion", "Simmons").id,
            BookId::from_raw(2)
        );
        assert_eq!(reloaded.roster.add("Bob").id, MemberId::from_raw(2));
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        let mut library = Library::new();
        library.catalog.add("Dune", "Herbert");
        store.save(&library).unwrap();

        library.catalog.add("Hyperion", "Simmons");
        store.save(&library).unwrap();

        let reloaded = store.load_or_default().unwrap();
        assert_eq!(reloaded.catalog.len(), 2);
    }

    #[test]
    fn test_corrupt_snapshot_degrades_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        std::fs::write(store.path(), "{ definitely not a snapshot").unwrap();

        assert!(matches!(store.load().unwrap(), LoadOutcome::NoSnapshot));

        let library = store.load_or_default().unwrap();
        assert!(library.catalog.is_empty());
        assert_eq!(library.catalog.next_id(), BookId::from_raw(1));
    }

    #[test]
    fn test_snapshot_field_order() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        let mut library = Library::new();
        library.catalog.add("Dune", "Herbert");
        store.save(&library).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let books_at = raw.find("\"books\"").unwrap();
        let members_at = raw.find("\"members\"").unwrap();
        let book_counter_at = raw.find("\"book_counter\"").unwrap();
        let member_counter_at = raw.find("\"member_counter\"").unwrap();

        assert!(books_at < members_at);
        assert!(members_at < book_counter_at);
        assert!(book_counter_at < member_counter_at);
    }
}
