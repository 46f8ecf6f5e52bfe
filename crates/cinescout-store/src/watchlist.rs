use std::sync::Mutex;

use cinescout_models::MovieRecord;
use tracing::warn;

use crate::error::StoreError;
use crate::slot::StorageSlot;

/// Single source of truth for "movies to watch later".
///
/// Logically a set keyed by movie id, physically an insertion-ordered list
/// serialized as JSON into one storage slot. Every successful mutation is
/// persisted in full before it returns, so the next `load` within the same
/// process always observes it. One instance per process, shared by
/// reference.
pub struct WatchlistStore {
    slot: Box<dyn StorageSlot>,
    entries: Mutex<Vec<MovieRecord>>,
}

impl WatchlistStore {
    /// Opens the store over a slot, reading the persisted collection once.
    /// An absent, empty, or unparseable slot loads as an empty list, never
    /// an error.
    pub fn open(slot: impl StorageSlot + 'static) -> Self {
        let entries = match slot.read() {
            Ok(Some(raw)) if !raw.trim().is_empty() => {
                match serde_json::from_str::<Vec<MovieRecord>>(&raw) {
                    Ok(list) => list,
                    Err(e) => {
                        warn!(error = %e, "watchlist slot unreadable, starting empty");
                        Vec::new()
                    }
                }
            }
            Ok(_) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "watchlist slot could not be read, starting empty");
                Vec::new()
            }
        };

        Self {
            slot: Box::new(slot),
            entries: Mutex::new(entries),
        }
    }

    /// The full collection in insertion order. Callers get copies, never
    /// references into the store's own state.
    pub fn load(&self) -> Vec<MovieRecord> {
        self.entries().clone()
    }

    /// Saves a movie if no entry with the same id exists. Returns whether an
    /// insertion actually happened; re-adding a present id is a no-op that
    /// never refreshes the stored copy. Persists before returning, and rolls
    /// the insert back if the write fails.
    pub fn add(&self, movie: MovieRecord) -> Result<bool, StoreError> {
        let mut entries = self.entries();
        if entries.iter().any(|m| m.id == movie.id) {
            return Ok(false);
        }

        entries.push(movie);
        if let Err(e) = persist(self.slot.as_ref(), entries.as_slice()) {
            entries.pop();
            return Err(e);
        }
        Ok(true)
    }

    /// Removes the entry with this id if present; absent ids are a no-op
    /// (and issue no write). Returns whether an entry was removed.
    pub fn remove(&self, id: u64) -> Result<bool, StoreError> {
        let mut entries = self.entries();
        let Some(pos) = entries.iter().position(|m| m.id == id) else {
            return Ok(false);
        };

        let removed = entries.remove(pos);
        if let Err(e) = persist(self.slot.as_ref(), entries.as_slice()) {
            entries.insert(pos, removed);
            return Err(e);
        }
        Ok(true)
    }

    /// Membership check from in-memory state; lets callers short-circuit
    /// work (like a catalog lookup) for an id that is already saved.
    pub fn contains(&self, id: u64) -> bool {
        self.entries().iter().any(|m| m.id == id)
    }

    /// Collection size from in-memory state; no deserialization round-trip.
    pub fn count(&self) -> usize {
        self.entries().len()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, Vec<MovieRecord>> {
        self.entries.lock().expect("watchlist mutex poisoned")
    }
}

fn persist(slot: &dyn StorageSlot, entries: &[MovieRecord]) -> Result<(), StoreError> {
    let raw = serde_json::to_string(entries)?;
    slot.write(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::{FileSlot, MemorySlot};

    fn movie(id: u64, title: &str) -> MovieRecord {
        MovieRecord {
            id,
            title: title.to_string(),
            poster_path: Some(format!("/poster-{id}.jpg")),
            backdrop_path: None,
            overview: "An overview".to_string(),
            vote_average: 7.3,
            release_date: "2021-06-01".to_string(),
            genres: None,
            runtime: None,
        }
    }

    #[test]
    fn add_is_idempotent_per_id() {
        let store = WatchlistStore::open(MemorySlot::new());

        assert!(store.add(movie(1, "Dune")).unwrap());
        assert!(!store.add(movie(1, "Dune")).unwrap());
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn re_adding_never_refreshes_stored_fields() {
        let store = WatchlistStore::open(MemorySlot::new());

        store.add(movie(1, "Original Title")).unwrap();
        let mut updated = movie(1, "Renamed Title");
        updated.vote_average = 9.9;
        assert!(!store.add(updated).unwrap());

        let loaded = store.load();
        assert_eq!(loaded[0].title, "Original Title");
        assert!((loaded[0].vote_average - 7.3).abs() < f64::EPSILON);
    }

    #[test]
    fn remove_of_absent_id_is_a_noop() {
        let store = WatchlistStore::open(MemorySlot::new());
        store.add(movie(1, "Dune")).unwrap();

        let before = store.load();
        assert!(!store.remove(42).unwrap());
        assert_eq!(store.load(), before);
    }

    #[test]
    fn load_after_add_preserves_all_fields() {
        let store = WatchlistStore::open(MemorySlot::new());
        let saved = movie(27205, "Inception");

        store.add(saved.clone()).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0], saved);
    }

    #[test]
    fn load_after_remove_drops_the_entry() {
        let store = WatchlistStore::open(MemorySlot::new());
        store.add(movie(1, "Dune")).unwrap();
        store.add(movie(2, "Arrival")).unwrap();

        assert!(store.remove(1).unwrap());
        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert!(!loaded.iter().any(|m| m.id == 1));
        assert!(!store.contains(1));
    }

    #[test]
    fn contains_reflects_adds_and_removes() {
        let store = WatchlistStore::open(MemorySlot::new());
        assert!(!store.contains(1));

        store.add(movie(1, "Dune")).unwrap();
        assert!(store.contains(1));
        assert!(!store.contains(2));

        store.remove(1).unwrap();
        assert!(!store.contains(1));
    }

    #[test]
    fn preserves_insertion_order() {
        let store = WatchlistStore::open(MemorySlot::new());
        store.add(movie(3, "Third")).unwrap();
        store.add(movie(1, "First")).unwrap();
        store.add(movie(2, "Second")).unwrap();

        let ids: Vec<u64> = store.load().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn survives_a_reopen_over_the_same_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("watchlist.json");

        let store = WatchlistStore::open(FileSlot::new(&path));
        store.add(movie(1, "Dune")).unwrap();
        store.add(movie(2, "Arrival")).unwrap();
        drop(store);

        let reopened = WatchlistStore::open(FileSlot::new(&path));
        let loaded = reopened.load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0], movie(1, "Dune"));
        assert_eq!(loaded[1], movie(2, "Arrival"));
    }

    #[test]
    fn corrupt_slot_loads_as_empty() {
        let store = WatchlistStore::open(MemorySlot::with_contents("definitely not json"));
        assert!(store.load().is_empty());
        assert_eq!(store.count(), 0);

        // The store still works after recovering from corruption.
        assert!(store.add(movie(1, "Dune")).unwrap());
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("watchlist.json");
        std::fs::write(&path, "{ not a list ]").unwrap();

        let store = WatchlistStore::open(FileSlot::new(&path));
        assert!(store.load().is_empty());
    }

    struct FailingSlot;

    impl StorageSlot for FailingSlot {
        fn read(&self) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn write(&self, _contents: &str) -> Result<(), StoreError> {
            Err(StoreError::Persistence(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk full",
            )))
        }
    }

    #[test]
    fn failed_write_rolls_back_the_add() {
        let store = WatchlistStore::open(FailingSlot);

        let result = store.add(movie(1, "Dune"));
        assert!(matches!(result, Err(StoreError::Persistence(_))));
        assert_eq!(store.count(), 0);
        assert!(store.load().is_empty());
    }
}
