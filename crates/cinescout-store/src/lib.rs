//! Locally persisted watchlist: a set of saved movies keyed by id, rewritten
//! in full on every mutation so the next load always sees the last successful
//! write.

mod error;
mod slot;
mod watchlist;

pub use error::StoreError;
pub use slot::{FileSlot, MemorySlot, StorageSlot};
pub use watchlist::WatchlistStore;
