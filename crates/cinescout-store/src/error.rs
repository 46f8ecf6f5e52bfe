use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying storage could not be read or written (missing
    /// directory, quota, permissions).
    #[error("watchlist storage unavailable: {0}")]
    Persistence(#[from] std::io::Error),

    /// The collection could not be serialized for writing. Unreadable
    /// persisted content is not an error; it loads as an empty list.
    #[error("watchlist serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
