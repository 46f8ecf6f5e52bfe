use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::StoreError;

/// One named storage slot holding the serialized watchlist. Injectable so
/// the store can be backed by a file in production and by memory in tests.
pub trait StorageSlot: Send + Sync {
    /// Returns the slot contents, or `None` when nothing was ever written.
    fn read(&self) -> Result<Option<String>, StoreError>;

    /// Replaces the slot contents. Must be durable when it returns `Ok`.
    fn write(&self, contents: &str) -> Result<(), StoreError>;
}

/// File-backed slot. Writes go through a temp file and rename so a crash
/// mid-write cannot leave a truncated list behind.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&self.path)?))
    }

    fn write(&self, contents: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, contents)?;
        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

/// In-memory slot for tests.
#[derive(Default)]
pub struct MemorySlot {
    contents: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds the slot, e.g. with corrupt content.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(Some(contents.into())),
        }
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.contents.lock().expect("slot mutex poisoned").clone())
    }

    fn write(&self, contents: &str) -> Result<(), StoreError> {
        *self.contents.lock().expect("slot mutex poisoned") = Some(contents.to_string());
        Ok(())
    }
}
