//! Storage backend trait and implementations.
//!
//! The trait-based abstraction keeps the rest of the crate independent of
//! where collection documents actually live, enabling in-memory stores for
//! tests and dependency injection at the application layer.

use super::errors::StoreResult;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A key-value backend holding one JSON document per collection key.
///
/// Reads and writes are whole-document and synchronous; the last write
/// wins. Implementations must treat an absent key as `None` rather than
/// an error.
pub trait StorageBackend: Send + Sync {
    /// Read the document stored under `key`, if any
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the document stored under `key`
    fn write(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// Filesystem backend: one `<key>.json` file per collection under a data
/// directory.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `dir`. The directory is created lazily
    /// on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Directory this backend stores documents in
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.document_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.document_path(key), value)?;
        Ok(())
    }
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.lock().expect("backend lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock().expect("backend lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
