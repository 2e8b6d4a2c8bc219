//! Local persistence for the promotion's collections.
//!
//! The store is the Rust rendition of the original client-side key-value
//! storage: three independent JSON documents, one per collection, read in
//! full at the start of an operation and written back in full afterwards.
//! The backend is injected so the domain managers never touch ambient
//! storage directly.

pub mod backend;
pub mod config;
pub mod errors;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use config::StoreConfig;
pub use errors::{StoreError, StoreResult};

use crate::roster::Competitor;
use crate::title::{Title, default_championships};
use crate::tournament::Tournament;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Collection key for competitor records
pub const WRESTLERS_KEY: &str = "wrestlers";
/// Collection key for championship records
pub const CHAMPIONSHIPS_KEY: &str = "championships";
/// Collection key for saved tournaments
pub const TOURNAMENTS_KEY: &str = "tournaments";

/// Typed access to the persisted collections.
///
/// Cheaply cloneable; clones share the underlying backend.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StorageBackend>,
}

impl Store {
    /// Create a store over an injected backend
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Open a file-backed store at the configured data directory
    pub fn open(config: &StoreConfig) -> Self {
        Self::new(Arc::new(FileBackend::new(config.data_dir.clone())))
    }

    /// Create an in-memory store (tests, ephemeral sessions)
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Vec<T>> {
        match self.backend.read(key)? {
            Some(document) => Ok(serde_json::from_str(&document)?),
            None => Ok(Vec::new()),
        }
    }

    fn save<T: Serialize>(&self, key: &str, records: &[T]) -> StoreResult<()> {
        let document = serde_json::to_string(records)?;
        self.backend.write(key, &document)
    }

    /// Load the competitor roster
    pub fn load_wrestlers(&self) -> StoreResult<Vec<Competitor>> {
        self.load(WRESTLERS_KEY)
    }

    /// Replace the competitor roster
    pub fn save_wrestlers(&self, wrestlers: &[Competitor]) -> StoreResult<()> {
        self.save(WRESTLERS_KEY, wrestlers)
    }

    /// Load the championship collection
    pub fn load_championships(&self) -> StoreResult<Vec<Title>> {
        self.load(CHAMPIONSHIPS_KEY)
    }

    /// Replace the championship collection
    pub fn save_championships(&self, championships: &[Title]) -> StoreResult<()> {
        self.save(CHAMPIONSHIPS_KEY, championships)
    }

    /// Load the saved tournaments
    pub fn load_tournaments(&self) -> StoreResult<Vec<Tournament>> {
        self.load(TOURNAMENTS_KEY)
    }

    /// Replace the saved tournaments
    pub fn save_tournaments(&self, tournaments: &[Tournament]) -> StoreResult<()> {
        self.save(TOURNAMENTS_KEY, tournaments)
    }

    /// Seed default data for collections that have never been written.
    ///
    /// Only an absent championships document triggers seeding; a present
    /// but empty collection is left alone so deliberate deletions stick.
    pub fn initialize_defaults(&self) -> StoreResult<()> {
        if self.backend.read(CHAMPIONSHIPS_KEY)?.is_none() {
            log::info!("Seeding default championships");
            self.save_championships(&default_championships())?;
        }
        Ok(())
    }
}
