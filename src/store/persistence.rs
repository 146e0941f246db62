//! Fold-state persistence: one JSON file, read at startup and written at exit.

use super::portable::PortablePaths;
use super::FoldStateStore;
use crate::error::{ApiError, StorageError};
use crate::tree::Snapshot;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// One stored record: portable file path and its snapshot.
///
/// Serialized as a two-element JSON array. Record order in the file is the
/// recency order, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedEntry(pub String, pub Snapshot);

/// Reads and writes a [`FoldStateStore`] at a fixed location.
#[derive(Debug, Clone)]
pub struct FoldStatePersistence {
    location: PathBuf,
    portable: PortablePaths,
    max_history: usize,
}

impl FoldStatePersistence {
    pub fn new(location: PathBuf, max_history: usize) -> Self {
        Self::with_portable(location, max_history, PortablePaths::from_env())
    }

    pub fn with_portable(location: PathBuf, max_history: usize, portable: PortablePaths) -> Self {
        Self {
            location,
            portable,
            max_history: max_history.max(1),
        }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    /// The records `save` would write, oldest first and bounded to the
    /// `max_history` most recent non-empty entries.
    pub fn records(&self, store: &FoldStateStore) -> Vec<PersistedEntry> {
        let entries: Vec<PersistedEntry> = store
            .iter()
            .filter(|(_, snapshot)| !snapshot.is_empty())
            .map(|(key, snapshot)| PersistedEntry(self.portable.collapse(key), snapshot.clone()))
            .collect();
        let skip = entries.len().saturating_sub(self.max_history);
        entries.into_iter().skip(skip).collect()
    }

    /// Overwrite the state file with the store's records.
    ///
    /// Nothing is written when there are no records and no file exists yet; an
    /// existing file is always rewritten so stale state does not survive.
    pub fn save(&self, store: &FoldStateStore) -> Result<(), ApiError> {
        let records = self.records(store);
        if records.is_empty() && !self.location.exists() {
            return Ok(());
        }

        let json = serde_json::to_string(&records).map_err(StorageError::Serialization)?;
        if let Some(parent) = self.location.parent() {
            std::fs::create_dir_all(parent).map_err(StorageError::IoError)?;
        }
        std::fs::write(&self.location, json).map_err(StorageError::IoError)?;

        info!(
            files = records.len(),
            path = %self.location.display(),
            "Saved fold state"
        );
        Ok(())
    }

    /// Rebuild a store from the state file, or an empty store when none exists.
    ///
    /// A file that cannot be parsed is reported as [`StorageError::CorruptRecord`].
    pub fn load(&self) -> Result<FoldStateStore, ApiError> {
        let mut store = FoldStateStore::new(self.max_history);
        if !self.location.exists() {
            return Ok(store);
        }

        let content = std::fs::read(&self.location).map_err(StorageError::IoError)?;
        let records: Vec<PersistedEntry> =
            serde_json::from_slice(&content).map_err(|source| StorageError::CorruptRecord {
                path: self.location.clone(),
                source,
            })?;

        for PersistedEntry(portable, snapshot) in records {
            store.put(self.portable.expand(&portable), snapshot);
        }
        store.evict();

        info!(
            files = store.len(),
            path = %self.location.display(),
            "Loaded fold state"
        );
        Ok(store)
    }

    /// Delete the state file if present
    pub fn clear(&self) -> Result<(), ApiError> {
        if self.location.exists() {
            std::fs::remove_file(&self.location).map_err(StorageError::IoError)?;
        }
        Ok(())
    }
}
