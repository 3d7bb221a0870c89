//! JSON-backed user progress store.
//!
//! One document maps user id to [`ProgressRecord`]. Loads are best-effort:
//! a missing or corrupt file yields an empty map so the system starts fresh
//! rather than halting. Saves write a temporary file next to the target and
//! rename it into place, so a crash mid-write never corrupts previously
//! durable data.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::progress::ProgressRecord;

/// Mapping of user id to record, as persisted.
///
/// A BTreeMap keeps the serialized document key-ordered, so saving an
/// unmodified load reproduces the same bytes.
pub type UserMap = BTreeMap<String, ProgressRecord>;

/// Durable store for all users' progress records.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    /// Store at the default location (`<data_dir>/users.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self {
            path: super::data_dir()?.join("users.json"),
        })
    }

    /// Store at an explicit path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records. Missing, unreadable, or corrupt state yields an
    /// empty map.
    pub fn load(&self) -> UserMap {
        match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => UserMap::new(),
        }
    }

    /// Persist the full mapping: write a temp file, then rename over the
    /// target.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temp write, or the rename
    /// fails. The previously durable document is intact in every case.
    pub fn save(&self, users: &UserMap) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(users)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|source| StorageError::WriteFailed {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StorageError::ReplaceFailed {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}
