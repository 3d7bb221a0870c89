//! Core error types for daybreak-core.
//!
//! This module defines the error hierarchy using thiserror. Expected
//! challenge outcomes ("already checked in", "not started") live in
//! [`ChallengeError`] and are ordinary result values the caller renders
//! differently -- they are never raised as panics.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Core error type for daybreak-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Challenge-flow outcomes (not started, already started, already
    /// checked in, bad savings amount)
    #[error("{0}")]
    Challenge(#[from] ChallengeError),

    /// Durable-store errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reward catalog errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Expected outcomes of challenge operations.
///
/// Every variant here is hit in normal operation. `AlreadyCheckedInToday`
/// in particular fires on every repeat check-in and must leave the record
/// untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChallengeError {
    /// Operation referenced a user with no progress record.
    #[error("no challenge started for user '{user_id}'")]
    NotStarted { user_id: String },

    /// Start requested for a user who already has a record.
    #[error("challenge already started for user '{user_id}'")]
    AlreadyStarted { user_id: String },

    /// A check-in was already accepted on this calendar date.
    #[error("already checked in on {date}")]
    AlreadyCheckedInToday { date: NaiveDate },

    /// Savings amounts must be strictly positive.
    #[error("savings amount must be positive, got {amount}")]
    NonPositiveAmount { amount: f64 },
}

/// Durable-store errors.
///
/// Load failures are not represented here: a missing or corrupt store reads
/// as an empty map so the system starts fresh instead of halting.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to create or resolve the data directory
    #[error("Failed to create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the temporary store file failed
    #[error("Failed to write store at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Renaming the temporary file over the store failed
    #[error("Failed to replace store at {path}: {source}")]
    ReplaceFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the user map failed
    #[error("Failed to serialize store: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse configuration from {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },
}

/// Reward catalog errors.
///
/// These only fire on an explicit `load`; `load_or_default` swallows them
/// and yields an empty catalog. Malformed tier keys are never an error --
/// they surface as warnings from `RewardCatalog::validate`.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Reading the catalog file failed
    #[error("Failed to read reward catalog at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parsing the catalog JSON failed
    #[error("Failed to parse reward catalog at {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
