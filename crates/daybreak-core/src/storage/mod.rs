//! Durable state: user progress store and application configuration.

mod config;
mod store;

pub use config::Config;
pub use store::{ProgressStore, UserMap};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/daybreak[-dev]/` based on DAYBREAK_ENV.
///
/// Set DAYBREAK_ENV=dev to use the development data directory.
/// DAYBREAK_DATA_DIR overrides the location entirely, for tests and for
/// deployments where a volume is mounted at a fixed path.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var("DAYBREAK_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("DAYBREAK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("daybreak-dev")
            } else {
                base_dir.join("daybreak")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::CreateDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
