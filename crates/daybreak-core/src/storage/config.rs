//! TOML-based application configuration.
//!
//! Stores operator preferences:
//! - Currency symbol for savings display
//! - Journal window size and per-entry display cap
//! - Reward catalog location and selection seed
//!
//! Configuration is stored at `<data_dir>/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::{ConfigError, CoreError};

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Symbol prefixed to savings amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

/// Journal display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    /// How many entries the recent-entries view shows by default.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    /// Display cap per entry, in characters. Stored entries keep full text.
    #[serde(default = "default_entry_display_chars")]
    pub entry_display_chars: usize,
}

/// Reward evaluation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardsConfig {
    /// Path to the reward catalog JSON. Relative paths resolve against the
    /// data directory.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
    /// Seed for reward candidate selection (None = entropy).
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub journal: JournalConfig,
    #[serde(default)]
    pub rewards: RewardsConfig,
}

// Default functions
fn default_currency_symbol() -> String {
    "$".into()
}
fn default_recent_limit() -> usize {
    5
}
fn default_entry_display_chars() -> usize {
    1000
}
fn default_catalog_path() -> String {
    "rewards_config.json".into()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
            entry_display_chars: default_entry_display_chars(),
        }
    }
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            seed: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            journal: JournalConfig::default(),
            rewards: RewardsConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, CoreError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or
    /// if the default config cannot be written to disk.
    pub fn load() -> Result<Self, CoreError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
                    path,
                    message: e.to_string(),
                })?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, falling back to defaults on any failure.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), CoreError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Absolute path to the reward catalog; relative paths resolve against
    /// the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be resolved.
    pub fn catalog_path(&self) -> Result<PathBuf, CoreError> {
        let configured = PathBuf::from(&self.rewards.catalog_path);
        if configured.is_absolute() {
            Ok(configured)
        } else {
            Ok(data_dir()?.join(configured))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.display.currency_symbol, "$");
        assert_eq!(cfg.journal.recent_limit, 5);
        assert_eq!(cfg.journal.entry_display_chars, 1000);
        assert_eq!(cfg.rewards.catalog_path, "rewards_config.json");
        assert_eq!(cfg.rewards.seed, None);
    }

    #[test]
    fn test_partial_toml_fills_missing_fields() {
        let cfg: Config = toml::from_str(
            r#"
            [display]
            currency_symbol = "£"

            [rewards]
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(cfg.display.currency_symbol, "£");
        assert_eq!(cfg.rewards.seed, Some(42));
        assert_eq!(cfg.journal.recent_limit, 5);
    }

    #[test]
    fn test_toml_round_trip() {
        let cfg = Config::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.display.currency_symbol, cfg.display.currency_symbol);
        assert_eq!(back.journal.recent_limit, cfg.journal.recent_limit);
        assert_eq!(back.rewards.catalog_path, cfg.rewards.catalog_path);
    }
}
