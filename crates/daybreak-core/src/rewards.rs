//! Reward catalog: tiered reward definitions per cadence.
//!
//! The catalog is supplied at process start and treated as immutable for the
//! duration of a run. Tier keys encode either an absolute challenge day
//! (`day_12`) or a multiplier against a fixed streak period (`week_2`,
//! `month_1`, `year_1`). Which tier unlocks is deterministic; only the
//! candidate text chosen from a tier's pool is random, and the RNG is
//! injected by the caller.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A pool of candidate reward texts for one tier.
///
/// Catalog files may give either a single string or a list; one candidate is
/// chosen at random per unlock event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RewardPool {
    One(String),
    Many(Vec<String>),
}

impl RewardPool {
    /// Pick one candidate. Returns `None` for an empty pool.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        match self {
            RewardPool::One(text) => Some(text.as_str()),
            RewardPool::Many(candidates) => candidates.choose(rng).map(String::as_str),
        }
    }

    /// Number of candidates in the pool.
    pub fn len(&self) -> usize {
        match self {
            RewardPool::One(_) => 1,
            RewardPool::Many(candidates) => candidates.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Streak cadences evaluated against `current_streak_days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    Weekly,
    Monthly,
    Yearly,
}

impl Cadence {
    /// Fixed evaluation order: weekly, then monthly, then yearly.
    pub const ALL: [Cadence; 3] = [Cadence::Weekly, Cadence::Monthly, Cadence::Yearly];

    /// Period length in days the tier multiplier applies to.
    pub fn period_days(self) -> u32 {
        match self {
            Cadence::Weekly => 7,
            Cadence::Monthly => 30,
            Cadence::Yearly => 365,
        }
    }

    /// Label used in unlock messages ("Week 2: ...").
    pub fn label(self) -> &'static str {
        match self {
            Cadence::Weekly => "Week",
            Cadence::Monthly => "Month",
            Cadence::Yearly => "Year",
        }
    }
}

/// Immutable reward tier definitions, one tier map per cadence.
///
/// The field names mirror the on-disk JSON document:
///
/// ```json
/// {
///   "daily_rewards":  { "day_3":  ["a hot bath", "an early night"] },
///   "weekly_rewards": { "week_1": "order your favourite takeaway" },
///   "monthly_rewards": {}, "yearly_rewards": {}
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RewardCatalog {
    #[serde(default)]
    pub daily_rewards: HashMap<String, RewardPool>,
    #[serde(default)]
    pub weekly_rewards: HashMap<String, RewardPool>,
    #[serde(default)]
    pub monthly_rewards: HashMap<String, RewardPool>,
    #[serde(default)]
    pub yearly_rewards: HashMap<String, RewardPool>,
}

impl RewardCatalog {
    /// Load the catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed. Malformed tier
    /// keys inside a parseable file are not errors; see [`Self::validate`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|e| CatalogError::ParseFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from a JSON file, falling back to an empty catalog when the file
    /// is missing, unreadable, or corrupt.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Tier map for one streak cadence.
    pub fn streak_tiers(&self, cadence: Cadence) -> &HashMap<String, RewardPool> {
        match cadence {
            Cadence::Weekly => &self.weekly_rewards,
            Cadence::Monthly => &self.monthly_rewards,
            Cadence::Yearly => &self.yearly_rewards,
        }
    }

    /// Candidates for an absolute challenge day, if the catalog defines any.
    pub fn daily_tier(&self, challenge_day: i64) -> Option<(String, &RewardPool)> {
        let key = format!("day_{challenge_day}");
        self.daily_rewards.get(&key).map(|pool| (key, pool))
    }

    /// Tier keys with no parseable numeric suffix, across all cadences.
    ///
    /// These tiers are skipped during evaluation; they surface here so the
    /// operator can be warned. Never fatal.
    pub fn validate(&self) -> Vec<String> {
        let mut malformed: Vec<String> = self
            .daily_rewards
            .keys()
            .chain(self.weekly_rewards.keys())
            .chain(self.monthly_rewards.keys())
            .chain(self.yearly_rewards.keys())
            .filter(|key| tier_multiplier(key).is_none())
            .cloned()
            .collect();
        malformed.sort();
        malformed
    }

    /// Total number of defined tiers across all cadences.
    pub fn tier_count(&self) -> usize {
        self.daily_rewards.len()
            + self.weekly_rewards.len()
            + self.monthly_rewards.len()
            + self.yearly_rewards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tier_count() == 0
    }
}

/// Parse the numeric suffix of a tier key such as `week_2` or `day_10`.
///
/// Returns `None` for keys with no parseable suffix; the engine skips those
/// tiers and continues.
pub(crate) fn tier_multiplier(key: &str) -> Option<u32> {
    key.rsplit('_').next()?.parse().ok()
}
