//! Per-user progress records.
//!
//! One [`ProgressRecord`] exists per user, keyed by the platform's opaque
//! user id. A record is created exactly once when the user starts the
//! challenge, mutated by the check-in engine and by the savings/journal
//! commands, and never deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel timestamp meaning "never checked in".
fn unix_epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

/// A single private journal entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalEntry {
    /// When the entry was written.
    pub date: DateTime<Utc>,
    /// Full entry text. Display truncation is the rendering layer's job.
    pub entry: String,
}

/// Per-user challenge state.
///
/// Serializes losslessly, including the unlock-key set and the journal
/// sequence; the durable store is a map of user id to this record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressRecord {
    /// Display name, informational only.
    pub username: String,
    /// Instant the challenge began. Immutable after creation.
    pub start_date: DateTime<Utc>,
    /// Most recent accepted check-in. The epoch sentinel means "never".
    #[serde(default = "unix_epoch")]
    pub last_checkin_date: DateTime<Utc>,
    /// Consecutive accepted check-ins with no gap day.
    #[serde(default)]
    pub current_streak_days: u32,
    /// Running maximum of `current_streak_days` ever observed.
    #[serde(default)]
    pub longest_streak_days: u32,
    /// Count of all accepted check-ins ever. Not reset by streak breaks.
    #[serde(default)]
    pub total_days_gambling_free: u32,
    /// Money kept out of gambling, accumulated by the savings command.
    #[serde(default)]
    pub savings: f64,
    /// Reward tier keys already granted, each at most once for the lifetime
    /// of the record. Kept as an ordered list on disk for a stable
    /// representation; membership is what matters.
    #[serde(default)]
    pub rewards_unlocked: Vec<String>,
    /// Append-only private journal, oldest first.
    #[serde(default)]
    pub journal_entries: Vec<JournalEntry>,
}

impl ProgressRecord {
    /// Create a fresh record at challenge start.
    ///
    /// All counters are zero, the unlock set and journal are empty, and the
    /// last check-in date holds the "never" sentinel.
    pub fn new(username: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            username: username.into(),
            start_date: now,
            last_checkin_date: unix_epoch(),
            current_streak_days: 0,
            longest_streak_days: 0,
            total_days_gambling_free: 0,
            savings: 0.0,
            rewards_unlocked: Vec::new(),
            journal_entries: Vec::new(),
        }
    }

    /// True once any check-in has been accepted.
    pub fn has_checked_in(&self) -> bool {
        self.last_checkin_date > unix_epoch()
    }

    /// 1-indexed ordinal day of the challenge at `now`.
    ///
    /// Compares date components only, so time-of-day skew between the start
    /// instant and `now` cannot shift the day count.
    pub fn challenge_day(&self, now: DateTime<Utc>) -> i64 {
        (now.date_naive() - self.start_date.date_naive()).num_days() + 1
    }

    /// True if the reward tier `key` has already been granted.
    pub fn has_reward(&self, key: &str) -> bool {
        self.rewards_unlocked.iter().any(|k| k == key)
    }

    /// Record a granted reward key. A key already present is not duplicated.
    pub(crate) fn grant_reward(&mut self, key: String) {
        if !self.has_reward(&key) {
            self.rewards_unlocked.push(key);
        }
    }

    /// Read-only stats projection for display.
    pub fn snapshot(&self, now: DateTime<Utc>) -> Snapshot {
        Snapshot {
            challenge_day: self.challenge_day(now),
            current_streak_days: self.current_streak_days,
            longest_streak_days: self.longest_streak_days,
            total_days_gambling_free: self.total_days_gambling_free,
            savings: self.savings,
        }
    }
}

/// Read-only projection of a record for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    /// 1-indexed day of the challenge.
    pub challenge_day: i64,
    /// Current streak in days.
    pub current_streak_days: u32,
    /// Longest streak ever observed.
    pub longest_streak_days: u32,
    /// All accepted check-ins ever.
    pub total_days_gambling_free: u32,
    /// Accumulated savings.
    pub savings: f64,
}
