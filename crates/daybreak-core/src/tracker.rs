//! Recovery tracker facade.
//!
//! Owns the loaded user map, the durable store, and the reward catalog, and
//! funnels every mutation through one sequential apply-then-persist step.
//! There are no internal threads or locks: operations take `&mut self`, so a
//! caller that serializes access (one tracker per process, or a mutex around
//! it) gets the per-user exclusion the check-in path requires. Operations
//! for different users are independent beyond sharing that single writer.
//!
//! A failed save surfaces as [`CoreError::Storage`] with the mutation still
//! applied in memory; the in-memory map stays authoritative and the next
//! successful save persists the pending state.

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;

use crate::checkin::{self, CheckinSuccess};
use crate::error::{ChallengeError, CoreError};
use crate::journal;
use crate::progress::{JournalEntry, ProgressRecord, Snapshot};
use crate::rewards::RewardCatalog;
use crate::storage::{ProgressStore, UserMap};

/// Service facade over the progress store and the check-in engine.
pub struct RecoveryTracker {
    store: ProgressStore,
    users: UserMap,
    catalog: RewardCatalog,
    rng: Mcg128Xsl64,
}

impl RecoveryTracker {
    /// Open the tracker over the default store location.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open(catalog: RewardCatalog) -> Result<Self, CoreError> {
        Ok(Self::with_store(ProgressStore::open()?, catalog, None))
    }

    /// Tracker over an explicit store, with an optional reward-selection
    /// seed (None = entropy).
    pub fn with_store(store: ProgressStore, catalog: RewardCatalog, seed: Option<u64>) -> Self {
        let users = store.load();
        let rng = match seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        };
        Self {
            store,
            users,
            catalog,
            rng,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn record(&self, user_id: &str) -> Option<&ProgressRecord> {
        self.users.get(user_id)
    }

    /// Read-only stats projection for display.
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError::NotStarted`] if the user has no record.
    pub fn snapshot(&self, user_id: &str, now: DateTime<Utc>) -> Result<Snapshot, ChallengeError> {
        Ok(self.require(user_id)?.snapshot(now))
    }

    /// The last `limit` journal entries, oldest first, full text.
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError::NotStarted`] if the user has no record.
    pub fn journal_recent(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<&[JournalEntry], ChallengeError> {
        Ok(journal::recent(self.require(user_id)?, limit))
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Start the challenge for a user.
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError::AlreadyStarted`] if a record exists.
    pub fn start(
        &mut self,
        user_id: &str,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<&ProgressRecord, CoreError> {
        if self.users.contains_key(user_id) {
            return Err(ChallengeError::AlreadyStarted {
                user_id: user_id.to_string(),
            }
            .into());
        }
        self.users
            .insert(user_id.to_string(), ProgressRecord::new(username, now));
        self.persist()?;
        Ok(self.require(user_id)?)
    }

    /// Process a check-in attempt and persist the result.
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError::NotStarted`] or
    /// [`ChallengeError::AlreadyCheckedInToday`] (record untouched), or
    /// [`CoreError::Storage`] when the accepted check-in could not be saved
    /// (the mutation stays applied in memory).
    pub fn check_in(&mut self, user_id: &str, now: DateTime<Utc>) -> Result<CheckinSuccess, CoreError> {
        let record = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| ChallengeError::NotStarted {
                user_id: user_id.to_string(),
            })?;
        let success = checkin::process_checkin(record, now, &self.catalog, &mut self.rng)?;
        self.persist()?;
        Ok(success)
    }

    /// Log money kept out of gambling. Returns the new total.
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError::NonPositiveAmount`] for zero or negative
    /// amounts, or [`ChallengeError::NotStarted`] if the user has no record.
    pub fn add_savings(&mut self, user_id: &str, amount: f64) -> Result<f64, CoreError> {
        if amount <= 0.0 {
            return Err(ChallengeError::NonPositiveAmount { amount }.into());
        }
        let record = self.require_mut(user_id)?;
        record.savings += amount;
        let total = record.savings;
        self.persist()?;
        Ok(total)
    }

    /// Append a private journal entry.
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError::NotStarted`] if the user has no record.
    pub fn journal_append(
        &mut self,
        user_id: &str,
        now: DateTime<Utc>,
        text: &str,
    ) -> Result<(), CoreError> {
        let record = self.require_mut(user_id)?;
        journal::append(record, now, text);
        self.persist()?;
        Ok(())
    }

    // ── Internals ────────────────────────────────────────────────────

    fn require(&self, user_id: &str) -> Result<&ProgressRecord, ChallengeError> {
        self.users.get(user_id).ok_or_else(|| ChallengeError::NotStarted {
            user_id: user_id.to_string(),
        })
    }

    fn require_mut(&mut self, user_id: &str) -> Result<&mut ProgressRecord, ChallengeError> {
        self.users
            .get_mut(user_id)
            .ok_or_else(|| ChallengeError::NotStarted {
                user_id: user_id.to_string(),
            })
    }

    /// Write the full map through the store.
    fn persist(&self) -> Result<(), CoreError> {
        self.store.save(&self.users)?;
        Ok(())
    }
}
