//! # Daybreak Core Library
//!
//! This library provides the core business logic for Daybreak, a
//! recovery-challenge tracker: members start a challenge, log a once-per-day
//! check-in, accumulate streaks, and unlock milestone rewards. All
//! operations are available via a standalone CLI binary; any chat-platform
//! front end is a thin transport layer over the same core library.
//!
//! ## Architecture
//!
//! - **Check-in Engine**: a pure per-record decision/mutation step -- the
//!   caller supplies "now", the catalog, and an RNG, and the engine either
//!   rejects the check-in or advances streak counters and evaluates reward
//!   tiers
//! - **Storage**: JSON-backed user store (write-temp-then-rename) and
//!   TOML-based configuration
//! - **Tracker**: facade that funnels mutations through one sequential
//!   apply-then-persist step
//!
//! ## Key Components
//!
//! - [`process_checkin`]: the check-in state machine
//! - [`RecoveryTracker`]: store + catalog + engine facade
//! - [`RewardCatalog`]: tiered reward definitions per cadence
//! - [`ProgressStore`], [`Config`]: durable state

pub mod checkin;
pub mod error;
pub mod journal;
pub mod progress;
pub mod rewards;
pub mod storage;
pub mod tracker;

pub use checkin::{process_checkin, CheckinSuccess};
pub use error::{CatalogError, ChallengeError, ConfigError, CoreError, StorageError};
pub use progress::{JournalEntry, ProgressRecord, Snapshot};
pub use rewards::{Cadence, RewardCatalog, RewardPool};
pub use storage::{data_dir, Config, ProgressStore, UserMap};
pub use tracker::RecoveryTracker;
