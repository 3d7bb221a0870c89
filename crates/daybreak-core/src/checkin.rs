//! Daily check-in engine.
//!
//! A pure decision/mutation step: given "now" and a user's current record,
//! either reject the check-in or advance the streak counters and evaluate
//! reward tiers. No I/O happens here; the only randomness is reward
//! candidate selection, and the RNG is injected by the caller so tests are
//! deterministic.
//!
//! ## Decision flow
//!
//! ```text
//! today <= last check-in date  -> AlreadyCheckedInToday (no mutation)
//! gap == 1 day                 -> streak continues (+1)
//! any other gap                -> streak resets to 1
//! ```
//!
//! All comparisons use date components only. The first check-in ever falls
//! into the reset branch (the "never" sentinel sits decades in the past) and
//! starts the streak at 1, which is the intended behavior.
//!
//! Reward tiers are evaluated after the counters advance: the daily tier for
//! the landed challenge day first, then every streak tier in weekly,
//! monthly, yearly order. A key already on the record is permanently
//! excluded, even if the catalog changed since it was granted.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ChallengeError;
use crate::progress::ProgressRecord;
use crate::rewards::{tier_multiplier, Cadence, RewardCatalog};

/// Outcome of an accepted check-in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckinSuccess {
    /// 1-indexed challenge day this check-in landed on.
    pub challenge_day: i64,
    /// Streak after the check-in.
    pub current_streak_days: u32,
    /// Unlock messages in evaluation order. Possibly empty.
    pub unlocked: Vec<String>,
}

/// Process one check-in attempt against `record`.
///
/// On acceptance the record's streak counters, check-in date, and unlock set
/// are updated in place and the newly unlocked reward messages are returned.
/// On rejection the record is left untouched.
///
/// # Errors
///
/// Returns [`ChallengeError::AlreadyCheckedInToday`] when `now` falls on the
/// same calendar date (or earlier) as the last accepted check-in.
pub fn process_checkin<R: Rng + ?Sized>(
    record: &mut ProgressRecord,
    now: DateTime<Utc>,
    catalog: &RewardCatalog,
    rng: &mut R,
) -> Result<CheckinSuccess, ChallengeError> {
    let today = now.date_naive();
    let last = record.last_checkin_date.date_naive();

    // Idempotence guard: at most one accepted check-in per calendar date.
    if today <= last {
        return Err(ChallengeError::AlreadyCheckedInToday { date: today });
    }

    let gap_days = (today - last).num_days();
    if gap_days == 1 {
        record.current_streak_days += 1;
    } else {
        // Missed day, or the first check-in ever. The day just logged counts
        // as day 1 of a new streak, not zero.
        record.current_streak_days = 1;
    }
    record.longest_streak_days = record.longest_streak_days.max(record.current_streak_days);
    record.total_days_gambling_free += 1;
    record.last_checkin_date = now;

    let challenge_day = record.challenge_day(now);
    let unlocked = evaluate_rewards(record, challenge_day, catalog, rng);

    Ok(CheckinSuccess {
        challenge_day,
        current_streak_days: record.current_streak_days,
        unlocked,
    })
}

/// Evaluate the daily tier, then each streak cadence in fixed order.
///
/// Streak tiers unlock once `current_streak_days >= n * period`; every
/// qualifying, not-yet-unlocked tier unlocks on the same check-in.
fn evaluate_rewards<R: Rng + ?Sized>(
    record: &mut ProgressRecord,
    challenge_day: i64,
    catalog: &RewardCatalog,
    rng: &mut R,
) -> Vec<String> {
    let mut messages = Vec::new();

    if let Some((key, pool)) = catalog.daily_tier(challenge_day) {
        if !record.has_reward(&key) {
            if let Some(text) = pool.pick(rng) {
                messages.push(format!("Day {challenge_day}: {text}"));
                record.grant_reward(key);
            }
        }
    }

    for cadence in Cadence::ALL {
        for (key, pool) in catalog.streak_tiers(cadence) {
            // Keys without a numeric suffix are skipped, never fatal.
            let Some(n) = tier_multiplier(key) else {
                continue;
            };
            if record.current_streak_days < n.saturating_mul(cadence.period_days()) {
                continue;
            }
            if record.has_reward(key) {
                continue;
            }
            if let Some(text) = pool.pick(rng) {
                messages.push(format!("{} {}: {}", cadence.label(), n, text));
                record.grant_reward(key.clone());
            }
        }
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn make_rng() -> Mcg128Xsl64 {
        Mcg128Xsl64::seed_from_u64(7)
    }

    fn make_catalog() -> RewardCatalog {
        serde_json::from_str(
            r#"{
                "daily_rewards": { "day_3": "a hot bath" },
                "weekly_rewards": { "week_1": "order takeaway", "week_2": "see a film" },
                "monthly_rewards": { "month_1": "a day trip" },
                "yearly_rewards": { "year_1": "a weekend away" }
            }"#,
        )
        .unwrap()
    }

    /// Run accepted check-ins on consecutive days starting the day after
    /// `start`, returning the last success.
    fn check_in_daily(
        record: &mut ProgressRecord,
        catalog: &RewardCatalog,
        start: DateTime<Utc>,
        days: i64,
    ) -> CheckinSuccess {
        let mut rng = make_rng();
        let mut last = None;
        for offset in 1..=days {
            let now = start + Duration::days(offset);
            last = Some(process_checkin(record, now, catalog, &mut rng).unwrap());
        }
        last.unwrap()
    }

    #[test]
    fn test_first_checkin_starts_streak_at_one() {
        // Scenario A: start on day 0, check in on day 1.
        let start = at(2024, 3, 1, 9);
        let mut record = ProgressRecord::new("alice", start);
        let mut rng = make_rng();

        let success =
            process_checkin(&mut record, start + Duration::days(1), &make_catalog(), &mut rng)
                .unwrap();

        assert_eq!(success.current_streak_days, 1);
        assert_eq!(success.challenge_day, 2);
        assert_eq!(record.total_days_gambling_free, 1);
        assert_eq!(record.longest_streak_days, 1);
    }

    #[test]
    fn test_same_day_checkin_is_rejected_without_mutation() {
        let start = at(2024, 3, 1, 9);
        let mut record = ProgressRecord::new("alice", start);
        let catalog = make_catalog();
        let mut rng = make_rng();

        let morning = at(2024, 3, 2, 8);
        process_checkin(&mut record, morning, &catalog, &mut rng).unwrap();

        let before = record.clone();
        let evening = at(2024, 3, 2, 22);
        let err = process_checkin(&mut record, evening, &catalog, &mut rng).unwrap_err();

        assert_eq!(
            err,
            ChallengeError::AlreadyCheckedInToday {
                date: evening.date_naive()
            }
        );
        assert_eq!(record, before);
    }

    #[test]
    fn test_backdated_checkin_is_rejected() {
        let start = at(2024, 3, 1, 9);
        let mut record = ProgressRecord::new("alice", start);
        let catalog = make_catalog();
        let mut rng = make_rng();

        process_checkin(&mut record, at(2024, 3, 5, 9), &catalog, &mut rng).unwrap();
        let err = process_checkin(&mut record, at(2024, 3, 4, 9), &catalog, &mut rng).unwrap_err();
        assert!(matches!(err, ChallengeError::AlreadyCheckedInToday { .. }));
    }

    #[test]
    fn test_consecutive_days_grow_streak() {
        let start = at(2024, 3, 1, 9);
        let mut record = ProgressRecord::new("alice", start);
        let success = check_in_daily(&mut record, &RewardCatalog::default(), start, 5);

        assert_eq!(success.current_streak_days, 5);
        assert_eq!(record.longest_streak_days, 5);
        assert_eq!(record.total_days_gambling_free, 5);
    }

    #[test]
    fn test_time_of_day_skew_does_not_break_streak() {
        // Check-ins at 23:50 then 00:05 the next day are consecutive days.
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let mut record = ProgressRecord::new("alice", start);
        let catalog = RewardCatalog::default();
        let mut rng = make_rng();

        let late = Utc.with_ymd_and_hms(2024, 3, 2, 23, 50, 0).unwrap();
        process_checkin(&mut record, late, &catalog, &mut rng).unwrap();

        let early = Utc.with_ymd_and_hms(2024, 3, 3, 0, 5, 0).unwrap();
        let success = process_checkin(&mut record, early, &catalog, &mut rng).unwrap();
        assert_eq!(success.current_streak_days, 2);
    }

    #[test]
    fn test_missed_day_resets_streak_keeps_longest_and_total() {
        // Scenario C: check in day N, skip N+1, check in N+2.
        let start = at(2024, 3, 1, 9);
        let mut record = ProgressRecord::new("alice", start);
        let catalog = RewardCatalog::default();
        check_in_daily(&mut record, &catalog, start, 4);

        let mut rng = make_rng();
        let after_gap = start + Duration::days(6);
        let success = process_checkin(&mut record, after_gap, &catalog, &mut rng).unwrap();

        assert_eq!(success.current_streak_days, 1);
        assert_eq!(record.longest_streak_days, 4);
        assert_eq!(record.total_days_gambling_free, 5);
    }

    #[test]
    fn test_weekly_tier_unlocks_on_seventh_consecutive_day() {
        // Scenario B: seven consecutive check-ins from start.
        let start = at(2024, 3, 1, 9);
        let mut record = ProgressRecord::new("alice", start);
        let catalog = make_catalog();
        let mut rng = make_rng();

        for offset in 1..=7 {
            let success =
                process_checkin(&mut record, start + Duration::days(offset), &catalog, &mut rng)
                    .unwrap();
            let week_messages: Vec<_> = success
                .unlocked
                .iter()
                .filter(|m| m.starts_with("Week 1:"))
                .collect();
            if offset < 7 {
                assert!(week_messages.is_empty(), "unlocked early on day {offset}");
            } else {
                assert_eq!(week_messages, vec!["Week 1: order takeaway"]);
            }
        }
        assert!(record.has_reward("week_1"));
        assert!(!record.has_reward("week_2"));
    }

    #[test]
    fn test_daily_tier_unlocks_exactly_once() {
        // Scenario D: day_3 has a single candidate.
        let start = at(2024, 3, 1, 9);
        let mut record = ProgressRecord::new("alice", start);
        let catalog = make_catalog();
        let mut rng = make_rng();

        let day2 = process_checkin(&mut record, start + Duration::days(1), &catalog, &mut rng)
            .unwrap();
        assert!(day2.unlocked.is_empty());

        let day3 = process_checkin(&mut record, start + Duration::days(2), &catalog, &mut rng)
            .unwrap();
        assert_eq!(day3.challenge_day, 3);
        assert_eq!(day3.unlocked, vec!["Day 3: a hot bath"]);
        assert!(record.has_reward("day_3"));

        let day4 = process_checkin(&mut record, start + Duration::days(3), &catalog, &mut rng)
            .unwrap();
        assert!(day4.unlocked.is_empty());
    }

    #[test]
    fn test_unlocked_key_survives_catalog_changes() {
        let start = at(2024, 3, 1, 9);
        let mut record = ProgressRecord::new("alice", start);
        let mut rng = make_rng();
        check_in_daily(&mut record, &make_catalog(), start, 7);
        assert!(record.has_reward("week_1"));

        // A "reloaded" catalog with different week_1 candidates must not
        // re-announce the tier.
        let reloaded: RewardCatalog = serde_json::from_str(
            r#"{ "weekly_rewards": { "week_1": ["something new"] } }"#,
        )
        .unwrap();
        let success =
            process_checkin(&mut record, start + Duration::days(8), &reloaded, &mut rng).unwrap();
        assert!(success.unlocked.is_empty());
        assert_eq!(
            record.rewards_unlocked.iter().filter(|k| *k == "week_1").count(),
            1
        );
    }

    #[test]
    fn test_qualifying_tiers_unlock_together_in_cadence_order() {
        // Build a 30-day streak against an empty catalog, then evaluate the
        // next check-in against a catalog whose week_4 and month_1 tiers are
        // both already satisfied: they unlock on the same check-in, weekly
        // cadence first.
        let start = at(2024, 1, 1, 9);
        let mut record = ProgressRecord::new("alice", start);
        check_in_daily(&mut record, &RewardCatalog::default(), start, 30);

        let catalog: RewardCatalog = serde_json::from_str(
            r#"{
                "weekly_rewards": { "week_4": "w4" },
                "monthly_rewards": { "month_1": "m1" }
            }"#,
        )
        .unwrap();
        let mut rng = make_rng();
        let day31 =
            process_checkin(&mut record, start + Duration::days(31), &catalog, &mut rng).unwrap();
        assert_eq!(day31.current_streak_days, 31);
        assert_eq!(day31.unlocked, vec!["Week 4: w4", "Month 1: m1"]);
        assert!(record.has_reward("week_4"));
        assert!(record.has_reward("month_1"));
    }

    #[test]
    fn test_malformed_tier_key_is_skipped() {
        let start = at(2024, 3, 1, 9);
        let mut record = ProgressRecord::new("alice", start);
        let catalog: RewardCatalog = serde_json::from_str(
            r#"{ "weekly_rewards": { "week_soon": "bad", "week_1": "good" } }"#,
        )
        .unwrap();

        let success = check_in_daily(&mut record, &catalog, start, 7);
        assert_eq!(success.unlocked, vec!["Week 1: good"]);
        assert!(!record.has_reward("week_soon"));
    }

    #[test]
    fn test_empty_pool_grants_nothing() {
        let start = at(2024, 3, 1, 9);
        let mut record = ProgressRecord::new("alice", start);
        let catalog: RewardCatalog =
            serde_json::from_str(r#"{ "daily_rewards": { "day_2": [] } }"#).unwrap();
        let mut rng = make_rng();

        let success =
            process_checkin(&mut record, start + Duration::days(1), &catalog, &mut rng).unwrap();
        assert!(success.unlocked.is_empty());
        assert!(!record.has_reward("day_2"));
    }

    #[test]
    fn test_candidate_selection_is_deterministic_with_seed() {
        let catalog: RewardCatalog = serde_json::from_str(
            r#"{ "daily_rewards": { "day_2": ["a", "b", "c", "d"] } }"#,
        )
        .unwrap();
        let start = at(2024, 3, 1, 9);

        let run = |seed: u64| {
            let mut record = ProgressRecord::new("alice", start);
            let mut rng = Mcg128Xsl64::seed_from_u64(seed);
            process_checkin(&mut record, start + Duration::days(1), &catalog, &mut rng)
                .unwrap()
                .unlocked
        };
        assert_eq!(run(3), run(3));
    }

    proptest! {
        /// After any sequence of accepted check-ins, the current streak
        /// never exceeds the longest, and the longest never decreases.
        #[test]
        fn prop_streak_invariants(gaps in prop::collection::vec(1i64..5, 1..40)) {
            let start = at(2024, 1, 1, 8);
            let mut record = ProgressRecord::new("prop", start);
            let catalog = RewardCatalog::default();
            let mut rng = make_rng();

            let mut now = start;
            let mut prev_longest = 0;
            let mut prev_total = 0;
            for gap in gaps {
                now = now + Duration::days(gap);
                let success = process_checkin(&mut record, now, &catalog, &mut rng).unwrap();
                prop_assert!(record.current_streak_days <= record.longest_streak_days);
                prop_assert!(record.longest_streak_days >= prev_longest);
                prop_assert_eq!(record.total_days_gambling_free, prev_total + 1);
                prop_assert_eq!(success.current_streak_days, record.current_streak_days);
                prev_longest = record.longest_streak_days;
                prev_total = record.total_days_gambling_free;
            }
        }
    }
}
