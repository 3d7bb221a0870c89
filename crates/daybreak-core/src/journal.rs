//! Append-only private journal.
//!
//! Entries accumulate on the user's record without pruning. Retrieval is a
//! bounded window over the tail; entries come back with their full text --
//! display truncation belongs to the rendering layer.

use chrono::{DateTime, Utc};

use crate::progress::{JournalEntry, ProgressRecord};

/// Append an entry to the user's journal.
pub fn append(record: &mut ProgressRecord, now: DateTime<Utc>, text: impl Into<String>) {
    record.journal_entries.push(JournalEntry {
        date: now,
        entry: text.into(),
    });
}

/// The last `limit` entries in chronological order (oldest of the selected
/// window first).
pub fn recent(record: &ProgressRecord, limit: usize) -> &[JournalEntry] {
    let entries = &record.journal_entries;
    let start = entries.len().saturating_sub(limit);
    &entries[start..]
}
