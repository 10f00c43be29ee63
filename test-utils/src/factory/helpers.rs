//! Shared helper utilities for factory methods.

use chrono::{Duration, Utc};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Formats a UTC timestamp the way SQLite's `CURRENT_TIMESTAMP` writes it.
///
/// # Arguments
/// - `minutes` - How far in the past the timestamp lies
///
/// # Returns
/// - `String` - Timestamp such as `2026-01-01 12:30:00`
pub fn timestamp_minutes_ago(minutes: i64) -> String {
    (Utc::now() - Duration::minutes(minutes))
        .naive_utc()
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
