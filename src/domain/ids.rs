// src/domain/ids.rs
//
// Record identifier generation.
//
// Identifiers are opaque strings derived from the current time in
// milliseconds, the format the stored collections have always used. Two
// records created within the same millisecond must still get distinct ids,
// so the last issued value is tracked and bumped past on collision.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// Next unique time-derived record id.
pub fn next_record_id() -> String {
    let now = Utc::now().timestamp_millis();
    let prev = LAST_ISSUED
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or(now - 1);
    now.max(prev + 1).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_in_a_burst() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(next_record_id()));
        }
    }

    #[test]
    fn test_ids_are_numeric_and_increasing() {
        let a: i64 = next_record_id().parse().unwrap();
        let b: i64 = next_record_id().parse().unwrap();
        assert!(b > a);
    }
}
