// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use slotwise_core::{DayRange, GeneratedSlot, MINUTES_PER_DAY, WeeklySchedule};

/// Asserts that every day of `schedule` is well formed.
///
/// # Panics
///
/// Panics if a range is empty or leaves the day, if a day is not sorted by start, or if two
/// ranges of a day overlap.
pub fn assert_day_invariants(schedule: &WeeklySchedule) {
    for (day, ranges) in schedule.iter() {
        for DayRange { range, .. } in ranges {
            assert!(range.start() < range.end(), "{day}: empty range {range}");
            assert!(range.end() <= MINUTES_PER_DAY, "{day}: {range} leaves the day");
        }

        for pair in ranges.windows(2) {
            let (a, b) = (pair[0].range, pair[1].range);
            assert!(a.start() <= b.start(), "{day}: {a} sorted after {b}");
            assert!(!a.overlaps(&b), "{day}: {a} overlaps {b}");
        }
    }
}

/// Asserts that `slots` cover exactly the `HH:MM-HH:MM` spans in `expected`, in order.
///
/// # Panics
///
/// Panics if the spans differ.
pub fn assert_spans(slots: &[GeneratedSlot], expected: &[&str]) {
    let actual: Vec<String> = slots.iter().map(|a| a.range.to_string()).collect();
    assert_eq!(actual, expected, "Slot spans mismatch");
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use slotwise_core::{TimeRange, Weekday};

    use super::*;

    #[test]
    fn test_assert_day_invariants_accepts_default_schedule() {
        assert_day_invariants(&WeeklySchedule::default());
    }

    #[test]
    fn test_assert_spans_matches() {
        let slot = GeneratedSlot {
            weekday: Weekday::Monday,
            date: date(2025, 1, 6),
            range: TimeRange::from_hm((9, 0), (10, 0)),
        };
        assert_spans(&[slot], &["09:00-10:00"]);
    }

    #[test]
    #[should_panic(expected = "Slot spans mismatch")]
    fn test_assert_spans_panics_on_mismatch() {
        assert_spans(&[], &["09:00-10:00"]);
    }
}
