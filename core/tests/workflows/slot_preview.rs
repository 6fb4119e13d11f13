// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Slot preview workflow tests.
//!
//! These tests validate how the weekly schedule expands into concrete slots for a week, including
//! week navigation and the minimum notice window.

use jiff::{civil::date, tz::TimeZone};
use slotwise_core::{Availability, MemoryStore, ScheduleSettings, WeekError, Weekday};

use crate::common::{assert_spans, range, test_settings};

fn open_with(settings: ScheduleSettings) -> Availability<MemoryStore> {
    let mut availability = Availability::open(MemoryStore::new(), "mentor").into_value();
    availability.update_settings(settings).unwrap().into_value();
    availability
}

#[test]
fn seeded_tuesday_can_be_reshaped_and_previewed() {
    // Arrange - default schedule, hourly back-to-back slots
    let mut availability = open_with(test_settings(60, 0));

    // Act
    availability.clear_day(Weekday::Tuesday).into_value();
    availability
        .add_range(Weekday::Tuesday, range("10:00-13:00"))
        .unwrap()
        .into_value();
    let preview = availability.preview(0, date(2025, 1, 8)).unwrap();

    // Assert
    assert_spans(
        preview.slots(Weekday::Tuesday),
        &["10:00-11:00", "11:00-12:00", "12:00-13:00"],
    );
    assert!(
        preview
            .slots(Weekday::Tuesday)
            .iter()
            .all(|a| a.date == date(2025, 1, 7))
    );
}

#[test]
fn slots_are_separated_by_the_buffer() {
    // Arrange
    let mut availability = open_with(test_settings(45, 10));
    availability.clear_day(Weekday::Monday).into_value();
    availability
        .add_range(Weekday::Monday, range("09:00-12:00"))
        .unwrap()
        .into_value();

    // Act
    let preview = availability.preview(0, date(2025, 1, 8)).unwrap();

    // Assert - the 25 minutes left after 11:35 do not fit another slot
    assert_spans(
        preview.slots(Weekday::Monday),
        &["09:00-09:45", "09:55-10:40", "10:50-11:35"],
    );
}

#[test]
fn range_shorter_than_a_slot_yields_nothing() {
    // Arrange
    let mut availability = open_with(test_settings(45, 0));
    availability.clear_all().into_value();
    availability
        .add_range(Weekday::Thursday, range("09:00-09:30"))
        .unwrap()
        .into_value();

    // Act
    let preview = availability.preview(0, date(2025, 1, 8)).unwrap();

    // Assert
    assert!(preview.slots(Weekday::Thursday).is_empty());
    assert_eq!(preview.slot_count(), 0);
}

#[test]
fn settings_changes_apply_to_the_next_preview() {
    // Arrange
    let mut availability = open_with(test_settings(60, 0));
    let today = date(2025, 1, 8);
    let hourly = availability.preview(0, today).unwrap();

    // Act
    availability
        .update_settings(test_settings(30, 0))
        .unwrap()
        .into_value();
    let half_hourly = availability.preview(0, today).unwrap();

    // Assert - 7 hours per weekday, five weekdays
    assert_eq!(hourly.slot_count(), 35);
    assert_eq!(half_hourly.slot_count(), 70);
}

#[test]
fn week_navigation_is_stable() {
    // Arrange
    let availability = open_with(test_settings(60, 0));

    // Act - every day of one week resolves to the same window
    let starts: Vec<_> = (5..=11)
        .map(|day| availability.preview(0, date(2025, 1, day)).unwrap().start)
        .collect();

    // Assert
    assert!(starts.iter().all(|&a| a == date(2025, 1, 5)));

    // Act & Assert - moving forward and back lands on the expected Sundays
    let today = date(2025, 1, 8);
    assert_eq!(availability.preview(1, today).unwrap().start, date(2025, 1, 12));
    assert_eq!(availability.preview(-1, today).unwrap().start, date(2024, 12, 29));
    assert_eq!(availability.preview(52, today).unwrap().start, date(2026, 1, 4));

    // Act & Assert - previews are repeatable
    assert_eq!(
        availability.preview(3, today).unwrap(),
        availability.preview(3, today).unwrap()
    );
}

#[test]
fn preview_dates_match_their_weekdays() {
    // Arrange
    let availability = open_with(test_settings(60, 15));

    for offset in [-104, -1, 0, 1, 13, 520] {
        // Act
        let preview = availability.preview(offset, date(2025, 3, 1)).unwrap();

        // Assert
        assert_eq!(preview.days.len(), 7);
        for day in &preview.days {
            assert_eq!(Weekday::from(day.date.weekday()), day.weekday);
            assert!(day.slots.iter().all(|a| a.date == day.date));
        }
    }
}

#[test]
fn unrepresentable_weeks_are_reported() {
    // Arrange
    let availability = open_with(test_settings(60, 0));

    // Act
    let result = availability.preview(i64::MAX, date(2025, 1, 8));

    // Assert
    assert_eq!(result, Err(WeekError::OutOfRange(i64::MAX)));
}

#[test]
fn bookable_slots_respect_minimum_notice() {
    // Arrange - Monday 15:00 UTC, one day of notice
    let mut availability = open_with(ScheduleSettings {
        min_notice_hours: 24,
        ..test_settings(60, 0)
    });
    let now = date(2025, 1, 6)
        .at(15, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .unwrap();

    // Act
    let bookable = availability.bookable(0, &now).unwrap();
    let all = availability.preview(0, now.date()).unwrap();

    // Assert - the raw preview keeps everything
    assert_eq!(all.slots(Weekday::Monday).len(), 7);
    assert!(bookable.slots(Weekday::Monday).is_empty());
    assert_spans(
        bookable.slots(Weekday::Tuesday),
        &["15:00-16:00", "16:00-17:00"],
    );
    assert_eq!(bookable.slots(Weekday::Wednesday).len(), 7);

    // Act - without notice, only past slots disappear
    availability
        .update_settings(test_settings(60, 0))
        .unwrap()
        .into_value();
    let bookable = availability.bookable(0, &now).unwrap();

    // Assert
    assert_spans(
        bookable.slots(Weekday::Monday),
        &["15:00-16:00", "16:00-17:00"],
    );
}

#[test]
fn bookable_future_weeks_are_unaffected_by_notice() {
    // Arrange
    let availability = open_with(ScheduleSettings {
        min_notice_hours: 24,
        ..test_settings(60, 0)
    });
    let now = date(2025, 1, 6)
        .at(15, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .unwrap();

    // Act
    let next_week = availability.bookable(1, &now).unwrap();

    // Assert
    assert_eq!(next_week.start, date(2025, 1, 12));
    assert_eq!(next_week.slot_count(), 35);
}
