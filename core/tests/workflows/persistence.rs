// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Persistence workflow tests.
//!
//! These tests validate loading, saving, and the fallbacks taken when the store misbehaves. The
//! in-memory availability always stays authoritative.

use std::fs;

use slotwise_core::{
    Availability, BlobStore, FileStore, MemoryStore, PersistenceWarning, SettingsError, Snapshot,
    WeeklySchedule, Weekday, store_key,
};

use crate::common::{
    FailingStore, assert_day_invariants, range, setup_temp_state, test_config, test_settings,
};

#[test]
fn reopening_restores_ranges_and_settings() {
    // Arrange
    let temp = setup_temp_state().unwrap();
    let config = test_config(&temp.state_dir, "alice");

    let mut availability = config.open().unwrap().into_value();
    availability.clear_day(Weekday::Monday).into_value();
    let id = availability
        .add_range(Weekday::Monday, range("07:30-09:00"))
        .unwrap()
        .into_value();
    availability
        .update_settings(test_settings(30, 5))
        .unwrap()
        .into_value();

    // Act
    let reopened = config.open().unwrap();

    // Assert
    assert!(reopened.warning.is_none());
    let reopened = reopened.into_value();
    assert_eq!(reopened.snapshot(), availability.snapshot());
    assert_eq!(
        reopened.schedule().get(Weekday::Monday, id).map(|a| a.range),
        Some(range("07:30-09:00"))
    );
    assert_eq!(reopened.settings().slot_minutes, 30);
}

#[test]
fn mentors_are_stored_separately() {
    // Arrange
    let temp = setup_temp_state().unwrap();
    let alice = test_config(&temp.state_dir, "alice");
    let bob = test_config(&temp.state_dir, "bob");

    // Act
    alice.open().unwrap().into_value().clear_all().into_value();
    let bob = bob.open().unwrap().into_value();

    // Assert
    assert!(alice.open().unwrap().into_value().schedule().is_empty());
    assert!(!bob.schedule().is_empty());
}

#[test]
fn missing_blob_seeds_defaults_without_warning() {
    // Arrange
    let store = MemoryStore::new();

    // Act
    let opened = Availability::open(store.clone(), "alice");

    // Assert
    assert!(opened.warning.is_none());
    let availability = opened.into_value();
    assert_eq!(availability.schedule().ranges(Weekday::Monday).len(), 2);
    assert!(availability.schedule().ranges(Weekday::Sunday).is_empty());
    assert!(store.is_empty());
}

#[test]
fn corrupt_blob_falls_back_to_defaults() {
    // Arrange
    let temp = setup_temp_state().unwrap();
    let store = FileStore::new(&temp.state_dir);
    store.set(&store_key("alice"), "{ not json").unwrap();

    // Act
    let opened = Availability::open(store.clone(), "alice");

    // Assert
    assert!(matches!(
        opened.warning,
        Some(PersistenceWarning::Malformed(_))
    ));
    let mut availability = opened.into_value();
    assert_eq!(
        availability.schedule().ranges(Weekday::Wednesday).len(),
        WeeklySchedule::default().ranges(Weekday::Wednesday).len()
    );

    // Act - the next mutation replaces the corrupt blob
    availability.clear_day(Weekday::Sunday).into_value();

    // Assert
    let blob = fs::read_to_string(store.path_of(&store_key("alice"))).unwrap();
    assert!(Snapshot::decode(&blob).is_ok());
}

#[test]
fn overlapping_stored_ranges_are_treated_as_malformed() {
    // Arrange
    let blob = r#"{
        "schedule": {
            "days": {
                "monday": [
                    {"id": "6c4ea9a4-6d3c-4b70-9a34-2a8cde54a2e0", "start": 540, "end": 720},
                    {"id": "0b0e4c7e-1b8f-4a3c-8d55-6f1e3b7d9a11", "start": 600, "end": 660}
                ]
            }
        },
        "settings": {"timezone": "UTC", "slot_minutes": 60, "buffer_minutes": 0, "min_notice_hours": 0}
    }"#;
    let store = FailingStore::holding(blob);

    // Act
    let opened = Availability::open(store, "alice");

    // Assert
    assert!(matches!(
        opened.warning,
        Some(PersistenceWarning::Malformed(_))
    ));
    assert_eq!(opened.value.schedule().ranges(Weekday::Monday).len(), 2);
    assert_eq!(opened.value.settings().buffer_minutes, 15);
}

#[test]
fn repeated_range_id_is_treated_as_malformed() {
    // Arrange - one id on two disjoint Monday ranges
    let blob = r#"{
        "schedule": {
            "days": {
                "monday": [
                    {"id": "6c4ea9a4-6d3c-4b70-9a34-2a8cde54a2e0", "start": 540, "end": 600},
                    {"id": "6c4ea9a4-6d3c-4b70-9a34-2a8cde54a2e0", "start": 660, "end": 720}
                ]
            }
        },
        "settings": {"timezone": "UTC", "slot_minutes": 60, "buffer_minutes": 0, "min_notice_hours": 0}
    }"#;
    let store = FailingStore::holding(blob);

    // Act
    let opened = Availability::open(store, "alice");

    // Assert
    assert!(matches!(
        opened.warning,
        Some(PersistenceWarning::Malformed(_))
    ));
    let mut availability = opened.into_value();
    let monday: Vec<_> = availability
        .schedule()
        .ranges(Weekday::Monday)
        .iter()
        .map(|a| a.range)
        .collect();
    assert_eq!(monday, [range("09:00-12:00"), range("13:00-17:00")]);

    // Act - editing the loaded day still goes through the overlap check
    let first = availability.schedule().ranges(Weekday::Monday)[0].id;
    let widened = availability.update_range(Weekday::Monday, first, range("10:30-13:30"));

    // Assert
    assert!(widened.is_err());
    assert_day_invariants(availability.schedule());
}

#[test]
fn valid_stored_blob_is_loaded_sorted() {
    // Arrange
    let blob = r#"{
        "schedule": {
            "days": {
                "sunday": [
                    {"id": "6c4ea9a4-6d3c-4b70-9a34-2a8cde54a2e0", "start": 900, "end": 960},
                    {"id": "0b0e4c7e-1b8f-4a3c-8d55-6f1e3b7d9a11", "start": 600, "end": 660}
                ]
            }
        }
    }"#;
    let store = FailingStore::holding(blob);

    // Act
    let opened = Availability::open(store, "alice");

    // Assert - days missing from the blob are empty, stored days are re-sorted
    assert!(opened.warning.is_none());
    let availability = opened.into_value();
    let sunday: Vec<_> = availability
        .schedule()
        .ranges(Weekday::Sunday)
        .iter()
        .map(|a| a.range)
        .collect();
    assert_eq!(sunday, [range("10:00-11:00"), range("15:00-16:00")]);
    assert!(availability.schedule().ranges(Weekday::Monday).is_empty());
}

#[test]
fn unreadable_store_falls_back_to_defaults() {
    // Arrange
    let store = FailingStore::unreadable();

    // Act
    let opened = Availability::open(store, "alice");

    // Assert
    assert!(matches!(opened.warning, Some(PersistenceWarning::Read(_))));
    assert_eq!(
        opened.value.schedule().ranges(Weekday::Friday).len(),
        WeeklySchedule::default().ranges(Weekday::Friday).len()
    );
}

#[test]
fn write_failure_warns_without_rolling_back() {
    // Arrange
    let mut availability =
        Availability::open(FailingStore::rejecting_writes(), "alice").into_value();

    // Act
    let added = availability
        .add_range(Weekday::Saturday, range("10:00-12:00"))
        .unwrap();

    // Assert - the mutation stands, the warning reports the lost write
    assert!(matches!(added.warning, Some(PersistenceWarning::Write(_))));
    let id = added.value;
    assert!(availability.schedule().get(Weekday::Saturday, id).is_some());

    // Act - later mutations keep working on top of it
    let cleared = availability.clear_day(Weekday::Monday);

    // Assert
    assert!(cleared.warning.is_some());
    assert!(availability.schedule().ranges(Weekday::Monday).is_empty());
    assert_eq!(availability.schedule().ranges(Weekday::Saturday).len(), 1);
}

#[test]
fn rejected_edits_are_not_written() {
    // Arrange
    let mut availability = Availability::open(FailingStore::default(), "alice").into_value();

    // Act
    let overlap = availability.add_range(Weekday::Monday, range("11:00-14:00"));
    let zero = availability.update_settings(test_settings(0, 0));
    let long = availability.update_settings(test_settings(1441, 0));

    // Assert
    assert!(overlap.is_err());
    assert!(matches!(zero, Err(SettingsError::ZeroSlot)));
    assert!(matches!(long, Err(SettingsError::SlotTooLong(1441))));
    assert_eq!(availability.settings().slot_minutes, 60);
    assert_eq!(availability.store().writes(), 0);

    // Act
    availability.clear_all().into_value();

    // Assert - only the successful mutation reached the store
    assert_eq!(availability.store().writes(), 1);
}
