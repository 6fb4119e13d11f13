// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Weekly mentor availability and bookable slot generation.
//!
//! A mentor keeps a [`WeeklySchedule`] of non-overlapping [`TimeRange`]s per [`Weekday`], plus
//! [`ScheduleSettings`] shared by every day. [`WeekPreview`] expands the schedule into concrete
//! [`GeneratedSlot`]s for any week, and [`Availability`] owns a mentor's state and persists it to
//! a [`BlobStore`].

mod config;
mod error;
mod range;
mod schedule;
mod service;
mod settings;
mod slots;
mod store;
mod validator;
mod week;
mod weekday;

pub use crate::config::{APP_NAME, Config};
pub use crate::error::{PersistenceWarning, RangeError, SettingsError, StoreError, WeekError};
pub use crate::range::{
    ClockTime, DayRange, MINUTES_PER_DAY, ParseRangeError, RangeId, TimeRange,
};
pub use crate::schedule::WeeklySchedule;
pub use crate::service::{Availability, Persisted, Snapshot, store_key};
pub use crate::settings::ScheduleSettings;
pub use crate::slots::{GeneratedSlot, Tiles, filter_min_notice, generate_slots, tile};
pub use crate::store::{BlobStore, FileStore, MemoryStore};
pub use crate::validator::validate_range;
pub use crate::week::{DayPreview, WeekPreview, WeekWindow};
pub use crate::weekday::{ParseWeekdayError, Weekday};
