// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::{Zoned, civil::DateTime, tz::TimeZone};

use crate::{MINUTES_PER_DAY, SettingsError};

/// Settings shared by every day of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScheduleSettings {
    /// IANA timezone the ranges are expressed in. Only used as a label, ranges are never converted.
    pub timezone: String,

    /// Length of every generated slot, in minutes.
    pub slot_minutes: u32,

    /// Idle minutes between two consecutive slots of the same range.
    pub buffer_minutes: u32,

    /// Slots starting sooner than this many hours from now are not offered.
    pub min_notice_hours: u32,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            timezone: system_timezone(),
            slot_minutes: 60,
            buffer_minutes: 15,
            min_notice_hours: 24,
        }
    }
}

impl ScheduleSettings {
    /// Checks the settings before they are accepted.
    pub fn validate(&self) -> Result<(), SettingsError> {
        match self.slot_minutes {
            0 => Err(SettingsError::ZeroSlot),
            a if a > u32::from(MINUTES_PER_DAY) => Err(SettingsError::SlotTooLong(a)),
            _ => Ok(()),
        }
    }

    /// The wall-clock time of `now` in the schedule's timezone.
    ///
    /// An unknown timezone label falls back to the zone `now` is already in.
    pub fn local_now(&self, now: &Zoned) -> DateTime {
        match TimeZone::get(&self.timezone) {
            Ok(tz) => now.with_time_zone(tz).datetime(),
            Err(err) => {
                tracing::warn!(timezone = %self.timezone, %err, "unknown timezone, using clock zone");
                now.datetime()
            }
        }
    }
}

fn system_timezone() -> String {
    match iana_time_zone::get_timezone() {
        Ok(tz) => tz,
        Err(err) => {
            tracing::debug!(%err, "failed to detect system timezone, using UTC");
            "UTC".to_string()
        }
    }
}
