// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::{
    Span,
    civil::{Date, DateTime, Time},
};

use crate::{DayRange, ScheduleSettings, TimeRange, Weekday};

/// A bookable slot on a concrete date. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GeneratedSlot {
    /// Day of the week of `date`.
    pub weekday: Weekday,

    /// Calendar date of the slot.
    pub date: Date,

    /// Time-of-day interval of the slot.
    #[serde(flatten)]
    pub range: TimeRange,
}

impl GeneratedSlot {
    /// Inclusive start in minutes since midnight.
    pub const fn start(&self) -> u16 {
        self.range.start()
    }

    /// Exclusive end in minutes since midnight.
    pub const fn end(&self) -> u16 {
        self.range.end()
    }

    /// Wall-clock datetime at which the slot starts.
    pub fn start_datetime(&self) -> Result<DateTime, jiff::Error> {
        let offset = Span::new().try_minutes(i64::from(self.start()))?;
        self.date.to_datetime(Time::midnight()).checked_add(offset)
    }
}

/// Iterator over the slots tiled from a single range, see [`tile`].
#[derive(Debug, Clone)]
pub struct Tiles {
    cursor: u32,
    end: u32,
    slot: u32,
    buffer: u32,
}

impl Iterator for Tiles {
    type Item = TimeRange;

    fn next(&mut self) -> Option<Self::Item> {
        // zero-length slots never tile
        if self.slot == 0 {
            return None;
        }

        let end = self.cursor.checked_add(self.slot)?;
        if end > self.end {
            return None;
        }

        let slot = TimeRange::new(
            u16::try_from(self.cursor).ok()?,
            u16::try_from(end).ok()?,
        );
        self.cursor = end.saturating_add(self.buffer);
        Some(slot)
    }
}

/// Tiles `range` into back-to-back slots of `slot` minutes separated by `buffer` idle minutes.
///
/// Slots start at `range.start()`; a trailing remainder shorter than a slot is dropped, so a range
/// shorter than `slot` yields nothing.
pub fn tile(range: TimeRange, slot: u32, buffer: u32) -> Tiles {
    Tiles {
        cursor: u32::from(range.start()),
        end: u32::from(range.end()),
        slot,
        buffer,
    }
}

/// Generates the slots of one day, in chronological order.
///
/// `ranges` must be sorted and disjoint, as they are in a [`crate::WeeklySchedule`]. Each range is
/// tiled on its own; adjacent ranges are not merged.
pub fn generate_slots(
    weekday: Weekday,
    date: Date,
    ranges: &[DayRange],
    settings: &ScheduleSettings,
) -> Vec<GeneratedSlot> {
    ranges
        .iter()
        .flat_map(|a| tile(a.range, settings.slot_minutes, settings.buffer_minutes))
        .map(|range| GeneratedSlot {
            weekday,
            date,
            range,
        })
        .collect()
}

/// Drops slots starting earlier than `min_notice_hours` after `now`.
///
/// `now` is the wall-clock time in the schedule's timezone, see [`ScheduleSettings::local_now`].
/// A slot starting exactly at the cutoff is kept.
pub fn filter_min_notice(
    slots: Vec<GeneratedSlot>,
    now: DateTime,
    min_notice_hours: u32,
) -> Vec<GeneratedSlot> {
    let cutoff = Span::new()
        .try_hours(i64::from(min_notice_hours))
        .and_then(|notice| now.checked_add(notice));
    let Ok(cutoff) = cutoff else {
        tracing::debug!(min_notice_hours, "notice window exceeds the calendar, no slot qualifies");
        return Vec::new();
    };

    slots
        .into_iter()
        .filter(|slot| slot.start_datetime().is_ok_and(|start| start >= cutoff))
        .collect()
}
