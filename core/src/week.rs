// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::{
    Span,
    civil::{Date, DateTime},
};

use crate::{
    GeneratedSlot, ScheduleSettings, WeekError, Weekday, WeeklySchedule, filter_min_notice,
    generate_slots,
};

/// The seven calendar dates of one week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    dates: [Date; 7],
}

impl WeekWindow {
    /// Resolves the week `offset` weeks away from the week containing `today`.
    ///
    /// Offset 0 is the current week, negative offsets are past weeks. Offsets are only bounded by
    /// the range of representable dates.
    pub fn resolve(offset: i64, today: Date) -> Result<Self, WeekError> {
        let out_of_range = |_| WeekError::OutOfRange(offset);

        let back = i64::from(today.weekday().to_sunday_zero_offset());
        let shift = offset
            .checked_mul(7)
            .and_then(|a| a.checked_sub(back))
            .ok_or(WeekError::OutOfRange(offset))?;
        let start = Span::new()
            .try_days(shift)
            .and_then(|span| today.checked_add(span))
            .map_err(out_of_range)?;

        let mut dates = [start; 7];
        let mut date = start;
        for slot in dates.iter_mut().skip(1) {
            date = date.tomorrow().map_err(out_of_range)?;
            *slot = date;
        }
        Ok(Self { dates })
    }

    /// The Sunday starting the week.
    pub const fn start(&self) -> Date {
        self.dates[0]
    }

    /// The Saturday ending the week.
    pub const fn end(&self) -> Date {
        self.dates[6]
    }

    /// Pairs every date with its weekday.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, Date)> + '_ {
        Weekday::ALL.into_iter().zip(self.dates.iter().copied())
    }
}

/// Slots of one date in a previewed week.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DayPreview {
    /// Day of the week.
    pub weekday: Weekday,

    /// Calendar date.
    pub date: Date,

    /// Slots on this date, in chronological order.
    pub slots: Vec<GeneratedSlot>,
}

/// Concrete bookable slots for one week.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct WeekPreview {
    /// Weeks away from the current week.
    pub offset: i64,

    /// The Sunday starting the week.
    pub start: Date,

    /// The Saturday ending the week.
    pub end: Date,

    /// One entry per day, Sunday first.
    pub days: Vec<DayPreview>,
}

impl WeekPreview {
    /// Expands `schedule` into the slots of the week `offset` weeks away from `today`.
    pub fn build(
        schedule: &WeeklySchedule,
        settings: &ScheduleSettings,
        offset: i64,
        today: Date,
    ) -> Result<Self, WeekError> {
        let window = WeekWindow::resolve(offset, today)?;
        let days = window
            .days()
            .map(|(weekday, date)| DayPreview {
                weekday,
                date,
                slots: generate_slots(weekday, date, schedule.ranges(weekday), settings),
            })
            .collect();

        Ok(Self {
            offset,
            start: window.start(),
            end: window.end(),
            days,
        })
    }

    /// Removes slots that start within `min_notice_hours` of `now`.
    #[must_use]
    pub fn with_min_notice(mut self, now: DateTime, min_notice_hours: u32) -> Self {
        for day in &mut self.days {
            let slots = std::mem::take(&mut day.slots);
            day.slots = filter_min_notice(slots, now, min_notice_hours);
        }
        self
    }

    /// The slots of one weekday.
    pub fn slots(&self, weekday: Weekday) -> &[GeneratedSlot] {
        self.days
            .iter()
            .find(|a| a.weekday == weekday)
            .map_or(&[], |a| a.slots.as_slice())
    }

    /// Total number of slots in the week.
    pub fn slot_count(&self) -> usize {
        self.days.iter().map(|a| a.slots.len()).sum()
    }
}
