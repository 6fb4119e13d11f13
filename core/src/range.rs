// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr, sync::OnceLock};

use regex::Regex;
use uuid::Uuid;

/// Number of minutes in a day, the exclusive upper bound of a [`TimeRange`].
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A half-open interval `[start, end)` of minutes since midnight.
///
/// Construction is unchecked: a candidate range only becomes part of a schedule after it passes
/// [`crate::validate_range`], which enforces `start < end <= 1440`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct TimeRange {
    start: u16,
    end: u16,
}

impl TimeRange {
    /// Creates a range from minutes since midnight.
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Creates a range from `(hour, minute)` pairs.
    pub const fn from_hm(start: (u16, u16), end: (u16, u16)) -> Self {
        Self::new(start.0 * 60 + start.1, end.0 * 60 + end.1)
    }

    /// The inclusive start, in minutes since midnight.
    pub const fn start(&self) -> u16 {
        self.start
    }

    /// The exclusive end, in minutes since midnight.
    pub const fn end(&self) -> u16 {
        self.end
    }

    /// Length of the range in minutes, zero for ranges whose end is not after their start.
    pub const fn minutes(&self) -> u16 {
        self.end.saturating_sub(self.start)
    }

    /// Strict interval intersection. Ranges that merely touch do not overlap.
    pub const fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", ClockTime(self.start), ClockTime(self.end))
    }
}

impl FromStr for TimeRange {
    type Err = ParseRangeError;

    /// Parses `HH:MM-HH:MM`, with `24:00` allowed as the end of the day.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const RE: &str = r"^\s*(\d{1,2}):(\d{2})\s*[-~]\s*(\d{1,2}):(\d{2})\s*$";
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

        let captures = re
            .captures(s)
            .ok_or_else(|| ParseRangeError::Format(s.to_string()))?;
        let start = clock_minutes(&captures[1], &captures[2])?;
        let end = clock_minutes(&captures[3], &captures[4])?;
        Ok(Self::new(start, end))
    }
}

fn clock_minutes(hour: &str, minute: &str) -> Result<u16, ParseRangeError> {
    let invalid = || ParseRangeError::Clock(format!("{hour}:{minute}"));
    let hour: u16 = hour.parse().map_err(|_| invalid())?;
    let minute: u16 = minute.parse().map_err(|_| invalid())?;
    match (hour, minute) {
        (24, 0) => Ok(MINUTES_PER_DAY),
        (0..=23, 0..=59) => Ok(hour * 60 + minute),
        _ => Err(invalid()),
    }
}

/// Error returned when a string is not a valid `HH:MM-HH:MM` range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseRangeError {
    /// The input does not look like `HH:MM-HH:MM`.
    #[error("invalid time range `{0}`, expected HH:MM-HH:MM")]
    Format(String),

    /// One of the clock times is out of range.
    #[error("invalid clock time `{0}`")]
    Clock(String),
}

/// Displays minutes since midnight as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime(pub u16);

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Identifier of a range stored in a schedule.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct RangeId(Uuid);

impl RangeId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RangeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A validated range together with its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DayRange {
    /// Identifier used to address the range in updates and removals.
    pub id: RangeId,

    /// The time-of-day interval.
    #[serde(flatten)]
    pub range: TimeRange,
}
