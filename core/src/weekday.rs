// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

/// Day of the week. Declaration order is the canonical order, and weeks start on Sunday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    /// Sunday, the first day of the week.
    #[cfg_attr(feature = "clap", value(alias = "sun"))]
    Sunday,

    /// Monday.
    #[cfg_attr(feature = "clap", value(alias = "mon"))]
    Monday,

    /// Tuesday.
    #[cfg_attr(feature = "clap", value(alias = "tue"))]
    Tuesday,

    /// Wednesday.
    #[cfg_attr(feature = "clap", value(alias = "wed"))]
    Wednesday,

    /// Thursday.
    #[cfg_attr(feature = "clap", value(alias = "thu"))]
    Thursday,

    /// Friday.
    #[cfg_attr(feature = "clap", value(alias = "fri"))]
    Friday,

    /// Saturday, the last day of the week.
    #[cfg_attr(feature = "clap", value(alias = "sat"))]
    Saturday,
}

impl Weekday {
    /// All weekdays in canonical order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Full lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "sunday",
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
        }
    }

    /// Three-letter capitalized abbreviation, e.g. `Mon`.
    pub const fn short_name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sun",
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
        }
    }
}

impl From<jiff::civil::Weekday> for Weekday {
    fn from(value: jiff::civil::Weekday) -> Self {
        use jiff::civil::Weekday as W;
        match value {
            W::Sunday => Weekday::Sunday,
            W::Monday => Weekday::Monday,
            W::Tuesday => Weekday::Tuesday,
            W::Wednesday => Weekday::Wednesday,
            W::Thursday => Weekday::Thursday,
            W::Friday => Weekday::Friday,
            W::Saturday => Weekday::Saturday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ParseWeekdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| day.name() == lower || day.name()[..3] == lower)
            .ok_or_else(|| ParseWeekdayError(s.to_string()))
    }
}

/// Error returned when a string names no weekday.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown weekday `{0}`")]
pub struct ParseWeekdayError(String);
