// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, num::NonZeroUsize};

use clap::{Arg, ArgMatches, arg, value_parser};
use colored::Colorize;
use slotwise_core::{Persisted, RangeId, TimeRange, Weekday, WeeklySchedule};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

pub fn arg_day() -> Arg {
    arg!(day: <DAY> "Day of the week, e.g. monday or mon").value_parser(value_parser!(Weekday))
}

pub fn get_day(matches: &ArgMatches) -> Weekday {
    match matches.get_one::<Weekday>("day") {
        Some(day) => *day,
        None => unreachable!("day is required"),
    }
}

pub fn arg_range() -> Arg {
    arg!(range: <RANGE> "Time range as HH:MM-HH:MM, 24:00 ends the day")
        .value_parser(value_parser!(TimeRange))
}

pub fn get_range(matches: &ArgMatches) -> TimeRange {
    match matches.get_one::<TimeRange>("range") {
        Some(range) => *range,
        None => unreachable!("range is required"),
    }
}

pub fn arg_position() -> Arg {
    arg!(position: <N> "Position of the range on the day, as listed by `show`")
        .value_parser(value_parser!(NonZeroUsize))
}

pub fn get_position(matches: &ArgMatches) -> NonZeroUsize {
    match matches.get_one::<NonZeroUsize>("position") {
        Some(position) => *position,
        None => unreachable!("position is required"),
    }
}

/// Resolves the 1-based `position` of a range on `day` to its id.
pub fn range_at(
    schedule: &WeeklySchedule,
    day: Weekday,
    position: NonZeroUsize,
) -> Result<RangeId, Box<dyn Error>> {
    let ranges = schedule.ranges(day);
    match ranges.get(position.get() - 1) {
        Some(a) => Ok(a.id),
        None if ranges.is_empty() => Err(format!("No range on {day}").into()),
        None => Err(format!(
            "No range #{position} on {day}, it has {} range(s)",
            ranges.len()
        )
        .into()),
    }
}

/// Reports a persistence warning, if any, and keeps the value.
pub fn report<T>(persisted: Persisted<T>) -> T {
    if let Some(warning) = &persisted.warning {
        eprintln!("{} {}", "Warning:".yellow(), warning);
    }
    persisted.into_value()
}
