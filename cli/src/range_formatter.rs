// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Colorize;
use slotwise_core::{DayRange, Weekday, WeeklySchedule};

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::ArgOutputFormat;

/// A stored range with the day and position it is listed under.
#[derive(Debug, Clone, Copy)]
pub struct RangeRow {
    pub day: Weekday,
    pub position: usize,
    pub range: DayRange,
}

impl RangeRow {
    /// Rows of one day, positions starting at 1.
    pub fn of_day(schedule: &WeeklySchedule, day: Weekday) -> Vec<Self> {
        schedule
            .ranges(day)
            .iter()
            .enumerate()
            .map(|(i, range)| Self {
                day,
                position: i + 1,
                range: *range,
            })
            .collect()
    }

    /// Rows of the whole week, in canonical day order.
    pub fn of_week(schedule: &WeeklySchedule) -> Vec<Self> {
        Weekday::ALL
            .into_iter()
            .flat_map(|day| Self::of_day(schedule, day))
            .collect()
    }
}

#[derive(Debug)]
pub struct RangeFormatter {
    columns: Vec<RangeColumn>,
    format: ArgOutputFormat,
}

impl RangeFormatter {
    pub fn new(columns: Vec<RangeColumn>) -> Self {
        Self {
            columns,
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, rows: &'a [RangeRow]) -> Display<'a> {
        Display {
            rows,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    rows: &'a [RangeRow],
    formatter: &'a RangeFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            ArgOutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, self.rows)
            ),
            ArgOutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new().with_indent("   "), columns, self.rows)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeColumn {
    Day,
    Position,
    Range,
    Duration,
    Id,
}

impl RangeColumn {
    /// Columns shown under a day heading.
    pub fn listing() -> Vec<Self> {
        vec![Self::Position, Self::Range, Self::Duration]
    }

    /// Columns of the machine-readable output.
    pub fn json() -> Vec<Self> {
        vec![
            Self::Day,
            Self::Position,
            Self::Range,
            Self::Duration,
            Self::Id,
        ]
    }
}

impl TableColumn<RangeRow> for RangeColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Day => "day",
            Self::Position => "position",
            Self::Range => "range",
            Self::Duration => "duration",
            Self::Id => "id",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a RangeRow) -> Cow<'a, str> {
        match self {
            Self::Day => data.day.name().into(),
            Self::Position => format!("#{}", data.position).into(),
            Self::Range => data.range.range.to_string().into(),
            Self::Duration => format_minutes(data.range.range.minutes()).into(),
            Self::Id => data.range.id.to_string().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Position | Self::Duration => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}

/// Formats a duration in minutes as e.g. `3h`, `45m` or `1h30m`.
pub fn format_minutes(minutes: u16) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h{m}m"),
    }
}

/// Prints each day with its ranges, days without ranges included.
pub fn print_week(schedule: &WeeklySchedule, format: ArgOutputFormat) {
    match format {
        ArgOutputFormat::Json => {
            let formatter = RangeFormatter::new(RangeColumn::json()).with_output_format(format);
            println!("{}", formatter.format(&RangeRow::of_week(schedule)));
        }
        ArgOutputFormat::Table => {
            for day in Weekday::ALL {
                print_day(schedule, day);
            }
        }
    }
}

/// Prints the ranges of one day under a heading.
pub fn print_day(schedule: &WeeklySchedule, day: Weekday) {
    println!(" {} {}", "►".green(), day.name().bold());
    let rows = RangeRow::of_day(schedule, day);
    if rows.is_empty() {
        println!("   {}", "No availability".dimmed());
    } else {
        let formatter = RangeFormatter::new(RangeColumn::listing());
        println!("{}", formatter.format(&rows));
    }
}
