// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Colorize;
use slotwise_core::{GeneratedSlot, WeekPreview};

use crate::range_formatter::format_minutes;
use crate::table::{Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::ArgOutputFormat;

#[derive(Debug)]
pub struct SlotFormatter {
    columns: Vec<SlotColumn>,
    format: ArgOutputFormat,
}

impl SlotFormatter {
    pub fn new(columns: Vec<SlotColumn>) -> Self {
        Self {
            columns,
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, slots: &'a [GeneratedSlot]) -> Display<'a> {
        Display {
            slots,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    slots: &'a [GeneratedSlot],
    formatter: &'a SlotFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            ArgOutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, self.slots)
            ),
            ArgOutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new().with_indent("   "), columns, self.slots)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotColumn {
    Date,
    Day,
    Start,
    End,
    Range,
    Duration,
}

impl SlotColumn {
    /// Columns shown under a day heading.
    pub fn listing() -> Vec<Self> {
        vec![Self::Range, Self::Duration]
    }

    /// Columns of the machine-readable output.
    pub fn json() -> Vec<Self> {
        vec![Self::Date, Self::Day, Self::Start, Self::End]
    }
}

impl TableColumn<GeneratedSlot> for SlotColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Date => "date",
            Self::Day => "day",
            Self::Start => "start",
            Self::End => "end",
            Self::Range => "range",
            Self::Duration => "duration",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a GeneratedSlot) -> Cow<'a, str> {
        match self {
            Self::Date => data.date.to_string().into(),
            Self::Day => data.weekday.name().into(),
            Self::Start => match data.start_datetime() {
                Ok(dt) => dt.strftime("%Y-%m-%dT%H:%M").to_string().into(),
                Err(_) => "".into(),
            },
            Self::End => slotwise_core::ClockTime(data.end()).to_string().into(),
            Self::Range => data.range.to_string().into(),
            Self::Duration => format_minutes(data.range.minutes()).into(),
        }
    }
}

/// Prints the slots of a week, grouped by day in table form.
pub fn print_preview(preview: &WeekPreview, format: ArgOutputFormat) {
    match format {
        ArgOutputFormat::Json => {
            let slots: Vec<GeneratedSlot> = preview
                .days
                .iter()
                .flat_map(|a| a.slots.iter().copied())
                .collect();
            let formatter = SlotFormatter::new(SlotColumn::json()).with_output_format(format);
            println!("{}", formatter.format(&slots));
        }
        ArgOutputFormat::Table => {
            let formatter = SlotFormatter::new(SlotColumn::listing());
            for day in &preview.days {
                println!(
                    " {} {} {}",
                    "►".green(),
                    day.weekday.short_name().bold(),
                    day.date.to_string().italic()
                );
                if day.slots.is_empty() {
                    println!("   {}", "No slots".dimmed());
                } else {
                    println!("{}", formatter.format(&day.slots));
                }
            }
        }
    }
}
