// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use jiff::Zoned;
use slotwise_core::{Availability, FileStore, WeekPreview};

use crate::slot_formatter::print_preview;
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdPreview {
    /// Weeks away from the current one, negative for past weeks.
    pub week: i64,

    /// Keep slots inside the minimum notice window.
    pub all: bool,

    pub output_format: ArgOutputFormat,
}

impl CmdPreview {
    pub const NAME: &str = "preview";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("slots")
            .about("Preview the bookable slots of a week")
            .arg(
                arg!(-w --week <OFFSET> "Weeks from the current one, e.g. 1 for next week")
                    .value_parser(value_parser!(i64))
                    .allow_negative_numbers(true)
                    .default_value("0"),
            )
            .arg(arg!(-a --all "Include slots inside the minimum notice window"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            week: matches.get_one("week").copied().unwrap_or(0),
            all: matches.get_flag("all"),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, availability: &mut Availability<FileStore>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "previewing slots...");
        let preview = self.preview(availability, &Zoned::now())?;

        if self.output_format == ArgOutputFormat::Table {
            println!(
                "{} {} to {}, {} slot(s)",
                "Week".bold(),
                preview.start,
                preview.end,
                preview.slot_count()
            );
        }
        print_preview(&preview, self.output_format);
        Ok(())
    }

    pub fn preview(
        &self,
        availability: &Availability<FileStore>,
        now: &Zoned,
    ) -> Result<WeekPreview, Box<dyn Error>> {
        let preview = if self.all {
            let today = availability.settings().local_now(now).date();
            availability.preview(self.week, today)?
        } else {
            availability.bookable(self.week, now)?
        };
        Ok(preview)
    }
}
