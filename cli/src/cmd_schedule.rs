// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, num::NonZeroUsize};

use clap::{ArgAction, ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use slotwise_core::{Availability, FileStore, TimeRange, Weekday};

use crate::range_formatter::{format_minutes, print_day, print_week};
use crate::util::{
    ArgOutputFormat, arg_day, arg_position, arg_range, get_day, get_position, get_range, range_at,
    report,
};

#[derive(Debug, Clone, Copy)]
pub struct CmdShow {
    pub output_format: ArgOutputFormat,
}

impl CmdShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("Show the weekly availability")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn new() -> Self {
        Self {
            output_format: ArgOutputFormat::Table,
        }
    }

    pub fn run(self, availability: &mut Availability<FileStore>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing availability...");
        if self.output_format == ArgOutputFormat::Table {
            let settings = availability.settings();
            println!(
                "{} {} slots, {} buffer, {}h notice, {}",
                "Settings:".bold(),
                format_minutes(clamp_minutes(settings.slot_minutes)),
                format_minutes(clamp_minutes(settings.buffer_minutes)),
                settings.min_notice_hours,
                settings.timezone.italic(),
            );
        }
        print_week(availability.schedule(), self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdAdd {
    pub day: Weekday,
    pub range: TimeRange,
}

impl CmdAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Add a time range to a day")
            .arg(arg_day())
            .arg(arg_range())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            day: get_day(matches),
            range: get_range(matches),
        }
    }

    pub fn run(self, availability: &mut Availability<FileStore>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding range...");
        report(availability.add_range(self.day, self.range)?);
        print_day(availability.schedule(), self.day);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdUpdate {
    pub day: Weekday,
    pub position: NonZeroUsize,
    pub range: TimeRange,
}

impl CmdUpdate {
    pub const NAME: &str = "update";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("edit")
            .about("Change a time range of a day")
            .arg(arg_day())
            .arg(arg_position())
            .arg(arg_range())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            day: get_day(matches),
            position: get_position(matches),
            range: get_range(matches),
        }
    }

    pub fn run(self, availability: &mut Availability<FileStore>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "updating range...");
        let id = range_at(availability.schedule(), self.day, self.position)?;
        report(availability.update_range(self.day, id, self.range)?);
        print_day(availability.schedule(), self.day);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdRemove {
    pub day: Weekday,
    pub position: NonZeroUsize,
}

impl CmdRemove {
    pub const NAME: &str = "remove";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Remove a time range from a day")
            .arg(arg_day())
            .arg(arg_position())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            day: get_day(matches),
            position: get_position(matches),
        }
    }

    pub fn run(self, availability: &mut Availability<FileStore>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "removing range...");
        let id = range_at(availability.schedule(), self.day, self.position)?;
        let removed = report(availability.remove_range(self.day, id)?);
        println!("{} {} from {}", "Removed".green(), removed, self.day);
        print_day(availability.schedule(), self.day);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdClear {
    /// Day to clear, the whole week when unset.
    pub day: Option<Weekday>,
}

impl CmdClear {
    pub const NAME: &str = "clear";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Remove every time range of a day, or of the whole week")
            .arg(
                arg!(day: [DAY] "Day of the week, omit to clear every day")
                    .value_parser(value_parser!(Weekday)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            day: matches.get_one::<Weekday>("day").copied(),
        }
    }

    pub fn run(self, availability: &mut Availability<FileStore>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "clearing ranges...");
        match self.day {
            Some(day) => {
                report(availability.clear_day(day));
                println!("{} {}", "Cleared".green(), day);
            }
            None => {
                report(availability.clear_all());
                println!("{} every day", "Cleared".green());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdReplicate {
    pub day: Weekday,

    /// Days to overwrite, every other day when empty.
    pub to: Vec<Weekday>,
}

impl CmdReplicate {
    pub const NAME: &str = "replicate";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("copy")
            .about("Copy the time ranges of a day to other days")
            .long_about(
                "\
Copy the time ranges of a day to other days, replacing what they had. \
Without --to, every other day of the week is overwritten.",
            )
            .arg(arg_day())
            .arg(
                arg!(--to <DAY> "Target day, may be repeated")
                    .value_parser(value_parser!(Weekday))
                    .num_args(1..)
                    .action(ArgAction::Append),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            day: get_day(matches),
            to: matches
                .get_many::<Weekday>("to")
                .map(|days| days.copied().collect())
                .unwrap_or_default(),
        }
    }

    pub fn run(self, availability: &mut Availability<FileStore>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "replicating day...");
        if self.to.is_empty() {
            report(availability.replicate(self.day));
        } else {
            report(availability.replicate_to(self.day, &self.to));
        }
        print_week(availability.schedule(), ArgOutputFormat::Table);
        Ok(())
    }
}

fn clamp_minutes(minutes: u32) -> u16 {
    u16::try_from(minutes).unwrap_or(u16::MAX)
}
