// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use jiff::tz::TimeZone;
use slotwise_core::{Availability, FileStore, ScheduleSettings};

use crate::range_formatter::format_minutes;
use crate::util::{ArgOutputFormat, report};

#[derive(Debug, Clone)]
pub struct CmdSettings {
    pub slot: Option<u32>,
    pub buffer: Option<u32>,
    pub notice: Option<u32>,
    pub timezone: Option<String>,

    pub output_format: ArgOutputFormat,
}

impl CmdSettings {
    pub const NAME: &str = "settings";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("config")
            .about("Show or change the slot settings")
            .long_about(
                "\
Show or change the slot settings. Without any option the current settings are shown, \
otherwise the given options are changed and the rest are kept.",
            )
            .arg(
                arg!(--slot <MINUTES> "Length of every slot, in minutes")
                    .value_parser(value_parser!(u32).range(1..=1440)),
            )
            .arg(
                arg!(--buffer <MINUTES> "Idle minutes between two slots")
                    .value_parser(value_parser!(u32)),
            )
            .arg(
                arg!(--notice <HOURS> "Minimum hours between now and a bookable slot")
                    .value_parser(value_parser!(u32)),
            )
            .arg(arg!(--timezone <TZ> "IANA timezone of the schedule, e.g. Europe/Paris"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            slot: matches.get_one("slot").copied(),
            buffer: matches.get_one("buffer").copied(),
            notice: matches.get_one("notice").copied(),
            timezone: matches.get_one("timezone").cloned(),

            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
            && self.buffer.is_none()
            && self.notice.is_none()
            && self.timezone.is_none()
    }

    pub fn run(self, availability: &mut Availability<FileStore>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "running settings...");
        if !self.is_empty() {
            let settings = self.apply(availability.settings().clone())?;
            report(availability.update_settings(settings)?);
        }

        print_settings(availability.settings(), self.output_format)
    }

    /// Overlays the given options on `settings`.
    pub fn apply(&self, mut settings: ScheduleSettings) -> Result<ScheduleSettings, Box<dyn Error>> {
        if let Some(timezone) = &self.timezone {
            TimeZone::get(timezone).map_err(|e| format!("Unknown timezone `{timezone}`: {e}"))?;
            settings.timezone = timezone.clone();
        }
        if let Some(slot) = self.slot {
            settings.slot_minutes = slot;
        }
        if let Some(buffer) = self.buffer {
            settings.buffer_minutes = buffer;
        }
        if let Some(notice) = self.notice {
            settings.min_notice_hours = notice;
        }
        Ok(settings)
    }
}

fn print_settings(
    settings: &ScheduleSettings,
    format: ArgOutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        ArgOutputFormat::Json => println!("{}", serde_json::to_string_pretty(settings)?),
        ArgOutputFormat::Table => {
            let minutes = |a: u32| format_minutes(u16::try_from(a).unwrap_or(u16::MAX));
            println!("{:<10} {}", "Slot".bold(), minutes(settings.slot_minutes));
            println!("{:<10} {}", "Buffer".bold(), minutes(settings.buffer_minutes));
            println!("{:<10} {}h", "Notice".bold(), settings.min_notice_hours);
            println!("{:<10} {}", "Timezone".bold(), settings.timezone);
        }
    }
    Ok(())
}
