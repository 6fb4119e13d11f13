// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use slotwise_core::{APP_NAME, Availability, FileStore};
use tracing_subscriber::EnvFilter;

use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_preview::CmdPreview;
use crate::cmd_schedule::{CmdAdd, CmdClear, CmdRemove, CmdReplicate, CmdShow, CmdUpdate};
use crate::cmd_settings::CmdSettings;
use crate::config::parse_config;
use crate::util::report;

/// Run the slotwise command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Weekly availability and bookable slots for mentors.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to show
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/slotwise/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/slotwise/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdShow::command())
            .subcommand(CmdAdd::command())
            .subcommand(CmdUpdate::command())
            .subcommand(CmdRemove::command())
            .subcommand(CmdClear::command())
            .subcommand(CmdReplicate::command())
            .subcommand(CmdSettings::command())
            .subcommand(CmdPreview::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdShow::NAME, matches)) => Show(CmdShow::from(matches)),
            Some((CmdAdd::NAME, matches)) => Add(CmdAdd::from(matches)),
            Some((CmdUpdate::NAME, matches)) => Update(CmdUpdate::from(matches)),
            Some((CmdRemove::NAME, matches)) => Remove(CmdRemove::from(matches)),
            Some((CmdClear::NAME, matches)) => Clear(CmdClear::from(matches)),
            Some((CmdReplicate::NAME, matches)) => Replicate(CmdReplicate::from(matches)),
            Some((CmdSettings::NAME, matches)) => Settings(CmdSettings::from(matches)),
            Some((CmdPreview::NAME, matches)) => Preview(CmdPreview::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Show(CmdShow::new()),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the weekly availability
    Show(CmdShow),

    /// Add a range to a day
    Add(CmdAdd),

    /// Change a range of a day
    Update(CmdUpdate),

    /// Remove a range from a day
    Remove(CmdRemove),

    /// Clear a day or the whole week
    Clear(CmdClear),

    /// Copy a day to other days
    Replicate(CmdReplicate),

    /// Show or change the settings
    Settings(CmdSettings),

    /// Preview the slots of a week
    Preview(CmdPreview),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Show(a)      => Self::run_with(config, |x| a.run(x)).await,
            Add(a)       => Self::run_with(config, |x| a.run(x)).await,
            Update(a)    => Self::run_with(config, |x| a.run(x)).await,
            Remove(a)    => Self::run_with(config, |x| a.run(x)).await,
            Clear(a)     => Self::run_with(config, |x| a.run(x)).await,
            Replicate(a) => Self::run_with(config, |x| a.run(x)).await,
            Settings(a)  => Self::run_with(config, |x| a.run(x)).await,
            Preview(a)   => Self::run_with(config, |x| a.run(x)).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: FnOnce(&mut Availability<FileStore>) -> Result<(), Box<dyn Error>>,
    {
        tracing::debug!("parsing configuration...");
        let mut config = parse_config(config).await?;
        config.normalize()?;

        let mut availability = report(config.open()?);
        f(&mut availability)
    }
}
