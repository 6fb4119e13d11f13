// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    io,
    path::{Path, PathBuf},
};

use clap::{ArgMatches, Command, ValueEnum, ValueHint, arg, value_parser};
use clap_complete::{generate, generate_to};
use clap_complete_nushell::Nushell;
use slotwise_core::APP_NAME;

use crate::Cli;

#[derive(Debug, Clone)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,

    /// Directory to write the completion file into, stdout when unset.
    pub out_dir: Option<PathBuf>,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate shell completion for the specified shell")
            .hide(true)
            .arg(
                arg!(shell: <SHELL> "The shell generator to use")
                    .value_parser(value_parser!(Shell)),
            )
            .arg(
                arg!(-o --"out-dir" <DIR> "Write the completion file into DIR instead of stdout")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::DirPath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let shell = match matches.get_one::<Shell>("shell") {
            Some(shell) => *shell,
            None => unreachable!("shell is required"),
        };
        Self {
            shell,
            out_dir: matches.get_one("out-dir").cloned(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        match &self.out_dir {
            Some(dir) => {
                let path = self.write_to(dir)?;
                println!("Completion for {} written to {}", APP_NAME, path.display());
            }
            None => self.generate(&mut io::stdout()),
        }
        Ok(())
    }

    /// Writes the completion script for the `slotwise` binary.
    pub fn generate(&self, buf: &mut impl io::Write) {
        let mut cmd = Cli::command();
        match self.shell.builtin() {
            Some(shell) => generate(shell, &mut cmd, APP_NAME, buf),
            None => generate(Nushell {}, &mut cmd, APP_NAME, buf),
        }
    }

    /// Writes the completion file into `dir`, returning its path.
    pub fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        let mut cmd = Cli::command();
        match self.shell.builtin() {
            Some(shell) => generate_to(shell, &mut cmd, APP_NAME, dir),
            None => generate_to(Nushell {}, &mut cmd, APP_NAME, dir),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    /// The generator shipped with `clap_complete`, `None` for nushell.
    fn builtin(self) -> Option<clap_complete::Shell> {
        use clap_complete::Shell as ClapShell;
        match self {
            Shell::Bash => Some(ClapShell::Bash),
            Shell::Elvish => Some(ClapShell::Elvish),
            Shell::Fish => Some(ClapShell::Fish),
            Shell::PowerShell => Some(ClapShell::PowerShell),
            Shell::Zsh => Some(ClapShell::Zsh),
            Shell::Nushell => None,
        }
    }
}
