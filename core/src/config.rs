// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::{Availability, FileStore, Persisted};

/// The name of the application.
pub const APP_NAME: &str = "slotwise";

/// Configuration for the availability engine.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Directory holding the persisted availability.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// Mentor whose availability is edited.
    #[serde(default = "default_mentor")]
    pub mentor: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: None,
            mentor: default_mentor(),
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        if self.mentor.trim().is_empty() {
            return Err("Mentor must not be empty".into());
        }

        match &self.state_dir {
            Some(a) => {
                self.state_dir = Some(
                    expand_path(a)
                        .map_err(|e| format!("Failed to expand state directory path: {e}"))?,
                )
            }

            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!(err = %e, "failed to get state directory"),
            },
        };

        Ok(())
    }

    /// Store rooted at the state directory. Call [`Self::normalize`] first.
    pub fn file_store(&self) -> Result<FileStore, Box<dyn Error>> {
        let dir = self
            .state_dir
            .as_ref()
            .ok_or("State directory is not configured")?;
        Ok(FileStore::new(dir))
    }

    /// Opens the configured mentor's availability from the state directory.
    pub fn open(&self) -> Result<Persisted<Availability<FileStore>>, Box<dyn Error>> {
        Ok(Availability::open(self.file_store()?, &self.mentor))
    }
}

fn default_mentor() -> String {
    "default".to_string()
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    let state_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_STATE_HOME/", "${XDG_STATE_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in state_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_state_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or("User-specific home directory not found".into())
}

fn get_state_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_local_dir();
    state_dir.ok_or("User-specific state directory not found".into())
}
