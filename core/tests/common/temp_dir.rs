// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary state directories for integration tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary state directory, removed when dropped.
#[derive(Debug)]
pub struct TempState {
    base_dir: TempDir,

    /// State directory for persisted availability. Not created until the first write.
    pub state_dir: PathBuf,
}

impl TempState {
    /// Creates a new temporary base directory.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let base = tempfile::tempdir()?;
        let state_dir = base.path().join("state");
        Ok(Self {
            base_dir: base,
            state_dir,
        })
    }

    /// The base directory holding the state directory.
    #[must_use]
    pub fn base(&self) -> &Path {
        self.base_dir.path()
    }
}

/// Sets up a temporary state directory for integration tests.
///
/// This is a convenience wrapper around [`TempState::new`].
///
/// # Errors
///
/// Returns an error if directory creation fails.
pub fn setup_temp_state() -> Result<TempState, Box<dyn std::error::Error>> {
    TempState::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_state_lives_under_base() {
        let temp = setup_temp_state().unwrap();
        assert!(temp.base().exists());
        assert!(temp.state_dir.starts_with(temp.base()));
        assert!(!temp.state_dir.exists());
    }

    #[test]
    fn temp_state_cleanup_on_drop() {
        let base = {
            let temp = TempState::new().unwrap();
            temp.base().to_path_buf()
        };
        assert!(!base.exists());
    }
}
