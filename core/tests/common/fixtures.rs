// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::cell::Cell;
use std::path::Path;

use slotwise_core::{BlobStore, Config, ScheduleSettings, StoreError, TimeRange};

/// Parses a `HH:MM-HH:MM` range, panicking on malformed input.
///
/// # Example
///
/// ```ignore
/// let morning = range("09:00-12:00");
/// ```
#[must_use]
pub fn range(s: &str) -> TimeRange {
    s.parse()
        .unwrap_or_else(|e| panic!("invalid test range {s:?}: {e}"))
}

/// Creates settings in UTC with no minimum notice.
#[must_use]
pub fn test_settings(slot_minutes: u32, buffer_minutes: u32) -> ScheduleSettings {
    ScheduleSettings {
        timezone: "UTC".to_string(),
        slot_minutes,
        buffer_minutes,
        min_notice_hours: 0,
    }
}

/// Creates a configuration storing `mentor`'s availability under `state_dir`.
#[must_use]
pub fn test_config(state_dir: &Path, mentor: &str) -> Config {
    Config {
        state_dir: Some(state_dir.to_path_buf()),
        mentor: mentor.to_string(),
    }
}

/// A store whose reads and writes can be made to fail, counting the writes it accepted.
#[derive(Debug, Default)]
pub struct FailingStore {
    /// Blob returned by successful reads.
    pub blob: Option<String>,

    /// Whether reads fail.
    pub fail_reads: bool,

    /// Whether writes fail.
    pub fail_writes: bool,

    writes: Cell<usize>,
}

impl FailingStore {
    /// A store that rejects every write.
    #[must_use]
    pub fn rejecting_writes() -> Self {
        Self {
            fail_writes: true,
            ..Default::default()
        }
    }

    /// A store that cannot be read.
    #[must_use]
    pub fn unreadable() -> Self {
        Self {
            fail_reads: true,
            ..Default::default()
        }
    }

    /// A store holding `blob`.
    #[must_use]
    pub fn holding(blob: &str) -> Self {
        Self {
            blob: Some(blob.to_string()),
            ..Default::default()
        }
    }

    /// Number of writes accepted so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl BlobStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        match self.fail_reads {
            true => Err(StoreError::Unavailable("read refused".to_string())),
            false => Ok(self.blob.clone()),
        }
    }

    fn set(&self, _key: &str, _blob: &str) -> Result<(), StoreError> {
        match self.fail_writes {
            true => Err(StoreError::Unavailable("disk full".to_string())),
            false => {
                self.writes.set(self.writes.get() + 1);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_parses_clock_notation() {
        assert_eq!(range("09:00-12:00"), TimeRange::from_hm((9, 0), (12, 0)));
    }

    #[test]
    fn failing_store_counts_accepted_writes() {
        let store = FailingStore::default();
        store.set("k", "v").unwrap();
        store.set("k", "v").unwrap();
        assert_eq!(store.writes(), 2);

        let store = FailingStore::rejecting_writes();
        assert!(store.set("k", "v").is_err());
        assert_eq!(store.writes(), 0);
    }
}
