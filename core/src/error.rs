// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

use crate::{RangeId, TimeRange, Weekday};

/// Rejection of a range mutation. A rejected mutation leaves the schedule untouched.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// The range does not end after it starts.
    #[error("range {0} must end after it starts")]
    InvalidOrder(TimeRange),

    /// The range ends after midnight.
    #[error("range {0} extends past the end of the day")]
    OutOfDay(TimeRange),

    /// The range intersects another range on the same day.
    #[error("range {candidate} overlaps {existing}")]
    Overlap {
        /// The rejected range.
        candidate: TimeRange,
        /// The stored range it conflicts with.
        existing: TimeRange,
    },

    /// No range with the given id exists on the day.
    #[error("no range {id} on {day}")]
    NotFound {
        /// Day that was searched.
        day: Weekday,
        /// The missing id.
        id: RangeId,
    },

    /// The same id appears twice on a day. Only possible in data loaded from outside.
    #[error("range id {id} is repeated on {day}")]
    DuplicateId {
        /// Day holding the repeated id.
        day: Weekday,
        /// The repeated id.
        id: RangeId,
    },
}

/// Rejection of a settings update.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// Slots must last at least one minute.
    #[error("slot duration must be at least one minute")]
    ZeroSlot,

    /// Slots must fit in a day.
    #[error("slot duration of {0} minutes does not fit in a day")]
    SlotTooLong(u32),
}

/// Failure of a [`crate::BlobStore`] operation.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying I/O failure.
    #[error("I/O error on `{key}`: {source}")]
    Io {
        /// Key being accessed.
        key: String,
        /// The I/O error.
        #[source]
        source: io::Error,
    },

    /// The store is not available at all.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Degraded durability. Never blocks an in-memory mutation.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum PersistenceWarning {
    /// The stored availability could not be read; defaults are in use.
    #[error("failed to read stored availability, using defaults: {0}")]
    Read(#[source] StoreError),

    /// The stored availability is malformed; defaults are in use.
    #[error("stored availability is malformed, using defaults: {0}")]
    Malformed(String),

    /// The availability could not be serialized.
    #[error("failed to encode availability: {0}")]
    Encode(#[source] serde_json::Error),

    /// The availability could not be written.
    #[error("failed to write availability: {0}")]
    Write(#[source] StoreError),
}

/// The requested week cannot be represented in the calendar.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeekError {
    /// The week offset moves outside the supported date range.
    #[error("week offset {0} is outside the supported calendar range")]
    OutOfRange(i64),
}
