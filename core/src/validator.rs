// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{DayRange, MINUTES_PER_DAY, RangeError, RangeId, TimeRange};

/// Checks whether `candidate` may be stored on a day currently holding `ranges`.
///
/// The range identified by `excluding`, if any, is ignored; this is the range an update replaces.
/// Ranges that only touch (`a.end == b.start`) are accepted. The validator never mutates anything,
/// callers insert the range and re-sort the day themselves.
pub fn validate_range(
    ranges: &[DayRange],
    candidate: TimeRange,
    excluding: Option<RangeId>,
) -> Result<(), RangeError> {
    if candidate.end() <= candidate.start() {
        return Err(RangeError::InvalidOrder(candidate));
    }

    if candidate.end() > MINUTES_PER_DAY {
        return Err(RangeError::OutOfDay(candidate));
    }

    match ranges
        .iter()
        .filter(|other| Some(other.id) != excluding)
        .find(|other| candidate.overlaps(&other.range))
    {
        Some(other) => Err(RangeError::Overlap {
            candidate,
            existing: other.range,
        }),
        None => Ok(()),
    }
}
