// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use crate::{DayRange, RangeError, RangeId, TimeRange, Weekday, validate_range};

/// Weekly availability: for each weekday, ranges sorted by start that never overlap.
///
/// Every mutation is validated first, and a rejected mutation leaves the schedule unchanged.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WeeklySchedule {
    #[serde(default)]
    days: BTreeMap<Weekday, Vec<DayRange>>,
}

impl Default for WeeklySchedule {
    /// Weekdays 09:00-12:00 and 13:00-17:00, weekends free.
    fn default() -> Self {
        let mut schedule = Self::empty();
        let seed = [
            TimeRange::from_hm((9, 0), (12, 0)),
            TimeRange::from_hm((13, 0), (17, 0)),
        ];
        for day in &Weekday::ALL[1..6] {
            let ranges = schedule.days.entry(*day).or_default();
            ranges.extend(seed.iter().map(|&range| DayRange {
                id: RangeId::generate(),
                range,
            }));
        }
        schedule
    }
}

impl WeeklySchedule {
    /// A schedule with no availability on any day.
    pub fn empty() -> Self {
        let days = Weekday::ALL.into_iter().map(|a| (a, Vec::new())).collect();
        Self { days }
    }

    /// The ranges of a day, sorted by start.
    pub fn ranges(&self, day: Weekday) -> &[DayRange] {
        self.days.get(&day).map_or(&[], Vec::as_slice)
    }

    /// Iterates over all days in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[DayRange])> {
        Weekday::ALL.into_iter().map(|day| (day, self.ranges(day)))
    }

    /// Looks up a range by id on the given day.
    pub fn get(&self, day: Weekday, id: RangeId) -> Option<&DayRange> {
        self.ranges(day).iter().find(|a| a.id == id)
    }

    /// Whether no day holds any range.
    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }

    /// Adds a range to a day, returning the id assigned to it.
    pub fn add_range(&mut self, day: Weekday, range: TimeRange) -> Result<RangeId, RangeError> {
        validate_range(self.ranges(day), range, None)?;

        let id = RangeId::generate();
        let ranges = self.days.entry(day).or_default();
        ranges.push(DayRange { id, range });
        sort_by_start(ranges);
        Ok(id)
    }

    /// Replaces the range `id` on a day with `range`.
    pub fn update_range(
        &mut self,
        day: Weekday,
        id: RangeId,
        range: TimeRange,
    ) -> Result<(), RangeError> {
        if self.get(day, id).is_none() {
            return Err(RangeError::NotFound { day, id });
        }
        validate_range(self.ranges(day), range, Some(id))?;

        let ranges = self.days.entry(day).or_default();
        if let Some(entry) = ranges.iter_mut().find(|a| a.id == id) {
            *entry = DayRange { id, range };
        }
        sort_by_start(ranges);
        Ok(())
    }

    /// Removes the range `id` from a day, returning its interval.
    pub fn remove_range(&mut self, day: Weekday, id: RangeId) -> Result<TimeRange, RangeError> {
        let ranges = self.days.entry(day).or_default();
        match ranges.iter().position(|a| a.id == id) {
            Some(index) => Ok(ranges.remove(index).range),
            None => Err(RangeError::NotFound { day, id }),
        }
    }

    /// Removes every range from a day.
    pub fn clear_day(&mut self, day: Weekday) {
        self.days.entry(day).or_default().clear();
    }

    /// Removes every range from every day.
    pub fn clear_all(&mut self) {
        for ranges in self.days.values_mut() {
            ranges.clear();
        }
    }

    /// Overwrites every other day with a copy of `source`'s ranges.
    pub fn replicate(&mut self, source: Weekday) {
        self.replicate_to(source, &Weekday::ALL);
    }

    /// Overwrites each of `targets` with a copy of `source`'s ranges.
    ///
    /// Prior ranges on a target are discarded, not merged. Copies get fresh ids so that days stay
    /// independent. `source` itself is skipped if listed.
    pub fn replicate_to(&mut self, source: Weekday, targets: &[Weekday]) {
        let template: Vec<TimeRange> = self.ranges(source).iter().map(|a| a.range).collect();
        for &day in targets.iter().filter(|&&day| day != source) {
            let copy = template
                .iter()
                .map(|&range| DayRange {
                    id: RangeId::generate(),
                    range,
                })
                .collect();
            self.days.insert(day, copy);
        }
    }

    /// Rebuilds the schedule through the validator, as needed for data from outside the process.
    ///
    /// Ids are preserved, days are re-sorted, and the first invalid range is reported. An id may
    /// appear only once per day.
    pub fn revalidate(self) -> Result<Self, RangeError> {
        let mut checked = Self::empty();
        for (day, ranges) in self.days {
            let target = checked.days.entry(day).or_default();
            for entry in ranges {
                if target.iter().any(|a| a.id == entry.id) {
                    return Err(RangeError::DuplicateId { day, id: entry.id });
                }
                validate_range(target, entry.range, None)?;
                target.push(entry);
            }
            sort_by_start(target);
        }
        Ok(checked)
    }
}

fn sort_by_start(ranges: &mut [DayRange]) {
    ranges.sort_by_key(|a| a.range.start());
}
