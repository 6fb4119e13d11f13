// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::{Zoned, civil::Date};

use crate::{
    BlobStore, PersistenceWarning, RangeError, RangeId, ScheduleSettings, SettingsError, TimeRange,
    WeekError, WeekPreview, Weekday, WeeklySchedule,
};

/// Everything persisted for one mentor, stored as a single JSON blob.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    /// The weekly ranges.
    pub schedule: WeeklySchedule,

    /// The global settings.
    #[serde(default)]
    pub settings: ScheduleSettings,
}

impl Snapshot {
    /// Decodes and validates a stored blob.
    pub fn decode(blob: &str) -> Result<Self, String> {
        let snapshot: Snapshot = serde_json::from_str(blob).map_err(|e| e.to_string())?;
        snapshot.settings.validate().map_err(|e| e.to_string())?;
        let schedule = snapshot.schedule.revalidate().map_err(|e| e.to_string())?;
        Ok(Self {
            schedule,
            settings: snapshot.settings,
        })
    }
}

/// Result of an operation that succeeded in memory, with a warning if it could not be persisted.
#[derive(Debug)]
#[must_use]
pub struct Persisted<T> {
    /// The operation's result.
    pub value: T,

    /// Set when the store could not be read or written.
    pub warning: Option<PersistenceWarning>,
}

impl<T> Persisted<T> {
    /// Drops the warning, keeping the value.
    pub fn into_value(self) -> T {
        self.value
    }

    fn map<U>(self, f: impl FnOnce(T) -> U) -> Persisted<U> {
        Persisted {
            value: f(self.value),
            warning: self.warning,
        }
    }
}

/// The availability of one mentor session: the single writer of its schedule and settings.
///
/// The in-memory state is the source of truth. Each successful mutation is written to the store
/// right away, and a failed write is reported without undoing the mutation.
#[derive(Debug)]
pub struct Availability<S: BlobStore> {
    store: S,
    key: String,
    state: Snapshot,
}

/// Store key holding the availability of `mentor`.
pub fn store_key(mentor: &str) -> String {
    format!("availability/{mentor}")
}

impl<S: BlobStore> Availability<S> {
    /// Loads the availability of `mentor` from `store`.
    ///
    /// Falls back to the default schedule when nothing is stored, or when the stored blob cannot be
    /// read or is malformed; the latter two also produce a warning.
    #[tracing::instrument(skip(store))]
    pub fn open(store: S, mentor: &str) -> Persisted<Self> {
        let key = store_key(mentor);
        let (state, warning) = match store.get(&key) {
            Ok(Some(blob)) => match Snapshot::decode(&blob) {
                Ok(state) => (state, None),
                Err(e) => {
                    tracing::warn!(%key, err = %e, "malformed availability, using defaults");
                    (Snapshot::default(), Some(PersistenceWarning::Malformed(e)))
                }
            },
            Ok(None) => {
                tracing::debug!(%key, "no stored availability, seeding defaults");
                (Snapshot::default(), None)
            }
            Err(e) => {
                tracing::warn!(%key, err = %e, "failed to read availability, using defaults");
                (Snapshot::default(), Some(PersistenceWarning::Read(e)))
            }
        };

        Persisted {
            value: Self { store, key, state },
            warning,
        }
    }

    /// The current weekly schedule.
    pub fn schedule(&self) -> &WeeklySchedule {
        &self.state.schedule
    }

    /// The current settings.
    pub fn settings(&self) -> &ScheduleSettings {
        &self.state.settings
    }

    /// The full persisted state.
    pub fn snapshot(&self) -> &Snapshot {
        &self.state
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Adds a range to a day.
    pub fn add_range(
        &mut self,
        day: Weekday,
        range: TimeRange,
    ) -> Result<Persisted<RangeId>, RangeError> {
        tracing::debug!(%day, %range, "adding range");
        let id = self.state.schedule.add_range(day, range)?;
        Ok(self.persist().map(|()| id))
    }

    /// Replaces the range `id` on a day.
    pub fn update_range(
        &mut self,
        day: Weekday,
        id: RangeId,
        range: TimeRange,
    ) -> Result<Persisted<()>, RangeError> {
        tracing::debug!(%day, %id, %range, "updating range");
        self.state.schedule.update_range(day, id, range)?;
        Ok(self.persist())
    }

    /// Removes the range `id` from a day.
    pub fn remove_range(
        &mut self,
        day: Weekday,
        id: RangeId,
    ) -> Result<Persisted<TimeRange>, RangeError> {
        tracing::debug!(%day, %id, "removing range");
        let range = self.state.schedule.remove_range(day, id)?;
        Ok(self.persist().map(|()| range))
    }

    /// Removes every range of a day.
    pub fn clear_day(&mut self, day: Weekday) -> Persisted<()> {
        tracing::debug!(%day, "clearing day");
        self.state.schedule.clear_day(day);
        self.persist()
    }

    /// Removes every range of every day.
    pub fn clear_all(&mut self) -> Persisted<()> {
        tracing::debug!("clearing all days");
        self.state.schedule.clear_all();
        self.persist()
    }

    /// Overwrites every other day with `source`'s ranges.
    pub fn replicate(&mut self, source: Weekday) -> Persisted<()> {
        tracing::debug!(%source, "replicating day to the whole week");
        self.state.schedule.replicate(source);
        self.persist()
    }

    /// Overwrites each of `targets` with `source`'s ranges.
    pub fn replicate_to(&mut self, source: Weekday, targets: &[Weekday]) -> Persisted<()> {
        tracing::debug!(%source, ?targets, "replicating day");
        self.state.schedule.replicate_to(source, targets);
        self.persist()
    }

    /// Replaces the settings after validating them.
    pub fn update_settings(
        &mut self,
        settings: ScheduleSettings,
    ) -> Result<Persisted<()>, SettingsError> {
        tracing::debug!(?settings, "updating settings");
        settings.validate()?;
        self.state.settings = settings;
        Ok(self.persist())
    }

    /// All slots of the week `offset` weeks away from the week containing `today`.
    pub fn preview(&self, offset: i64, today: Date) -> Result<WeekPreview, WeekError> {
        WeekPreview::build(&self.state.schedule, &self.state.settings, offset, today)
    }

    /// Like [`Self::preview`] relative to `now`, without the slots inside the minimum notice window.
    pub fn bookable(&self, offset: i64, now: &Zoned) -> Result<WeekPreview, WeekError> {
        let settings = &self.state.settings;
        let local_now = settings.local_now(now);
        let preview = self.preview(offset, local_now.date())?;
        Ok(preview.with_min_notice(local_now, settings.min_notice_hours))
    }

    fn persist(&self) -> Persisted<()> {
        let warning = match serde_json::to_string(&self.state) {
            Ok(blob) => match self.store.set(&self.key, &blob) {
                Ok(()) => None,
                Err(e) => {
                    tracing::warn!(key = %self.key, err = %e, "failed to persist availability");
                    Some(PersistenceWarning::Write(e))
                }
            },
            Err(e) => {
                tracing::warn!(key = %self.key, err = %e, "failed to encode availability");
                Some(PersistenceWarning::Encode(e))
            }
        };

        Persisted { value: (), warning }
    }
}
