use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Raw schedule as typed by the user: three times of day, no date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleSpec {
    pub start: NaiveTime,
    pub lunch_start: NaiveTime,
    pub lunch_end: NaiveTime,
}

impl ScheduleSpec {
    pub fn new(start: NaiveTime, lunch_start: NaiveTime, lunch_end: NaiveTime) -> Self {
        Self {
            start,
            lunch_start,
            lunch_end,
        }
    }
}

/// Schedule anchored to concrete local instants.
///
/// Always satisfies `start <= lunch_start <= lunch_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NormalizedSchedule {
    start: NaiveDateTime,
    lunch_start: NaiveDateTime,
    lunch_end: NaiveDateTime,
}

impl NormalizedSchedule {
    /// Build from already-anchored instants; `None` when they are out of order.
    pub fn from_instants(
        start: NaiveDateTime,
        lunch_start: NaiveDateTime,
        lunch_end: NaiveDateTime,
    ) -> Option<Self> {
        (start <= lunch_start && lunch_start <= lunch_end).then_some(Self {
            start,
            lunch_start,
            lunch_end,
        })
    }

    /// Build from instants the normalizer already ordered.
    pub(crate) fn anchored(
        start: NaiveDateTime,
        lunch_start: NaiveDateTime,
        lunch_end: NaiveDateTime,
    ) -> Self {
        debug_assert!(start <= lunch_start && lunch_start <= lunch_end);
        Self {
            start,
            lunch_start,
            lunch_end,
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn lunch_start(&self) -> NaiveDateTime {
        self.lunch_start
    }

    pub fn lunch_end(&self) -> NaiveDateTime {
        self.lunch_end
    }

    /// Actual lunch length.
    pub fn lunch_duration(&self) -> Duration {
        self.lunch_end - self.lunch_start
    }

    /// Work done before lunch begins.
    pub fn pre_lunch_work(&self) -> Duration {
        self.lunch_start - self.start
    }
}
