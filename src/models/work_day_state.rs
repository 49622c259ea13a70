use crate::models::rules::WorkRules;
use crate::models::work_status::WorkStatus;
use chrono::{Duration, NaiveDateTime};

/// Snapshot of the work day at one instant. Recomputed on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkDayState {
    pub now: NaiveDateTime,
    pub end: NaiveDateTime,
    pub worked: Duration,
    /// Signed: negative means overtime.
    pub remaining: Duration,
    pub status: WorkStatus,
    /// Signed: positive = lunch finished early, negative = lunch ran over.
    pub lunch_savings: Duration,
}

impl WorkDayState {
    pub fn is_overtime(&self) -> bool {
        self.remaining < Duration::zero()
    }

    pub fn overtime(&self) -> Duration {
        if self.is_overtime() {
            -self.remaining
        } else {
            Duration::zero()
        }
    }

    /// Share of the required work already done, 0..=100.
    pub fn progress_percent(&self, rules: &WorkRules) -> f64 {
        let required = rules.required_work.num_seconds();
        if required <= 0 {
            return 0.0;
        }

        let pct = self.worked.num_seconds() as f64 / required as f64 * 100.0;
        pct.clamp(0.0, 100.0)
    }
}
