//! Sanity checks on a normalized schedule.
//!
//! Warnings are plain data: an implausible schedule is still evaluated, and
//! whether to proceed is left to the caller.

use crate::core::calculator::expected::end_time;
use crate::models::rules::{ValidationLimits, WorkRules};
use crate::models::schedule::NormalizedSchedule;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleWarning {
    LunchTooSoon,
    LunchTooShort,
    LunchTooLong,
    DayTooLong,
}

impl ScheduleWarning {
    pub fn message(&self) -> &'static str {
        match self {
            ScheduleWarning::LunchTooSoon => "lunch starts too soon after work start",
            ScheduleWarning::LunchTooShort => "lunch too short",
            ScheduleWarning::LunchTooLong => "lunch too long",
            ScheduleWarning::DayTooLong => "total day too long",
        }
    }
}

impl fmt::Display for ScheduleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Run every rule and report all that fire, in a fixed order.
pub fn validate(
    schedule: &NormalizedSchedule,
    rules: &WorkRules,
    limits: &ValidationLimits,
) -> Vec<ScheduleWarning> {
    let mut warnings = Vec::new();

    if schedule.pre_lunch_work() < limits.min_lead_before_lunch {
        warnings.push(ScheduleWarning::LunchTooSoon);
    }

    let lunch = schedule.lunch_duration();
    if lunch < limits.min_lunch {
        warnings.push(ScheduleWarning::LunchTooShort);
    }
    if lunch > limits.max_lunch {
        warnings.push(ScheduleWarning::LunchTooLong);
    }

    if end_time(schedule, rules) - schedule.start() > limits.max_day_span {
        warnings.push(ScheduleWarning::DayTooLong);
    }

    for w in &warnings {
        tracing::info!(warning = %w, "schedule validation");
    }

    warnings
}
