use crate::core::calculator::{expected, lunch, status, worked};
use crate::core::clock::Clock;
use crate::models::{rules::WorkRules, schedule::NormalizedSchedule, work_day_state::WorkDayState};
use chrono::NaiveDateTime;

pub struct Core;

impl Core {
    /// Evaluate the whole day at `now`. Pure: same inputs, same state.
    pub fn evaluate(
        schedule: &NormalizedSchedule,
        rules: &WorkRules,
        now: NaiveDateTime,
    ) -> WorkDayState {
        WorkDayState {
            now,
            end: expected::end_time(schedule, rules),
            worked: worked::worked_duration(schedule, rules, now),
            remaining: worked::remaining_duration(schedule, rules, now),
            status: status::status(schedule, rules, now),
            lunch_savings: lunch::lunch_savings(schedule, rules),
        }
    }

    /// Evaluate with a single fresh read of `clock`.
    pub fn evaluate_with(
        schedule: &NormalizedSchedule,
        rules: &WorkRules,
        clock: &dyn Clock,
    ) -> WorkDayState {
        Self::evaluate(schedule, rules, clock.now())
    }
}
