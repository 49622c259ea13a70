use crate::core::calculator::expected::end_time;
use crate::models::rules::WorkRules;
use crate::models::schedule::NormalizedSchedule;
use crate::models::work_status::WorkStatus;
use chrono::NaiveDateTime;

/// Classify `now` against the schedule boundaries.
///
/// Each phase is closed at its upper bound: `now == lunch_start` is still
/// pre-lunch work and `now == lunch_end` is still the break.
pub fn status(schedule: &NormalizedSchedule, rules: &WorkRules, now: NaiveDateTime) -> WorkStatus {
    if now < schedule.start() {
        WorkStatus::NotStarted
    } else if now <= schedule.lunch_start() {
        WorkStatus::WorkingPreLunch
    } else if now <= schedule.lunch_end() {
        WorkStatus::OnBreak
    } else if now <= end_time(schedule, rules) {
        WorkStatus::WorkingPostLunch
    } else {
        WorkStatus::Completed
    }
}
