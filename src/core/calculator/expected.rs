use crate::core::calculator::lunch::bonus_work_time;
use crate::models::rules::WorkRules;
use crate::models::schedule::NormalizedSchedule;
use chrono::NaiveDateTime;

/// End of the work day: start + required work + scheduled lunch, pulled
/// earlier by whatever a short lunch saved. Saturates at the latest
/// representable instant.
pub fn end_time(schedule: &NormalizedSchedule, rules: &WorkRules) -> NaiveDateTime {
    schedule
        .start()
        .checked_add_signed(rules.day_span())
        .and_then(|end| end.checked_sub_signed(bonus_work_time(schedule, rules)))
        .unwrap_or(NaiveDateTime::MAX)
}
