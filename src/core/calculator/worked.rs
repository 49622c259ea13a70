//! Worked and remaining time at a given instant.

use crate::core::calculator::expected::end_time;
use crate::core::calculator::status::status;
use crate::models::rules::WorkRules;
use crate::models::schedule::NormalizedSchedule;
use crate::models::work_status::WorkStatus;
use chrono::{Duration, NaiveDateTime};

/// Time worked so far. Frozen during the break, never negative.
pub fn worked_duration(
    schedule: &NormalizedSchedule,
    rules: &WorkRules,
    now: NaiveDateTime,
) -> Duration {
    let worked = match status(schedule, rules, now) {
        WorkStatus::NotStarted => Duration::zero(),
        WorkStatus::WorkingPreLunch => now - schedule.start(),
        WorkStatus::OnBreak => schedule.pre_lunch_work(),
        WorkStatus::WorkingPostLunch | WorkStatus::Completed => {
            schedule.pre_lunch_work() + (now - schedule.lunch_end())
        }
    };

    worked.max(Duration::zero())
}

/// Signed time until the end of the day; negative once in overtime.
pub fn remaining_duration(
    schedule: &NormalizedSchedule,
    rules: &WorkRules,
    now: NaiveDateTime,
) -> Duration {
    end_time(schedule, rules) - now
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn short_lunch_day() -> NormalizedSchedule {
        NormalizedSchedule::from_instants(
            p("2025-06-02 09:00"),
            p("2025-06-02 13:00"),
            p("2025-06-02 13:30"),
        )
        .unwrap()
    }

    fn worked(now: &str) -> Duration {
        worked_duration(&short_lunch_day(), &WorkRules::default(), p(now))
    }

    #[test]
    fn nothing_worked_before_start() {
        assert_eq!(worked("2025-06-02 07:00"), Duration::zero());
    }

    #[test]
    fn morning_counts_from_start() {
        assert_eq!(worked("2025-06-02 12:00"), Duration::hours(3));
    }

    #[test]
    fn break_freezes_the_counter() {
        assert_eq!(worked("2025-06-02 13:00"), Duration::hours(4));
        assert_eq!(worked("2025-06-02 13:20"), Duration::hours(4));
        assert_eq!(worked("2025-06-02 13:30"), Duration::hours(4));
    }

    #[test]
    fn afternoon_adds_to_the_morning() {
        assert_eq!(
            worked("2025-06-02 13:45"),
            Duration::hours(4) + Duration::minutes(15)
        );
    }

    #[test]
    fn counter_keeps_running_in_overtime() {
        assert_eq!(worked("2025-06-02 18:30"), Duration::hours(9));
    }

    #[test]
    fn remaining_turns_negative_in_overtime() {
        let rules = WorkRules::default();
        let s = short_lunch_day();
        assert_eq!(remaining_duration(&s, &rules, p("2025-06-02 17:00")), Duration::minutes(30));
        assert_eq!(remaining_duration(&s, &rules, p("2025-06-02 17:30")), Duration::zero());
        assert_eq!(remaining_duration(&s, &rules, p("2025-06-02 18:00")), Duration::minutes(-30));
    }

    #[test]
    fn remaining_before_start_includes_the_whole_day() {
        let rules = WorkRules::default();
        let s = short_lunch_day();
        assert_eq!(
            remaining_duration(&s, &rules, p("2025-06-02 08:00")),
            Duration::hours(9) + Duration::minutes(30)
        );
    }
}
