//! Lunch compensation: how far the actual lunch is from the scheduled one.

use crate::models::rules::WorkRules;
use crate::models::schedule::NormalizedSchedule;
use chrono::Duration;

/// Signed difference `scheduled - actual`.
///
/// Positive when lunch finished early (time regained), negative when it ran
/// over (lunch overtime).
pub fn lunch_savings(schedule: &NormalizedSchedule, rules: &WorkRules) -> Duration {
    rules
        .scheduled_lunch
        .checked_sub(&schedule.lunch_duration())
        .unwrap_or(Duration::MIN)
}

/// Work time credited by a short lunch. Never negative: an overrun lunch
/// does not extend the day.
pub fn bonus_work_time(schedule: &NormalizedSchedule, rules: &WorkRules) -> Duration {
    lunch_savings(schedule, rules).max(Duration::zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn schedule(start: &str, ls: &str, le: &str) -> NormalizedSchedule {
        let p = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
        NormalizedSchedule::from_instants(p(start), p(ls), p(le)).unwrap()
    }

    #[test]
    fn short_lunch_is_a_bonus() {
        let s = schedule("2025-06-02 09:00", "2025-06-02 13:00", "2025-06-02 13:30");
        let rules = WorkRules::default();
        assert_eq!(lunch_savings(&s, &rules), Duration::minutes(30));
        assert_eq!(bonus_work_time(&s, &rules), Duration::minutes(30));
    }

    #[test]
    fn long_lunch_is_reported_but_not_credited() {
        let s = schedule("2025-06-02 09:00", "2025-06-02 13:00", "2025-06-02 14:30");
        let rules = WorkRules::default();
        assert_eq!(lunch_savings(&s, &rules), Duration::minutes(-30));
        assert_eq!(bonus_work_time(&s, &rules), Duration::zero());
    }

    #[test]
    fn exact_lunch_is_neutral() {
        let s = schedule("2025-06-02 09:00", "2025-06-02 12:00", "2025-06-02 13:00");
        let rules = WorkRules::default();
        assert_eq!(lunch_savings(&s, &rules), Duration::zero());
        assert_eq!(bonus_work_time(&s, &rules), Duration::zero());
    }

    #[test]
    fn skipped_lunch_credits_the_whole_scheduled_lunch() {
        let s = schedule("2025-06-02 09:00", "2025-06-02 12:00", "2025-06-02 12:00");
        let rules = WorkRules::new(Duration::hours(8), Duration::minutes(45));
        assert_eq!(bonus_work_time(&s, &rules), Duration::minutes(45));
    }
}
