//! Anchors a raw schedule to concrete instants, resolving midnight crossings.

use crate::models::schedule::{NormalizedSchedule, ScheduleSpec};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Anchor `spec` to `reference_date`.
///
/// `start` always stays on `reference_date`. `lunch_start` moves to the next
/// day when its time of day is earlier than `start`'s; `lunch_end` is anchored
/// to the date of `lunch_start` and moves one more day when its time of day is
/// earlier than `lunch_start`'s. Never looks further than one day ahead.
pub fn normalize(spec: &ScheduleSpec, reference_date: NaiveDate) -> NormalizedSchedule {
    let start = reference_date.and_time(spec.start);
    let lunch_start = anchor_after(start, spec.lunch_start);
    let lunch_end = anchor_after(lunch_start, spec.lunch_end);

    tracing::debug!(%start, %lunch_start, %lunch_end, "schedule normalized");

    NormalizedSchedule::anchored(start, lunch_start, lunch_end)
}

/// Place `time` on the date of `previous`, or the day after when it would
/// otherwise fall before `previous`.
fn anchor_after(previous: NaiveDateTime, time: NaiveTime) -> NaiveDateTime {
    let same_day = previous.date().and_time(time);
    if time < previous.time() {
        same_day + Duration::days(1)
    } else {
        same_day
    }
}

/// Place a bare time of day within the shift of `schedule`.
///
/// The time goes on `start`'s date. When that falls before `start` but the
/// same time on the next day is still within the shift (up to `end`), the
/// next day is used.
pub fn anchor_in_shift(
    schedule: &NormalizedSchedule,
    end: NaiveDateTime,
    time: NaiveTime,
) -> NaiveDateTime {
    let same_day = schedule.start().date().and_time(time);
    if same_day >= schedule.start() {
        return same_day;
    }
    match same_day.checked_add_signed(Duration::days(1)) {
        Some(next_day) if next_day <= end => next_day,
        _ => same_day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn same_day_schedule_is_left_alone() {
        let s = normalize(&ScheduleSpec::new(t("09:00"), t("13:00"), t("14:00")), day());
        assert_eq!(s.start(), day().and_time(t("09:00")));
        assert_eq!(s.lunch_start(), day().and_time(t("13:00")));
        assert_eq!(s.lunch_end(), day().and_time(t("14:00")));
    }

    #[test]
    fn lunch_after_midnight_moves_both_lunch_anchors() {
        let s = normalize(&ScheduleSpec::new(t("23:00"), t("00:30"), t("01:00")), day());
        let next = day().succ_opt().unwrap();

        assert_eq!(s.start().date(), day());
        assert_eq!(s.lunch_start().date(), next);
        assert_eq!(s.lunch_end().date(), next);
        assert_eq!(s.lunch_duration(), Duration::minutes(30));
    }

    #[test]
    fn lunch_crossing_midnight_moves_only_lunch_end() {
        let s = normalize(&ScheduleSpec::new(t("18:00"), t("23:45"), t("00:15")), day());
        assert_eq!(s.lunch_start().date(), day());
        assert_eq!(s.lunch_end().date(), day().succ_opt().unwrap());
        assert_eq!(s.lunch_duration(), Duration::minutes(30));
    }

    #[test]
    fn equal_times_are_not_shifted() {
        let s = normalize(&ScheduleSpec::new(t("09:00"), t("09:00"), t("09:00")), day());
        assert_eq!(s.start(), s.lunch_start());
        assert_eq!(s.lunch_start(), s.lunch_end());
    }

    #[test]
    fn bare_time_after_midnight_stays_in_the_night_shift() {
        let s = normalize(&ScheduleSpec::new(t("23:00"), t("00:30"), t("01:00")), day());
        let end = day().succ_opt().unwrap().and_time(t("07:30"));
        let next = day().succ_opt().unwrap();

        assert_eq!(anchor_in_shift(&s, end, t("00:45")), next.and_time(t("00:45")));
        assert_eq!(anchor_in_shift(&s, end, t("23:30")), day().and_time(t("23:30")));
        // after the shift ended: before start on the reference day
        assert_eq!(anchor_in_shift(&s, end, t("12:00")), day().and_time(t("12:00")));
    }

    #[test]
    fn bare_time_before_a_day_shift_is_not_moved() {
        let s = normalize(&ScheduleSpec::new(t("09:00"), t("13:00"), t("14:00")), day());
        let end = day().and_time(t("18:00"));
        assert_eq!(anchor_in_shift(&s, end, t("08:00")), day().and_time(t("08:00")));
    }

    #[test]
    fn start_is_never_shifted() {
        let s = normalize(&ScheduleSpec::new(t("23:59"), t("00:00"), t("00:01")), day());
        assert_eq!(s.start(), day().and_time(t("23:59")));
    }
}
