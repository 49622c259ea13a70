//! Time utilities: strict HH:MM parsing, duration strings, HH:MM:SS formatting.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

fn hhmm_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{2}:\d{2}$").expect("valid regex"))
}

fn duration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:(?P<h>\d+)\s*h)?\s*(?:(?P<m>\d+)\s*m(?:in)?)?$").expect("valid regex")
    })
}

/// Parse a 24-hour `HH:MM` time. Two digits each side, nothing else.
pub fn parse_time(t: &str) -> AppResult<NaiveTime> {
    let t = t.trim();
    if !hhmm_re().is_match(t) {
        return Err(AppError::InvalidTime(t.to_string()));
    }
    NaiveTime::parse_from_str(t, "%H:%M").map_err(|_| AppError::InvalidTime(t.to_string()))
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Parse `YYYY-MM-DD HH:MM`, or a bare `HH:MM` placed on a date by `anchor`.
pub fn parse_instant(
    s: &str,
    anchor: impl FnOnce(NaiveTime) -> NaiveDateTime,
) -> AppResult<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        return Ok(dt);
    }
    Ok(anchor(parse_time(s)?))
}

/// Parse `8h`, `45m`, `7h30m`, `1h 30m` or a bare number of minutes.
pub fn parse_duration(s: &str) -> AppResult<Duration> {
    let s = s.trim().to_lowercase();
    let invalid = || AppError::InvalidDuration(s.clone());

    if let Ok(mins) = s.parse::<i64>() {
        return Duration::try_minutes(mins).ok_or_else(invalid);
    }

    let caps = duration_re()
        .captures(&s)
        .filter(|c| c.name("h").is_some() || c.name("m").is_some())
        .ok_or_else(invalid)?;

    let num = |name: &str| -> AppResult<i64> {
        caps.name(name)
            .map(|m| m.as_str().parse::<i64>())
            .transpose()
            .map(|v| v.unwrap_or(0))
            .map_err(|_| invalid())
    };

    let hours = Duration::try_hours(num("h")?).ok_or_else(invalid)?;
    let minutes = Duration::try_minutes(num("m")?).ok_or_else(invalid)?;
    hours.checked_add(&minutes).ok_or_else(invalid)
}

/// `HH:MM:SS`, negative values prefixed with `-`.
pub fn format_hms(d: Duration) -> String {
    let secs = d.num_seconds();
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();
    format!("{}{:02}:{:02}:{:02}", sign, s / 3600, (s % 3600) / 60, s % 60)
}

pub fn format_hm(dt: NaiveDateTime) -> String {
    dt.format("%H:%M").to_string()
}
