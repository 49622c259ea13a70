//! Terminal reporter: turns a `WorkDayState` into the live status view.
//!
//! Everything here is presentation. The numbers come from `Core::evaluate`,
//! re-run on every frame with a fresh clock read.

use crate::core::clock::Clock;
use crate::core::logic::Core;
use crate::core::validator::ScheduleWarning;
use crate::errors::AppResult;
use crate::models::rules::WorkRules;
use crate::models::schedule::NormalizedSchedule;
use crate::models::work_day_state::WorkDayState;
use crate::models::work_status::WorkStatus;
use crate::utils::colors::{color_for_signed, color_for_status, dim, paint};
use crate::utils::formatting::progress_bar;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_hm, format_hms};
use ansi_term::Colour;
use chrono::{Duration, NaiveDateTime};
use serde::Serialize;
use std::io::{self, Write};

const PROGRESS_CELLS: usize = 30;
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// How close to an event the console notices fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeWindows {
    pub lunch: Duration,
    pub end: Duration,
}

impl Default for NoticeWindows {
    fn default() -> Self {
        Self {
            lunch: Duration::seconds(30),
            end: Duration::seconds(300),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    LunchTime,
    /// Carries the configured end window.
    EndingSoon(Duration),
    DayCompleted,
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::LunchTime => "Lunch time!".to_string(),
            Notice::EndingSoon(window) => format!("Work day ending in {}!", window_text(*window)),
            Notice::DayCompleted => "Work day completed! You can go home now.".to_string(),
        }
    }

    fn colour(&self) -> Colour {
        match self {
            Notice::LunchTime => Colour::Purple,
            Notice::EndingSoon(_) => Colour::Yellow,
            Notice::DayCompleted => Colour::Green,
        }
    }
}

fn window_text(window: Duration) -> String {
    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("1 {unit}")
        } else {
            format!("{n} {unit}s")
        }
    };

    let minutes = window.num_minutes();
    if minutes >= 1 && window.num_seconds() % 60 == 0 {
        plural(minutes, "minute")
    } else {
        plural(window.num_seconds(), "second")
    }
}

/// First matching notice for this frame, if any.
pub fn notice_for(
    schedule: &NormalizedSchedule,
    state: &WorkDayState,
    windows: &NoticeWindows,
) -> Option<Notice> {
    let near = |at: NaiveDateTime, window: Duration| (state.now - at).abs() < window;

    if near(schedule.lunch_start(), windows.lunch) {
        Some(Notice::LunchTime)
    } else if near(state.end, windows.end) {
        Some(Notice::EndingSoon(windows.end))
    } else if state.now >= state.end {
        Some(Notice::DayCompleted)
    } else {
        None
    }
}

/// The status table for one frame.
pub fn render_table(schedule: &NormalizedSchedule, state: &WorkDayState, rules: &WorkRules) -> String {
    let mut table = Table::new(vec![
        Column::new("Description", 20),
        Column::new("Time", 20),
        Column::new("Details", 30),
    ])
    .with_title(&Colour::Cyan.bold().paint("Office Hours").to_string());

    let mut row = |label: &str, value: String, details: &str| {
        table.add_row(vec![label.to_string(), value, dim(details)]);
    };

    row("Start Time", format_hm(schedule.start()), "Work day begins");
    row("Lunch Start", format_hm(schedule.lunch_start()), "Break time");
    row("Lunch End", format_hm(schedule.lunch_end()), "Back to work");
    row("End Time", format_hm(state.end), "Work day ends");
    row(
        "Current Status",
        paint(color_for_status(state.status), state.status.label()),
        &format!("As of {}", state.now.format("%H:%M:%S")),
    );
    row(
        "Worked Time",
        format_hms(state.worked),
        &format!("{:.1}% complete", state.progress_percent(rules)),
    );

    if state.remaining > Duration::zero() {
        row("Remaining Time", format_hms(state.remaining), "Until work ends");
    } else {
        row(
            "Overtime",
            paint(color_for_signed(-1), &format_hms(state.overtime())),
            "Work day exceeded",
        );
    }

    let savings = state.lunch_savings;
    if savings > Duration::zero() {
        row(
            "Lunch Saved",
            paint(color_for_signed(1), &format_hms(savings)),
            "Time gained from short lunch",
        );
    } else if savings < Duration::zero() {
        row(
            "Lunch Overtime",
            paint(color_for_signed(-1), &format_hms(-savings)),
            "Extra lunch time",
        );
    }

    table.render()
}

/// Table, progress bar and notice for one frame.
pub fn render_frame(
    schedule: &NormalizedSchedule,
    state: &WorkDayState,
    rules: &WorkRules,
    windows: &NoticeWindows,
) -> String {
    let mut out = render_table(schedule, state, rules);
    out.push_str(&format!(
        "\nWork Progress {}\n",
        progress_bar(state.progress_percent(rules), PROGRESS_CELLS)
    ));

    if let Some(n) = notice_for(schedule, state, windows) {
        out.push_str(&format!("\n{}\n", n.colour().bold().paint(n.message())));
    }
    out
}

/// Structured view of a frame, for `--json`.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub now: NaiveDateTime,
    #[serde(flatten)]
    pub schedule: NormalizedSchedule,
    pub end: NaiveDateTime,
    pub status: WorkStatus,
    pub status_label: &'static str,
    pub worked_seconds: i64,
    pub remaining_seconds: i64,
    pub lunch_savings_seconds: i64,
    pub progress_percent: f64,
    pub warnings: Vec<String>,
}

impl Snapshot {
    pub fn new(
        schedule: &NormalizedSchedule,
        state: &WorkDayState,
        rules: &WorkRules,
        warnings: &[ScheduleWarning],
    ) -> Self {
        Self {
            now: state.now,
            schedule: *schedule,
            end: state.end,
            status: state.status,
            status_label: state.status.label(),
            worked_seconds: state.worked.num_seconds(),
            remaining_seconds: state.remaining.num_seconds(),
            lunch_savings_seconds: state.lunch_savings.num_seconds(),
            progress_percent: state.progress_percent(rules),
            warnings: warnings.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Drives the refresh loop.
pub struct Reporter<'a> {
    pub schedule: NormalizedSchedule,
    pub rules: WorkRules,
    pub windows: NoticeWindows,
    pub clock: &'a dyn Clock,
}

impl Reporter<'_> {
    pub fn state(&self) -> WorkDayState {
        Core::evaluate_with(&self.schedule, &self.rules, self.clock)
    }

    pub fn frame(&self) -> String {
        let state = self.state();
        tracing::debug!(
            status = state.status.key(),
            worked_secs = state.worked.num_seconds(),
            remaining_secs = state.remaining.num_seconds(),
            "tick"
        );
        render_frame(&self.schedule, &state, &self.rules, &self.windows)
    }

    /// Print one frame.
    pub fn print_once<W: Write>(&self, out: &mut W) -> AppResult<()> {
        write!(out, "{}", self.frame())?;
        out.flush()?;
        Ok(())
    }

    /// Clear, render, sleep; until the process is interrupted.
    pub fn run(&self, refresh: std::time::Duration) -> AppResult<()> {
        let stdout = io::stdout();
        loop {
            {
                let mut out = stdout.lock();
                write!(out, "{CLEAR_SCREEN}")?;
                self.print_once(&mut out)?;
                writeln!(out, "\n{}", dim("Press Ctrl+C to exit"))?;
            }
            std::thread::sleep(refresh);
        }
    }
}
