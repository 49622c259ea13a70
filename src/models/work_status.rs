use serde::Serialize;
use std::fmt;

/// Where the current instant falls in the work day.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    NotStarted,
    WorkingPreLunch,
    OnBreak,
    WorkingPostLunch,
    Completed,
}

impl WorkStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WorkStatus::NotStarted => "Not started",
            WorkStatus::WorkingPreLunch => "Working (Pre-lunch)",
            WorkStatus::OnBreak => "On lunch break",
            WorkStatus::WorkingPostLunch => "Working (Post-lunch)",
            WorkStatus::Completed => "Work day completed",
        }
    }

    /// Stable machine-readable key (used by the JSON snapshot).
    pub fn key(&self) -> &'static str {
        match self {
            WorkStatus::NotStarted => "not_started",
            WorkStatus::WorkingPreLunch => "working_pre_lunch",
            WorkStatus::OnBreak => "on_break",
            WorkStatus::WorkingPostLunch => "working_post_lunch",
            WorkStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
