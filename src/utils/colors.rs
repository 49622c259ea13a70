//! ANSI color helper utilities for terminal output.

use crate::models::work_status::WorkStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Status color, same palette as the live view:
/// not started → cyan, working → green, break → magenta, done → yellow
pub fn color_for_status(status: WorkStatus) -> &'static str {
    match status {
        WorkStatus::NotStarted => CYAN,
        WorkStatus::WorkingPreLunch | WorkStatus::WorkingPostLunch => GREEN,
        WorkStatus::OnBreak => MAGENTA,
        WorkStatus::Completed => YELLOW,
    }
}

/// Signed value color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_signed(value: i64) -> &'static str {
    if value > 0 {
        GREEN
    } else if value < 0 {
        RED
    } else {
        RESET
    }
}

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}

pub fn dim(value: &str) -> String {
    paint(GREY, value)
}
