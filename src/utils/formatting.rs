//! Formatting utilities used for CLI outputs.

use crate::utils::table::display_width;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad to `width` terminal columns, ignoring ANSI sequences.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// `[██████░░░░]  42.0%`
pub fn progress_bar(percent: f64, cells: usize) -> String {
    let pct = percent.clamp(0.0, 100.0);
    let filled = ((pct / 100.0) * cells as f64).round() as usize;
    format!(
        "[{}{}] {:>5.1}%",
        "█".repeat(filled),
        "░".repeat(cells - filled.min(cells)),
        pct
    )
}
