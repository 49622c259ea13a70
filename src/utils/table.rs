//! Table rendering utilities for CLI outputs.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

pub fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid regex"));
    re.replace_all(s, "").into_owned()
}

/// Terminal columns taken by `s`, colors excluded.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub title: Option<String>,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            title: None,
            columns,
            rows: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn total_width(&self) -> usize {
        self.columns.iter().map(|c| c.width + 3).sum::<usize>() + 1
    }

    fn separator(&self, left: &str, mid: &str, right: &str) -> String {
        let parts: Vec<String> = self.columns.iter().map(|c| "─".repeat(c.width + 2)).collect();
        format!("{left}{}{right}\n", parts.join(mid))
    }

    fn line(&self, cells: &[String]) -> String {
        let mut out = String::from("│");
        for (i, col) in self.columns.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            out.push_str(&format!(" {} │", super::formatting::pad_right(cell, col.width)));
        }
        out.push('\n');
        out
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        if let Some(title) = &self.title {
            let pad = self.total_width().saturating_sub(display_width(title)) / 2;
            out.push_str(&format!("{}{}\n", " ".repeat(pad), title));
        }

        // Header
        let headers: Vec<String> = self
            .columns
            .iter()
            .map(|c| super::formatting::bold(&c.header))
            .collect();
        out.push_str(&self.separator("╭", "┬", "╮"));
        out.push_str(&self.line(&headers));
        out.push_str(&self.separator("├", "┼", "┤"));

        // Rows: long plain-text cells wrap onto continuation lines
        for row in &self.rows {
            let wrapped: Vec<Vec<String>> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| wrap_cell(row.get(i).map(String::as_str).unwrap_or(""), col.width))
                .collect();
            let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

            for l in 0..height {
                let cells: Vec<String> = wrapped
                    .iter()
                    .map(|lines| lines.get(l).cloned().unwrap_or_default())
                    .collect();
                out.push_str(&self.line(&cells));
            }
        }
        out.push_str(&self.separator("╰", "┴", "╯"));

        out
    }
}

fn wrap_cell(cell: &str, width: usize) -> Vec<String> {
    // Colored cells are short labels; only plain text is wrapped.
    if display_width(cell) <= width || cell.contains('\x1b') {
        return vec![cell.to_string()];
    }
    textwrap::wrap(cell, width.max(1))
        .into_iter()
        .map(|c| c.into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_ansi_removes_colors() {
        assert_eq!(strip_ansi("\x1b[1;32mdone\x1b[0m"), "done");
        assert_eq!(display_width("\x1b[31m-00:30:00\x1b[0m"), 9);
    }

    #[test]
    fn render_aligns_rows() {
        let mut t = Table::new(vec![Column::new("Description", 12), Column::new("Time", 8)]);
        t.add_row(vec!["Start Time".into(), "09:00".into()]);
        t.add_row(vec!["End Time".into(), "\x1b[32m17:30\x1b[0m".into()]);
        let out = t.render();

        let widths: Vec<usize> = out.lines().map(display_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{out}");
        assert!(out.contains("Start Time"));
        assert!(out.contains("17:30"));
    }

    #[test]
    fn long_cells_wrap() {
        let mut t = Table::new(vec![Column::new("Details", 10)]);
        t.add_row(vec!["Time gained from short lunch".into()]);
        let out = t.render();
        // borders and header take 4 lines; "Time|gained|from short|lunch"
        assert_eq!(out.lines().count(), 8, "{out}");
        assert!(out.contains("from short"));
    }
}
