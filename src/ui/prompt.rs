use crate::errors::{AppError, AppResult};
use std::io::{BufRead, Write};

/// Ask a yes/no question; only `y` or `yes` counts as yes.
pub fn confirm<R: BufRead, W: Write>(question: &str, input: &mut R, out: &mut W) -> AppResult<bool> {
    write!(out, "{question} [y/N]: ")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(AppError::from)?;
    let ans = answer.trim().to_ascii_lowercase();

    Ok(ans == "y" || ans == "yes")
}
