use anyhow::Result;
use colored::*;
use std::io::{BufRead, Write};
use tracing::debug;

pub const PROMPT: &str = "Bạn có chắc chắn muốn xóa tất cả dữ liệu? (y/n): ";

/// Prompts once and reports whether the answer was `y` (any case).
///
/// Only the line terminator is stripped; EOF reads as an empty answer.
pub(crate) async fn execute<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    color: bool,
) -> Result<bool> {
    if color {
        write!(output, "{}", PROMPT.yellow())?;
    } else {
        write!(output, "{}", PROMPT)?;
    }
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(&line);

    let confirmed = answer.to_lowercase() == "y";
    debug!(answer, confirmed, "confirmation read");
    Ok(confirmed)
}
