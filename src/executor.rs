use anyhow::Result;
use colored::*;
use reqwest::Client;
use std::fmt;
use std::io::{BufRead, Write};

use crate::actions::{clear_drive, confirm_action};

pub const ENDPOINT: &str = "http://localhost:3000/api/drive/clear";

const UNKNOWN_ERROR: &str = "Không xác định";

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Cancelled,
    Cleared { deleted_count: i64, message: String },
    Rejected { error: Option<String> },
    Failed { reason: String },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Cancelled => write!(f, "Đã hủy thao tác xóa"),
            Outcome::Cleared { deleted_count, message } => write!(
                f,
                "Đã xóa thành công {} file/thư mục\nThông báo: {}",
                deleted_count, message
            ),
            Outcome::Rejected { error } => {
                write!(f, "Lỗi: {}", error.as_deref().unwrap_or(UNKNOWN_ERROR))
            }
            Outcome::Failed { reason } => write!(f, "Có lỗi xảy ra: {}", reason),
        }
    }
}

impl Outcome {
    pub fn paint(&self) -> ColoredString {
        let text = self.to_string();
        match self {
            Outcome::Cancelled => text.normal(),
            Outcome::Cleared { .. } => text.green(),
            Outcome::Rejected { .. } | Outcome::Failed { .. } => text.red(),
        }
    }
}

/// Runs one confirm-then-clear pass and prints the outcome to `output`.
///
/// Failures of the clear request never escape: they become
/// [`Outcome::Failed`]. Only console I/O errors are returned.
pub async fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    client: &Client,
    endpoint: &str,
    color: bool,
) -> Result<Outcome> {
    let outcome = if confirm_action::execute(input, output, color).await? {
        clear_drive::execute(client, endpoint)
            .await
            .unwrap_or_else(|e| Outcome::Failed { reason: format!("{:#}", e) })
    } else {
        Outcome::Cancelled
    };

    if color {
        writeln!(output, "{}", outcome.paint())?;
    } else {
        writeln!(output, "{}", outcome)?;
    }
    output.flush()?;
    Ok(outcome)
}
