use std::io::Write;

use super::Result;
use super::models::ReviewThread;
use crate::shared::table::{flatten_newlines, pad_right, truncate_chars};

const ID_WIDTH: usize = 20;
const PATH_WIDTH: usize = 30;
const LINE_WIDTH: usize = 5;
const STATUS_WIDTH: usize = 10;
const SEPARATOR_WIDTH: usize = 100;
const COMMENT_PREVIEW_CHARS: usize = 50;

const OPEN_STATUS: &str = "OPEN";

pub fn format_header() -> String {
    format!(
        "{} {} {} {} COMMENT",
        pad_right("THREAD ID", ID_WIDTH),
        pad_right("PATH", PATH_WIDTH),
        pad_right("LINE", LINE_WIDTH),
        pad_right("STATUS", STATUS_WIDTH),
    )
}

pub fn format_separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Single-line preview of a comment body.
pub fn comment_preview(body: &str) -> String {
    truncate_chars(&flatten_newlines(body), COMMENT_PREVIEW_CHARS)
}

pub fn format_row(thread: &ReviewThread) -> String {
    let body = thread
        .first_comment()
        .map(|c| c.body.as_str())
        .unwrap_or_default();

    format!(
        "{} {} {} {} {}",
        pad_right(&thread.id, ID_WIDTH),
        pad_right(&thread.path, PATH_WIDTH),
        pad_right(&thread.line.to_string(), LINE_WIDTH),
        pad_right(OPEN_STATUS, STATUS_WIDTH),
        comment_preview(body),
    )
}

/// Write the header, separator, and one row per thread.
///
/// Rows are written as threads arrive; the first error stops the table
/// after the rows already written.
pub fn write_inventory<W, I>(out: &mut W, threads: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = Result<ReviewThread>>,
{
    writeln!(out, "{}", format_header())?;
    writeln!(out, "{}", format_separator())?;
    for thread in threads {
        writeln!(out, "{}", format_row(&thread?))?;
    }
    Ok(())
}
