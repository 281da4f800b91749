//! Table formatting utilities for terminal output.
//!
//! Widths and limits count Unicode scalar values (`char`s), so a column is
//! padded to the same number of characters regardless of script.

/// Pads a string on the right to at least `width` characters.
/// Longer strings are returned unchanged.
///
/// # Examples
/// ```ignore
/// assert_eq!(pad_right("OPEN", 6), "OPEN  ");
/// assert_eq!(pad_right("src/main.rs", 4), "src/main.rs");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    format!("{s:<width$}")
}

/// Keeps at most `max_chars` characters of `s`, with no truncation marker.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// Replaces every `\n` with a single space so multi-line text fits on one row.
pub fn flatten_newlines(s: &str) -> String {
    s.replace('\n', " ")
}
