//! Commit message text handling.
//!
//! Messages read from files go through the same `strip` cleanup git applies
//! when it records a commit, so a message validated from a file is checked the
//! way it would be stored.

/// Split raw message text into lines without terminators.
///
/// A single trailing empty line (left by the final newline) is dropped.
pub fn message_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Apply git's `strip` cleanup mode.
///
/// - trailing whitespace is removed from every line,
/// - lines starting with `#` are dropped,
/// - runs of blank lines collapse into one,
/// - leading and trailing blank lines are removed.
pub fn cleanup_strip<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        let line = line.as_ref();
        if line.starts_with('#') {
            continue;
        }
        let line = line.trim_end();
        if line.is_empty() && out.last().map_or(true, |prev| prev.is_empty()) {
            continue;
        }
        out.push(line.to_string());
    }
    while out.last().is_some_and(|line| line.is_empty()) {
        out.pop();
    }
    out
}
