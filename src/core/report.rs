//! Bounded status report rendering.
//!
//! The report is sized to the terminal so one invocation fills the screen
//! without scrolling away the prompt: an optional unrecorded-changes summary,
//! the commit graph, then filler lines padding up to the line budget.

use crate::core::snapshot::RepoSnapshot;

/// Line budget when the terminal size cannot be detected.
pub const FALLBACK_LINE_BUDGET: usize = 24;

/// Placeholder used to pad the report when the graph is short.
const FILLER_LINE: &str = "-";

/// Current terminal height in rows, if stdout is attached to a terminal.
pub fn terminal_height() -> Option<usize> {
    crossterm::terminal::size()
        .ok()
        .and_then(|(_cols, rows)| (rows > 0).then_some(rows as usize))
}

/// Formats the snapshot into a report of at most `terminal_height - 1` lines
/// (one row reserved for the shell prompt), or [`FALLBACK_LINE_BUDGET`] lines
/// when the height is undetected.
pub fn render(snapshot: &RepoSnapshot, terminal_height: Option<usize>) -> String {
    let budget = terminal_height
        .map(|height| height.saturating_sub(1))
        .unwrap_or(FALLBACK_LINE_BUDGET);

    let mut lines: Vec<String> = Vec::with_capacity(budget);

    if snapshot.changes_size > 0 {
        lines.push(format!("+ {} unrecorded changes", snapshot.changes_size));
    }
    lines.extend(snapshot.graph_lines.iter().cloned());

    while lines.len() < budget {
        lines.push(FILLER_LINE.to_string());
    }
    lines.truncate(budget);

    lines.join("\n")
}
