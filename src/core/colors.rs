//! Color mapping for commit log actions.
//!
//! # Public API
//! - [`get_action_color_style`]: Get the color function for a commit action
//! - [`format_commit_line`]: Numbered, timestamped, colored history line
//!
//! # Color Scheme
//! - **Added**: Green
//! - **Removed**: Red

use crate::core::repository::{CommitAction, CommitRecord};
use colored::*;

/// Returns a closure that colors any text the way `action` is shown
pub fn get_action_color_style(action: CommitAction) -> Box<dyn Fn(&str) -> ColoredString> {
    match action {
        CommitAction::Added => Box::new(|text: &str| text.green()),
        CommitAction::Removed => Box::new(|text: &str| text.red()),
    }
}

/// Format a commit record for the history view.
///
/// The log line itself is kept verbatim so it can be copied as-is.
pub fn format_commit_line(index: usize, record: &CommitRecord) -> String {
    let color_fn = get_action_color_style(record.action);
    let index_colored = format!("[{index}]").cyan().bold();
    let timestamp = record
        .timestamp
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
        .bright_black();
    format!(
        "{index_colored} {timestamp} {}",
        color_fn(&record.to_string())
    )
}
