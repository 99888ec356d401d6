//! Reconciliation outcomes.

use serde::Serialize;

/// What actually happened to a repository's tracking issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum IssueOutcome {
    /// A tracking issue was opened.
    Created {
        /// GitHub issue number.
        number: u64,
        /// GitHub issue URL.
        url: String,
    },

    /// The tracking issue was commented on and closed.
    Closed {
        /// GitHub issue number.
        number: u64,
    },

    /// No write was needed.
    Unchanged,

    /// Dry run: an issue would have been opened.
    WouldCreate,

    /// Dry run: the issue would have been closed.
    WouldClose {
        /// GitHub issue number.
        number: u64,
    },
}
