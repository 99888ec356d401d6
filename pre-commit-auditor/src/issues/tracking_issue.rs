//! Tracking issue information.

use serde::Serialize;

/// Whether an issue is open or closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    /// Issue is open.
    Open,
    /// Issue is closed.
    Closed,
}

/// An issue in an audited repository.
#[derive(Debug, Clone, Serialize)]
pub struct TrackingIssue {
    /// GitHub issue number.
    pub number: u64,

    /// Issue title.
    pub title: String,

    /// Issue body, empty if none.
    pub body: String,

    /// Open or closed.
    pub status: IssueStatus,

    /// GitHub issue URL.
    pub url: String,
}

impl TrackingIssue {
    /// Returns true if the issue is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status == IssueStatus::Open
    }
}
