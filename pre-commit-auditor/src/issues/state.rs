//! Current tracking issue state of a repository.

use super::marker::marker_key;
use super::TrackingIssue;
use crate::discovery::Repository;
use serde::Serialize;
use tracing::{debug, warn};

/// Where a repository's tracking issue stands before reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum IssueState {
    /// No tracking issue has ever been opened.
    NoIssue,
    /// A tracking issue is open.
    OpenIssueExists { number: u64 },
    /// Only closed tracking issues exist.
    ClosedIssueExists { number: u64 },
}

/// Returns true if `issue` is the auditor's tracking issue.
///
/// `issue` must come from the repository's own issue list. Any auditor marker
/// matches, so an issue opened before a repository rename or transfer still
/// counts even though its marker names the old location. Unmarked issues fall
/// back to an exact title match.
#[must_use]
pub fn is_tracking_issue(issue: &TrackingIssue, repository: &Repository, title: &str) -> bool {
    match marker_key(&issue.body) {
        Some(key) => {
            if key != repository.full_name {
                debug!(
                    repo = %repository.full_name,
                    marker = key,
                    issue_number = issue.number,
                    "Tracking issue marker names a previous repository location"
                );
            }
            true
        }
        None => issue.title == title,
    }
}

/// Derives the tracking state of `repository` from its issues.
///
/// An open issue wins over closed ones. With several open issues the lowest
/// number is used; with only closed issues the highest number is used.
#[must_use]
pub fn find_issue_state(
    issues: &[TrackingIssue],
    repository: &Repository,
    title: &str,
) -> IssueState {
    let tracking: Vec<&TrackingIssue> = issues
        .iter()
        .filter(|issue| is_tracking_issue(issue, repository, title))
        .collect();

    let open: Vec<u64> = tracking
        .iter()
        .filter(|issue| issue.is_open())
        .map(|issue| issue.number)
        .collect();

    if let Some(&number) = open.iter().min() {
        if open.len() > 1 {
            warn!(
                repo = %repository.full_name,
                count = open.len(),
                kept = number,
                "Multiple open tracking issues found"
            );
        }
        return IssueState::OpenIssueExists { number };
    }

    tracking
        .iter()
        .map(|issue| issue.number)
        .max()
        .map_or(IssueState::NoIssue, |number| IssueState::ClosedIssueExists {
            number,
        })
}
