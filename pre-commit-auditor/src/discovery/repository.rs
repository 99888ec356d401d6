//! Repository identity.

use serde::Serialize;

/// A repository belonging to the audited organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    /// Repository owner (the organization login).
    pub owner: String,

    /// Repository name.
    pub name: String,

    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Whether the repository is archived (read-only).
    pub archived: bool,

    /// Whether the repository has its issue tracker enabled.
    pub has_issues: bool,
}

impl Repository {
    /// Creates an unarchived repository with issues enabled.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        let owner = owner.into();
        let name = name.into();
        let full_name = format!("{owner}/{name}");
        Self {
            owner,
            name,
            full_name,
            archived: false,
            has_issues: true,
        }
    }

    /// Marks the repository as archived or not.
    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    /// Marks whether the issue tracker is enabled.
    pub fn with_issues_enabled(mut self, has_issues: bool) -> Self {
        self.has_issues = has_issues;
        self
    }
}
