//! Repository discovery.
//!
//! Lists every repository of the audited organization and separates out the
//! ones the audit should skip.

mod error;
mod repository;

pub use error::DiscoveryError;
pub use repository::Repository;

use crate::github::GitHubClient;
use tracing::{info, info_span, Instrument};

/// Lists all repositories belonging to `org`, in the order GitHub returns them.
///
/// Archived repositories are included and flagged; callers decide whether to
/// skip them.
///
/// # Errors
///
/// Returns [`DiscoveryError`] if the listing fails.
pub async fn discover_repositories<C>(
    client: &C,
    org: &str,
) -> Result<Vec<Repository>, DiscoveryError>
where
    C: GitHubClient + ?Sized,
{
    let span = info_span!("discover", org = %org);

    async {
        info!("Listing organization repositories");

        let repositories = client.list_repositories(org).await.map_err(|source| {
            DiscoveryError::GitHubError {
                org: org.to_string(),
                source,
            }
        })?;

        let archived = repositories.iter().filter(|r| r.archived).count();
        let without_issues = repositories.iter().filter(|r| !r.has_issues).count();
        info!(
            count = repositories.len(),
            archived,
            without_issues,
            "Discovery complete"
        );
        Ok(repositories)
    }
    .instrument(span)
    .await
}

/// Returns why `repository` is skipped, or `None` if it should be audited.
///
/// A repository without an issue tracker cannot receive a tracking issue, so
/// it is skipped even when archived repositories are included.
#[must_use]
pub fn skip_reason(repository: &Repository, include_archived: bool) -> Option<&'static str> {
    if repository.archived && !include_archived {
        Some("archived")
    } else if !repository.has_issues {
        Some("issues disabled")
    } else {
        None
    }
}
