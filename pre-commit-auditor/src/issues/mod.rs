//! Tracking issue reconciliation.
//!
//! For each repository this module finds the existing tracking issue, decides
//! whether to open, keep, or close it based on compliance, and performs the
//! writes. In dry-run mode the same decision is made and logged but nothing
//! is written.

mod action;
mod error;
mod marker;
mod outcome;
mod state;
mod tracking_issue;

pub use action::{plan_action, IssueAction};
pub use error::IssueError;
pub use marker::{marker_key, tracking_marker, with_tracking_marker};
pub use outcome::IssueOutcome;
pub use state::{find_issue_state, is_tracking_issue, IssueState};
pub use tracking_issue::{IssueStatus, TrackingIssue};

use crate::config::AuditConfig;
use crate::discovery::Repository;
use crate::github::GitHubClient;
use crate::templates::{TemplateContext, TemplateRenderer};
use crate::validation::ComplianceResult;
use tracing::{debug, info, info_span, Instrument};

/// Result of reconciling one repository.
#[derive(Debug, Clone)]
pub struct Reconciliation {
    /// State found before any write.
    pub state: IssueState,
    /// Decision taken.
    pub action: IssueAction,
    /// What was written, or would have been in dry-run mode.
    pub outcome: IssueOutcome,
}

/// Brings the tracking issue of `repository` in line with `compliance`.
///
/// # Arguments
///
/// * `client` - GitHub client used for listing and writes
/// * `repository` - Repository being reconciled
/// * `compliance` - Validation result for its pre-commit configuration
/// * `config` - Audit configuration (issue title, templates, dry-run flag)
/// * `renderer` - Template renderer for the issue body and close comment
///
/// # Returns
///
/// The state found, the action planned from it, and what was written.
///
/// # Errors
///
/// Returns [`IssueError`] if listing issues, rendering a template, or a write
/// fails. Nothing is written when rendering fails.
pub async fn reconcile<C>(
    client: &C,
    repository: &Repository,
    compliance: &ComplianceResult,
    config: &AuditConfig,
    renderer: &TemplateRenderer,
) -> Result<Reconciliation, IssueError>
where
    C: GitHubClient + ?Sized,
{
    let span = info_span!(
        "reconcile",
        repo = %repository.full_name,
        compliance = compliance.as_str()
    );

    async {
        // Find existing tracking issue
        let issues = client.list_issues(repository).await?;
        let state = find_issue_state(&issues, repository, config.issue_title());

        // Decide
        let action = plan_action(compliance, state);
        debug!(?state, ?action, "Planned issue action");

        let outcome = apply_action(client, repository, compliance, action, config, renderer).await?;

        Ok(Reconciliation {
            state,
            action,
            outcome,
        })
    }
    .instrument(span)
    .await
}

/// Executes a planned action, or only logs it in dry-run mode.
///
/// The issue is closed before the close comment is posted, so a failed close
/// leaves no comment behind.
///
/// # Returns
///
/// What was written, or what would have been in dry-run mode.
///
/// # Errors
///
/// Returns [`IssueError`] if rendering or a write fails.
pub async fn apply_action<C>(
    client: &C,
    repository: &Repository,
    compliance: &ComplianceResult,
    action: IssueAction,
    config: &AuditConfig,
    renderer: &TemplateRenderer,
) -> Result<IssueOutcome, IssueError>
where
    C: GitHubClient + ?Sized,
{
    let context = TemplateContext::new(
        repository,
        config.config_file(),
        config.issue_title(),
        compliance,
    );

    match action {
        IssueAction::Nothing => {
            debug!("Tracking issue already matches compliance");
            Ok(IssueOutcome::Unchanged)
        }
        IssueAction::Create => {
            // Render template
            let body = renderer.render(config.open_issue_template(), &context)?;
            let body = with_tracking_marker(&body, &repository.full_name);

            if config.dry_run() {
                info!(dry_run = true, title = %config.issue_title(), "Would create tracking issue");
                return Ok(IssueOutcome::WouldCreate);
            }

            // Create issue
            let issue = client
                .create_issue(repository, config.issue_title(), &body)
                .await?;
            info!(issue_number = issue.number, url = %issue.url, "Tracking issue created");
            Ok(IssueOutcome::Created {
                number: issue.number,
                url: issue.url,
            })
        }
        IssueAction::Close { number } => {
            let comment = renderer.render(config.close_comment_template(), &context)?;

            if config.dry_run() {
                info!(dry_run = true, issue_number = number, "Would close tracking issue");
                return Ok(IssueOutcome::WouldClose { number });
            }

            client.close_issue(repository, number).await?;
            info!(issue_number = number, "Tracking issue closed");
            client.comment_on_issue(repository, number, &comment).await?;
            Ok(IssueOutcome::Closed { number })
        }
    }
}
