//! [`GitHubClient`] backed by octocrab.

use super::error::{access_denied_reason, NOT_FOUND};
use super::{decode_file_content, FetchedFile, GitHubClient, GitHubError};
use crate::config::AuditConfig;
use crate::discovery::Repository;
use crate::issues::{IssueStatus, TrackingIssue};
use crate::rate_limit::{ensure_core_rate_limit, Throttle};
use async_trait::async_trait;
use octocrab::models::issues::Issue;
use octocrab::models::IssueState;
use octocrab::params::State;
use octocrab::{Octocrab, Page};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Results per page for list endpoints.
const RESULTS_PER_PAGE: u8 = 100;

/// Authenticated GitHub client that spaces its calls by the configured delay.
pub struct OctocrabClient {
    octocrab: Octocrab,
    throttle: Throttle,
}

impl OctocrabClient {
    /// Builds a client from the token, API URL and delay in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError`] if the client cannot be constructed.
    pub fn new(config: &AuditConfig) -> Result<Self, GitHubError> {
        let octocrab = Octocrab::builder()
            .personal_token(config.token().to_string())
            .base_uri(config.api_url())?
            .build()?;
        Ok(Self {
            octocrab,
            throttle: Throttle::new(config.delay()),
        })
    }

    /// Follows `next` links until every page of a listing is collected.
    async fn collect_pages<T: DeserializeOwned>(
        &self,
        mut page: Page<T>,
    ) -> Result<Vec<T>, GitHubError> {
        let mut items = std::mem::take(&mut page.items);

        while page.next.is_some() {
            self.throttle.pause().await;
            match self.octocrab.get_page::<T>(&page.next).await? {
                Some(mut next_page) => {
                    items.append(&mut next_page.items);
                    page = next_page;
                }
                None => break,
            }
        }

        Ok(items)
    }

    /// Waits out an exhausted rate limit, then paces the write itself.
    ///
    /// The rate-limit lookup is an API call too, so it is spaced like one.
    async fn prepare_write(&self) -> Result<(), GitHubError> {
        self.throttle
            .paced(ensure_core_rate_limit(&self.octocrab))
            .await?;
        self.throttle.pause().await;
        Ok(())
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn list_repositories(&self, org: &str) -> Result<Vec<Repository>, GitHubError> {
        self.throttle.pause().await;
        let first = self
            .octocrab
            .orgs(org)
            .list_repos()
            .per_page(RESULTS_PER_PAGE)
            .send()
            .await?;

        let repositories = self
            .collect_pages(first)
            .await?
            .into_iter()
            .map(|repo| {
                let owner = repo
                    .owner
                    .map(|owner| owner.login)
                    .unwrap_or_else(|| org.to_string());
                Repository::new(owner, repo.name)
                    .with_archived(repo.archived.unwrap_or(false))
                    .with_issues_enabled(repo.has_issues.unwrap_or(true))
            })
            .collect();

        Ok(repositories)
    }

    async fn fetch_file(
        &self,
        repository: &Repository,
        path: &str,
    ) -> Result<FetchedFile, GitHubError> {
        self.throttle.pause().await;
        let result = self
            .octocrab
            .repos(&repository.owner, &repository.name)
            .get_content()
            .path(path)
            .send()
            .await;

        let contents = match result {
            Ok(contents) => contents,
            Err(e) if classify(api_status(&e)) == StatusClass::NotFound => {
                debug!(repo = %repository.full_name, path, "File not found");
                return Ok(FetchedFile::Absent);
            }
            Err(e) => return Err(e.into()),
        };

        match contents.items.as_slice() {
            [item] if item.r#type == "file" => {
                let fetched = decode_file_content(item.content.as_deref());
                if let FetchedFile::Unreadable { reason } = &fetched {
                    warn!(repo = %repository.full_name, path, %reason, "File content unreadable");
                }
                Ok(fetched)
            }
            _ => {
                warn!(repo = %repository.full_name, path, "Path is not a regular file");
                Ok(FetchedFile::Unreadable {
                    reason: "path is not a regular file".to_string(),
                })
            }
        }
    }

    async fn list_issues(&self, repository: &Repository) -> Result<Vec<TrackingIssue>, GitHubError> {
        self.throttle.pause().await;
        let first = self
            .octocrab
            .issues(&repository.owner, &repository.name)
            .list()
            .state(State::All)
            .per_page(RESULTS_PER_PAGE)
            .send()
            .await
            .map_err(issues_error)?;

        let issues = self
            .collect_pages(first)
            .await?
            .into_iter()
            .filter(|issue| issue.pull_request.is_none())
            .map(to_tracking_issue)
            .collect();

        Ok(issues)
    }

    async fn create_issue(
        &self,
        repository: &Repository,
        title: &str,
        body: &str,
    ) -> Result<TrackingIssue, GitHubError> {
        self.prepare_write().await?;
        let issue = self
            .octocrab
            .issues(&repository.owner, &repository.name)
            .create(title)
            .body(body)
            .send()
            .await
            .map_err(issues_error)?;

        Ok(to_tracking_issue(issue))
    }

    async fn comment_on_issue(
        &self,
        repository: &Repository,
        number: u64,
        body: &str,
    ) -> Result<(), GitHubError> {
        self.prepare_write().await?;
        self.octocrab
            .issues(&repository.owner, &repository.name)
            .create_comment(number, body)
            .await
            .map_err(issues_error)?;
        Ok(())
    }

    async fn close_issue(&self, repository: &Repository, number: u64) -> Result<(), GitHubError> {
        self.prepare_write().await?;
        self.octocrab
            .issues(&repository.owner, &repository.name)
            .update(number)
            .state(IssueState::Closed)
            .send()
            .await
            .map_err(issues_error)?;
        Ok(())
    }
}

fn to_tracking_issue(issue: Issue) -> TrackingIssue {
    let status = match issue.state {
        IssueState::Open => IssueStatus::Open,
        _ => IssueStatus::Closed,
    };

    TrackingIssue {
        number: issue.number,
        title: issue.title,
        body: issue.body.unwrap_or_default(),
        status,
        url: issue.html_url.to_string(),
    }
}

/// How the auditor treats an API error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusClass {
    NotFound,
    AccessDenied(u16),
    Other,
}

/// Returns the HTTP status and message of an error response from GitHub.
fn api_status(error: &octocrab::Error) -> Option<(u16, &str)> {
    match error {
        octocrab::Error::GitHub { source, .. } => {
            Some((source.status_code.as_u16(), source.message.as_str()))
        }
        _ => None,
    }
}

fn classify(status: Option<(u16, &str)>) -> StatusClass {
    match status {
        Some((NOT_FOUND, _)) => StatusClass::NotFound,
        // Secondary rate limits also answer 403
        Some((status, message))
            if access_denied_reason(status).is_some()
                && !message.to_ascii_lowercase().contains("rate limit") =>
        {
            StatusClass::AccessDenied(status)
        }
        _ => StatusClass::Other,
    }
}

/// Converts an error from an issues endpoint, keeping access denials apart.
fn issues_error(error: octocrab::Error) -> GitHubError {
    if let Some((status, message)) = api_status(&error) {
        if classify(Some((status, message))) == StatusClass::AccessDenied(status) {
            return GitHubError::AccessDenied {
                status,
                message: message.to_string(),
            };
        }
    }
    error.into()
}
