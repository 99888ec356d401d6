//! Orchestrates a pre-commit audit of an organization.

mod error;

pub use error::RunnerError;

use crate::config::AuditConfig;
use crate::discovery::{discover_repositories, skip_reason, Repository};
use crate::github::{GitHubClient, OctocrabClient};
use crate::issues::reconcile;
use crate::summary::{ProcessingResult, RunSummary};
use crate::templates::TemplateRenderer;
use crate::validation::validate_fetched_file;
use tracing::{debug, error, info, info_span, warn, Instrument};

/// Audits every repository of the configured organization, one at a time.
pub struct Runner<C = OctocrabClient> {
    config: AuditConfig,
    client: C,
    renderer: TemplateRenderer,
}

impl Runner<OctocrabClient> {
    /// Builds a runner talking to the GitHub API.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the configuration is invalid or the client
    /// cannot be constructed.
    pub fn new(config: AuditConfig) -> Result<Self, RunnerError> {
        config.validate()?;
        let client = OctocrabClient::new(&config)?;
        Ok(Self::from_parts(config, client))
    }
}

impl<C: GitHubClient> Runner<C> {
    /// Builds a runner over an existing client.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Config`] if the configuration is invalid.
    pub fn with_client(config: AuditConfig, client: C) -> Result<Self, RunnerError> {
        config.validate()?;
        Ok(Self::from_parts(config, client))
    }

    /// Assembles a runner from an already validated configuration.
    fn from_parts(config: AuditConfig, client: C) -> Self {
        let renderer = TemplateRenderer::new(config.templates_dir());
        Self {
            config,
            client,
            renderer,
        }
    }

    /// Returns the client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Executes the full audit.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Discovery`] if the repositories cannot be
    /// listed. Failures on individual repositories are recorded in the
    /// summary instead.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new(self.config.dry_run());
        info!(
            org = %self.config.org(),
            file = %self.config.config_file(),
            dry_run = self.config.dry_run(),
            "Starting audit"
        );
        debug!(
            token = %self.config.masked_token(),
            api_url = %self.config.api_url(),
            "Using credentials"
        );

        let repositories = discover_repositories(&self.client, self.config.org()).await?;
        summary.repositories_discovered = repositories.len();

        for (index, repository) in repositories.iter().enumerate() {
            info!(
                repo = %repository.full_name,
                progress = %format!("{}/{}", index + 1, repositories.len()),
                "Checking repository"
            );

            let result = match skip_reason(repository, self.config.include_archived()) {
                None => self.process_repository(repository).await,
                Some(reason) => {
                    info!(repo = %repository.full_name, reason, "Skipping repository");
                    ProcessingResult::Skipped {
                        repository: repository.full_name.clone(),
                        reason: reason.to_string(),
                    }
                }
            };
            summary.record_result(result);
        }

        Ok(summary)
    }

    async fn process_repository(&self, repository: &Repository) -> ProcessingResult {
        let span = info_span!("repository", repo = %repository.full_name);

        async {
            let file = match self
                .client
                .fetch_file(repository, self.config.config_file())
                .await
            {
                Ok(file) => file,
                Err(e) => {
                    error!(error = %e, "Failed to fetch pre-commit configuration");
                    return ProcessingResult::Failed {
                        repository: repository.full_name.clone(),
                        error: e.to_string(),
                    };
                }
            };

            let compliance = validate_fetched_file(&file);
            info!(
                compliance = compliance.as_str(),
                reason = compliance.reason().unwrap_or_default(),
                "Checked pre-commit configuration"
            );

            match reconcile(
                &self.client,
                repository,
                &compliance,
                &self.config,
                &self.renderer,
            )
            .await
            {
                Ok(reconciliation) => ProcessingResult::Processed {
                    repository: repository.full_name.clone(),
                    compliance,
                    action: reconciliation.action,
                    outcome: reconciliation.outcome,
                },
                Err(e) => match e.skip_reason() {
                    Some(reason) => {
                        warn!(error = %e, reason, "Cannot manage issues, skipping repository");
                        ProcessingResult::Skipped {
                            repository: repository.full_name.clone(),
                            reason: reason.to_string(),
                        }
                    }
                    None => {
                        error!(error = %e, "Failed to reconcile tracking issue");
                        ProcessingResult::Failed {
                            repository: repository.full_name.clone(),
                            error: e.to_string(),
                        }
                    }
                },
            }
        }
        .instrument(span)
        .await
    }
}
