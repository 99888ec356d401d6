#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod discovery;
pub mod github;
pub mod issues;
pub mod rate_limit;
pub mod runner;
pub mod summary;
pub mod templates;
pub mod validation;

pub use config::{AuditConfig, ConfigError};
pub use discovery::{discover_repositories, DiscoveryError, Repository};
pub use github::{decode_file_content, FetchedFile, GitHubClient, GitHubError, OctocrabClient};
pub use issues::{
    find_issue_state, marker_key, plan_action, reconcile, with_tracking_marker, IssueAction,
    IssueError, IssueOutcome, IssueState, IssueStatus, TrackingIssue,
};
pub use rate_limit::{ensure_core_rate_limit, RateLimitInfo, Throttle};
pub use runner::{Runner, RunnerError};
pub use summary::{ProcessingResult, RunSummary};
pub use templates::{TemplateContext, TemplateError, TemplateRenderer};
pub use validation::{validate_fetched_file, validate_pre_commit_config, ComplianceResult};
