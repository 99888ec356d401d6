//! Audit configuration.
//!
//! [`AuditConfig`] is built once at startup and handed to every component.
//! Nothing reads the environment after that point.

mod error;

pub use error::ConfigError;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Default GitHub REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default title of the tracking issue.
pub const DEFAULT_ISSUE_TITLE: &str = "Missing pre-commit configuration";

/// Default path of the pre-commit configuration inside each repository.
pub const DEFAULT_CONFIG_FILE: &str = ".pre-commit-config.yaml";

/// Default directory holding the issue templates.
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Default file name of the open-issue template.
pub const DEFAULT_OPEN_ISSUE_TEMPLATE: &str = "open-issue.md";

/// Default file name of the close-comment template.
pub const DEFAULT_CLOSE_COMMENT_TEMPLATE: &str = "close-comment.md";

/// Default delay between consecutive GitHub API calls.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Number of token characters kept when the configuration is printed.
const TOKEN_VISIBLE_PREFIX: usize = 8;

/// Immutable configuration for an audit run.
#[derive(Clone)]
pub struct AuditConfig {
    /// Organization whose repositories are audited.
    org: String,
    /// GitHub token used for all API calls.
    token: String,
    /// Base URL of the GitHub REST API.
    api_url: String,
    /// Title given to tracking issues.
    issue_title: String,
    /// Path of the pre-commit configuration inside each repository.
    config_file: String,
    /// Directory holding the issue templates.
    templates_dir: PathBuf,
    /// Template used for the body of a new tracking issue.
    open_issue_template: String,
    /// Template used for the comment posted when closing an issue.
    close_comment_template: String,
    /// Whether to log intended writes instead of performing them.
    dry_run: bool,
    /// Delay inserted between consecutive API calls.
    delay: Duration,
    /// Whether archived repositories are audited too.
    include_archived: bool,
}

impl AuditConfig {
    /// Creates a configuration for `org` with every optional setting at its default.
    pub fn new(org: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            token: token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            issue_title: DEFAULT_ISSUE_TITLE.to_string(),
            config_file: DEFAULT_CONFIG_FILE.to_string(),
            templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
            open_issue_template: DEFAULT_OPEN_ISSUE_TEMPLATE.to_string(),
            close_comment_template: DEFAULT_CLOSE_COMMENT_TEMPLATE.to_string(),
            dry_run: false,
            delay: DEFAULT_DELAY,
            include_archived: false,
        }
    }

    /// Sets the GitHub API base URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Sets the tracking issue title.
    pub fn with_issue_title(mut self, issue_title: impl Into<String>) -> Self {
        self.issue_title = issue_title.into();
        self
    }

    /// Sets the path of the file checked in each repository.
    pub fn with_config_file(mut self, config_file: impl Into<String>) -> Self {
        self.config_file = config_file.into();
        self
    }

    /// Sets the template directory.
    pub fn with_templates_dir(mut self, templates_dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = templates_dir.into();
        self
    }

    /// Sets the open-issue template file name.
    pub fn with_open_issue_template(mut self, name: impl Into<String>) -> Self {
        self.open_issue_template = name.into();
        self
    }

    /// Sets the close-comment template file name.
    pub fn with_close_comment_template(mut self, name: impl Into<String>) -> Self {
        self.close_comment_template = name.into();
        self
    }

    /// Enables or disables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Sets the delay between API calls.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Includes archived repositories in the audit.
    pub fn with_include_archived(mut self, include_archived: bool) -> Self {
        self.include_archived = include_archived;
        self
    }

    /// Checks that every required setting is present and well formed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for the first setting that fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require("org", &self.org)?;
        require("token", &self.token)?;
        require("issue title", &self.issue_title)?;
        require("config file", &self.config_file)?;
        require("open issue template", &self.open_issue_template)?;
        require("close comment template", &self.close_comment_template)?;

        let url = Url::parse(&self.api_url).map_err(|source| ConfigError::InvalidApiUrl {
            url: self.api_url.clone(),
            source,
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                url: self.api_url.clone(),
                scheme: url.scheme().to_string(),
            });
        }

        Ok(())
    }

    /// Returns the audited organization.
    pub fn org(&self) -> &str {
        &self.org
    }

    /// Returns the GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the token prefix with the remainder masked, for logging.
    pub fn masked_token(&self) -> String {
        let visible: String = self.token.chars().take(TOKEN_VISIBLE_PREFIX).collect();
        format!("{visible}**************************")
    }

    /// Returns the API base URL.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the tracking issue title.
    pub fn issue_title(&self) -> &str {
        &self.issue_title
    }

    /// Returns the file path checked in each repository.
    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    /// Returns the template directory.
    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// Returns the open-issue template file name.
    pub fn open_issue_template(&self) -> &str {
        &self.open_issue_template
    }

    /// Returns the close-comment template file name.
    pub fn close_comment_template(&self) -> &str {
        &self.close_comment_template
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the delay between API calls.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns whether archived repositories are audited.
    pub fn include_archived(&self) -> bool {
        self.include_archived
    }
}

impl fmt::Debug for AuditConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuditConfig")
            .field("org", &self.org)
            .field("token", &self.masked_token())
            .field("api_url", &self.api_url)
            .field("issue_title", &self.issue_title)
            .field("config_file", &self.config_file)
            .field("templates_dir", &self.templates_dir)
            .field("open_issue_template", &self.open_issue_template)
            .field("close_comment_template", &self.close_comment_template)
            .field("dry_run", &self.dry_run)
            .field("delay", &self.delay)
            .field("include_archived", &self.include_archived)
            .finish()
    }
}

fn require(name: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingValue { name });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AuditConfig::new("acme", "ghp_1234567890abcdef");

        assert!(config.validate().is_ok());
        assert_eq!(config.issue_title(), DEFAULT_ISSUE_TITLE);
        assert_eq!(config.config_file(), ".pre-commit-config.yaml");
        assert_eq!(config.delay(), Duration::from_secs(1));
        assert!(!config.dry_run());
    }

    #[test]
    fn rejects_empty_org() {
        let config = AuditConfig::new("  ", "token");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingValue { name: "org" })
        ));
    }

    #[test]
    fn rejects_empty_token() {
        let config = AuditConfig::new("acme", "");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingValue { name: "token" })
        ));
    }

    #[test]
    fn rejects_malformed_api_url() {
        let config = AuditConfig::new("acme", "token").with_api_url("not a url");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidApiUrl { .. })
        ));
    }

    #[test]
    fn rejects_non_http_api_url() {
        let config = AuditConfig::new("acme", "token").with_api_url("ftp://example.com");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn debug_output_masks_token() {
        let config = AuditConfig::new("acme", "ghp_abcdefSECRETSECRET");
        let printed = format!("{config:?}");

        assert!(printed.contains("ghp_abcd***"));
        assert!(!printed.contains("SECRET"));
    }
}
