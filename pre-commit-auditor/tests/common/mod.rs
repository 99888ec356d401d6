use async_trait::async_trait;
use pre_commit_auditor::{
    AuditConfig, FetchedFile, GitHubClient, GitHubError, IssueStatus, Repository, TrackingIssue,
};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

pub const ORG: &str = "acme";

pub const VALID_CONFIG: &str = r#"repos:
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v4.6.0
    hooks:
      - id: trailing-whitespace
"#;

/// A write the auditor performed against the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Write {
    CreateIssue { repo: String, title: String, body: String },
    Comment { repo: String, number: u64, body: String },
    Close { repo: String, number: u64 },
}

#[derive(Default)]
struct State {
    repositories: Vec<Repository>,
    files: HashMap<String, FetchedFile>,
    issues: HashMap<String, Vec<TrackingIssue>>,
    failing_fetch: HashSet<String>,
    failing_listing: bool,
    failing_close_once: HashSet<String>,
    denied_issues: HashMap<String, u16>,
    next_issue: u64,
    writes: Vec<Write>,
}

/// In-memory organization.
pub struct FakeGitHub {
    state: Mutex<State>,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                next_issue: 100,
                ..State::default()
            }),
        }
    }

    pub fn with_repo(self, name: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .repositories
            .push(Repository::new(ORG, name));
        self
    }

    pub fn with_archived_repo(self, name: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .repositories
            .push(Repository::new(ORG, name).with_archived(true));
        self
    }

    pub fn with_repo_without_issues(self, name: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .repositories
            .push(Repository::new(ORG, name).with_issues_enabled(false));
        self
    }

    pub fn with_file(self, name: &str, content: &str) -> Self {
        self.set_file(name, content);
        self
    }

    pub fn with_unreadable_file(self, name: &str, reason: &str) -> Self {
        self.state.lock().unwrap().files.insert(
            full_name(name),
            FetchedFile::Unreadable {
                reason: reason.to_string(),
            },
        );
        self
    }

    /// Adds an issue whose body carries `body` verbatim.
    pub fn with_issue_body(self, name: &str, number: u64, title: &str, body: &str) -> Self {
        let repo = full_name(name);
        self.state
            .lock()
            .unwrap()
            .issues
            .entry(repo.clone())
            .or_default()
            .push(TrackingIssue {
                number,
                title: title.to_string(),
                body: body.to_string(),
                status: IssueStatus::Open,
                url: format!("https://github.com/{repo}/issues/{number}"),
            });
        self
    }

    pub fn with_issue(self, name: &str, number: u64, title: &str, status: IssueStatus) -> Self {
        self.state
            .lock()
            .unwrap()
            .issues
            .entry(full_name(name))
            .or_default()
            .push(TrackingIssue {
                number,
                title: title.to_string(),
                body: String::new(),
                status,
                url: format!("https://github.com/{ORG}/{name}/issues/{number}"),
            });
        self
    }

    pub fn with_failing_fetch(self, name: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .failing_fetch
            .insert(full_name(name));
        self
    }

    /// The next close of an issue in `name` fails; later ones succeed.
    pub fn with_failing_close_once(self, name: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .failing_close_once
            .insert(full_name(name));
        self
    }

    /// Every issue call on `name` answers with `status`.
    pub fn with_denied_issues(self, name: &str, status: u16) -> Self {
        self.state
            .lock()
            .unwrap()
            .denied_issues
            .insert(full_name(name), status);
        self
    }

    pub fn with_failing_listing(self) -> Self {
        self.state.lock().unwrap().failing_listing = true;
        self
    }

    pub fn writes(&self) -> Vec<Write> {
        self.state.lock().unwrap().writes.clone()
    }

    pub fn clear_writes(&self) {
        self.state.lock().unwrap().writes.clear();
    }

    pub fn issues(&self, name: &str) -> Vec<TrackingIssue> {
        self.state
            .lock()
            .unwrap()
            .issues
            .get(&full_name(name))
            .cloned()
            .unwrap_or_default()
    }

    pub fn set_file(&self, name: &str, content: &str) {
        self.state
            .lock()
            .unwrap()
            .files
            .insert(full_name(name), FetchedFile::Text(content.to_string()));
    }
}

impl State {
    fn check_access(&self, repository: &Repository) -> Result<(), GitHubError> {
        match self.denied_issues.get(&repository.full_name) {
            Some(&status) => Err(GitHubError::AccessDenied {
                status,
                message: "denied".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl GitHubClient for FakeGitHub {
    async fn list_repositories(&self, org: &str) -> Result<Vec<Repository>, GitHubError> {
        let state = self.state.lock().unwrap();
        if state.failing_listing {
            return Err(GitHubError::Unexpected(format!("organization {org} not found")));
        }
        Ok(state.repositories.clone())
    }

    async fn fetch_file(
        &self,
        repository: &Repository,
        _path: &str,
    ) -> Result<FetchedFile, GitHubError> {
        let state = self.state.lock().unwrap();
        if state.failing_fetch.contains(&repository.full_name) {
            return Err(GitHubError::Unexpected("connection reset".to_string()));
        }
        Ok(state
            .files
            .get(&repository.full_name)
            .cloned()
            .unwrap_or(FetchedFile::Absent))
    }

    async fn list_issues(&self, repository: &Repository) -> Result<Vec<TrackingIssue>, GitHubError> {
        let state = self.state.lock().unwrap();
        state.check_access(repository)?;
        Ok(state
            .issues
            .get(&repository.full_name)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_issue(
        &self,
        repository: &Repository,
        title: &str,
        body: &str,
    ) -> Result<TrackingIssue, GitHubError> {
        let mut state = self.state.lock().unwrap();
        state.check_access(repository)?;
        state.next_issue += 1;
        let issue = TrackingIssue {
            number: state.next_issue,
            title: title.to_string(),
            body: body.to_string(),
            status: IssueStatus::Open,
            url: format!(
                "https://github.com/{}/issues/{}",
                repository.full_name, state.next_issue
            ),
        };
        state
            .issues
            .entry(repository.full_name.clone())
            .or_default()
            .push(issue.clone());
        state.writes.push(Write::CreateIssue {
            repo: repository.full_name.clone(),
            title: title.to_string(),
            body: body.to_string(),
        });
        Ok(issue)
    }

    async fn comment_on_issue(
        &self,
        repository: &Repository,
        number: u64,
        body: &str,
    ) -> Result<(), GitHubError> {
        let mut state = self.state.lock().unwrap();
        state.check_access(repository)?;
        state.writes.push(Write::Comment {
            repo: repository.full_name.clone(),
            number,
            body: body.to_string(),
        });
        Ok(())
    }

    async fn close_issue(&self, repository: &Repository, number: u64) -> Result<(), GitHubError> {
        let mut state = self.state.lock().unwrap();
        state.check_access(repository)?;
        if state.failing_close_once.remove(&repository.full_name) {
            return Err(GitHubError::Unexpected("bad gateway".to_string()));
        }
        if let Some(issue) = state
            .issues
            .get_mut(&repository.full_name)
            .and_then(|issues| issues.iter_mut().find(|i| i.number == number))
        {
            issue.status = IssueStatus::Closed;
        }
        state.writes.push(Write::Close {
            repo: repository.full_name.clone(),
            number,
        });
        Ok(())
    }
}

pub fn full_name(name: &str) -> String {
    format!("{ORG}/{name}")
}

/// The templates shipped at the workspace root.
pub fn shipped_templates() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../templates")
}

pub fn test_config() -> AuditConfig {
    AuditConfig::new(ORG, "ghp_testtoken")
        .with_templates_dir(shipped_templates())
        .with_delay(Duration::ZERO)
}
