//! Pre-commit configuration validation.
//!
//! Classifies fetched file content as [`ComplianceResult`]. A usable
//! configuration is a YAML mapping whose `repos` key holds a non-empty
//! sequence.

mod compliance;

pub use compliance::ComplianceResult;

use crate::github::FetchedFile;
use serde_yaml::Value;

/// Key holding the list of hook repositories.
const REPOS_KEY: &str = "repos";

/// Classifies the content of a pre-commit configuration file.
///
/// `None` means the file does not exist in the repository.
#[must_use]
pub fn validate_pre_commit_config(content: Option<&str>) -> ComplianceResult {
    let Some(content) = content else {
        return ComplianceResult::Missing;
    };

    if content.trim().is_empty() {
        return invalid("file is empty");
    }

    let document: Value = match serde_yaml::from_str(content) {
        Ok(value) => value,
        Err(e) => return invalid(format!("not valid YAML: {e}")),
    };

    let Value::Mapping(mapping) = document else {
        return invalid("top level is not a mapping");
    };

    match mapping.get(REPOS_KEY) {
        None => invalid("no `repos` key"),
        Some(Value::Sequence(repos)) if repos.is_empty() => invalid("`repos` is empty"),
        Some(Value::Sequence(_)) => ComplianceResult::Compliant,
        Some(_) => invalid("`repos` is not a list"),
    }
}

/// Classifies a fetched file, reporting unreadable content as Invalid with
/// the decoding failure as its reason.
#[must_use]
pub fn validate_fetched_file(file: &FetchedFile) -> ComplianceResult {
    match file {
        FetchedFile::Absent => validate_pre_commit_config(None),
        FetchedFile::Text(text) => validate_pre_commit_config(Some(text.as_str())),
        FetchedFile::Unreadable { reason } => invalid(reason.as_str()),
    }
}

fn invalid(reason: impl Into<String>) -> ComplianceResult {
    ComplianceResult::Invalid {
        reason: reason.into(),
    }
}
