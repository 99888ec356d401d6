//! Compliance classification.

use serde::Serialize;

/// Compliance of a single repository, derived fresh on every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComplianceResult {
    /// The configuration exists and is structurally valid.
    Compliant,

    /// The configuration file does not exist.
    Missing,

    /// The configuration file exists but is unusable.
    Invalid {
        /// Why the file was rejected.
        reason: String,
    },
}

impl ComplianceResult {
    /// Returns the snake_case name used in templates and logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::Missing => "missing",
            Self::Invalid { .. } => "invalid",
        }
    }

    /// Returns true if the repository is compliant.
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        matches!(self, Self::Compliant)
    }

    /// Returns the rejection reason for invalid files.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Invalid { reason } => Some(reason),
            _ => None,
        }
    }
}
