//! Run summary types.

use super::result::ProcessingResult;
use crate::issues::{IssueAction, IssueOutcome};
use crate::validation::ComplianceResult;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories listed for the organization.
    pub repositories_discovered: usize,

    /// Number of repositories skipped (e.g., archived).
    pub repositories_skipped: usize,

    /// Number of compliant repositories.
    pub compliant: usize,

    /// Number of repositories without a configuration file.
    pub missing: usize,

    /// Number of repositories with an unusable configuration file.
    pub invalid: usize,

    /// Number of tracking issues opened (or that would be, in dry-run mode).
    pub issues_created: usize,

    /// Number of tracking issues closed (or that would be, in dry-run mode).
    pub issues_closed: usize,

    /// Number of repositories needing no write.
    pub issues_unchanged: usize,

    /// Number of repositories that failed to process.
    pub failed: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,

    /// Per-repository results, in processing order.
    pub results: Vec<ProcessingResult>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: ProcessingResult) {
        match &result {
            ProcessingResult::Processed {
                compliance,
                outcome,
                ..
            } => {
                match compliance {
                    ComplianceResult::Compliant => self.compliant += 1,
                    ComplianceResult::Missing => self.missing += 1,
                    ComplianceResult::Invalid { .. } => self.invalid += 1,
                }
                match outcome {
                    IssueOutcome::Created { .. } | IssueOutcome::WouldCreate => {
                        self.issues_created += 1;
                    }
                    IssueOutcome::Closed { .. } | IssueOutcome::WouldClose { .. } => {
                        self.issues_closed += 1;
                    }
                    IssueOutcome::Unchanged => self.issues_unchanged += 1,
                }
            }
            ProcessingResult::Skipped { .. } => self.repositories_skipped += 1,
            ProcessingResult::Failed { .. } => self.failed += 1,
        }
        self.results.push(result);
    }

    /// Returns the decision trace: each repository with the action taken.
    ///
    /// Identical for live and dry runs over the same data.
    #[must_use]
    pub fn decisions(&self) -> Vec<(&str, Option<IssueAction>)> {
        self.results
            .iter()
            .map(|result| (result.repository(), result.action()))
            .collect()
    }

    /// Returns true if any repository failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_record_result() {
        let mut summary = RunSummary::new(false);

        summary.record_result(ProcessingResult::Processed {
            repository: "acme/a".to_string(),
            compliance: ComplianceResult::Missing,
            action: IssueAction::Create,
            outcome: IssueOutcome::Created {
                number: 1,
                url: "https://example.com".to_string(),
            },
        });
        summary.record_result(ProcessingResult::Processed {
            repository: "acme/b".to_string(),
            compliance: ComplianceResult::Compliant,
            action: IssueAction::Close { number: 4 },
            outcome: IssueOutcome::Closed { number: 4 },
        });
        summary.record_result(ProcessingResult::Skipped {
            repository: "acme/c".to_string(),
            reason: "archived".to_string(),
        });

        assert_eq!(summary.missing, 1);
        assert_eq!(summary.compliant, 1);
        assert_eq!(summary.issues_created, 1);
        assert_eq!(summary.issues_closed, 1);
        assert_eq!(summary.repositories_skipped, 1);
        assert!(!summary.has_failures());
    }

    #[test]
    fn decisions_follow_processing_order() {
        let mut summary = RunSummary::new(true);

        summary.record_result(ProcessingResult::Processed {
            repository: "acme/a".to_string(),
            compliance: ComplianceResult::Missing,
            action: IssueAction::Create,
            outcome: IssueOutcome::WouldCreate,
        });
        summary.record_result(ProcessingResult::Failed {
            repository: "acme/b".to_string(),
            error: "boom".to_string(),
        });

        assert_eq!(
            summary.decisions(),
            vec![("acme/a", Some(IssueAction::Create)), ("acme/b", None)]
        );
        assert!(summary.has_failures());
    }
}
