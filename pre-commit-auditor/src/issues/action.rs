//! Reconciliation decisions.

use super::IssueState;
use crate::validation::ComplianceResult;
use serde::Serialize;

/// What the reconciler decided to do for one repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum IssueAction {
    /// Open a new tracking issue.
    Create,
    /// Comment on and close the open tracking issue.
    Close { number: u64 },
    /// Leave everything as it is.
    Nothing,
}

/// Decides how to bring `state` in line with `compliance`.
///
/// A non-compliant repository whose earlier issue was closed gets a fresh
/// issue; the closed one is never reopened.
#[must_use]
pub fn plan_action(compliance: &ComplianceResult, state: IssueState) -> IssueAction {
    match (compliance.is_compliant(), state) {
        (false, IssueState::NoIssue | IssueState::ClosedIssueExists { .. }) => IssueAction::Create,
        (false, IssueState::OpenIssueExists { .. }) => IssueAction::Nothing,
        (true, IssueState::OpenIssueExists { number }) => IssueAction::Close { number },
        (true, IssueState::NoIssue | IssueState::ClosedIssueExists { .. }) => IssueAction::Nothing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid() -> ComplianceResult {
        ComplianceResult::Invalid {
            reason: "file is empty".to_string(),
        }
    }

    #[test]
    fn non_compliant_without_issue_creates() {
        assert_eq!(
            plan_action(&ComplianceResult::Missing, IssueState::NoIssue),
            IssueAction::Create
        );
        assert_eq!(plan_action(&invalid(), IssueState::NoIssue), IssueAction::Create);
    }

    #[test]
    fn non_compliant_with_open_issue_does_nothing() {
        let state = IssueState::OpenIssueExists { number: 3 };
        assert_eq!(plan_action(&ComplianceResult::Missing, state), IssueAction::Nothing);
        assert_eq!(plan_action(&invalid(), state), IssueAction::Nothing);
    }

    #[test]
    fn non_compliant_with_closed_issue_creates_fresh() {
        let state = IssueState::ClosedIssueExists { number: 3 };
        assert_eq!(plan_action(&ComplianceResult::Missing, state), IssueAction::Create);
    }

    #[test]
    fn compliant_with_open_issue_closes() {
        let state = IssueState::OpenIssueExists { number: 11 };
        assert_eq!(
            plan_action(&ComplianceResult::Compliant, state),
            IssueAction::Close { number: 11 }
        );
    }

    #[test]
    fn compliant_without_open_issue_does_nothing() {
        assert_eq!(
            plan_action(&ComplianceResult::Compliant, IssueState::NoIssue),
            IssueAction::Nothing
        );
        assert_eq!(
            plan_action(
                &ComplianceResult::Compliant,
                IssueState::ClosedIssueExists { number: 2 }
            ),
            IssueAction::Nothing
        );
    }
}
