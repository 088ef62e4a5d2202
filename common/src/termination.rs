//! Validation for the contract-termination form.

use serde::{Deserialize, Serialize};

/// Minimum length of the free-text justification.
pub const MIN_DETAILS_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationReason {
    Convenience,
    Default,
    MutualAgreement,
    NonPerformance,
    IntegrityViolation,
    BudgetConstraints,
    Other,
}

impl TerminationReason {
    pub const ALL: [TerminationReason; 7] = [
        TerminationReason::Convenience,
        TerminationReason::Default,
        TerminationReason::MutualAgreement,
        TerminationReason::NonPerformance,
        TerminationReason::IntegrityViolation,
        TerminationReason::BudgetConstraints,
        TerminationReason::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TerminationReason::Convenience => "convenience",
            TerminationReason::Default => "default",
            TerminationReason::MutualAgreement => "mutual-agreement",
            TerminationReason::NonPerformance => "non-performance",
            TerminationReason::IntegrityViolation => "integrity-violation",
            TerminationReason::BudgetConstraints => "budget-constraints",
            TerminationReason::Other => "other",
        }
    }

    pub fn parse(tag: &str) -> Option<TerminationReason> {
        TerminationReason::ALL.iter().copied().find(|r| r.as_str() == tag)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TerminationReason::Convenience => "Termination for Convenience",
            TerminationReason::Default => "Termination for Default",
            TerminationReason::MutualAgreement => "Mutual Agreement",
            TerminationReason::NonPerformance => "Non-Performance",
            TerminationReason::IntegrityViolation => "Integrity Violation",
            TerminationReason::BudgetConstraints => "Budget Constraints",
            TerminationReason::Other => "Other",
        }
    }
}

/// The termination form's required values. File attachments are advisory
/// and play no part in completeness.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TerminationRequest {
    pub date: String,
    pub reason: Option<TerminationReason>,
    pub details: String,
}

impl TerminationRequest {
    /// The submit action enables only when this holds.
    pub fn is_complete(&self) -> bool {
        !self.date.is_empty()
            && self.reason.is_some()
            && self.details.chars().count() >= MIN_DETAILS_LEN
    }

    pub fn details_len(&self) -> usize {
        self.details.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_details() -> String {
        "The contractor repeatedly failed to meet delivery milestones despite cure notices."
            .to_string()
    }

    #[test]
    fn all_three_fields_are_required() {
        let mut request = TerminationRequest::default();
        assert!(!request.is_complete());

        request.date = "2025-03-01".to_string();
        request.reason = Some(TerminationReason::Default);
        request.details = "too short".to_string();
        assert!(!request.is_complete());

        request.details = long_details();
        assert!(request.is_complete());

        request.reason = None;
        assert!(!request.is_complete());
    }

    #[test]
    fn boundary_is_exactly_fifty_characters() {
        let request = TerminationRequest {
            date: "2025-03-01".to_string(),
            reason: Some(TerminationReason::Convenience),
            details: "x".repeat(MIN_DETAILS_LEN),
        };
        assert!(request.is_complete());

        let short = TerminationRequest {
            details: "x".repeat(MIN_DETAILS_LEN - 1),
            ..request
        };
        assert!(!short.is_complete());
    }

    #[test]
    fn reason_tags_round_trip() {
        for reason in TerminationReason::ALL {
            assert_eq!(TerminationReason::parse(reason.as_str()), Some(reason));
        }
        assert_eq!(TerminationReason::parse("unknown"), None);
    }
}
