//! Mock entity/award lookup.
//!
//! Stands in for the SAM.gov entity API: a pure function over an injected
//! `EntityDirectory`. With an award number the lookup resolves directly to
//! a single summary; without one it returns the directory's candidate list
//! for the user to pick from.

use serde::{Deserialize, Serialize};

use crate::model::entity::{AwardLifecycle, EntitySummary};

/// One award known to the directory for a contractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryAward {
    pub award_id: String,
    pub status: AwardLifecycle,
}

/// The directory entry for a single contractor (the lookup's backing
/// "table"). Injected into the wizard at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDirectory {
    pub legal_name: String,
    pub address: String,
    pub cage: String,
    pub awards: Vec<DirectoryAward>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// Direct hit; the wizard auto-selects it.
    Match(EntitySummary),
    /// Broad lookup; the user must pick one.
    Candidates(Vec<EntitySummary>),
}

/// Uppercases and truncates raw UEI input to the 12-character format the
/// entry field enforces.
pub fn normalize_uei(input: &str) -> String {
    input.trim().to_uppercase().chars().take(12).collect()
}

pub fn lookup(directory: &EntityDirectory, uei: &str, award_number: &str) -> LookupOutcome {
    let award_number = award_number.trim();
    if !award_number.is_empty() {
        let status = directory
            .awards
            .iter()
            .find(|award| award.award_id == award_number)
            .map(|award| award.status);
        LookupOutcome::Match(summary(directory, uei, Some(award_number.to_string()), status))
    } else {
        let candidates = directory
            .awards
            .iter()
            .map(|award| {
                summary(directory, uei, Some(award.award_id.clone()), Some(award.status))
            })
            .collect();
        LookupOutcome::Candidates(candidates)
    }
}

fn summary(
    directory: &EntityDirectory,
    uei: &str,
    award_id: Option<String>,
    award_status: Option<AwardLifecycle>,
) -> EntitySummary {
    EntitySummary {
        legal_name: directory.legal_name.clone(),
        address: directory.address.clone(),
        uei: uei.to_string(),
        cage: directory.cage.clone(),
        award_id,
        award_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> EntityDirectory {
        EntityDirectory {
            legal_name: "Acme Defense Contractors LLC".to_string(),
            address: "1234 Contract Way, Arlington, VA 22202".to_string(),
            cage: "6TL95".to_string(),
            awards: vec![
                DirectoryAward {
                    award_id: "W912DY-19-C-0045".to_string(),
                    status: AwardLifecycle::Terminated,
                },
                DirectoryAward {
                    award_id: "W912DY-23-C-0089".to_string(),
                    status: AwardLifecycle::Active,
                },
            ],
        }
    }

    #[test]
    fn award_number_gives_a_direct_match() {
        let outcome = lookup(&directory(), "J8SXUNY8LKA3", "W912DY-23-C-0089");
        match outcome {
            LookupOutcome::Match(summary) => {
                assert_eq!(summary.award_id.as_deref(), Some("W912DY-23-C-0089"));
                assert_eq!(summary.award_status, Some(AwardLifecycle::Active));
                assert_eq!(summary.uei, "J8SXUNY8LKA3");
            }
            other => panic!("expected direct match, got {other:?}"),
        }
    }

    #[test]
    fn unknown_award_number_still_matches_without_a_status() {
        let outcome = lookup(&directory(), "J8SXUNY8LKA3", "FA8621-22-C-9876");
        match outcome {
            LookupOutcome::Match(summary) => assert_eq!(summary.award_status, None),
            other => panic!("expected direct match, got {other:?}"),
        }
    }

    #[test]
    fn blank_award_number_lists_candidates() {
        let outcome = lookup(&directory(), "J8SXUNY8LKA3", "  ");
        match outcome {
            LookupOutcome::Candidates(candidates) => {
                assert_eq!(candidates.len(), 2);
                assert!(candidates.iter().all(|c| c.uei == "J8SXUNY8LKA3"));
                assert!(candidates.iter().all(|c| c.award_id.is_some()));
            }
            other => panic!("expected candidates, got {other:?}"),
        }
    }

    #[test]
    fn normalize_uei_uppercases_and_truncates() {
        assert_eq!(normalize_uei(" j8sxuny8lka3extra "), "J8SXUNY8LKA3");
        assert_eq!(normalize_uei("abc"), "ABC");
    }
}
