//! Progression state machine for the record-creation wizard.
//!
//! The wizard is a four-section progressive-disclosure pipeline
//! (Award -> Record Type -> Details -> Documents) followed by a review
//! sub-state and a terminal submitted state. Sections complete in order and
//! never un-complete; a section is rendered only once its predecessor is
//! complete, and stays rendered afterwards. Guards make the invalid
//! transitions unrepresentable instead of merely disabling buttons:
//!
//! - section 1 cannot complete without a selected entity/award,
//! - section 2 cannot complete without a record type,
//! - sections 3 and 4 are unguarded,
//! - submission requires being in review with the certification flag set.

use serde::{Deserialize, Serialize};

use crate::details::RecordDetails;
use crate::model::entity::EntitySummary;
use crate::record_type::RecordType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Award,
    RecordType,
    Details,
    Documents,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Award,
        Section::RecordType,
        Section::Details,
        Section::Documents,
    ];

    pub fn index(&self) -> usize {
        match self {
            Section::Award => 0,
            Section::RecordType => 1,
            Section::Details => 2,
            Section::Documents => 3,
        }
    }

    /// Short title shown in the step indicator.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Award => "Award",
            Section::RecordType => "Record Type",
            Section::Details => "Details",
            Section::Documents => "Documents",
        }
    }
}

/// Visual state of one step in the step indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Pending,
    Active,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardError {
    /// Section 1 cannot complete until the lookup produced a selection.
    NoAwardSelected,
    /// Section 2 cannot complete while no record type is chosen.
    NoRecordType,
    /// A later section cannot complete before its predecessors.
    SectionNotReachable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    NotInReview,
    NotCertified,
}

#[derive(Debug, Clone, PartialEq)]
enum ReviewState {
    Editing,
    Reviewing { certified: bool },
    Submitted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WizardFlow {
    /// Number of sections completed so far. Monotonically non-decreasing.
    completed: usize,
    review: ReviewState,
}

impl WizardFlow {
    pub fn new() -> Self {
        Self {
            completed: 0,
            review: ReviewState::Editing,
        }
    }

    pub fn completed_sections(&self) -> usize {
        self.completed
    }

    pub fn complete_award(&mut self, entity: Option<&EntitySummary>) -> Result<(), GuardError> {
        if entity.is_none() {
            return Err(GuardError::NoAwardSelected);
        }
        self.completed = self.completed.max(1);
        Ok(())
    }

    pub fn complete_record_type(
        &mut self,
        record_type: Option<RecordType>,
    ) -> Result<(), GuardError> {
        if self.completed < 1 {
            return Err(GuardError::SectionNotReachable);
        }
        if record_type.is_none() {
            return Err(GuardError::NoRecordType);
        }
        self.completed = self.completed.max(2);
        Ok(())
    }

    /// Section 3 has no field-level gate; it only has to be reachable.
    pub fn complete_details(&mut self) -> Result<(), GuardError> {
        if self.completed < 2 {
            return Err(GuardError::SectionNotReachable);
        }
        self.completed = self.completed.max(3);
        Ok(())
    }

    /// A section renders once its predecessor is complete and keeps
    /// rendering from then on.
    pub fn is_visible(&self, section: Section) -> bool {
        section.index() <= self.completed
    }

    pub fn step_state(&self, section: Section) -> StepState {
        if section.index() < self.completed {
            StepState::Complete
        } else if section.index() == self.completed {
            StepState::Active
        } else {
            StepState::Pending
        }
    }

    /// The review action lives at the bottom of the documents section.
    pub fn can_continue_to_review(&self) -> bool {
        self.completed >= 3
    }

    /// Marks the documents section complete and enters the review
    /// sub-state with certification unset.
    pub fn enter_review(&mut self) -> Result<(), GuardError> {
        if self.completed < 3 {
            return Err(GuardError::SectionNotReachable);
        }
        self.completed = 4;
        self.review = ReviewState::Reviewing { certified: false };
        Ok(())
    }

    /// Leaves review without touching section completion, so the live
    /// wizard reappears exactly as it was.
    pub fn back_to_edit(&mut self) {
        if matches!(self.review, ReviewState::Reviewing { .. }) {
            self.review = ReviewState::Editing;
        }
    }

    pub fn in_review(&self) -> bool {
        matches!(self.review, ReviewState::Reviewing { .. })
    }

    pub fn certified(&self) -> bool {
        matches!(self.review, ReviewState::Reviewing { certified: true })
    }

    pub fn set_certified(&mut self, value: bool) {
        if let ReviewState::Reviewing { certified } = &mut self.review {
            *certified = value;
        }
    }

    /// Terminal transition. Fails without a set certification flag, in
    /// which case the state is left unchanged.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        match self.review {
            ReviewState::Reviewing { certified: true } => {
                self.review = ReviewState::Submitted;
                Ok(())
            }
            ReviewState::Reviewing { certified: false } => Err(SubmitError::NotCertified),
            _ => Err(SubmitError::NotInReview),
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.review, ReviewState::Submitted)
    }
}

impl Default for WizardFlow {
    fn default() -> Self {
        Self::new()
    }
}

/// A file the user attached locally. Only the name and byte size are kept;
/// nothing is transmitted anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRef {
    pub id: String,
    pub name: String,
    pub size_bytes: u64,
}

/// Immutable copy of the wizard's collected values, frozen when the user
/// continues to review and used verbatim by the review screen and the
/// submission callback. Returning to edit does not write it back into the
/// live wizard state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSnapshot {
    pub record_type: RecordType,
    pub uei: String,
    pub award_number: String,
    pub solicitation: String,
    pub entity: EntitySummary,
    pub details: RecordDetails,
    pub agency: String,
    pub office: String,
    pub files: Vec<FileRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::AwardLifecycle;

    fn entity() -> EntitySummary {
        EntitySummary {
            legal_name: "Acme Defense Contractors LLC".to_string(),
            address: "1234 Contract Way, Arlington, VA 22202".to_string(),
            uei: "J8SXUNY8LKA3".to_string(),
            cage: "6TL95".to_string(),
            award_id: Some("W912DY-23-C-0089".to_string()),
            award_status: Some(AwardLifecycle::Active),
        }
    }

    #[test]
    fn award_section_requires_selection() {
        let mut flow = WizardFlow::new();
        assert_eq!(flow.complete_award(None), Err(GuardError::NoAwardSelected));
        assert_eq!(flow.completed_sections(), 0);
        assert!(!flow.is_visible(Section::RecordType));

        flow.complete_award(Some(&entity())).unwrap();
        assert!(flow.is_visible(Section::RecordType));
        assert!(!flow.is_visible(Section::Details));
    }

    #[test]
    fn record_type_section_requires_choice() {
        let mut flow = WizardFlow::new();
        flow.complete_award(Some(&entity())).unwrap();
        assert_eq!(flow.complete_record_type(None), Err(GuardError::NoRecordType));
        flow.complete_record_type(Some(RecordType::Trafficking)).unwrap();
        assert!(flow.is_visible(Section::Details));
    }

    #[test]
    fn sections_cannot_complete_out_of_order() {
        let mut flow = WizardFlow::new();
        assert_eq!(
            flow.complete_record_type(Some(RecordType::Trafficking)),
            Err(GuardError::SectionNotReachable)
        );
        assert_eq!(flow.complete_details(), Err(GuardError::SectionNotReachable));
        assert_eq!(flow.enter_review(), Err(GuardError::SectionNotReachable));
    }

    #[test]
    fn completion_is_monotone_and_sections_stay_visible() {
        let mut flow = WizardFlow::new();
        flow.complete_award(Some(&entity())).unwrap();
        flow.complete_record_type(Some(RecordType::DefectivePricing)).unwrap();
        flow.complete_details().unwrap();
        // Re-running an earlier section's continue does not regress.
        flow.complete_award(Some(&entity())).unwrap();
        assert_eq!(flow.completed_sections(), 3);
        for section in Section::ALL {
            assert!(flow.is_visible(section));
        }
        assert_eq!(flow.step_state(Section::Award), StepState::Complete);
        assert_eq!(flow.step_state(Section::Documents), StepState::Active);
    }

    #[test]
    fn submit_is_blocked_until_certified() {
        let mut flow = WizardFlow::new();
        flow.complete_award(Some(&entity())).unwrap();
        flow.complete_record_type(Some(RecordType::Trafficking)).unwrap();
        flow.complete_details().unwrap();

        assert_eq!(flow.submit(), Err(SubmitError::NotInReview));

        flow.enter_review().unwrap();
        assert!(flow.in_review());
        assert_eq!(flow.submit(), Err(SubmitError::NotCertified));
        assert!(flow.in_review(), "failed submit must not leave review");

        flow.set_certified(true);
        flow.submit().unwrap();
        assert!(flow.is_submitted());
    }

    #[test]
    fn back_to_edit_keeps_sections_complete() {
        let mut flow = WizardFlow::new();
        flow.complete_award(Some(&entity())).unwrap();
        flow.complete_record_type(Some(RecordType::Trafficking)).unwrap();
        flow.complete_details().unwrap();
        flow.enter_review().unwrap();
        flow.set_certified(true);
        flow.back_to_edit();

        assert!(!flow.in_review());
        assert_eq!(flow.completed_sections(), 4);
        // Re-entering review resets the certification acknowledgment.
        flow.enter_review().unwrap();
        assert!(!flow.certified());
    }
}
