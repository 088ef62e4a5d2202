//! Component state for the record form wizard.
//!
//! The progression itself (which sections are visible, review/submitted
//! sub-state, certification flag) lives in `integrity_common::wizard::
//! WizardFlow`; this struct adds the live field values the user is typing
//! into, the lookup results, and the frozen snapshot used by the review
//! screen.
//!
//! Fields are `pub` because they are accessed by the `view` and `update`
//! modules.

use integrity_common::details::RecordDetails;
use integrity_common::model::entity::EntitySummary;
use integrity_common::model::team::CurrentUser;
use integrity_common::record_type::RecordType;
use integrity_common::wizard::{FileRef, RecordSnapshot, WizardFlow};
use yew::prelude::*;

pub struct RecordFormComponent {
    /// Section progression, review sub-state and certification flag.
    pub flow: WizardFlow,

    /// UEI entry, normalized to uppercase and at most 12 characters.
    pub uei: String,

    /// Optional award number; filled automatically when a lookup candidate
    /// is selected.
    pub award_number: String,

    /// Solicitation number associated with the award. Carried through to
    /// the snapshot; there is no entry field for it yet.
    pub solicitation: String,

    /// The selected entity/award. `Some` is the gate for leaving section 1.
    pub entity: Option<EntitySummary>,

    /// Broad-lookup results the user picks from.
    pub candidates: Vec<EntitySummary>,
    pub show_candidates: bool,

    pub record_type: Option<RecordType>,

    /// Typed detail values for the selected record type. Replaced wholesale
    /// when the record type changes, so no stale fields survive a switch.
    pub details: Option<RecordDetails>,

    /// Submitting agency/office, seeded from the injected current user.
    pub agency: String,
    pub office: String,

    /// Local file references (name and size only; nothing is uploaded).
    pub files: Vec<FileRef>,

    /// "Also terminate this contract" checkbox shown for active awards.
    pub also_terminate: bool,

    /// Snapshot frozen when the user continues to review. The live fields
    /// above are never overwritten from it.
    pub frozen: Option<RecordSnapshot>,

    /// Reference to the hidden file input of the documents section.
    pub file_input_ref: NodeRef,
}

impl RecordFormComponent {
    pub fn new(user: &CurrentUser) -> Self {
        Self {
            flow: WizardFlow::new(),
            uei: String::new(),
            award_number: String::new(),
            solicitation: String::new(),
            entity: None,
            candidates: Vec::new(),
            show_candidates: false,
            record_type: None,
            details: None,
            agency: user.agency.clone(),
            office: user.office.clone(),
            files: Vec::new(),
            also_terminate: false,
            frozen: None,
            file_input_ref: NodeRef::default(),
        }
    }

    /// Assembles the immutable snapshot handed to the review screen and the
    /// submission callback. `None` until an entity and record type exist,
    /// which the wizard guards guarantee before review is reachable.
    pub fn snapshot(&self) -> Option<RecordSnapshot> {
        let record_type = self.record_type?;
        Some(RecordSnapshot {
            record_type,
            uei: self.uei.clone(),
            award_number: self.award_number.clone(),
            solicitation: self.solicitation.clone(),
            entity: self.entity.clone()?,
            details: self.details.clone()?,
            agency: self.agency.clone(),
            office: self.office.clone(),
            files: self.files.clone(),
        })
    }
}
