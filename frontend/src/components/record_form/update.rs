//! Update function for the record form wizard.
//!
//! Elm-style: receives the current state, the context and a `Msg`, mutates
//! the state and returns whether the view should re-render. Section
//! progression goes through the guards on `WizardFlow`, so an action whose
//! precondition does not hold leaves the state untouched.

use gloo_console::{info, warn};
use wasm_bindgen::JsValue;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use integrity_common::confirmation::confirmation_number;
use integrity_common::details::RecordDetails;
use integrity_common::lookup::{lookup, normalize_uei, LookupOutcome};
use integrity_common::wizard::SubmitError;

use crate::toast::show_toast;

use super::helpers::selected_files;
use super::messages::Msg;
use super::props::SubmissionOutcome;
use super::state::RecordFormComponent;

pub fn update(
    component: &mut RecordFormComponent,
    ctx: &Context<RecordFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UeiChanged(value) => {
            component.uei = normalize_uei(&value);
            true
        }
        Msg::AwardNumberChanged(value) => {
            component.award_number = value;
            true
        }
        Msg::RunLookup => {
            if component.uei.is_empty() {
                return false;
            }
            match lookup(&ctx.props().directory, &component.uei, &component.award_number) {
                LookupOutcome::Match(summary) => {
                    component.award_number = summary.award_id.clone().unwrap_or_default();
                    component.entity = Some(summary);
                    component.candidates.clear();
                    component.show_candidates = false;
                }
                LookupOutcome::Candidates(candidates) => {
                    info!("lookup returned candidates", candidates.len() as u32);
                    component.candidates = candidates;
                    component.show_candidates = true;
                    component.entity = None;
                }
            }
            true
        }
        Msg::SelectCandidate(index) => {
            if let Some(candidate) = component.candidates.get(index).cloned() {
                component.award_number = candidate.award_id.clone().unwrap_or_default();
                component.entity = Some(candidate);
                component.candidates.clear();
                component.show_candidates = false;
            }
            true
        }
        Msg::ChangeSelection => {
            // Keeps the UEI so the user can rerun the lookup directly.
            component.entity = None;
            component.award_number.clear();
            component.candidates.clear();
            component.show_candidates = false;
            true
        }
        Msg::CompleteAward => component.flow.complete_award(component.entity.as_ref()).is_ok(),
        Msg::SelectRecordType(record_type) => {
            if component.record_type != Some(record_type) {
                component.record_type = Some(record_type);
                component.details = Some(RecordDetails::empty(record_type));
            }
            true
        }
        Msg::CompleteRecordType => {
            component.flow.complete_record_type(component.record_type).is_ok()
        }
        Msg::DetailChanged(key, value) => {
            if let Some(details) = &mut component.details {
                if !details.set(key, value) {
                    warn!("field key not applicable to the selected record type", key);
                }
            }
            true
        }
        Msg::CompleteDetails => component.flow.complete_details().is_ok(),
        Msg::FilesSelected => {
            if let Some(input) = component.file_input_ref.cast::<HtmlInputElement>() {
                component.files.extend(selected_files(&input));
                // Reset so picking the same file again fires the event.
                input.set_value("");
            }
            true
        }
        Msg::RemoveFile(id) => {
            component.files.retain(|file| file.id != id);
            true
        }
        Msg::ToggleAlsoTerminate(value) => {
            component.also_terminate = value;
            true
        }
        Msg::ContinueToReview => match component.flow.enter_review() {
            Ok(()) => {
                component.frozen = component.snapshot();
                true
            }
            Err(_) => false,
        },
        Msg::BackToEdit => {
            component.flow.back_to_edit();
            true
        }
        Msg::SetCertified(value) => {
            component.flow.set_certified(value);
            true
        }
        Msg::Submit => match component.flow.submit() {
            Ok(()) => {
                if let Some(snapshot) = component.frozen.clone() {
                    let now = js_sys::Date::now() as u64;
                    let submitted_at: String = js_sys::Date::new_0()
                        .to_locale_string("en-US", &JsValue::UNDEFINED)
                        .into();
                    if let Ok(payload) = serde_json::to_string(&snapshot) {
                        // The payload a real deployment would POST to SAM.gov.
                        info!("submission payload", payload);
                    }
                    ctx.props().on_submitted.emit(SubmissionOutcome {
                        snapshot,
                        confirmation_number: confirmation_number(now),
                        submitted_at,
                    });
                }
                false
            }
            Err(SubmitError::NotCertified) => {
                show_toast("Please certify that the information is accurate and complete.");
                false
            }
            Err(SubmitError::NotInReview) => false,
        },
        Msg::SaveDraft => {
            ctx.props().on_save_draft.emit(());
            false
        }
        Msg::Cancel => {
            ctx.props().on_cancel.emit(());
            false
        }
    }
}
