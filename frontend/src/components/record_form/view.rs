//! View rendering for the record form wizard.
//!
//! Four progressively disclosed sections (Award -> Record Type -> Details
//! -> Documents) under a USWDS-style step indicator. Section 3's inputs
//! are driven entirely by the record-type catalog, so the rendered field
//! set is exactly the catalog's field set. When the flow is in its review
//! sub-state the whole page is replaced by the review screen.

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use integrity_common::record_type::{FieldKind, RecordType};
use integrity_common::wizard::{Section, StepState};
use integrity_common::model::entity::EntitySummary;

use crate::components::uswds::{
    date_input, lifecycle_badge, number_input, select_input, text_input, textarea,
};

use super::helpers::format_size;
use super::messages::Msg;
use super::review;
use super::state::RecordFormComponent;

pub fn view(component: &RecordFormComponent, ctx: &Context<RecordFormComponent>) -> Html {
    let link = ctx.link();
    if component.flow.in_review() {
        return review::view(component, ctx);
    }

    html! {
        <div class="page form-page">
            <div class="page-header">
                <h1>{ "Create Integrity Record" }</h1>
                <p class="text-muted">
                    { "Complete all sections below to submit a new integrity record." }
                </p>
            </div>

            { build_step_indicator(component) }
            { build_selected_award_bar(component, link) }
            { build_award_section(component, link) }
            {
                if component.flow.is_visible(Section::RecordType) {
                    build_record_type_section(component, link)
                } else {
                    html! {}
                }
            }
            {
                if component.flow.is_visible(Section::Details) {
                    build_details_section(component, link)
                } else {
                    html! {}
                }
            }
            {
                if component.flow.is_visible(Section::Documents) {
                    html! {
                        <>
                            { build_documents_section(component, link) }
                            { build_terminate_notice(component, link) }
                            { build_bottom_buttons(link) }
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

/// Step indicator with the three per-step states: pending, active,
/// complete. The completion index only ever moves forward.
fn build_step_indicator(component: &RecordFormComponent) -> Html {
    html! {
        <ol class="step-indicator">
            {
                for Section::ALL.iter().map(|section| {
                    let state = component.flow.step_state(*section);
                    let class = match state {
                        StepState::Complete => "step step-complete",
                        StepState::Active => "step step-active",
                        StepState::Pending => "step step-pending",
                    };
                    let marker = match state {
                        StepState::Complete => "\u{2713}".to_string(),
                        _ => (section.index() + 1).to_string(),
                    };
                    html! {
                        <li class={class}>
                            <span class="step-marker">{ marker }</span>
                            <span class="step-title">{ section.title() }</span>
                        </li>
                    }
                })
            }
        </ol>
    }
}

/// Persistent bar summarizing the selected award once section 1 is done.
fn build_selected_award_bar(
    component: &RecordFormComponent,
    link: &Scope<RecordFormComponent>,
) -> Html {
    let show = component.entity.is_some() && component.flow.is_visible(Section::RecordType);
    match (&component.entity, show) {
        (Some(entity), true) => html! {
            <div class="award-bar">
                <div>
                    <p class="award-bar-title">{ "Selected Award" }</p>
                    <p>
                        { format!(
                            "{} \u{2022} UEI: {} \u{2022} CAGE: {}",
                            entity.legal_name, entity.uei, entity.cage
                        ) }
                    </p>
                </div>
                <button
                    type="button"
                    class="btn-link"
                    onclick={link.callback(|_| Msg::ChangeSelection)}
                >
                    { "Change" }
                </button>
            </div>
        },
        _ => html! {},
    }
}

fn build_award_section(component: &RecordFormComponent, link: &Scope<RecordFormComponent>) -> Html {
    html! {
        <section class="form-section">
            <h2>{ "SECTION 1: Identify the entity and award" }</h2>
            <p class="text-muted">
                { "Integrity records are filed against a contractor (UEI) related to a specific \
                   contract or grant. Both are required." }
            </p>
            {
                if component.entity.is_none() {
                    build_lookup_inputs(component, link)
                } else {
                    html! {}
                }
            }
            {
                if component.show_candidates && !component.candidates.is_empty() {
                    build_candidate_list(component, link)
                } else {
                    html! {}
                }
            }
            {
                if let Some(entity) = &component.entity {
                    build_selected_entity_card(entity, link)
                } else {
                    html! {}
                }
            }
        </section>
    }
}

fn build_lookup_inputs(component: &RecordFormComponent, link: &Scope<RecordFormComponent>) -> Html {
    html! {
        <div class="lookup-fields">
            <div class="form-field">
                <label class="form-label">
                    { "Unique Entity Identifier (UEI) " }
                    <span class="required-marker">{ "*" }</span>
                </label>
                <input
                    type="text"
                    class="form-input"
                    value={component.uei.clone()}
                    placeholder="Enter 12-character UEI"
                    maxlength="12"
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::UeiChanged(input.value())
                    })}
                />
                <p class="field-hint">
                    { "Enter the Unique Entity ID of the awardee for the record being entered." }
                </p>
            </div>
            <div class="form-field">
                <label class="form-label">{ "Contract Award ID Number" }</label>
                <input
                    type="text"
                    class="form-input"
                    value={component.award_number.clone()}
                    placeholder="Optional - leave blank to see all awards"
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::AwardNumberChanged(input.value())
                    })}
                />
                <p class="field-hint">
                    { "Optional: Enter the Contract Number to go directly to that award. Leave \
                       blank to see all awards for this UEI." }
                </p>
            </div>
            <button
                type="button"
                class="btn btn-primary"
                disabled={component.uei.is_empty()}
                onclick={link.callback(|_| Msg::RunLookup)}
            >
                { "Look Up" }
            </button>
        </div>
    }
}

fn build_candidate_list(component: &RecordFormComponent, link: &Scope<RecordFormComponent>) -> Html {
    html! {
        <div class="candidate-list">
            <p class="form-label">{ "Select an award:" }</p>
            {
                for component.candidates.iter().enumerate().map(|(index, candidate)| {
                    html! {
                        <button
                            type="button"
                            class="candidate-card"
                            onclick={link.callback(move |_| Msg::SelectCandidate(index))}
                        >
                            <div class="candidate-header">
                                <span class="mono">
                                    { candidate.award_id.clone().unwrap_or_default() }
                                </span>
                                {
                                    match candidate.award_status {
                                        Some(status) => lifecycle_badge(status),
                                        None => html! {},
                                    }
                                }
                            </div>
                            <p class="text-muted">{ candidate.legal_name.clone() }</p>
                            <p class="text-muted">{ candidate.address.clone() }</p>
                            <p>
                                { format!("UEI: {} \u{2022} CAGE: {}", candidate.uei, candidate.cage) }
                            </p>
                        </button>
                    }
                })
            }
        </div>
    }
}

fn build_selected_entity_card(entity: &EntitySummary, link: &Scope<RecordFormComponent>) -> Html {
    html! {
        <>
            <div class="entity-card">
                <div class="entity-card-header">
                    <div class="entity-card-title">
                        <p class="form-label">{ "Selected Award" }</p>
                        {
                            match entity.award_status {
                                Some(status) => lifecycle_badge(status),
                                None => html! {},
                            }
                        }
                    </div>
                    <button
                        type="button"
                        class="btn btn-outline"
                        onclick={link.callback(|_| Msg::ChangeSelection)}
                    >
                        { "Change Selection" }
                    </button>
                </div>
                <dl class="entity-card-body">
                    {
                        match &entity.award_id {
                            Some(award_id) => html! {
                                <>
                                    <dt>{ "Award ID" }</dt>
                                    <dd class="mono">{ award_id.clone() }</dd>
                                </>
                            },
                            None => html! {},
                        }
                    }
                    <dt>{ "Legal Business Name" }</dt>
                    <dd>{ entity.legal_name.clone() }</dd>
                    <dt>{ "Address" }</dt>
                    <dd>{ entity.address.clone() }</dd>
                    <dt>{ "UEI" }</dt>
                    <dd class="mono">{ entity.uei.clone() }</dd>
                    <dt>{ "CAGE" }</dt>
                    <dd class="mono">{ entity.cage.clone() }</dd>
                </dl>
            </div>
            <div class="section-actions">
                <button
                    type="button"
                    class="btn btn-primary"
                    onclick={link.callback(|_| Msg::CompleteAward)}
                >
                    { "Continue" }
                </button>
            </div>
        </>
    }
}

fn build_record_type_section(
    component: &RecordFormComponent,
    link: &Scope<RecordFormComponent>,
) -> Html {
    html! {
        <section class="form-section">
            <h2>{ "SECTION 2: What are you reporting?" }</h2>
            <p class="text-muted">
                { "Select the type of integrity action or determination you are reporting. This \
                   determines which fields will appear in Section 3." }
            </p>
            <div class="radio-list">
                {
                    for RecordType::ALL.iter().map(|record_type| {
                        let record_type = *record_type;
                        let checked = component.record_type == Some(record_type);
                        html! {
                            <label class="radio-option">
                                <input
                                    type="radio"
                                    name="record-type"
                                    value={record_type.as_str()}
                                    checked={checked}
                                    onchange={link.callback(move |_| {
                                        Msg::SelectRecordType(record_type)
                                    })}
                                />
                                <span class="radio-text">
                                    <span class="radio-label">{ record_type.label() }</span>
                                    <span class="radio-description text-muted">
                                        { record_type.description() }
                                    </span>
                                </span>
                            </label>
                        }
                    })
                }
            </div>
            <div class="section-actions">
                <button
                    type="button"
                    class="btn btn-primary"
                    disabled={component.record_type.is_none()}
                    onclick={link.callback(|_| Msg::CompleteRecordType)}
                >
                    { "Continue" }
                </button>
            </div>
        </section>
    }
}

/// Section 3: the field set comes straight from the record-type catalog.
fn build_details_section(
    component: &RecordFormComponent,
    link: &Scope<RecordFormComponent>,
) -> Html {
    let fields = match (&component.record_type, &component.details) {
        (Some(record_type), Some(details)) => {
            record_type
                .fields()
                .iter()
                .map(|spec| {
                    let value = details.value_of(spec.key).unwrap_or_default().to_string();
                    let key = spec.key;
                    let on_change = link.callback(move |value: String| {
                        Msg::DetailChanged(key, value)
                    });
                    match spec.kind {
                        FieldKind::Date => date_input(spec.label, value, on_change),
                        FieldKind::CurrencyText => {
                            text_input(spec.label, value, spec.placeholder, on_change)
                        }
                        FieldKind::Integer => {
                            number_input(spec.label, value, spec.placeholder, on_change)
                        }
                        FieldKind::Text => {
                            textarea(spec.label, value, spec.placeholder, on_change)
                        }
                        FieldKind::Select(options) => {
                            select_input(spec.label, value, spec.placeholder, options, on_change)
                        }
                    }
                })
                .collect::<Html>()
        }
        _ => html! {},
    };

    html! {
        <section class="form-section">
            <h2>{ "SECTION 3: Action Details" }</h2>
            { fields }
            <div class="section-actions">
                <button
                    type="button"
                    class="btn btn-primary"
                    onclick={link.callback(|_| Msg::CompleteDetails)}
                >
                    { "Continue" }
                </button>
            </div>
        </section>
    }
}

fn build_documents_section(
    component: &RecordFormComponent,
    link: &Scope<RecordFormComponent>,
) -> Html {
    html! {
        <section class="form-section">
            <h2>{ "SECTION 4: Upload Documents" }</h2>
            <p class="text-muted">
                { "Attach supporting documentation such as determination letters, termination \
                   notices, agreements, or audit reports." }
            </p>
            <div class="dropzone">
                <input
                    type="file"
                    id="record-file-upload"
                    multiple={true}
                    accept=".pdf,.doc,.docx,.xls,.xlsx"
                    class="hidden-input"
                    ref={component.file_input_ref.clone()}
                    onchange={link.callback(|_| Msg::FilesSelected)}
                />
                <label for="record-file-upload" class="dropzone-label">
                    <p class="form-label">{ "Drag files here or click to browse" }</p>
                    <p class="text-muted">{ "Accepted formats: PDF, DOC, DOCX, XLS, XLSX" }</p>
                    <p class="field-hint">{ "Maximum file size: 10 MB per document" }</p>
                </label>
            </div>
            {
                if component.files.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="file-list">
                            <p class="form-label">
                                { format!("Uploaded Files ({})", component.files.len()) }
                            </p>
                            {
                                for component.files.iter().map(|file| {
                                    let id = file.id.clone();
                                    html! {
                                        <div class="file-row">
                                            <div>
                                                <p class="file-name">{ file.name.clone() }</p>
                                                <p class="field-hint">
                                                    { format_size(file.size_bytes) }
                                                </p>
                                            </div>
                                            <button
                                                type="button"
                                                class="btn-link btn-danger-link"
                                                onclick={link.callback(move |_| {
                                                    Msg::RemoveFile(id.clone())
                                                })}
                                            >
                                                { "Remove" }
                                            </button>
                                        </div>
                                    }
                                })
                            }
                        </div>
                    }
                }
            }
        </section>
    }
}

/// Shown for active awards only: flag that this violation also warrants
/// contract termination.
fn build_terminate_notice(
    component: &RecordFormComponent,
    link: &Scope<RecordFormComponent>,
) -> Html {
    use integrity_common::model::entity::AwardLifecycle;

    let active = component
        .entity
        .as_ref()
        .and_then(|entity| entity.award_status)
        == Some(AwardLifecycle::Active);
    if !active {
        return html! {};
    }
    html! {
        <div class="notice notice-warning">
            <label class="checkbox-option">
                <input
                    type="checkbox"
                    checked={component.also_terminate}
                    onchange={link.callback(|e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::ToggleAlsoTerminate(input.checked())
                    })}
                />
                <span>
                    <span class="form-label">{ "Also terminate this contract" }</span>
                    <p class="field-hint">
                        { "Check this box if this integrity violation requires contract \
                           termination. You'll be able to complete the termination form after \
                           submitting this integrity record." }
                    </p>
                </span>
            </label>
        </div>
    }
}

fn build_bottom_buttons(link: &Scope<RecordFormComponent>) -> Html {
    html! {
        <div class="page-actions">
            <button
                type="button"
                class="btn btn-outline"
                onclick={link.callback(|_| Msg::Cancel)}
            >
                { "Cancel" }
            </button>
            <button
                type="button"
                class="btn btn-outline"
                onclick={link.callback(|_| Msg::SaveDraft)}
            >
                { "Save Draft" }
            </button>
            <button
                type="button"
                class="btn btn-primary"
                onclick={link.callback(|_| Msg::ContinueToReview)}
            >
                { "Continue to Review" }
            </button>
        </div>
    }
}
