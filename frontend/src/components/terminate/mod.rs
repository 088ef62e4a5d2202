//! Contract termination form. Collects a date, a reason from the fixed
//! enumeration and a justification of at least fifty characters before the
//! terminate action enables; completion is validated by
//! `integrity_common::termination::TerminationRequest`. The form itself
//! changes nothing: the parent flips the award status in response to
//! `on_complete`.

use num_format::{Locale, ToFormattedString};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use integrity_common::model::award::Award;
use integrity_common::termination::{TerminationReason, TerminationRequest, MIN_DETAILS_LEN};
use integrity_common::wizard::FileRef;

use crate::components::record_form::helpers::{format_size, selected_files};

#[derive(Properties, PartialEq, Clone)]
pub struct TerminateContractProps {
    pub award: Award,
    pub on_back: Callback<()>,
    pub on_complete: Callback<()>,
}

pub enum Msg {
    DateChanged(String),
    ReasonChanged(String),
    DetailsChanged(String),
    FilesSelected,
    RemoveFile(String),
    Submit,
    Cancel,
}

pub struct TerminateContractForm {
    request: TerminationRequest,
    files: Vec<FileRef>,
    file_input_ref: NodeRef,
}

impl Component for TerminateContractForm {
    type Message = Msg;
    type Properties = TerminateContractProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            request: TerminationRequest::default(),
            files: Vec::new(),
            file_input_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::DateChanged(value) => {
                self.request.date = value;
                true
            }
            Msg::ReasonChanged(tag) => {
                self.request.reason = TerminationReason::parse(&tag);
                true
            }
            Msg::DetailsChanged(value) => {
                self.request.details = value;
                true
            }
            Msg::FilesSelected => {
                if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
                    self.files.extend(selected_files(&input));
                    input.set_value("");
                }
                true
            }
            Msg::RemoveFile(id) => {
                self.files.retain(|file| file.id != id);
                true
            }
            Msg::Submit => {
                if self.request.is_complete() {
                    ctx.props().on_complete.emit(());
                }
                false
            }
            Msg::Cancel => {
                ctx.props().on_back.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let award = &ctx.props().award;
        let complete = self.request.is_complete();
        let value = format!("${}", award.value.to_formatted_string(&Locale::en));

        html! {
            <div class="page terminate-page">
                <div class="page-header">
                    <button
                        type="button"
                        class="btn-link"
                        onclick={link.callback(|_| Msg::Cancel)}
                    >
                        { "\u{2190} Back to Workspace" }
                    </button>
                    <h1>{ "Terminate Contract" }</h1>
                    <p class="text-muted">
                        { "Complete this form to officially terminate the contract. This action \
                           will update the award status and notify relevant parties." }
                    </p>
                </div>

                <section class="form-section">
                    <h2>{ "Contract Information" }</h2>
                    { info_row("Award Number", award.award_number.clone()) }
                    { info_row("UEI", award.uei.clone()) }
                    { info_row("Contractor", award.contractor_name.clone()) }
                    { info_row("Award Title", award.title.clone()) }
                    { info_row("Contract Value", value) }
                    { info_row(
                        "Period of Performance",
                        format!("{} \u{2013} {}", award.pop_start, award.pop_end),
                    ) }
                </section>

                <section class="form-section">
                    <h2>{ "Termination Details" }</h2>
                    <div class="form-field">
                        <label class="form-label">
                            { "Termination Date " }
                            <span class="required-marker">{ "*" }</span>
                        </label>
                        <input
                            type="date"
                            class="form-input"
                            value={self.request.date.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                Msg::DateChanged(input.value())
                            })}
                        />
                    </div>
                    <div class="form-field">
                        <label class="form-label">
                            { "Reason for Termination " }
                            <span class="required-marker">{ "*" }</span>
                        </label>
                        <select
                            class="form-input"
                            onchange={link.callback(|e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                Msg::ReasonChanged(select.value())
                            })}
                        >
                            <option value="" selected={self.request.reason.is_none()}>
                                { "Select a reason" }
                            </option>
                            {
                                for TerminationReason::ALL.iter().map(|reason| html! {
                                    <option
                                        value={reason.as_str()}
                                        selected={self.request.reason == Some(*reason)}
                                    >
                                        { reason.label() }
                                    </option>
                                })
                            }
                        </select>
                    </div>
                    <div class="form-field">
                        <label class="form-label">
                            { "Additional Details " }
                            <span class="required-marker">{ "*" }</span>
                        </label>
                        <p class="field-hint">
                            { format!(
                                "Provide a detailed explanation of the termination \
                                 circumstances. Minimum {MIN_DETAILS_LEN} characters required."
                            ) }
                        </p>
                        <textarea
                            class="form-input form-textarea"
                            rows="6"
                            value={self.request.details.clone()}
                            placeholder="Describe the circumstances leading to termination, any \
                                         relevant dates, communications, or other pertinent \
                                         information..."
                            oninput={link.callback(|e: InputEvent| {
                                let input: HtmlTextAreaElement = e.target_unchecked_into();
                                Msg::DetailsChanged(input.value())
                            })}
                        />
                        <p class="field-hint">
                            { format!(
                                "{} / {MIN_DETAILS_LEN} characters minimum",
                                self.request.details_len()
                            ) }
                        </p>
                    </div>
                </section>

                <section class="form-section">
                    <h2>{ "Supporting Documentation" }</h2>
                    <p class="text-muted">
                        { "Upload any relevant documentation (optional but recommended): \
                           termination letters, correspondence, notices, etc." }
                    </p>
                    <div class="dropzone">
                        <input
                            type="file"
                            id="termination-file-upload"
                            multiple={true}
                            accept=".pdf,.doc,.docx,.txt,.jpg,.jpeg,.png"
                            class="hidden-input"
                            ref={self.file_input_ref.clone()}
                            onchange={link.callback(|_| Msg::FilesSelected)}
                        />
                        <label for="termination-file-upload" class="dropzone-label">
                            <p>
                                <span class="btn-link">{ "Choose files to upload" }</span>
                                <span class="text-muted">{ " or drag and drop" }</span>
                            </p>
                            <p class="field-hint">
                                { "PDF, DOC, DOCX, TXT, JPG, PNG (Max 10MB per file)" }
                            </p>
                        </label>
                    </div>
                    {
                        if self.files.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <div class="file-list">
                                    <p class="form-label">{ "Uploaded Files:" }</p>
                                    {
                                        for self.files.iter().map(|file| {
                                            let id = file.id.clone();
                                            html! {
                                                <div class="file-row">
                                                    <span>
                                                        { format!(
                                                            "{} ({})",
                                                            file.name,
                                                            format_size(file.size_bytes)
                                                        ) }
                                                    </span>
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

                <div class="notice notice-warning">
                    <p class="form-label">{ "Important Notice" }</p>
                    <p>
                        { "Terminating this contract will permanently change its status to \
                           \"Terminated\" and notify all relevant parties including the \
                           contractor and contracting officer. This action cannot be undone." }
                    </p>
                </div>

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
                        class={classes!("btn", if complete { "btn-danger" } else { "btn-disabled" })}
                        disabled={!complete}
                        onclick={link.callback(|_| Msg::Submit)}
                    >
                        { "Terminate Contract" }
                    </button>
                </div>
            </div>
        }
    }
}

fn info_row(label: &'static str, value: String) -> Html {
    html! {
        <div class="review-row">
            <p class="review-label">{ label }</p>
            <p class="review-value">{ value }</p>
        </div>
    }
}
