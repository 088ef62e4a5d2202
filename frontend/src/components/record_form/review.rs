//! Review screen rendered while the wizard's flow is in its review
//! sub-state. Everything shown here comes from the frozen snapshot; the
//! per-section Edit buttons return to the live wizard without writing the
//! snapshot back.

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{format_size, or_dash};
use super::messages::Msg;
use super::state::RecordFormComponent;

pub fn view(component: &RecordFormComponent, ctx: &Context<RecordFormComponent>) -> Html {
    let link = ctx.link();
    let Some(snapshot) = &component.frozen else {
        return html! {};
    };

    html! {
        <div class="page review-page">
            <div class="page-header">
                <h1>{ "Review Integrity Record" }</h1>
                <p class="text-muted">
                    { "Review the information below before submitting. You can edit any section \
                       if changes are needed." }
                </p>
            </div>

            <section class="form-section">
                { section_header("SECTION 1: Record Type", link) }
                { review_row("Record Type", snapshot.record_type.label().to_string()) }
            </section>

            <section class="form-section">
                { section_header("SECTION 2: Award Information", link) }
                { review_row("UEI", or_dash(&snapshot.uei)) }
                { review_row("Award Number", or_dash(&snapshot.award_number)) }
                { review_row("Solicitation", or_dash(&snapshot.solicitation)) }
                { review_row("Legal Business Name", snapshot.entity.legal_name.clone()) }
                { review_row("Address", snapshot.entity.address.clone()) }
                { review_row("CAGE Code", snapshot.entity.cage.clone()) }
            </section>

            <section class="form-section">
                { section_header("SECTION 3: Action Details", link) }
                {
                    for snapshot.details.entries().into_iter().map(|(label, value)| {
                        review_row(label, or_dash(&value))
                    })
                }
            </section>

            <section class="form-section">
                { section_header("SECTION 4: Supporting Documents", link) }
                {
                    if snapshot.files.is_empty() {
                        html! { <p class="text-muted">{ "No documents uploaded" }</p> }
                    } else {
                        html! {
                            <ul class="document-list">
                                {
                                    for snapshot.files.iter().map(|file| html! {
                                        <li>
                                            { format!(
                                                "{} ({})",
                                                file.name,
                                                format_size(file.size_bytes)
                                            ) }
                                        </li>
                                    })
                                }
                            </ul>
                        }
                    }
                }
            </section>

            <section class="form-section">
                { section_header("Submitting Agency", link) }
                { review_row("Agency", not_provided(&snapshot.agency)) }
                { review_row("Office", not_provided(&snapshot.office)) }
            </section>

            <div class="notice notice-info">
                <label class="checkbox-option">
                    <input
                        type="checkbox"
                        checked={component.flow.certified()}
                        onchange={link.callback(|e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetCertified(input.checked())
                        })}
                    />
                    <span>
                        { "I certify that the information provided is accurate and complete to \
                           the best of my knowledge." }
                    </span>
                </label>
            </div>

            <div class="page-actions page-actions-split">
                <button
                    type="button"
                    class="btn btn-outline"
                    onclick={link.callback(|_| Msg::BackToEdit)}
                >
                    { "Back to Edit" }
                </button>
                <div class="page-actions">
                    <button
                        type="button"
                        class="btn btn-outline"
                        onclick={link.callback(|_| Msg::SaveDraft)}
                    >
                        { "Save Draft" }
                    </button>
                    <button
                        type="button"
                        class={classes!(
                            "btn",
                            if component.flow.certified() { "btn-success" } else { "btn-disabled" }
                        )}
                        onclick={link.callback(|_| Msg::Submit)}
                    >
                        { "Submit Integrity Record" }
                    </button>
                </div>
            </div>
        </div>
    }
}

fn section_header(title: &'static str, link: &Scope<RecordFormComponent>) -> Html {
    html! {
        <div class="review-section-header">
            <h2>{ title }</h2>
            <button
                type="button"
                class="btn-link"
                onclick={link.callback(|_| Msg::BackToEdit)}
            >
                { "Edit" }
            </button>
        </div>
    }
}

fn review_row(label: &'static str, value: String) -> Html {
    html! {
        <div class="review-row">
            <p class="review-label">{ label }</p>
            <p class="review-value">{ value }</p>
        </div>
    }
}

fn not_provided(value: &str) -> String {
    if value.is_empty() {
        "Not provided".to_string()
    } else {
        value.to_string()
    }
}
