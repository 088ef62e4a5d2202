//! USWDS-styled form field and badge builders shared by the form pages.
//! Each builder wires the change event back to a `Callback<String>` so the
//! calling component only deals with field values.

use integrity_common::model::award::AwardStatus;
use integrity_common::model::entity::AwardLifecycle;
use integrity_common::model::record::RecordStatus;
use integrity_common::record_type::SelectOption;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub fn text_input(
    label: &'static str,
    value: String,
    placeholder: &'static str,
    on_change: Callback<String>,
) -> Html {
    input_field(label, "text", value, placeholder, on_change)
}

pub fn date_input(label: &'static str, value: String, on_change: Callback<String>) -> Html {
    input_field(label, "date", value, "", on_change)
}

pub fn number_input(
    label: &'static str,
    value: String,
    placeholder: &'static str,
    on_change: Callback<String>,
) -> Html {
    input_field(label, "number", value, placeholder, on_change)
}

fn input_field(
    label: &'static str,
    input_type: &'static str,
    value: String,
    placeholder: &'static str,
    on_change: Callback<String>,
) -> Html {
    html! {
        <div class="form-field">
            <label class="form-label">{ label }</label>
            <input
                type={input_type}
                class="form-input"
                value={value}
                placeholder={placeholder}
                oninput={Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_change.emit(input.value());
                })}
            />
        </div>
    }
}

pub fn textarea(
    label: &'static str,
    value: String,
    placeholder: &'static str,
    on_change: Callback<String>,
) -> Html {
    html! {
        <div class="form-field">
            <label class="form-label">{ label }</label>
            <textarea
                class="form-input form-textarea"
                rows="6"
                value={value}
                placeholder={placeholder}
                oninput={Callback::from(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    on_change.emit(input.value());
                })}
            />
        </div>
    }
}

pub fn select_input(
    label: &'static str,
    value: String,
    placeholder: &'static str,
    options: &'static [SelectOption],
    on_change: Callback<String>,
) -> Html {
    html! {
        <div class="form-field">
            <label class="form-label">{ label }</label>
            <select
                class="form-input"
                onchange={Callback::from(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    on_change.emit(select.value());
                })}
            >
                <option value="" selected={value.is_empty()}>{ placeholder }</option>
                {
                    for options.iter().map(|opt| html! {
                        <option value={opt.value} selected={value == opt.value}>
                            { opt.label }
                        </option>
                    })
                }
            </select>
        </div>
    }
}

pub fn award_status_badge(status: AwardStatus) -> Html {
    let class = match status {
        AwardStatus::Active => "badge badge-success",
        AwardStatus::Terminated => "badge badge-danger",
    };
    html! { <span class={class}>{ status.label() }</span> }
}

pub fn lifecycle_badge(status: AwardLifecycle) -> Html {
    let class = match status {
        AwardLifecycle::Active => "badge badge-info",
        AwardLifecycle::Terminated => "badge badge-danger",
        AwardLifecycle::Completed => "badge badge-success",
    };
    html! { <span class={class}>{ status.label() }</span> }
}

pub fn record_status_badge(status: RecordStatus) -> Html {
    let class = match status {
        RecordStatus::Published => "badge badge-success",
        RecordStatus::UnderReview => "badge badge-warning",
        RecordStatus::Submitted => "badge badge-info",
        RecordStatus::Returned => "badge badge-danger",
        RecordStatus::Draft => "badge badge-neutral",
    };
    html! { <span class={class}>{ status.label() }</span> }
}
