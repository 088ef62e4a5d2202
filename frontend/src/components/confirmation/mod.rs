//! Terminal confirmation page shown after a record is submitted. Purely
//! presentational: the confirmation number and timestamp were generated at
//! submission time and arrive through props.

use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq, Clone)]
pub struct ConfirmationProps {
    pub confirmation_number: String,
    pub submitted_at: String,
    pub on_back: yew::Callback<()>,
}

pub struct ConfirmationPage;

impl Component for ConfirmationPage {
    type Message = ();
    type Properties = ConfirmationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ConfirmationPage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_back = {
            let on_back = props.on_back.clone();
            yew::Callback::from(move |_: web_sys::MouseEvent| on_back.emit(()))
        };
        let on_print = yew::Callback::from(|_: web_sys::MouseEvent| {
            if let Some(window) = web_sys::window() {
                let _ = window.print();
            }
        });
        html! {
            <div class="page confirmation-page">
                <div class="notice notice-success">
                    <h1>{ "Integrity Record Submitted" }</h1>
                    <p>
                        { "Your integrity record has been successfully submitted and is now in \
                           the SAM.gov system." }
                    </p>
                </div>

                <section class="form-section">
                    <h2>{ "Submission Details" }</h2>
                    <div class="review-row">
                        <p class="review-label">{ "Confirmation Number" }</p>
                        <p class="confirmation-number">{ props.confirmation_number.clone() }</p>
                    </div>
                    <div class="review-row">
                        <p class="review-label">{ "Submission Date and Time" }</p>
                        <p class="review-value">{ props.submitted_at.clone() }</p>
                    </div>
                    <div class="review-row">
                        <p class="review-label">{ "Status" }</p>
                        <p class="review-value">{ "Submitted \u{2014} Processing" }</p>
                    </div>
                </section>

                <section class="form-section">
                    <h2>{ "What Happens Next" }</h2>
                    <ol class="next-steps">
                        <li>
                            { "Your record will be reviewed by the SAM.gov integrity team within \
                               3-5 business days." }
                        </li>
                        <li>
                            { "You will receive an email notification when the record is \
                               published or if additional information is needed." }
                        </li>
                        <li>
                            { "You can track the status of your submission in your workspace \
                               dashboard." }
                        </li>
                    </ol>
                </section>

                <section class="panel">
                    <h3 class="panel-heading">{ "Important Information" }</h3>
                    <ul class="info-list">
                        <li>{ "Save your confirmation number for future reference." }</li>
                        <li>
                            { "A copy of this confirmation has been sent to your email address." }
                        </li>
                        <li>
                            { "If you need to make changes, contact SAM.gov support at \
                               1-866-606-8220." }
                        </li>
                    </ul>
                </section>

                <div class="page-actions">
                    <button type="button" class="btn btn-primary" onclick={on_back}>
                        { "Back to Workspace" }
                    </button>
                    <button type="button" class="btn btn-outline" onclick={on_print}>
                        { "Print Confirmation" }
                    </button>
                </div>
            </div>
        }
    }
}
