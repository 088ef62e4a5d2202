//! Read-only report viewer. Resolves the requested report id against the
//! injected store; an unknown id renders the not-found display whose only
//! recovery action returns to the workspace.

use yew::{html, Callback, Component, Context, Html, Properties};

use integrity_common::model::record::{report_by_id, ReportData};

use crate::components::uswds::record_status_badge;

#[derive(Properties, PartialEq, Clone)]
pub struct ReportViewProps {
    pub report_id: String,
    pub reports: Vec<ReportData>,
    pub on_back: Callback<()>,
}

pub struct ReportViewPage;

impl Component for ReportViewPage {
    type Message = ();
    type Properties = ReportViewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ReportViewPage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        match report_by_id(&props.reports, &props.report_id) {
            Some(report) => report_view(report, &props.on_back),
            None => not_found(&props.on_back),
        }
    }
}

fn not_found(on_back: &Callback<()>) -> Html {
    let on_back = {
        let on_back = on_back.clone();
        Callback::from(move |_: web_sys::MouseEvent| on_back.emit(()))
    };
    html! {
        <div class="not-found">
            <p class="text-muted">{ "Report not found" }</p>
            <button type="button" class="btn btn-primary" onclick={on_back}>
                { "Back to Workspace" }
            </button>
        </div>
    }
}

fn report_view(report: &ReportData, on_back: &Callback<()>) -> Html {
    let back = {
        let on_back = on_back.clone();
        Callback::from(move |_: web_sys::MouseEvent| on_back.emit(()))
    };
    let on_print = Callback::from(|_: web_sys::MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    });
    html! {
        <div class="report-view">
            <header class="report-header">
                <div>
                    <h1>{ "Integrity Record Details" }</h1>
                    <p class="text-muted">{ "Read-Only View" }</p>
                </div>
                <button type="button" class="btn-link" onclick={back.clone()}>
                    { "\u{2190} Back to Workspace" }
                </button>
            </header>

            <div class="page">
                <div class="status-banner">
                    <div>
                        <div class="status-banner-title">
                            { record_status_badge(report.status) }
                            <span class="confirmation-number">
                                { report.confirmation_number.clone() }
                            </span>
                        </div>
                        <p class="text-muted">
                            { format!("Submitted on {}", report.submitted_date) }
                        </p>
                    </div>
                    <button type="button" class="btn btn-outline" onclick={on_print}>
                        { "Print Record" }
                    </button>
                </div>

                <section class="form-section">
                    <h2>{ "Section 1: Record Type" }</h2>
                    { field("Integrity Record Type", report.record_type.label().to_string()) }
                </section>

                <section class="form-section">
                    <h2>{ "Section 2: Award Information" }</h2>
                    <div class="entity-card entity-card-muted">
                        <h3 class="panel-heading">{ "Entity Summary" }</h3>
                        { field("Legal Business Name", report.entity.legal_name.clone()) }
                        { field("UEI", report.entity.uei.clone()) }
                        { field("CAGE Code", report.entity.cage.clone()) }
                        { field("Physical Address", report.entity.address.clone()) }
                    </div>
                    { field("Award Number", report.award_number.clone()) }
                    { field("Solicitation Number", report.solicitation.clone()) }
                </section>

                <section class="form-section">
                    <h2>{ "Section 3: Integrity Record Details" }</h2>
                    {
                        for report.details.entries().into_iter().map(|(label, value)| {
                            field(label, value)
                        })
                    }
                </section>

                <section class="form-section">
                    <h2>{ "Section 4: Supporting Documents" }</h2>
                    {
                        for report.documents.iter().map(|document| html! {
                            <div class="file-row">
                                <div>
                                    <p class="file-name">{ document.name.clone() }</p>
                                    <p class="field-hint">
                                        { format!("Uploaded {}", document.uploaded) }
                                    </p>
                                </div>
                                <button type="button" class="btn-link">{ "Download" }</button>
                            </div>
                        })
                    }
                </section>

                <section class="form-section">
                    <h2>{ "Submission Information" }</h2>
                    { field("Submitted By", report.submitted_by.clone()) }
                    { field("Submission Date", report.submitted_date.clone()) }
                    { field("Agency", report.agency.clone()) }
                    { field("Contracting Office", report.office.clone()) }
                </section>

                <section class="form-section">
                    <h2>{ "Audit Trail" }</h2>
                    {
                        for report.audit_trail.iter().enumerate().map(|(index, entry)| html! {
                            <div class="audit-row">
                                <span class="audit-step">{ index + 1 }</span>
                                <div>
                                    <p class="form-label">{ entry.action.clone() }</p>
                                    <p class="field-hint">
                                        { format!("{} by {}", entry.date, entry.user) }
                                    </p>
                                </div>
                            </div>
                        })
                    }
                </section>

                <div class="page-actions">
                    <button type="button" class="btn btn-primary" onclick={back}>
                        { "Back to Workspace" }
                    </button>
                </div>
            </div>
        </div>
    }
}

fn field(label: &'static str, value: String) -> Html {
    html! {
        <div class="review-row">
            <p class="review-label">{ label }</p>
            <p class="review-value">{ value }</p>
        </div>
    }
}
