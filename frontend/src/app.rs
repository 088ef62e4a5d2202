//! Top-level application shell: owns the current page selector, the seed
//! collections and the last submission, and switches between the mutually
//! exclusive page components. Children communicate exclusively through the
//! callbacks wired up here.

use gloo_console::info;
use yew::{html, Component, Context, Html};

use integrity_common::fixtures;
use integrity_common::lookup::EntityDirectory;
use integrity_common::model::award::{Award, AwardStatus};
use integrity_common::model::record::{RecordListing, ReportData};
use integrity_common::model::team::{AccessRequest, CurrentUser, Office, TeamMember};

use crate::components::confirmation::ConfirmationPage;
use crate::components::record_form::{RecordFormComponent, SubmissionOutcome};
use crate::components::report_view::ReportViewPage;
use crate::components::terminate::TerminateContractForm;
use crate::components::workspace::WorkspaceComponent;
use crate::toast::show_toast;

#[derive(Clone, PartialEq)]
pub enum Page {
    Workspace,
    CreateRecord,
    ViewReport(String),
    TerminateContract(String),
    Confirmation,
}

pub enum Msg {
    CreateRecord,
    ViewReport(String),
    EditReport(String),
    ManageAward(String),
    TerminationComplete,
    BackToWorkspace,
    RecordSubmitted(SubmissionOutcome),
    SaveDraft,
}

pub struct App {
    page: Page,
    user: CurrentUser,
    awards: Vec<Award>,
    records: Vec<RecordListing>,
    team: Vec<TeamMember>,
    offices: Vec<Office>,
    pending_requests: Vec<AccessRequest>,
    reports: Vec<ReportData>,
    directory: EntityDirectory,
    /// Result of the most recent submission, shown by the confirmation
    /// page. Kept for the rest of the session.
    submission: Option<SubmissionOutcome>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            page: Page::Workspace,
            user: fixtures::current_user(),
            awards: fixtures::awards(),
            records: fixtures::records(),
            team: fixtures::team(),
            offices: fixtures::offices(),
            pending_requests: fixtures::pending_requests(),
            reports: fixtures::reports(),
            directory: fixtures::entity_directory(),
            submission: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CreateRecord => {
                info!("opening record form");
                self.page = Page::CreateRecord;
                true
            }
            Msg::ViewReport(report_id) => {
                info!("viewing report", report_id.clone());
                self.page = Page::ViewReport(report_id);
                true
            }
            Msg::EditReport(report_id) => {
                // Draft contents are not stored anywhere, so editing a
                // draft opens a fresh form.
                info!("editing draft record", report_id);
                self.page = Page::CreateRecord;
                true
            }
            Msg::ManageAward(award_id) => {
                self.page = Page::TerminateContract(award_id);
                true
            }
            Msg::TerminationComplete => {
                if let Page::TerminateContract(award_id) = self.page.clone() {
                    if let Some(award) =
                        self.awards.iter_mut().find(|award| award.id == award_id)
                    {
                        award.status = AwardStatus::Terminated;
                        info!("terminated award", award.award_number.clone());
                    }
                }
                show_toast("Contract terminated successfully.");
                self.page = Page::Workspace;
                true
            }
            Msg::BackToWorkspace => {
                self.page = Page::Workspace;
                true
            }
            Msg::RecordSubmitted(outcome) => {
                info!("record submitted", outcome.confirmation_number.clone());
                self.submission = Some(outcome);
                self.page = Page::Confirmation;
                true
            }
            Msg::SaveDraft => {
                show_toast("Draft saved successfully.");
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="app-root">
                {
                    match &self.page {
                        Page::Workspace => html! {
                            <WorkspaceComponent
                                user={self.user.clone()}
                                awards={self.awards.clone()}
                                records={self.records.clone()}
                                team={self.team.clone()}
                                offices={self.offices.clone()}
                                pending_requests={self.pending_requests.clone()}
                                on_create_record={link.callback(|_| Msg::CreateRecord)}
                                on_view_report={link.callback(Msg::ViewReport)}
                                on_edit_report={link.callback(Msg::EditReport)}
                                on_manage_award={link.callback(Msg::ManageAward)}
                            />
                        },
                        Page::CreateRecord => html! {
                            <RecordFormComponent
                                user={self.user.clone()}
                                directory={self.directory.clone()}
                                on_submitted={link.callback(Msg::RecordSubmitted)}
                                on_save_draft={link.callback(|_| Msg::SaveDraft)}
                                on_cancel={link.callback(|_| Msg::BackToWorkspace)}
                            />
                        },
                        Page::ViewReport(report_id) => html! {
                            <ReportViewPage
                                report_id={report_id.clone()}
                                reports={self.reports.clone()}
                                on_back={link.callback(|_| Msg::BackToWorkspace)}
                            />
                        },
                        Page::TerminateContract(award_id) => {
                            match self.awards.iter().find(|award| &award.id == award_id) {
                                Some(award) => html! {
                                    <TerminateContractForm
                                        award={award.clone()}
                                        on_back={link.callback(|_| Msg::BackToWorkspace)}
                                        on_complete={link.callback(|_| Msg::TerminationComplete)}
                                    />
                                },
                                None => html! {
                                    <div class="not-found">
                                        <p>{ "Award not found" }</p>
                                        <button
                                            class="btn btn-primary"
                                            onclick={link.callback(|_| Msg::BackToWorkspace)}
                                        >
                                            { "Back to Workspace" }
                                        </button>
                                    </div>
                                },
                            }
                        }
                        Page::Confirmation => match &self.submission {
                            Some(outcome) => html! {
                                <ConfirmationPage
                                    confirmation_number={outcome.confirmation_number.clone()}
                                    submitted_at={outcome.submitted_at.clone()}
                                    on_back={link.callback(|_| Msg::BackToWorkspace)}
                                />
                            },
                            None => html! {},
                        },
                    }
                }
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title("Workspace");
            }
        }
    }
}
