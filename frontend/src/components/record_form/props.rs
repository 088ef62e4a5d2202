use integrity_common::lookup::EntityDirectory;
use integrity_common::model::team::CurrentUser;
use integrity_common::wizard::RecordSnapshot;
use yew::prelude::*;

/// Everything the parent hands back after a confirmed submission.
#[derive(Clone, PartialEq)]
pub struct SubmissionOutcome {
    pub snapshot: RecordSnapshot,
    pub confirmation_number: String,
    pub submitted_at: String,
}

/// Properties for the record form wizard. The entity directory and the
/// current user are injected so tests and the shell can swap fixtures.
#[derive(Properties, PartialEq, Clone)]
pub struct RecordFormProps {
    pub user: CurrentUser,
    pub directory: EntityDirectory,
    /// Fired exactly once, after a certified submission.
    pub on_submitted: Callback<SubmissionOutcome>,
    pub on_save_draft: Callback<()>,
    pub on_cancel: Callback<()>,
}
