use integrity_common::model::award::Award;
use integrity_common::model::record::RecordListing;
use integrity_common::model::team::{AccessRequest, CurrentUser, Office, TeamMember};
use yew::prelude::*;

/// Properties for the workspace dashboard. All collections are injected by
/// the shell (seeded from `integrity_common::fixtures`) so the component
/// holds no global data of its own.
#[derive(Properties, PartialEq, Clone)]
pub struct WorkspaceProps {
    pub user: CurrentUser,
    pub awards: Vec<Award>,
    pub records: Vec<RecordListing>,
    pub team: Vec<TeamMember>,
    pub offices: Vec<Office>,
    pub pending_requests: Vec<AccessRequest>,
    pub on_create_record: Callback<()>,
    pub on_view_report: Callback<String>,
    pub on_edit_report: Callback<String>,
    /// Contextual award actions (terminate, share, details) all route
    /// through the shell with the award id.
    pub on_manage_award: Callback<String>,
}
