use serde::{Deserialize, Serialize};

use crate::details::RecordDetails;
use crate::model::entity::EntitySummary;
use crate::record_type::RecordType;

/// Workflow status of an integrity record. Listings use `Draft` through
/// `Returned`; the read-only report view additionally shows `Submitted`
/// for records that have not yet entered review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    Draft,
    Submitted,
    UnderReview,
    Published,
    Returned,
}

impl RecordStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::Draft => "Draft",
            RecordStatus::Submitted => "Submitted",
            RecordStatus::UnderReview => "Under Review",
            RecordStatus::Published => "Published",
            RecordStatus::Returned => "Returned",
        }
    }
}

/// One row of the dashboard's integrity-record table. What a persistence
/// layer would own; here it is fixture data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordListing {
    pub id: String,
    pub document_number: String,
    /// Display label of the record type (listings carry labels, not tags,
    /// because historic records can predate the current catalog).
    pub record_type: String,
    pub award_number: String,
    pub contractor_name: String,
    pub status: RecordStatus,
    pub assigned_to: String,
    pub created: String,
    pub last_modified: String,
    pub created_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub name: String,
    pub uploaded: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub action: String,
    pub date: String,
    pub user: String,
}

/// Full contents of a submitted report, as shown by the read-only viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub id: String,
    pub confirmation_number: String,
    pub record_type: RecordType,
    pub entity: EntitySummary,
    pub award_number: String,
    pub solicitation: String,
    pub submitted_date: String,
    pub status: RecordStatus,
    pub submitted_by: String,
    pub agency: String,
    pub office: String,
    pub details: RecordDetails,
    pub documents: Vec<ReportDocument>,
    pub audit_trail: Vec<AuditEntry>,
}

/// Looks a report up by id. A miss is the viewer's not-found display.
pub fn report_by_id<'a>(reports: &'a [ReportData], id: &str) -> Option<&'a ReportData> {
    reports.iter().find(|report| report.id == id)
}
