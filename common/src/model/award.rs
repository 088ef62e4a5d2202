use serde::{Deserialize, Serialize};

/// A contract or grant instrument between a contracting office and a
/// contractor. Supplied from fixture data; the UI never mutates awards
/// except to flip `status` after a completed termination form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub id: String,
    pub award_number: String,
    pub title: String,
    pub contractor_name: String,
    pub uei: String,
    pub award_type: String,
    /// Period-of-performance start, ISO `YYYY-MM-DD`. Kept in ISO form so
    /// chronological ordering is plain string ordering.
    pub pop_start: String,
    /// Period-of-performance end, ISO `YYYY-MM-DD`.
    pub pop_end: String,
    /// Total award value in whole dollars.
    pub value: u64,
    pub status: AwardStatus,
    /// Name of the COR assigned to this award.
    pub assigned_to: String,
    /// Number of integrity records already filed against this award.
    pub integrity_records: u32,
    /// Only some awards require integrity reporting; the dashboard hides
    /// the rest.
    pub needs_integrity_report: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AwardStatus {
    Active,
    Terminated,
}

impl AwardStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AwardStatus::Active => "Active",
            AwardStatus::Terminated => "Terminated",
        }
    }
}
