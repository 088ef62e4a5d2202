//! Pure derivations behind the workspace dashboard: my-vs-office award
//! views, status filtering, sorting and the filter-tab counts.

use crate::model::award::{Award, AwardStatus};
use crate::model::record::RecordListing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Active,
    Terminated,
}

impl StatusFilter {
    pub fn matches(&self, status: AwardStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == AwardStatus::Active,
            StatusFilter::Terminated => status == AwardStatus::Terminated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    DateLatest,
    DateOldest,
    TitleAz,
    TitleZa,
}

impl SortKey {
    /// Tag used as the `<option>` value in the sort dropdown.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::DateLatest => "date-latest",
            SortKey::DateOldest => "date-oldest",
            SortKey::TitleAz => "title-az",
            SortKey::TitleZa => "title-za",
        }
    }

    pub fn parse(tag: &str) -> Option<SortKey> {
        match tag {
            "date-latest" => Some(SortKey::DateLatest),
            "date-oldest" => Some(SortKey::DateOldest),
            "title-az" => Some(SortKey::TitleAz),
            "title-za" => Some(SortKey::TitleZa),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::DateLatest => "Date: Latest",
            SortKey::DateOldest => "Date: Oldest",
            SortKey::TitleAz => "Title: A-Z",
            SortKey::TitleZa => "Title: Z-A",
        }
    }
}

/// Counts backing the All/Active/Terminated filter tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub all: usize,
    pub active: usize,
    pub terminated: usize,
}

/// Awards assigned to the given user that require integrity reporting.
pub fn my_awards(awards: &[Award], user: &str) -> Vec<Award> {
    awards
        .iter()
        .filter(|award| award.assigned_to == user && award.needs_integrity_report)
        .cloned()
        .collect()
}

/// All awards in the office that require integrity reporting.
pub fn office_awards(awards: &[Award]) -> Vec<Award> {
    awards
        .iter()
        .filter(|award| award.needs_integrity_report)
        .cloned()
        .collect()
}

pub fn status_counts(awards: &[Award]) -> StatusCounts {
    StatusCounts {
        all: awards.len(),
        active: awards.iter().filter(|a| a.status == AwardStatus::Active).count(),
        terminated: awards
            .iter()
            .filter(|a| a.status == AwardStatus::Terminated)
            .count(),
    }
}

/// Applies the status filter, then orders by the sort key. Period starts
/// are ISO dates, so date ordering is string ordering.
pub fn arrange(awards: &[Award], filter: StatusFilter, sort: SortKey) -> Vec<Award> {
    let mut shown: Vec<Award> = awards
        .iter()
        .filter(|award| filter.matches(award.status))
        .cloned()
        .collect();
    match sort {
        SortKey::DateLatest => shown.sort_by(|a, b| b.pop_start.cmp(&a.pop_start)),
        SortKey::DateOldest => shown.sort_by(|a, b| a.pop_start.cmp(&b.pop_start)),
        SortKey::TitleAz => shown.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::TitleZa => shown.sort_by(|a, b| b.title.cmp(&a.title)),
    }
    shown
}

/// Records created by the given user, for the dashboard's records table.
pub fn records_created_by(records: &[RecordListing], user: &str) -> Vec<RecordListing> {
    records
        .iter()
        .filter(|record| record.created_by == user)
        .cloned()
        .collect()
}
