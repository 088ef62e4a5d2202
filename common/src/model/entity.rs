use serde::{Deserialize, Serialize};

/// Lifecycle of an award as reported by the entity lookup. Broader than
/// `AwardStatus` because historical awards in the lookup results can be
/// completed rather than terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AwardLifecycle {
    Active,
    Terminated,
    Completed,
}

impl AwardLifecycle {
    pub fn label(&self) -> &'static str {
        match self {
            AwardLifecycle::Active => "Active",
            AwardLifecycle::Terminated => "Terminated",
            AwardLifecycle::Completed => "Completed",
        }
    }
}

/// Result of the entity/award lookup, consumed by the wizard and the
/// review screen. Exists only for the duration of one wizard session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySummary {
    pub legal_name: String,
    pub address: String,
    pub uei: String,
    pub cage: String,
    /// Present when the lookup resolved to a specific award.
    pub award_id: Option<String>,
    pub award_status: Option<AwardLifecycle>,
}
