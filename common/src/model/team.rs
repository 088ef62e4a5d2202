use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamRole {
    ContractingOfficer,
    Cor,
    Reviewer,
}

impl TeamRole {
    pub fn label(&self) -> &'static str {
        match self {
            TeamRole::ContractingOfficer => "Contracting Officer",
            TeamRole::Cor => "COR",
            TeamRole::Reviewer => "Reviewer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessLevel {
    AllOfficeContracts,
    AssignedContractsOnly,
}

impl AccessLevel {
    pub fn label(&self) -> &'static str {
        match self {
            AccessLevel::AllOfficeContracts => "All Office Contracts",
            AccessLevel::AssignedContractsOnly => "Assigned Contracts Only",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub office_id: String,
    pub role: TeamRole,
    pub access_level: AccessLevel,
    pub contracts_assigned: u32,
}

/// A contracting office the current user belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Office {
    pub id: String,
    pub name: String,
    pub contract_count: u32,
    pub role: TeamRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Approved,
    Denied,
}

/// An outstanding request for access to another contracting office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessRequest {
    pub id: String,
    pub office_id: String,
    pub office_name: String,
    pub requested_role: TeamRole,
    pub requested_date: String,
    pub status: RequestStatus,
}

/// Identity of the signed-in user, injected into the dashboard and the
/// wizard instead of being read from a global.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    pub email: String,
    pub role: TeamRole,
    pub agency: String,
    pub office: String,
}
