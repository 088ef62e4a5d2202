//! Seed data for the workspace. Everything the UI shows comes from these
//! constructors; components receive the collections through props so tests
//! can substitute their own.

use crate::details::RecordDetails;
use crate::lookup::{DirectoryAward, EntityDirectory};
use crate::model::award::{Award, AwardStatus};
use crate::model::entity::{AwardLifecycle, EntitySummary};
use crate::model::record::{
    AuditEntry, RecordListing, RecordStatus, ReportData, ReportDocument,
};
use crate::model::team::{
    AccessLevel, AccessRequest, CurrentUser, Office, RequestStatus, TeamMember, TeamRole,
};
use crate::record_type::RecordType;

pub fn current_user() -> CurrentUser {
    CurrentUser {
        name: "John Smith".to_string(),
        email: "john.smith@dcma.mil".to_string(),
        role: TeamRole::Cor,
        agency: "Department of Defense".to_string(),
        office: "Defense Contract Management Agency".to_string(),
    }
}

pub fn offices() -> Vec<Office> {
    vec![
        Office {
            id: "DCMA-2024".to_string(),
            name: "Defense Contract Management Agency".to_string(),
            contract_count: 5,
            role: TeamRole::Cor,
        },
        Office {
            id: "NAVSUP-1142".to_string(),
            name: "Naval Supply Systems Command".to_string(),
            contract_count: 3,
            role: TeamRole::Cor,
        },
        Office {
            id: "GSA-9876".to_string(),
            name: "General Services Administration".to_string(),
            contract_count: 0,
            role: TeamRole::Reviewer,
        },
    ]
}

pub fn pending_requests() -> Vec<AccessRequest> {
    vec![
        AccessRequest {
            id: "req-001".to_string(),
            office_id: "DLA-5432".to_string(),
            office_name: "Defense Logistics Agency".to_string(),
            requested_role: TeamRole::Cor,
            requested_date: "2025-02-12".to_string(),
            status: RequestStatus::Pending,
        },
        AccessRequest {
            id: "req-002".to_string(),
            office_id: "AFSPC-8899".to_string(),
            office_name: "Air Force Space Command".to_string(),
            requested_role: TeamRole::Reviewer,
            requested_date: "2025-02-10".to_string(),
            status: RequestStatus::Pending,
        },
    ]
}

/// Five office awards: three active, two terminated; four assigned to the
/// seed user and one (which also needs no reporting) to a colleague.
pub fn awards() -> Vec<Award> {
    vec![
        Award {
            id: "1".to_string(),
            award_number: "W912DY23C0001".to_string(),
            title: "Base Construction Services".to_string(),
            contractor_name: "Acme Construction LLC".to_string(),
            uei: "JF4K8ZTN1234".to_string(),
            award_type: "Fixed Price".to_string(),
            pop_start: "2023-03-01".to_string(),
            pop_end: "2025-03-01".to_string(),
            value: 2_450_000,
            status: AwardStatus::Active,
            assigned_to: "John Smith".to_string(),
            integrity_records: 2,
            needs_integrity_report: true,
        },
        Award {
            id: "2".to_string(),
            award_number: "N00024-23-C-4321".to_string(),
            title: "IT Support Services".to_string(),
            contractor_name: "Global Services Inc".to_string(),
            uei: "ABC123DEF456".to_string(),
            award_type: "Cost Plus".to_string(),
            pop_start: "2023-01-01".to_string(),
            pop_end: "2024-12-01".to_string(),
            value: 890_000,
            status: AwardStatus::Active,
            assigned_to: "John Smith".to_string(),
            integrity_records: 1,
            needs_integrity_report: true,
        },
        Award {
            id: "3".to_string(),
            award_number: "W912DY22C0089".to_string(),
            title: "Infrastructure Repair".to_string(),
            contractor_name: "Acme Construction LLC".to_string(),
            uei: "JF4K8ZTN1234".to_string(),
            award_type: "Cost Plus".to_string(),
            pop_start: "2022-01-01".to_string(),
            pop_end: "2023-12-01".to_string(),
            value: 1_800_000,
            status: AwardStatus::Terminated,
            assigned_to: "John Smith".to_string(),
            integrity_records: 1,
            needs_integrity_report: true,
        },
        Award {
            id: "4".to_string(),
            award_number: "FA8621-22-C-9876".to_string(),
            title: "Engineering Support".to_string(),
            contractor_name: "TechCorp Solutions".to_string(),
            uei: "XYZ789GHI012".to_string(),
            award_type: "Time & Materials".to_string(),
            pop_start: "2022-06-01".to_string(),
            pop_end: "2024-06-01".to_string(),
            value: 1_250_000,
            status: AwardStatus::Terminated,
            assigned_to: "John Smith".to_string(),
            integrity_records: 1,
            needs_integrity_report: true,
        },
        Award {
            id: "5".to_string(),
            award_number: "GS-35F-0119Y".to_string(),
            title: "Facility Maintenance".to_string(),
            contractor_name: "ProService Corp".to_string(),
            uei: "DEF456GHI789".to_string(),
            award_type: "Fixed Price".to_string(),
            pop_start: "2023-09-01".to_string(),
            pop_end: "2025-09-01".to_string(),
            value: 675_000,
            status: AwardStatus::Active,
            assigned_to: "Sarah Johnson".to_string(),
            integrity_records: 0,
            needs_integrity_report: false,
        },
    ]
}

pub fn records() -> Vec<RecordListing> {
    vec![
        RecordListing {
            id: "draft-1".to_string(),
            document_number: "DRAFT-2025-001".to_string(),
            record_type: "Performance Issue".to_string(),
            award_number: "N00024-23-C-4321".to_string(),
            contractor_name: "Global Services Inc".to_string(),
            status: RecordStatus::Draft,
            assigned_to: "John Smith".to_string(),
            created: "2025-02-15".to_string(),
            last_modified: "2025-02-17".to_string(),
            created_by: "John Smith".to_string(),
        },
        RecordListing {
            id: "1".to_string(),
            document_number: "NEWPSC24C0011".to_string(),
            record_type: "Administrative Agreement".to_string(),
            award_number: "W912DY23C0001".to_string(),
            contractor_name: "Acme Construction LLC".to_string(),
            status: RecordStatus::Published,
            assigned_to: "John Smith".to_string(),
            created: "2024-01-15".to_string(),
            last_modified: "2024-01-20".to_string(),
            created_by: "John Smith".to_string(),
        },
        RecordListing {
            id: "2".to_string(),
            document_number: "NEWPSC24C0012".to_string(),
            record_type: "Material Failure to Comply".to_string(),
            award_number: "N00024-23-C-4321".to_string(),
            contractor_name: "Global Services Inc".to_string(),
            status: RecordStatus::UnderReview,
            assigned_to: "John Smith".to_string(),
            created: "2024-03-20".to_string(),
            last_modified: "2024-03-25".to_string(),
            created_by: "John Smith".to_string(),
        },
        RecordListing {
            id: "rec-4".to_string(),
            document_number: "NEWPSC22C0089".to_string(),
            record_type: "Termination for Cause".to_string(),
            award_number: "W912DY22C0089".to_string(),
            contractor_name: "Acme Construction LLC".to_string(),
            status: RecordStatus::Published,
            assigned_to: "John Smith".to_string(),
            created: "2023-12-10".to_string(),
            last_modified: "2023-12-15".to_string(),
            created_by: "John Smith".to_string(),
        },
    ]
}

pub fn team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: "1".to_string(),
            name: "John Smith".to_string(),
            email: "john.smith@dcma.mil".to_string(),
            office_id: "DCMA-2024".to_string(),
            role: TeamRole::Cor,
            access_level: AccessLevel::AssignedContractsOnly,
            contracts_assigned: 4,
        },
        TeamMember {
            id: "2".to_string(),
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@dcma.mil".to_string(),
            office_id: "DCMA-2024".to_string(),
            role: TeamRole::Cor,
            access_level: AccessLevel::AssignedContractsOnly,
            contracts_assigned: 1,
        },
        TeamMember {
            id: "3".to_string(),
            name: "Michael Chen".to_string(),
            email: "michael.chen@dcma.mil".to_string(),
            office_id: "DCMA-2024".to_string(),
            role: TeamRole::ContractingOfficer,
            access_level: AccessLevel::AllOfficeContracts,
            contracts_assigned: 5,
        },
    ]
}

/// Directory entry behind the wizard's entity lookup. Every UEI resolves to
/// the same contractor with three historical awards, mirroring the mock
/// SAM.gov response.
pub fn entity_directory() -> EntityDirectory {
    EntityDirectory {
        legal_name: "Acme Defense Contractors LLC".to_string(),
        address: "1234 Contract Way, Arlington, VA 22202".to_string(),
        cage: "6TL95".to_string(),
        awards: vec![
            DirectoryAward {
                award_id: "W912DY-19-C-0045".to_string(),
                status: AwardLifecycle::Terminated,
            },
            DirectoryAward {
                award_id: "W912DY-21-C-0112".to_string(),
                status: AwardLifecycle::Completed,
            },
            DirectoryAward {
                award_id: "W912DY-23-C-0089".to_string(),
                status: AwardLifecycle::Active,
            },
        ],
    }
}

/// The two fully published reports the read-only viewer can display.
pub fn reports() -> Vec<ReportData> {
    vec![
        ReportData {
            id: "1".to_string(),
            confirmation_number: "IR-20240001".to_string(),
            record_type: RecordType::AdministrativeAgreement,
            entity: EntitySummary {
                legal_name: "Acme Construction LLC".to_string(),
                address: "1234 Construction Way, Arlington, VA 22201".to_string(),
                uei: "JF4K8ZTN1234".to_string(),
                cage: "CAGE123".to_string(),
                award_id: Some("W912DY23C0001".to_string()),
                award_status: Some(AwardLifecycle::Active),
            },
            award_number: "W912DY23C0001".to_string(),
            solicitation: "W912DY23R0001".to_string(),
            submitted_date: "2024-02-15 10:30".to_string(),
            status: RecordStatus::Published,
            submitted_by: "john.smith@dod.gov".to_string(),
            agency: "Department of Defense".to_string(),
            office: "Defense Contract Management Agency".to_string(),
            details: RecordDetails::AdministrativeAgreement {
                effective_date: "2024-01-15".to_string(),
                expiration_date: "2026-01-15".to_string(),
                terms: "The contractor agreed to implement corrective actions including \
                        enhanced inspector training and revised quality control plans. This \
                        agreement remains in effect for 24 months during which the contractor \
                        must demonstrate consistent compliance with all quality requirements."
                    .to_string(),
                circumstances: "Administrative agreement entered into due to failure to comply \
                                with contract quality assurance requirements on Contract \
                                W912DY23C0001. The contractor acknowledged deficiencies in \
                                quality control procedures."
                    .to_string(),
            },
            documents: vec![
                ReportDocument {
                    name: "administrative-agreement-signed.pdf".to_string(),
                    uploaded: "2024-02-14".to_string(),
                },
                ReportDocument {
                    name: "supporting-documentation.pdf".to_string(),
                    uploaded: "2024-02-14".to_string(),
                },
            ],
            audit_trail: vec![
                AuditEntry {
                    action: "Record Created".to_string(),
                    date: "2024-02-14 09:15".to_string(),
                    user: "john.smith@dod.gov".to_string(),
                },
                AuditEntry {
                    action: "Record Submitted".to_string(),
                    date: "2024-02-15 10:30".to_string(),
                    user: "john.smith@dod.gov".to_string(),
                },
                AuditEntry {
                    action: "Under Review".to_string(),
                    date: "2024-02-15 14:20".to_string(),
                    user: "sam.gov.system".to_string(),
                },
                AuditEntry {
                    action: "Approved and Published".to_string(),
                    date: "2024-02-18 11:45".to_string(),
                    user: "reviewer@sam.gov".to_string(),
                },
            ],
        },
        ReportData {
            id: "2".to_string(),
            confirmation_number: "IR-20240002".to_string(),
            record_type: RecordType::MaterialFailure,
            entity: EntitySummary {
                legal_name: "Global Services Inc".to_string(),
                address: "5678 Service Boulevard, San Diego, CA 92101".to_string(),
                uei: "ABC123DEF456".to_string(),
                cage: "CAGE456".to_string(),
                award_id: Some("N00024-23-C-4321".to_string()),
                award_status: Some(AwardLifecycle::Active),
            },
            award_number: "N00024-23-C-4321".to_string(),
            solicitation: "N00024-23-R-4321".to_string(),
            submitted_date: "2024-02-14 14:22".to_string(),
            status: RecordStatus::UnderReview,
            submitted_by: "jane.doe@navy.mil".to_string(),
            agency: "Department of the Navy".to_string(),
            office: "Naval Supply Systems Command".to_string(),
            details: RecordDetails::MaterialFailure {
                closeout_date: "2023-12-01".to_string(),
                failure_date: "2023-11-28".to_string(),
                requirement_type: "final-deliverables".to_string(),
                description: "The contractor materially failed to comply with delivery \
                              schedule requirements specified in Contract N00024-23-C-4321, \
                              resulting in a 45-day delay of critical supplies. Despite \
                              multiple cure notices, the contractor failed to take adequate \
                              corrective action. The delay caused operational impact and \
                              required emergency procurement from alternate sources at \
                              increased cost to the government."
                    .to_string(),
            },
            documents: vec![
                ReportDocument {
                    name: "cure-notice-1.pdf".to_string(),
                    uploaded: "2024-02-13".to_string(),
                },
                ReportDocument {
                    name: "cure-notice-2.pdf".to_string(),
                    uploaded: "2024-02-13".to_string(),
                },
                ReportDocument {
                    name: "contractor-response.pdf".to_string(),
                    uploaded: "2024-02-13".to_string(),
                },
            ],
            audit_trail: vec![
                AuditEntry {
                    action: "Record Created".to_string(),
                    date: "2024-02-13 16:30".to_string(),
                    user: "jane.doe@navy.mil".to_string(),
                },
                AuditEntry {
                    action: "Record Submitted".to_string(),
                    date: "2024-02-14 14:22".to_string(),
                    user: "jane.doe@navy.mil".to_string(),
                },
                AuditEntry {
                    action: "Under Review".to_string(),
                    date: "2024-02-14 15:10".to_string(),
                    user: "sam.gov.system".to_string(),
                },
            ],
        },
    ]
}
