//! Catalog of the eight integrity-record types: identifier tags, display
//! labels, the explanatory text shown beside each radio option, and the
//! exact field set each type requires in the wizard's details section.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordType {
    AdministrativeAgreement,
    DefectivePricing,
    DodDetermination,
    Trafficking,
    MaterialFailure,
    NonResponsibility,
    RecipientNotQualified,
    SubcontractorPayment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Date,
    /// Free-text dollar amount, e.g. "$50,000".
    CurrencyText,
    Integer,
    /// Multi-line narrative.
    Text,
    Select(&'static [SelectOption]),
}

/// One labeled input of a record type's details section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Stable key used to read/write the matching `RecordDetails` field.
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
}

const FAULT_TYPES: &[SelectOption] = &[
    SelectOption { value: "cost-overrun", label: "Cost Overrun or Schedule Delay" },
    SelectOption { value: "quality-deficiency", label: "Quality Deficiency" },
    SelectOption { value: "performance-failure", label: "Performance Failure" },
    SelectOption { value: "other", label: "Other Contractor Fault" },
];

const INVESTIGATION_STATUSES: &[SelectOption] = &[
    SelectOption { value: "ongoing", label: "Investigation Ongoing" },
    SelectOption { value: "completed", label: "Investigation Completed" },
    SelectOption { value: "referred", label: "Referred to Law Enforcement" },
    SelectOption { value: "substantiated", label: "Substantiated" },
];

const CLOSEOUT_REQUIREMENTS: &[SelectOption] = &[
    SelectOption { value: "financial-reporting", label: "Final Financial Reporting" },
    SelectOption { value: "property-disposition", label: "Property Disposition" },
    SelectOption { value: "patent-reporting", label: "Patent/Invention Reporting" },
    SelectOption { value: "final-deliverables", label: "Final Deliverables" },
    SelectOption { value: "closeout-documentation", label: "Closeout Documentation" },
    SelectOption { value: "other", label: "Other Requirement" },
];

const NON_RESPONSIBILITY_BASES: &[SelectOption] = &[
    SelectOption { value: "financial", label: "Lack of Financial Resources" },
    SelectOption { value: "technical", label: "Lack of Technical Qualification" },
    SelectOption { value: "integrity", label: "Lack of Integrity/Business Ethics" },
    SelectOption { value: "performance", label: "Unsatisfactory Performance Record" },
    SelectOption { value: "capability", label: "Lack of Necessary Organization/Equipment" },
    SelectOption { value: "other", label: "Other Basis" },
];

const DISQUALIFICATION_REASONS: &[SelectOption] = &[
    SelectOption { value: "mismanagement", label: "History of Mismanaging Grant Funds" },
    SelectOption { value: "non-compliance", label: "Failure to Comply with Reporting Requirements" },
    SelectOption { value: "fraud", label: "Evidence of Fraud or Abuse" },
    SelectOption { value: "performance", label: "Poor Performance on Previous Awards" },
    SelectOption { value: "suspension", label: "Suspension or Debarment Action" },
    SelectOption { value: "other", label: "Other Disqualifying Factor" },
];

impl RecordType {
    pub const ALL: [RecordType; 8] = [
        RecordType::AdministrativeAgreement,
        RecordType::DefectivePricing,
        RecordType::DodDetermination,
        RecordType::Trafficking,
        RecordType::MaterialFailure,
        RecordType::NonResponsibility,
        RecordType::RecipientNotQualified,
        RecordType::SubcontractorPayment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::AdministrativeAgreement => "administrative-agreement",
            RecordType::DefectivePricing => "defective-pricing",
            RecordType::DodDetermination => "dod-determination",
            RecordType::Trafficking => "trafficking",
            RecordType::MaterialFailure => "material-failure",
            RecordType::NonResponsibility => "non-responsibility",
            RecordType::RecipientNotQualified => "recipient-not-qualified",
            RecordType::SubcontractorPayment => "subcontractor-payment",
        }
    }

    pub fn parse(tag: &str) -> Option<RecordType> {
        RecordType::ALL.iter().copied().find(|rt| rt.as_str() == tag)
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordType::AdministrativeAgreement => "Administrative Agreement",
            RecordType::DefectivePricing => "Defective Pricing",
            RecordType::DodDetermination => "DoD Determination of Contractor Fault",
            RecordType::Trafficking => "Information on Trafficking in Persons",
            RecordType::MaterialFailure => {
                "Material Failure to Comply with Closeout Requirements"
            }
            RecordType::NonResponsibility => "Non-Responsibility Determination",
            RecordType::RecipientNotQualified => "Recipient Not-Qualified Determination",
            RecordType::SubcontractorPayment => "Subcontractor Payment Issues",
        }
    }

    /// The explanatory paragraph rendered under the record-type radio option.
    pub fn description(&self) -> &'static str {
        match self {
            RecordType::AdministrativeAgreement => {
                "Formal agreement between a government agency and a contractor, often used as an \
                 alternative to suspension or debarment, outlining specific actions to address \
                 issues and ensure future compliance. Reporting timeframe: Within 3 working days."
            }
            RecordType::DefectivePricing => {
                "Contractor submitted cost or pricing data that was not accurate, complete, or \
                 current during contract negotiations, resulting in overstated contract price. \
                 Often results from audits or investigations. Reporting timeframe: Within 3 \
                 calendar days."
            }
            RecordType::DodDetermination => {
                "Formal determination by the Department of Defense that a contractor was at fault \
                 for a specific issue related to product quality, safety, or other aspects of \
                 contract performance. Reporting timeframe: Within 3 days."
            }
            RecordType::Trafficking => {
                "Violations related to the prohibition of trafficking in persons, as outlined in \
                 the FAR. Example: Contractor subjected employees to forced labor conditions. \
                 Reporting timeframe: Within 3 calendar days."
            }
            RecordType::MaterialFailure => {
                "Recipient has not followed the regulatory requirements for closing out a grant \
                 (e.g., failed to submit final financial or performance reports)."
            }
            RecordType::NonResponsibility => {
                "Determination that a vendor is not qualified to receive a contract award due to \
                 past performance, integrity issues, or other factors. Reporting timeframe: \
                 Within 3 working days."
            }
            RecordType::RecipientNotQualified => {
                "Determination that a grant recipient is not qualified to receive a grant award \
                 due to past performance, integrity issues, or other factors (e.g., history of \
                 mismanaging grant funds or failing to comply with reporting requirements)."
            }
            RecordType::SubcontractorPayment => {
                "Three or more unjustified reduced or untimely payments to small business \
                 subcontractors under a single contract within 12 months. Reporting timeframe: \
                 Within 3 calendar days."
            }
        }
    }

    /// Ordered field set of the details section for this record type.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            RecordType::AdministrativeAgreement => &[
                FieldSpec {
                    key: "effective_date",
                    label: "Effective Date",
                    kind: FieldKind::Date,
                    placeholder: "",
                },
                FieldSpec {
                    key: "expiration_date",
                    label: "Expiration Date",
                    kind: FieldKind::Date,
                    placeholder: "",
                },
                FieldSpec {
                    key: "terms",
                    label: "Terms of Agreement",
                    kind: FieldKind::Text,
                    placeholder: "Describe the specific terms, conditions, and obligations of \
                                  this administrative agreement",
                },
                FieldSpec {
                    key: "circumstances",
                    label: "Circumstances Leading to Agreement",
                    kind: FieldKind::Text,
                    placeholder: "Explain the circumstances or violations that led to this \
                                  administrative agreement",
                },
            ],
            RecordType::DefectivePricing => &[
                FieldSpec {
                    key: "discovery_date",
                    label: "Date of Discovery",
                    kind: FieldKind::Date,
                    placeholder: "",
                },
                FieldSpec {
                    key: "amount",
                    label: "Amount of Defective Pricing",
                    kind: FieldKind::CurrencyText,
                    placeholder: "$0.00",
                },
                FieldSpec {
                    key: "description",
                    label: "Description of Pricing Defect",
                    kind: FieldKind::Text,
                    placeholder: "Describe the nature of the defective pricing (e.g., failure to \
                                  disclose cost or pricing data, inaccurate certified cost data)",
                },
                FieldSpec {
                    key: "price_impact",
                    label: "Impact on Contract Price",
                    kind: FieldKind::Text,
                    placeholder: "Explain how the defective pricing affected the contract price \
                                  and what adjustments were made",
                },
            ],
            RecordType::DodDetermination => &[
                FieldSpec {
                    key: "determination_date",
                    label: "Determination Date",
                    kind: FieldKind::Date,
                    placeholder: "",
                },
                FieldSpec {
                    key: "fault_type",
                    label: "Type of Contractor Fault",
                    kind: FieldKind::Select(FAULT_TYPES),
                    placeholder: "Select fault type",
                },
                FieldSpec {
                    key: "description",
                    label: "Description of Contractor Fault",
                    kind: FieldKind::Text,
                    placeholder: "Provide detailed description of the contractor fault \
                                  determination and its impact on the program",
                },
                FieldSpec {
                    key: "financial_impact",
                    label: "Financial Impact (if applicable)",
                    kind: FieldKind::CurrencyText,
                    placeholder: "$0.00",
                },
            ],
            RecordType::Trafficking => &[
                FieldSpec {
                    key: "violation_date",
                    label: "Date of Violation/Discovery",
                    kind: FieldKind::Date,
                    placeholder: "",
                },
                FieldSpec {
                    key: "investigation_status",
                    label: "Investigation Status",
                    kind: FieldKind::Select(INVESTIGATION_STATUSES),
                    placeholder: "Select investigation status",
                },
                FieldSpec {
                    key: "description",
                    label: "Description of Trafficking Violation",
                    kind: FieldKind::Text,
                    placeholder: "Describe the trafficking in persons violation, including the \
                                  nature of the violation and any victims involved",
                },
                FieldSpec {
                    key: "corrective_actions",
                    label: "Corrective Actions Taken",
                    kind: FieldKind::Text,
                    placeholder: "Describe any corrective actions taken or remedial measures \
                                  implemented",
                },
            ],
            RecordType::MaterialFailure => &[
                FieldSpec {
                    key: "closeout_date",
                    label: "Closeout Date",
                    kind: FieldKind::Date,
                    placeholder: "",
                },
                FieldSpec {
                    key: "failure_date",
                    label: "Date of Failure Determination",
                    kind: FieldKind::Date,
                    placeholder: "",
                },
                FieldSpec {
                    key: "requirement_type",
                    label: "Type of Closeout Requirement Not Met",
                    kind: FieldKind::Select(CLOSEOUT_REQUIREMENTS),
                    placeholder: "Select requirement type",
                },
                FieldSpec {
                    key: "description",
                    label: "Description of Material Failure",
                    kind: FieldKind::Text,
                    placeholder: "Describe the specific closeout requirement(s) not met and why \
                                  this constitutes a material failure",
                },
            ],
            RecordType::NonResponsibility => &[
                FieldSpec {
                    key: "determination_date",
                    label: "Determination Date",
                    kind: FieldKind::Date,
                    placeholder: "",
                },
                FieldSpec {
                    key: "basis",
                    label: "Basis for Non-Responsibility",
                    kind: FieldKind::Select(NON_RESPONSIBILITY_BASES),
                    placeholder: "Select basis",
                },
                FieldSpec {
                    key: "description",
                    label: "Detailed Basis for Non-Responsibility Determination",
                    kind: FieldKind::Text,
                    placeholder: "Provide detailed explanation of why the contractor was \
                                  determined to be non-responsible, including specific evidence \
                                  and circumstances",
                },
                FieldSpec {
                    key: "evidence",
                    label: "Supporting Evidence/Documentation",
                    kind: FieldKind::Text,
                    placeholder: "Describe any supporting evidence, investigations, or \
                                  documentation that supports this determination",
                },
            ],
            RecordType::RecipientNotQualified => &[
                FieldSpec {
                    key: "determination_date",
                    label: "Determination Date",
                    kind: FieldKind::Date,
                    placeholder: "",
                },
                FieldSpec {
                    key: "reason",
                    label: "Reason for Not Qualified Finding",
                    kind: FieldKind::Select(DISQUALIFICATION_REASONS),
                    placeholder: "Select reason",
                },
                FieldSpec {
                    key: "description",
                    label: "Detailed Basis for Not Qualified Finding",
                    kind: FieldKind::Text,
                    placeholder: "Provide detailed explanation of why the recipient is not \
                                  qualified for assistance awards, including specific incidents \
                                  and evidence",
                },
                FieldSpec {
                    key: "impact",
                    label: "Impact on Grant Programs",
                    kind: FieldKind::Text,
                    placeholder: "Describe how this finding impacts current or future grant \
                                  programs and any restrictions imposed",
                },
            ],
            RecordType::SubcontractorPayment => &[
                FieldSpec {
                    key: "finding_date",
                    label: "Date of Finding",
                    kind: FieldKind::Date,
                    placeholder: "",
                },
                FieldSpec {
                    key: "violation_count",
                    label: "Number of Unjustified Payment Issues",
                    kind: FieldKind::Integer,
                    placeholder: "Must be 3 or more within 12 months",
                },
                FieldSpec {
                    key: "subcontractors_affected",
                    label: "Number of Small Business Subcontractors Affected",
                    kind: FieldKind::Integer,
                    placeholder: "Enter number",
                },
                FieldSpec {
                    key: "amount_withheld",
                    label: "Total Amount Reduced or Withheld",
                    kind: FieldKind::CurrencyText,
                    placeholder: "$0.00",
                },
                FieldSpec {
                    key: "description",
                    label: "Description of Payment Issues",
                    kind: FieldKind::Text,
                    placeholder: "Describe the specific payment issues, including dates, \
                                  amounts, subcontractors affected, and reasons payments were \
                                  unjustifiably reduced or delayed",
                },
                FieldSpec {
                    key: "subcontractor_details",
                    label: "Subcontractor Details",
                    kind: FieldKind::Text,
                    placeholder: "Provide names, UEI numbers, and contact information for \
                                  affected small business subcontractors",
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for rt in RecordType::ALL {
            assert_eq!(RecordType::parse(rt.as_str()), Some(rt));
        }
        assert_eq!(RecordType::parse("termination"), None);
        assert_eq!(RecordType::parse(""), None);
    }

    #[test]
    fn every_type_has_between_three_and_six_fields() {
        for rt in RecordType::ALL {
            let n = rt.fields().len();
            assert!((3..=6).contains(&n), "{} has {} fields", rt.as_str(), n);
        }
    }

    #[test]
    fn field_keys_are_unique_within_a_type() {
        for rt in RecordType::ALL {
            let keys: Vec<_> = rt.fields().iter().map(|f| f.key).collect();
            let mut deduped = keys.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(keys.len(), deduped.len(), "{}", rt.as_str());
        }
    }
}
