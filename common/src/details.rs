//! Typed per-record-type detail values.
//!
//! Each record type carries its own named fields instead of sharing a pool
//! of generic date/amount/description slots, so values entered for one type
//! can never bleed into another: switching the record type in the wizard
//! replaces the whole `RecordDetails` value with `empty(new_type)`.
//!
//! Field access is bridged to the catalog in `record_type` through the
//! stable string keys of each `FieldSpec`; `set`/`value_of` reject keys
//! that do not belong to the active variant.

use serde::{Deserialize, Serialize};

use crate::record_type::{FieldKind, RecordType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecordDetails {
    AdministrativeAgreement {
        effective_date: String,
        expiration_date: String,
        terms: String,
        circumstances: String,
    },
    DefectivePricing {
        discovery_date: String,
        amount: String,
        description: String,
        price_impact: String,
    },
    DodDetermination {
        determination_date: String,
        fault_type: String,
        description: String,
        financial_impact: String,
    },
    Trafficking {
        violation_date: String,
        investigation_status: String,
        description: String,
        corrective_actions: String,
    },
    MaterialFailure {
        closeout_date: String,
        failure_date: String,
        requirement_type: String,
        description: String,
    },
    NonResponsibility {
        determination_date: String,
        basis: String,
        description: String,
        evidence: String,
    },
    RecipientNotQualified {
        determination_date: String,
        reason: String,
        description: String,
        impact: String,
    },
    SubcontractorPayment {
        finding_date: String,
        violation_count: String,
        subcontractors_affected: String,
        amount_withheld: String,
        description: String,
        subcontractor_details: String,
    },
}

impl RecordDetails {
    /// Fresh, all-empty details for the given record type.
    pub fn empty(record_type: RecordType) -> Self {
        match record_type {
            RecordType::AdministrativeAgreement => RecordDetails::AdministrativeAgreement {
                effective_date: String::new(),
                expiration_date: String::new(),
                terms: String::new(),
                circumstances: String::new(),
            },
            RecordType::DefectivePricing => RecordDetails::DefectivePricing {
                discovery_date: String::new(),
                amount: String::new(),
                description: String::new(),
                price_impact: String::new(),
            },
            RecordType::DodDetermination => RecordDetails::DodDetermination {
                determination_date: String::new(),
                fault_type: String::new(),
                description: String::new(),
                financial_impact: String::new(),
            },
            RecordType::Trafficking => RecordDetails::Trafficking {
                violation_date: String::new(),
                investigation_status: String::new(),
                description: String::new(),
                corrective_actions: String::new(),
            },
            RecordType::MaterialFailure => RecordDetails::MaterialFailure {
                closeout_date: String::new(),
                failure_date: String::new(),
                requirement_type: String::new(),
                description: String::new(),
            },
            RecordType::NonResponsibility => RecordDetails::NonResponsibility {
                determination_date: String::new(),
                basis: String::new(),
                description: String::new(),
                evidence: String::new(),
            },
            RecordType::RecipientNotQualified => RecordDetails::RecipientNotQualified {
                determination_date: String::new(),
                reason: String::new(),
                description: String::new(),
                impact: String::new(),
            },
            RecordType::SubcontractorPayment => RecordDetails::SubcontractorPayment {
                finding_date: String::new(),
                violation_count: String::new(),
                subcontractors_affected: String::new(),
                amount_withheld: String::new(),
                description: String::new(),
                subcontractor_details: String::new(),
            },
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            RecordDetails::AdministrativeAgreement { .. } => RecordType::AdministrativeAgreement,
            RecordDetails::DefectivePricing { .. } => RecordType::DefectivePricing,
            RecordDetails::DodDetermination { .. } => RecordType::DodDetermination,
            RecordDetails::Trafficking { .. } => RecordType::Trafficking,
            RecordDetails::MaterialFailure { .. } => RecordType::MaterialFailure,
            RecordDetails::NonResponsibility { .. } => RecordType::NonResponsibility,
            RecordDetails::RecipientNotQualified { .. } => RecordType::RecipientNotQualified,
            RecordDetails::SubcontractorPayment { .. } => RecordType::SubcontractorPayment,
        }
    }

    /// Value of the field with the given catalog key, or `None` when the key
    /// does not belong to this variant.
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.field(key).map(|s| s.as_str())
    }

    /// Writes the field with the given catalog key. Returns `false` (and
    /// leaves the value untouched) when the key does not belong to this
    /// variant.
    pub fn set(&mut self, key: &str, value: String) -> bool {
        match self.field_mut(key) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// `(label, display value)` pairs in catalog order, for the review and
    /// report screens. Select values are resolved to their option labels.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        self.record_type()
            .fields()
            .iter()
            .map(|spec| {
                let raw = self.value_of(spec.key).unwrap_or_default();
                let shown = match spec.kind {
                    FieldKind::Select(options) => options
                        .iter()
                        .find(|opt| opt.value == raw)
                        .map(|opt| opt.label.to_string())
                        .unwrap_or_else(|| raw.to_string()),
                    _ => raw.to_string(),
                };
                (spec.label, shown)
            })
            .collect()
    }

    fn field(&self, key: &str) -> Option<&String> {
        match self {
            RecordDetails::AdministrativeAgreement {
                effective_date,
                expiration_date,
                terms,
                circumstances,
            } => match key {
                "effective_date" => Some(effective_date),
                "expiration_date" => Some(expiration_date),
                "terms" => Some(terms),
                "circumstances" => Some(circumstances),
                _ => None,
            },
            RecordDetails::DefectivePricing {
                discovery_date,
                amount,
                description,
                price_impact,
            } => match key {
                "discovery_date" => Some(discovery_date),
                "amount" => Some(amount),
                "description" => Some(description),
                "price_impact" => Some(price_impact),
                _ => None,
            },
            RecordDetails::DodDetermination {
                determination_date,
                fault_type,
                description,
                financial_impact,
            } => match key {
                "determination_date" => Some(determination_date),
                "fault_type" => Some(fault_type),
                "description" => Some(description),
                "financial_impact" => Some(financial_impact),
                _ => None,
            },
            RecordDetails::Trafficking {
                violation_date,
                investigation_status,
                description,
                corrective_actions,
            } => match key {
                "violation_date" => Some(violation_date),
                "investigation_status" => Some(investigation_status),
                "description" => Some(description),
                "corrective_actions" => Some(corrective_actions),
                _ => None,
            },
            RecordDetails::MaterialFailure {
                closeout_date,
                failure_date,
                requirement_type,
                description,
            } => match key {
                "closeout_date" => Some(closeout_date),
                "failure_date" => Some(failure_date),
                "requirement_type" => Some(requirement_type),
                "description" => Some(description),
                _ => None,
            },
            RecordDetails::NonResponsibility {
                determination_date,
                basis,
                description,
                evidence,
            } => match key {
                "determination_date" => Some(determination_date),
                "basis" => Some(basis),
                "description" => Some(description),
                "evidence" => Some(evidence),
                _ => None,
            },
            RecordDetails::RecipientNotQualified {
                determination_date,
                reason,
                description,
                impact,
            } => match key {
                "determination_date" => Some(determination_date),
                "reason" => Some(reason),
                "description" => Some(description),
                "impact" => Some(impact),
                _ => None,
            },
            RecordDetails::SubcontractorPayment {
                finding_date,
                violation_count,
                subcontractors_affected,
                amount_withheld,
                description,
                subcontractor_details,
            } => match key {
                "finding_date" => Some(finding_date),
                "violation_count" => Some(violation_count),
                "subcontractors_affected" => Some(subcontractors_affected),
                "amount_withheld" => Some(amount_withheld),
                "description" => Some(description),
                "subcontractor_details" => Some(subcontractor_details),
                _ => None,
            },
        }
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match self {
            RecordDetails::AdministrativeAgreement {
                effective_date,
                expiration_date,
                terms,
                circumstances,
            } => match key {
                "effective_date" => Some(effective_date),
                "expiration_date" => Some(expiration_date),
                "terms" => Some(terms),
                "circumstances" => Some(circumstances),
                _ => None,
            },
            RecordDetails::DefectivePricing {
                discovery_date,
                amount,
                description,
                price_impact,
            } => match key {
                "discovery_date" => Some(discovery_date),
                "amount" => Some(amount),
                "description" => Some(description),
                "price_impact" => Some(price_impact),
                _ => None,
            },
            RecordDetails::DodDetermination {
                determination_date,
                fault_type,
                description,
                financial_impact,
            } => match key {
                "determination_date" => Some(determination_date),
                "fault_type" => Some(fault_type),
                "description" => Some(description),
                "financial_impact" => Some(financial_impact),
                _ => None,
            },
            RecordDetails::Trafficking {
                violation_date,
                investigation_status,
                description,
                corrective_actions,
            } => match key {
                "violation_date" => Some(violation_date),
                "investigation_status" => Some(investigation_status),
                "description" => Some(description),
                "corrective_actions" => Some(corrective_actions),
                _ => None,
            },
            RecordDetails::MaterialFailure {
                closeout_date,
                failure_date,
                requirement_type,
                description,
            } => match key {
                "closeout_date" => Some(closeout_date),
                "failure_date" => Some(failure_date),
                "requirement_type" => Some(requirement_type),
                "description" => Some(description),
                _ => None,
            },
            RecordDetails::NonResponsibility {
                determination_date,
                basis,
                description,
                evidence,
            } => match key {
                "determination_date" => Some(determination_date),
                "basis" => Some(basis),
                "description" => Some(description),
                "evidence" => Some(evidence),
                _ => None,
            },
            RecordDetails::RecipientNotQualified {
                determination_date,
                reason,
                description,
                impact,
            } => match key {
                "determination_date" => Some(determination_date),
                "reason" => Some(reason),
                "description" => Some(description),
                "impact" => Some(impact),
                _ => None,
            },
            RecordDetails::SubcontractorPayment {
                finding_date,
                violation_count,
                subcontractors_affected,
                amount_withheld,
                description,
                subcontractor_details,
            } => match key {
                "finding_date" => Some(finding_date),
                "violation_count" => Some(violation_count),
                "subcontractors_affected" => Some(subcontractors_affected),
                "amount_withheld" => Some(amount_withheld),
                "description" => Some(description),
                "subcontractor_details" => Some(subcontractor_details),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_key_is_settable_on_its_own_type() {
        for rt in RecordType::ALL {
            let mut details = RecordDetails::empty(rt);
            for spec in rt.fields() {
                assert!(details.set(spec.key, "x".to_string()), "{}/{}", rt.as_str(), spec.key);
                assert_eq!(details.value_of(spec.key), Some("x"));
            }
        }
    }

    #[test]
    fn foreign_keys_are_rejected() {
        let mut details = RecordDetails::empty(RecordType::AdministrativeAgreement);
        assert!(!details.set("finding_date", "2024-01-01".to_string()));
        assert_eq!(details.value_of("finding_date"), None);
        assert_eq!(details, RecordDetails::empty(RecordType::AdministrativeAgreement));
    }

    #[test]
    fn entries_resolve_select_labels() {
        let mut details = RecordDetails::empty(RecordType::DodDetermination);
        details.set("fault_type", "quality-deficiency".to_string());
        let entries = details.entries();
        let fault = entries
            .iter()
            .find(|(label, _)| *label == "Type of Contractor Fault")
            .unwrap();
        assert_eq!(fault.1, "Quality Deficiency");
    }

    #[test]
    fn entries_follow_catalog_order() {
        for rt in RecordType::ALL {
            let details = RecordDetails::empty(rt);
            let labels: Vec<_> = details.entries().into_iter().map(|(l, _)| l).collect();
            let expected: Vec<_> = rt.fields().iter().map(|f| f.label).collect();
            assert_eq!(labels, expected);
        }
    }
}
