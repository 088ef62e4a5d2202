use integrity_common::record_type::{FieldKind, RecordType};

fn labels(rt: RecordType) -> Vec<&'static str> {
    rt.fields().iter().map(|f| f.label).collect()
}

#[test]
fn administrative_agreement_fields() {
    assert_eq!(
        labels(RecordType::AdministrativeAgreement),
        vec![
            "Effective Date",
            "Expiration Date",
            "Terms of Agreement",
            "Circumstances Leading to Agreement",
        ]
    );
}

#[test]
fn defective_pricing_fields() {
    assert_eq!(
        labels(RecordType::DefectivePricing),
        vec![
            "Date of Discovery",
            "Amount of Defective Pricing",
            "Description of Pricing Defect",
            "Impact on Contract Price",
        ]
    );
}

#[test]
fn dod_determination_fields_and_fault_options() {
    assert_eq!(
        labels(RecordType::DodDetermination),
        vec![
            "Determination Date",
            "Type of Contractor Fault",
            "Description of Contractor Fault",
            "Financial Impact (if applicable)",
        ]
    );
    let fault = &RecordType::DodDetermination.fields()[1];
    match fault.kind {
        FieldKind::Select(options) => {
            let values: Vec<_> = options.iter().map(|o| o.value).collect();
            assert_eq!(
                values,
                vec!["cost-overrun", "quality-deficiency", "performance-failure", "other"]
            );
        }
        other => panic!("expected select, got {other:?}"),
    }
}

#[test]
fn trafficking_fields_and_status_options() {
    assert_eq!(
        labels(RecordType::Trafficking),
        vec![
            "Date of Violation/Discovery",
            "Investigation Status",
            "Description of Trafficking Violation",
            "Corrective Actions Taken",
        ]
    );
    let status = &RecordType::Trafficking.fields()[1];
    match status.kind {
        FieldKind::Select(options) => {
            let values: Vec<_> = options.iter().map(|o| o.value).collect();
            assert_eq!(values, vec!["ongoing", "completed", "referred", "substantiated"]);
        }
        other => panic!("expected select, got {other:?}"),
    }
}

#[test]
fn material_failure_fields_and_requirement_options() {
    assert_eq!(
        labels(RecordType::MaterialFailure),
        vec![
            "Closeout Date",
            "Date of Failure Determination",
            "Type of Closeout Requirement Not Met",
            "Description of Material Failure",
        ]
    );
    let requirement = &RecordType::MaterialFailure.fields()[2];
    match requirement.kind {
        FieldKind::Select(options) => {
            let values: Vec<_> = options.iter().map(|o| o.value).collect();
            assert_eq!(
                values,
                vec![
                    "financial-reporting",
                    "property-disposition",
                    "patent-reporting",
                    "final-deliverables",
                    "closeout-documentation",
                    "other",
                ]
            );
        }
        other => panic!("expected select, got {other:?}"),
    }
}

#[test]
fn non_responsibility_fields_and_basis_options() {
    assert_eq!(
        labels(RecordType::NonResponsibility),
        vec![
            "Determination Date",
            "Basis for Non-Responsibility",
            "Detailed Basis for Non-Responsibility Determination",
            "Supporting Evidence/Documentation",
        ]
    );
    let basis = &RecordType::NonResponsibility.fields()[1];
    match basis.kind {
        FieldKind::Select(options) => {
            let values: Vec<_> = options.iter().map(|o| o.value).collect();
            assert_eq!(
                values,
                vec!["financial", "technical", "integrity", "performance", "capability", "other"]
            );
        }
        other => panic!("expected select, got {other:?}"),
    }
}

#[test]
fn recipient_not_qualified_fields_and_reason_options() {
    assert_eq!(
        labels(RecordType::RecipientNotQualified),
        vec![
            "Determination Date",
            "Reason for Not Qualified Finding",
            "Detailed Basis for Not Qualified Finding",
            "Impact on Grant Programs",
        ]
    );
    let reason = &RecordType::RecipientNotQualified.fields()[1];
    match reason.kind {
        FieldKind::Select(options) => {
            let values: Vec<_> = options.iter().map(|o| o.value).collect();
            assert_eq!(
                values,
                vec![
                    "mismanagement",
                    "non-compliance",
                    "fraud",
                    "performance",
                    "suspension",
                    "other",
                ]
            );
        }
        other => panic!("expected select, got {other:?}"),
    }
}

#[test]
fn subcontractor_payment_fields() {
    assert_eq!(
        labels(RecordType::SubcontractorPayment),
        vec![
            "Date of Finding",
            "Number of Unjustified Payment Issues",
            "Number of Small Business Subcontractors Affected",
            "Total Amount Reduced or Withheld",
            "Description of Payment Issues",
            "Subcontractor Details",
        ]
    );
    let counts: Vec<_> = RecordType::SubcontractorPayment
        .fields()
        .iter()
        .filter(|f| f.kind == FieldKind::Integer)
        .map(|f| f.key)
        .collect();
    assert_eq!(counts, vec!["violation_count", "subcontractors_affected"]);
}

#[test]
fn date_fields_carry_no_placeholder() {
    for rt in RecordType::ALL {
        for field in rt.fields() {
            if field.kind == FieldKind::Date {
                assert!(field.placeholder.is_empty(), "{}/{}", rt.as_str(), field.key);
            }
        }
    }
}
