//! Validation over mapped sample sheets.

use ena_map::apply_to_dataset;
use ena_model::{FieldCatalog, FieldDescriptor, FieldRequirement, HeaderMap, TabularDataset};
use ena_validate::{Issue, validate, validate_required};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn sheet(headers: &[&str], rows: &[&[&str]]) -> TabularDataset {
    TabularDataset::new(
        strings(headers),
        rows.iter().map(|row| strings(row)).collect(),
    )
}

fn catalog(fields: &[(&str, FieldRequirement)]) -> FieldCatalog {
    FieldCatalog::from_descriptors(
        "ERC000011",
        Some("ENA default sample checklist".to_string()),
        fields
            .iter()
            .map(|(name, requirement)| FieldDescriptor::new(*name, *requirement)),
    )
}

const IDENTITY: [&str; 4] = ["tax id", "sample title", "sample alias", "scientific name"];

#[test]
fn missing_mandatory_field_is_named() {
    let data = sheet(&IDENTITY, &[&["9606", "t", "s1", "Homo sapiens"]]);
    let catalog = catalog(&[("sex", FieldRequirement::Mandatory)]);

    let err = validate_required(&data, &catalog).unwrap_err();
    assert!(err.contains("sex"));
    assert_eq!(err.fields, vec!["sex"]);
    assert!(err.to_string().contains("sex"));
}

#[test]
fn all_missing_fields_are_reported_together() {
    let data = sheet(&["tax id", "habitat"], &[&["9606", "soil"]]);
    let catalog = catalog(&[
        ("collection date", FieldRequirement::Mandatory),
        ("sex", FieldRequirement::Mandatory),
    ]);

    let err = validate_required(&data, &catalog).unwrap_err();
    assert_eq!(
        err.fields,
        vec![
            "sample title",
            "sample alias",
            "scientific name",
            "collection date",
            "sex"
        ]
    );
    assert_eq!(err.checklist_id, "ERC000011");
}

#[test]
fn mapped_alias_satisfies_required_field() {
    let mut data = sheet(&["SampleID", "habitat"], &[&["s1", "soil"]]);
    let map: HeaderMap = [("SampleID", "sample alias")].into_iter().collect();
    apply_to_dataset(&mut data, Some(&map)).expect("mapping applies");

    let report = validate(&data, &catalog(&[]), &["sample alias"]).expect("validates");
    assert!(report.issues.is_empty());
}

#[test]
fn unmapped_alias_fails_required_field() {
    let data = sheet(&["SampleID"], &[&["s1"]]);
    let err = validate(&data, &catalog(&[]), &["sample alias"]).unwrap_err();
    assert_eq!(err.fields, vec!["sample alias"]);
}

#[test]
fn missing_recommended_fields_are_warnings() {
    let mut headers = IDENTITY.to_vec();
    headers.push("collection date");
    let data = sheet(&headers, &[&["9606", "t", "s1", "Homo sapiens", "2021-03-01"]]);
    let catalog = catalog(&[
        ("collection date", FieldRequirement::Mandatory),
        ("sex", FieldRequirement::Recommended),
        ("host body temperature", FieldRequirement::Optional),
    ]);

    let report = validate_required(&data, &catalog).expect("validates");
    assert_eq!(report.missing_recommended().collect::<Vec<_>>(), vec!["sex"]);
    assert_eq!(report.warning_count(), 1);
    assert_eq!(
        report.issues,
        vec![Issue::RecommendedMissing {
            field: "sex".to_string()
        }]
    );
    assert_eq!(report.issues[0].label(), "Missing recommended");
}

#[test]
fn report_serializes_to_json() {
    let report = validate(
        &sheet(&["a"], &[&["1"]]),
        &catalog(&[("sex", FieldRequirement::Recommended)]),
        &[],
    )
    .expect("validates");
    let json = serde_json::to_value(&report).expect("serialize");
    assert_eq!(json["checklist_id"], "ERC000011");
    assert_eq!(
        json["issues"][0],
        serde_json::json!({ "RecommendedMissing": { "field": "sex" } })
    );
    assert_eq!(
        report.issues[0],
        Issue::RecommendedMissing {
            field: "sex".to_string()
        }
    );
}
