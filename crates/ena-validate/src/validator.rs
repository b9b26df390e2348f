use std::collections::BTreeSet;

use tracing::{debug, info_span, warn};

use ena_model::{FieldCatalog, REQUIRED_FIELDS, TabularDataset, is_blank};

use crate::error::MissingFieldsError;
use crate::issue::{Issue, ValidationReport};

/// Validate against a catalog and the fixed identity columns.
pub fn validate_required(
    dataset: &TabularDataset,
    catalog: &FieldCatalog,
) -> Result<ValidationReport, MissingFieldsError> {
    validate(dataset, catalog, &REQUIRED_FIELDS)
}

/// Validate a mapped dataset against a catalog and a required-column set.
///
/// Every missing field is collected before failing, so one run names all
/// of them.
pub fn validate(
    dataset: &TabularDataset,
    catalog: &FieldCatalog,
    required: &[&str],
) -> Result<ValidationReport, MissingFieldsError> {
    let span = info_span!("validate", checklist_id = %catalog.checklist_id());
    let _guard = span.enter();

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut missing: Vec<String> = Vec::new();
    for field in required {
        if !dataset.has_column(field) && seen.insert(*field) {
            missing.push((*field).to_string());
        }
    }
    for field in catalog.mandatory() {
        if !dataset.has_column(field) && seen.insert(field.as_str()) {
            missing.push(field.clone());
        }
    }
    if !missing.is_empty() {
        return Err(MissingFieldsError {
            checklist_id: catalog.checklist_id().to_string(),
            fields: missing,
        });
    }

    let mut issues = Vec::new();
    for field in catalog.mandatory() {
        let blank_rows = blank_count(dataset, field);
        if blank_rows > 0 {
            issues.push(Issue::MandatoryEmpty {
                field: field.clone(),
                blank_rows,
            });
        }
    }
    for field in catalog.recommended() {
        if !dataset.has_column(field) {
            issues.push(Issue::RecommendedMissing {
                field: field.clone(),
            });
        }
    }

    for issue in &issues {
        warn!(field = %issue.field(), "{}", issue.message());
    }
    debug!(warnings = issues.len(), "validation passed");

    Ok(ValidationReport {
        checklist_id: catalog.checklist_id().to_string(),
        issues,
    })
}

fn blank_count(dataset: &TabularDataset, field: &str) -> usize {
    let Some(idx) = dataset.column_index(field) else {
        return 0;
    };
    dataset
        .rows()
        .iter()
        .filter(|row| row.get(idx).is_none_or(|value| is_blank(value)))
        .count()
}

#[cfg(test)]
mod tests {
    use ena_model::{FieldDescriptor, FieldRequirement};

    use super::*;

    fn catalog() -> FieldCatalog {
        FieldCatalog::from_descriptors(
            "ERC000011",
            None,
            [
                FieldDescriptor::new("collection date", FieldRequirement::Mandatory),
                FieldDescriptor::new("sex", FieldRequirement::Recommended),
            ],
        )
    }

    fn dataset(headers: &[&str], rows: &[&[&str]]) -> TabularDataset {
        TabularDataset::new(
            headers.iter().map(|h| (*h).to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn required_fields_come_first() {
        let data = dataset(&["habitat"], &[&["soil"]]);
        let err = validate_required(&data, &catalog()).unwrap_err();
        assert_eq!(
            err.fields,
            vec![
                "tax id",
                "sample title",
                "sample alias",
                "scientific name",
                "collection date"
            ]
        );
    }

    #[test]
    fn mandatory_already_required_is_listed_once() {
        let catalog = FieldCatalog::from_descriptors(
            "X",
            None,
            [FieldDescriptor::new("tax id", FieldRequirement::Mandatory)],
        );
        let err = validate(&dataset(&["a"], &[&["1"]]), &catalog, &["tax id"])
            .unwrap_err();
        assert_eq!(err.fields, vec!["tax id"]);
    }

    #[test]
    fn blank_mandatory_cells_warn() {
        let data = dataset(&["collection date"], &[&["2020"], &["nan"], &[""]]);
        let report = validate(&data, &catalog(), &[]).expect("valid");
        assert!(report.issues.contains(&Issue::MandatoryEmpty {
            field: "collection date".to_string(),
            blank_rows: 2,
        }));
    }
}
