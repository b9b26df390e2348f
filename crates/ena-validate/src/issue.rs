//! Validation issue types.

use serde::{Deserialize, Serialize};

/// Non-fatal validation finding - each variant carries only its needed data.
///
/// Missing required or mandatory columns are not issues; they stop the run
/// as a [`MissingFieldsError`](crate::MissingFieldsError).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Issue {
    /// Checklist-mandatory field is a column but some cells are blank
    MandatoryEmpty { field: String, blank_rows: usize },
    /// Checklist-recommended field is not in the sheet
    RecommendedMissing { field: String },
}

impl Issue {
    pub fn field(&self) -> &str {
        match self {
            Issue::MandatoryEmpty { field, .. }
            | Issue::RecommendedMissing { field } => field,
        }
    }

    /// Short name of the check that raised the issue.
    pub fn label(&self) -> &'static str {
        match self {
            Issue::MandatoryEmpty { .. } => "Blank mandatory",
            Issue::RecommendedMissing { .. } => "Missing recommended",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::MandatoryEmpty { field, blank_rows } => {
                format!("checklist-mandatory field '{field}' is blank in {blank_rows} row(s)")
            }
            Issue::RecommendedMissing { field } => {
                format!("recommended field '{field}' is missing")
            }
        }
    }
}

/// Warnings of a successful validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub checklist_id: String,
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn warning_count(&self) -> usize {
        self.issues.len()
    }

    /// Recommended fields absent from the sheet.
    pub fn missing_recommended(&self) -> impl Iterator<Item = &str> {
        self.issues.iter().filter_map(|issue| match issue {
            Issue::RecommendedMissing { field } => Some(field.as_str()),
            _ => None,
        })
    }
}
