use thiserror::Error;

/// Fields that must be columns but are not.
///
/// Carries every missing field, required columns first, then checklist
/// fields in checklist order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("missing mandatory field(s) for checklist {checklist_id}: {}", .fields.join(", "))]
pub struct MissingFieldsError {
    pub checklist_id: String,
    pub fields: Vec<String>,
}

impl MissingFieldsError {
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}
