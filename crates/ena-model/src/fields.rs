//! Column names with fixed meaning in a sample sheet.

/// NCBI taxonomy identifier of the sampled organism.
pub const TAX_ID: &str = "tax id";
/// Free-text sample title.
pub const SAMPLE_TITLE: &str = "sample title";
/// Submitter-unique sample alias.
pub const SAMPLE_ALIAS: &str = "sample alias";
/// Scientific name of the organism.
pub const SCIENTIFIC_NAME: &str = "scientific name";
/// Optional per-row submitting center.
pub const CENTER_NAME: &str = "center name";
/// Optional common name of the organism.
pub const COMMON_NAME: &str = "common name";

/// Columns every sample sheet must carry, regardless of checklist.
pub const REQUIRED_FIELDS: [&str; 4] = [TAX_ID, SAMPLE_TITLE, SAMPLE_ALIAS, SCIENTIFIC_NAME];

/// Attribute tag carrying the checklist accession.
pub const CHECKLIST_ATTRIBUTE: &str = "ENA-CHECKLIST";

/// ENA default sample checklist.
pub const DEFAULT_CHECKLIST: &str = "ERC000011";

pub fn is_required_field(name: &str) -> bool {
    REQUIRED_FIELDS.contains(&name)
}
