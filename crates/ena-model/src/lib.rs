//! Data model shared by the ENA sample submission crates.
//!
//! - [`FieldCatalog`]: field constraints derived from one checklist fetch
//! - [`HeaderMap`]: caller-supplied column renaming table
//! - [`TabularDataset`]: the delimited sample sheet, headers plus raw cells
//! - [`fields`]: fixed column names and reserved attribute tags

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod fields;
pub mod header_map;

pub use catalog::{FieldCatalog, FieldDescriptor, FieldRequirement};
pub use dataset::{NULL_MARKER, Record, TabularDataset, is_blank};
pub use error::{ModelError, Result};
pub use fields::{
    CENTER_NAME, CHECKLIST_ATTRIBUTE, COMMON_NAME, DEFAULT_CHECKLIST, REQUIRED_FIELDS,
    SAMPLE_ALIAS, SAMPLE_TITLE, SCIENTIFIC_NAME, TAX_ID, is_required_field,
};
pub use header_map::HeaderMap;
