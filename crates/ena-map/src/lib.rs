//! Header mapping.
//!
//! A mapping file is a two-column delimited table of `source;target` pairs.
//! Mapping runs once, before validation, so a sheet whose columns use local
//! names can still satisfy checklist field names.

mod apply;
mod error;
mod loader;

pub use apply::{MappedHeaders, apply, apply_to_dataset};
pub use error::{MappingError, Result};
pub use loader::load_header_map;
