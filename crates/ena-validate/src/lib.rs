//! Sample sheet validation.
//!
//! Checks run once per dataset, after header mapping:
//!
//! - every fixed required column and every checklist-mandatory field must be
//!   a column, otherwise the run stops with [`MissingFieldsError`]
//! - absent recommended fields and blank mandatory cells are reported as
//!   warnings in the [`ValidationReport`]
//!
//! Attribute values are never checked beyond blankness.

mod error;
mod issue;
mod validator;

pub use error::MissingFieldsError;
pub use issue::{Issue, ValidationReport};
pub use validator::{validate, validate_required};
