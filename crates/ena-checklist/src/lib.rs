//! Checklist resolution.
//!
//! A checklist is the registry's self-describing schema for sample
//! attributes. This crate fetches one checklist document by accession and
//! folds its field descriptors into a [`FieldCatalog`].
//!
//! ```ignore
//! use ena_checklist::{ChecklistResolver, ResolverConfig};
//!
//! let resolver = ChecklistResolver::http(&ResolverConfig::default())?;
//! let catalog = resolver.resolve("ERC000011")?;
//! println!("{} mandatory fields", catalog.mandatory().len());
//! ```
//!
//! [`FieldCatalog`]: ena_model::FieldCatalog

mod error;
mod parse;
mod resolver;
mod source;

pub use error::{ChecklistError, Result};
pub use parse::parse_checklist;
pub use resolver::ChecklistResolver;
pub use source::{ChecklistSource, DEFAULT_REGISTRY_URL, HttpChecklistSource, ResolverConfig};
