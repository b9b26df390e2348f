//! Sample sheet ingestion.
//!
//! A sample sheet is delimited text laid out as:
//!
//! 1. a directive line, optionally `Checklist=<accession>`; never data
//! 2. the header line
//! 3. one data row per sample
//!
//! ```ignore
//! use ena_ingest::{IngestOptions, load};
//!
//! let input = load(Path::new("samples.csv"), &IngestOptions::default())?;
//! let checklist = input.checklist_override.as_deref().unwrap_or("ERC000011");
//! ```

mod directive;
mod error;
mod reader;

pub use directive::parse_checklist_directive;
pub use error::{IngestError, Result};
pub use reader::{DEFAULT_DELIMITER, IngestOptions, LoadedInput, load};
