//! XML documents for ENA drop-box submissions.
//!
//! - [`build`] turns a validated dataset into a `SAMPLE_SET` document
//! - [`ManifestDocument`] describes the `SUBMISSION` actions
//! - [`serialize`] and [`write_outputs`] render both as indented UTF-8 XML

mod element;
mod error;
mod manifest;
mod records;
mod writer;

pub use element::XmlElement;
pub use error::{OutputError, Result};
pub use manifest::{ManifestAction, ManifestDocument};
pub use records::{RecordDocument, build};
pub use writer::{
    OutputPaths, RELEASE_FILE, SAMPLES_FILE, SUBMISSION_FILE, serialize, write_outputs,
    write_release,
};
