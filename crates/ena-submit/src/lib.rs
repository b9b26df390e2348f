//! Submission of generated documents to the ENA drop-box.
//!
//! The drop-box takes the manifest and the sample set as multipart file
//! fields, authenticated with a Webin account, and answers with an XML
//! receipt listing the assigned accessions.

mod client;
mod credentials;
mod error;
mod receipt;

pub use client::{DropBoxClient, SUBMIT_PATH, Submission, SubmissionOutcome, Target};
pub use credentials::{CREDENTIALS_FILE, Credentials, default_credentials_path};
pub use error::{Result, SubmitError};
pub use receipt::{RECEIPT_FILE, Receipt, SampleAccession, extract_accession, save_receipt};
