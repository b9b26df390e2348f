//! Drop-box receipts.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::{Result, SubmitError};

/// File name the raw receipt is saved under.
pub const RECEIPT_FILE: &str = "receipt.xml";

/// Accession in a successful receipt.
static SAMPLE_ACCESSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<SAMPLE[^>]*\saccession="(ERS\d+)""#).expect("invalid sample accession regex")
});

/// Accession quoted in the error for an already-submitted sample.
static EXISTING_ACCESSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"accession: "(ERS\d+)""#).expect("invalid existing accession regex")
});

#[derive(Debug, Deserialize)]
struct ReceiptXml {
    #[serde(rename = "@success")]
    success: String,
    #[serde(rename = "@receiptDate", default)]
    receipt_date: Option<String>,
    #[serde(rename = "SAMPLE", default)]
    samples: Vec<ObjectXml>,
    #[serde(rename = "SUBMISSION", default)]
    submission: Option<ObjectXml>,
    #[serde(rename = "MESSAGES", default)]
    messages: Option<MessagesXml>,
}

#[derive(Debug, Deserialize)]
struct ObjectXml {
    #[serde(rename = "@accession", default)]
    accession: Option<String>,
    #[serde(rename = "@alias", default)]
    alias: Option<String>,
    #[serde(rename = "@status", default)]
    status: Option<String>,
    #[serde(rename = "EXT_ID", default)]
    ext_ids: Vec<ExtIdXml>,
}

#[derive(Debug, Deserialize)]
struct ExtIdXml {
    #[serde(rename = "@accession")]
    accession: String,
    #[serde(rename = "@type", default)]
    kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct MessagesXml {
    #[serde(rename = "INFO", default)]
    info: Vec<String>,
    #[serde(rename = "ERROR", default)]
    error: Vec<String>,
}

/// Accession assigned to one submitted sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleAccession {
    pub alias: String,
    pub accession: String,
    /// BioSamples identifier from the `EXT_ID` entry.
    pub biosample: Option<String>,
    pub status: Option<String>,
}

/// Parsed drop-box receipt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Receipt {
    pub success: bool,
    pub receipt_date: Option<String>,
    pub samples: Vec<SampleAccession>,
    pub submission_accession: Option<String>,
    pub info: Vec<String>,
    pub errors: Vec<String>,
}

impl Receipt {
    pub fn parse(xml: &str) -> Result<Self> {
        let raw: ReceiptXml =
            quick_xml::de::from_str(xml).map_err(|e| SubmitError::Receipt(e.to_string()))?;
        let messages = raw.messages.unwrap_or_default();

        let samples = raw
            .samples
            .into_iter()
            .filter_map(|sample| {
                let accession = sample.accession?;
                let biosample = sample
                    .ext_ids
                    .iter()
                    .find(|ext| ext.kind.as_deref().is_none_or(|kind| kind == "biosample"))
                    .map(|ext| ext.accession.clone());
                Some(SampleAccession {
                    alias: sample.alias.unwrap_or_default(),
                    accession,
                    biosample,
                    status: sample.status,
                })
            })
            .collect();

        Ok(Self {
            success: raw.success.trim().eq_ignore_ascii_case("true"),
            receipt_date: raw.receipt_date,
            samples,
            submission_accession: raw.submission.and_then(|s| s.accession),
            info: messages.info.into_iter().map(|m| m.trim().to_string()).collect(),
            errors: messages.error.into_iter().map(|m| m.trim().to_string()).collect(),
        })
    }

    pub fn accession_for(&self, alias: &str) -> Option<&str> {
        self.samples
            .iter()
            .find(|sample| sample.alias == alias)
            .map(|sample| sample.accession.as_str())
    }

    /// Accessions the registry reports as already existing.
    pub fn existing_accessions(&self) -> Vec<String> {
        self.errors
            .iter()
            .flat_map(|message| EXISTING_ACCESSION_REGEX.captures_iter(message))
            .map(|captures| captures[1].to_string())
            .collect()
    }
}

/// First sample accession in a raw response, from a success entry or,
/// failing that, from an "already exists" error message.
pub fn extract_accession(response: &str) -> Option<String> {
    SAMPLE_ACCESSION_REGEX
        .captures(response)
        .or_else(|| EXISTING_ACCESSION_REGEX.captures(response))
        .map(|captures| captures[1].to_string())
}

/// Save the raw receipt body under `dir`.
pub fn save_receipt(dir: &Path, body: &str) -> Result<PathBuf> {
    let path = dir.join(RECEIPT_FILE);
    fs::write(&path, body).map_err(|source| SubmitError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
