//! Sample sheet reading.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use ena_model::TabularDataset;

use crate::directive::parse_checklist_directive;
use crate::error::{IngestError, Result};

/// Field delimiter used when none is given.
pub const DEFAULT_DELIMITER: u8 = b';';

#[derive(Debug, Clone, Copy)]
pub struct IngestOptions {
    pub delimiter: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// A loaded sample sheet.
#[derive(Debug, Clone)]
pub struct LoadedInput {
    /// Accession from a `Checklist=<id>` directive line.
    pub checklist_override: Option<String>,
    pub dataset: TabularDataset,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Load a sample sheet.
///
/// The first physical line is consumed as the directive line even when it is
/// blank. Blank data rows are skipped. Columns with an empty header are
/// dropped together with their cells.
pub fn load(path: &Path, options: &IngestOptions) -> Result<LoadedInput> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let content = content.trim_start_matches('\u{feff}');

    let (directive, body) = content.split_once('\n').unwrap_or((content, ""));
    let checklist_override = parse_checklist_directive(directive.trim_end_matches('\r'), options.delimiter);
    if let Some(checklist) = &checklist_override {
        debug!(%checklist, "checklist directive found");
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(body.as_bytes());

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) && !raw_rows.is_empty() {
            continue;
        }
        raw_rows.push(row);
    }

    let mut raw_rows = raw_rows.into_iter();
    let raw_headers = raw_rows.next().ok_or_else(|| IngestError::NoHeader {
        path: path.to_path_buf(),
    })?;

    let kept: Vec<usize> = raw_headers
        .iter()
        .enumerate()
        .filter(|(_, header)| !normalize_header(header).is_empty())
        .map(|(idx, _)| idx)
        .collect();
    if kept.is_empty() {
        return Err(IngestError::NoColumns {
            path: path.to_path_buf(),
        });
    }
    if kept.len() < raw_headers.len() {
        debug!(
            dropped = raw_headers.len() - kept.len(),
            "dropping columns without a header"
        );
    }

    let headers: Vec<String> = kept
        .iter()
        .map(|&idx| normalize_header(&raw_headers[idx]))
        .collect();
    let mut seen = BTreeSet::new();
    for header in &headers {
        if !seen.insert(header.as_str()) {
            return Err(IngestError::DuplicateHeader {
                path: path.to_path_buf(),
                header: header.clone(),
            });
        }
    }

    let rows: Vec<Vec<String>> = raw_rows
        .map(|row| {
            kept.iter()
                .map(|&idx| row.get(idx).cloned().unwrap_or_default())
                .collect()
        })
        .collect();
    if rows.is_empty() {
        return Err(IngestError::NoRows {
            path: path.to_path_buf(),
        });
    }

    let dataset = TabularDataset::new(headers, rows);
    info!(
        path = %path.display(),
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "sample sheet loaded"
    );
    Ok(LoadedInput {
        checklist_override,
        dataset,
    })
}
