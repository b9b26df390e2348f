use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use ena_model::HeaderMap;

use crate::error::{MappingError, Result};

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Load a two-column mapping table.
///
/// Every non-blank row must carry a non-empty source header and a non-empty
/// target field name; extra columns are ignored. When a source header
/// appears twice, the later row wins.
pub fn load_header_map(path: &Path, delimiter: u8) -> Result<HeaderMap> {
    if !path.exists() {
        return Err(MappingError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let read_error = |message: String| MappingError::Read {
        path: path.to_path_buf(),
        message,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|e| read_error(e.to_string()))?;

    let mut map = HeaderMap::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| read_error(e.to_string()))?;
        let line = record
            .position()
            .map_or(idx as u64 + 1, csv::Position::line);
        let cells: Vec<String> = record.iter().map(normalize_cell).collect();
        if cells.iter().all(String::is_empty) {
            continue;
        }

        let source = cells.first().map(String::as_str).unwrap_or("");
        let target = cells.get(1).map(String::as_str).unwrap_or("");
        if source.is_empty() || target.is_empty() {
            return Err(MappingError::Malformed {
                path: path.to_path_buf(),
                line,
                reason: "expected a source header and a target field name".to_string(),
            });
        }

        if let Some(previous) = map.insert(source, target) {
            warn!(
                source_header = %source,
                replaced = %previous,
                target = %target,
                "duplicate mapping source, later entry wins"
            );
        }
    }

    if map.is_empty() {
        return Err(MappingError::Empty {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), entries = map.len(), "mapping file loaded");
    Ok(map)
}
