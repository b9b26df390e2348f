use std::collections::BTreeMap;

use tracing::{debug, warn};

use ena_model::{HeaderMap, TabularDataset};

use crate::error::{MappingError, Result};

/// Outcome of renaming one header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappedHeaders {
    /// Headers after renaming, in input column order.
    pub headers: Vec<String>,
    /// `(source, target)` pairs that were applied.
    pub renamed: Vec<(String, String)>,
    /// Headers the map had no entry for.
    pub unmapped: Vec<String>,
    /// Map entries whose source header is not a column.
    pub unused: Vec<String>,
}

/// Rename headers through an optional map.
///
/// Each header is renamed independently; headers without an entry pass
/// through. Fails when two columns end up with the same name.
pub fn apply(headers: &[String], map: Option<&HeaderMap>) -> Result<MappedHeaders> {
    let Some(map) = map else {
        return Ok(MappedHeaders {
            headers: headers.to_vec(),
            ..MappedHeaders::default()
        });
    };

    let mut mapped = MappedHeaders::default();
    let mut owners: BTreeMap<String, String> = BTreeMap::new();
    for header in headers {
        let target = match map.target(header) {
            Some(target) => {
                mapped.renamed.push((header.clone(), target.to_string()));
                target.to_string()
            }
            None => {
                mapped.unmapped.push(header.clone());
                header.clone()
            }
        };
        if let Some(first) = owners.insert(target.clone(), header.clone()) {
            return Err(MappingError::TargetCollision {
                target,
                first,
                second: header.clone(),
            });
        }
        mapped.headers.push(target);
    }

    mapped.unused = map
        .iter()
        .filter(|(source, _)| !headers.iter().any(|h| h == source))
        .map(|(source, _)| source.to_string())
        .collect();

    debug!(
        renamed = mapped.renamed.len(),
        unmapped = mapped.unmapped.len(),
        "headers mapped"
    );
    if !mapped.unmapped.is_empty() {
        warn!(
            unmapped = ?mapped.unmapped,
            "columns have no mapping entry and keep their names"
        );
    }
    if !mapped.unused.is_empty() {
        warn!(
            unused = ?mapped.unused,
            "mapping entries match no column"
        );
    }
    Ok(mapped)
}

/// Rename a dataset's headers in place.
pub fn apply_to_dataset(dataset: &mut TabularDataset, map: Option<&HeaderMap>) -> Result<MappedHeaders> {
    let mapped = apply(dataset.headers(), map)?;
    dataset.replace_headers(mapped.headers.clone())?;
    Ok(mapped)
}
