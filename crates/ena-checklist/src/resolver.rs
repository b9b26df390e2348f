use std::time::Instant;

use tracing::{info, info_span};

use ena_model::FieldCatalog;

use crate::error::{ChecklistError, Result};
use crate::parse::parse_checklist;
use crate::source::{ChecklistSource, HttpChecklistSource, ResolverConfig};

/// Resolves checklist accessions into field catalogs.
///
/// Each call performs exactly one fetch; nothing is cached or retried.
#[derive(Debug, Clone)]
pub struct ChecklistResolver<S = HttpChecklistSource> {
    source: S,
}

impl ChecklistResolver<HttpChecklistSource> {
    /// Resolver backed by the registry's HTTP API.
    pub fn http(config: &ResolverConfig) -> Result<Self> {
        Ok(Self::new(HttpChecklistSource::new(config)?))
    }
}

impl<S: ChecklistSource> ChecklistResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn resolve(&self, checklist_id: &str) -> Result<FieldCatalog> {
        let checklist_id = checklist_id.trim();
        if checklist_id.is_empty() {
            return Err(ChecklistError::EmptyId);
        }
        let span = info_span!("resolve", checklist_id = %checklist_id);
        let _guard = span.enter();
        let start = Instant::now();

        let body = self.source.fetch(checklist_id)?;
        let catalog = parse_checklist(checklist_id, &body)?;

        info!(
            checklist_name = catalog.name().unwrap_or(""),
            fields = catalog.field_count(),
            mandatory = catalog.mandatory().len(),
            recommended = catalog.recommended().len(),
            with_units = catalog.units().len(),
            duration_ms = start.elapsed().as_millis(),
            "checklist resolved"
        );
        Ok(catalog)
    }
}
