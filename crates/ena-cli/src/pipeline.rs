//! The sample pipeline: load, resolve, map, validate, build, write.
//!
//! Submission is left to the caller; everything here works offline except
//! the checklist lookup, which goes through a [`ChecklistSource`].

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, info_span, warn};

use ena_checklist::{ChecklistResolver, ChecklistSource};
use ena_ingest::{DEFAULT_DELIMITER, IngestOptions, LoadedInput, load};
use ena_map::{MappedHeaders, apply_to_dataset, load_header_map};
use ena_model::{DEFAULT_CHECKLIST, FieldCatalog};
use ena_output::{
    ManifestDocument, OutputPaths, SAMPLES_FILE, build, write_outputs, write_release,
};
use ena_submit::{RECEIPT_FILE, extract_accession};
use ena_validate::{ValidationReport, validate_required};

/// Where the checklist accession of a run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecklistOrigin {
    /// `Checklist=<id>` line of the sample sheet.
    Directive,
    /// `--checklist` argument.
    Argument,
    Default,
}

impl ChecklistOrigin {
    pub fn label(self) -> &'static str {
        match self {
            Self::Directive => "sheet directive",
            Self::Argument => "argument",
            Self::Default => "default",
        }
    }
}

/// Inputs of one sample run.
#[derive(Debug, Clone)]
pub struct SampleRunOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub delimiter: u8,
    pub checklist: Option<String>,
    pub center: Option<String>,
    pub mapping: Option<PathBuf>,
    pub hold_until: Option<NaiveDate>,
}

impl SampleRunOptions {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            delimiter: DEFAULT_DELIMITER,
            checklist: None,
            center: None,
            mapping: None,
            hold_until: None,
        }
    }
}

/// Outcome of a successful sample run.
#[derive(Debug, Clone)]
pub struct SampleRunResult {
    pub checklist_id: String,
    pub checklist_origin: ChecklistOrigin,
    pub catalog: FieldCatalog,
    pub row_count: usize,
    pub mapped: MappedHeaders,
    pub report: ValidationReport,
    pub aliases: Vec<String>,
    pub outputs: OutputPaths,
}

/// Pick the checklist accession: sheet directive, then argument, then default.
pub fn select_checklist(
    directive: Option<&str>,
    argument: Option<&str>,
) -> (String, ChecklistOrigin) {
    fn non_empty(value: Option<&str>) -> Option<&str> {
        value.map(str::trim).filter(|v| !v.is_empty())
    }
    if let Some(id) = non_empty(directive) {
        (id.to_string(), ChecklistOrigin::Directive)
    } else if let Some(id) = non_empty(argument) {
        (id.to_string(), ChecklistOrigin::Argument)
    } else {
        (DEFAULT_CHECKLIST.to_string(), ChecklistOrigin::Default)
    }
}

/// Run the pipeline up to written documents.
///
/// Nothing is written unless every stage before writing succeeds.
pub fn run_samples<S: ChecklistSource>(
    options: &SampleRunOptions,
    resolver: &ChecklistResolver<S>,
) -> Result<SampleRunResult> {
    let run_span = info_span!("samples", input = %options.input.display());
    let _run_guard = run_span.enter();
    let start = Instant::now();

    let LoadedInput {
        checklist_override,
        mut dataset,
    } = {
        let span = info_span!("load");
        let _guard = span.enter();
        load(
            &options.input,
            &IngestOptions {
                delimiter: options.delimiter,
            },
        )
        .with_context(|| format!("load sample sheet {}", options.input.display()))?
    };

    let (checklist_id, checklist_origin) =
        select_checklist(checklist_override.as_deref(), options.checklist.as_deref());
    if checklist_origin == ChecklistOrigin::Directive
        && let Some(argument) = options.checklist.as_deref()
        && argument.trim() != checklist_id
    {
        warn!(
            directive = %checklist_id,
            argument = %argument,
            "sheet directive overrides the checklist argument"
        );
    }
    let catalog = resolver
        .resolve(&checklist_id)
        .with_context(|| format!("resolve checklist {checklist_id}"))?;

    let mapped = {
        let span = info_span!("map");
        let _guard = span.enter();
        let header_map = options
            .mapping
            .as_deref()
            .map(|path| load_header_map(path, options.delimiter))
            .transpose()
            .context("load header mapping")?;
        apply_to_dataset(&mut dataset, header_map.as_ref()).context("apply header mapping")?
    };

    let report = validate_required(&dataset, &catalog)
        .with_context(|| format!("validate {}", options.input.display()))?;

    let records = build(
        &dataset,
        &catalog,
        &checklist_id,
        options.center.as_deref(),
    );
    let mut manifest = ManifestDocument::add();
    if let Some(until) = options.hold_until {
        manifest = manifest.with_hold(until);
    }
    let outputs = write_outputs(&options.output_dir, &records, &manifest)
        .with_context(|| format!("write documents to {}", options.output_dir.display()))?;

    info!(
        checklist_id = %checklist_id,
        row_count = dataset.row_count(),
        warnings = report.warning_count(),
        duration_ms = start.elapsed().as_millis(),
        "sample documents ready"
    );
    Ok(SampleRunResult {
        checklist_id,
        checklist_origin,
        catalog,
        row_count: dataset.row_count(),
        mapped,
        report,
        aliases: records.aliases().map(str::to_string).collect(),
        outputs,
    })
}

/// Documents of a release, ready for the drop-box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    pub accession: String,
    pub manifest: PathBuf,
    /// `samples.xml` of an earlier run in the same directory, if any.
    pub samples: Option<PathBuf>,
}

/// Write `release.xml` under `output_dir`.
///
/// Without an explicit accession, the first one found in the directory's
/// saved `receipt.xml` is released.
pub fn prepare_release(output_dir: &Path, accession: Option<&str>) -> Result<ReleasePlan> {
    let accession = match accession.map(str::trim).filter(|id| !id.is_empty()) {
        Some(accession) => accession.to_string(),
        None => receipt_accession(output_dir)?,
    };
    let manifest = write_release(output_dir, &ManifestDocument::release(&accession))
        .with_context(|| format!("write release manifest to {}", output_dir.display()))?;
    let samples = Some(output_dir.join(SAMPLES_FILE)).filter(|path| path.is_file());
    info!(
        accession = %accession,
        manifest = %manifest.display(),
        with_samples = samples.is_some(),
        "release prepared"
    );
    Ok(ReleasePlan {
        accession,
        manifest,
        samples,
    })
}

fn receipt_accession(output_dir: &Path) -> Result<String> {
    let path = output_dir.join(RECEIPT_FILE);
    let body = fs::read_to_string(&path).with_context(|| {
        format!(
            "no accession given and no receipt to read it from at {}",
            path.display()
        )
    })?;
    extract_accession(&body)
        .with_context(|| format!("no sample accession in {}", path.display()))
}
