//! Rendering and writing documents.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::{info, info_span};

use crate::element::XmlElement;
use crate::error::{OutputError, Result};
use crate::manifest::ManifestDocument;
use crate::records::RecordDocument;

/// File name of the sample set document.
pub const SAMPLES_FILE: &str = "samples.xml";

/// File name of the submission manifest.
pub const SUBMISSION_FILE: &str = "submission.xml";

/// File name of a release manifest, kept apart from the ADD manifest.
pub const RELEASE_FILE: &str = "release.xml";

/// Locations of the written documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub samples: PathBuf,
    pub submission: PathBuf,
}

/// Render an element tree as UTF-8 XML with a declaration and 2-space indent.
pub fn serialize(root: &XmlElement) -> Result<Vec<u8>> {
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_error)?;
    write_element(&mut xml, root)?;
    Ok(xml.into_inner())
}

fn write_element<W: Write>(xml: &mut Writer<W>, element: &XmlElement) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }
    if element.is_empty() {
        return xml.write_event(Event::Empty(start)).map_err(xml_error);
    }

    xml.write_event(Event::Start(start)).map_err(xml_error)?;
    if let Some(text) = element.text().filter(|text| !text.is_empty()) {
        xml.write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_error)?;
    }
    for child in &element.children {
        write_element(xml, child)?;
    }
    xml.write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(xml_error)
}

fn xml_error<E: std::fmt::Display>(error: E) -> OutputError {
    OutputError::Xml(error.to_string())
}

/// Write the sample set and the manifest under `dir`, creating it if needed.
///
/// Existing files are overwritten.
pub fn write_outputs(
    dir: &Path,
    records: &RecordDocument,
    manifest: &ManifestDocument,
) -> Result<OutputPaths> {
    let span = info_span!("write", output_dir = %dir.display());
    let _guard = span.enter();

    ensure_dir(dir)?;
    let samples = dir.join(SAMPLES_FILE);
    write_file(&samples, &serialize(records.root())?)?;
    let submission = write_document(dir, SUBMISSION_FILE, &manifest.to_element())?;
    info!(
        samples = %samples.display(),
        submission = %submission.display(),
        records = records.len(),
        "documents written"
    );
    Ok(OutputPaths {
        samples,
        submission,
    })
}

/// Write a release manifest as `release.xml` under `dir`.
///
/// Documents of an earlier sample run in the same directory are left alone.
pub fn write_release(dir: &Path, manifest: &ManifestDocument) -> Result<PathBuf> {
    write_document(dir, RELEASE_FILE, &manifest.to_element())
}

fn write_document(dir: &Path, file_name: &str, root: &XmlElement) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(file_name);
    write_file(&path, &serialize(root)?)?;
    Ok(path)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}
