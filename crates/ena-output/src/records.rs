//! `SAMPLE_SET` construction.

use tracing::{debug, info_span};

use ena_model::{
    CENTER_NAME, CHECKLIST_ATTRIBUTE, COMMON_NAME, FieldCatalog, Record, SAMPLE_ALIAS,
    SAMPLE_TITLE, SCIENTIFIC_NAME, TAX_ID, TabularDataset, is_blank, is_required_field,
};

use crate::element::XmlElement;

/// One `SAMPLE` element per dataset row, in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDocument {
    root: XmlElement,
}

impl RecordDocument {
    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    pub fn records(&self) -> &[XmlElement] {
        &self.root.children
    }

    pub fn len(&self) -> usize {
        self.root.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Sample aliases in document order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.records()
            .iter()
            .map(|sample| sample.attribute("alias").unwrap_or(""))
    }
}

/// Build the sample set for a validated dataset.
///
/// Columns are emitted in input order. Required columns feed the `SAMPLE`
/// header and `SAMPLE_NAME` instead of becoming attributes; every other
/// column, `center name` and `common name` included, becomes an attribute
/// unless blank.
pub fn build(
    dataset: &TabularDataset,
    catalog: &FieldCatalog,
    checklist_id: &str,
    center_default: Option<&str>,
) -> RecordDocument {
    let span = info_span!("build", checklist_id = %checklist_id, row_count = dataset.row_count());
    let _guard = span.enter();

    let mut root = XmlElement::new("SAMPLE_SET");
    for record in dataset.records() {
        root.push(build_sample(record, catalog, checklist_id, center_default));
    }
    debug!(samples = root.children.len(), "sample set built");
    RecordDocument { root }
}

fn build_sample(
    record: Record<'_>,
    catalog: &FieldCatalog,
    checklist_id: &str,
    center_default: Option<&str>,
) -> XmlElement {
    let mut sample = XmlElement::new("SAMPLE").with_attribute("alias", identity(record, SAMPLE_ALIAS));
    let center = record
        .value(CENTER_NAME)
        .or(center_default.filter(|center| !is_blank(center)));
    if let Some(center) = center {
        sample = sample.with_attribute("center_name", center);
    }

    sample.push(XmlElement::text_element("TITLE", identity(record, SAMPLE_TITLE)));

    let mut name = XmlElement::new("SAMPLE_NAME")
        .with_child(XmlElement::text_element("TAXON_ID", identity(record, TAX_ID)))
        .with_child(XmlElement::text_element(
            "SCIENTIFIC_NAME",
            identity(record, SCIENTIFIC_NAME),
        ));
    if record.get(COMMON_NAME).is_some() {
        name.push(XmlElement::text_element("COMMON_NAME", identity(record, COMMON_NAME)));
    }
    sample.push(name);

    let mut attributes = XmlElement::new("SAMPLE_ATTRIBUTES");
    if let Some(attribute) = sample_attribute(catalog, CHECKLIST_ATTRIBUTE, checklist_id) {
        attributes.push(attribute);
    }
    for (column, value) in record.iter() {
        if is_required_field(column) || column == CHECKLIST_ATTRIBUTE {
            continue;
        }
        if let Some(attribute) = sample_attribute(catalog, column, value) {
            attributes.push(attribute);
        }
    }
    if !attributes.children.is_empty() {
        sample.push(attributes);
    }
    sample
}

/// Identity text, empty when the column is absent or blank.
fn identity<'a>(record: Record<'a>, column: &str) -> &'a str {
    record.value(column).unwrap_or("")
}

fn sample_attribute(catalog: &FieldCatalog, tag: &str, value: &str) -> Option<XmlElement> {
    if is_blank(value) {
        return None;
    }
    let mut attribute = XmlElement::new("SAMPLE_ATTRIBUTE")
        .with_child(XmlElement::text_element("TAG", tag))
        .with_child(XmlElement::text_element("VALUE", value));
    if let Some(unit) = catalog.unit_for(tag) {
        attribute.push(XmlElement::text_element("UNITS", unit.unwrap_or("")));
    }
    Some(attribute)
}
