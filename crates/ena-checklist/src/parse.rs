//! Checklist document parsing.
//!
//! Only the parts of the registry document the pipeline needs are modelled;
//! labels, descriptions, value types and regexes are skipped.

use serde::Deserialize;

use ena_model::{FieldCatalog, FieldDescriptor, FieldRequirement};

use crate::error::{ChecklistError, Result};

#[derive(Debug, Deserialize)]
struct ChecklistSetXml {
    #[serde(rename = "CHECKLIST", default)]
    checklists: Vec<ChecklistXml>,
}

#[derive(Debug, Deserialize)]
struct ChecklistXml {
    #[serde(rename = "DESCRIPTOR")]
    descriptor: DescriptorXml,
}

#[derive(Debug, Deserialize)]
struct DescriptorXml {
    #[serde(rename = "NAME", default)]
    name: Option<String>,
    #[serde(rename = "FIELD_GROUP", default)]
    groups: Vec<FieldGroupXml>,
    #[serde(rename = "FIELD", default)]
    fields: Vec<FieldXml>,
}

#[derive(Debug, Deserialize)]
struct FieldGroupXml {
    #[serde(rename = "FIELD", default)]
    fields: Vec<FieldXml>,
}

#[derive(Debug, Deserialize)]
struct FieldXml {
    #[serde(rename = "NAME")]
    name: String,
    #[serde(rename = "MANDATORY", default)]
    mandatory: Option<String>,
    #[serde(rename = "UNITS", default)]
    units: Option<UnitsXml>,
}

#[derive(Debug, Deserialize)]
struct UnitsXml {
    #[serde(rename = "UNIT", default)]
    units: Vec<String>,
}

impl FieldXml {
    fn into_descriptor(self) -> FieldDescriptor {
        let requirement = self
            .mandatory
            .as_deref()
            .map_or(FieldRequirement::Optional, FieldRequirement::parse);
        let descriptor = FieldDescriptor::new(self.name.trim(), requirement);
        match self.units {
            Some(units) => {
                let unit = units.units.into_iter().next();
                descriptor.with_unit(unit)
            }
            None => descriptor,
        }
    }
}

/// Parse a checklist document into a field catalog.
///
/// Fields are collected from every field group of the first checklist, in
/// document order. A document without any field descriptor is rejected.
pub fn parse_checklist(checklist_id: &str, body: &str) -> Result<FieldCatalog> {
    let parse_error = |message: String| ChecklistError::Parse {
        checklist_id: checklist_id.to_string(),
        message,
    };

    let set: ChecklistSetXml =
        quick_xml::de::from_str(body).map_err(|e| parse_error(e.to_string()))?;
    let checklist = set
        .checklists
        .into_iter()
        .next()
        .ok_or_else(|| parse_error("no CHECKLIST element".to_string()))?;

    let DescriptorXml {
        name,
        groups,
        fields,
    } = checklist.descriptor;
    let descriptors: Vec<FieldDescriptor> = groups
        .into_iter()
        .flat_map(|group| group.fields)
        .chain(fields)
        .map(FieldXml::into_descriptor)
        .collect();
    if descriptors.is_empty() {
        return Err(parse_error("no FIELD descriptors".to_string()));
    }

    let name = name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());
    Ok(FieldCatalog::from_descriptors(checklist_id, name, descriptors))
}
