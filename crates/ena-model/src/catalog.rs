//! Field constraints derived from a checklist definition.
//!
//! A checklist lists field descriptors, each with a name, a
//! mandatory/recommended/optional state and an optional unit declaration.
//! [`FieldCatalog`] folds those descriptors into the three views the rest of
//! the pipeline needs: which fields are mandatory, which are recommended, and
//! which carry units.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Requirement level declared by a checklist field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldRequirement {
    Mandatory,
    Recommended,
    Optional,
}

impl FieldRequirement {
    /// Parse the `MANDATORY` text of a descriptor. Unknown values are optional.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "mandatory" => Self::Mandatory,
            "recommended" => Self::Recommended,
            _ => Self::Optional,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mandatory => "mandatory",
            Self::Recommended => "recommended",
            Self::Optional => "optional",
        }
    }
}

/// One field of a checklist as published by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub requirement: FieldRequirement,
    /// True when the descriptor carries a `UNITS` block, even an empty one.
    pub declares_units: bool,
    /// First declared unit, if any.
    pub unit: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, requirement: FieldRequirement) -> Self {
        Self {
            name: name.into(),
            requirement,
            declares_units: false,
            unit: None,
        }
    }

    #[must_use]
    pub fn with_unit(mut self, unit: Option<String>) -> Self {
        self.declares_units = true;
        self.unit = unit;
        self
    }
}

/// Immutable field constraints for one checklist.
///
/// Every distinct descriptor name lands in exactly one of mandatory,
/// recommended or neither. When a name repeats, its first occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCatalog {
    checklist_id: String,
    name: Option<String>,
    mandatory: Vec<String>,
    recommended: Vec<String>,
    units: BTreeMap<String, Option<String>>,
    field_count: usize,
}

impl FieldCatalog {
    pub fn from_descriptors<I>(checklist_id: impl Into<String>, name: Option<String>, descriptors: I) -> Self
    where
        I: IntoIterator<Item = FieldDescriptor>,
    {
        let mut seen = BTreeSet::new();
        let mut mandatory = Vec::new();
        let mut recommended = Vec::new();
        let mut units = BTreeMap::new();

        for descriptor in descriptors {
            if !seen.insert(descriptor.name.clone()) {
                continue;
            }
            if descriptor.declares_units {
                units.insert(descriptor.name.clone(), descriptor.unit);
            }
            match descriptor.requirement {
                FieldRequirement::Mandatory => mandatory.push(descriptor.name),
                FieldRequirement::Recommended => recommended.push(descriptor.name),
                FieldRequirement::Optional => {}
            }
        }

        Self {
            checklist_id: checklist_id.into(),
            name,
            mandatory,
            recommended,
            units,
            field_count: seen.len(),
        }
    }

    pub fn checklist_id(&self) -> &str {
        &self.checklist_id
    }

    /// Descriptor name of the checklist, e.g. "ENA default sample checklist".
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Mandatory fields in descriptor order.
    pub fn mandatory(&self) -> &[String] {
        &self.mandatory
    }

    /// Recommended fields in descriptor order.
    pub fn recommended(&self) -> &[String] {
        &self.recommended
    }

    pub fn units(&self) -> &BTreeMap<String, Option<String>> {
        &self.units
    }

    /// Number of distinct field names in the checklist.
    pub fn field_count(&self) -> usize {
        self.field_count
    }

    pub fn requirement(&self, field: &str) -> FieldRequirement {
        if self.is_mandatory(field) {
            FieldRequirement::Mandatory
        } else if self.is_recommended(field) {
            FieldRequirement::Recommended
        } else {
            FieldRequirement::Optional
        }
    }

    pub fn is_mandatory(&self, field: &str) -> bool {
        self.mandatory.iter().any(|name| name == field)
    }

    pub fn is_recommended(&self, field: &str) -> bool {
        self.recommended.iter().any(|name| name == field)
    }

    /// Unit declared for a field.
    ///
    /// `None` when the field declares no units, `Some(None)` when it declares
    /// a units block without a unit text.
    pub fn unit_for(&self, field: &str) -> Option<Option<&str>> {
        self.units.get(field).map(Option::as_deref)
    }
}
