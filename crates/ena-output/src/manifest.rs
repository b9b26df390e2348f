//! `SUBMISSION` manifests.

use chrono::NaiveDate;

use crate::element::XmlElement;

/// Date format of `HoldUntilDate`.
const HOLD_DATE_FORMAT: &str = "%Y-%m-%d";

/// One `ACTION` of a submission manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestAction {
    /// Register the accompanying documents.
    Add,
    /// Update previously registered objects.
    Modify,
    /// Keep the submitted objects private until the given date.
    Hold { until: NaiveDate },
    /// Make a held object public.
    Release { target: String },
}

impl ManifestAction {
    fn to_element(&self) -> XmlElement {
        let inner = match self {
            Self::Add => XmlElement::new("ADD"),
            Self::Modify => XmlElement::new("MODIFY"),
            Self::Hold { until } => XmlElement::new("HOLD")
                .with_attribute("HoldUntilDate", until.format(HOLD_DATE_FORMAT).to_string()),
            Self::Release { target } => XmlElement::new("RELEASE").with_attribute("target", target),
        };
        XmlElement::new("ACTION").with_child(inner)
    }
}

/// Fixed-shape submission manifest, independent of the sample data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestDocument {
    actions: Vec<ManifestAction>,
}

impl ManifestDocument {
    /// Manifest adding new objects.
    pub fn add() -> Self {
        Self {
            actions: vec![ManifestAction::Add],
        }
    }

    /// Manifest releasing one held accession.
    pub fn release(target: impl Into<String>) -> Self {
        Self {
            actions: vec![
                ManifestAction::Modify,
                ManifestAction::Release {
                    target: target.into(),
                },
            ],
        }
    }

    #[must_use]
    pub fn with_hold(mut self, until: NaiveDate) -> Self {
        self.actions.push(ManifestAction::Hold { until });
        self
    }

    pub fn actions(&self) -> &[ManifestAction] {
        &self.actions
    }

    pub fn to_element(&self) -> XmlElement {
        let mut actions = XmlElement::new("ACTIONS");
        for action in &self.actions {
            actions.push(action.to_element());
        }
        XmlElement::new("SUBMISSION").with_child(actions)
    }
}

impl Default for ManifestDocument {
    fn default() -> Self {
        Self::add()
    }
}
