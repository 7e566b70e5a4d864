//! Project data section

use chrono::NaiveDate;
use ecowheel_evaluation::Concept;
use serde::{Deserialize, Serialize};

/// Name and description of one design concept
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConceptInfo {
    /// Short name shown in the chart legend
    pub name: String,
    /// Free-text description
    pub description: String,
}

/// Header information of a worksheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectData {
    /// Project name
    pub name: String,
    /// Company or organisation
    pub company: String,
    /// Designer filling in the worksheet
    pub designer: String,
    /// Worksheet date
    pub date: Option<NaiveDate>,
    /// Project description
    pub description: String,
    /// Concept A
    pub concept_a: ConceptInfo,
    /// Concept B
    pub concept_b: ConceptInfo,
}

impl ProjectData {
    /// Create empty project data
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With project name
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// With date
    #[inline]
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// With concept name and description
    #[must_use]
    pub fn with_concept(
        mut self,
        concept: Concept,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        *self.concept_mut(concept) = ConceptInfo {
            name: name.into(),
            description: description.into(),
        };
        self
    }

    /// Info of a concept
    #[inline]
    #[must_use]
    pub fn concept(&self, concept: Concept) -> &ConceptInfo {
        match concept {
            Concept::A => &self.concept_a,
            Concept::B => &self.concept_b,
        }
    }

    /// Mutable info of a concept
    #[inline]
    pub fn concept_mut(&mut self, concept: Concept) -> &mut ConceptInfo {
        match concept {
            Concept::A => &mut self.concept_a,
            Concept::B => &mut self.concept_b,
        }
    }

    /// Legend label of a concept, falling back to "Concept A"/"Concept B"
    #[must_use]
    pub fn concept_label(&self, concept: Concept) -> String {
        let name = self.concept(concept).name.trim();
        if name.is_empty() {
            format!("Concept {concept}")
        } else {
            name.to_string()
        }
    }

    /// Check if nothing has been entered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
