//! Per-concept evaluation checklists
//!
//! Each concept keeps three independent maps. Only the map(s) relevant to
//! the active [`Granularity`] are written by user action; the others keep
//! whatever they held before and are simply not read.

use crate::levels::{Concept, EvaluationLevel, Granularity};
use ecowheel_catalog::{GuidelineId, StrategyId, SubStrategyId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Checklist for one concept
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvaluationChecklist {
    /// Active granularity
    pub level: Granularity,
    /// Strategy grades
    pub strategies: BTreeMap<StrategyId, EvaluationLevel>,
    /// Sub-strategy grades
    pub sub_strategies: BTreeMap<SubStrategyId, EvaluationLevel>,
    /// Guideline answers
    pub guidelines: BTreeMap<GuidelineId, EvaluationLevel>,
}

impl EvaluationChecklist {
    /// Empty checklist at the given level
    #[inline]
    #[must_use]
    pub fn at_level(level: Granularity) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Strategy grade, `N/A` when absent
    #[inline]
    #[must_use]
    pub fn strategy(&self, id: &str) -> EvaluationLevel {
        self.strategies.get(id).copied().unwrap_or_default()
    }

    /// Sub-strategy grade, `N/A` when absent
    #[inline]
    #[must_use]
    pub fn sub_strategy(&self, id: &str) -> EvaluationLevel {
        self.sub_strategies.get(id).copied().unwrap_or_default()
    }

    /// Guideline answer, `N/A` when absent
    #[inline]
    #[must_use]
    pub fn guideline(&self, id: &str) -> EvaluationLevel {
        self.guidelines.get(id).copied().unwrap_or_default()
    }

    /// Drop the maps the given level never reads
    ///
    /// `Detailed` still reads sub-strategies (direct-entry ones and the
    /// derived display values), so only guidelines are cleared for the
    /// coarser levels.
    pub fn clear_inactive(&mut self) {
        match self.level {
            Granularity::Simplified => {
                self.sub_strategies.clear();
                self.guidelines.clear();
            }
            Granularity::Normal => self.guidelines.clear(),
            Granularity::Detailed => {}
        }
    }

    /// Check if nothing has been entered at all
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.strategies.is_empty() && self.sub_strategies.is_empty() && self.guidelines.is_empty()
    }
}

/// Checklists for both concepts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationChecklists {
    /// Concept A
    #[serde(rename = "A")]
    pub a: EvaluationChecklist,
    /// Concept B
    #[serde(rename = "B")]
    pub b: EvaluationChecklist,
}

impl EvaluationChecklists {
    /// Checklist of a concept
    #[inline]
    #[must_use]
    pub fn get(&self, concept: Concept) -> &EvaluationChecklist {
        match concept {
            Concept::A => &self.a,
            Concept::B => &self.b,
        }
    }

    /// Mutable checklist of a concept
    #[inline]
    pub fn get_mut(&mut self, concept: Concept) -> &mut EvaluationChecklist {
        match concept {
            Concept::A => &mut self.a,
            Concept::B => &mut self.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entries_default_to_not_applicable() {
        let checklist = EvaluationChecklist::default();
        assert_eq!(checklist.strategy("1"), EvaluationLevel::NotApplicable);
        assert_eq!(checklist.sub_strategy("1.1"), EvaluationLevel::NotApplicable);
        assert_eq!(checklist.guideline("1.1.1"), EvaluationLevel::NotApplicable);
    }

    #[test]
    fn clear_inactive_keeps_maps_read_by_level() {
        let mut checklist = EvaluationChecklist::at_level(Granularity::Normal);
        checklist.strategies.insert("1".into(), EvaluationLevel::Good);
        checklist.sub_strategies.insert("1.1".into(), EvaluationLevel::Good);
        checklist.guidelines.insert("1.1.1".into(), EvaluationLevel::Yes);

        checklist.clear_inactive();
        assert!(checklist.guidelines.is_empty());
        assert_eq!(checklist.sub_strategy("1.1"), EvaluationLevel::Good);
        assert_eq!(checklist.strategy("1"), EvaluationLevel::Good);

        checklist.level = Granularity::Simplified;
        checklist.clear_inactive();
        assert!(checklist.sub_strategies.is_empty());
        assert!(!checklist.is_blank());
    }

    #[test]
    fn concept_accessors() {
        let mut checklists = EvaluationChecklists::default();
        checklists.get_mut(Concept::B).level = Granularity::Detailed;
        assert_eq!(checklists.get(Concept::A).level, Granularity::Simplified);
        assert_eq!(checklists.b.level, Granularity::Detailed);
    }

    #[test]
    fn json_shape() {
        let mut checklists = EvaluationChecklists::default();
        checklists.a.sub_strategies.insert("2.1".into(), EvaluationLevel::Mediocre);
        let json = serde_json::to_value(&checklists).unwrap();
        assert_eq!(json["A"]["level"], "Simplified");
        assert_eq!(json["A"]["subStrategies"]["2.1"], "Mediocre");
        assert!(json["B"]["guidelines"].as_object().unwrap().is_empty());
    }
}
