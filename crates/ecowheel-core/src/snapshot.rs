//! Read model for the results view

use crate::error::WorksheetResult;
use crate::project::ProjectData;
use ecowheel_catalog::StrategyId;
use ecowheel_evaluation::{Completion, Concept, Granularity, PriorityLevel, RadarData};
use ecowheel_ideas::RadarIdea;
use serde::{Deserialize, Serialize};

/// Display priority of one strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyPriority {
    /// Strategy id
    pub strategy_id: StrategyId,
    /// Effective priority
    pub priority: PriorityLevel,
}

/// Completion of one concept's checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptCompletion {
    /// Concept
    pub concept: Concept,
    /// Legend label taken from the project header
    pub label: String,
    /// Active granularity the counts refer to
    pub level: Granularity,
    /// Raw counts
    pub completion: Completion,
    /// Rounded percentage
    pub percentage: u8,
}

/// Everything the results view renders, derived in one pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsSnapshot {
    /// Project header
    pub project: ProjectData,
    /// Radar axes and both concept series
    pub radar: RadarData,
    /// Display priority per strategy, in catalog order
    pub priorities: Vec<StrategyPriority>,
    /// Completion per concept
    pub completion: Vec<ConceptCompletion>,
    /// Confirmed ideas placed on the results view
    pub radar_ideas: Vec<RadarIdea>,
    /// Layout epoch the snapshot was taken at
    pub layout_epoch: u64,
}

impl ResultsSnapshot {
    /// Display priority of a strategy, `None` if unknown
    #[must_use]
    pub fn priority(&self, strategy_id: &str) -> PriorityLevel {
        self.priorities
            .iter()
            .find(|p| p.strategy_id.as_str() == strategy_id)
            .map_or(PriorityLevel::None, |p| p.priority)
    }

    /// Completion percentage of a concept
    #[must_use]
    pub fn percentage(&self, concept: Concept) -> u8 {
        self.completion
            .iter()
            .find(|c| c.concept == concept)
            .map_or(0, |c| c.percentage)
    }

    /// Encode as JSON for the rendering layer
    ///
    /// # Errors
    /// Returns [`crate::WorksheetError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> WorksheetResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
