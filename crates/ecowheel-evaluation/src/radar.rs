//! Radar derivation
//!
//! One scalar per (concept, strategy), aligned to catalog order. The
//! source of each scalar depends on the concept's granularity:
//!
//! - `Simplified`: the strategy grade
//! - `Normal`: mean of the sub-strategy grades
//! - `Detailed`: mean of every guideline answer under the strategy,
//!   skipping the sub-strategy layer entirely
//!
//! `N/A` values are dropped before averaging; no valid value yields 0.

use crate::aggregate::mean_score;
use crate::checklist::{EvaluationChecklist, EvaluationChecklists};
use crate::levels::{Concept, Granularity};
use ecowheel_catalog::{Catalog, Strategy, StrategyId};
use serde::{Deserialize, Serialize};

/// Average score of a strategy on the 0..=4 scale
#[must_use]
pub fn strategy_average(checklist: &EvaluationChecklist, strategy: &Strategy) -> f64 {
    let mean = match checklist.level {
        Granularity::Simplified => mean_score([checklist.strategy(strategy.id.as_str())]),
        Granularity::Normal => mean_score(
            strategy
                .sub_strategies
                .iter()
                .map(|s| checklist.sub_strategy(s.id.as_str())),
        ),
        Granularity::Detailed => mean_score(
            strategy
                .guidelines()
                .map(|g| checklist.guideline(g.id.as_str())),
        ),
    };
    mean.unwrap_or(0.0)
}

/// Average for a concept and strategy id; 0 for an unknown strategy
#[must_use]
pub fn calculate_strategy_average(
    checklists: &EvaluationChecklists,
    catalog: &Catalog,
    concept: Concept,
    strategy_id: &str,
) -> f64 {
    catalog
        .strategy(strategy_id)
        .map_or(0.0, |s| strategy_average(checklists.get(concept), s))
}

/// Axis label of the radar chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarAxis {
    /// Strategy id
    pub id: StrategyId,
    /// Strategy name
    pub name: String,
}

/// Values of one concept, aligned to [`RadarData::axes`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSeries {
    /// Concept the series belongs to
    pub concept: Concept,
    /// One value per axis
    pub values: Vec<f64>,
}

/// Both data series of the radar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarData {
    /// Axes in catalog order
    pub axes: Vec<RadarAxis>,
    /// Series per concept, A then B
    pub series: Vec<RadarSeries>,
}

impl RadarData {
    /// Series of a concept
    #[must_use]
    pub fn series_for(&self, concept: Concept) -> Option<&RadarSeries> {
        self.series.iter().find(|s| s.concept == concept)
    }
}

/// Derive the full radar data set
#[must_use]
pub fn radar_data(checklists: &EvaluationChecklists, catalog: &Catalog) -> RadarData {
    let axes = catalog
        .strategies()
        .iter()
        .map(|s| RadarAxis {
            id: s.id.clone(),
            name: s.name.clone(),
        })
        .collect();

    let series = Concept::ALL
        .iter()
        .map(|&concept| {
            let checklist = checklists.get(concept);
            RadarSeries {
                concept,
                values: catalog
                    .strategies()
                    .iter()
                    .map(|s| strategy_average(checklist, s))
                    .collect(),
            }
        })
        .collect();

    RadarData { axes, series }
}
