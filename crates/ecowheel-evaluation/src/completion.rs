//! Completion metric
//!
//! Counts the entries the user scores directly at the active granularity
//! and how many of them hold a value other than `N/A`.

use crate::checklist::EvaluationChecklist;
use crate::levels::{EvaluationLevel, Granularity};
use ecowheel_catalog::{Catalog, CatalogRules, Strategy};
use serde::{Deserialize, Serialize};

/// Filled and applicable entry counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Entries holding a value other than `N/A`
    pub filled: usize,
    /// Entries scored at the active level
    pub total: usize,
}

impl Completion {
    /// Rounded percentage, 0 when there is nothing to score
    #[must_use]
    pub fn percentage(self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        let pct = (self.filled as f64 * 100.0 / self.total as f64).round() as u8;
        pct
    }

    fn merge(self, other: Self) -> Self {
        Self {
            filled: self.filled + other.filled,
            total: self.total + other.total,
        }
    }
}

/// Values entered directly for one strategy at the checklist's level
///
/// In detailed mode direct-entry sub-strategies count as one entry each in
/// place of their guidelines.
fn entered_values(
    checklist: &EvaluationChecklist,
    strategy: &Strategy,
    rules: &CatalogRules,
) -> Vec<EvaluationLevel> {
    match checklist.level {
        Granularity::Simplified => vec![checklist.strategy(strategy.id.as_str())],
        Granularity::Normal => strategy
            .sub_strategies
            .iter()
            .map(|s| checklist.sub_strategy(s.id.as_str()))
            .collect(),
        Granularity::Detailed => strategy
            .sub_strategies
            .iter()
            .flat_map(|s| {
                if rules.is_direct_entry(s.id.as_str()) {
                    vec![checklist.sub_strategy(s.id.as_str())]
                } else {
                    s.guidelines
                        .iter()
                        .map(|g| checklist.guideline(g.id.as_str()))
                        .collect()
                }
            })
            .collect(),
    }
}

/// Completion of one strategy
#[must_use]
pub fn strategy_completion(
    checklist: &EvaluationChecklist,
    strategy: &Strategy,
    rules: &CatalogRules,
) -> Completion {
    let values = entered_values(checklist, strategy, rules);
    Completion {
        filled: values.iter().filter(|v| v.is_applicable()).count(),
        total: values.len(),
    }
}

/// Completion of a whole checklist
#[must_use]
pub fn checklist_completion(
    checklist: &EvaluationChecklist,
    catalog: &Catalog,
    rules: &CatalogRules,
) -> Completion {
    catalog
        .strategies()
        .iter()
        .map(|s| strategy_completion(checklist, s, rules))
        .fold(Completion::default(), Completion::merge)
}
