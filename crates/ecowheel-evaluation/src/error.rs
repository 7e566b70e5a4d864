//! Error types for evaluation updates
//!
//! Derivations never fail; these errors only reject writes that do not
//! apply to the current state of a checklist or priority row.

use crate::levels::Granularity;
use ecowheel_catalog::StrategyId;

/// Rejected evaluation write
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    /// Entry is not scored at the active granularity
    #[error("{entry} is not scored at {active} granularity")]
    LevelNotApplicable {
        /// Entry id that was written
        entry: String,
        /// Granularity active when the write happened
        active: Granularity,
    },

    /// Strategy priority is derived from its sub-strategies
    #[error("priority of strategy {0} is derived from its sub-strategies")]
    DerivedPriority(StrategyId),
}

impl EvaluationError {
    /// Create level-not-applicable error
    pub fn level_not_applicable(entry: impl Into<String>, active: Granularity) -> Self {
        Self::LevelNotApplicable {
            entry: entry.into(),
            active,
        }
    }
}
