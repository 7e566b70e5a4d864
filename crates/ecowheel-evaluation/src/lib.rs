//! Ecowheel Evaluation Engine
//!
//! Evaluation stores and the pure derivations computed from them.
//!
//! # Core Concepts
//!
//! - [`EvaluationChecklists`]: per-concept checklists with three
//!   independent maps (strategies, sub-strategies, guidelines)
//! - [`QualitativeEvaluation`]: priorities and free-text answers, with
//!   combined sub-strategy pairs folded through the alias table
//! - Aggregation: [`calculate_aggregate_evaluation`] and the bottom-up
//!   cascade run by the `set_*_evaluation` functions
//! - [`strategy_priority_for_display`]: direct or derived priority
//! - [`checklist_completion`]: share of entries answered at the active level
//! - [`radar_data`]: per-concept radar series in catalog order
//!
//! # Example
//!
//! ```rust
//! use ecowheel_evaluation::{calculate_aggregate_evaluation, EvaluationLevel};
//!
//! let grade = calculate_aggregate_evaluation([
//!     EvaluationLevel::Excellent,
//!     EvaluationLevel::Excellent,
//!     EvaluationLevel::Poor,
//! ]);
//! assert_eq!(grade, EvaluationLevel::Good);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod aggregate;
mod checklist;
mod completion;
mod error;
mod levels;
mod priority;
mod qualitative;
mod radar;

pub use aggregate::{
    calculate_aggregate_evaluation, mean_score, recalculate, recompute_strategy,
    recompute_sub_strategy, set_guideline_evaluation, set_strategy_evaluation,
    set_sub_strategy_evaluation,
};
pub use checklist::{EvaluationChecklist, EvaluationChecklists};
pub use completion::{checklist_completion, strategy_completion, Completion};
pub use error::EvaluationError;
pub use levels::{Concept, EvaluationLevel, Granularity, PriorityLevel};
pub use priority::{display_priorities, strategy_priority_for_display};
pub use qualitative::{QualitativeEvaluation, StrategyQualitative, SubStrategyAnswer};
pub use radar::{
    calculate_strategy_average, radar_data, strategy_average, RadarAxis, RadarData, RadarSeries,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
