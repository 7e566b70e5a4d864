//! Ecowheel Core - worksheet session
//!
//! Ties the catalog, evaluation stores, idea board and layout math into one
//! session object that the rendering layer drives through discrete events.
//!
//! # Core Concepts
//!
//! - [`Worksheet`]: single owner of every store; each mutation recomputes
//!   its derived values before returning
//! - [`WorksheetConfig`]: placement, rules and exclusions, loadable from TOML
//! - [`ResultsSnapshot`]: JSON-ready read model of the results view
//! - [`Section`]: independently resettable parts of the worksheet
//!
//! # Example
//!
//! ```rust
//! use ecowheel_catalog::StrategyId;
//! use ecowheel_core::{Worksheet, WorksheetConfig};
//! use ecowheel_evaluation::{Concept, EvaluationLevel};
//!
//! let mut worksheet = Worksheet::new(WorksheetConfig::default());
//! worksheet.parse_catalog(
//!     "1.Materials\n1.1.Low impact\nAvoid toxics\n2.Usage\n2.1.Weight\nReduce mass\n",
//! );
//!
//! worksheet
//!     .set_strategy_evaluation(Concept::A, &StrategyId::new("2"), EvaluationLevel::Good)
//!     .unwrap();
//!
//! assert_eq!(worksheet.calculate_strategy_average(Concept::A, "2"), 3.0);
//! assert_eq!(worksheet.results().percentage(Concept::A), 50);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod error;
mod project;
mod snapshot;
mod worksheet;

pub use config::WorksheetConfig;
pub use error::{ConfigError, WorksheetError, WorksheetResult};
pub use project::{ConceptInfo, ProjectData};
pub use snapshot::{ConceptCompletion, ResultsSnapshot, StrategyPriority};
pub use worksheet::{Section, Worksheet};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
