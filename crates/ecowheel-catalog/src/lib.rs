//! Ecowheel Strategy Catalog
//!
//! The fixed Strategy → SubStrategy → Guideline hierarchy the worksheet is
//! scored against.
//!
//! # Core Concepts
//!
//! - [`Catalog`]: ordered, read-only hierarchy loaded once per session
//! - [`StrategyId`] / [`SubStrategyId`] / [`GuidelineId`]: dotted ids whose
//!   prefixes encode ancestry
//! - [`CatalogParser`]: line-oriented document parser with an
//!   [`ExclusionTable`]
//! - [`CatalogRules`]: combined pairs, direct-priority strategies and
//!   direct-entry sub-strategies
//!
//! # Example
//!
//! ```rust
//! use ecowheel_catalog::{Catalog, ExclusionTable};
//!
//! let doc = "1.Materials\n1.1.Low impact\nAvoid toxics\n";
//! let catalog = Catalog::parse(doc, &ExclusionTable::new());
//! assert_eq!(catalog.guideline("1.1.1").unwrap().text, "Avoid toxics");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod catalog;
mod error;
mod ids;
mod parser;
mod rules;

pub use catalog::{Catalog, Guideline, Strategy, SubStrategy};
pub use error::CatalogError;
pub use ids::{GuidelineId, StrategyId, SubStrategyId};
pub use parser::{CatalogParser, ExclusionTable};
pub use rules::{AliasTable, CatalogRules, CombinedPair, PriorityRule};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
