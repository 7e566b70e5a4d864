//! Testing utilities for the ecowheel workspace
//!
//! Shared fixtures: the seven-strategy catalog document and worksheets
//! prepared against it.

#![allow(missing_docs)]

use ecowheel_catalog::{Catalog, ExclusionTable};
use ecowheel_core::{Worksheet, WorksheetConfig};
use std::path::PathBuf;

/// The seven-strategy catalog document
pub const WHEEL_CATALOG: &str = include_str!("../fixtures/wheel.txt");

/// Strategy ids of [`WHEEL_CATALOG`] in document order
pub const WHEEL_STRATEGIES: [&str; 7] = ["1", "2", "3", "4", "5", "6", "7"];

/// Sub-strategy count of [`WHEEL_CATALOG`]
pub const WHEEL_SUB_STRATEGIES: usize = 26;

/// Guideline count of [`WHEEL_CATALOG`] after the default exclusions
pub const WHEEL_GUIDELINES: usize = 34;

/// Path of the catalog fixture on disk
pub fn wheel_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/wheel.txt")
}

/// Catalog parsed with the default exclusions
pub fn wheel_catalog() -> Catalog {
    Catalog::parse(WHEEL_CATALOG, &ExclusionTable::with_defaults())
}

/// Default-configured worksheet with the wheel catalog loaded
pub fn wheel_worksheet() -> Worksheet {
    wheel_worksheet_with(WorksheetConfig::default())
}

/// Worksheet with the wheel catalog loaded under a custom configuration
pub fn wheel_worksheet_with(config: WorksheetConfig) -> Worksheet {
    let mut worksheet = Worksheet::new(config);
    worksheet.parse_catalog(WHEEL_CATALOG);
    worksheet
}
