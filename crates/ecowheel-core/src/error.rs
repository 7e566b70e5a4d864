//! Error types for the worksheet session
//!
//! Derivations never fail. Errors here come from:
//! - Catalog loading (when the caller asks for a strict load)
//! - Writes rejected by the evaluation stores
//! - Idea operations, some of which are advisory notices
//! - Configuration parsing

use ecowheel_catalog::CatalogError;
use ecowheel_evaluation::EvaluationError;
use ecowheel_ideas::IdeaError;

/// Main worksheet error type
#[derive(Debug, thiserror::Error)]
pub enum WorksheetError {
    /// Catalog could not be loaded
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Evaluation write rejected
    #[error("evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),

    /// Idea operation rejected
    #[error("idea error: {0}")]
    Idea(#[from] IdeaError),

    /// Configuration invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Snapshot could not be encoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WorksheetError {
    /// Advisory notices are shown to the user and never indicate a fault
    #[inline]
    #[must_use]
    pub fn is_advisory(&self) -> bool {
        matches!(self, Self::Idea(e) if e.is_advisory())
    }
}

/// Result alias for worksheet operations
pub type WorksheetResult<T> = Result<T, WorksheetError>;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML document could not be parsed
    #[error("invalid configuration document: {0}")]
    Parse(#[from] toml::de::Error),

    /// Arrow offset is negative or not a number
    #[error("arrow offset must be a non-negative number, got {0}")]
    InvalidArrowOffset(f64),
}
