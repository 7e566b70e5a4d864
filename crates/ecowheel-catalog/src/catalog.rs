//! The strategy hierarchy
//!
//! Strategy → SubStrategy → Guideline, ordered as in the source document.
//! Read-only once built.

use crate::error::CatalogError;
use crate::ids::{GuidelineId, StrategyId, SubStrategyId};
use crate::parser::{CatalogParser, ExclusionTable};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Leaf checklist item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guideline {
    /// Dotted id, `<sub>.<position>`
    pub id: GuidelineId,
    /// Guideline text
    pub text: String,
}

/// Middle level of the hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubStrategy {
    /// Dotted id, `<strategy>.<n>`
    pub id: SubStrategyId,
    /// Display name
    pub name: String,
    /// Guidelines in document order
    pub guidelines: Vec<Guideline>,
}

/// Top level of the hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    /// Single-segment id
    pub id: StrategyId,
    /// Display name
    pub name: String,
    /// Sub-strategies in document order
    pub sub_strategies: Vec<SubStrategy>,
}

impl Strategy {
    /// Iterate every guideline across all sub-strategies
    pub fn guidelines(&self) -> impl Iterator<Item = &Guideline> {
        self.sub_strategies.iter().flat_map(|s| s.guidelines.iter())
    }

    /// Find a sub-strategy of this strategy
    #[must_use]
    pub fn sub_strategy(&self, id: &str) -> Option<&SubStrategy> {
        self.sub_strategies.iter().find(|s| s.id.as_str() == id)
    }
}

/// Ordered strategy catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    strategies: Vec<Strategy>,
}

impl Catalog {
    /// Build a catalog from already-assembled strategies
    #[inline]
    #[must_use]
    pub fn new(strategies: Vec<Strategy>) -> Self {
        Self { strategies }
    }

    /// Catalog with nothing to display yet
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the line-oriented catalog document
    #[must_use]
    pub fn parse(text: &str, exclusions: &ExclusionTable) -> Self {
        CatalogParser::new(exclusions.clone()).parse(text)
    }

    /// Read and parse a catalog document from disk
    ///
    /// # Errors
    /// Returns [`CatalogError::Io`] if the file cannot be read.
    pub fn load(path: impl AsRef<Path>, exclusions: &ExclusionTable) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| CatalogError::io_error(path, e))?;
        let catalog = Self::parse(&text, exclusions);
        tracing::info!(
            "Loaded catalog from {}: {} strategies, {} guidelines",
            path.display(),
            catalog.len(),
            catalog.guideline_count()
        );
        Ok(catalog)
    }

    /// Like [`Catalog::load`], but a failed read yields an empty catalog
    #[must_use]
    pub fn load_or_empty(path: impl AsRef<Path>, exclusions: &ExclusionTable) -> Self {
        match Self::load(path, exclusions) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!("Catalog load failed, continuing with empty catalog: {}", e);
                Self::empty()
            }
        }
    }

    /// Strategies in catalog order
    #[inline]
    #[must_use]
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Number of strategies
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Check if nothing was loaded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Strategy ids in catalog order
    pub fn strategy_ids(&self) -> impl Iterator<Item = &StrategyId> {
        self.strategies.iter().map(|s| &s.id)
    }

    /// Find strategy by id
    #[must_use]
    pub fn strategy(&self, id: &str) -> Option<&Strategy> {
        self.strategies.iter().find(|s| s.id.as_str() == id)
    }

    /// Find sub-strategy by id, searching only its owning strategy
    #[must_use]
    pub fn sub_strategy(&self, id: &str) -> Option<&SubStrategy> {
        let owner = SubStrategyId::new(id).strategy_id();
        self.strategy(owner.as_str())?.sub_strategy(id)
    }

    /// Find guideline by id
    #[must_use]
    pub fn guideline(&self, id: &str) -> Option<&Guideline> {
        let owner = GuidelineId::new(id).sub_strategy_id();
        self.sub_strategy(owner.as_str())?
            .guidelines
            .iter()
            .find(|g| g.id.as_str() == id)
    }

    /// Iterate every sub-strategy in catalog order
    pub fn sub_strategies(&self) -> impl Iterator<Item = &SubStrategy> {
        self.strategies.iter().flat_map(|s| s.sub_strategies.iter())
    }

    /// Iterate every guideline in catalog order
    pub fn guidelines(&self) -> impl Iterator<Item = &Guideline> {
        self.strategies.iter().flat_map(Strategy::guidelines)
    }

    /// Total sub-strategy count
    #[must_use]
    pub fn sub_strategy_count(&self) -> usize {
        self.sub_strategies().count()
    }

    /// Total guideline count
    #[must_use]
    pub fn guideline_count(&self) -> usize {
        self.guidelines().count()
    }
}
