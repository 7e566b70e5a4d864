//! Fixed hierarchy rules layered over the catalog content
//!
//! - [`AliasTable`]: combined sub-strategy pairs sharing one priority entry
//! - [`CatalogRules`]: alias table plus which strategies carry their own
//!   priority and which sub-strategies are scored directly in detailed mode
//!
//! Every read and write of a combined pair goes through [`AliasTable`] so
//! the qualitative form and the display priority always agree.

use crate::catalog::{Strategy, SubStrategy};
use crate::ids::{StrategyId, SubStrategyId};
use serde::{Deserialize, Serialize};

/// A combined sub-strategy pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedPair {
    /// Id that owns the shared entry
    pub primary: SubStrategyId,
    /// Id whose entry is never written
    pub secondary: SubStrategyId,
}

/// Alias table for combined sub-strategy pairs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    pairs: Vec<CombinedPair>,
}

impl AliasTable {
    /// Create empty table
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard pairs `1.4`/`1.5` and `2.2`/`2.3`
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new().with_pair("1.4", "1.5").with_pair("2.2", "2.3")
    }

    /// Register a combined pair
    #[must_use]
    pub fn with_pair(mut self, primary: &str, secondary: &str) -> Self {
        self.pairs.push(CombinedPair {
            primary: SubStrategyId::new(primary),
            secondary: SubStrategyId::new(secondary),
        });
        self
    }

    /// Resolve an id to the id that owns its entry
    #[must_use]
    pub fn resolve<'a>(&'a self, id: &'a str) -> &'a str {
        self.pairs
            .iter()
            .find(|p| p.secondary.as_str() == id)
            .map_or(id, |p| p.primary.as_str())
    }

    /// Check whether `id` is the secondary half of a pair
    #[inline]
    #[must_use]
    pub fn is_secondary(&self, id: &str) -> bool {
        self.pairs.iter().any(|p| p.secondary.as_str() == id)
    }

    /// Sub-strategies of `strategy` with secondary ids folded away
    ///
    /// Order follows the catalog. These are the rows of the qualitative
    /// form and the inputs to the derived display priority.
    #[must_use]
    pub fn qualitative_rows<'s>(&self, strategy: &'s Strategy) -> Vec<&'s SubStrategy> {
        strategy
            .sub_strategies
            .iter()
            .filter(|s| !self.is_secondary(s.id.as_str()))
            .collect()
    }
}

/// How a strategy obtains its display priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityRule {
    /// Strategy-level priority is set by the user
    Direct,
    /// Maximum of its sub-strategy priorities
    Derived,
}

/// Hierarchy rules consulted by the evaluation engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogRules {
    /// Combined sub-strategy pairs
    pub aliases: AliasTable,
    /// Strategies whose priority is set directly
    pub direct_priority_strategies: Vec<StrategyId>,
    /// Sub-strategies scored directly even in detailed mode
    pub direct_entry_sub_strategies: Vec<SubStrategyId>,
}

impl Default for CatalogRules {
    fn default() -> Self {
        Self {
            aliases: AliasTable::with_defaults(),
            direct_priority_strategies: ["5", "6", "7"].map(StrategyId::new).to_vec(),
            direct_entry_sub_strategies: ["7.7", "7.8"].map(SubStrategyId::new).to_vec(),
        }
    }
}

impl CatalogRules {
    /// Rules with no aliases and no special strategies
    #[must_use]
    pub fn plain() -> Self {
        Self {
            aliases: AliasTable::new(),
            direct_priority_strategies: Vec::new(),
            direct_entry_sub_strategies: Vec::new(),
        }
    }

    /// Priority rule for a strategy
    #[must_use]
    pub fn priority_rule(&self, strategy: &str) -> PriorityRule {
        if self
            .direct_priority_strategies
            .iter()
            .any(|s| s.as_str() == strategy)
        {
            PriorityRule::Direct
        } else {
            PriorityRule::Derived
        }
    }

    /// Check whether a sub-strategy is scored directly in detailed mode
    #[inline]
    #[must_use]
    pub fn is_direct_entry(&self, sub_strategy: &str) -> bool {
        self.direct_entry_sub_strategies
            .iter()
            .any(|s| s.as_str() == sub_strategy)
    }
}
