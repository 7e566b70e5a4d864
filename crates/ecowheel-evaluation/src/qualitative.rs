//! Qualitative priorities per strategy and sub-strategy
//!
//! Sub-strategy entries are always stored under the id the
//! [`AliasTable`] resolves to, so the secondary half of a combined pair is
//! never written.

use crate::error::EvaluationError;
use crate::levels::PriorityLevel;
use ecowheel_catalog::{AliasTable, CatalogRules, PriorityRule, StrategyId, SubStrategyId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Priority and free-text answer for one qualitative row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubStrategyAnswer {
    /// Priority chosen for the row
    pub priority: PriorityLevel,
    /// Free-text answer
    pub free_text_answer: String,
}

/// Qualitative data for one strategy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrategyQualitative {
    /// Directly set priority; only meaningful for direct-priority strategies
    pub priority: PriorityLevel,
    /// Rows keyed by (primary) sub-strategy id
    pub sub_strategies: BTreeMap<SubStrategyId, SubStrategyAnswer>,
}

/// Qualitative evaluation store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualitativeEvaluation {
    strategies: BTreeMap<StrategyId, StrategyQualitative>,
}

impl QualitativeEvaluation {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw entry for a strategy
    #[inline]
    #[must_use]
    pub fn strategy(&self, id: &str) -> Option<&StrategyQualitative> {
        self.strategies.get(id)
    }

    /// The strategy's own priority field, `None` when absent
    #[must_use]
    pub fn strategy_priority(&self, id: &str) -> PriorityLevel {
        self.strategies
            .get(id)
            .map(|s| s.priority)
            .unwrap_or_default()
    }

    /// Row entry for a sub-strategy, resolving combined pairs
    #[must_use]
    pub fn sub_strategy(&self, id: &str, aliases: &AliasTable) -> Option<&SubStrategyAnswer> {
        let resolved = SubStrategyId::new(aliases.resolve(id));
        self.strategies
            .get(resolved.strategy_id().as_str())?
            .sub_strategies
            .get(resolved.as_str())
    }

    /// Row priority for a sub-strategy, `None` when absent
    #[must_use]
    pub fn sub_strategy_priority(&self, id: &str, aliases: &AliasTable) -> PriorityLevel {
        self.sub_strategy(id, aliases)
            .map(|a| a.priority)
            .unwrap_or_default()
    }

    /// Set the strategy-level priority
    ///
    /// # Errors
    /// Returns [`EvaluationError::DerivedPriority`] for strategies whose
    /// priority is derived from their sub-strategies.
    pub fn set_strategy_priority(
        &mut self,
        id: &StrategyId,
        priority: PriorityLevel,
        rules: &CatalogRules,
    ) -> Result<(), EvaluationError> {
        if rules.priority_rule(id.as_str()) == PriorityRule::Derived {
            return Err(EvaluationError::DerivedPriority(id.clone()));
        }
        self.strategies.entry(id.clone()).or_default().priority = priority;
        Ok(())
    }

    /// Write a row, redirecting secondary ids to their primary
    pub fn set_sub_strategy(&mut self, id: &str, answer: SubStrategyAnswer, aliases: &AliasTable) {
        let resolved = SubStrategyId::new(aliases.resolve(id));
        self.strategies
            .entry(resolved.strategy_id())
            .or_default()
            .sub_strategies
            .insert(resolved, answer);
    }

    /// Update only the priority of a row
    pub fn set_sub_strategy_priority(
        &mut self,
        id: &str,
        priority: PriorityLevel,
        aliases: &AliasTable,
    ) {
        let mut answer = self.sub_strategy(id, aliases).cloned().unwrap_or_default();
        answer.priority = priority;
        self.set_sub_strategy(id, answer, aliases);
    }

    /// Update only the free-text answer of a row
    pub fn set_sub_strategy_answer(
        &mut self,
        id: &str,
        text: impl Into<String>,
        aliases: &AliasTable,
    ) {
        let mut answer = self.sub_strategy(id, aliases).cloned().unwrap_or_default();
        answer.free_text_answer = text.into();
        self.set_sub_strategy(id, answer, aliases);
    }

    /// Check if nothing has been entered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
