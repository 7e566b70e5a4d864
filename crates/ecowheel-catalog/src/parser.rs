//! Line-oriented catalog parser
//!
//! Three line shapes are recognised, checked in this order:
//! - `<int>.<int>.<name>` opens a sub-strategy under the current strategy
//! - `<int>.<name>` opens a strategy
//! - a line starting with a letter is a guideline of the open sub-strategy
//!
//! Anything else is ignored. Parsing never fails; malformed input just
//! yields fewer entries.

use crate::catalog::{Catalog, Guideline, Strategy, SubStrategy};
use crate::ids::{GuidelineId, StrategyId, SubStrategyId};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

static SUB_STRATEGY_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\.(\d+)\.\s*(\S.*)$").expect("valid regex"));

static STRATEGY_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\.\s*(\S.*)$").expect("valid regex"));

/// Guideline occurrences dropped from the parsed catalog
///
/// Keyed by sub-strategy id; values are 1-based positions of guideline
/// lines within that sub-strategy, counted before any removal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionTable {
    entries: BTreeMap<SubStrategyId, BTreeSet<usize>>,
}

impl ExclusionTable {
    /// Create empty table
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The exclusions shipped with the standard catalog document
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new().with_exclusions("7.7", [2, 5, 7, 8, 9])
    }

    /// Add excluded positions for a sub-strategy
    #[must_use]
    pub fn with_exclusions(
        mut self,
        sub_strategy: impl Into<SubStrategyId>,
        positions: impl IntoIterator<Item = usize>,
    ) -> Self {
        self.entries
            .entry(sub_strategy.into())
            .or_default()
            .extend(positions);
        self
    }

    /// Check whether the guideline at `position` under `sub_strategy` is dropped
    #[inline]
    #[must_use]
    pub fn is_excluded(&self, sub_strategy: &str, position: usize) -> bool {
        self.entries
            .get(sub_strategy)
            .is_some_and(|positions| positions.contains(&position))
    }

    /// Check if table is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Stateful top-to-bottom catalog parser
#[derive(Debug, Clone, Default)]
pub struct CatalogParser {
    exclusions: ExclusionTable,
}

/// Cursor over the strategy list being built
#[derive(Debug, Default)]
struct ParseState {
    strategies: Vec<Strategy>,
    sub_open: bool,
    position: usize,
}

impl ParseState {
    fn open_strategy(&mut self, number: &str, name: &str) {
        self.strategies.push(Strategy {
            id: StrategyId::new(number),
            name: name.trim().to_string(),
            sub_strategies: Vec::new(),
        });
        self.sub_open = false;
    }

    fn open_sub_strategy(&mut self, line_no: usize, strategy: &str, index: &str, name: &str) {
        self.sub_open = false;
        let id = SubStrategyId::child_of(&StrategyId::new(strategy), index);
        let Some(current) = self.strategies.last_mut() else {
            tracing::warn!(
                "Line {}: sub-strategy {} before any strategy, discarded",
                line_no,
                id
            );
            return;
        };
        if !id.belongs_to(current.id.as_str()) {
            tracing::warn!(
                "Line {}: sub-strategy {} outside strategy {}, discarded",
                line_no,
                id,
                current.id
            );
            return;
        }
        current.sub_strategies.push(SubStrategy {
            id,
            name: name.trim().to_string(),
            guidelines: Vec::new(),
        });
        self.sub_open = true;
        self.position = 0;
    }

    fn current_sub_strategy(&mut self) -> Option<&mut SubStrategy> {
        if !self.sub_open {
            return None;
        }
        self.strategies.last_mut()?.sub_strategies.last_mut()
    }
}

impl CatalogParser {
    /// Create parser with an exclusion table
    #[inline]
    #[must_use]
    pub fn new(exclusions: ExclusionTable) -> Self {
        Self { exclusions }
    }

    /// Parse a whole document
    #[must_use]
    pub fn parse(&self, text: &str) -> Catalog {
        let mut state = ParseState::default();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            let line_no = idx + 1;
            if line.is_empty() {
                continue;
            }

            if let Some(caps) = SUB_STRATEGY_LINE.captures(line) {
                state.open_sub_strategy(line_no, &caps[1], &caps[2], &caps[3]);
            } else if let Some(caps) = STRATEGY_LINE.captures(line) {
                state.open_strategy(&caps[1], &caps[2]);
            } else if line.starts_with(char::is_alphabetic) {
                self.push_guideline(&mut state, line_no, line);
            } else {
                tracing::debug!("Line {}: unrecognised shape, ignored", line_no);
            }
        }

        Catalog::new(state.strategies)
    }

    fn push_guideline(&self, state: &mut ParseState, line_no: usize, line: &str) {
        state.position += 1;
        let position = state.position;
        let Some(sub) = state.current_sub_strategy() else {
            tracing::debug!("Line {}: guideline outside any sub-strategy, discarded", line_no);
            return;
        };
        if self.exclusions.is_excluded(sub.id.as_str(), position) {
            return;
        }
        sub.guidelines.push(Guideline {
            id: GuidelineId::child_of(&sub.id, position),
            text: line.to_string(),
        });
    }
}
