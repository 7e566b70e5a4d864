//! Worksheet configuration

use crate::error::ConfigError;
use ecowheel_catalog::{CatalogRules, ExclusionTable};
use ecowheel_geometry::{Point, DEFAULT_LINE_OFFSET};
use ecowheel_ideas::{IdeaPlacement, StackingRule};
use serde::{Deserialize, Serialize};

/// Worksheet configuration
///
/// Every key is optional when read from TOML; missing keys take the
/// values of [`WorksheetConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorksheetConfig {
    /// Aliases, direct-priority strategies and direct-entry sub-strategies
    pub rules: CatalogRules,
    /// Guideline occurrences dropped when parsing the catalog
    pub exclusions: ExclusionTable,
    /// Default positions and the stacking rule for ideas
    pub placement: IdeaPlacement,
    /// Gap between a connector line and the shapes it joins
    pub arrow_offset: f64,
    /// Clear maps unused by the new level on a granularity switch
    pub clear_inactive_on_level_switch: bool,
}

impl WorksheetConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::InvalidArrowOffset`] for a negative or non-finite
    /// offset.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot constrain
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidArrowOffset`] for a negative or
    /// non-finite offset.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.arrow_offset.is_finite() || self.arrow_offset < 0.0 {
            return Err(ConfigError::InvalidArrowOffset(self.arrow_offset));
        }
        Ok(())
    }

    /// With catalog rules
    #[inline]
    #[must_use]
    pub fn with_rules(mut self, rules: CatalogRules) -> Self {
        self.rules = rules;
        self
    }

    /// With exclusion table
    #[inline]
    #[must_use]
    pub fn with_exclusions(mut self, exclusions: ExclusionTable) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// With idea placement
    #[inline]
    #[must_use]
    pub fn with_placement(mut self, placement: IdeaPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// With radar-idea default position
    #[inline]
    #[must_use]
    pub fn with_radar_default(mut self, at: Point) -> Self {
        self.placement.radar_default = at;
        self
    }

    /// With stacking rule; `None` disables stacking
    #[inline]
    #[must_use]
    pub fn with_stacking(mut self, rule: Option<StackingRule>) -> Self {
        self.placement.stacking = rule;
        self
    }

    /// With connector line offset
    #[inline]
    #[must_use]
    pub fn with_arrow_offset(mut self, offset: f64) -> Self {
        self.arrow_offset = offset;
        self
    }

    /// With clearing of inactive maps on level switch
    #[inline]
    #[must_use]
    pub fn with_clear_inactive_on_level_switch(mut self, clear: bool) -> Self {
        self.clear_inactive_on_level_switch = clear;
        self
    }
}

impl Default for WorksheetConfig {
    fn default() -> Self {
        Self {
            rules: CatalogRules::default(),
            exclusions: ExclusionTable::with_defaults(),
            placement: IdeaPlacement::default(),
            arrow_offset: DEFAULT_LINE_OFFSET,
            clear_inactive_on_level_switch: false,
        }
    }
}
