//! Idea board store
//!
//! Owns the primary idea collection. Ideas keep their creation order;
//! positions and text are edited freely and confirmation is an explicit
//! step.

use crate::error::IdeaError;
use crate::idea::{Idea, IdeaId, IdeaPlacement};
use ecowheel_catalog::StrategyId;
use ecowheel_geometry::Point;
use indexmap::IndexMap;

/// Mutable collection of ideas plus the current strategy selection
#[derive(Debug, Clone, Default)]
pub struct IdeaBoard {
    ideas: IndexMap<IdeaId, Idea>,
    selected_strategy: Option<StrategyId>,
    placement: IdeaPlacement,
}

impl IdeaBoard {
    /// Create empty board with default placement
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create empty board with custom placement
    #[inline]
    #[must_use]
    pub fn with_placement(placement: IdeaPlacement) -> Self {
        Self {
            placement,
            ..Self::default()
        }
    }

    /// Placement defaults in use
    #[inline]
    #[must_use]
    pub fn placement(&self) -> &IdeaPlacement {
        &self.placement
    }

    /// Select the strategy new ideas attach to
    pub fn select_strategy(&mut self, strategy: Option<StrategyId>) {
        self.selected_strategy = strategy;
    }

    /// Currently selected strategy
    #[inline]
    #[must_use]
    pub fn selected_strategy(&self) -> Option<&StrategyId> {
        self.selected_strategy.as_ref()
    }

    /// Create an idea attached to the selected strategy
    ///
    /// # Errors
    /// Returns [`IdeaError::NoStrategySelected`] if nothing is selected.
    pub fn add_idea(&mut self, text: impl Into<String>) -> Result<IdeaId, IdeaError> {
        let strategy = self
            .selected_strategy
            .clone()
            .ok_or(IdeaError::NoStrategySelected)?;
        Ok(self.add_idea_for(strategy, text))
    }

    /// Create an idea attached to an explicit strategy
    pub fn add_idea_for(&mut self, strategy: StrategyId, text: impl Into<String>) -> IdeaId {
        let idea = Idea::new(strategy, text, self.placement.new_idea);
        let id = idea.id;
        self.insert(idea);
        id
    }

    /// Insert a fully formed idea, replacing any idea with the same id
    pub fn insert(&mut self, idea: Idea) {
        tracing::debug!("Idea {} added to strategy {}", idea.id, idea.strategy_id);
        self.ideas.insert(idea.id, idea);
    }

    /// Replace the text of an idea
    ///
    /// # Errors
    /// Returns [`IdeaError::NotFound`] for an unknown id.
    pub fn update_text(&mut self, id: IdeaId, text: impl Into<String>) -> Result<(), IdeaError> {
        self.get_mut(id)?.text = text.into();
        Ok(())
    }

    /// Move an idea to its drag-stop position
    ///
    /// # Errors
    /// Returns [`IdeaError::NotFound`] for an unknown id.
    pub fn move_idea(&mut self, id: IdeaId, to: Point) -> Result<(), IdeaError> {
        let idea = self.get_mut(id)?;
        idea.x = to.x;
        idea.y = to.y;
        Ok(())
    }

    /// Delete an idea
    ///
    /// # Errors
    /// Returns [`IdeaError::NotFound`] for an unknown id.
    pub fn delete(&mut self, id: IdeaId) -> Result<Idea, IdeaError> {
        let idea = self.ideas.shift_remove(&id).ok_or(IdeaError::NotFound(id))?;
        tracing::debug!("Idea {} deleted", id);
        Ok(idea)
    }

    /// Set the confirmation flag
    ///
    /// When an idea of the stacking rule's strategy becomes confirmed, it
    /// moves to the slot after its already-confirmed siblings. Other ideas
    /// keep their coordinates.
    ///
    /// # Errors
    /// Returns [`IdeaError::NotFound`] for an unknown id.
    pub fn set_confirmed(&mut self, id: IdeaId, confirmed: bool) -> Result<(), IdeaError> {
        let idea = self.ideas.get(&id).ok_or(IdeaError::NotFound(id))?;
        if idea.is_confirmed == confirmed {
            return Ok(());
        }

        let slot = if confirmed {
            self.stacking_slot(idea)
        } else {
            None
        };

        let idea = self.get_mut(id)?;
        idea.is_confirmed = confirmed;
        if let Some(slot) = slot {
            idea.x = slot.x;
            idea.y = slot.y;
        }
        tracing::debug!("Idea {} confirmed: {}", id, confirmed);
        Ok(())
    }

    /// Flip the confirmation flag, returning the new value
    ///
    /// # Errors
    /// Returns [`IdeaError::NotFound`] for an unknown id.
    pub fn toggle_confirmed(&mut self, id: IdeaId) -> Result<bool, IdeaError> {
        let confirmed = !self.get(id).ok_or(IdeaError::NotFound(id))?.is_confirmed;
        self.set_confirmed(id, confirmed)?;
        Ok(confirmed)
    }

    fn stacking_slot(&self, idea: &Idea) -> Option<Point> {
        let rule = self
            .placement
            .stacking
            .as_ref()
            .filter(|rule| rule.strategy_id == idea.strategy_id)?;
        let siblings = self
            .ideas_for(idea.strategy_id.as_str())
            .filter(|other| other.id != idea.id && other.is_confirmed)
            .count();
        Some(rule.position(siblings))
    }

    fn get_mut(&mut self, id: IdeaId) -> Result<&mut Idea, IdeaError> {
        self.ideas.get_mut(&id).ok_or(IdeaError::NotFound(id))
    }

    /// Find idea by id
    #[inline]
    #[must_use]
    pub fn get(&self, id: IdeaId) -> Option<&Idea> {
        self.ideas.get(&id)
    }

    /// All ideas in creation order
    pub fn ideas(&self) -> impl Iterator<Item = &Idea> {
        self.ideas.values()
    }

    /// Ideas attached to a strategy
    pub fn ideas_for<'a>(&'a self, strategy: &'a str) -> impl Iterator<Item = &'a Idea> + 'a {
        self.ideas
            .values()
            .filter(move |i| i.strategy_id.as_str() == strategy)
    }

    /// Confirmed ideas in creation order
    pub fn confirmed(&self) -> impl Iterator<Item = &Idea> {
        self.ideas.values().filter(|i| i.is_confirmed)
    }

    /// Number of ideas
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    /// Check if board is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    /// Remove every idea and the selection, keeping placement
    pub fn clear(&mut self) {
        self.ideas.clear();
        self.selected_strategy = None;
    }
}
