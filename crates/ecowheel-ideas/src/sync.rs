//! Confirmed-idea synchronization
//!
//! The radar view shows a copy of every confirmed idea. Copies are owned by
//! the synchronizer for creation and deletion only; once a copy exists its
//! text, position and concept belong to the radar view and survive any
//! number of re-synchronizations.
//!
//! Entries are reference counted so an unaffected entry is the *same*
//! allocation before and after a pass.

use crate::error::IdeaError;
use crate::idea::{Idea, IdeaId, RadarIdea};
use ecowheel_evaluation::Concept;
use ecowheel_geometry::Point;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// Ordered collection of radar-side idea copies
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadarIdeas {
    entries: IndexMap<IdeaId, Arc<RadarIdea>>,
}

impl RadarIdeas {
    /// Create empty collection
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of copies
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy for a source idea id
    #[must_use]
    pub fn get(&self, id: IdeaId) -> Option<&Arc<RadarIdea>> {
        self.entries.get(&id)
    }

    /// Copies in board order
    pub fn iter(&self) -> impl Iterator<Item = &RadarIdea> {
        self.entries.values().map(AsRef::as_ref)
    }

    /// Owned snapshot of every copy
    #[must_use]
    pub fn to_vec(&self) -> Vec<RadarIdea> {
        self.iter().cloned().collect()
    }

    /// Edit the text of a copy without touching its source
    ///
    /// # Errors
    /// Returns [`IdeaError::NotFound`] if no copy exists for the id.
    pub fn update_text(&mut self, id: IdeaId, text: impl Into<String>) -> Result<(), IdeaError> {
        self.make_mut(id)?.text = text.into();
        Ok(())
    }

    /// Move a copy on the results view
    ///
    /// # Errors
    /// Returns [`IdeaError::NotFound`] if no copy exists for the id.
    pub fn move_to(&mut self, id: IdeaId, to: Point) -> Result<(), IdeaError> {
        let entry = self.make_mut(id)?;
        entry.x = to.x;
        entry.y = to.y;
        Ok(())
    }

    /// Associate a copy with a concept
    ///
    /// # Errors
    /// Returns [`IdeaError::NotFound`] if no copy exists for the id.
    pub fn set_concept(&mut self, id: IdeaId, concept: Concept) -> Result<(), IdeaError> {
        self.make_mut(id)?.concept = concept;
        Ok(())
    }

    /// Drop every copy
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn make_mut(&mut self, id: IdeaId) -> Result<&mut RadarIdea, IdeaError> {
        self.entries
            .get_mut(&id)
            .map(Arc::make_mut)
            .ok_or(IdeaError::NotFound(id))
    }
}

impl Serialize for RadarIdeas {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Reconcile radar copies with the confirmed subset of `ideas`
///
/// Keyed merge over the previous copies: a confirmed idea keeps its
/// existing copy untouched, a newly confirmed idea gets a fresh copy at
/// `default_position`, and copies whose source is no longer confirmed are
/// dropped. Output order follows `ideas`.
#[must_use]
pub fn synchronize<'a, I>(ideas: I, previous: &RadarIdeas, default_position: Point) -> RadarIdeas
where
    I: IntoIterator<Item = &'a Idea>,
{
    let mut kept = 0usize;
    let mut created = 0usize;

    let entries: IndexMap<IdeaId, Arc<RadarIdea>> = ideas
        .into_iter()
        .filter(|idea| idea.is_confirmed)
        .map(|idea| {
            let entry = if let Some(existing) = previous.entries.get(&idea.id) {
                kept += 1;
                Arc::clone(existing)
            } else {
                created += 1;
                Arc::new(RadarIdea::from_idea(idea, default_position))
            };
            (idea.id, entry)
        })
        .collect();

    let dropped = previous.len().saturating_sub(kept);
    tracing::debug!(
        "Radar ideas synchronized: {} kept, {} created, {} dropped",
        kept,
        created,
        dropped
    );

    RadarIdeas { entries }
}
