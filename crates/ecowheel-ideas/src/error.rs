//! Error types for idea operations

use crate::idea::IdeaId;

/// Rejected idea operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdeaError {
    /// An idea was created with no strategy selected
    #[error("please select a strategy first")]
    NoStrategySelected,

    /// No idea with this id
    #[error("idea not found: {0}")]
    NotFound(IdeaId),
}

impl IdeaError {
    /// Advisory notices are shown to the user and never indicate a fault
    #[inline]
    #[must_use]
    pub fn is_advisory(&self) -> bool {
        matches!(self, Self::NoStrategySelected)
    }
}
