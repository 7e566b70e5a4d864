//! Idea records and placement defaults

use ecowheel_catalog::StrategyId;
use ecowheel_evaluation::Concept;
use ecowheel_geometry::Point;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique idea identifier (ULID for creation-order sorting)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IdeaId(pub Ulid);

impl IdeaId {
    /// Generate new idea ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for IdeaId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for IdeaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Freeform note on the idea board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    /// Idea id
    pub id: IdeaId,
    /// Strategy the idea is attached to
    pub strategy_id: StrategyId,
    /// Note text
    pub text: String,
    /// Whether the idea is shown on the results view
    pub is_confirmed: bool,
    /// Board x position
    pub x: f64,
    /// Board y position
    pub y: f64,
}

impl Idea {
    /// Create an unconfirmed idea at a position
    #[must_use]
    pub fn new(strategy_id: StrategyId, text: impl Into<String>, at: Point) -> Self {
        Self {
            id: IdeaId::new(),
            strategy_id,
            text: text.into(),
            is_confirmed: false,
            x: at.x,
            y: at.y,
        }
    }

    /// Board position
    #[inline]
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Copy of a confirmed idea placed on the results view
///
/// Text and position are edited independently of the source [`Idea`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarIdea {
    /// Id of the source idea
    pub id: IdeaId,
    /// Strategy the idea is attached to
    pub strategy_id: StrategyId,
    /// Note text
    pub text: String,
    /// Always true while the record exists
    pub is_confirmed: bool,
    /// Results-view x position
    pub x: f64,
    /// Results-view y position
    pub y: f64,
    /// Concept the idea is associated with
    pub concept: Concept,
}

impl RadarIdea {
    /// Synthesize from a source idea at the default position
    #[must_use]
    pub fn from_idea(idea: &Idea, at: Point) -> Self {
        Self {
            id: idea.id,
            strategy_id: idea.strategy_id.clone(),
            text: idea.text.clone(),
            is_confirmed: true,
            x: at.x,
            y: at.y,
            concept: Concept::default(),
        }
    }

    /// Results-view position
    #[inline]
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Stacked placement for ideas of one strategy when they get confirmed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackingRule {
    /// Strategy the rule applies to
    pub strategy_id: StrategyId,
    /// Position of the first confirmed idea
    pub origin: Point,
    /// Offset added per already-confirmed idea
    pub step: Point,
}

impl StackingRule {
    /// Slot for an idea with `already_confirmed` confirmed siblings
    #[must_use]
    pub fn position(&self, already_confirmed: usize) -> Point {
        #[allow(clippy::cast_precision_loss)]
        let n = already_confirmed as f64;
        self.origin.offset(self.step.x * n, self.step.y * n)
    }
}

/// Default positions used by the board and the synchronizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdeaPlacement {
    /// Where a newly created idea appears on the board
    pub new_idea: Point,
    /// Where a newly confirmed idea appears on the results view
    pub radar_default: Point,
    /// Optional stacking rule applied on confirmation
    pub stacking: Option<StackingRule>,
}

impl Default for IdeaPlacement {
    fn default() -> Self {
        Self {
            new_idea: Point::new(20.0, 20.0),
            radar_default: Point::new(50.0, 50.0),
            stacking: Some(StackingRule {
                strategy_id: StrategyId::new("1"),
                origin: Point::new(20.0, 20.0),
                step: Point::new(0.0, 70.0),
            }),
        }
    }
}
