//! Ecowheel Ideas
//!
//! Brainstorming board and its projection onto the results view.
//!
//! # Core Concepts
//!
//! - [`IdeaBoard`]: the primary collection of freeform notes, each attached
//!   to a strategy, positioned and confirmed independently
//! - [`RadarIdeas`]: copies of the confirmed notes shown next to the radar
//!   chart, edited independently of their source
//! - [`synchronize`]: keyed merge that keeps the copies in step with the
//!   board without clobbering radar-side edits
//!
//! # Example
//!
//! ```rust
//! use ecowheel_catalog::StrategyId;
//! use ecowheel_ideas::{synchronize, IdeaBoard, RadarIdeas};
//!
//! let mut board = IdeaBoard::new();
//! board.select_strategy(Some(StrategyId::new("3")));
//! let id = board.add_idea("Use a single material").unwrap();
//! board.set_confirmed(id, true).unwrap();
//!
//! let radar = synchronize(board.ideas(), &RadarIdeas::new(), board.placement().radar_default);
//! assert_eq!(radar.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod board;
mod error;
mod idea;
mod sync;

pub use board::IdeaBoard;
pub use error::IdeaError;
pub use idea::{Idea, IdeaId, IdeaPlacement, RadarIdea, StackingRule};
pub use sync::{synchronize, RadarIdeas};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
