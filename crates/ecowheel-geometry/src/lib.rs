//! Ecowheel Geometry
//!
//! Layout math for the results view.
//!
//! - [`Point`] / [`Rect`]: screen-space primitives
//! - [`ChartLayout`]: radial anchor placement around the radar chart
//! - [`connector_lines`]: lines from chart anchors to annotation boxes

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod arrows;
mod shapes;

pub use arrows::{connector_lines, ArrowLine, ChartLayout, DEFAULT_LINE_OFFSET};
pub use shapes::{Point, Rect};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
