//! Connector lines between the radar chart and the annotation boxes
//!
//! Anchors sit on the chart's outer circle, one per strategy, starting at
//! 90° (straight up) and proceeding clockwise. Each line runs from a
//! strategy's anchor to the nearest edge midpoint of that strategy's box,
//! then is pulled back at both ends so it touches neither shape.
//!
//! All geometry happens in the container frame: boxes are measured in the
//! same frame as the container rectangle and translated before use.

use crate::shapes::{Point, Rect};
use ecowheel_catalog::StrategyId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default gap between a line end and the shape it points at, in pixels
pub const DEFAULT_LINE_OFFSET: f64 = 8.0;

/// Measured chart layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    /// Container rectangle, in the frame the boxes were measured in
    pub container: Rect,
    /// Chart center, container-relative
    pub center: Point,
    /// Outer radius of the chart
    pub radius: f64,
}

impl ChartLayout {
    /// Create layout
    #[inline]
    #[must_use]
    pub fn new(container: Rect, center: Point, radius: f64) -> Self {
        Self {
            container,
            center,
            radius,
        }
    }

    /// Check if the container and chart have been laid out
    #[inline]
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.container.is_measured() && self.radius > 0.0
    }

    /// Angle of anchor `index` out of `count`, in degrees
    ///
    /// Mathematical convention: 90° is up and angles decrease clockwise.
    #[must_use]
    pub fn anchor_angle(index: usize, count: usize) -> f64 {
        if count == 0 {
            return 90.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let step = 360.0 / count as f64;
        #[allow(clippy::cast_precision_loss)]
        let angle = 90.0 - step * index as f64;
        angle
    }

    /// Anchor point of strategy `index` out of `count` on the outer circle
    #[must_use]
    pub fn anchor(&self, index: usize, count: usize) -> Point {
        let radians = Self::anchor_angle(index, count).to_radians();
        // screen y grows downwards
        Point::new(
            self.center.x + self.radius * radians.cos(),
            self.center.y - self.radius * radians.sin(),
        )
    }
}

/// One connector line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowLine {
    /// Strategy the line belongs to
    pub strategy_id: StrategyId,
    /// End near the chart
    pub start: Point,
    /// End near the box
    pub end: Point,
}

/// Nearest edge midpoint of `rect` to `from`; first edge wins ties
fn nearest_edge_midpoint(rect: &Rect, from: Point) -> Point {
    let mut best = rect.edge_midpoints()[0];
    let mut best_distance = from.distance_to(best);
    for candidate in rect.edge_midpoints().into_iter().skip(1) {
        let distance = from.distance_to(candidate);
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }
    best
}

/// Shorten a segment by `offset` at both ends
///
/// `None` when the ends coincide or the segment is no longer than twice
/// the offset, since shortening would flip its direction.
fn shorten(start: Point, end: Point, offset: f64) -> Option<(Point, Point)> {
    let length = start.distance_to(end);
    if length <= f64::EPSILON || length <= 2.0 * offset {
        return None;
    }
    let ux = (end.x - start.x) / length;
    let uy = (end.y - start.y) / length;
    Some((
        start.offset(ux * offset, uy * offset),
        end.offset(-ux * offset, -uy * offset),
    ))
}

/// Compute connector lines for every strategy that has a measured box
///
/// `strategies` fixes the anchor order; `boxes` holds rectangles in the
/// same frame as `layout.container`. Strategies without a box, or whose
/// box has no area yet, are skipped without affecting the others.
#[must_use]
pub fn connector_lines(
    layout: &ChartLayout,
    strategies: &[StrategyId],
    boxes: &HashMap<StrategyId, Rect>,
    offset: f64,
) -> Vec<ArrowLine> {
    if !layout.is_measured() {
        return Vec::new();
    }

    let count = strategies.len();
    strategies
        .iter()
        .enumerate()
        .filter_map(|(index, id)| {
            let rect = boxes.get(id).filter(|r| r.is_measured())?;
            let local = rect.relative_to(&layout.container);
            let anchor = layout.anchor(index, count);
            let target = nearest_edge_midpoint(&local, anchor);
            let (start, end) = shorten(anchor, target, offset)?;
            Some(ArrowLine {
                strategy_id: id.clone(),
                start,
                end,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn layout() -> ChartLayout {
        ChartLayout::new(
            Rect::new(100.0, 100.0, 800.0, 800.0),
            Point::new(400.0, 400.0),
            200.0,
        )
    }

    fn ids(n: usize) -> Vec<StrategyId> {
        (1..=n).map(|i| StrategyId::new(i.to_string())).collect()
    }

    #[test]
    fn anchors_start_at_top_and_go_clockwise() {
        let layout = layout();
        assert!(close(layout.anchor(0, 4), Point::new(400.0, 200.0)));
        assert!(close(layout.anchor(1, 4), Point::new(600.0, 400.0)));
        assert!(close(layout.anchor(2, 4), Point::new(400.0, 600.0)));
        assert!(close(layout.anchor(3, 4), Point::new(200.0, 400.0)));
    }

    #[test]
    fn line_targets_nearest_edge_and_is_shortened() {
        let layout = layout();
        let strategies = ids(4);
        let mut boxes = HashMap::new();
        // box straight above the top anchor, measured in the page frame
        boxes.insert(strategies[0].clone(), Rect::new(460.0, 200.0, 80.0, 40.0));

        let lines = connector_lines(&layout, &strategies, &boxes, 10.0);
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        // anchor (400, 200) → bottom midpoint (400, 140), shortened by 10
        assert!(close(line.start, Point::new(400.0, 190.0)));
        assert!(close(line.end, Point::new(400.0, 150.0)));
    }

    #[test]
    fn missing_box_skips_only_that_strategy() {
        let layout = layout();
        let strategies = ids(3);
        let mut boxes = HashMap::new();
        boxes.insert(strategies[0].clone(), Rect::new(460.0, 100.0, 80.0, 40.0));
        boxes.insert(strategies[2].clone(), Rect::new(100.0, 700.0, 80.0, 40.0));

        let all = connector_lines(&layout, &strategies, &boxes, DEFAULT_LINE_OFFSET);
        let ids: Vec<&str> = all.iter().map(|l| l.strategy_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);

        boxes.insert(strategies[1].clone(), Rect::new(800.0, 200.0, 80.0, 40.0));
        let with_second = connector_lines(&layout, &strategies, &boxes, DEFAULT_LINE_OFFSET);
        assert_eq!(with_second.len(), 3);
        assert_eq!(with_second[0], all[0]);
        assert_eq!(with_second[2], all[1]);
    }

    #[test]
    fn unmeasured_layout_emits_nothing() {
        let strategies = ids(2);
        let mut boxes = HashMap::new();
        boxes.insert(strategies[0].clone(), Rect::new(0.0, 0.0, 10.0, 10.0));

        let unmeasured = ChartLayout::new(Rect::default(), Point::new(0.0, 0.0), 100.0);
        assert!(connector_lines(&unmeasured, &strategies, &boxes, 5.0).is_empty());

        let no_radius = ChartLayout::new(
            Rect::new(0.0, 0.0, 500.0, 500.0),
            Point::new(250.0, 250.0),
            0.0,
        );
        assert!(connector_lines(&no_radius, &strategies, &boxes, 5.0).is_empty());
    }

    #[test]
    fn zero_area_box_is_skipped() {
        let strategies = ids(1);
        let mut boxes = HashMap::new();
        boxes.insert(strategies[0].clone(), Rect::new(500.0, 100.0, 0.0, 0.0));
        assert!(connector_lines(&layout(), &strategies, &boxes, 5.0).is_empty());
    }

    #[test]
    fn coincident_endpoints_emit_nothing() {
        let layout = layout();
        let strategies = ids(4);
        let mut boxes = HashMap::new();
        // container-relative bottom midpoint is exactly the top anchor (400, 200)
        boxes.insert(strategies[0].clone(), Rect::new(460.0, 260.0, 80.0, 40.0));
        assert!(connector_lines(&layout, &strategies, &boxes, 0.0).is_empty());
    }

    #[test]
    fn box_closer_than_twice_the_offset_is_skipped() {
        let layout = layout();
        let strategies = ids(4);
        let mut boxes = HashMap::new();
        // bottom midpoint (400, 185) is 15 px from the top anchor
        boxes.insert(strategies[0].clone(), Rect::new(460.0, 245.0, 80.0, 40.0));

        assert!(connector_lines(&layout, &strategies, &boxes, 8.0).is_empty());
        assert!(connector_lines(&layout, &strategies, &boxes, 7.6).is_empty());

        let lines = connector_lines(&layout, &strategies, &boxes, 5.0);
        assert_eq!(lines.len(), 1);
        assert!(close(lines[0].start, Point::new(400.0, 195.0)));
        assert!(close(lines[0].end, Point::new(400.0, 190.0)));
    }

    #[test]
    fn empty_strategy_list() {
        assert!(connector_lines(&layout(), &[], &HashMap::new(), 5.0).is_empty());
    }

    proptest! {
        #[test]
        fn prop_shortened_line_keeps_direction(
            x in 0.0f64..700.0,
            y in 0.0f64..700.0,
            w in 1.0f64..100.0,
            h in 1.0f64..100.0,
            index in 0usize..7,
        ) {
            let layout = layout();
            let strategies = ids(7);
            let mut boxes = HashMap::new();
            boxes.insert(strategies[index].clone(), Rect::new(x + 100.0, y + 100.0, w, h));

            let lines = connector_lines(&layout, &strategies, &boxes, 4.0);
            prop_assert!(lines.len() <= 1);
            if let Some(line) = lines.first() {
                let anchor = layout.anchor(index, 7);
                let target = nearest_edge_midpoint(&Rect::new(x, y, w, h), anchor);
                let full = anchor.distance_to(target);
                let short = line.start.distance_to(line.end);
                prop_assert!((full - short - 8.0).abs() < 1e-6);
                prop_assert!((anchor.distance_to(line.start) - 4.0).abs() < 1e-6);
            }
        }
    }
}
