//! Renderer seam
//!
//! Summaries are turned into a flat list of [`Shape`]s in data space: the x
//! coordinate is the ordinal slot of the group (0, 1, 2, ...) and the y
//! coordinate is a data value. Scaling to pixels, styling and drawing belong
//! to whatever [`Renderer`] consumes the list.

use serde::{Deserialize, Serialize};
use socialviz_stats::GroupedSummaries;

use crate::error::{RenderError, RenderResult};

/// Kind of box plot element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Vertical line from min to max
    Whisker,
    /// Rectangle from q1 to q3
    Box,
    /// Horizontal line at the median
    MedianLine,
}

impl ShapeKind {
    /// Name used in JSON output and error messages
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Whisker => "whisker",
            ShapeKind::Box => "box",
            ShapeKind::MedianLine => "median_line",
        }
    }
}

/// One element to draw
///
/// `position` is the lower-left corner `(slot, value)`; `size` is
/// `(width in slots, height in data units)`. A whisker is centred in its
/// slot and has zero width; a median line has zero height.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub group: String,
    pub position: (f64, f64),
    pub size: (f64, f64),
}

impl Shape {
    /// Whether every coordinate is a finite number
    pub fn is_drawable(&self) -> bool {
        [self.position.0, self.position.1, self.size.0, self.size.1]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// Consumer of shape lists
pub trait Renderer {
    fn render(&mut self, shapes: &[Shape]) -> RenderResult<()>;
}

/// Renderer that keeps every shape it is given
///
/// A batch containing a shape that cannot be drawn is rejected whole.
#[derive(Debug, Default)]
pub struct ShapeLog {
    shapes: Vec<Shape>,
}

impl ShapeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

impl Renderer for ShapeLog {
    fn render(&mut self, shapes: &[Shape]) -> RenderResult<()> {
        if let Some(bad) = shapes.iter().find(|shape| !shape.is_drawable()) {
            return Err(RenderError::InvalidGeometry {
                kind: bad.kind.name().to_string(),
                group: bad.group.clone(),
            });
        }
        self.shapes.extend_from_slice(shapes);
        Ok(())
    }
}

/// Build whisker, box and median shapes for each group
///
/// Groups are laid out in `order`; groups not named there follow in key
/// order. Names in `order` without a summary are ignored.
pub fn box_plot_shapes(summaries: &GroupedSummaries, order: &[String]) -> Vec<Shape> {
    let mut keys: Vec<&str> = Vec::with_capacity(summaries.len());
    let candidates = order
        .iter()
        .map(String::as_str)
        .chain(summaries.keys().map(String::as_str));
    for key in candidates {
        if summaries.contains_key(key) && !keys.contains(&key) {
            keys.push(key);
        }
    }

    keys.iter()
        .enumerate()
        .flat_map(|(slot, key)| {
            let s = &summaries[*key];
            let x = slot as f64;
            let group = key.to_string();
            [
                Shape {
                    kind: ShapeKind::Whisker,
                    group: group.clone(),
                    position: (x + 0.5, s.min),
                    size: (0.0, s.range()),
                },
                Shape {
                    kind: ShapeKind::Box,
                    group: group.clone(),
                    position: (x, s.q1),
                    size: (1.0, s.iqr),
                },
                Shape {
                    kind: ShapeKind::MedianLine,
                    group,
                    position: (x, s.median),
                    size: (1.0, 0.0),
                },
            ]
        })
        .collect()
}

/// Order groups by first appearance in a key sequence
///
/// Mirrors how a band scale picks up its domain from the raw rows.
pub fn first_seen_order<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    for key in keys {
        if !order.iter().any(|k| k == key) {
            order.push(key.to_string());
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use socialviz_stats::{summarize, Record};

    fn sample() -> GroupedSummaries {
        summarize(&[
            Record::new("B", 10.0),
            Record::new("B", 30.0),
            Record::new("A", 1.0),
            Record::new("A", 2.0),
            Record::new("A", 3.0),
            Record::new("A", 4.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_three_shapes_per_group() {
        let shapes = box_plot_shapes(&sample(), &[]);
        assert_eq!(shapes.len(), 6);
        let kinds: Vec<ShapeKind> = shapes.iter().take(3).map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![ShapeKind::Whisker, ShapeKind::Box, ShapeKind::MedianLine]
        );
    }

    #[test]
    fn test_shapes_follow_requested_order() {
        let order = vec!["B".to_string(), "missing".to_string()];
        let shapes = box_plot_shapes(&sample(), &order);
        assert_eq!(shapes[0].group, "B");
        assert_eq!(shapes[0].position.0, 0.5);
        assert_eq!(shapes[3].group, "A");
        assert_eq!(shapes[3].position.0, 1.5);
    }

    #[test]
    fn test_shape_geometry() {
        let shapes = box_plot_shapes(&sample(), &["A".to_string()]);
        let whisker = &shapes[0];
        assert_eq!(whisker.position, (0.5, 1.0));
        assert_eq!(whisker.size, (0.0, 3.0));

        let body = &shapes[1];
        assert_eq!(body.position, (0.0, 1.75));
        assert_eq!(body.size, (1.0, 1.5));

        let median = &shapes[2];
        assert_eq!(median.position, (0.0, 2.5));
        assert_eq!(median.size, (1.0, 0.0));
    }

    #[test]
    fn test_shape_log_renderer() {
        let shapes = box_plot_shapes(&sample(), &[]);
        let mut log = ShapeLog::new();
        log.render(&shapes).unwrap();
        assert_eq!(log.shapes().len(), 6);
        assert_eq!(log.shapes(), shapes.as_slice());
    }

    #[test]
    fn test_shape_log_rejects_non_finite_geometry() {
        // Whisker height overflows: max - min exceeds f64::MAX
        let summaries = summarize(&[Record::new("wide", -1e308), Record::new("wide", 1e308)])
            .unwrap();
        let shapes = box_plot_shapes(&summaries, &[]);
        assert!(!shapes[0].is_drawable());

        let mut log = ShapeLog::new();
        let err = log.render(&shapes).unwrap_err();
        match err {
            RenderError::InvalidGeometry { kind, group } => {
                assert_eq!(kind, ShapeKind::Whisker.name());
                assert_eq!(group, "wide");
            }
        }
        assert!(log.shapes().is_empty());
    }

    #[test]
    fn test_first_seen_order() {
        let order = first_seen_order(["25-34", "18-24", "25-34", "55+"]);
        assert_eq!(order, vec!["25-34", "18-24", "55+"]);
    }

    #[test]
    fn test_shape_json() {
        let shapes = box_plot_shapes(&sample(), &["A".to_string()]);
        let json = serde_json::to_value(&shapes[2]).unwrap();
        assert_eq!(json["kind"], ShapeKind::MedianLine.name());
        assert_eq!(json["group"], "A");
    }
}
