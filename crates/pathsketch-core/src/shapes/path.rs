//! Drawn path (ordered series of points sharing one style).

use super::PathStyle;
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// Minimum number of points for a path to be committed to a document.
pub const MIN_COMMITTED_POINTS: usize = 2;

/// A drawn path: freehand stroke or synthesized shape.
///
/// Point order is drawing order. It fixes the stroke direction and the
/// order of the `d` commands on export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    /// Points in drawing order.
    pub points: Vec<Point>,
    /// Style properties.
    pub style: PathStyle,
}

impl Path {
    /// Create a new empty path with the given style.
    pub fn new(style: PathStyle) -> Self {
        Self {
            points: Vec::new(),
            style,
        }
    }

    /// Create from existing points.
    pub fn from_points(points: Vec<Point>, style: PathStyle) -> Self {
        Self { points, style }
    }

    /// Add a point to the path.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the path has enough points to be committed.
    pub fn is_complete(&self) -> bool {
        self.points.len() >= MIN_COMMITTED_POINTS
    }

    /// Bounding box of all points. An empty path yields `Rect::ZERO`.
    pub fn bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::ZERO;
        };

        self.points
            .iter()
            .skip(1)
            .fold(Rect::from_points(*first, *first), |acc, p| {
                Rect::new(
                    acc.x0.min(p.x),
                    acc.y0.min(p.y),
                    acc.x1.max(p.x),
                    acc.y1.max(p.y),
                )
            })
    }

    /// Open polyline through the points, for stroking.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();

        let Some((first, rest)) = self.points.split_first() else {
            return path;
        };

        path.move_to(*first);
        for point in rest {
            path.line_to(*point);
        }

        path
    }

    /// Closed contour through the points, for filling and containment tests.
    pub fn to_closed_bez_path(&self) -> BezPath {
        let mut path = self.to_bez_path();
        if !self.points.is_empty() {
            path.close_path();
        }
        path
    }

    /// Whether every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| p.x.is_finite() && p.y.is_finite())
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::new(PathStyle::default())
    }
}
