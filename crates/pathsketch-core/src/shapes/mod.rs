//! Path model and parametric shape synthesis.

mod generator;
mod path;

pub use generator::{CIRCLE_STEP_DEGREES, ShapeKind, synthesize};
pub use path::Path;

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Default stroke width for new paths.
pub const DEFAULT_STROKE_WIDTH: f64 = 3.0;
/// Default stroke color for new paths.
pub const DEFAULT_COLOR: &str = "black";

/// Style properties shared by every point of a path.
///
/// A path carries exactly one style. Nothing is stored per point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    /// Stroke width in device units.
    pub width: f64,
    /// Whether the closed contour is filled with the stroke color.
    pub fill: bool,
    /// CSS color string (e.g. `black`, `#EF4444`).
    pub color: String,
    /// Corner radius emitted as `rx`/`ry` on export.
    #[serde(default)]
    pub border_radius: f64,
}

impl PathStyle {
    /// Create a style with the given width and fill, using the default color.
    pub fn new(width: f64, fill: bool) -> Self {
        Self {
            width,
            fill,
            ..Self::default()
        }
    }

    /// Set the stroke color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the border radius.
    pub fn with_border_radius(mut self, radius: f64) -> Self {
        self.border_radius = radius;
        self
    }

    /// Whether width and border radius are finite and non-negative.
    pub fn is_valid(&self) -> bool {
        is_valid_length(self.width) && is_valid_length(self.border_radius)
    }
}

/// Finite and non-negative.
pub fn is_valid_length(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_STROKE_WIDTH,
            fill: false,
            color: DEFAULT_COLOR.to_string(),
            border_radius: 0.0,
        }
    }
}

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let pv = point - a;
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = a + seg * t;
    (point - proj).hypot()
}

/// Minimum distance from a point to a polyline (sequence of connected segments).
///
/// A single point degenerates to the distance to that point; an empty slice
/// is infinitely far away.
pub fn point_to_polyline_dist(point: Point, points: &[Point]) -> f64 {
    match points {
        [] => f64::INFINITY,
        [only] => point.distance(*only),
        _ => points
            .windows(2)
            .map(|w| point_to_segment_dist(point, w[0], w[1]))
            .fold(f64::INFINITY, f64::min),
    }
}
