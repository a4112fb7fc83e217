//! Parametric shape synthesis from a drag gesture.

use super::{Path, PathStyle};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Angular step between circle samples, in degrees.
pub const CIRCLE_STEP_DEGREES: usize = 5;

/// Parametric shapes that can be drawn with a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Square,
    Line,
    Triangle,
}

impl ShapeKind {
    /// All shape kinds, in palette order.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Line,
        ShapeKind::Triangle,
    ];

    /// Identifier used in settings and scripts.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Line => "line",
            ShapeKind::Triangle => "triangle",
        }
    }

    /// Whether the shape is a closed contour that can be filled.
    pub fn is_closed(self) -> bool {
        !matches!(self, ShapeKind::Line)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown shape name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shape kind: {0}")]
pub struct ParseShapeKindError(pub String);

impl FromStr for ShapeKind {
    type Err = ParseShapeKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseShapeKindError(s.to_string()))
    }
}

/// Build the point sequence for `kind` spanning the drag from `start` to `end`.
///
/// Width and height are the absolute drag deltas. Closed shapes repeat their
/// first point at the end. A line keeps both corners verbatim and is never
/// filled.
pub fn synthesize(kind: ShapeKind, start: Point, end: Point, style: &PathStyle) -> Path {
    let width = (end.x - start.x).abs();
    let height = (end.y - start.y).abs();
    let min_x = start.x.min(end.x);
    let min_y = start.y.min(end.y);
    let center = Point::new(min_x + width / 2.0, min_y + height / 2.0);

    let mut style = style.clone();
    if !kind.is_closed() {
        style.fill = false;
    }

    let points = match kind {
        ShapeKind::Circle => {
            let radius = width.min(height) / 2.0;
            (0..=360)
                .step_by(CIRCLE_STEP_DEGREES)
                .map(|deg| {
                    let angle = (deg as f64).to_radians();
                    Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    )
                })
                .collect()
        }
        ShapeKind::Square => {
            let size = width.min(height);
            vec![
                Point::new(min_x, min_y),
                Point::new(min_x + size, min_y),
                Point::new(min_x + size, min_y + size),
                Point::new(min_x, min_y + size),
                Point::new(min_x, min_y),
            ]
        }
        ShapeKind::Line => vec![start, end],
        ShapeKind::Triangle => {
            let apex = Point::new(center.x, min_y);
            vec![
                apex,
                Point::new(min_x + width, min_y + height),
                Point::new(min_x, min_y + height),
                apex,
            ]
        }
    };

    Path::from_points(points, style)
}
