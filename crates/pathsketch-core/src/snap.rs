//! Snap functionality for attaching line endpoints to existing geometry.

use crate::shapes::Path;
use kurbo::Point;

/// Distance threshold for point snapping (in device units).
pub const SNAP_THRESHOLD: f64 = 10.0;

/// Result of a snap operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    /// The snapped point, or the candidate if nothing was close enough.
    pub point: Point,
    /// Whether snapping occurred.
    pub snapped: bool,
}

impl SnapResult {
    /// Create a result with no snapping.
    pub fn none(point: Point) -> Self {
        Self {
            point,
            snapped: false,
        }
    }

    /// Create a result snapped to `point`.
    pub fn snapped(point: Point) -> Self {
        Self {
            point,
            snapped: true,
        }
    }
}

/// Find the existing point nearest to `candidate`.
///
/// Scans every point of every path. Returns the closest one only if its
/// distance is strictly less than `threshold`; ties keep the first point
/// found in document order. A threshold that is not positive matches
/// nothing.
pub fn nearest_point(paths: &[Path], candidate: Point, threshold: f64) -> Option<Point> {
    if threshold.is_nan() || threshold <= 0.0 {
        return None;
    }

    let mut best: Option<Point> = None;
    let mut best_dist_sq = threshold * threshold;

    for point in paths.iter().flat_map(|path| path.points.iter()) {
        let dist_sq = (candidate - *point).hypot2();
        if dist_sq < best_dist_sq {
            best_dist_sq = dist_sq;
            best = Some(*point);
        }
    }

    best
}

/// Snap `candidate` to the nearest existing point within [`SNAP_THRESHOLD`].
pub fn snap_to_paths(paths: &[Path], candidate: Point) -> SnapResult {
    match nearest_point(paths, candidate, SNAP_THRESHOLD) {
        Some(point) => SnapResult::snapped(point),
        None => SnapResult::none(candidate),
    }
}
