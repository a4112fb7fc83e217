//! Hit testing: point-in-path and resize handle detection.

use crate::shapes::{Path, point_to_polyline_dist};
use kurbo::{Point, Rect, Shape as _};
use serde::{Deserialize, Serialize};

/// Padding around a path's bounds and stroke accepted as a hit.
pub const HIT_PADDING: f64 = 5.0;
/// Handle size in device units. Also the per-axis hit tolerance.
pub const HANDLE_SIZE: f64 = 8.0;
/// Per-axis handle hit tolerance: `|handle - point| < tolerance` on both axes.
pub const HANDLE_HIT_TOLERANCE: f64 = HANDLE_SIZE;

/// One of the eight resize anchors around a path's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeHandle {
    #[serde(rename = "tl")]
    TopLeft,
    #[serde(rename = "tr")]
    TopRight,
    #[serde(rename = "br")]
    BottomRight,
    #[serde(rename = "bl")]
    BottomLeft,
    #[serde(rename = "tm")]
    TopMiddle,
    #[serde(rename = "bm")]
    BottomMiddle,
    #[serde(rename = "ml")]
    MiddleLeft,
    #[serde(rename = "mr")]
    MiddleRight,
}

impl ResizeHandle {
    /// All handles in hit-test priority order.
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::TopLeft,
        ResizeHandle::TopRight,
        ResizeHandle::BottomRight,
        ResizeHandle::BottomLeft,
        ResizeHandle::TopMiddle,
        ResizeHandle::BottomMiddle,
        ResizeHandle::MiddleLeft,
        ResizeHandle::MiddleRight,
    ];

    /// Short identifier (`tl`, `tr`, ...).
    pub fn id(self) -> &'static str {
        match self {
            ResizeHandle::TopLeft => "tl",
            ResizeHandle::TopRight => "tr",
            ResizeHandle::BottomRight => "br",
            ResizeHandle::BottomLeft => "bl",
            ResizeHandle::TopMiddle => "tm",
            ResizeHandle::BottomMiddle => "bm",
            ResizeHandle::MiddleLeft => "ml",
            ResizeHandle::MiddleRight => "mr",
        }
    }

    /// Whether this is one of the four corner handles.
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            ResizeHandle::TopLeft
                | ResizeHandle::TopRight
                | ResizeHandle::BottomRight
                | ResizeHandle::BottomLeft
        )
    }

    /// Anchor position of this handle on `bounds`.
    pub fn position(self, bounds: Rect) -> Point {
        let mid_x = (bounds.x0 + bounds.x1) / 2.0;
        let mid_y = (bounds.y0 + bounds.y1) / 2.0;
        match self {
            ResizeHandle::TopLeft => Point::new(bounds.x0, bounds.y0),
            ResizeHandle::TopRight => Point::new(bounds.x1, bounds.y0),
            ResizeHandle::BottomRight => Point::new(bounds.x1, bounds.y1),
            ResizeHandle::BottomLeft => Point::new(bounds.x0, bounds.y1),
            ResizeHandle::TopMiddle => Point::new(mid_x, bounds.y0),
            ResizeHandle::BottomMiddle => Point::new(mid_x, bounds.y1),
            ResizeHandle::MiddleLeft => Point::new(bounds.x0, mid_y),
            ResizeHandle::MiddleRight => Point::new(bounds.x1, mid_y),
        }
    }

    /// Check if `point` lies within the handle's square tolerance box.
    pub fn hit_test(self, bounds: Rect, point: Point, tolerance: f64) -> bool {
        let anchor = self.position(bounds);
        (anchor.x - point.x).abs() < tolerance && (anchor.y - point.y).abs() < tolerance
    }
}

/// Handle anchors for a path, in hit-test priority order.
pub fn handles(path: &Path) -> [(ResizeHandle, Point); 8] {
    let bounds = path.bounds();
    ResizeHandle::ALL.map(|handle| (handle, handle.position(bounds)))
}

/// Find which handle (if any) is hit at the given point.
pub fn resize_handle_at(path: &Path, point: Point) -> Option<ResizeHandle> {
    let bounds = path.bounds();
    ResizeHandle::ALL
        .into_iter()
        .find(|handle| handle.hit_test(bounds, point, HANDLE_HIT_TOLERANCE))
}

/// Check if `point` lies on (unfilled) or inside (filled) a path.
///
/// Anything outside the bounds inflated by [`HIT_PADDING`] is rejected
/// first. Filled paths are tested as a closed contour with the nonzero
/// winding rule. Unfilled paths accept points within half the stroke width
/// plus the padding of the polyline.
pub fn point_in_path(path: &Path, point: Point) -> bool {
    if path.is_empty() {
        return false;
    }

    // Inclusive on every edge.
    let padded = path.bounds().inflate(HIT_PADDING, HIT_PADDING);
    if point.x < padded.x0 || point.x > padded.x1 || point.y < padded.y0 || point.y > padded.y1 {
        return false;
    }

    if path.style.fill {
        path.to_closed_bez_path().contains(point)
    } else {
        let corridor = path.style.width / 2.0 + HIT_PADDING;
        point_to_polyline_dist(point, &path.points) <= corridor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{PathStyle, ShapeKind, synthesize};

    fn square(fill: bool) -> Path {
        synthesize(
            ShapeKind::Square,
            Point::new(0.0, 0.0),
            Point::new(100.0, 100.0),
            &PathStyle::new(2.0, fill),
        )
    }

    #[test]
    fn test_filled_contains_interior() {
        let path = square(true);
        assert!(point_in_path(&path, Point::new(50.0, 50.0)));
        assert!(point_in_path(&path, Point::new(1.0, 99.0)));
        assert!(!point_in_path(&path, Point::new(150.0, 50.0)));
    }

    #[test]
    fn test_unfilled_only_hits_stroke() {
        let path = square(false);
        assert!(!point_in_path(&path, Point::new(50.0, 50.0)));
        assert!(point_in_path(&path, Point::new(50.0, 0.0)));
        // width 2 → corridor 1 + 5 = 6
        assert!(point_in_path(&path, Point::new(50.0, 5.9)));
        assert!(!point_in_path(&path, Point::new(50.0, 6.5)));
        // Outside, still within the corridor of the left edge.
        assert!(point_in_path(&path, Point::new(-4.0, 50.0)));
    }

    #[test]
    fn test_padded_bounds_rejection() {
        let path = Path::from_points(
            vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
            PathStyle::new(40.0, false),
        );
        // Within the wide stroke corridor but outside padded bounds.
        assert!(!point_in_path(&path, Point::new(50.0, 10.0)));
        assert!(point_in_path(&path, Point::new(50.0, 4.0)));
        assert!(point_in_path(&path, Point::new(105.0, 5.0)));
    }

    #[test]
    fn test_empty_path_never_hit() {
        assert!(!point_in_path(&Path::default(), Point::ZERO));
    }

    #[test]
    fn test_filled_triangle_winding() {
        let path = synthesize(
            ShapeKind::Triangle,
            Point::new(0.0, 0.0),
            Point::new(100.0, 100.0),
            &PathStyle::new(2.0, true),
        );
        assert!(point_in_path(&path, Point::new(50.0, 60.0)));
        // Inside bounds, outside the triangle.
        assert!(!point_in_path(&path, Point::new(5.0, 10.0)));
    }

    #[test]
    fn test_handle_positions() {
        let path = square(false);
        let positions = handles(&path);
        assert_eq!(positions[0], (ResizeHandle::TopLeft, Point::new(0.0, 0.0)));
        assert_eq!(positions[2], (ResizeHandle::BottomRight, Point::new(100.0, 100.0)));
        assert_eq!(positions[4], (ResizeHandle::TopMiddle, Point::new(50.0, 0.0)));
        assert_eq!(positions[7], (ResizeHandle::MiddleRight, Point::new(100.0, 50.0)));
        assert_eq!(
            ResizeHandle::BottomMiddle.position(Rect::new(0.0, 0.0, 10.0, 20.0)),
            Point::new(5.0, 20.0)
        );
    }

    #[test]
    fn test_resize_handle_at() {
        let path = square(false);
        assert_eq!(resize_handle_at(&path, Point::new(2.0, -3.0)), Some(ResizeHandle::TopLeft));
        assert_eq!(
            resize_handle_at(&path, Point::new(98.0, 104.0)),
            Some(ResizeHandle::BottomRight)
        );
        assert_eq!(resize_handle_at(&path, Point::new(0.0, 52.0)), Some(ResizeHandle::MiddleLeft));
        assert_eq!(resize_handle_at(&path, Point::new(50.0, 50.0)), None);
        // Tolerance is strict on each axis.
        assert_eq!(resize_handle_at(&path, Point::new(8.0, 0.0)), None);
        assert_eq!(resize_handle_at(&path, Point::new(7.9, 7.9)), Some(ResizeHandle::TopLeft));
    }

    #[test]
    fn test_handle_ties_resolve_in_fixed_order() {
        // A tiny path puts every handle within tolerance of the center.
        let path = synthesize(
            ShapeKind::Square,
            Point::new(0.0, 0.0),
            Point::new(4.0, 4.0),
            &PathStyle::default(),
        );
        assert_eq!(resize_handle_at(&path, Point::new(2.0, 2.0)), Some(ResizeHandle::TopLeft));
        assert_eq!(resize_handle_at(&path, Point::new(9.0, 9.0)), Some(ResizeHandle::BottomRight));
    }

    #[test]
    fn test_handle_ids() {
        let ids: Vec<_> = ResizeHandle::ALL.iter().map(|h| h.id()).collect();
        assert_eq!(ids, ["tl", "tr", "br", "bl", "tm", "bm", "ml", "mr"]);
        assert!(ResizeHandle::BottomLeft.is_corner());
        assert!(!ResizeHandle::MiddleRight.is_corner());
    }
}
