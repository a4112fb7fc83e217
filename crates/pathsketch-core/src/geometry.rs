//! Geometry kernel: bounds and affine transforms of a path.
//!
//! Every function here is pure. Transforms return a new [`Path`] whose
//! style is preserved and whose points are mapped through a kurbo
//! [`Affine`]. A transform that would produce a non-finite coordinate
//! returns the input unchanged, so a document can never hold NaN or
//! infinity.

use crate::hit::ResizeHandle;
use crate::shapes::Path;
use kurbo::{Affine, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Mirror axis for [`flip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlipAxis {
    /// Mirror left-right (x about a vertical line through the origin).
    Horizontal,
    /// Mirror top-bottom (y about a horizontal line through the origin).
    Vertical,
}

/// Bounding box of a path. Empty paths yield `Rect::ZERO`.
pub fn bounds(path: &Path) -> Rect {
    path.bounds()
}

/// Center of the bounding box.
pub fn center(path: &Path) -> Point {
    bounds(path).center()
}

/// Translate every point by `(dx, dy)`.
pub fn translate(path: &Path, dx: f64, dy: f64) -> Path {
    transformed(path, Affine::translate(Vec2::new(dx, dy)))
}

/// Scale every point about `origin`: `origin + (p - origin) * (sx, sy)`.
pub fn scale(path: &Path, scale_x: f64, scale_y: f64, origin: Point) -> Path {
    let affine = Affine::translate(origin.to_vec2())
        * Affine::scale_non_uniform(scale_x, scale_y)
        * Affine::translate(-origin.to_vec2());
    transformed(path, affine)
}

/// Rotate every point about `origin` by `angle` radians.
///
/// Uses the device-space convention of `atan2(dy, dx)`, so an angle
/// measured between two pointer positions turns the path with the pointer.
pub fn rotate(path: &Path, angle: f64, origin: Point) -> Path {
    transformed(path, Affine::rotate_about(angle, origin))
}

/// Mirror every point about `origin` along `axis`.
pub fn flip(path: &Path, axis: FlipAxis, origin: Point) -> Path {
    let (sx, sy) = match axis {
        FlipAxis::Horizontal => (-1.0, 1.0),
        FlipAxis::Vertical => (1.0, -1.0),
    };
    // Only the mirrored coordinate of the origin matters; pin the other one
    // to zero so the untouched axis is reproduced exactly.
    let pivot = match axis {
        FlipAxis::Horizontal => Vec2::new(origin.x, 0.0),
        FlipAxis::Vertical => Vec2::new(0.0, origin.y),
    };
    let affine =
        Affine::translate(pivot) * Affine::scale_non_uniform(sx, sy) * Affine::translate(-pivot);
    transformed(path, affine)
}

/// Scale factors for dragging `handle` from `anchor` to `pos` on a box with
/// the given `bounds`.
///
/// Handles on the max side grow by the drag delta; handles on the min side
/// measure from the opposite edge to the pointer. The four edge-midpoint
/// handles do not scale. A zero extent, or any non-finite result, falls back
/// to `1.0` on that axis.
pub fn resize_factors(bounds: Rect, handle: ResizeHandle, anchor: Point, pos: Point) -> (f64, f64) {
    let width = bounds.width();
    let height = bounds.height();
    let delta = pos - anchor;

    let grow_max_x = || guarded_ratio(bounds.x1 + delta.x - bounds.x0, width);
    let grow_min_x = || guarded_ratio(bounds.x1 - pos.x, width);
    let grow_max_y = || guarded_ratio(bounds.y1 + delta.y - bounds.y0, height);
    let grow_min_y = || guarded_ratio(bounds.y1 - pos.y, height);

    match handle {
        ResizeHandle::BottomRight => (grow_max_x(), grow_max_y()),
        ResizeHandle::BottomLeft => (grow_min_x(), grow_max_y()),
        ResizeHandle::TopRight => (grow_max_x(), grow_min_y()),
        ResizeHandle::TopLeft => (grow_min_x(), grow_min_y()),
        ResizeHandle::TopMiddle
        | ResizeHandle::BottomMiddle
        | ResizeHandle::MiddleLeft
        | ResizeHandle::MiddleRight => (1.0, 1.0),
    }
}

fn guarded_ratio(numerator: f64, extent: f64) -> f64 {
    if extent.abs() < f64::EPSILON {
        return 1.0;
    }
    let ratio = numerator / extent;
    if ratio.is_finite() { ratio } else { 1.0 }
}

fn transformed(path: &Path, affine: Affine) -> Path {
    let points: Vec<Point> = path.points.iter().map(|p| affine * *p).collect();
    if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        log::warn!("Rejected transform producing non-finite coordinates: {:?}", affine);
        return path.clone();
    }
    Path::from_points(points, path.style.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::PathStyle;

    const EPS: f64 = 1e-9;

    fn sample() -> Path {
        Path::from_points(
            vec![
                Point::new(1.0, 2.0),
                Point::new(7.5, -3.0),
                Point::new(4.0, 9.0),
                Point::new(-2.0, 5.5),
            ],
            PathStyle::new(2.0, true).with_color("#22C55E"),
        )
    }

    fn assert_points_close(a: &Path, b: &Path) {
        assert_eq!(a.len(), b.len());
        for (p, q) in a.points.iter().zip(&b.points) {
            assert!((p.x - q.x).abs() < EPS && (p.y - q.y).abs() < EPS, "{p:?} != {q:?}");
        }
    }

    #[test]
    fn test_translate_bounds_commute() {
        let path = sample();
        for (dx, dy) in [(0.0, 0.0), (3.5, -2.0), (-100.0, 42.25)] {
            let moved = bounds(&translate(&path, dx, dy));
            let expected = bounds(&path) + Vec2::new(dx, dy);
            assert!((moved.x0 - expected.x0).abs() < EPS);
            assert!((moved.y0 - expected.y0).abs() < EPS);
            assert!((moved.x1 - expected.x1).abs() < EPS);
            assert!((moved.y1 - expected.y1).abs() < EPS);
        }
    }

    #[test]
    fn test_flip_is_self_inverse() {
        let path = sample();
        let origin = Point::new(3.0, -1.0);
        for axis in [FlipAxis::Horizontal, FlipAxis::Vertical] {
            let twice = flip(&flip(&path, axis, origin), axis, origin);
            assert_points_close(&twice, &path);
        }
    }

    #[test]
    fn test_flip_horizontal_mirrors_x_only() {
        let path = sample();
        let flipped = flip(&path, FlipAxis::Horizontal, Point::new(10.0, 99.0));
        for (p, q) in path.points.iter().zip(&flipped.points) {
            assert!((q.x - (20.0 - p.x)).abs() < EPS);
            assert_eq!(q.y, p.y);
        }
    }

    #[test]
    fn test_flip_vertical_mirrors_y_only() {
        let path = sample();
        let flipped = flip(&path, FlipAxis::Vertical, Point::new(99.0, 1.0));
        for (p, q) in path.points.iter().zip(&flipped.points) {
            assert_eq!(q.x, p.x);
            assert!((q.y - (2.0 - p.y)).abs() < EPS);
        }
    }

    #[test]
    fn test_rotate_inverse() {
        let path = sample();
        let origin = Point::new(2.0, 3.0);
        for angle in [0.3, -1.7, std::f64::consts::PI, 5.0] {
            let back = rotate(&rotate(&path, angle, origin), -angle, origin);
            assert_points_close(&back, &path);
        }
    }

    #[test]
    fn test_rotate_quarter_turn_direction() {
        let path = Path::from_points(vec![Point::new(1.0, 0.0)], PathStyle::default());
        let turned = rotate(&path, std::f64::consts::FRAC_PI_2, Point::ZERO);
        // +90° maps +x onto +y (downward on a y-down screen).
        assert!((turned.points[0].x).abs() < EPS);
        assert!((turned.points[0].y - 1.0).abs() < EPS);
    }

    #[test]
    fn test_scale_about_origin() {
        let path = Path::from_points(
            vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
            PathStyle::default(),
        );
        let scaled = scale(&path, 2.0, 3.0, Point::new(5.0, 5.0));
        assert_eq!(scaled.points, vec![Point::new(-5.0, -10.0), Point::new(15.0, 20.0)]);
    }

    #[test]
    fn test_transforms_preserve_style() {
        let path = sample();
        let origin = center(&path);
        assert_eq!(translate(&path, 1.0, 1.0).style, path.style);
        assert_eq!(scale(&path, 2.0, 2.0, origin).style, path.style);
        assert_eq!(rotate(&path, 1.0, origin).style, path.style);
        assert_eq!(flip(&path, FlipAxis::Vertical, origin).style, path.style);
    }

    #[test]
    fn test_non_finite_transform_is_rejected() {
        let path = sample();
        let scaled = scale(&path, f64::INFINITY, 1.0, Point::ZERO);
        assert_eq!(scaled, path);
        let rotated = rotate(&path, f64::NAN, Point::ZERO);
        assert_eq!(rotated, path);
    }

    #[test]
    fn test_resize_factors_bottom_right_doubles() {
        let b = Rect::new(0.0, 0.0, 10.0, 10.0);
        let f = resize_factors(
            b,
            ResizeHandle::BottomRight,
            Point::new(10.0, 10.0),
            Point::new(20.0, 20.0),
        );
        assert_eq!(f, (2.0, 2.0));
    }

    #[test]
    fn test_resize_factors_top_left_grows_when_dragged_out() {
        let b = Rect::new(0.0, 0.0, 10.0, 10.0);
        let f = resize_factors(
            b,
            ResizeHandle::TopLeft,
            Point::new(0.0, 0.0),
            Point::new(-10.0, -5.0),
        );
        assert_eq!(f, (2.0, 1.5));
    }

    #[test]
    fn test_resize_factors_mixed_corners() {
        let b = Rect::new(0.0, 0.0, 10.0, 20.0);
        let bl = resize_factors(
            b,
            ResizeHandle::BottomLeft,
            Point::new(0.0, 20.0),
            Point::new(5.0, 30.0),
        );
        assert_eq!(bl, (0.5, 1.5));
        let tr = resize_factors(
            b,
            ResizeHandle::TopRight,
            Point::new(10.0, 0.0),
            Point::new(15.0, 10.0),
        );
        assert_eq!(tr, (1.5, 0.5));
    }

    #[test]
    fn test_resize_factors_edge_handles_are_inert() {
        let b = Rect::new(0.0, 0.0, 10.0, 10.0);
        let edges = ResizeHandle::ALL.into_iter().filter(|h| !h.is_corner());
        assert_eq!(edges.clone().count(), 4);
        for handle in edges {
            let f = resize_factors(b, handle, Point::new(5.0, 0.0), Point::new(50.0, 50.0));
            assert_eq!(f, (1.0, 1.0));
        }
    }

    #[test]
    fn test_resize_factors_zero_extent_guard() {
        // A horizontal line has zero height.
        let b = Rect::new(0.0, 5.0, 10.0, 5.0);
        let (sx, sy) = resize_factors(
            b,
            ResizeHandle::BottomRight,
            Point::new(10.0, 5.0),
            Point::new(20.0, 9.0),
        );
        assert_eq!(sx, 2.0);
        assert_eq!(sy, 1.0);

        let point = Rect::new(3.0, 3.0, 3.0, 3.0);
        let f = resize_factors(
            point,
            ResizeHandle::TopLeft,
            Point::new(3.0, 3.0),
            Point::new(0.0, 0.0),
        );
        assert_eq!(f, (1.0, 1.0));
    }
}
