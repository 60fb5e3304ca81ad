// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, BezPath, Point, Rect};

/// The screen-space footprint of a placed label.
///
/// A label shape is its untransformed text bounds plus the placement
/// transform that carries them onto the screen. Under rotation the footprint
/// is a general quadrilateral; [`LabelShape::bounding_box`] gives its
/// axis-aligned envelope for cheap tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelShape {
    transform: Affine,
    text_bounds: Rect,
}

impl LabelShape {
    /// Creates a shape from a placement transform and local text bounds.
    pub fn new(transform: Affine, text_bounds: Rect) -> Self {
        Self {
            transform,
            text_bounds,
        }
    }

    /// Local to screen transform of the label.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Untransformed text bounds.
    pub fn text_bounds(&self) -> Rect {
        self.text_bounds
    }

    /// Screen positions of the text box corners.
    ///
    /// Order is top-left, top-right, bottom-right, bottom-left in local
    /// coordinates.
    pub fn corners(&self) -> [Point; 4] {
        let b = self.text_bounds;
        [
            Point::new(b.x0, b.y0),
            Point::new(b.x1, b.y0),
            Point::new(b.x1, b.y1),
            Point::new(b.x0, b.y1),
        ]
        .map(|p| self.transform * p)
    }

    /// Closed outline of the label footprint.
    pub fn to_path(&self) -> BezPath {
        let [a, b, c, d] = self.corners();
        let mut path = BezPath::new();
        path.move_to(a);
        path.line_to(b);
        path.line_to(c);
        path.line_to(d);
        path.close_path();
        path
    }

    /// Axis-aligned screen bounding box of the footprint.
    pub fn bounding_box(&self) -> Rect {
        self.transform.transform_rect_bbox(self.text_bounds)
    }

    /// Width of [`LabelShape::bounding_box`].
    pub fn width(&self) -> f64 {
        self.bounding_box().width()
    }

    /// Height of [`LabelShape::bounding_box`].
    pub fn height(&self) -> f64 {
        self.bounding_box().height()
    }

    /// Returns `true` if `screen_pt` falls inside the (possibly rotated)
    /// footprint.
    ///
    /// A degenerate placement transform has no interior and never hits.
    pub fn contains(&self, screen_pt: Point) -> bool {
        let det = self.transform.determinant();
        if !det.is_finite() || det.abs() < f64::MIN_POSITIVE {
            return false;
        }
        let local = self.transform.inverse() * screen_pt;
        let b = self.text_bounds;
        (b.x0..=b.x1).contains(&local.x) && (b.y0..=b.y1).contains(&local.y)
    }

    /// Conservative overlap test using bounding boxes.
    ///
    /// Boxes that merely touch do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        let a = self.bounding_box();
        let b = other.bounding_box();
        a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::FRAC_PI_2;

    use kurbo::{PathEl, Vec2};

    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn identity_shape_matches_text_bounds() {
        let b = Rect::new(0.0, -8.0, 30.0, 2.0);
        let s = LabelShape::new(Affine::IDENTITY, b);
        assert_eq!(s.bounding_box(), b);
        assert_eq!(s.width(), 30.0);
        assert_eq!(s.height(), 10.0);
        assert_eq!(s.corners()[2], Point::new(30.0, 2.0));
    }

    #[test]
    fn quarter_turn_swaps_extent() {
        let b = Rect::new(0.0, 0.0, 30.0, 10.0);
        let s = LabelShape::new(Affine::rotate(FRAC_PI_2), b);
        assert!((s.width() - 10.0).abs() < 1e-9, "width {}", s.width());
        assert!((s.height() - 30.0).abs() < 1e-9, "height {}", s.height());
        let [tl, tr, _, bl] = s.corners();
        assert!(close(tl, Point::ZERO), "top-left stays at origin");
        assert!(close(tr, Point::new(0.0, 30.0)), "x axis maps to +y");
        assert!(close(bl, Point::new(-10.0, 0.0)), "y axis maps to -x");
    }

    #[test]
    fn path_is_closed_quad() {
        let s = LabelShape::new(
            Affine::translate(Vec2::new(5.0, 5.0)),
            Rect::new(0.0, 0.0, 4.0, 2.0),
        );
        let path = s.to_path();
        let els = path.elements();
        assert_eq!(els.len(), 5);
        assert_eq!(els[0], PathEl::MoveTo(Point::new(5.0, 5.0)));
        assert_eq!(els[2], PathEl::LineTo(Point::new(9.0, 7.0)));
        assert_eq!(els[4], PathEl::ClosePath);
    }

    #[test]
    fn contains_respects_rotation() {
        // A long thin box turned 45 degrees: its bounding-box corner is empty.
        let s = LabelShape::new(
            Affine::rotate(FRAC_PI_2 / 2.0),
            Rect::new(0.0, -1.0, 40.0, 1.0),
        );
        assert!(s.contains(Point::new(14.0, 14.0)), "on the diagonal");
        assert!(!s.contains(Point::new(26.0, 2.0)), "inside bbox only");
        assert!(s.bounding_box().contains(Point::new(26.0, 2.0)));
    }

    #[test]
    fn degenerate_transform_never_hits() {
        let s = LabelShape::new(Affine::scale(0.0), Rect::new(0.0, 0.0, 4.0, 2.0));
        assert!(!s.contains(Point::ZERO), "zero-area footprint");
    }

    #[test]
    fn overlap_uses_open_boxes() {
        let b = Rect::new(0.0, 0.0, 10.0, 10.0);
        let a = LabelShape::new(Affine::IDENTITY, b);
        let touching = LabelShape::new(Affine::translate(Vec2::new(10.0, 0.0)), b);
        let crossing = LabelShape::new(Affine::translate(Vec2::new(9.0, 9.0)), b);
        let apart = LabelShape::new(Affine::translate(Vec2::new(0.0, 30.0)), b);
        assert!(!a.overlaps(&touching), "shared edge");
        assert!(a.overlaps(&crossing), "shared corner area");
        assert!(crossing.overlaps(&a), "symmetric");
        assert!(!a.overlaps(&apart), "disjoint");
    }
}
