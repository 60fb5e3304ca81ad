// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::error::LabelError;

/// A point inside a label's own text box, given as fractions of its size.
///
/// `(0, 0)` is the top-left corner of the untransformed text bounds and
/// `(1, 1)` the bottom-right. Both fractions are finite and lie in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorFraction {
    x: f64,
    y: f64,
}

impl AnchorFraction {
    /// Top-left corner.
    pub const TOP_LEFT: Self = Self { x: 0.0, y: 0.0 };
    /// Middle of the top edge.
    pub const TOP_CENTER: Self = Self { x: 0.5, y: 0.0 };
    /// Top-right corner.
    pub const TOP_RIGHT: Self = Self { x: 1.0, y: 0.0 };
    /// Middle of the left edge.
    pub const CENTER_LEFT: Self = Self { x: 0.0, y: 0.5 };
    /// Center of the box.
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };
    /// Middle of the right edge.
    pub const CENTER_RIGHT: Self = Self { x: 1.0, y: 0.5 };
    /// Bottom-left corner.
    pub const BOTTOM_LEFT: Self = Self { x: 0.0, y: 1.0 };
    /// Middle of the bottom edge.
    pub const BOTTOM_CENTER: Self = Self { x: 0.5, y: 1.0 };
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Self = Self { x: 1.0, y: 1.0 };

    /// Creates an anchor from horizontal and vertical fractions.
    ///
    /// Returns [`LabelError::InvalidArgument`] if either fraction is NaN or
    /// outside `[0, 1]`.
    pub fn new(x: f64, y: f64) -> Result<Self, LabelError> {
        check_fraction("anchor x", x)?;
        check_fraction("anchor y", y)?;
        Ok(Self { x, y })
    }

    /// Horizontal fraction.
    pub fn x(self) -> f64 {
        self.x
    }

    /// Vertical fraction.
    pub fn y(self) -> f64 {
        self.y
    }

    /// Resolves this anchor against concrete text bounds.
    ///
    /// The result is in the same local coordinates as `bounds`.
    pub fn resolve(self, bounds: Rect) -> Point {
        Point::new(
            bounds.x0 + self.x * bounds.width(),
            bounds.y0 + self.y * bounds.height(),
        )
    }
}

impl Default for AnchorFraction {
    fn default() -> Self {
        Self::TOP_LEFT
    }
}

fn check_fraction(what: &'static str, value: f64) -> Result<(), LabelError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(LabelError::invalid(what, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_resolve_to_box_points() {
        let b = Rect::new(10.0, -8.0, 50.0, 2.0);
        assert_eq!(AnchorFraction::TOP_LEFT.resolve(b), Point::new(10.0, -8.0));
        assert_eq!(AnchorFraction::CENTER.resolve(b), Point::new(30.0, -3.0));
        assert_eq!(
            AnchorFraction::BOTTOM_RIGHT.resolve(b),
            Point::new(50.0, 2.0)
        );
        assert_eq!(
            AnchorFraction::CENTER_RIGHT.resolve(b),
            Point::new(50.0, -3.0)
        );
        assert_eq!(
            AnchorFraction::BOTTOM_CENTER.resolve(b),
            Point::new(30.0, 2.0)
        );
    }

    #[test]
    fn new_accepts_closed_unit_interval() {
        let a = AnchorFraction::new(0.0, 1.0).unwrap();
        assert_eq!(a, AnchorFraction::BOTTOM_LEFT);
        let a = AnchorFraction::new(0.25, 0.75).unwrap();
        assert_eq!((a.x(), a.y()), (0.25, 0.75));
    }

    #[test]
    fn new_rejects_out_of_range_and_nan() {
        assert_eq!(
            AnchorFraction::new(-0.1, 0.5),
            Err(LabelError::InvalidArgument {
                what: "anchor x",
                value: -0.1
            })
        );
        assert_eq!(
            AnchorFraction::new(0.5, 1.5),
            Err(LabelError::InvalidArgument {
                what: "anchor y",
                value: 1.5
            })
        );
        assert!(AnchorFraction::new(f64::NAN, 0.0).is_err(), "NaN x");
        assert!(AnchorFraction::new(0.0, f64::INFINITY).is_err(), "inf y");
    }

    #[test]
    fn resolve_on_empty_bounds_is_origin() {
        let b = Rect::new(3.0, 4.0, 3.0, 4.0);
        assert_eq!(AnchorFraction::CENTER.resolve(b), Point::new(3.0, 4.0));
    }
}
