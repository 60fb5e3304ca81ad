// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect};
use log::trace;

use crate::anchor::AnchorFraction;
use crate::error::LabelError;
use crate::measure::TextMeasurer;
use crate::predicate::LabelPredicate;
use crate::shape::LabelShape;

/// Where and how a text label is attached to the world.
///
/// The label's `anchor` point (a fraction of its own text box) is pinned to
/// `location`, and the text is rotated by `angle` radians around it.
///
/// With `transforming_labels` set, the text lives in world space and is
/// scaled, flipped and rotated along with the view. Otherwise only the
/// location follows the view; the text keeps a constant pixel size and its
/// angle is measured on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    anchor: AnchorFraction,
    location: Point,
    angle: f64,
    transforming_labels: bool,
}

impl LabelPlacement {
    /// Creates an unrotated, top-left anchored placement at a world location.
    pub fn new(location: Point) -> Result<Self, LabelError> {
        Self::default().with_location(location)
    }

    /// Replaces the world location.
    pub fn with_location(mut self, location: Point) -> Result<Self, LabelError> {
        check_finite("location x", location.x)?;
        check_finite("location y", location.y)?;
        self.location = location;
        Ok(self)
    }

    /// Replaces the anchor.
    pub fn with_anchor(mut self, anchor: AnchorFraction) -> Self {
        self.anchor = anchor;
        self
    }

    /// Replaces the rotation, in radians.
    pub fn with_angle(mut self, angle: f64) -> Result<Self, LabelError> {
        check_finite("angle", angle)?;
        self.angle = angle;
        Ok(self)
    }

    /// Chooses whether the text follows the view's scale and rotation.
    pub fn with_transforming_labels(mut self, transforming: bool) -> Self {
        self.transforming_labels = transforming;
        self
    }

    /// Anchor inside the text box.
    pub fn anchor(&self) -> AnchorFraction {
        self.anchor
    }

    /// World location the anchor is pinned to.
    pub fn location(&self) -> Point {
        self.location
    }

    /// Rotation in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Whether the text is transformed together with the world.
    pub fn transforming_labels(&self) -> bool {
        self.transforming_labels
    }

    /// Computes the transform taking local text coordinates to the screen.
    ///
    /// The resolved anchor of `text_bounds` always lands on the screen image
    /// of [`LabelPlacement::location`].
    pub fn placement_transform(&self, text_bounds: Rect, world_to_screen: Affine) -> Affine {
        let anchor = self.anchor.resolve(text_bounds).to_vec2();
        let local = Affine::rotate(self.angle) * Affine::translate(-anchor);
        if self.transforming_labels {
            world_to_screen * Affine::translate(self.location.to_vec2()) * local
        } else {
            let screen = world_to_screen * self.location;
            Affine::translate(screen.to_vec2()) * local
        }
    }

    /// Computes the screen footprint of text with the given bounds.
    pub fn shape(&self, text_bounds: Rect, world_to_screen: Affine) -> LabelShape {
        LabelShape::new(
            self.placement_transform(text_bounds, world_to_screen),
            text_bounds,
        )
    }

    /// Measures `text`, places it, and applies `predicate`.
    ///
    /// Returns `None` when the predicate vetoes the label.
    pub fn layout<M: TextMeasurer + ?Sized>(
        &self,
        text: &str,
        measurer: &M,
        world_to_screen: Affine,
        predicate: &LabelPredicate,
    ) -> Option<LabelShape> {
        let shape = self.shape(measurer.text_bounds(text), world_to_screen);
        if predicate.evaluate(&shape) {
            Some(shape)
        } else {
            trace!("label {text:?} vetoed by {predicate}");
            None
        }
    }
}

impl Default for LabelPlacement {
    fn default() -> Self {
        Self {
            anchor: AnchorFraction::default(),
            location: Point::ORIGIN,
            angle: 0.0,
            transforming_labels: false,
        }
    }
}

fn check_finite(what: &'static str, value: f64) -> Result<(), LabelError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LabelError::invalid(what, value))
    }
}
