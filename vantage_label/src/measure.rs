// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for label placement.
//!
//! Shaping and font handling live downstream, so placement only needs the
//! untransformed bounding box of a string.

use kurbo::Rect;

/// Source of text bounding boxes.
///
/// Bounds are expressed in the label's local coordinate system: the text
/// origin sits at `(0, 0)` on the baseline, `y` grows downward, so glyph
/// ascent has negative `y`.
pub trait TextMeasurer {
    /// Returns the local bounding box of `text`.
    fn text_bounds(&self, text: &str) -> Rect;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn text_bounds(&self, text: &str) -> Rect {
        (**self).text_bounds(text)
    }
}

/// A heuristic text measurer suitable for tests and early layout.
///
/// It assumes an average glyph advance of 0.6em, an ascent of 0.8em above
/// the baseline and a descent of 0.2em below it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeuristicTextMeasurer {
    /// Font size in label units.
    pub font_size: f64,
}

impl HeuristicTextMeasurer {
    /// Font size used by [`Default`].
    pub const DEFAULT_FONT_SIZE: f64 = 12.0;

    /// Creates a measurer for the given font size.
    pub const fn new(font_size: f64) -> Self {
        Self { font_size }
    }
}

impl Default for HeuristicTextMeasurer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FONT_SIZE)
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn text_bounds(&self, text: &str) -> Rect {
        let glyphs = text.chars().count() as f64;
        let em = self.font_size;
        Rect::new(0.0, -0.8 * em, 0.6 * em * glyphs, 0.2 * em)
    }
}
