// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis ranges and tick plans.

use alloc::string::String;

use crate::AxisError;
use crate::format::NumberFormat;
use crate::snap::{decade_exponent, nice_value, power_of_ten, snap_up};

/// Upper bound on the number of ticks a [`Ticks`] iterator yields.
pub const MAX_TICKS: usize = 10_000;

/// A closed numeric span `[min, max]` with finite bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    min: f64,
    max: f64,
}

impl AxisRange {
    /// Creates a range.
    ///
    /// # Errors
    ///
    /// Returns [`AxisError::InvalidArgument`] if either bound is not finite
    /// or `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, AxisError> {
        if !min.is_finite() {
            return Err(AxisError::invalid("min", min));
        }
        if !max.is_finite() || min > max {
            return Err(AxisError::invalid("max", max));
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`. May be infinite when the bounds are huge and of opposite sign.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` if `value` lies within the closed range.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Smallest range covering both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Tick layout for an [`AxisRange`].
///
/// A plan pairs a step with the range bounds rounded outward to multiples
/// of that step, and a [`NumberFormat`] precise enough to tell neighboring
/// ticks apart. Plans are cheap and meant to be recomputed whenever the view
/// changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickPlan {
    step: f64,
    first_index: f64,
    last_index: f64,
    snapped_min: f64,
    snapped_max: f64,
    format: NumberFormat,
    /// Decimals at which tick values are re-rounded, for nice steps below one.
    clean_decimals: Option<u32>,
}

impl TickPlan {
    /// Plans roughly `target_ticks` intervals across `range`.
    ///
    /// The step is the nice number at or above `span / target_ticks`. A
    /// zero-width range uses the nice number at or above `|min|` (or `1`
    /// when the range is `[0, 0]`).
    ///
    /// # Errors
    ///
    /// Returns [`AxisError::InvalidArgument`] if `target_ticks` is zero or no
    /// finite nice step fits the range.
    pub fn new(range: AxisRange, target_ticks: usize) -> Result<Self, AxisError> {
        if target_ticks == 0 {
            return Err(AxisError::invalid("target_ticks", 0.0));
        }
        let span = range.span();
        let step = if span > 0.0 {
            snap_up(span / target_ticks as f64)?
        } else if range.min() != 0.0 {
            snap_up(range.min().abs())?
        } else {
            1.0
        };
        Self::with_step(range, step)
    }

    /// Plans ticks so they land roughly `target_spacing_px` apart when the
    /// range is drawn across `pixel_extent` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`AxisError::InvalidArgument`] if either pixel quantity is not
    /// strictly positive and finite, or as [`TickPlan::new`].
    #[expect(
        clippy::cast_possible_truncation,
        reason = "tick counts are clamped to MAX_TICKS before the cast"
    )]
    pub fn for_pixels(
        range: AxisRange,
        pixel_extent: f64,
        target_spacing_px: f64,
    ) -> Result<Self, AxisError> {
        if !pixel_extent.is_finite() || pixel_extent <= 0.0 {
            return Err(AxisError::invalid("pixel_extent", pixel_extent));
        }
        if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
            return Err(AxisError::invalid("target_spacing_px", target_spacing_px));
        }
        let count = libm::floor(pixel_extent / target_spacing_px).clamp(1.0, MAX_TICKS as f64);
        Self::new(range, count as usize)
    }

    /// Plans ticks with an explicit `step`, which need not be a nice number.
    ///
    /// # Errors
    ///
    /// Returns [`AxisError::InvalidArgument`] if `step` is not strictly
    /// positive and finite, or the snapped bounds overflow.
    pub fn with_step(range: AxisRange, step: f64) -> Result<Self, AxisError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(AxisError::invalid("step", step));
        }
        let first_index = libm::floor(range.min() / step);
        let last_index = libm::ceil(range.max() / step);
        let e = decade_exponent(step);
        let clean_decimals = (e < 0 && is_nice(step, e)).then_some(e.unsigned_abs());

        let mut plan = Self {
            step,
            first_index,
            last_index,
            snapped_min: 0.0,
            snapped_max: 0.0,
            format: NumberFormat::Fixed { max_decimals: 0 },
            clean_decimals,
        };
        plan.snapped_min = plan.value_at(first_index);
        plan.snapped_max = plan.value_at(last_index);
        if !plan.snapped_min.is_finite() || !plan.snapped_max.is_finite() {
            return Err(AxisError::invalid("step", step));
        }
        let magnitude = plan.snapped_min.abs().max(plan.snapped_max.abs());
        plan.format = NumberFormat::for_step(step, magnitude);
        Ok(plan)
    }

    /// Distance between consecutive ticks.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Range minimum rounded down to a multiple of the step.
    #[must_use]
    pub fn snapped_min(&self) -> f64 {
        self.snapped_min
    }

    /// Range maximum rounded up to a multiple of the step.
    #[must_use]
    pub fn snapped_max(&self) -> f64 {
        self.snapped_max
    }

    /// The snapped bounds as a range.
    #[must_use]
    pub fn snapped_range(&self) -> AxisRange {
        AxisRange {
            min: self.snapped_min,
            max: self.snapped_max,
        }
    }

    /// Label format for values of this plan.
    #[must_use]
    pub fn format(&self) -> NumberFormat {
        self.format
    }

    /// Formats a tick value with [`TickPlan::format`].
    #[must_use]
    pub fn label(&self, value: f64) -> String {
        self.format.format(value)
    }

    /// Iterates tick values from `snapped_min` to `snapped_max` inclusive.
    ///
    /// Values are computed from their index rather than accumulated, and at
    /// most [`MAX_TICKS`] are produced.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the tick count is clamped to MAX_TICKS before the cast"
    )]
    pub fn ticks(&self) -> Ticks {
        let count = (self.last_index - self.first_index + 1.0).clamp(0.0, MAX_TICKS as f64);
        Ticks {
            plan: *self,
            next: 0,
            count: count as usize,
        }
    }

    fn value_at(&self, index: f64) -> f64 {
        let value = index * self.step;
        match self.clean_decimals {
            Some(decimals) => {
                let p = power_of_ten(decimals);
                libm::round(value * p) / p
            }
            None => value,
        }
    }
}

/// Returns `true` if `step` is `{1, 2, 5} × 10^e`.
fn is_nice(step: f64, e: i32) -> bool {
    [1.0, 2.0, 5.0]
        .into_iter()
        .any(|m| nice_value(m, e) == step)
}

/// Iterator over the tick values of a [`TickPlan`].
#[derive(Clone, Debug)]
pub struct Ticks {
    plan: TickPlan,
    next: usize,
    count: usize,
}

impl Iterator for Ticks {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.count {
            return None;
        }
        let value = self
            .plan
            .value_at(self.plan.first_index + self.next as f64);
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ticks {}
