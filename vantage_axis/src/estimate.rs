// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional numeric estimates with well-defined `min`/`max` merging.
//!
//! Painters that contribute to "fit the view to the data" report the extent
//! they cover, or nothing at all. Merging follows two rules:
//! - an absent operand is ignored;
//! - NaN survives only when both operands are NaN.

use crate::plan::AxisRange;

/// A numeric value that may be absent.
///
/// Unlike a plain `Option<f64>`, merging two estimates never lets a single
/// NaN poison a known value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Estimate(Option<f64>);

impl Estimate {
    /// An absent estimate.
    pub const ABSENT: Self = Self(None);

    /// A present estimate. `value` may be NaN.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(Some(value))
    }

    /// The value, if present.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        self.0
    }

    /// Returns `true` if no value was reported.
    #[must_use]
    pub const fn is_absent(self) -> bool {
        self.0.is_none()
    }

    /// Returns `true` if a value is present and NaN.
    #[must_use]
    pub fn is_nan(self) -> bool {
        self.0.is_some_and(f64::is_nan)
    }

    /// The value, if present and finite.
    #[must_use]
    pub fn finite(self) -> Option<f64> {
        self.0.filter(|v| v.is_finite())
    }

    /// Smaller of two estimates.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        self.merge(other, f64::min)
    }

    /// Larger of two estimates.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        self.merge(other, f64::max)
    }

    fn merge(self, other: Self, pick: fn(f64, f64) -> f64) -> Self {
        match (self.0, other.0) {
            (None, o) => Self(o),
            (s, None) => Self(s),
            // `f64::min`/`f64::max` return the other operand when one is NaN.
            (Some(a), Some(b)) => Self(Some(pick(a, b))),
        }
    }
}

impl From<f64> for Estimate {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Option<f64>> for Estimate {
    fn from(value: Option<f64>) -> Self {
        Self(value)
    }
}

/// Running `[min, max]` estimate of the data a painter covers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RangeEstimate {
    /// Lower end.
    pub min: Estimate,
    /// Upper end.
    pub max: Estimate,
}

impl RangeEstimate {
    /// An estimate that has seen no data.
    pub const EMPTY: Self = Self {
        min: Estimate::ABSENT,
        max: Estimate::ABSENT,
    };

    /// Widens the estimate to include `value`.
    pub fn include(&mut self, value: f64) {
        let value = Estimate::new(value);
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Combines two estimates end by end.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Converts to an [`AxisRange`] when both ends are finite.
    #[must_use]
    pub fn to_range(self) -> Option<AxisRange> {
        let min = self.min.finite()?;
        let max = self.max.finite()?;
        AxisRange::new(min, max).ok()
    }
}

impl FromIterator<f64> for RangeEstimate {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut estimate = Self::EMPTY;
        for value in iter {
            estimate.include(value);
        }
        estimate
    }
}
