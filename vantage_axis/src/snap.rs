// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapping onto the 1‑2‑5 nice-number ladder.

use crate::AxisError;

/// Relative tolerance used when comparing a value with ladder candidates.
///
/// A value within this fraction of a nice number snaps to it in both
/// directions, which absorbs round-off such as `0.1 * 3.0`.
pub const SNAP_EPSILON: f64 = 1e-9;

const MULTIPLIERS: [f64; 3] = [1.0, 2.0, 5.0];

/// Largest power of ten that is exactly representable as an `f64`.
const MAX_EXACT_POWER: u32 = 22;

/// Returns `floor(log10(x))` for a finite positive `x`.
///
/// The floating-point estimate is corrected against exact powers of ten, so
/// `decade_exponent(0.001) == -3` even when `log10` rounds just below.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "decade exponents of finite f64 values lie within [-324, 308]"
)]
pub fn decade_exponent(x: f64) -> i32 {
    let e = libm::floor(libm::log10(x)) as i32;
    if nice_value(1.0, e + 1) <= x {
        e + 1
    } else if nice_value(1.0, e) > x {
        e - 1
    } else {
        e
    }
}

/// Snaps `x` up to the smallest nice number that is `>= x`.
///
/// Nice numbers are `{1, 2, 5} × 10ⁿ`. Inputs that already are nice numbers
/// are returned unchanged.
///
/// # Errors
///
/// Returns [`AxisError::InvalidArgument`] when `x` is not finite, is not
/// strictly positive, or has no finite nice number above it.
pub fn snap_up(x: f64) -> Result<f64, AxisError> {
    check_positive(x)?;
    let e = decade_exponent(x);
    let limit = x * (1.0 - SNAP_EPSILON);
    for decade in (e - 1)..=(e + 1) {
        for m in MULTIPLIERS {
            let candidate = nice_value(m, decade);
            if candidate.is_finite() && candidate > 0.0 && candidate >= limit {
                return Ok(candidate);
            }
        }
    }
    Err(AxisError::invalid("x", x))
}

/// Snaps `x` down to the largest nice number that is `<= x`.
///
/// # Errors
///
/// Returns [`AxisError::InvalidArgument`] when `x` is not finite, is not
/// strictly positive, or is below the smallest representable nice number.
pub fn snap_down(x: f64) -> Result<f64, AxisError> {
    check_positive(x)?;
    let e = decade_exponent(x);
    let limit = x * (1.0 + SNAP_EPSILON);
    let mut best = None;
    for decade in (e - 1)..=(e + 1) {
        for m in MULTIPLIERS {
            let candidate = nice_value(m, decade);
            if candidate.is_finite() && candidate > 0.0 && candidate <= limit {
                best = Some(candidate);
            }
        }
    }
    best.ok_or(AxisError::invalid("x", x))
}

/// Suggests a nice world-space step so that consecutive ticks land roughly
/// `target_px` pixels apart.
///
/// `world_units_per_pixel` is the magnitude of the view scale along the axis
/// (its sign is ignored).
///
/// # Errors
///
/// Returns [`AxisError::InvalidArgument`] when either input is zero or
/// non-finite, or when the product has no finite nice number above it.
pub fn suggest_step(world_units_per_pixel: f64, target_px: f64) -> Result<f64, AxisError> {
    if !world_units_per_pixel.is_finite() || world_units_per_pixel == 0.0 {
        return Err(AxisError::invalid(
            "world_units_per_pixel",
            world_units_per_pixel,
        ));
    }
    if !target_px.is_finite() || target_px <= 0.0 {
        return Err(AxisError::invalid("target_px", target_px));
    }
    snap_up(world_units_per_pixel.abs() * target_px)
}

fn check_positive(x: f64) -> Result<(), AxisError> {
    if x.is_finite() && x > 0.0 {
        Ok(())
    } else {
        Err(AxisError::invalid("x", x))
    }
}

/// `m × 10^e`, built so that results compare equal to the matching decimal
/// literal (`nice_value(5.0, -3) == 0.005`).
pub(crate) fn nice_value(m: f64, e: i32) -> f64 {
    let p = power_of_ten(e.unsigned_abs());
    if e >= 0 { m * p } else { m / p }
}

/// `10^e`, exact up to [`MAX_EXACT_POWER`].
pub(crate) fn power_of_ten(e: u32) -> f64 {
    if e <= MAX_EXACT_POWER {
        let mut p = 1.0;
        for _ in 0..e {
            p *= 10.0;
        }
        p
    } else {
        libm::pow(10.0, f64::from(e))
    }
}
