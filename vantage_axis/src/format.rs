// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Magnitude-aware numeric label formats.

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;

use crate::snap::decade_exponent;

/// Smallest decade exponent rendered in fixed-point notation (`0.001`).
pub const MIN_FIXED_EXPONENT: i32 = -3;

/// Largest decade exponent rendered in fixed-point notation (`9_999_999_999`).
pub const MAX_FIXED_EXPONENT: i32 = 9;

/// Significant digits targeted by fixed-point formats.
///
/// A value in decade `e` gets at most `SIGNIFICANT_DIGITS - e` decimals, so
/// `0.01` may show up to five (`0.01234`) and `100` none.
pub const SIGNIFICANT_DIGITS: i32 = 3;

/// Mantissa decimals used by scientific formats outside the fixed band.
pub const SCIENTIFIC_PRECISION: usize = 3;

/// A numeric display format chosen from a value's magnitude.
///
/// Both numeric variants describe a *maximum* precision: trailing zeros and a
/// dangling decimal point are trimmed when formatting, so tick values on the
/// 1‑2‑5 ladder render as `0.01` rather than `0.01000` or `1.0e-2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberFormat {
    /// Fixed-point with up to `max_decimals` digits after the point.
    Fixed {
        /// Maximum number of decimals.
        max_decimals: usize,
    },
    /// Scientific notation (`2.5e12`) with up to `precision` mantissa decimals.
    Scientific {
        /// Maximum number of mantissa decimals.
        precision: usize,
    },
    /// Literal `NaN`.
    NotANumber,
    /// Literal `Inf`.
    PositiveInfinity,
    /// Literal `-Inf`.
    NegativeInfinity,
}

impl NumberFormat {
    /// Chooses a format for `value` from the decade of `|value|`.
    ///
    /// Zero is treated as decade `0`. Non-finite values select the matching
    /// literal variant.
    #[must_use]
    pub fn for_value(value: f64) -> Self {
        if let Some(literal) = Self::literal(value) {
            return literal;
        }
        let e = if value == 0.0 {
            0
        } else {
            decade_exponent(value.abs())
        };
        Self::for_exponent(e)
    }

    /// Chooses a format for a value in decade `e`.
    #[must_use]
    pub fn for_exponent(e: i32) -> Self {
        if (MIN_FIXED_EXPONENT..=MAX_FIXED_EXPONENT).contains(&e) {
            Self::Fixed {
                max_decimals: decimals_for(e),
            }
        } else {
            Self::Scientific {
                precision: SCIENTIFIC_PRECISION,
            }
        }
    }

    /// Chooses a format for ticks spaced `step` apart whose largest absolute
    /// value is `magnitude`.
    ///
    /// Precision follows the step so that neighboring ticks never print the
    /// same label. Scientific notation is used when either the step drops
    /// below the fixed band or the largest tick rises above it; its mantissa
    /// then keeps enough decimals to separate the ticks.
    #[must_use]
    pub fn for_step(step: f64, magnitude: f64) -> Self {
        if let Some(literal) = Self::literal(step) {
            return literal;
        }
        if step == 0.0 {
            return Self::for_value(magnitude);
        }
        let e_step = decade_exponent(step.abs());
        let e_max = if magnitude.is_finite() && magnitude != 0.0 {
            decade_exponent(magnitude.abs()).max(e_step)
        } else {
            e_step
        };
        if e_step >= MIN_FIXED_EXPONENT && e_max <= MAX_FIXED_EXPONENT {
            Self::Fixed {
                max_decimals: decimals_for(e_step),
            }
        } else {
            Self::Scientific {
                precision: SCIENTIFIC_PRECISION.max(e_max.abs_diff(e_step) as usize),
            }
        }
    }

    /// Returns `true` for the literal (non-numeric) variants.
    #[must_use]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::NotANumber | Self::PositiveInfinity | Self::NegativeInfinity
        )
    }

    /// Formats `value`.
    ///
    /// Non-finite values always render as `NaN`, `Inf` or `-Inf`, whatever
    /// the format. A literal format applied to a finite value falls back to
    /// [`NumberFormat::for_value`]. Negative zero renders as `0`.
    #[must_use]
    pub fn format(self, value: f64) -> String {
        if let Some(literal) = Self::literal(value) {
            return literal.literal_text().to_string();
        }
        match self {
            Self::Fixed { max_decimals } => {
                let text = format!("{value:.max_decimals$}");
                let trimmed = trim_fraction(&text);
                if trimmed == "-0" {
                    "0".to_string()
                } else {
                    trimmed.to_string()
                }
            }
            Self::Scientific { precision } => {
                if value == 0.0 {
                    return "0".to_string();
                }
                let text = format!("{value:.precision$e}");
                match text.split_once('e') {
                    Some((mantissa, exponent)) => {
                        format!("{}e{exponent}", trim_fraction(mantissa))
                    }
                    None => text,
                }
            }
            Self::NotANumber | Self::PositiveInfinity | Self::NegativeInfinity => {
                Self::for_value(value).format(value)
            }
        }
    }

    fn literal(value: f64) -> Option<Self> {
        if value.is_nan() {
            Some(Self::NotANumber)
        } else if value == f64::INFINITY {
            Some(Self::PositiveInfinity)
        } else if value == f64::NEG_INFINITY {
            Some(Self::NegativeInfinity)
        } else {
            None
        }
    }

    fn literal_text(self) -> &'static str {
        match self {
            Self::NotANumber => "NaN",
            Self::PositiveInfinity => "Inf",
            Self::NegativeInfinity => "-Inf",
            Self::Fixed { .. } | Self::Scientific { .. } => "",
        }
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed { max_decimals } => write!(f, "fixed({max_decimals})"),
            Self::Scientific { precision } => write!(f, "sci({precision})"),
            Self::NotANumber | Self::PositiveInfinity | Self::NegativeInfinity => {
                f.write_str(self.literal_text())
            }
        }
    }
}

fn decimals_for(e: i32) -> usize {
    (SIGNIFICANT_DIGITS - e).max(0).unsigned_abs() as usize
}

/// Drops trailing zeros after a decimal point, then the point itself.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
