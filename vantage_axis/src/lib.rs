// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Axis: headless tick planning for numeric axes.
//!
//! This crate answers two questions an axis or grid painter asks every frame:
//! - Which round numbers should carry ticks? Values are snapped onto the
//!   canonical 1‑2‑5 ladder (`…, 0.01, 0.02, 0.05, 0.1, 0.2, 0.5, 1, 2, 5, 10, …`).
//! - How should those numbers be printed? A [`NumberFormat`] is chosen from
//!   the magnitude of the value (or of the tick step) so labels show about
//!   three significant digits without trailing noise.
//!
//! It does **not** draw anything. Callers combine a [`TickPlan`] with their
//! own view transform and text rendering.
//!
//! ## Snapping
//!
//! ```rust
//! use vantage_axis::{snap_down, snap_up};
//!
//! assert_eq!(snap_up(0.006).unwrap(), 0.01);
//! assert_eq!(snap_down(0.006).unwrap(), 0.005);
//! assert_eq!(snap_up(999.9).unwrap(), 1000.0);
//! assert_eq!(snap_down(999.9).unwrap(), 500.0);
//!
//! // Non-positive and non-finite inputs are rejected.
//! assert!(snap_up(0.0).is_err());
//! assert!(snap_down(f64::NAN).is_err());
//! ```
//!
//! ## Planning ticks for a range
//!
//! ```rust
//! use vantage_axis::{AxisRange, TickPlan};
//!
//! let range = AxisRange::new(-0.37, 1.21).unwrap();
//! let plan = TickPlan::new(range, 8).unwrap();
//! assert_eq!(plan.step(), 0.2);
//!
//! let labels: Vec<String> = plan.ticks().map(|v| plan.label(v)).collect();
//! assert_eq!(labels.first().map(String::as_str), Some("-0.4"));
//! assert_eq!(labels.last().map(String::as_str), Some("1.4"));
//! ```
//!
//! ## Formatting
//!
//! ```rust
//! use vantage_axis::NumberFormat;
//!
//! assert_eq!(NumberFormat::for_value(0.01).format(0.01), "0.01");
//! assert_eq!(NumberFormat::for_value(f64::NAN).format(f64::NAN), "NaN");
//! assert_eq!(NumberFormat::for_value(2.0e12).format(2.0e12), "2e12");
//! ```
//!
//! This crate is `no_std` and uses `alloc` for formatted labels.

#![no_std]

extern crate alloc;

mod error;
mod estimate;
mod format;
mod plan;
mod snap;

pub use error::AxisError;
pub use estimate::{Estimate, RangeEstimate};
pub use format::{
    MAX_FIXED_EXPONENT, MIN_FIXED_EXPONENT, NumberFormat, SCIENTIFIC_PRECISION,
    SIGNIFICANT_DIGITS,
};
pub use plan::{AxisRange, MAX_TICKS, TickPlan, Ticks};
pub use snap::{SNAP_EPSILON, decade_exponent, snap_down, snap_up, suggest_step};
