// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Label: geometry for anchored, rotated text labels.
//!
//! A label painter needs to know where a string will land on screen before
//! drawing it, to hit-test it, and to skip labels that would not fit. This
//! crate computes that footprint from:
//! - the untransformed text bounds, supplied by a [`TextMeasurer`];
//! - an [`AnchorFraction`] naming the point of the text box to pin;
//! - a [`LabelPlacement`] giving the world location, angle and whether the
//!   text follows the view's scale and rotation;
//! - the current world → screen `Affine` of the view.
//!
//! The result is a [`LabelShape`]. An optional [`LabelPredicate`] can veto a
//! shape, e.g. when it is wider than the room between two ticks.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Point, Vec2};
//! use vantage_label::{
//!     AnchorFraction, HeuristicTextMeasurer, LabelPlacement, LabelPredicate,
//! };
//!
//! let world_to_screen = Affine::translate(Vec2::new(400.0, 300.0)) * Affine::FLIP_Y;
//! let placement = LabelPlacement::new(Point::new(10.0, 0.0))
//!     .unwrap()
//!     .with_anchor(AnchorFraction::TOP_CENTER);
//!
//! let measurer = HeuristicTextMeasurer::new(10.0);
//! let fits = LabelPredicate::width_between(0.0, 40.0);
//!
//! let shape = placement
//!     .layout("0.25", &measurer, world_to_screen, &fits)
//!     .unwrap();
//! // The top-center of the text sits under the tick at screen (410, 300).
//! assert_eq!(shape.bounding_box().center().x, 410.0);
//! assert_eq!(shape.bounding_box().y0, 300.0);
//!
//! // Too wide for the predicate: vetoed.
//! assert!(placement.layout("0.123456", &measurer, world_to_screen, &fits).is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc` for predicates.

#![no_std]

extern crate alloc;

mod anchor;
mod error;
mod measure;
mod placement;
mod predicate;
mod shape;

pub use anchor::AnchorFraction;
pub use error::LabelError;
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use placement::LabelPlacement;
pub use predicate::{LabelPredicate, ShapeTest};
pub use shape::LabelShape;
