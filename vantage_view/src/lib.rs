// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage View: an interactive 2D view transform engine.
//!
//! This crate provides a small, headless model of a view onto an unbounded
//! world plane, drawn into a fixed-size pixel screen. It focuses on:
//! - One invertible affine world → screen transform per [`Viewport`].
//! - Interactive edits: pan, per-axis zoom and rotation about a screen point.
//! - Resize policies (preserve aspect, stretch, reflow) and fitting a world
//!   rectangle into the screen.
//! - Coordinate conversion and grid-step suggestions.
//!
//! It does **not** own any scene graph, rendering backend or input handling.
//! Callers are expected to:
//! - Translate pointer/keyboard gestures into [`Viewport`] calls.
//! - Read [`Viewport::world_to_screen`] once per frame and hand it, with the
//!   viewport size, to their painters.
//! - Plan axis ticks with `vantage_axis` and place labels with
//!   `vantage_label`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use vantage_view::{Viewport, ViewportFlags};
//!
//! let mut view = Viewport::with_flags(
//!     Size::new(800.0, 600.0),
//!     ViewportFlags::MAINTAIN_ASPECT_RATIO | ViewportFlags::FLIPPED_VERTICALLY,
//! )
//! .unwrap();
//!
//! // Show a world rectangle, then zoom in 2x around the mouse.
//! view.set_displayed_world_area(Rect::new(-100.0, -100.0, 100.0, 100.0))
//!     .unwrap();
//! let mouse = Point::new(400.0, 300.0);
//! view.zoom(mouse, 2.0, 2.0).unwrap();
//! view.pan(Vec2::new(-25.0, 0.0)).unwrap();
//!
//! // Convert a device-space point into world space (for hit testing, etc.).
//! let world_pt = view.screen_to_world_point(mouse);
//! let back = view.world_to_screen_point(world_pt);
//! assert!((back - mouse).hypot() < 1e-9);
//! ```
//!
//! Invalid input is rejected and leaves the view untouched:
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use vantage_view::{ViewError, Viewport};
//!
//! let mut view = Viewport::new(Size::new(100.0, 100.0)).unwrap();
//! let before = view.world_to_screen();
//! assert!(matches!(
//!     view.zoom(Point::ZERO, 0.0, 1.0),
//!     Err(ViewError::InvalidArgument { .. })
//! ));
//! assert_eq!(view.world_to_screen(), before);
//! ```
//!
//! ## Design notes
//!
//! - Screen-space edits are composed *after* the current transform
//!   (`T(p) · S · T(-p) · M`), so the anchor point is a fixed point.
//! - Policy flags never move the view by themselves; they are consulted by
//!   the next resize, fit or reset.
//! - A `Viewport` is a plain value confined to whichever thread owns it.
//!   Share it across threads only behind external synchronization, and do
//!   not mutate it while a render pass that reads it is in progress.
//!
//! This crate is `no_std`.

#![no_std]

mod error;
mod flags;
mod viewport;

pub use error::ViewError;
pub use flags::{ResizePolicy, ViewportFlags};
pub use viewport::{Viewport, ViewportDebugInfo};
