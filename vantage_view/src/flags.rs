// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

bitflags::bitflags! {
    /// Policy flags consulted by [`crate::Viewport`].
    ///
    /// Flags only steer how later operations behave; changing them never
    /// moves the view by itself.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ViewportFlags: u8 {
        /// World `y` grows upward on screen.
        ///
        /// [`crate::Viewport::reset_transform`] starts from a `(1, -1)` scale and
        /// [`crate::Viewport::set_displayed_world_area`] maps the top of the
        /// world rectangle to the top of the screen.
        const FLIPPED_VERTICALLY    = 0b0000_0001;
        /// Keep a single uniform scale for both axes when resizing and fitting.
        const MAINTAIN_ASPECT_RATIO = 0b0000_0010;
        /// Stretch the visible world area with the viewport on resize.
        ///
        /// Ignored while [`ViewportFlags::MAINTAIN_ASPECT_RATIO`] is set.
        const RESIZING_CONTENTS     = 0b0000_0100;
    }
}

/// How [`crate::Viewport::resize`] adjusts the transform.
///
/// Derived from [`ViewportFlags`]; exposed for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizePolicy {
    /// Uniformly rescale about the viewport center so the previously visible
    /// area stays on screen without distortion.
    PreserveAspect,
    /// Stretch x and y independently so the previously visible area fills
    /// the new viewport.
    Stretch,
    /// Keep the scale; the world point at the screen origin stays put.
    Reflow,
}

impl ViewportFlags {
    /// The resize policy selected by these flags.
    #[must_use]
    pub fn resize_policy(self) -> ResizePolicy {
        if self.contains(Self::MAINTAIN_ASPECT_RATIO) {
            ResizePolicy::PreserveAspect
        } else if self.contains(Self::RESIZING_CONTENTS) {
            ResizePolicy::Stretch
        } else {
            ResizePolicy::Reflow
        }
    }
}
