// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};
use log::{debug, warn};

use crate::error::ViewError;
use crate::flags::{ResizePolicy, ViewportFlags};

/// An interactive 2D view over an unbounded world plane.
///
/// `Viewport` owns one invertible affine transform mapping world coordinates
/// onto a `width × height` pixel screen, plus the policy flags that steer
/// resizing and fitting. It can be used to:
/// - Pan, zoom (per axis) and rotate about a fixed screen point.
/// - Follow viewport resizes under an aspect/stretch/reflow policy.
/// - Fit a world rectangle into the screen.
/// - Convert points and rectangles between world and screen space.
///
/// Every mutator validates its inputs and the resulting matrix before
/// committing. On error nothing changes, so the world→screen transform is
/// always invertible and [`Viewport::screen_to_world`] always exists.
///
/// The transform is only handed out by value. Mutation goes through
/// `&mut self`, so a render pass holding `&Viewport` sees a stable snapshot.
#[derive(Clone, Debug)]
pub struct Viewport {
    size: Size,
    /// Last non-empty size the transform was laid out for.
    layout_size: Size,
    flags: ViewportFlags,
    world_to_screen: Affine,
    screen_to_world: Affine,
    pending_world_area: Option<Rect>,
}

impl Viewport {
    /// Creates a viewport of `size` pixels with default (empty) flags.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidArgument`] if either dimension is negative
    /// or not finite.
    pub fn new(size: Size) -> Result<Self, ViewError> {
        Self::with_flags(size, ViewportFlags::empty())
    }

    /// Creates a viewport of `size` pixels with the given policy flags.
    ///
    /// The initial transform is the reset transform (see
    /// [`Viewport::reset_transform`]).
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidArgument`] if either dimension is negative
    /// or not finite.
    pub fn with_flags(size: Size, flags: ViewportFlags) -> Result<Self, ViewError> {
        check_size(size)?;
        let world_to_screen = reset_matrix(flags);
        Ok(Self {
            size,
            layout_size: size,
            flags,
            world_to_screen,
            screen_to_world: world_to_screen.inverse(),
            pending_world_area: None,
        })
    }

    /// Current screen size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Current screen width in pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Current screen height in pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// The screen as a rectangle anchored at the origin.
    #[must_use]
    pub fn screen_rect(&self) -> Rect {
        self.size.to_rect()
    }

    /// Current policy flags.
    #[must_use]
    pub fn flags(&self) -> ViewportFlags {
        self.flags
    }

    /// Replaces all policy flags. The transform is not touched.
    pub fn set_flags(&mut self, flags: ViewportFlags) {
        self.flags = flags;
    }

    /// Returns `true` if world `y` grows upward on screen.
    #[must_use]
    pub fn is_flipped_vertically(&self) -> bool {
        self.flags.contains(ViewportFlags::FLIPPED_VERTICALLY)
    }

    /// Sets [`ViewportFlags::FLIPPED_VERTICALLY`].
    pub fn set_flipped_vertically(&mut self, flipped: bool) {
        self.flags.set(ViewportFlags::FLIPPED_VERTICALLY, flipped);
    }

    /// Returns `true` if resizing and fitting keep a uniform scale.
    #[must_use]
    pub fn maintains_aspect_ratio(&self) -> bool {
        self.flags.contains(ViewportFlags::MAINTAIN_ASPECT_RATIO)
    }

    /// Sets [`ViewportFlags::MAINTAIN_ASPECT_RATIO`].
    pub fn set_maintain_aspect_ratio(&mut self, maintain: bool) {
        self.flags.set(ViewportFlags::MAINTAIN_ASPECT_RATIO, maintain);
    }

    /// Returns `true` if resizing stretches the visible area with the screen.
    #[must_use]
    pub fn is_resizing_contents(&self) -> bool {
        self.flags.contains(ViewportFlags::RESIZING_CONTENTS)
    }

    /// Sets [`ViewportFlags::RESIZING_CONTENTS`].
    pub fn set_resizing_contents(&mut self, resizing: bool) {
        self.flags.set(ViewportFlags::RESIZING_CONTENTS, resizing);
    }

    /// The world → screen transform.
    #[must_use]
    pub fn world_to_screen(&self) -> Affine {
        self.world_to_screen
    }

    /// The screen → world transform, the inverse of
    /// [`Viewport::world_to_screen`].
    #[must_use]
    pub fn screen_to_world(&self) -> Affine {
        self.screen_to_world
    }

    /// Installs an externally computed world → screen transform, for example
    /// to mirror another view.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::DegenerateTransform`] if `transform` is not
    /// finite or not invertible.
    pub fn set_transform(&mut self, transform: Affine) -> Result<(), ViewError> {
        let inverse = checked_inverse(transform)?;
        self.install(transform, inverse);
        self.pending_world_area = None;
        Ok(())
    }

    /// Pans by `delta` screen pixels.
    ///
    /// Rotation and scale are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidArgument`] if `delta` is not finite.
    pub fn pan(&mut self, delta: Vec2) -> Result<(), ViewError> {
        check_finite("dx", delta.x)?;
        check_finite("dy", delta.y)?;
        self.apply_screen(Affine::translate(delta))
    }

    /// Scales by `(factor_x, factor_y)` about the screen point `anchor`.
    ///
    /// `anchor` maps to the same world point before and after the zoom.
    /// Unequal factors zoom along one axis only.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidArgument`] if `anchor` is not finite or a
    /// factor is not finite and strictly positive, and
    /// [`ViewError::DegenerateTransform`] if the zoom would under- or
    /// overflow the matrix.
    pub fn zoom(&mut self, anchor: Point, factor_x: f64, factor_y: f64) -> Result<(), ViewError> {
        check_point("anchor", anchor)?;
        check_positive("factor_x", factor_x)?;
        check_positive("factor_y", factor_y)?;
        self.apply_about(anchor, Affine::scale_non_uniform(factor_x, factor_y))
    }

    /// Rotates by `angle` radians about the screen point `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidArgument`] if `anchor` or `angle` is not
    /// finite.
    pub fn rotate(&mut self, anchor: Point, angle: f64) -> Result<(), ViewError> {
        check_point("anchor", anchor)?;
        check_finite("angle", angle)?;
        self.apply_about(anchor, Affine::rotate(angle))
    }

    /// Resizes the screen and adjusts the transform according to
    /// [`ViewportFlags::resize_policy`].
    ///
    /// A resize to zero width or height only records the new size; the
    /// adjustment is deferred until the viewport has area again, and is then
    /// computed against the last non-empty size. A world area requested with
    /// [`Viewport::set_displayed_world_area`] while the viewport was empty is
    /// fitted on the first non-empty resize instead.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidArgument`] if either dimension is negative
    /// or not finite.
    pub fn resize(&mut self, size: Size) -> Result<(), ViewError> {
        check_size(size)?;
        if size == self.size {
            return Ok(());
        }
        if is_empty(size) {
            debug!(
                "deferring view adjustment for empty viewport {}x{}",
                size.width, size.height
            );
            self.size = size;
            return Ok(());
        }
        if let Some(area) = self.pending_world_area {
            let candidate = fit_matrix(area, size, self.flags);
            let inverse = checked_inverse(candidate)?;
            self.size = size;
            self.layout_size = size;
            self.install(candidate, inverse);
            self.pending_world_area = None;
            return Ok(());
        }

        let old = self.layout_size;
        let candidate = if is_empty(old) {
            self.world_to_screen
        } else {
            self.resize_matrix(old, size)
        };
        let inverse = checked_inverse(candidate)?;
        self.size = size;
        self.layout_size = size;
        self.install(candidate, inverse);
        Ok(())
    }

    /// Shows exactly `area` (world coordinates) in the viewport.
    ///
    /// With [`ViewportFlags::MAINTAIN_ASPECT_RATIO`] the scale is
    /// `min(width / area.width, height / area.height)` on both axes and the
    /// area is centered; otherwise each axis is scaled to fill the screen.
    /// Rotation is discarded. When the viewport is empty the area is kept and
    /// fitted on the next non-empty [`Viewport::resize`].
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidArgument`] if `area` does not have finite,
    /// strictly positive width and height.
    pub fn set_displayed_world_area(&mut self, area: Rect) -> Result<(), ViewError> {
        check_point("area origin", area.origin())?;
        check_positive("area width", area.width())?;
        check_positive("area height", area.height())?;
        if is_empty(self.size) {
            debug!("viewport is empty; fitting {area:?} on next resize");
            self.pending_world_area = Some(area);
            return Ok(());
        }
        let candidate = fit_matrix(area, self.size, self.flags);
        let inverse = checked_inverse(candidate)?;
        self.install(candidate, inverse);
        self.layout_size = self.size;
        self.pending_world_area = None;
        Ok(())
    }

    /// Restores the identity transform, composed with a `(1, -1)` scale when
    /// [`ViewportFlags::FLIPPED_VERTICALLY`] is set.
    pub fn reset_transform(&mut self) {
        let matrix = reset_matrix(self.flags);
        self.install(matrix, matrix.inverse());
        self.pending_world_area = None;
    }

    /// Pans so that `world_pt` lands on the center of the screen.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidArgument`] if `world_pt` is not finite or
    /// maps outside the finite screen plane.
    pub fn center_on(&mut self, world_pt: Point) -> Result<(), ViewError> {
        check_point("world point", world_pt)?;
        let delta = self.screen_rect().center() - self.world_to_screen_point(world_pt);
        self.pan(delta)
    }

    /// Returns the world area currently visible on screen.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        self.screen_to_world_rect(self.screen_rect())
    }

    /// Converts a world point into screen coordinates.
    #[must_use]
    pub fn world_to_screen_point(&self, pt: Point) -> Point {
        self.world_to_screen * pt
    }

    /// Converts a screen point into world coordinates.
    #[must_use]
    pub fn screen_to_world_point(&self, pt: Point) -> Point {
        self.screen_to_world * pt
    }

    /// Screen-space bounding box of a world rectangle.
    #[must_use]
    pub fn world_to_screen_rect(&self, rect: Rect) -> Rect {
        self.world_to_screen.transform_rect_bbox(rect)
    }

    /// World-space bounding box of a screen rectangle.
    #[must_use]
    pub fn screen_to_world_rect(&self, rect: Rect) -> Rect {
        self.screen_to_world.transform_rect_bbox(rect)
    }

    /// Length of the world x axis on screen, in pixels per world unit.
    #[must_use]
    pub fn scale_x(&self) -> f64 {
        let [a, b, ..] = self.world_to_screen.as_coeffs();
        Vec2::new(a, b).hypot()
    }

    /// Length of the world y axis on screen, negative when the transform
    /// mirrors (for example when flipped vertically).
    #[must_use]
    pub fn scale_y(&self) -> f64 {
        self.world_to_screen.determinant() / self.scale_x()
    }

    /// Angle of the world x axis on screen, in radians.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        let [a, b, ..] = self.world_to_screen.as_coeffs();
        Vec2::new(a, b).atan2()
    }

    /// World distance covered by one pixel along the screen x axis.
    #[must_use]
    pub fn world_units_per_pixel_x(&self) -> f64 {
        let [a, b, ..] = self.screen_to_world.as_coeffs();
        Vec2::new(a, b).hypot()
    }

    /// World distance covered by one pixel along the screen y axis.
    #[must_use]
    pub fn world_units_per_pixel_y(&self) -> f64 {
        let [_, _, c, d, ..] = self.screen_to_world.as_coeffs();
        Vec2::new(c, d).hypot()
    }

    /// Suggests a nice world-space grid step (1‑2‑5 ladder) so that grid
    /// lines land roughly `target_px` pixels apart along the screen x axis.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidArgument`] if `target_px` is not finite
    /// and strictly positive.
    pub fn suggest_grid_step(&self, target_px: f64) -> Result<f64, ViewError> {
        Ok(vantage_axis::suggest_step(
            self.world_units_per_pixel_x(),
            target_px,
        )?)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            size: self.size,
            flags: self.flags,
            resize_policy: self.flags.resize_policy(),
            world_to_screen: self.world_to_screen,
            visible_world_rect: self.visible_world_rect(),
            scale_x: self.scale_x(),
            scale_y: self.scale_y(),
            rotation: self.rotation(),
            pending_world_area: self.pending_world_area,
        }
    }

    fn resize_matrix(&self, old: Size, new: Size) -> Affine {
        let m = self.world_to_screen;
        match self.flags.resize_policy() {
            ResizePolicy::PreserveAspect => {
                let s = (new.width / old.width).min(new.height / old.height);
                let old_center = old.to_rect().center().to_vec2();
                let new_center = new.to_rect().center().to_vec2();
                Affine::translate(new_center)
                    * Affine::scale(s)
                    * Affine::translate(-old_center)
                    * m
            }
            ResizePolicy::Stretch => {
                Affine::scale_non_uniform(new.width / old.width, new.height / old.height) * m
            }
            ResizePolicy::Reflow => m,
        }
    }

    /// Applies `op` about the screen point `anchor`, after the current transform.
    fn apply_about(&mut self, anchor: Point, op: Affine) -> Result<(), ViewError> {
        let anchor = anchor.to_vec2();
        self.apply_screen(Affine::translate(anchor) * op * Affine::translate(-anchor))
    }

    /// Applies a screen-space operation after the current transform.
    fn apply_screen(&mut self, op: Affine) -> Result<(), ViewError> {
        let candidate = op * self.world_to_screen;
        let inverse = checked_inverse(candidate)?;
        self.install(candidate, inverse);
        Ok(())
    }

    fn install(&mut self, world_to_screen: Affine, screen_to_world: Affine) {
        self.world_to_screen = world_to_screen;
        self.screen_to_world = screen_to_world;
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Screen size in pixels.
    pub size: Size,
    /// Policy flags.
    pub flags: ViewportFlags,
    /// Resize policy selected by the flags.
    pub resize_policy: ResizePolicy,
    /// Current world → screen transform.
    pub world_to_screen: Affine,
    /// World-space rectangle currently visible on screen.
    pub visible_world_rect: Rect,
    /// See [`Viewport::scale_x`].
    pub scale_x: f64,
    /// See [`Viewport::scale_y`].
    pub scale_y: f64,
    /// See [`Viewport::rotation`].
    pub rotation: f64,
    /// World area waiting for the viewport to become non-empty.
    pub pending_world_area: Option<Rect>,
}

fn reset_matrix(flags: ViewportFlags) -> Affine {
    if flags.contains(ViewportFlags::FLIPPED_VERTICALLY) {
        Affine::FLIP_Y
    } else {
        Affine::IDENTITY
    }
}

fn fit_matrix(area: Rect, size: Size, flags: ViewportFlags) -> Affine {
    let mut sx = size.width / area.width();
    let mut sy = size.height / area.height();
    if flags.contains(ViewportFlags::MAINTAIN_ASPECT_RATIO) {
        let s = sx.min(sy);
        sx = s;
        sy = s;
    }
    if flags.contains(ViewportFlags::FLIPPED_VERTICALLY) {
        sy = -sy;
    }
    Affine::translate(size.to_rect().center().to_vec2())
        * Affine::scale_non_uniform(sx, sy)
        * Affine::translate(-area.center().to_vec2())
}

fn checked_inverse(m: Affine) -> Result<Affine, ViewError> {
    let det = m.determinant();
    if !m.is_finite() || !det.is_finite() || det.abs() < f64::MIN_POSITIVE {
        warn!("rejecting degenerate view transform {m:?}");
        return Err(ViewError::DegenerateTransform);
    }
    let inverse = m.inverse();
    if !inverse.is_finite() {
        warn!("rejecting view transform with non-finite inverse {m:?}");
        return Err(ViewError::DegenerateTransform);
    }
    Ok(inverse)
}

fn is_empty(size: Size) -> bool {
    size.width <= 0.0 || size.height <= 0.0
}

fn reject(what: &'static str, value: f64) -> ViewError {
    debug!("rejecting {what} = {value}");
    ViewError::InvalidArgument { what, value }
}

fn check_finite(what: &'static str, value: f64) -> Result<(), ViewError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(reject(what, value))
    }
}

fn check_positive(what: &'static str, value: f64) -> Result<(), ViewError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(reject(what, value))
    }
}

fn check_point(what: &'static str, pt: Point) -> Result<(), ViewError> {
    if pt.x.is_finite() {
        check_finite(what, pt.y)
    } else {
        Err(reject(what, pt.x))
    }
}

fn check_size(size: Size) -> Result<(), ViewError> {
    for (what, value) in [("width", size.width), ("height", size.height)] {
        if !value.is_finite() || value < 0.0 {
            return Err(reject(what, value));
        }
    }
    Ok(())
}
