// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::range::{PanRange, ScaleRange};

/// Camera over a 2D content plane.
///
/// `Camera` owns a translation (`position`) and a uniform `scale` mapping
/// content coordinates into view/device coordinates:
/// `view = position + content * scale`.
///
/// Every mutator funnels through [`Camera::update_position_scale`], which
/// clamps the scale into the configured [`ScaleRange`] and the position into
/// the [`PanRange`] derived from the viewport size and optional bounds
/// limit. The camera is therefore always in a valid state, whatever the
/// input.
#[derive(Clone, Debug)]
pub struct Camera {
    position: Point,
    scale: f64,
    scale_inverse: f64,
    viewport: Size,
    bounds_limit: Option<Rect>,
    scale_range: ScaleRange,
    pan_range: PanRange,
}

impl Camera {
    /// Creates a camera at the content origin with scale `1.0`.
    ///
    /// - The viewport is empty until [`Camera::set_viewport_size`] is called.
    /// - No bounds limit is set, so panning is unconstrained.
    /// - The scale range is [`ScaleRange::default`] (`[0.25, 4.0]`).
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Point::ZERO,
            scale: 1.0,
            scale_inverse: 1.0,
            viewport: Size::ZERO,
            bounds_limit: None,
            scale_range: ScaleRange::default(),
            pan_range: PanRange::UNBOUNDED,
        }
    }

    /// Creates a camera with the given scale range, clamping the initial scale into it.
    #[must_use]
    pub fn with_scale_range(scale_range: ScaleRange) -> Self {
        let mut camera = Self::new();
        camera.set_scale_range(scale_range);
        camera
    }

    /// Returns the current translation of the content origin in view space.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns `1.0 / scale`, cached alongside the scale.
    #[must_use]
    pub fn scale_inverse(&self) -> f64 {
        self.scale_inverse
    }

    /// Returns the viewport size last set with [`Camera::set_viewport_size`].
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Returns the current bounds limit, if any.
    #[must_use]
    pub fn bounds_limit(&self) -> Option<Rect> {
        self.bounds_limit
    }

    /// Returns the configured scale range.
    #[must_use]
    pub fn scale_range(&self) -> ScaleRange {
        self.scale_range
    }

    /// Returns the translation range computed by the most recent update.
    #[must_use]
    pub fn pan_range(&self) -> PanRange {
        self.pan_range
    }

    /// Sets the viewport size.
    ///
    /// No-op when the size is unchanged. Otherwise the current position and
    /// scale are re-clamped, since the legal translation range depends on the
    /// viewport. Returns `true` if the position or scale changed.
    pub fn set_viewport_size(&mut self, size: Size) -> bool {
        if self.viewport == size {
            return false;
        }
        self.viewport = size;
        self.update_position_scale(self.position, self.scale)
    }

    /// Sets the content-space rectangle panning is constrained against.
    ///
    /// `None` removes the constraint. No-op when equal to the current value;
    /// otherwise the current position and scale are re-clamped. Returns `true`
    /// if the position or scale changed.
    pub fn set_bounds_limit(&mut self, bounds: Option<Rect>) -> bool {
        if self.bounds_limit == bounds {
            return false;
        }
        tracing::debug!(?bounds, "camera bounds limit changed");
        self.bounds_limit = bounds;
        self.update_position_scale(self.position, self.scale)
    }

    /// Replaces the scale range and re-clamps the current state into it.
    pub fn set_scale_range(&mut self, range: ScaleRange) -> bool {
        if self.scale_range == range {
            return false;
        }
        tracing::debug!(min = range.min, max = range.max, "camera scale range changed");
        self.scale_range = range;
        self.update_position_scale(self.position, self.scale)
    }

    /// Pans by `delta` in view space at the current scale.
    ///
    /// `NaN` components are treated as zero. Returns `true` if the position
    /// changed after clamping.
    pub fn move_by(&mut self, delta: Vec2) -> bool {
        let dx = if delta.x.is_nan() { 0.0 } else { delta.x };
        let dy = if delta.y.is_nan() { 0.0 } else { delta.y };
        self.update_position_scale(self.position + Vec2::new(dx, dy), self.scale)
    }

    /// Multiplies the scale by `ratio`, keeping `anchor` (in view space) fixed.
    ///
    /// The target scale is clamped into the scale range first, and the
    /// position is then adjusted with the *effective* ratio
    /// `clamped / scale`, so zooming against a scale limit never drags the
    /// anchor. A no-op when the clamped scale equals the current one, when
    /// `ratio` is `NaN`, or when `anchor` is not finite.
    ///
    /// Returns `true` if the position or scale changed.
    pub fn scale_by(&mut self, ratio: f64, anchor: Point) -> bool {
        if ratio.is_nan() || !anchor.is_finite() {
            return false;
        }
        let clamped = self.scale_range.clamp(self.scale * ratio);
        if clamped == self.scale {
            return false;
        }
        let real_ratio = clamped / self.scale;
        let position = anchor - (anchor - self.position) * real_ratio;
        self.update_position_scale(position, clamped)
    }

    /// Requests a new position and scale, committing their clamped values.
    ///
    /// 1. `scale` is clamped into the scale range.
    /// 2. The pan range is recomputed for that scale: with a bounds limit
    ///    `b`, `max_x = -b.x0 * scale` and
    ///    `min_x = max_x - b.width() * scale + viewport.width` (likewise for
    ///    Y), so the scaled content can be dragged until its far edge meets
    ///    the viewport's far edge. Without a bounds limit the range is
    ///    [`PanRange::UNBOUNDED`].
    /// 3. `position` is clamped into the pan range.
    ///
    /// The pan range is refreshed on every call. Returns `true` if the
    /// committed position or scale differs from the previous state.
    pub fn update_position_scale(&mut self, position: Point, scale: f64) -> bool {
        let new_scale = self.scale_range.clamp(scale);
        self.pan_range = match self.bounds_limit {
            Some(bounds) => pan_range_for(bounds, self.viewport, new_scale),
            None => PanRange::UNBOUNDED,
        };
        let new_position = self.pan_range.clamp(position);

        if new_position != self.position || new_scale != self.scale {
            self.position = new_position;
            self.scale = new_scale;
            self.scale_inverse = 1.0 / new_scale;
            tracing::trace!(
                x = new_position.x,
                y = new_position.y,
                scale = new_scale,
                "camera updated"
            );
            true
        } else {
            false
        }
    }

    /// Returns the content → view transform (`translate(position) * scale(scale)`).
    ///
    /// This is the transform a renderer installs before drawing content.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.position.to_vec2()) * Affine::scale(self.scale)
    }

    /// Converts a content-space point into view coordinates.
    #[must_use]
    pub fn content_to_view_point(&self, pt: Point) -> Point {
        self.position + pt.to_vec2() * self.scale
    }

    /// Converts a view-space point into content coordinates.
    #[must_use]
    pub fn view_to_content_point(&self, pt: Point) -> Point {
        ((pt - self.position) * self.scale_inverse).to_point()
    }

    /// Returns the content-space rectangle covered by the viewport.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        let p0 = self.view_to_content_point(Point::ZERO);
        let p1 = self.view_to_content_point(Point::new(self.viewport.width, self.viewport.height));
        Rect::from_points(p0, p1)
    }

    /// Snapshot of the current camera state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CameraDebugInfo {
        CameraDebugInfo {
            position: self.position,
            scale: self.scale,
            scale_inverse: self.scale_inverse,
            viewport: self.viewport,
            bounds_limit: self.bounds_limit,
            visible_content_rect: self.visible_content_rect(),
            scale_range: self.scale_range,
            pan_range: self.pan_range,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

fn pan_range_for(bounds: Rect, viewport: Size, scale: f64) -> PanRange {
    let content_w = bounds.width() * scale;
    let content_h = bounds.height() * scale;
    let max_x = -bounds.x0 * scale;
    let max_y = -bounds.y0 * scale;
    PanRange {
        min_x: max_x - content_w + viewport.width,
        max_x,
        min_y: max_y - content_h + viewport.height,
        max_y,
    }
}

/// Debug snapshot of a [`Camera`] state.
#[derive(Clone, Copy, Debug)]
pub struct CameraDebugInfo {
    /// Translation of the content origin in view space.
    pub position: Point,
    /// Current uniform scale.
    pub scale: f64,
    /// Cached `1.0 / scale`.
    pub scale_inverse: f64,
    /// Viewport size in view/device units.
    pub viewport: Size,
    /// Optional content-space bounds limit.
    pub bounds_limit: Option<Rect>,
    /// Content-space rectangle currently covered by the viewport.
    pub visible_content_rect: Rect,
    /// Allowed scale range.
    pub scale_range: ScaleRange,
    /// Translation range derived by the last update.
    pub pan_range: PanRange,
}
