// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::config::ViewConfig;
use crate::fit::{AxisFit, adjusted_position};
use crate::transform::ViewTransform;

/// Scale and offset of content shown inside a viewport, with derived limits.
///
/// `TransformState` tracks:
/// - The content size and the viewport size.
/// - The fit scale (largest scale at which the whole content is visible) and
///   the `[min_scale, max_scale]` range derived from it.
/// - The current uniform scale and the offset applied after scaling.
///
/// Size changes re-derive the limits and snap the scale and offset back into
/// range immediately. Gestures and animations mutate the state through
/// [`crate::GestureController`] and [`crate::TransformAnimator`].
#[derive(Clone, Debug)]
pub struct TransformState {
    content_size: Size,
    viewport_size: Size,
    scale: f64,
    offset: Vec2,
    scale_initialized: bool,
    fit_scale: f64,
    min_scale: f64,
    max_scale: f64,
    min_scale_floor: f64,
    max_scale_ceiling: f64,
    fit: AxisFit,
}

impl TransformState {
    /// Creates an empty state using the limits and fit policies of `config`.
    ///
    /// - Content and viewport sizes start at zero, so the fit scale is `1.0`.
    /// - The scale follows the fit scale until both sizes are known; from then on
    ///   it is only clamped by later size changes. While a size is non-positive
    ///   an established scale and offset are left as they are.
    #[must_use]
    pub fn new(config: &ViewConfig) -> Self {
        let mut state = Self {
            content_size: Size::ZERO,
            viewport_size: Size::ZERO,
            scale: 1.0,
            offset: Vec2::ZERO,
            scale_initialized: false,
            fit_scale: 1.0,
            min_scale: 1.0,
            max_scale: 1.0,
            min_scale_floor: config.min_scale_floor,
            max_scale_ceiling: config.max_scale_ceiling,
            fit: config.fit,
        };
        state.recompute_bounds();
        state
    }

    /// Returns the content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Sets the content size, re-deriving limits and re-clamping the transform.
    pub fn set_content_size(&mut self, size: Size) {
        if self.content_size == size {
            return;
        }
        self.content_size = size;
        self.relayout();
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    /// Sets the viewport size, re-deriving limits and re-clamping the transform.
    pub fn set_viewport_size(&mut self, size: Size) {
        if self.viewport_size == size {
            return;
        }
        self.viewport_size = size;
        self.relayout();
    }

    /// Returns the current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        ViewTransform::new(self.scale, self.offset)
    }

    pub(crate) fn set_transform(&mut self, transform: ViewTransform) {
        self.scale = transform.scale;
        self.offset = transform.offset;
    }

    /// Returns the scale at which the whole content just fits the viewport.
    ///
    /// This is `1.0` while either size is empty or negative.
    #[must_use]
    pub fn fit_scale(&self) -> f64 {
        self.fit_scale
    }

    /// Returns the lower scale limit, `min(fit_scale, min_scale_floor)`.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Returns the upper scale limit, `max(fit_scale, max_scale_ceiling)`.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Returns the per-axis fit policies.
    #[must_use]
    pub fn fit(&self) -> AxisFit {
        self.fit
    }

    /// Returns `true` once both sizes are positive and the scale has been
    /// seeded from the fit scale.
    #[must_use]
    pub fn is_scale_initialized(&self) -> bool {
        self.scale_initialized
    }

    /// Applies [`adjusted_position`] to both axes of `offset` at `scale`.
    #[must_use]
    pub fn adjusted_offset(&self, offset: Vec2, scale: f64) -> Vec2 {
        Vec2::new(
            adjusted_position(
                offset.x,
                scale,
                self.content_size.width,
                self.viewport_size.width,
                self.fit.horizontal,
            ),
            adjusted_position(
                offset.y,
                scale,
                self.content_size.height,
                self.viewport_size.height,
                self.fit.vertical,
            ),
        )
    }

    /// Returns `true` if the scale is within its limits and the offset already
    /// satisfies the per-axis placement rules.
    ///
    /// This holds whenever both sizes are positive, no pinch is in progress and
    /// no animation is running.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.min_scale <= self.scale
            && self.scale <= self.max_scale
            && self.adjusted_offset(self.offset, self.scale) == self.offset
    }

    /// Converts a content-space point into view coordinates.
    #[must_use]
    pub fn content_to_view_point(&self, pt: Point) -> Point {
        self.transform().to_affine() * pt
    }

    /// Converts a view-space point into content coordinates.
    #[must_use]
    pub fn view_to_content_point(&self, pt: Point) -> Point {
        ((pt.to_vec2() - self.offset) / self.scale).to_point()
    }

    /// Returns the content-space rectangle covered by the viewport.
    ///
    /// The rectangle is not intersected with the content bounds; when the
    /// content is smaller than the viewport it extends past them.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        let p0 = self.view_to_content_point(Point::ORIGIN);
        let p1 = self.view_to_content_point(self.viewport_size.to_vec2().to_point());
        Rect::from_points(p0, p1)
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TransformStateDebugInfo {
        TransformStateDebugInfo {
            content_size: self.content_size,
            viewport_size: self.viewport_size,
            scale: self.scale,
            offset: self.offset,
            fit_scale: self.fit_scale,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            fit: self.fit,
            settled: self.is_settled(),
        }
    }

    /// Clamps the scale into its limits and re-applies the placement rules.
    ///
    /// Does nothing while either size is non-positive.
    pub(crate) fn clamp_to_bounds(&mut self) {
        if !self.has_layout() {
            return;
        }
        self.scale = self.scale.clamp(self.min_scale, self.max_scale);
        self.offset = self.adjusted_offset(self.offset, self.scale);
    }

    fn has_layout(&self) -> bool {
        self.content_size.width > 0.0
            && self.content_size.height > 0.0
            && self.viewport_size.width > 0.0
            && self.viewport_size.height > 0.0
    }

    fn relayout(&mut self) {
        self.recompute_bounds();
        // A hidden (zero-sized) view keeps its transform until it is laid out again.
        if self.has_layout() {
            self.offset = self.adjusted_offset(self.offset, self.scale);
        }
        ldebug!(
            fit_scale = self.fit_scale,
            min_scale = self.min_scale,
            max_scale = self.max_scale,
            scale = self.scale,
            "relayout"
        );
    }

    fn recompute_bounds(&mut self) {
        let has_layout = self.has_layout();
        self.fit_scale = if has_layout {
            let sx = self.viewport_size.width / self.content_size.width;
            let sy = self.viewport_size.height / self.content_size.height;
            sx.min(sy)
        } else {
            1.0
        };
        self.min_scale = self.fit_scale.min(self.min_scale_floor);
        self.max_scale = self.fit_scale.max(self.max_scale_ceiling);

        if self.scale_initialized {
            if has_layout {
                self.scale = self.scale.clamp(self.min_scale, self.max_scale);
            }
        } else {
            // Track the fit scale until there is a real layout to seed from.
            self.scale = self.fit_scale;
            self.scale_initialized = has_layout;
        }
    }
}

/// Debug snapshot of a [`TransformState`].
#[derive(Clone, Copy, Debug)]
pub struct TransformStateDebugInfo {
    /// Content size.
    pub content_size: Size,
    /// Viewport size.
    pub viewport_size: Size,
    /// Current scale.
    pub scale: f64,
    /// Current offset.
    pub offset: Vec2,
    /// Scale at which the content just fits.
    pub fit_scale: f64,
    /// Lower scale limit.
    pub min_scale: f64,
    /// Upper scale limit.
    pub max_scale: f64,
    /// Per-axis fit policies.
    pub fit: AxisFit,
    /// Whether the scale and offset satisfy the rest invariants.
    pub settled: bool,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::TransformState;
    use crate::config::ViewConfig;
    use crate::fit::FitPolicy;

    fn laid_out(content: Size, viewport: Size) -> TransformState {
        let mut state = TransformState::new(&ViewConfig::default());
        state.set_content_size(content);
        state.set_viewport_size(viewport);
        state
    }

    #[test]
    fn tall_content_fits_by_height() {
        let state = laid_out(Size::new(1000.0, 2000.0), Size::new(500.0, 500.0));
        assert_eq!(state.fit_scale(), 0.25);
        assert_eq!(state.min_scale(), 0.25);
        assert_eq!(state.max_scale(), 2.0);
        assert_eq!(state.scale(), 0.25);
        // 250px wide in a 500px viewport, centered; exact fit vertically.
        assert_eq!(state.offset(), Vec2::new(125.0, 0.0));
        assert!(state.is_settled());
    }

    #[test]
    fn small_content_widens_range_upwards() {
        let state = laid_out(Size::new(100.0, 100.0), Size::new(400.0, 300.0));
        assert_eq!(state.fit_scale(), 3.0);
        assert_eq!(state.min_scale(), 1.0);
        assert_eq!(state.max_scale(), 3.0);
        assert_eq!(state.scale(), 3.0);
        assert_eq!(state.offset(), Vec2::new(50.0, 0.0));
    }

    #[test]
    fn unknown_sizes_fall_back_to_unit_fit() {
        let mut state = TransformState::new(&ViewConfig::default());
        state.set_content_size(Size::new(800.0, 600.0));
        assert_eq!(state.fit_scale(), 1.0);
        assert!(!state.is_scale_initialized());

        state.set_viewport_size(Size::new(-5.0, 100.0));
        assert_eq!(state.fit_scale(), 1.0);
        assert!(state.fit_scale().is_finite());

        // The first real layout seeds the scale from the fit scale.
        state.set_viewport_size(Size::new(400.0, 300.0));
        assert!(state.is_scale_initialized());
        assert_eq!(state.scale(), 0.5);
    }

    #[test]
    fn resize_clamps_existing_scale_instead_of_refitting() {
        let mut state = laid_out(Size::new(1000.0, 2000.0), Size::new(500.0, 500.0));
        state.set_transform(crate::ViewTransform::new(2.0, Vec2::new(-300.0, -900.0)));

        // Growing the viewport lifts the fit scale above the old scale.
        state.set_viewport_size(Size::new(5000.0, 5000.0));
        assert_eq!(state.fit_scale(), 2.5);
        assert_eq!(state.min_scale(), 1.0);
        assert_eq!(state.max_scale(), 2.5);
        assert_eq!(state.scale(), 2.0);
        assert!(state.is_settled());
    }

    #[test]
    fn hidden_viewport_keeps_transform_until_restored() {
        let mut state = laid_out(Size::new(1000.0, 2000.0), Size::new(500.0, 500.0));
        let fitted = state.transform();

        state.set_viewport_size(Size::ZERO);
        assert_eq!(state.fit_scale(), 1.0);
        assert_eq!(state.transform(), fitted, "hiding does not touch the transform");
        assert!(state.is_scale_initialized());

        state.set_viewport_size(Size::new(500.0, 500.0));
        assert_eq!(state.scale(), state.fit_scale());
        assert_eq!(state.transform(), fitted);
    }

    #[test]
    fn hidden_viewport_keeps_zoomed_transform() {
        let mut state = laid_out(Size::new(1000.0, 2000.0), Size::new(500.0, 500.0));
        let zoomed = crate::ViewTransform::new(1.0, Vec2::new(-250.0, -750.0));
        state.set_transform(zoomed);

        state.set_viewport_size(Size::new(0.0, 500.0));
        state.clamp_to_bounds();
        assert_eq!(state.transform(), zoomed);

        state.set_viewport_size(Size::new(500.0, 500.0));
        assert_eq!(state.transform(), zoomed);
        assert!(state.is_settled());
    }

    #[test]
    fn content_swap_clamps_scale_up_to_new_minimum() {
        let mut state = laid_out(Size::new(1000.0, 2000.0), Size::new(500.0, 500.0));
        assert_eq!(state.scale(), 0.25);

        // 100x100 fits at 5x; the floor lifts the minimum to 1.0, but the scale
        // is clamped rather than refitted.
        state.set_content_size(Size::new(100.0, 100.0));
        assert_eq!(state.fit_scale(), 5.0);
        assert_eq!(state.min_scale(), 1.0);
        assert_eq!(state.scale(), 1.0);
        assert_eq!(state.offset(), Vec2::new(200.0, 200.0));
        assert!(state.is_settled());
    }

    #[test]
    fn viewport_change_is_idempotent() {
        let mut once = laid_out(Size::new(1000.0, 2000.0), Size::new(500.0, 500.0));
        once.set_viewport_size(Size::new(320.0, 480.0));
        let mut twice = once.clone();
        twice.set_viewport_size(Size::new(320.0, 480.0));

        assert_eq!(once.transform(), twice.transform());
        assert_eq!(once.fit_scale(), twice.fit_scale());
        assert_eq!(once.min_scale(), twice.min_scale());
        assert_eq!(once.max_scale(), twice.max_scale());
    }

    #[test]
    fn end_policy_pins_small_content_to_far_edge() {
        let config = ViewConfig::default().with_fit(FitPolicy::End, FitPolicy::Start);
        let mut state = TransformState::new(&config);
        state.set_content_size(Size::new(100.0, 200.0));
        state.set_viewport_size(Size::new(400.0, 400.0));
        // fit = 2.0: 200x400 scaled, 200px spare horizontally.
        assert_eq!(state.scale(), 2.0);
        assert_eq!(state.offset(), Vec2::new(200.0, 0.0));
    }

    #[test]
    fn point_conversion_roundtrip() {
        let mut state = laid_out(Size::new(1000.0, 2000.0), Size::new(500.0, 500.0));
        state.set_transform(crate::ViewTransform::new(1.0, Vec2::new(-250.0, -750.0)));

        let content = Point::new(400.0, 1000.0);
        let view = state.content_to_view_point(content);
        assert_eq!(view, Point::new(150.0, 250.0));
        let back = state.view_to_content_point(view);
        assert!((back.x - content.x).abs() < 1e-9);
        assert!((back.y - content.y).abs() < 1e-9);

        let visible = state.visible_content_rect();
        assert_eq!(visible.x0, 250.0);
        assert_eq!(visible.y0, 750.0);
        assert_eq!(visible.width(), 500.0);
        assert_eq!(visible.height(), 500.0);
    }

    #[test]
    fn debug_info_reports_limits() {
        let state = laid_out(Size::new(1000.0, 2000.0), Size::new(500.0, 500.0));
        let info = state.debug_info();
        assert_eq!(info.viewport_size, Size::new(500.0, 500.0));
        assert!(info.min_scale <= info.fit_scale && info.fit_scale <= info.max_scale);
        assert!(info.settled);
    }
}
