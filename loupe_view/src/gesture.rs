// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::animator::TransformAnimator;
use crate::state::TransformState;

/// Applies pan, pinch and double-tap input to a [`TransformState`].
///
/// Continuous input (pan, pinch samples) writes the state immediately.
/// Discrete decisions (pinch release, double tap) are handed to a
/// [`TransformAnimator`]. The controller only remembers the focal point of
/// the pinch in progress; the state itself is lent in by the caller on every
/// call.
///
/// ## Elastic limits
///
/// While a pinch is in progress the scale may leave `[min_scale, max_scale]`.
/// Once the current scale is at or beyond a limit, each sampled factor `f` is
/// damped to `1 + (f - 1) * r * k`, where `k` is the elastic resistance and
/// `r` is `max_scale / scale` above the range or `scale / min_scale` below it.
/// The switch happens exactly at the limits. Releasing the pinch animates the
/// scale back into range.
#[derive(Clone, Debug)]
pub struct GestureController {
    elastic_resistance: f64,
    pinch_focus: Option<Point>,
}

impl GestureController {
    /// Creates a controller with the given elastic resistance.
    #[must_use]
    pub fn new(elastic_resistance: f64) -> Self {
        Self {
            elastic_resistance,
            pinch_focus: None,
        }
    }

    /// Damping constant used beyond the scale limits.
    #[must_use]
    pub fn elastic_resistance(&self) -> f64 {
        self.elastic_resistance
    }

    /// Returns `true` between [`GestureController::begin_scale`] and
    /// [`GestureController::end_scale`].
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch_focus.is_some()
    }

    /// Scrolls the content by `scroll`, the previous pointer position minus
    /// the current one.
    ///
    /// The new offset is clamped per axis. Pans are ignored while a pinch is in
    /// progress. Returns `true` if the offset changed.
    pub fn pan(&self, state: &mut TransformState, scroll: Vec2) -> bool {
        if self.is_pinching() {
            ltrace!(dx = scroll.x, dy = scroll.y, "pan ignored during pinch");
            return false;
        }
        let before = state.offset();
        let offset = state.adjusted_offset(before - scroll, state.scale());
        state.set_transform(crate::ViewTransform::new(state.scale(), offset));
        offset != before
    }

    /// Starts a pinch centered on `focus`.
    pub fn begin_scale(&mut self, focus: Point) {
        ltrace!(x = focus.x, y = focus.y, "pinch began");
        self.pinch_focus = Some(focus);
    }

    /// Returns `factor` after elastic damping for the current state.
    ///
    /// Inside the scale range the factor is returned unchanged.
    #[must_use]
    pub fn restrict_factor(&self, state: &TransformState, factor: f64) -> f64 {
        let scale = state.scale();
        if scale >= state.max_scale() {
            1.0 + (factor - 1.0) * (state.max_scale() / scale) * self.elastic_resistance
        } else if scale <= state.min_scale() {
            1.0 + (factor - 1.0) * (scale / state.min_scale()) * self.elastic_resistance
        } else {
            factor
        }
    }

    /// Applies one pinch sample: a multiplicative `factor` since the last
    /// sample and the new focal point.
    ///
    /// The content under the previous focal point follows the new one. Neither
    /// the scale nor the offset is clamped here. Samples outside a pinch, and
    /// factors that are not finite and positive, are ignored.
    /// Returns `true` if the sample was applied.
    pub fn scale(&mut self, state: &mut TransformState, factor: f64, focus: Point) -> bool {
        let Some(previous) = self.pinch_focus else {
            return false;
        };
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        let factor = self.restrict_factor(state, factor);
        let scale = state.scale() * factor;
        let offset = focus.to_vec2() + (state.offset() - previous.to_vec2()) * factor;
        state.set_transform(crate::ViewTransform::new(scale, offset));
        self.pinch_focus = Some(focus);
        true
    }

    /// Ends the pinch and animates the scale back into range about the last
    /// focal point.
    ///
    /// Returns `true` if an animation was started. Nothing happens outside a
    /// pinch.
    pub fn end_scale(
        &mut self,
        state: &TransformState,
        animator: &mut TransformAnimator,
        now_ms: u64,
    ) -> bool {
        let Some(focus) = self.pinch_focus.take() else {
            return false;
        };
        let target = state.scale().clamp(state.min_scale(), state.max_scale());
        ltrace!(scale = state.scale(), target_scale = target, "pinch ended");
        animator.start_scale_animation(state, target, focus, now_ms)
    }

    /// Toggles between the fit scale and native size about `at`.
    ///
    /// If the scale is exactly the fit scale the target is `1.0`; otherwise it
    /// is the fit scale. Ignored while a pinch is in progress. Returns `true`
    /// if an animation was started.
    pub fn double_tap(
        &self,
        state: &TransformState,
        animator: &mut TransformAnimator,
        at: Point,
        now_ms: u64,
    ) -> bool {
        if self.is_pinching() {
            return false;
        }
        let target = if state.scale() == state.fit_scale() {
            1.0
        } else {
            state.fit_scale()
        };
        animator.start_scale_animation(state, target, at, now_ms)
    }
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_ELASTIC_RESISTANCE)
    }
}
