// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::state::TransformState;
use crate::transform::ViewTransform;

/// One linear animation of scale and offset toward a fixed target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationJob {
    start: ViewTransform,
    target: ViewTransform,
    delta: ViewTransform,
    start_ms: u64,
    duration_ms: u64,
}

impl AnimationJob {
    /// Transform captured when the animation started.
    #[must_use]
    pub fn start(&self) -> ViewTransform {
        self.start
    }

    /// Transform the animation ends on.
    #[must_use]
    pub fn target(&self) -> ViewTransform {
        self.target
    }

    /// Host timestamp at which the animation started.
    #[must_use]
    pub fn start_ms(&self) -> u64 {
        self.start_ms
    }

    /// Animation length in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Returns `true` once `now_ms` is at or past the end of the animation.
    #[must_use]
    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Samples the transform at `now_ms`.
    ///
    /// At or after the end this is exactly [`AnimationJob::target`], so repeated
    /// interpolation never leaves residual error.
    #[must_use]
    pub fn sample(&self, now_ms: u64) -> ViewTransform {
        if self.is_done(now_ms) {
            return self.target;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let progress = elapsed as f64 / self.duration_ms as f64;
        self.start.step(self.delta, progress)
    }
}

/// Drives at most one [`AnimationJob`] at a time against a [`TransformState`].
///
/// A running animation is never replaced: start requests made while it runs
/// are dropped, which keeps rapid gesture chains from thrashing the target.
/// There is no cancellation; every animation runs to completion.
///
/// Time is supplied by the host as a monotonic millisecond timestamp. Call
/// [`TransformAnimator::advance`] once per frame, before reading the
/// transform for display.
#[derive(Clone, Debug)]
pub struct TransformAnimator {
    duration_ms: u64,
    job: Option<AnimationJob>,
}

impl TransformAnimator {
    /// Creates an idle animator whose animations last `duration_ms`.
    #[must_use]
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            job: None,
        }
    }

    /// Length of animations started by this animator.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Returns `true` while an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.job.is_some()
    }

    /// Returns the animation in flight, if any.
    #[must_use]
    pub fn job(&self) -> Option<&AnimationJob> {
        self.job.as_ref()
    }

    /// Returns the target of the animation in flight, if any.
    #[must_use]
    pub fn target(&self) -> Option<ViewTransform> {
        self.job.map(|job| job.target)
    }

    /// Animates to `target_scale` while keeping the content under `pivot` (in
    /// view coordinates) in place.
    ///
    /// The resulting offset is passed through the per-axis placement rules at
    /// the target scale, so the animation always lands on a settled state.
    /// Returns `true` if an animation was started.
    pub fn start_scale_animation(
        &mut self,
        state: &TransformState,
        target_scale: f64,
        pivot: Point,
        now_ms: u64,
    ) -> bool {
        let factor_delta = target_scale / state.scale() - 1.0;
        let offset = state.offset();
        let target = offset + (offset - pivot.to_vec2()) * factor_delta;
        let target = state.adjusted_offset(target, target_scale);
        self.start_animation(state, ViewTransform::new(target_scale, target), now_ms)
    }

    /// Animates from the current transform of `state` to `target`.
    ///
    /// Returns `false` without doing anything if an animation is already
    /// running or if `target` equals the current transform exactly. When this
    /// returns `true` the host should schedule a frame.
    pub fn start_animation(
        &mut self,
        state: &TransformState,
        target: ViewTransform,
        now_ms: u64,
    ) -> bool {
        if self.job.is_some() {
            ltrace!(
                target_scale = target.scale,
                "animation request dropped; one is already running"
            );
            return false;
        }
        let start = state.transform();
        if start == target {
            return false;
        }
        ldebug!(
            from_scale = start.scale,
            to_scale = target.scale,
            to_x = target.offset.x,
            to_y = target.offset.y,
            now_ms,
            "animation started"
        );
        self.job = Some(AnimationJob {
            start,
            target,
            delta: start.delta_to(target),
            start_ms: now_ms,
            duration_ms: self.duration_ms,
        });
        true
    }

    /// Moves `state` to the animation's position at `now_ms`.
    ///
    /// Once the duration has elapsed the state is set exactly to the target
    /// and the animator becomes idle. Returns `true` if the state was written
    /// this frame (the host should render and, while
    /// [`TransformAnimator::is_animating`], request another frame).
    pub fn advance(&mut self, state: &mut TransformState, now_ms: u64) -> bool {
        let Some(job) = self.job else {
            return false;
        };
        state.set_transform(job.sample(now_ms));
        if job.is_done(now_ms) {
            ldebug!(scale = job.target.scale, now_ms, "animation finished");
            self.job = None;
        }
        true
    }
}

impl Default for TransformAnimator {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_ANIMATION_DURATION_MS)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::TransformAnimator;
    use crate::config::ViewConfig;
    use crate::state::TransformState;
    use crate::transform::ViewTransform;

    fn tall_state() -> TransformState {
        let mut state = TransformState::new(&ViewConfig::default());
        state.set_content_size(Size::new(1000.0, 2000.0));
        state.set_viewport_size(Size::new(500.0, 500.0));
        state
    }

    #[test]
    fn scale_animation_keeps_pivot_and_clamps_target() {
        let state = tall_state();
        let mut animator = TransformAnimator::new(150);

        assert!(animator.start_scale_animation(&state, 1.0, Point::new(250.0, 250.0), 1_000));
        let target = animator.target().unwrap();
        assert_eq!(target.scale, 1.0);
        assert_eq!(target.offset, Vec2::new(-250.0, -750.0));
    }

    #[test]
    fn linear_progress_then_exact_target() {
        let mut state = tall_state();
        let mut animator = TransformAnimator::new(100);
        let target = ViewTransform::new(1.25, Vec2::new(-100.0, -200.0));
        assert!(animator.start_animation(&state, target, 500));

        assert!(animator.advance(&mut state, 550));
        assert!(animator.is_animating());
        assert_eq!(state.scale(), 0.25 + 1.0 * 0.5);
        assert_eq!(state.offset(), Vec2::new(125.0 + -225.0 * 0.5, -100.0));

        assert!(animator.advance(&mut state, 700));
        assert!(!animator.is_animating());
        assert_eq!(state.transform(), target);

        assert!(!animator.advance(&mut state, 750), "idle animator is a no-op");
        assert_eq!(state.transform(), target);
    }

    #[test]
    fn running_animation_is_not_replaced() {
        let mut state = tall_state();
        let mut animator = TransformAnimator::new(150);
        let first = ViewTransform::new(1.0, Vec2::new(-250.0, -750.0));
        assert!(animator.start_animation(&state, first, 0));
        animator.advance(&mut state, 30);
        let mid = state.transform();

        let second = ViewTransform::new(2.0, Vec2::ZERO);
        assert!(!animator.start_animation(&state, second, 40));
        assert_eq!(state.transform(), mid, "dropped request leaves state alone");
        assert_eq!(animator.target(), Some(first));

        animator.advance(&mut state, 200);
        assert_eq!(state.transform(), first);
    }

    #[test]
    fn target_equal_to_current_does_not_start() {
        let state = tall_state();
        let mut animator = TransformAnimator::default();
        assert!(!animator.start_animation(&state, state.transform(), 0));
        assert!(!animator.is_animating());
    }

    #[test]
    fn zero_duration_completes_on_first_frame() {
        let mut state = tall_state();
        let mut animator = TransformAnimator::new(0);
        let target = ViewTransform::new(0.5, Vec2::new(0.0, -250.0));
        assert!(animator.start_animation(&state, target, 10));
        assert!(animator.advance(&mut state, 10));
        assert!(!animator.is_animating());
        assert_eq!(state.transform(), target);
    }

    #[test]
    fn clock_before_start_samples_the_start() {
        let mut state = tall_state();
        let start = state.transform();
        let mut animator = TransformAnimator::new(150);
        animator.start_animation(&state, ViewTransform::new(1.0, Vec2::ZERO), 1_000);
        animator.advance(&mut state, 900);
        assert_eq!(state.transform(), start);
        assert!(animator.is_animating());
    }
}
