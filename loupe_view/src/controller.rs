// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

use crate::animator::TransformAnimator;
use crate::config::{ConfigError, ViewConfig};
use crate::gesture::GestureController;
use crate::state::{TransformState, TransformStateDebugInfo};
use crate::transform::ViewTransform;

/// Owns one [`TransformState`] together with the gesture and animation
/// components that drive it.
///
/// Hosts feed it layout changes and recognized gestures, then once per frame
/// call [`ZoomController::advance`] before reading
/// [`ZoomController::transform`]:
///
/// ```rust
/// use kurbo::{Point, Size};
/// use loupe_view::{ViewConfig, ZoomController};
///
/// let mut zoom = ZoomController::new(ViewConfig::default()).unwrap();
/// zoom.set_content_size(Size::new(1000.0, 2000.0));
/// zoom.set_viewport_size(Size::new(500.0, 500.0));
/// assert_eq!(zoom.transform().scale, 0.25);
///
/// // Double tap on the center shows the image at native size.
/// assert!(zoom.double_tap(Point::new(250.0, 250.0), 0));
/// let mut now = 0;
/// while zoom.advance(now) {
///     now += 16;
/// }
/// assert_eq!(zoom.transform().scale, 1.0);
/// ```
///
/// Methods that start an animation return `true` when the host should
/// schedule frames; keep calling `advance` until it returns `false`.
#[derive(Clone, Debug)]
pub struct ZoomController {
    config: ViewConfig,
    state: TransformState,
    gestures: GestureController,
    animator: TransformAnimator,
}

impl ZoomController {
    /// Creates a controller after validating `config`.
    pub fn new(config: ViewConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: ViewConfig) -> Self {
        Self {
            config,
            state: TransformState::new(&config),
            gestures: GestureController::new(config.elastic_resistance),
            animator: TransformAnimator::new(config.animation_duration_ms),
        }
    }

    /// Returns the configuration this controller was built with.
    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Returns the transform state.
    #[must_use]
    pub fn state(&self) -> &TransformState {
        &self.state
    }

    /// Returns the gesture component.
    #[must_use]
    pub fn gestures(&self) -> &GestureController {
        &self.gestures
    }

    /// Returns the animation component.
    #[must_use]
    pub fn animator(&self) -> &TransformAnimator {
        &self.animator
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.gestures.is_pinching()
    }

    /// Returns `true` while an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Reports a new content size. The transform is re-clamped immediately.
    pub fn set_content_size(&mut self, size: Size) {
        self.state.set_content_size(size);
    }

    /// Reports a new viewport size. The transform is re-clamped immediately.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.state.set_viewport_size(size);
    }

    /// Scrolls by `scroll` (previous pointer position minus current).
    ///
    /// See [`GestureController::pan`].
    pub fn pan(&mut self, scroll: Vec2) -> bool {
        self.gestures.pan(&mut self.state, scroll)
    }

    /// Starts a pinch at `focus`.
    pub fn begin_pinch(&mut self, focus: Point) {
        self.gestures.begin_scale(focus);
    }

    /// Applies a pinch sample. See [`GestureController::scale`].
    pub fn pinch(&mut self, factor: f64, focus: Point) -> bool {
        self.gestures.scale(&mut self.state, factor, focus)
    }

    /// Ends the pinch, animating back into the scale range if needed.
    pub fn end_pinch(&mut self, now_ms: u64) -> bool {
        self.gestures.end_scale(&self.state, &mut self.animator, now_ms)
    }

    /// Toggles between fit and native size about `at`.
    pub fn double_tap(&mut self, at: Point, now_ms: u64) -> bool {
        self.gestures.double_tap(&self.state, &mut self.animator, at, now_ms)
    }

    /// Advances the running animation, if any, to `now_ms`.
    ///
    /// Returns `true` if the transform was written this frame. When an
    /// animation finishes, the state is clamped against the current sizes so
    /// a resize during the animation cannot leave it out of range.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        let wrote = self.animator.advance(&mut self.state, now_ms);
        if wrote && !self.animator.is_animating() {
            self.state.clamp_to_bounds();
        }
        wrote
    }

    /// Returns the transform to render.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.state.transform()
    }

    /// Returns the transform to render as an affine map from content to view
    /// coordinates.
    #[must_use]
    pub fn affine(&self) -> Affine {
        self.state.transform().to_affine()
    }

    /// Snapshot of the controller for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomControllerDebugInfo {
        ZoomControllerDebugInfo {
            state: self.state.debug_info(),
            pinching: self.is_pinching(),
            animation_target: self.animator.target(),
        }
    }
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::from_valid(ViewConfig::default())
    }
}

/// Debug snapshot of a [`ZoomController`].
#[derive(Clone, Copy, Debug)]
pub struct ZoomControllerDebugInfo {
    /// Transform state snapshot.
    pub state: TransformStateDebugInfo,
    /// Whether a pinch is in progress.
    pub pinching: bool,
    /// Target of the running animation, if any.
    pub animation_target: Option<ViewTransform>,
}
