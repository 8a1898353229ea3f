// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_view --heading-base-level=0

//! Loupe View: pinch, pan and double-tap zoom for an image in a fixed viewport.
//!
//! This crate provides a small, headless model of an image viewer's transform.
//! It focuses on:
//! - Deriving a fit scale and a `[min_scale, max_scale]` range from the
//!   content and viewport sizes.
//! - Keeping the offset clamped so content never leaves a gap at an edge it
//!   overflows, and placing content smaller than the viewport per axis
//!   ([`FitPolicy`]).
//! - Applying pan deltas and pinch samples immediately, with elastic damping
//!   beyond the scale limits.
//! - Animating snap-back after a pinch and the fit/native-size toggle of a
//!   double tap.
//!
//! It does **not** recognize gestures, decode touch events, load images or
//! render. Callers are expected to:
//! - Classify input into pans, pinches and double taps at a higher layer.
//! - Report content and viewport sizes when they change.
//! - Call [`ZoomController::advance`] once per frame with a monotonic
//!   millisecond timestamp, then draw with [`ZoomController::affine`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use loupe_view::{ViewConfig, ZoomController};
//!
//! let mut zoom = ZoomController::new(ViewConfig::default()).unwrap();
//! zoom.set_content_size(Size::new(4000.0, 3000.0));
//! zoom.set_viewport_size(Size::new(800.0, 600.0));
//!
//! // The image starts fitted: 0.2x, filling the viewport exactly.
//! assert_eq!(zoom.transform().scale, 0.2);
//!
//! // A pinch around the center, then release.
//! zoom.begin_pinch(Point::new(400.0, 300.0));
//! zoom.pinch(1.5, Point::new(400.0, 300.0));
//! zoom.pinch(1.5, Point::new(400.0, 300.0));
//! zoom.end_pinch(0);
//!
//! // Frame loop: advance, then read the transform.
//! let mut now = 0;
//! while zoom.advance(now) {
//!     now += 16;
//! }
//! assert!(zoom.state().is_settled());
//!
//! // Drag the content to the left.
//! zoom.pan(Vec2::new(30.0, 0.0));
//! let content_to_view = zoom.affine();
//! # let _ = content_to_view;
//! ```
//!
//! ## Design notes
//!
//! - Scaling is **uniform**; rotation and per-axis scale are out of scope.
//! - [`ZoomController`] owns the single [`TransformState`] and lends it to
//!   [`GestureController`] and [`TransformAnimator`] call by call.
//! - The core never reads a clock. Every call that starts or advances an
//!   animation takes `now_ms`, which keeps hosts and tests deterministic.
//! - At most one animation runs at a time and it always runs to completion;
//!   start requests made meanwhile are dropped.
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` targets.
//! - `serde`: `Serialize`/`Deserialize` for [`ViewConfig`], [`FitPolicy`],
//!   [`AxisFit`] and [`ViewTransform`].
//! - `tracing`: emit `tracing` events for layout changes and the animation
//!   lifecycle.
//!
//! This crate is `no_std`.

#![no_std]

#[macro_use]
mod macros;

mod animator;
mod config;
mod controller;
mod fit;
mod gesture;
mod state;
mod transform;

pub use animator::{AnimationJob, TransformAnimator};
pub use config::{
    ConfigError, DEFAULT_ANIMATION_DURATION_MS, DEFAULT_ELASTIC_RESISTANCE,
    DEFAULT_MAX_SCALE_CEILING, DEFAULT_MIN_SCALE_FLOOR, ViewConfig,
};
pub use controller::{ZoomController, ZoomControllerDebugInfo};
pub use fit::{AxisFit, FitPolicy, adjusted_position};
pub use gesture::GestureController;
pub use state::{TransformState, TransformStateDebugInfo};
pub use transform::ViewTransform;
