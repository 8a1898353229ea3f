// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-rate frame loop that plays a [`Script`] through a [`ZoomController`].

use kurbo::{Point, Size, Vec2};
use loupe_view::{AxisFit, FitPolicy, ViewConfig, ViewTransform, ZoomController};

use crate::ReplayError;
use crate::script::{Event, Script, TimedEvent};

/// Default frame interval, roughly 60 Hz.
pub const DEFAULT_FRAME_MS: u64 = 16;

/// Knobs that apply on top of a script.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReplayOptions {
    /// Interval between frames. Must be positive.
    pub frame_ms: u64,
    /// Replaces the script's horizontal fit policy when set.
    pub horizontal_fit: Option<FitPolicy>,
    /// Replaces the script's vertical fit policy when set.
    pub vertical_fit: Option<FitPolicy>,
}

impl Default for ReplayOptions {
    fn default() -> Self {
        Self {
            frame_ms: DEFAULT_FRAME_MS,
            horizontal_fit: None,
            vertical_fit: None,
        }
    }
}

/// What the host would have rendered on one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Replay clock at this frame.
    pub now_ms: u64,
    /// Transform after dispatching due events and advancing the animation.
    pub transform: ViewTransform,
    /// Whether an animation is still in flight after this frame.
    pub animating: bool,
}

/// Replays scripted input one frame at a time.
#[derive(Debug)]
pub struct Replay {
    zoom: ZoomController,
    events: Vec<TimedEvent>,
    next_event: usize,
    frame_ms: u64,
    now_ms: u64,
}

impl Replay {
    /// Builds a replay for `script`, laying out its initial sizes.
    pub fn new(script: Script, options: ReplayOptions) -> Result<Self, ReplayError> {
        if options.frame_ms == 0 {
            return Err(ReplayError::ZeroFrameInterval);
        }
        let mut config = script.config.unwrap_or_default();
        config.fit = AxisFit {
            horizontal: options.horizontal_fit.unwrap_or(config.fit.horizontal),
            vertical: options.vertical_fit.unwrap_or(config.fit.vertical),
        };

        let mut zoom = ZoomController::new(config)?;
        zoom.set_content_size(script.content_size());
        zoom.set_viewport_size(script.viewport_size());
        log::info!(
            "content {:?} in viewport {:?}: fit scale {}",
            script.content_size(),
            script.viewport_size(),
            zoom.state().fit_scale()
        );

        let mut events = script.events;
        events.sort_by_key(|event| event.at_ms);
        Ok(Self {
            zoom,
            events,
            next_event: 0,
            frame_ms: options.frame_ms,
            now_ms: 0,
        })
    }

    /// Returns the controller being driven.
    #[must_use]
    pub fn controller(&self) -> &ZoomController {
        &self.zoom
    }

    /// Returns the configuration in effect.
    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        self.zoom.config()
    }

    /// Returns `true` once every event has been dispatched and no animation
    /// is running.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.next_event == self.events.len() && !self.zoom.is_animating()
    }

    /// Runs one frame: dispatches every event due by now, then advances the
    /// animation.
    pub fn step(&mut self) -> Frame {
        let now_ms = self.now_ms;
        while let Some(timed) = self.events.get(self.next_event) {
            if timed.at_ms > now_ms {
                break;
            }
            let event = timed.event.clone();
            self.next_event += 1;
            self.dispatch(&event, now_ms);
        }
        self.zoom.advance(now_ms);
        self.now_ms = self.now_ms.saturating_add(self.frame_ms);

        Frame {
            now_ms,
            transform: self.zoom.transform(),
            animating: self.zoom.is_animating(),
        }
    }

    /// Steps until [`Replay::is_finished`], calling `on_frame` after every
    /// frame, and returns the final transform.
    pub fn run(&mut self, mut on_frame: impl FnMut(&Frame)) -> ViewTransform {
        loop {
            let frame = self.step();
            on_frame(&frame);
            if self.is_finished() {
                return frame.transform;
            }
        }
    }

    fn dispatch(&mut self, event: &Event, now_ms: u64) {
        let applied = match *event {
            Event::Pan { dx, dy } => self.zoom.pan(Vec2::new(dx, dy)),
            Event::PinchBegin { x, y } => {
                self.zoom.begin_pinch(Point::new(x, y));
                true
            }
            Event::Pinch { factor, x, y } => self.zoom.pinch(factor, Point::new(x, y)),
            Event::PinchEnd => self.zoom.end_pinch(now_ms),
            Event::DoubleTap { x, y } => self.zoom.double_tap(Point::new(x, y), now_ms),
            Event::Content { width, height } => {
                self.zoom.set_content_size(Size::new(width, height));
                true
            }
            Event::Viewport { width, height } => {
                self.zoom.set_viewport_size(Size::new(width, height));
                true
            }
        };
        if applied {
            log::info!("{now_ms:>6} ms  {}", event.name());
        } else {
            log::info!("{now_ms:>6} ms  {} (no effect)", event.name());
        }
    }
}
