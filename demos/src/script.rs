// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON gesture scripts.

use std::fs;
use std::path::Path;

use kurbo::Size;
use loupe_view::ViewConfig;
use serde::Deserialize;

use crate::ReplayError;

/// A recorded viewer session: initial layout plus timestamped input.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Controller configuration; defaults apply when absent.
    pub config: Option<ViewConfig>,
    /// Initial content size, `[width, height]`.
    pub content: [f64; 2],
    /// Initial viewport size, `[width, height]`.
    pub viewport: [f64; 2],
    /// Input events. They need not be sorted.
    #[serde(default)]
    pub events: Vec<TimedEvent>,
}

impl Script {
    /// Parses a script from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses the script at `path`.
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let text = fs::read_to_string(path).map_err(|source| ReplayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Initial content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        Size::new(self.content[0], self.content[1])
    }

    /// Initial viewport size.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        Size::new(self.viewport[0], self.viewport[1])
    }
}

/// An [`Event`] due at `at_ms` on the replay clock.
#[derive(Clone, Debug, Deserialize)]
pub struct TimedEvent {
    /// Replay time in milliseconds at which the event is dispatched.
    pub at_ms: u64,
    /// The event itself.
    #[serde(flatten)]
    pub event: Event,
}

/// One input to the controller, tagged by `"kind"` in JSON.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    /// Scroll by `(dx, dy)`: previous pointer position minus current.
    Pan {
        /// Horizontal scroll.
        dx: f64,
        /// Vertical scroll.
        dy: f64,
    },
    /// Start of a pinch at a focal point.
    PinchBegin {
        /// Focal x in view coordinates.
        x: f64,
        /// Focal y in view coordinates.
        y: f64,
    },
    /// One pinch sample.
    Pinch {
        /// Scale factor since the previous sample.
        factor: f64,
        /// Focal x in view coordinates.
        x: f64,
        /// Focal y in view coordinates.
        y: f64,
    },
    /// End of the pinch.
    PinchEnd,
    /// Double tap at a point.
    DoubleTap {
        /// Tap x in view coordinates.
        x: f64,
        /// Tap y in view coordinates.
        y: f64,
    },
    /// The content was replaced by one of a different size.
    Content {
        /// New content width.
        width: f64,
        /// New content height.
        height: f64,
    },
    /// The viewport was resized.
    Viewport {
        /// New viewport width.
        width: f64,
        /// New viewport height.
        height: f64,
    },
}

impl Event {
    /// Short name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pan { .. } => "pan",
            Self::PinchBegin { .. } => "pinch_begin",
            Self::Pinch { .. } => "pinch",
            Self::PinchEnd => "pinch_end",
            Self::DoubleTap { .. } => "double_tap",
            Self::Content { .. } => "content",
            Self::Viewport { .. } => "viewport",
        }
    }
}

#[cfg(test)]
mod tests {
    use loupe_view::FitPolicy;

    use super::{Event, Script};
    use crate::ReplayError;

    #[test]
    fn parses_events_of_every_kind() {
        let script = Script::from_json(
            r#"{
                "content": [1000, 2000],
                "viewport": [500, 500],
                "events": [
                    { "at_ms": 0, "kind": "pan", "dx": 1, "dy": -2 },
                    { "at_ms": 5, "kind": "pinch_begin", "x": 10, "y": 20 },
                    { "at_ms": 6, "kind": "pinch", "factor": 1.1, "x": 11, "y": 21 },
                    { "at_ms": 7, "kind": "pinch_end" },
                    { "at_ms": 8, "kind": "double_tap", "x": 3, "y": 4 },
                    { "at_ms": 9, "kind": "content", "width": 10, "height": 10 },
                    { "at_ms": 9, "kind": "viewport", "width": 20, "height": 30 }
                ]
            }"#,
        )
        .unwrap();

        assert!(script.config.is_none());
        assert_eq!(script.content_size().width, 1000.0);
        let names: Vec<_> = script.events.iter().map(|e| e.event.name()).collect();
        assert_eq!(
            names,
            [
                "pan",
                "pinch_begin",
                "pinch",
                "pinch_end",
                "double_tap",
                "content",
                "viewport"
            ]
        );
        assert_eq!(
            script.events[2].event,
            Event::Pinch {
                factor: 1.1,
                x: 11.0,
                y: 21.0
            }
        );
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let script = Script::from_json(
            r#"{
                "config": { "fit": { "horizontal": "start", "vertical": "end" } },
                "content": [1, 1],
                "viewport": [1, 1]
            }"#,
        )
        .unwrap();
        let config = script.config.unwrap();
        assert_eq!(config.fit.horizontal, FitPolicy::Start);
        assert_eq!(config.fit.vertical, FitPolicy::End);
        assert_eq!(config.max_scale_ceiling, 2.0);
        assert_eq!(config.animation_duration_ms, 150);
    }

    #[test]
    fn unknown_event_kind_is_an_error() {
        let err = Script::from_json(
            r#"{ "content": [1, 1], "viewport": [1, 1],
                 "events": [{ "at_ms": 0, "kind": "rotate", "angle": 1 }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ReplayError::Json(_)));
    }
}
