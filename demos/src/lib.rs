// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless host simulations for `loupe_view`.
//!
//! The `replay` binary plays a JSON gesture [`Script`] through a
//! [`loupe_view::ZoomController`] on a fixed-rate frame clock and logs the
//! transform a renderer would draw on every frame.
//!
//! Run:
//! - `cargo run -p loupe_demos --bin replay -- demos/scripts/tour.json`
//! - `RUST_LOG=debug cargo run -p loupe_demos --bin replay -- demos/scripts/tour.json --frame-ms 8`

use std::io;
use std::path::PathBuf;

use loupe_view::ConfigError;

mod replay;
mod script;

pub use replay::{DEFAULT_FRAME_MS, Frame, Replay, ReplayOptions};
pub use script::{Event, Script, TimedEvent};

/// Errors raised while loading or running a replay.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    /// The script file could not be read.
    #[error("failed to read script {}: {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The script, or the final transform, could not be (de)serialized.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The script's controller configuration was rejected.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// `--frame-ms` was zero.
    #[error("frame interval must be at least 1 ms")]
    ZeroFrameInterval,
}
