// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays a JSON gesture script and prints the final transform as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use loupe_demos::{DEFAULT_FRAME_MS, Replay, ReplayError, ReplayOptions, Script};
use loupe_view::FitPolicy;

#[derive(Parser, Debug)]
#[command(name = "replay", about = "Replay scripted gestures through a Loupe zoom controller")]
struct Args {
    /// Path to the JSON script.
    script: PathBuf,

    /// Milliseconds between frames.
    #[arg(long, default_value_t = DEFAULT_FRAME_MS)]
    frame_ms: u64,

    /// Horizontal placement of narrow content: start, center or end.
    #[arg(long)]
    horizontal_fit: Option<FitPolicy>,

    /// Vertical placement of short content: start, center or end.
    #[arg(long)]
    vertical_fit: Option<FitPolicy>,
}

fn run(args: &Args) -> Result<(), ReplayError> {
    let script = Script::load(&args.script)?;
    let mut replay = Replay::new(
        script,
        ReplayOptions {
            frame_ms: args.frame_ms,
            horizontal_fit: args.horizontal_fit,
            vertical_fit: args.vertical_fit,
        },
    )?;

    let last = replay.run(|frame| {
        log::debug!(
            "{:>6} ms  scale {:.4}  offset ({:.1}, {:.1}){}",
            frame.now_ms,
            frame.transform.scale,
            frame.transform.offset.x,
            frame.transform.offset.y,
            if frame.animating { "  animating" } else { "" }
        );
    });
    log::info!("settled: {}", replay.controller().state().is_settled());

    println!("{}", serde_json::to_string_pretty(&last)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
