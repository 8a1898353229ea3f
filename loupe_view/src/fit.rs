// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::str::FromStr;

use crate::config::ConfigError;

/// How content is placed on one axis when, at the current scale, it is no
/// larger than the viewport along that axis.
///
/// The policy is ignored on an axis where the scaled content overflows the
/// viewport; there the offset is clamped instead (see [`adjusted_position`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FitPolicy {
    /// Align the content with the start (left or top) of the viewport.
    Start,
    /// Center the content within the viewport.
    #[default]
    Center,
    /// Align the content with the end (right or bottom) of the viewport.
    End,
}

impl FitPolicy {
    /// Returns the lowercase name used by [`FitPolicy::from_str`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }

    fn place(self, margin: f64) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => margin * 0.5,
            Self::End => margin,
        }
    }
}

impl FromStr for FitPolicy {
    type Err = ConfigError;

    /// Parses `start`, `center` or `end` (ASCII case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Start, Self::Center, Self::End]
            .into_iter()
            .find(|policy| policy.as_str().eq_ignore_ascii_case(s))
            .ok_or(ConfigError::UnknownFitPolicy)
    }
}

impl core::fmt::Display for FitPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fit policy for both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisFit {
    /// Placement along X.
    pub horizontal: FitPolicy,
    /// Placement along Y.
    pub vertical: FitPolicy,
}

impl AxisFit {
    /// Uses `policy` on both axes.
    #[must_use]
    pub const fn uniform(policy: FitPolicy) -> Self {
        Self {
            horizontal: policy,
            vertical: policy,
        }
    }
}

/// Returns the offset to use on one axis for content of `content_len` shown at
/// `scale` inside a viewport of `viewport_len`.
///
/// With `margin = viewport_len - content_len * scale`:
/// - If `margin >= 0` the scaled content fits, `pos` is ignored and the content
///   is placed according to `policy` (`0`, `margin / 2` or `margin`).
/// - Otherwise `pos` is clamped into `[margin, 0]`, so neither edge of the
///   content can be pulled inside the viewport.
///
/// ```rust
/// use loupe_view::{FitPolicy, adjusted_position};
///
/// // 100px of content at 2x in a 300px viewport leaves 100px spare: center it.
/// assert_eq!(adjusted_position(-40.0, 2.0, 100.0, 300.0, FitPolicy::Center), 50.0);
/// // 100px at 4x overflows by 100px: offsets are limited to [-100, 0].
/// assert_eq!(adjusted_position(-140.0, 4.0, 100.0, 300.0, FitPolicy::Center), -100.0);
/// assert_eq!(adjusted_position(25.0, 4.0, 100.0, 300.0, FitPolicy::Center), 0.0);
/// ```
#[must_use]
pub fn adjusted_position(
    pos: f64,
    scale: f64,
    content_len: f64,
    viewport_len: f64,
    policy: FitPolicy,
) -> f64 {
    let margin = viewport_len - content_len * scale;
    if margin >= 0.0 {
        policy.place(margin)
    } else {
        pos.clamp(margin, 0.0)
    }
}
