// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::fit::{AxisFit, FitPolicy};

/// Default lower bound for `min_scale` when the fit scale is larger.
pub const DEFAULT_MIN_SCALE_FLOOR: f64 = 1.0;
/// Default upper bound for `max_scale` when the fit scale is smaller.
pub const DEFAULT_MAX_SCALE_CEILING: f64 = 2.0;
/// Default duration of snap-back and double-tap animations.
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 150;
/// Default damping applied to pinch factors beyond the scale limits.
pub const DEFAULT_ELASTIC_RESISTANCE: f64 = 0.3;

/// Invalid configuration.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A fit policy name was not one of `start`, `center` or `end`.
    #[error("unknown fit policy; expected `start`, `center` or `end`")]
    UnknownFitPolicy,
    /// The scale floor must be finite and positive.
    #[error("minimum scale floor must be finite and positive, got {0}")]
    InvalidScaleFloor(f64),
    /// The scale ceiling must be finite and positive.
    #[error("maximum scale ceiling must be finite and positive, got {0}")]
    InvalidScaleCeiling(f64),
    /// The scale floor is above the ceiling.
    #[error("minimum scale floor {floor} exceeds maximum scale ceiling {ceiling}")]
    InvertedScaleLimits {
        /// Configured floor.
        floor: f64,
        /// Configured ceiling.
        ceiling: f64,
    },
    /// The elastic resistance must lie in `(0, 1]`.
    ///
    /// Larger values can damp a pinch factor to zero or below.
    #[error("elastic resistance must be in (0, 1], got {0}")]
    InvalidElasticResistance(f64),
}

/// Construction-time settings for a [`crate::ZoomController`].
///
/// The effective scale range is derived from the fit scale:
/// `min_scale = min(fit_scale, min_scale_floor)` and
/// `max_scale = max(fit_scale, max_scale_ceiling)`, so the fitted view is
/// always reachable.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewConfig {
    /// Scale floor; `1.0` keeps native size reachable.
    pub min_scale_floor: f64,
    /// Scale ceiling.
    pub max_scale_ceiling: f64,
    /// Length of snap-back and double-tap animations, in milliseconds.
    pub animation_duration_ms: u64,
    /// Per-axis placement of content smaller than the viewport.
    pub fit: AxisFit,
    /// Damping constant for pinch factors sampled at or beyond the scale limits,
    /// in `(0, 1]`.
    pub elastic_resistance: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            min_scale_floor: DEFAULT_MIN_SCALE_FLOOR,
            max_scale_ceiling: DEFAULT_MAX_SCALE_CEILING,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            fit: AxisFit::default(),
            elastic_resistance: DEFAULT_ELASTIC_RESISTANCE,
        }
    }
}

impl ViewConfig {
    /// Sets the scale floor and ceiling.
    #[must_use]
    pub fn with_scale_limits(mut self, floor: f64, ceiling: f64) -> Self {
        self.min_scale_floor = floor;
        self.max_scale_ceiling = ceiling;
        self
    }

    /// Sets the animation duration in milliseconds.
    #[must_use]
    pub fn with_animation_duration_ms(mut self, duration_ms: u64) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    /// Sets the fit policy for both axes.
    #[must_use]
    pub fn with_fit(mut self, horizontal: FitPolicy, vertical: FitPolicy) -> Self {
        self.fit = AxisFit {
            horizontal,
            vertical,
        };
        self
    }

    /// Sets the elastic resistance constant.
    #[must_use]
    pub fn with_elastic_resistance(mut self, resistance: f64) -> Self {
        self.elastic_resistance = resistance;
        self
    }

    /// Checks that the numeric settings describe a usable scale range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floor = self.min_scale_floor;
        let ceiling = self.max_scale_ceiling;
        if !floor.is_finite() || floor <= 0.0 {
            return Err(ConfigError::InvalidScaleFloor(floor));
        }
        if !ceiling.is_finite() || ceiling <= 0.0 {
            return Err(ConfigError::InvalidScaleCeiling(ceiling));
        }
        if floor > ceiling {
            return Err(ConfigError::InvertedScaleLimits { floor, ceiling });
        }
        let resistance = self.elastic_resistance;
        if resistance.is_nan() || resistance <= 0.0 || resistance > 1.0 {
            return Err(ConfigError::InvalidElasticResistance(resistance));
        }
        Ok(())
    }
}
