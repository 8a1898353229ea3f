// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Vec2};

/// Uniform scale followed by a translation, mapping content space into view space.
///
/// A content point `p` is displayed at `p * scale + offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewTransform {
    /// Uniform scale factor.
    pub scale: f64,
    /// Translation applied after scaling, in view coordinates.
    pub offset: Vec2,
}

impl ViewTransform {
    /// Creates a transform from a scale and an offset.
    #[must_use]
    pub const fn new(scale: f64, offset: Vec2) -> Self {
        Self { scale, offset }
    }

    /// Returns the affine map `translate(offset) * scale(scale)`.
    #[must_use]
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Linear interpolation from `self` by `delta` at progress `t`.
    ///
    /// Each field is computed as `start + delta * t` independently.
    pub(crate) fn step(self, delta: Self, t: f64) -> Self {
        Self {
            scale: self.scale + delta.scale * t,
            offset: self.offset + delta.offset * t,
        }
    }

    /// Per-field difference `target - self`.
    pub(crate) fn delta_to(self, target: Self) -> Self {
        Self {
            scale: target.scale - self.scale,
            offset: target.offset - self.offset,
        }
    }
}

impl From<ViewTransform> for Affine {
    fn from(transform: ViewTransform) -> Self {
        transform.to_affine()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;

    #[test]
    fn affine_scales_then_translates() {
        let t = ViewTransform::new(2.0, Vec2::new(10.0, -5.0));
        let p = t.to_affine() * Point::new(3.0, 4.0);
        assert_eq!(p, Point::new(16.0, 3.0));
    }

    #[test]
    fn step_hits_both_ends() {
        let start = ViewTransform::new(1.0, Vec2::new(0.0, 0.0));
        let target = ViewTransform::new(2.0, Vec2::new(-100.0, 50.0));
        let delta = start.delta_to(target);
        assert_eq!(start.step(delta, 0.0), start);
        assert_eq!(start.step(delta, 1.0), target);
        let mid = start.step(delta, 0.5);
        assert_eq!(mid.scale, 1.5);
        assert_eq!(mid.offset, Vec2::new(-50.0, 25.0));
    }
}
