// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Largest integer exactly representable by an `f64` (`2^53 - 1`).
///
/// Used as the half-width of the translation range when a [`crate::Camera`]
/// has no bounds limit, so that an unconstrained camera still clamps into a
/// finite range.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Clamp `value` into `[min, max]` as `min(max(value, min), max)`.
///
/// Unlike [`f64::clamp`], this never panics: an inverted range
/// (`min > max`) collapses to `max`. A `NaN` value lands on `min` before the
/// upper bound is applied.
#[inline]
pub(crate) fn clamp(min: f64, value: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Inclusive range of allowed scale factors.
///
/// The default range is `[0.25, 4.0]`. Callers may tighten it, for example to
/// `[1.0, 4.0]` so content can never be shown smaller than its natural size.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleRange {
    /// Smallest allowed scale.
    pub min: f64,
    /// Largest allowed scale.
    pub max: f64,
}

impl ScaleRange {
    /// Creates a scale range, swapping the arguments if `min > max`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Clamps `scale` into this range.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        clamp(self.min, scale, self.max)
    }

    /// Returns `true` if `scale` lies inside the range (bounds included).
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        self.min <= scale && scale <= self.max
    }
}

impl Default for ScaleRange {
    fn default() -> Self {
        Self {
            min: 0.25,
            max: 4.0,
        }
    }
}

/// Legal translation range of a camera for its current scale and bounds.
///
/// The range is derived state: a [`crate::Camera`] recomputes it on every
/// update. When the scaled content is smaller than the viewport along an
/// axis, `min > max` on that axis and positions collapse to `max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanRange {
    /// Smallest allowed X translation.
    pub min_x: f64,
    /// Largest allowed X translation.
    pub max_x: f64,
    /// Smallest allowed Y translation.
    pub min_y: f64,
    /// Largest allowed Y translation.
    pub max_y: f64,
}

impl PanRange {
    /// The range used when no bounds limit is set.
    pub const UNBOUNDED: Self = Self {
        min_x: -MAX_SAFE_INTEGER,
        max_x: MAX_SAFE_INTEGER,
        min_y: -MAX_SAFE_INTEGER,
        max_y: MAX_SAFE_INTEGER,
    };

    /// Clamps a requested position into the range, axis by axis.
    #[must_use]
    pub fn clamp(&self, pos: Point) -> Point {
        Point::new(
            clamp(self.min_x, pos.x, self.max_x),
            clamp(self.min_y, pos.y, self.max_y),
        )
    }

    /// Returns `true` if either axis has collapsed (`min > max`).
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }
}

impl Default for PanRange {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{PanRange, ScaleRange, clamp};

    #[test]
    fn clamp_inverted_range_collapses_to_max() {
        assert_eq!(clamp(10.0, 0.0, -5.0), -5.0);
        assert_eq!(clamp(10.0, 100.0, -5.0), -5.0);
    }

    #[test]
    fn clamp_nan_lands_in_range() {
        assert_eq!(clamp(1.0, f64::NAN, 4.0), 1.0);
    }

    #[test]
    fn scale_range_normalizes_order() {
        let range = ScaleRange::new(4.0, 1.0);
        assert_eq!(range, ScaleRange::new(1.0, 4.0));
        assert_eq!(range.clamp(10.0), 4.0);
        assert_eq!(range.clamp(0.1), 1.0);
        assert!(range.contains(1.0));
        assert!(!range.contains(4.5));
    }

    #[test]
    fn default_scale_range() {
        let range = ScaleRange::default();
        assert_eq!(range.min, 0.25);
        assert_eq!(range.max, 4.0);
    }

    #[test]
    fn unbounded_range_is_finite() {
        let range = PanRange::default();
        let far = range.clamp(Point::new(f64::INFINITY, f64::NEG_INFINITY));
        assert_eq!(far, Point::new(range.max_x, range.min_y));
        assert!(!range.is_inverted());
    }
}
