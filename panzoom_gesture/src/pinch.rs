// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch baseline: frame-to-frame change in the distance between two pointers.

/// Remembers the pinch distance of the previous frame.
///
/// The first sample after a [`PinchBaseline::reset`] only establishes the
/// baseline and yields no delta.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchBaseline {
    previous_distance: Option<f64>,
}

impl PinchBaseline {
    /// Creates a baseline with no previous distance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the previous distance.
    pub fn reset(&mut self) {
        self.previous_distance = None;
    }

    /// The distance recorded by the last sample, if any.
    #[must_use]
    pub fn previous_distance(&self) -> Option<f64> {
        self.previous_distance
    }

    /// Records `distance` and returns its change since the previous sample.
    ///
    /// Returns `0.0` when there is no previous sample.
    pub fn sample(&mut self, distance: f64) -> f64 {
        let delta = self
            .previous_distance
            .map_or(0.0, |previous| distance - previous);
        self.previous_distance = Some(distance);
        delta
    }
}
