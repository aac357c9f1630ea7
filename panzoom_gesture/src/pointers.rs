// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracked pointers: per-id previous/current positions in arrival order.
//!
//! [`PointerTracker`] keys records by pointer id for O(1) lookup and keeps a
//! side list of ids in arrival order, so "the first two pointers" always
//! means the two that went down earliest among those still active.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use panzoom_gesture::pointers::PointerTracker;
//!
//! let mut tracker = PointerTracker::new();
//! tracker.insert(7_u32, Point::new(10.0, 10.0));
//! tracker.update(&7, Point::new(14.0, 13.0));
//! assert_eq!(tracker.get(&7).unwrap().delta(), Vec2::new(4.0, 3.0));
//!
//! // Once a frame has consumed the delta, the baseline advances.
//! tracker.advance();
//! assert_eq!(tracker.get(&7).unwrap().delta(), Vec2::ZERO);
//! ```

use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// Previous and current client position of one active pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedPointer<K> {
    /// Pointer id.
    pub id: K,
    /// Position at the last frame boundary.
    pub previous: Point,
    /// Most recent reported position.
    pub current: Point,
}

impl<K> TrackedPointer<K> {
    /// A freshly pressed pointer: previous and current both at `position`.
    #[must_use]
    pub fn new(id: K, position: Point) -> Self {
        Self {
            id,
            previous: position,
            current: position,
        }
    }

    /// Movement since the last frame boundary.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.current - self.previous
    }
}

/// Active pointers keyed by id, iterated in arrival order.
#[derive(Clone, Debug)]
pub struct PointerTracker<K> {
    pointers: HashMap<K, TrackedPointer<K>>,
    order: SmallVec<[K; 4]>,
}

impl<K> Default for PointerTracker<K> {
    fn default() -> Self {
        Self {
            pointers: HashMap::new(),
            order: SmallVec::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> PointerTracker<K> {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `id` at `position`.
    ///
    /// A pointer that is already tracked is restarted: its record is replaced
    /// and it moves to the back of the arrival order.
    pub fn insert(&mut self, id: K, position: Point) {
        if self
            .pointers
            .insert(id, TrackedPointer::new(id, position))
            .is_some()
        {
            self.order.retain(|k| *k != id);
        }
        self.order.push(id);
    }

    /// Records a new current position for `id`.
    ///
    /// Returns `false` (and does nothing) if `id` is not tracked.
    pub fn update(&mut self, id: &K, position: Point) -> bool {
        match self.pointers.get_mut(id) {
            Some(pointer) => {
                pointer.current = position;
                true
            }
            None => false,
        }
    }

    /// Stops tracking `id`, returning its last record if it was tracked.
    pub fn remove(&mut self, id: &K) -> Option<TrackedPointer<K>> {
        let pointer = self.pointers.remove(id)?;
        self.order.retain(|k| *k != *id);
        Some(pointer)
    }

    /// Returns the record for `id`.
    #[must_use]
    pub fn get(&self, id: &K) -> Option<&TrackedPointer<K>> {
        self.pointers.get(id)
    }

    /// Returns the `index`-th pointer in arrival order.
    #[must_use]
    pub fn nth(&self, index: usize) -> Option<&TrackedPointer<K>> {
        self.order.get(index).and_then(|id| self.pointers.get(id))
    }

    /// The two earliest active pointers, if at least two are down.
    #[must_use]
    pub fn pinch_pair(&self) -> Option<(&TrackedPointer<K>, &TrackedPointer<K>)> {
        Some((self.nth(0)?, self.nth(1)?))
    }

    /// Iterates active pointers in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &TrackedPointer<K>> + '_ {
        self.order.iter().filter_map(|id| self.pointers.get(id))
    }

    /// Number of active pointers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` when no pointer is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Moves every pointer's previous position up to its current position.
    pub fn advance(&mut self) {
        for pointer in self.pointers.values_mut() {
            pointer.previous = pointer.current;
        }
    }

    /// Forgets all pointers.
    pub fn clear(&mut self) {
        self.pointers.clear();
        self.order.clear();
    }
}
