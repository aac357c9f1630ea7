// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mouse drag panning: button-held pointer motion becomes pan deltas.
//!
//! Unlike the multi-pointer interpreter, which samples once per frame, a
//! mouse drag pans on every move event. The last pointer position is
//! tracked even while the button is up, so the first move after a press
//! measures from the press position.
//!
//! ## Usage
//!
//! 1) Call [`MouseDrag::press`] when the button goes down.
//! 2) On each move event, call [`MouseDrag::motion`]; it returns the pan
//!    delta while the button is held.
//! 3) Call [`MouseDrag::release`] when the button goes up.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use panzoom_gesture::drag::MouseDrag;
//!
//! let mut drag = MouseDrag::default();
//!
//! // Hovering does not pan.
//! assert_eq!(drag.motion(Point::new(5.0, 5.0)), None);
//!
//! drag.press(Point::new(10.0, 20.0));
//! assert_eq!(drag.motion(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! assert_eq!(drag.total_offset(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//!
//! drag.release();
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

use crate::target::PanZoomTarget;

/// Tracks mouse drag state for pan-on-move processing.
#[derive(Debug, Clone, Default, Copy)]
pub struct MouseDrag {
    /// Position of the press that started the current drag.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position, pressed or not.
    pub last_pos: Option<Point>,
}

impl MouseDrag {
    /// Starts a drag at `pos`.
    pub fn press(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records a pointer move, returning the delta since the last move while dragging.
    pub fn motion(&mut self, pos: Point) -> Option<Vec2> {
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        if self.is_dragging() { delta } else { None }
    }

    /// Records a pointer move and pans `target` by the drag delta, if any.
    pub fn motion_pan<T: PanZoomTarget + ?Sized>(
        &mut self,
        pos: Point,
        target: &mut T,
    ) -> Option<Vec2> {
        let delta = self.motion(pos)?;
        target.move_by(delta);
        Some(delta)
    }

    /// Offset of `current_pos` from the press position while dragging.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// Ends the drag. The last pointer position is kept.
    pub fn release(&mut self) {
        self.start_pos = None;
    }

    /// Returns `true` while the button is held.
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
