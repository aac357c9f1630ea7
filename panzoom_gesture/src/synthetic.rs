// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builders for synthetic `ui-events` pointer events.
//!
//! Headless hosts (scripted replays, benchmarks, tests) have no windowing
//! backend to translate platform input. These helpers build the same
//! [`PointerEvent`] values a backend would, at a scale factor of `1.0` so
//! that physical and logical positions coincide.
//!
//! Id `0` has no [`PointerId`] and produces an event without one, which the
//! gesture interpreter ignores.
//!
//! ```
//! use kurbo::Point;
//! use panzoom_gesture::synthetic;
//! use ui_events::pointer::PointerEvent;
//!
//! let event = synthetic::touch_down(3, Point::new(10.0, 20.0));
//! let PointerEvent::Down(down) = &event else { unreachable!() };
//! assert_eq!(down.state.logical_point(), Point::new(10.0, 20.0));
//! ```

use dpi::PhysicalPosition;
use kurbo::Point;
use ui_events::ScrollDelta;
use ui_events::keyboard::Modifiers;
use ui_events::pointer::{
    PointerButton, PointerButtonEvent, PointerEvent, PointerId, PointerInfo, PointerScrollEvent,
    PointerState, PointerType, PointerUpdate,
};

/// Pointer state at `position` with the given modifiers.
#[must_use]
pub fn state(position: Point, modifiers: Modifiers) -> PointerState {
    PointerState {
        position: PhysicalPosition::new(position.x, position.y),
        modifiers,
        scale_factor: 1.0,
        ..PointerState::default()
    }
}

fn info(id: u64, pointer_type: PointerType) -> PointerInfo {
    PointerInfo {
        pointer_id: PointerId::new(id),
        persistent_device_id: None,
        pointer_type,
    }
}

fn button(id: u64, pointer_type: PointerType, position: Point) -> PointerButtonEvent {
    PointerButtonEvent {
        button: matches!(pointer_type, PointerType::Mouse).then_some(PointerButton::Primary),
        pointer: info(id, pointer_type),
        state: state(position, Modifiers::empty()),
    }
}

fn update(id: u64, pointer_type: PointerType, position: Point) -> PointerUpdate {
    PointerUpdate {
        pointer: info(id, pointer_type),
        current: state(position, Modifiers::empty()),
        coalesced: Vec::new(),
        predicted: Vec::new(),
    }
}

/// A finger touching down.
#[must_use]
pub fn touch_down(id: u64, position: Point) -> PointerEvent {
    PointerEvent::Down(button(id, PointerType::Touch, position))
}

/// A finger moving.
#[must_use]
pub fn touch_move(id: u64, position: Point) -> PointerEvent {
    PointerEvent::Move(update(id, PointerType::Touch, position))
}

/// A finger lifting at `position`.
#[must_use]
pub fn touch_up(id: u64, position: Point) -> PointerEvent {
    PointerEvent::Up(button(id, PointerType::Touch, position))
}

/// The platform cancelling a touch.
#[must_use]
pub fn touch_cancel(id: u64) -> PointerEvent {
    PointerEvent::Cancel(info(id, PointerType::Touch))
}

/// The primary mouse button going down.
#[must_use]
pub fn mouse_down(position: Point) -> PointerEvent {
    PointerEvent::Down(button(1, PointerType::Mouse, position))
}

/// The mouse moving, with or without a button held.
#[must_use]
pub fn mouse_move(position: Point) -> PointerEvent {
    PointerEvent::Move(update(1, PointerType::Mouse, position))
}

/// The primary mouse button going up.
#[must_use]
pub fn mouse_up(position: Point) -> PointerEvent {
    PointerEvent::Up(button(1, PointerType::Mouse, position))
}

/// A mouse wheel or trackpad scroll at `position`.
#[must_use]
pub fn scroll(delta: ScrollDelta, modifiers: Modifiers, position: Point) -> PointerEvent {
    PointerEvent::Scroll(PointerScrollEvent {
        pointer: info(1, PointerType::Mouse),
        delta,
        state: state(position, modifiers),
    })
}
