//! Input model: normalized events and the gesture session state.
//!
//! This module defines the types consumed by the gesture controller in
//! [`crate::engine`]. Browser events are converted into [`InputEvent`] by
//! [`crate::dom`]; tests construct them directly. `GestureSession` is the
//! context tracked between events to compute incremental pan deltas and
//! relative pinch factors.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::consts::{DOM_DELTA_LINE, DOM_DELTA_PIXEL};

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held. Browsers also set this for trackpad pinches.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDelta {
    /// Horizontal scroll amount.
    pub dx: f64,
    /// Vertical scroll amount (positive = down).
    pub dy: f64,
}

/// Unit of a [`WheelDelta`], mirroring DOM `WheelEvent.deltaMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeltaMode {
    /// Deltas are in pixels (trackpads, most mice).
    #[default]
    Pixel,
    /// Deltas are in lines.
    Line,
    /// Deltas are in pages.
    Page,
}

impl DeltaMode {
    /// Map a DOM `deltaMode` value. Unknown values are treated as pages.
    #[must_use]
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            DOM_DELTA_PIXEL => Self::Pixel,
            DOM_DELTA_LINE => Self::Line,
            _ => Self::Page,
        }
    }

    /// Sign applied to wheel pan deltas: pixel deltas are inverted.
    #[must_use]
    pub fn pan_direction(self) -> f64 {
        match self {
            Self::Pixel => -1.0,
            Self::Line | Self::Page => 1.0,
        }
    }
}

/// A wheel event at a surface position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    /// Pointer position in surface pixels.
    pub position: Point,
    pub delta: WheelDelta,
    pub mode: DeltaMode,
    pub modifiers: Modifiers,
}

/// The active touch contacts of a touch event, in surface pixels.
///
/// There is no empty variant: a touch list without contacts never becomes a
/// `Contacts` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contacts {
    /// Exactly one finger.
    Single(Point),
    /// Exactly two fingers, in the order the platform reported them.
    Pair(Point, Point),
    /// Three or more fingers. Carries only the count; no gesture uses it.
    Many(usize),
}

impl Contacts {
    /// Classify a list of contact points. Returns `None` when `points` is empty.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Option<Self> {
        match *points {
            [] => None,
            [p] => Some(Self::Single(p)),
            [a, b] => Some(Self::Pair(a, b)),
            _ => Some(Self::Many(points.len())),
        }
    }

    /// Number of contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Pair(..) => 2,
            Self::Many(n) => *n,
        }
    }

    /// Whether there are no contacts. Only a hand-built `Many(0)` is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A normalized input event, independent of any platform event API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Wheel(WheelInput),
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    PointerLeave(Point),
    TouchStart(Contacts),
    TouchMove(Contacts),
    TouchEnd,
}

/// Whether a drag (mouse or single finger) is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No drag in progress.
    #[default]
    Idle,
    /// The pointer or a single finger is dragging the plane.
    Dragging,
}

/// Gesture context carried between events.
///
/// Only `state` is reset when a gesture ends. `last` and
/// `touch_start_distance` keep their values until the next gesture overwrites
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSession {
    pub state: InputState,
    /// Last pointer, finger or two-finger midpoint position in surface pixels.
    pub last: Point,
    /// Pinch baseline: contact distance at touch start or the last pinch step.
    pub touch_start_distance: f64,
}

impl GestureSession {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state == InputState::Dragging
    }

    /// Enter `Dragging` with `at` as the pan baseline.
    pub fn begin_drag(&mut self, at: Point) {
        self.state = InputState::Dragging;
        self.last = at;
    }

    /// Return to `Idle`.
    pub fn end(&mut self) {
        self.state = InputState::Idle;
    }

    /// Screen delta from the last position to `to`, then move the baseline there.
    pub fn advance(&mut self, to: Point) -> (f64, f64) {
        let delta = (to.x - self.last.x, to.y - self.last.y);
        self.last = to;
        delta
    }
}
