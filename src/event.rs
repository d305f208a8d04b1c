use crate::Point;

pub use keyboard_types::{Code, Key, KeyState, KeyboardEvent, Modifiers};

/// An input event delivered to widgets by the application's event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Mouse(MouseEvent),
    Keyboard(KeyboardEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButtonState {
    JustPressed,
    JustUnpressed,
    StayedUnpressed,
    StayedPressed,
}

impl Default for MouseButtonState {
    fn default() -> Self {
        MouseButtonState::StayedUnpressed
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub position: Point,
    pub previous_position: Point,
    pub left_button: MouseButtonState,
    pub middle_button: MouseButtonState,
    pub right_button: MouseButtonState,
    pub scroll_delta_x: f32,
    pub scroll_delta_y: f32,
    pub modifiers: Modifiers,
}

impl MouseEvent {
    /// A motion event with every button up.
    pub fn moved(position: impl Into<Point>) -> Self {
        let position = position.into();
        Self {
            position,
            previous_position: position,
            left_button: MouseButtonState::StayedUnpressed,
            middle_button: MouseButtonState::StayedUnpressed,
            right_button: MouseButtonState::StayedUnpressed,
            scroll_delta_x: 0.0,
            scroll_delta_y: 0.0,
            modifiers: Modifiers::empty(),
        }
    }

    pub fn left_pressed(position: impl Into<Point>) -> Self {
        Self {
            left_button: MouseButtonState::JustPressed,
            ..Self::moved(position)
        }
    }

    pub fn left_released(position: impl Into<Point>) -> Self {
        Self {
            left_button: MouseButtonState::JustUnpressed,
            ..Self::moved(position)
        }
    }

    /// A motion event while the left button is held.
    pub fn dragged(position: impl Into<Point>) -> Self {
        Self {
            left_button: MouseButtonState::StayedPressed,
            ..Self::moved(position)
        }
    }
}

/// Whether a widget consumed an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCapturedStatus {
    NotCaptured,
    /// The event was used. `repaint` is set when the widget changed how it
    /// looks.
    Captured { repaint: bool },
}

impl Default for EventCapturedStatus {
    fn default() -> Self {
        EventCapturedStatus::NotCaptured
    }
}

impl EventCapturedStatus {
    pub fn is_captured(&self) -> bool {
        matches!(self, Self::Captured { .. })
    }
}
