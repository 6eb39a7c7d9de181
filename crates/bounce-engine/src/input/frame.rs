use crate::coords::Point;

use super::types::{InputEvent, MouseButton};

/// A completed press + release of one button, reported at the release position.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Click {
    pub button: MouseButton,
    pub pos: Point,
}

/// Per-frame input deltas.
///
/// `InputState` holds what persists between frames (buttons held down).
/// `InputFrame` collects the raw events and the clicks completed this frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Clicks completed this frame, in arrival order.
    pub clicks: Vec<Click>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.clicks.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}
