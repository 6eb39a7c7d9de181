/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// The button that selects and creates shapes.
    #[inline]
    pub fn is_primary(self) -> bool {
        self == MouseButton::Left
    }

    /// The button that asks for the canvas context menu.
    #[inline]
    pub fn is_secondary(self) -> bool {
        self == MouseButton::Right
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Pointer button event in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
}

/// Platform-agnostic input events fed in by the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerButton(PointerButtonEvent),

    /// Pointer left the canvas surface; presses in flight are abandoned.
    PointerLeft,

    /// Window focus change.
    Focused(bool),
}

impl InputEvent {
    /// Shorthand for a button event at `(x, y)`.
    pub fn button(button: MouseButton, state: MouseButtonState, x: f32, y: f32) -> Self {
        InputEvent::PointerButton(PointerButtonEvent { button, state, x, y })
    }
}
