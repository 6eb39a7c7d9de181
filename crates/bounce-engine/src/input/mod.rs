//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose windowing types.
//! Shell code is responsible for translating platform events into `InputEvent`s.

mod frame;
mod state;
mod types;

pub use frame::{Click, InputFrame};
pub use state::InputState;
pub use types::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent};
