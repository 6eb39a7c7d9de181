//! Bounce engine crate.
//!
//! Renderer-agnostic building blocks shared by the animation core and its shells:
//! geometry, colors, the recorded draw stream, pointer input and frame timing.

pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod time;
