//! Time subsystem.
//!
//! Provides stable, testable frame timing utilities without coupling to the animation loop.
//! Intended usage:
//! - one `FrameClock` per animation loop
//! - call `tick()` once per animation frame to obtain `FrameTime`

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
