//! Paint model shared between the animation core and renderers.
//!
//! Shapes are painted with flat opaque colors only; geometry types live in `coords`.

pub mod color;

pub use color::{Color, ParseColorError};
