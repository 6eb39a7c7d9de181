//! Coordinate and geometry types shared by the draw stream and the animation core.
//!
//! Canonical space:
//! - integer canvas pixels
//! - origin top-left
//! - +X right, +Y down

mod point;
mod rect;
mod size;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
