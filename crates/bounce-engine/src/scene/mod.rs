//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - keep paint order equal to insertion order
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`
//! - define the [`Surface`] seam the animation core paints through

mod cmd;
mod list;
mod surface;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use shapes::DrawStyle;
pub use shapes::oval::OvalCmd;
pub use shapes::pie::{ArcSpan, PieCmd};
pub use shapes::polygon::PolygonCmd;
pub use shapes::rect::RectCmd;
pub use surface::Surface;
