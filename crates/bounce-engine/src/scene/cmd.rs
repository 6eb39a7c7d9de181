use crate::scene::shapes::oval::OvalCmd;
use crate::scene::shapes::pie::PieCmd;
use crate::scene::shapes::polygon::PolygonCmd;
use crate::scene::shapes::rect::RectCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - route the matching [`Surface`](crate::scene::Surface) method to it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Oval(OvalCmd),
    Pie(PieCmd),
    Polygon(PolygonCmd),
}

impl DrawCmd {
    /// Short variant name, used in logs and test failure messages.
    pub fn name(&self) -> &'static str {
        match self {
            DrawCmd::Rect(_) => "rect",
            DrawCmd::Oval(_) => "oval",
            DrawCmd::Pie(_) => "pie",
            DrawCmd::Polygon(_) => "polygon",
        }
    }
}
