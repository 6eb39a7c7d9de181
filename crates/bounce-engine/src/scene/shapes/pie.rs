use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::DrawStyle;

/// Angular span of a pie slice, in whole degrees.
///
/// Angles follow the usual screen convention for arcs: 0° points along +X and
/// positive extents run counter-clockwise as seen on screen.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct ArcSpan {
    pub start: i32,
    pub extent: i32,
}

impl ArcSpan {
    #[inline]
    pub const fn new(start: i32, extent: i32) -> Self {
        Self { start, extent }
    }
}

/// Pie slice of the ellipse inscribed in `bounds`, closed through its center.
#[derive(Debug, Clone, PartialEq)]
pub struct PieCmd {
    pub bounds: Rect,
    pub span: ArcSpan,
    pub style: DrawStyle,
    pub color: Color,
}

impl PieCmd {
    #[inline]
    pub fn new(bounds: Rect, span: ArcSpan, style: DrawStyle, color: Color) -> Self {
        Self { bounds, span, style, color }
    }
}

impl DrawList {
    /// Records a pie slice draw command.
    #[inline]
    pub fn push_pie(&mut self, bounds: Rect, span: ArcSpan, style: DrawStyle, color: Color) {
        self.push(DrawCmd::Pie(PieCmd::new(bounds, span, style, color)));
    }
}
