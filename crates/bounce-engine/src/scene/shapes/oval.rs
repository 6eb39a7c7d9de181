use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::DrawStyle;

/// Ellipse inscribed in `bounds`.
#[derive(Debug, Clone, PartialEq)]
pub struct OvalCmd {
    pub bounds: Rect,
    pub style: DrawStyle,
    pub color: Color,
}

impl OvalCmd {
    #[inline]
    pub fn new(bounds: Rect, style: DrawStyle, color: Color) -> Self {
        Self { bounds, style, color }
    }
}

impl DrawList {
    /// Records an ellipse draw command.
    #[inline]
    pub fn push_oval(&mut self, bounds: Rect, style: DrawStyle, color: Color) {
        self.push(DrawCmd::Oval(OvalCmd::new(bounds, style, color)));
    }
}
