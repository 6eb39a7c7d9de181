use crate::coords::Point;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::DrawStyle;

/// Closed polygon; the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Point>,
    pub style: DrawStyle,
    pub color: Color,
}

impl PolygonCmd {
    #[inline]
    pub fn new(points: Vec<Point>, style: DrawStyle, color: Color) -> Self {
        Self { points, style, color }
    }
}

impl DrawList {
    /// Records a polygon draw command.
    ///
    /// Polygons with fewer than three vertices enclose nothing and are dropped.
    #[inline]
    pub fn push_polygon(&mut self, points: &[Point], style: DrawStyle, color: Color) {
        if points.len() < 3 {
            return;
        }
        self.push(DrawCmd::Polygon(PolygonCmd::new(points.to_vec(), style, color)));
    }
}
