use crate::coords::{Point, Rect};
use crate::paint::Color;

use super::{ArcSpan, DrawList, DrawStyle};

/// Drawing target handed to shapes once per frame.
///
/// The animation core only ever paints through this trait; the rendering
/// collaborator decides whether commands are recorded, rasterized or sent to
/// a GPU. [`DrawList`] is the recording implementation.
pub trait Surface {
    fn rect(&mut self, rect: Rect, style: DrawStyle, color: Color);

    fn oval(&mut self, bounds: Rect, style: DrawStyle, color: Color);

    fn pie(&mut self, bounds: Rect, span: ArcSpan, style: DrawStyle, color: Color);

    fn polygon(&mut self, points: &[Point], style: DrawStyle, color: Color);

    #[inline]
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.rect(rect, DrawStyle::Fill, color);
    }

    #[inline]
    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.rect(rect, DrawStyle::Stroke, color);
    }

    #[inline]
    fn fill_oval(&mut self, bounds: Rect, color: Color) {
        self.oval(bounds, DrawStyle::Fill, color);
    }

    #[inline]
    fn stroke_oval(&mut self, bounds: Rect, color: Color) {
        self.oval(bounds, DrawStyle::Stroke, color);
    }

    #[inline]
    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.polygon(points, DrawStyle::Fill, color);
    }
}

impl Surface for DrawList {
    #[inline]
    fn rect(&mut self, rect: Rect, style: DrawStyle, color: Color) {
        self.push_rect(rect, style, color);
    }

    #[inline]
    fn oval(&mut self, bounds: Rect, style: DrawStyle, color: Color) {
        self.push_oval(bounds, style, color);
    }

    #[inline]
    fn pie(&mut self, bounds: Rect, span: ArcSpan, style: DrawStyle, color: Color) {
        self.push_pie(bounds, span, style, color);
    }

    #[inline]
    fn polygon(&mut self, points: &[Point], style: DrawStyle, color: Color) {
        self.push_polygon(points, style, color);
    }
}
