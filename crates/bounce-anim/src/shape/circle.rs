use bounce_engine::coords::{Point, Rect};
use bounce_engine::scene::Surface;

use super::{Outline, Palette};

/// Ellipse inscribed in the shape's bounding box.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Circle;

impl Outline for Circle {
    fn paint(&mut self, bounds: Rect, palette: Palette, surface: &mut dyn Surface) {
        surface.fill_oval(bounds, palette.fill);
        surface.stroke_oval(bounds, palette.border);
    }

    fn contains(&self, bounds: Rect, p: Point) -> bool {
        ellipse_contains(bounds, p)
    }
}

/// Strict interior test against the ellipse inscribed in `bounds`.
///
/// Works in center-relative coordinates normalized by the half axes, so the
/// boundary itself is excluded.
pub(crate) fn ellipse_contains(bounds: Rect, p: Point) -> bool {
    if bounds.is_empty() {
        return false;
    }
    let min = bounds.min();
    let max = bounds.max();
    let dx = f64::from(2 * p.x - min.x - max.x) / f64::from(bounds.size.width);
    let dy = f64::from(2 * p.y - min.y - max.y) / f64::from(bounds.size.height);
    dx * dx + dy * dy < 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounce_engine::paint::Color;
    use bounce_engine::scene::{DrawCmd, DrawList, DrawStyle};

    #[test]
    fn center_is_inside_corners_are_not() {
        let bounds = Rect::new(10, 10, 20, 20);
        assert!(ellipse_contains(bounds, Point::new(20, 20)));
        for corner in bounds.corners() {
            assert!(!ellipse_contains(bounds, corner), "corner {corner:?}");
        }
    }

    #[test]
    fn edge_midpoints_are_excluded_but_just_inside_is_not() {
        let bounds = Rect::new(0, 0, 20, 10);
        assert!(!ellipse_contains(bounds, Point::new(0, 5)));
        assert!(ellipse_contains(bounds, Point::new(1, 5)));
        assert!(ellipse_contains(bounds, Point::new(10, 9)));
        assert!(!ellipse_contains(bounds, Point::new(10, 10)));
    }

    #[test]
    fn paints_fill_then_outline() {
        let mut list = DrawList::new();
        let bounds = Rect::new(0, 0, 8, 8);
        let palette = Palette::new(Color::BLUE, Color::BLACK);
        Circle.paint(bounds, palette, &mut list);

        let cmds: Vec<_> = list.commands().cloned().collect();
        assert_eq!(cmds.len(), 2);
        let DrawCmd::Oval(fill) = &cmds[0] else { panic!("expected oval, got {cmds:?}") };
        assert_eq!((fill.bounds, fill.style, fill.color), (bounds, DrawStyle::Fill, Color::BLUE));
        let DrawCmd::Oval(stroke) = &cmds[1] else { panic!("expected oval, got {cmds:?}") };
        assert_eq!((stroke.style, stroke.color), (DrawStyle::Stroke, Color::BLACK));
    }
}
