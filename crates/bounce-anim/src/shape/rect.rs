use bounce_engine::coords::{Point, Rect};
use bounce_engine::scene::Surface;

use super::{Outline, Palette};

/// Extra pixels past the right/bottom edge that still count as a hit.
const HIT_SLACK: i32 = 1;

/// Axis-aligned rectangle filling the bounding box.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Rectangle;

impl Outline for Rectangle {
    fn paint(&mut self, bounds: Rect, palette: Palette, surface: &mut dyn Surface) {
        surface.fill_rect(bounds, palette.fill);
        surface.stroke_rect(bounds, palette.border);
    }

    fn contains(&self, bounds: Rect, p: Point) -> bool {
        bounds.contains_with_slack(p, HIT_SLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn far_corner_and_one_pixel_slack_are_hits() {
        let bounds = Rect::new(10, 20, 30, 40);
        assert!(Rectangle.contains(bounds, Point::new(10, 20)));
        assert!(Rectangle.contains(bounds, Point::new(40, 60)));
        assert!(Rectangle.contains(bounds, Point::new(41, 61)));
    }

    #[test]
    fn two_pixels_past_the_edge_is_a_miss() {
        let bounds = Rect::new(10, 20, 30, 40);
        assert!(!Rectangle.contains(bounds, Point::new(42, 20)));
        assert!(!Rectangle.contains(bounds, Point::new(9, 20)));
        assert!(!Rectangle.contains(bounds, Point::new(10, 19)));
    }
}
