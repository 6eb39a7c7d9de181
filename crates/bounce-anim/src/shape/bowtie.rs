use bounce_engine::coords::{Point, Rect};
use bounce_engine::scene::Surface;

use super::{Outline, Palette};

/// Two triangles meeting at the middle, with a diamond knot drawn in the
/// border color.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct BowTie;

impl BowTie {
    /// Outer hexagon, clockwise from the top-left corner.
    pub fn wings(bounds: Rect) -> [Point; 6] {
        let Point { x, y } = bounds.origin;
        let w = bounds.size.width;
        let h = bounds.size.height;
        let notch = h / 3;
        let half = w / 2;
        [
            Point::new(x, y),
            Point::new(x + half, y + notch),
            Point::new(x + w, y),
            Point::new(x + w, y + h),
            Point::new(x + half, y + h - notch),
            Point::new(x, y + h),
        ]
    }

    /// Center diamond: left, top, right, bottom.
    pub fn knot(bounds: Rect) -> [Point; 4] {
        let Point { x, y } = bounds.origin;
        let w = bounds.size.width;
        let h = bounds.size.height;
        let quarter = w / 4;
        let third = h / 3;
        let half_w = w / 2;
        let half_h = h / 2;
        [
            Point::new(x + quarter, y + half_h),
            Point::new(x + half_w, y + third),
            Point::new(x + half_w + quarter, y + half_h),
            Point::new(x + half_w, y + h - third),
        ]
    }
}

impl Outline for BowTie {
    fn paint(&mut self, bounds: Rect, palette: Palette, surface: &mut dyn Surface) {
        surface.fill_polygon(&Self::wings(bounds), palette.fill);
        surface.fill_polygon(&Self::knot(bounds), palette.border);
    }

    fn contains(&self, bounds: Rect, p: Point) -> bool {
        polygon_contains(&Self::wings(bounds), p)
    }
}

/// Even-odd crossing test with a ray cast towards +X.
///
/// Left and top edges are inside, right and bottom edges are outside, so
/// adjacent polygons never both claim a boundary pixel.
fn polygon_contains(poly: &[Point], p: Point) -> bool {
    let (px, py) = (f64::from(p.x), f64::from(p.y));
    let mut inside = false;
    let mut j = poly.len().wrapping_sub(1);

    for (i, a) in poly.iter().enumerate() {
        let b = poly[j];
        let (ax, ay) = (f64::from(a.x), f64::from(a.y));
        let (bx, by) = (f64::from(b.x), f64::from(b.y));

        if (ay > py) != (by > py) {
            let cross_x = ax + (py - ay) * (bx - ax) / (by - ay);
            if px < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounce_engine::paint::Color;
    use bounce_engine::scene::{DrawCmd, DrawList};

    const B: Rect = Rect::new(0, 0, 30, 30);

    #[test]
    fn middle_and_wing_tips_are_hits() {
        assert!(BowTie.contains(B, Point::new(15, 15)));
        assert!(BowTie.contains(B, Point::new(2, 15)));
        assert!(BowTie.contains(B, Point::new(28, 15)));
        assert!(BowTie.contains(B, Point::new(1, 2)));
    }

    #[test]
    fn notches_above_and_below_the_knot_are_misses() {
        assert!(!BowTie.contains(B, Point::new(15, 5)));
        assert!(!BowTie.contains(B, Point::new(15, 25)));
        assert!(!BowTie.contains(B, Point::new(31, 15)));
    }

    #[test]
    fn paints_wings_in_fill_and_knot_in_border_color() {
        let mut list = DrawList::new();
        BowTie.paint(B, Palette::new(Color::RED, Color::BLACK), &mut list);

        let polys: Vec<_> = list
            .commands()
            .map(|cmd| match cmd {
                DrawCmd::Polygon(p) => (p.points.len(), p.color),
                other => panic!("expected polygon, got {other:?}"),
            })
            .collect();
        assert_eq!(polys, vec![(6, Color::RED), (4, Color::BLACK)]);
    }

    #[test]
    fn knot_sits_inside_the_wings() {
        let center = B.center();
        for p in BowTie::knot(B) {
            let nudged = Point::new(p.x + (center.x - p.x).signum(), p.y + (center.y - p.y).signum());
            assert!(BowTie.contains(B, nudged), "{nudged:?}");
        }
    }
}
