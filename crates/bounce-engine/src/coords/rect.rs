use super::{Point, Size};

/// Axis-aligned rectangle in canvas pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Square of side `side` centered on `center`.
    #[inline]
    pub const fn centered(center: Point, side: i32) -> Self {
        Self::new(center.x - side / 2, center.y - side / 2, side, side)
    }

    #[inline]
    pub fn min(self) -> Point {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Point {
        Point::new(self.origin.x + self.size.width, self.origin.y + self.size.height)
    }

    #[inline]
    pub fn center(self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2,
            self.origin.y + self.size.height / 2,
        )
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.width <= 0 || self.size.height <= 0
    }

    /// Corners in order: top-left, top-right, bottom-right, bottom-left.
    #[inline]
    pub fn corners(self) -> [Point; 4] {
        let Point { x: x0, y: y0 } = self.min();
        let Point { x: x1, y: y1 } = self.max();
        [
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ]
    }

    /// Closed containment with `slack` extra pixels accepted past the far edges.
    ///
    /// `slack = 0` accepts `[min, max]` on both axes.
    #[inline]
    pub fn contains_with_slack(self, p: Point, slack: i32) -> bool {
        let max = self.max();
        self.origin.x <= p.x
            && p.x <= max.x + slack
            && self.origin.y <= p.y
            && p.y <= max.y + slack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: i32, y: i32, w: i32, h: i32) -> Rect { Rect::new(x, y, w, h) }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_with_slack_accepts_far_edge_tolerance() {
        let rect = r(10, 10, 20, 20);
        assert!(rect.contains_with_slack(Point::new(30, 30), 1));
        assert!(rect.contains_with_slack(Point::new(31, 31), 1));
        assert!(!rect.contains_with_slack(Point::new(32, 10), 1));
        assert!(!rect.contains_with_slack(Point::new(9, 10), 1));
    }

    // ── corners / center ──────────────────────────────────────────────────

    #[test]
    fn corners_run_clockwise_from_top_left() {
        assert_eq!(
            r(1, 2, 10, 20).corners(),
            [Point::new(1, 2), Point::new(11, 2), Point::new(11, 22), Point::new(1, 22)]
        );
    }

    #[test]
    fn centered_square_spans_both_sides() {
        assert_eq!(Rect::centered(Point::new(10, 10), 4), r(8, 8, 4, 4));
        assert_eq!(r(0, 0, 10, 20).center(), Point::new(5, 10));
    }

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0, 0, 0, 5).is_empty());
        assert!(!r(0, 0, 1, 1).is_empty());
    }
}
