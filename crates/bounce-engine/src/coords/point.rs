use core::ops::Sub;

/// Integer 2D point in canvas pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rounds a logical-pixel position to the nearest pixel (half rounds up).
    #[inline]
    pub fn from_logical(x: f32, y: f32) -> Self {
        Self::new((x + 0.5).floor() as i32, (y + 0.5).floor() as i32)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}
