use bounce_engine::coords::Point;
use rand::Rng;

use super::{Body, Motion};

/// Largest per-axis speed a randomized boundary path may get.
const MAX_SPEED: i32 = 10;

/// Direction of travel, named by its heading in degrees.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Heading {
    /// 0°
    #[default]
    Down,
    /// 90°
    Right,
    /// 180°
    Up,
    /// 270°
    Left,
}

impl Heading {
    #[inline]
    pub const fn degrees(self) -> u16 {
        match self {
            Heading::Down => 0,
            Heading::Right => 90,
            Heading::Up => 180,
            Heading::Left => 270,
        }
    }

    /// Next heading in the 0 → 90 → 180 → 270 → 0 cycle.
    #[inline]
    pub const fn turn(self) -> Self {
        match self {
            Heading::Down => Heading::Right,
            Heading::Right => Heading::Up,
            Heading::Up => Heading::Left,
            Heading::Left => Heading::Down,
        }
    }
}

/// Runs around the inside of the margin, one edge at a time.
///
/// Turns only when the current axis overshoots its limit; the position is
/// then pulled back inside the margin.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    speed: Point,
    heading: Heading,
}

impl Boundary {
    /// Boundary path with fixed per-axis speeds (pixels per step).
    pub fn new(speed_x: i32, speed_y: i32) -> Self {
        Self {
            speed: Point::new(speed_x, speed_y),
            heading: Heading::Down,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen_range(1..=MAX_SPEED), rng.gen_range(1..=MAX_SPEED))
    }

    #[inline]
    pub fn speed(&self) -> Point {
        self.speed
    }

    #[inline]
    pub fn heading(&self) -> Heading {
        self.heading
    }
}

impl Motion for Boundary {
    fn advance(&mut self, body: &mut Body) {
        let max_x = body.margin.width - body.size.width;
        let max_y = body.margin.height - body.size.height;
        let p = &mut body.origin;

        match self.heading {
            Heading::Down => {
                p.y += self.speed.y;
                if p.y > max_y {
                    p.y = max_y - 1;
                    self.heading = self.heading.turn();
                }
            }
            Heading::Right => {
                p.x += self.speed.x;
                if p.x > max_x {
                    p.x = max_x - 1;
                    self.heading = self.heading.turn();
                }
            }
            Heading::Up => {
                p.y -= self.speed.y;
                if p.y < 0 {
                    p.y = 0;
                    self.heading = self.heading.turn();
                }
            }
            Heading::Left => {
                p.x -= self.speed.x;
                if p.x < 0 {
                    p.x = 0;
                    self.heading = self.heading.turn();
                }
            }
        }
    }
}
