use rand::Rng;

use super::{Body, Motion};

/// Pixels travelled along the main axis per step.
const DRIFT: i32 = 5;
/// Phase increment per step, in radians.
const PHASE_STEP: f64 = 0.5;
/// Upper bound (exclusive) of a randomized sway amplitude.
const MAX_AMPLITUDE: f64 = 20.0;

/// Sine oscillation on the cross axis of a drifting path.
///
/// The amplitude is fixed at construction; the phase starts at 0 and grows by
/// a constant step on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct Sway {
    amplitude: f64,
    phase: f64,
    step: f64,
}

impl Sway {
    pub fn new(amplitude: f64) -> Self {
        Self { amplitude, phase: 0.0, step: PHASE_STEP }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen_range(0.0..MAX_AMPLITUDE))
    }

    #[inline]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Advances the phase and returns `coord` displaced by the new sine offset,
    /// rounded half up.
    #[inline]
    fn apply(&mut self, coord: i32) -> i32 {
        self.phase += self.step;
        (coord as f64 + self.amplitude * self.phase.sin() + 0.5).floor() as i32
    }
}

/// Drifts down, swaying horizontally; wraps from below the margin to the top.
#[derive(Debug, Clone, PartialEq)]
pub struct Falling {
    sway: Sway,
}

impl Falling {
    pub fn new(sway: Sway) -> Self {
        Self { sway }
    }

    pub fn sway(&self) -> &Sway {
        &self.sway
    }
}

impl Motion for Falling {
    fn advance(&mut self, body: &mut Body) {
        let p = &mut body.origin;
        p.x = self.sway.apply(p.x);
        p.y += DRIFT;
        if p.y > body.margin.height {
            p.y = 0;
        }
    }
}

/// Drifts up, swaying horizontally; once fully above the top edge it
/// reappears at the bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct Flying {
    sway: Sway,
}

impl Flying {
    pub fn new(sway: Sway) -> Self {
        Self { sway }
    }

    pub fn sway(&self) -> &Sway {
        &self.sway
    }
}

impl Motion for Flying {
    fn advance(&mut self, body: &mut Body) {
        let p = &mut body.origin;
        p.x = self.sway.apply(p.x);
        p.y -= DRIFT;
        if p.y < -body.size.height {
            p.y = body.margin.height;
        }
    }
}

/// Drifts right, swaying vertically; past the right edge it restarts just
/// outside the left edge.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingSideways {
    sway: Sway,
}

impl FloatingSideways {
    pub fn new(sway: Sway) -> Self {
        Self { sway }
    }

    pub fn sway(&self) -> &Sway {
        &self.sway
    }
}

impl Motion for FloatingSideways {
    fn advance(&mut self, body: &mut Body) {
        let p = &mut body.origin;
        p.y = self.sway.apply(p.y);
        p.x += DRIFT;
        if p.x > body.margin.width {
            p.x = -body.size.width;
        }
    }
}

/// Drifts left, swaying vertically; once fully past the left edge it
/// reappears at the right edge.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingSidewaysOpposite {
    sway: Sway,
}

impl FloatingSidewaysOpposite {
    pub fn new(sway: Sway) -> Self {
        Self { sway }
    }

    pub fn sway(&self) -> &Sway {
        &self.sway
    }
}

impl Motion for FloatingSidewaysOpposite {
    fn advance(&mut self, body: &mut Body) {
        let p = &mut body.origin;
        p.y = self.sway.apply(p.y);
        p.x -= DRIFT;
        if p.x < -body.size.width {
            p.x = body.margin.width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounce_engine::coords::{Point, Size};

    fn body(x: i32, y: i32) -> Body {
        Body::new(Point::new(x, y), Size::new(20, 30), Size::new(300, 200))
    }

    fn still() -> Sway {
        Sway::new(0.0)
    }

    // ── sway ──────────────────────────────────────────────────────────────

    #[test]
    fn sway_offset_follows_sine_of_accumulated_phase() {
        let mut sway = Sway::new(10.0);
        let first = sway.apply(100);
        let second = sway.apply(first);

        let expected_first = (100.0 + 10.0 * 0.5f64.sin() + 0.5).floor() as i32;
        let expected_second = (expected_first as f64 + 10.0 * 1.0f64.sin() + 0.5).floor() as i32;
        assert_eq!(first, expected_first);
        assert_eq!(second, expected_second);
        assert!((sway.phase() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn sway_displacement_is_bounded_by_amplitude() {
        let mut sway = Sway::new(19.9);
        let mut x = 0;
        for _ in 0..100 {
            let next = sway.apply(x);
            assert!((next - x).abs() <= 20);
            x = next;
        }
    }

    // ── falling ───────────────────────────────────────────────────────────

    #[test]
    fn falling_moves_down_by_drift() {
        let mut path = Falling::new(still());
        let mut b = body(40, 50);
        path.advance(&mut b);
        assert_eq!(b.origin, Point::new(40, 55));
    }

    #[test]
    fn falling_wraps_only_past_the_bottom() {
        let mut path = Falling::new(still());

        let mut b = body(40, 195);
        path.advance(&mut b);
        assert_eq!(b.origin.y, 200, "reaching the margin is not past it");

        path.advance(&mut b);
        assert_eq!(b.origin.y, 0);
    }

    // ── flying ────────────────────────────────────────────────────────────

    #[test]
    fn flying_wraps_to_bottom_once_fully_above() {
        let mut path = Flying::new(still());

        let mut b = body(40, -25);
        path.advance(&mut b);
        assert_eq!(b.origin.y, -30, "exactly -height does not wrap");

        path.advance(&mut b);
        assert_eq!(b.origin.y, 200);
    }

    // ── floating sideways ─────────────────────────────────────────────────

    #[test]
    fn floating_sideways_wraps_to_just_left_of_the_canvas() {
        let mut path = FloatingSideways::new(still());

        let mut b = body(295, 60);
        path.advance(&mut b);
        assert_eq!(b.origin, Point::new(300, 60));

        path.advance(&mut b);
        assert_eq!(b.origin, Point::new(-20, 60));
    }

    #[test]
    fn floating_sideways_opposite_wraps_to_right_edge() {
        let mut path = FloatingSidewaysOpposite::new(still());

        let mut b = body(-15, 60);
        path.advance(&mut b);
        assert_eq!(b.origin.x, -20);

        path.advance(&mut b);
        assert_eq!(b.origin.x, 300);
    }

    #[test]
    fn sideways_paths_sway_vertically() {
        let mut path = FloatingSideways::new(Sway::new(8.0));
        let mut b = body(0, 100);
        path.advance(&mut b);
        let expected_y = (100.0 + 8.0 * 0.5f64.sin() + 0.5).floor() as i32;
        assert_eq!(b.origin, Point::new(5, expected_y));
    }
}
