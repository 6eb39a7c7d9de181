use bounce_engine::coords::{Point, Rect};
use bounce_engine::scene::{ArcSpan, DrawStyle, Surface};

use super::circle::ellipse_contains;
use super::{Outline, Palette};

/// Degrees the jaw moves per frame.
const JAW_STEP: i32 = 5;
/// Half-angle of the mouth when fully open.
const JAW_OPEN: i32 = 45;

/// Which way the jaw is currently moving.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum MouthState {
    #[default]
    Closing,
    Opening,
}

/// Pie slice whose mouth oscillates between fully shut and 90° wide.
///
/// The mouth is animated by painting, not by the motion path: every paint
/// draws the current angles and then moves the jaw one step.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PacMan {
    start: i32,
    extent: i32,
    state: MouthState,
}

impl Default for PacMan {
    fn default() -> Self {
        Self {
            start: JAW_OPEN,
            extent: 360 - 2 * JAW_OPEN,
            state: MouthState::Closing,
        }
    }
}

impl PacMan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Angles the next paint will use.
    #[inline]
    pub fn span(&self) -> ArcSpan {
        ArcSpan::new(self.start, self.extent)
    }

    #[inline]
    pub fn mouth_state(&self) -> MouthState {
        self.state
    }

    fn move_jaw(&mut self) {
        match self.state {
            MouthState::Closing => {
                self.start -= JAW_STEP;
                self.extent += 2 * JAW_STEP;
            }
            MouthState::Opening => {
                self.start += JAW_STEP;
                self.extent -= 2 * JAW_STEP;
            }
        }
        if self.start == 0 {
            self.state = MouthState::Opening;
        }
        if self.start > JAW_OPEN {
            self.state = MouthState::Closing;
        }
    }
}

impl Outline for PacMan {
    fn paint(&mut self, bounds: Rect, palette: Palette, surface: &mut dyn Surface) {
        let span = self.span();
        surface.pie(bounds, span, DrawStyle::Fill, palette.fill);
        surface.pie(bounds, span, DrawStyle::Stroke, palette.border);
        self.move_jaw();
    }

    /// Hit-tests against the whole bounding ellipse, mouth included.
    fn contains(&self, bounds: Rect, p: Point) -> bool {
        ellipse_contains(bounds, p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounce_engine::paint::Color;
    use bounce_engine::scene::{DrawCmd, DrawList};

    fn painted_starts(pac: &mut PacMan, frames: usize) -> Vec<i32> {
        let mut list = DrawList::new();
        let palette = Palette::new(Color::BLUE, Color::BLACK);
        (0..frames)
            .map(|_| {
                list.clear();
                pac.paint(Rect::new(0, 0, 20, 20), palette, &mut list);
                match list.commands().next() {
                    Some(DrawCmd::Pie(pie)) => pie.span.start,
                    other => panic!("expected pie, got {other:?}"),
                }
            })
            .collect()
    }

    #[test]
    fn jaw_closes_reopens_and_overshoots_once() {
        let mut pac = PacMan::new();
        let starts = painted_starts(&mut pac, 22);
        assert_eq!(
            starts,
            vec![
                45, 40, 35, 30, 25, 20, 15, 10, 5, 0,
                5, 10, 15, 20, 25, 30, 35, 40, 45, 50,
                45, 40,
            ]
        );
    }

    #[test]
    fn extent_always_complements_the_mouth() {
        let mut pac = PacMan::new();
        let mut list = DrawList::new();
        let palette = Palette::new(Color::BLUE, Color::BLACK);
        for _ in 0..50 {
            let span = pac.span();
            assert_eq!(span.extent, 360 - 2 * span.start);
            pac.paint(Rect::new(0, 0, 10, 10), palette, &mut list);
        }
    }

    #[test]
    fn state_flips_at_shut_and_past_open() {
        let mut pac = PacMan::new();
        let mut list = DrawList::new();
        let palette = Palette::new(Color::BLUE, Color::BLACK);

        for _ in 0..9 {
            pac.paint(Rect::new(0, 0, 10, 10), palette, &mut list);
        }
        assert_eq!(pac.span().start, 0);
        assert_eq!(pac.mouth_state(), MouthState::Opening);

        for _ in 0..10 {
            pac.paint(Rect::new(0, 0, 10, 10), palette, &mut list);
        }
        assert_eq!(pac.span().start, 50);
        assert_eq!(pac.mouth_state(), MouthState::Closing);
    }

    #[test]
    fn mouth_area_still_counts_as_a_hit() {
        let pac = PacMan::new();
        let bounds = Rect::new(0, 0, 40, 40);
        // Inside the open mouth, right of center.
        assert!(pac.contains(bounds, Point::new(35, 20)));
        assert!(!pac.contains(bounds, Point::new(0, 0)));
    }
}
