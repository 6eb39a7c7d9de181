use std::sync::Arc;

use bounce_anim::{Canvas, FrameSink};
use bounce_engine::scene::{DrawCmd, DrawList};
use bounce_engine::time::FrameTime;
use parking_lot::Mutex;

/// Draw-command tally of one rendered frame.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct FrameStats {
    pub frame_index: u64,
    pub shapes: usize,
    pub rects: usize,
    pub ovals: usize,
    pub pies: usize,
    pub polygons: usize,
}

impl FrameStats {
    pub fn from_list(list: &DrawList, shapes: usize, frame_index: u64) -> Self {
        let mut stats = Self { frame_index, shapes, ..Self::default() };
        for cmd in list.commands() {
            match cmd {
                DrawCmd::Rect(_) => stats.rects += 1,
                DrawCmd::Oval(_) => stats.ovals += 1,
                DrawCmd::Pie(_) => stats.pies += 1,
                DrawCmd::Polygon(_) => stats.polygons += 1,
            }
        }
        stats
    }

    pub fn total(&self) -> usize {
        self.rects + self.ovals + self.pies + self.polygons
    }
}

/// Frame sink standing in for a window: renders each frame into a reused
/// [`DrawList`] and keeps the latest tally where the session can read it.
pub struct RecordingSink {
    list: DrawList,
    latest: Arc<Mutex<FrameStats>>,
}

impl RecordingSink {
    pub fn new() -> (Self, Arc<Mutex<FrameStats>>) {
        let latest = Arc::new(Mutex::new(FrameStats::default()));
        let sink = Self { list: DrawList::new(), latest: Arc::clone(&latest) };
        (sink, latest)
    }
}

impl FrameSink for RecordingSink {
    fn on_frame(&mut self, canvas: &mut Canvas, time: FrameTime) {
        self.list.clear();
        canvas.render_all(&mut self.list);

        let stats = FrameStats::from_list(&self.list, canvas.len(), time.frame_index);
        if time.frame_index % 10 == 0 {
            log::debug!(
                "frame {}: {} shapes, {} draw commands",
                stats.frame_index,
                stats.shapes,
                stats.total()
            );
        }
        *self.latest.lock() = stats;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounce_anim::ShapeKind;
    use bounce_engine::coords::{Point, Size};
    use bounce_engine::time::FrameClock;

    #[test]
    fn tally_counts_every_command_kind() {
        let mut canvas = Canvas::with_seed(Size::new(400, 400), 3);
        for (i, kind) in ShapeKind::ALL.into_iter().enumerate() {
            canvas.set_default_shape_kind(kind);
            canvas.create_shape_at(Point::new(i as i32 * 60, 10));
        }

        let (mut sink, latest) = RecordingSink::new();
        let mut clock = FrameClock::new();
        sink.on_frame(&mut canvas, clock.tick());

        let stats = *latest.lock();
        assert_eq!(stats.shapes, 4);
        // rectangle: fill + stroke
        assert_eq!(stats.rects, 2);
        // circle: fill + stroke
        assert_eq!(stats.ovals, 2);
        // pac-man: fill + stroke
        assert_eq!(stats.pies, 2);
        // bow tie: wings + knot
        assert_eq!(stats.polygons, 2);
    }

    #[test]
    fn selection_handles_show_up_as_rects() {
        let mut canvas = Canvas::with_seed(Size::new(400, 400), 3);
        canvas.handle_click(Point::new(50, 50));
        canvas.handle_click(Point::new(55, 55));

        let (mut sink, latest) = RecordingSink::new();
        sink.on_frame(&mut canvas, FrameClock::new().tick());
        assert_eq!(latest.lock().rects, 4);
    }
}
