//! Headless bounce session.
//!
//! Drives a canvas the way the toolbar and mouse of a desktop shell would:
//! places one shape of every kind, lets them run, edits the selection, changes
//! speed and finally clears the canvas from the context menu. Each frame is
//! rendered into a draw list and summarized in the log (`RUST_LOG=debug`).

mod config;
mod stats;

use std::sync::Arc;
use std::thread;

use anyhow::{Context, Result};
use bounce_anim::{
    Animator,
    AnimatorConfig,
    Canvas,
    Dimension,
    PathKind,
    PointerAction,
    ShapeKind,
    SharedCanvas,
};
use bounce_engine::coords::Point;
use bounce_engine::input::{InputEvent, InputFrame, InputState, MouseButton, MouseButtonState};
use bounce_engine::logging::{LoggingConfig, init_logging};
use bounce_engine::paint::Color;
use parking_lot::Mutex;

use config::StudioConfig;
use stats::RecordingSink;

fn main() -> Result<()> {
    let config = StudioConfig::from_env().context("invalid studio configuration")?;
    init_logging(LoggingConfig {
        filter: config.log_filter.clone(),
        ..LoggingConfig::default()
    });
    log::info!(
        "bounce studio: {}x{} canvas, {:?} per frame",
        config.margin.width,
        config.margin.height,
        config.delay
    );

    let canvas: SharedCanvas = Arc::new(Mutex::new(Canvas::new(config.margin)));
    let (sink, latest) = RecordingSink::new();
    let mut animator = Animator::with_config(
        Arc::clone(&canvas),
        sink,
        AnimatorConfig {
            delay: config.delay,
            ..AnimatorConfig::default()
        },
    );
    let mut pointer = Pointer::new(Arc::clone(&canvas));

    // ── place shapes while running ────────────────────────────────────────
    animator.start(config.delay).context("could not start the animation")?;

    for (i, kind) in ShapeKind::ALL.into_iter().enumerate() {
        let path = PathKind::ALL[i % PathKind::ALL.len()];
        {
            let mut c = canvas.lock();
            c.set_default_shape_kind(kind);
            c.set_default_path_kind(path);
        }
        pointer.click(MouseButton::Left, Point::new(60 + 100 * i as i32, 80));
    }
    thread::sleep(config.run_for);

    // ── edit the selection while stopped ──────────────────────────────────
    animator.stop();

    let targets: Vec<Point> = canvas
        .lock()
        .shapes()
        .iter()
        .take(2)
        .map(|s| s.bounds().center())
        .collect();
    for at in targets {
        pointer.click(MouseButton::Left, at);
    }
    {
        let c = canvas.lock();
        let selected: Vec<String> = c.selected().map(ToString::to_string).collect();
        log::info!("selected {}", selected.join(" "));
    }

    {
        let mut c = canvas.lock();
        c.set_default_path_kind(PathKind::Flying);
        c.set_default_fill(config.fill);
        c.set_default_border(Color::GREEN);
    }
    for text in ["35", "0", "wide"] {
        match text.parse::<Dimension>() {
            Ok(width) => canvas.lock().set_default_width(width.get())?,
            Err(e) => log::warn!("width field {text:?} reverted: {e}"),
        }
    }

    // ── faster, then retimed mid-run ──────────────────────────────────────
    animator.start(config.delay / 2).context("could not restart the animation")?;
    thread::sleep(config.run_for);
    animator.set_delay(config.delay * 2);
    thread::sleep(config.run_for);

    let stats = *latest.lock();
    log::info!(
        "frame {}: {} shapes drawn with {} commands",
        stats.frame_index,
        stats.shapes,
        stats.total()
    );

    // ── clear from the context menu ───────────────────────────────────────
    pointer.click(MouseButton::Right, Point::new(5, 490));
    thread::sleep(config.delay * 3);
    animator.stop();

    let stats = *latest.lock();
    log::info!("after clear: {} shapes, {} draw commands", stats.shapes, stats.total());
    Ok(())
}

/// Synthesizes press/release pairs and feeds the detected clicks to the canvas.
struct Pointer {
    canvas: SharedCanvas,
    state: InputState,
    frame: InputFrame,
}

impl Pointer {
    fn new(canvas: SharedCanvas) -> Self {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::Focused(true));
        Self { canvas, state, frame }
    }

    fn click(&mut self, button: MouseButton, at: Point) {
        let (x, y) = (at.x as f32, at.y as f32);
        self.frame.clear();
        for state in [MouseButtonState::Pressed, MouseButtonState::Released] {
            self.state.apply_event(&mut self.frame, InputEvent::button(button, state, x, y));
        }

        let mut canvas = self.canvas.lock();
        for action in canvas.apply_input(&self.frame) {
            match action {
                PointerAction::Click(outcome) => log::debug!("click at {at:?}: {outcome:?}"),
                PointerAction::ContextMenu(p) => {
                    log::info!("context menu at {p:?}: clear all");
                    canvas.clear();
                }
            }
        }
    }
}
