//! Animation driver.
//!
//! Owns a worker thread that, once per delay, locks the shared canvas, steps
//! every shape and hands the canvas to a [`FrameSink`] for rendering. Pointer
//! handling on other threads takes the same lock, so a tick and an input event
//! never interleave.
//!
//! The inter-frame wait is a `recv_timeout` on the stop channel: stopping wakes
//! the worker at once, and `stop()` joins it before returning.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use bounce_engine::time::{FrameClock, FrameTime};
use parking_lot::Mutex;

use crate::canvas::Canvas;
use crate::error::AnimatorError;

/// Canvas shared between the driver and input handlers.
pub type SharedCanvas = Arc<Mutex<Canvas>>;

/// Shortest accepted frame delay. Zero would spin.
pub const MIN_DELAY: Duration = Duration::from_millis(1);
/// Default ceiling on the frame delay (slowest speed setting).
pub const MAX_DELAY: Duration = Duration::from_millis(200);

/// Receives the canvas after every step, still under the lock.
pub trait FrameSink: Send {
    fn on_frame(&mut self, canvas: &mut Canvas, time: FrameTime);
}

impl<F> FrameSink for F
where
    F: FnMut(&mut Canvas, FrameTime) + Send,
{
    fn on_frame(&mut self, canvas: &mut Canvas, time: FrameTime) {
        self(canvas, time)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AnimatorConfig {
    pub delay: Duration,
    /// Upper bound every requested delay is clamped to. Never below [`MIN_DELAY`].
    pub max_delay: Duration,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(30),
            max_delay: MAX_DELAY,
        }
    }
}

struct Worker {
    stop_tx: mpsc::Sender<()>,
    handle: JoinHandle<()>,
}

/// Start/stop control over the frame loop of one canvas.
pub struct Animator {
    canvas: SharedCanvas,
    sink: Arc<Mutex<Box<dyn FrameSink>>>,
    delay_ms: Arc<AtomicU64>,
    max_delay: Duration,
    worker: Option<Worker>,
}

impl Animator {
    pub fn new(canvas: SharedCanvas, sink: impl FrameSink + 'static) -> Self {
        Self::with_config(canvas, sink, AnimatorConfig::default())
    }

    pub fn with_config(
        canvas: SharedCanvas,
        sink: impl FrameSink + 'static,
        config: AnimatorConfig,
    ) -> Self {
        let max_delay = config.max_delay.max(MIN_DELAY);
        Self {
            canvas,
            sink: Arc::new(Mutex::new(Box::new(sink))),
            delay_ms: Arc::new(AtomicU64::new(clamp_ms(config.delay, max_delay))),
            max_delay,
            worker: None,
        }
    }

    #[inline]
    pub fn canvas(&self) -> &SharedCanvas {
        &self.canvas
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Current frame delay, after clamping.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms.load(Ordering::Relaxed))
    }

    /// Starts ticking every `delay`. On a running animator this only retimes it.
    pub fn start(&mut self, delay: Duration) -> Result<(), AnimatorError> {
        self.set_delay(delay);
        if self.worker.is_some() {
            return Ok(());
        }

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let canvas = Arc::clone(&self.canvas);
        let sink = Arc::clone(&self.sink);
        let delay_ms = Arc::clone(&self.delay_ms);

        let handle = thread::Builder::new()
            .name("bounce-animator".into())
            .spawn(move || {
                let mut clock = FrameClock::new();
                loop {
                    {
                        let mut canvas = canvas.lock();
                        canvas.step();
                        let time = clock.tick();
                        sink.lock().on_frame(&mut canvas, time);
                        log::trace!("frame {} dt={:?}", time.frame_index, time.dt);
                    }

                    let wait = Duration::from_millis(delay_ms.load(Ordering::Relaxed));
                    match stop_rx.recv_timeout(wait) {
                        Err(RecvTimeoutError::Timeout) => continue,
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                log::debug!("animator loop exited after {} frames", clock.frames());
            })
            .map_err(AnimatorError::Spawn)?;

        log::info!("animation started ({:?} per frame)", self.delay());
        self.worker = Some(Worker { stop_tx, handle });
        Ok(())
    }

    /// Stops the loop and waits for the worker. No tick runs after this
    /// returns. Calling it while stopped does nothing.
    pub fn stop(&mut self) {
        let Some(Worker { stop_tx, handle }) = self.worker.take() else {
            return;
        };

        // A send error means the worker is already gone.
        let _ = stop_tx.send(());
        if handle.join().is_err() {
            log::error!("animator thread panicked");
        }
        log::info!("animation stopped");
    }

    /// Records a new delay, clamped to [`MIN_DELAY`] and the configured
    /// `max_delay`. A running loop picks it up at its next wait.
    pub fn set_delay(&self, delay: Duration) {
        let ms = clamp_ms(delay, self.max_delay);
        let prev = self.delay_ms.swap(ms, Ordering::Relaxed);
        if prev != ms {
            log::debug!("frame delay {prev} ms -> {ms} ms");
        }
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.stop();
    }
}

fn clamp_ms(delay: Duration, max: Duration) -> u64 {
    delay.clamp(MIN_DELAY, max).as_millis() as u64
}
