//! The animated canvas: an ordered set of shapes, the margin they move in and
//! the defaults applied to new shapes.
//!
//! Ordering rules:
//! - shapes are stepped, painted and hit-tested in insertion order
//! - later shapes paint on top of earlier ones
//!
//! The canvas does no locking of its own; see [`crate::animator`] for how it
//! is shared with the animation thread.

mod defaults;

use bounce_engine::coords::{Point, Size};
use bounce_engine::input::InputFrame;
use bounce_engine::paint::Color;
use bounce_engine::scene::Surface;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::CanvasError;
use crate::path::{Body, PathKind};
use crate::shape::{Palette, Shape, ShapeKind};

pub use defaults::{Defaults, Dimension};

/// Result of a primary click on the canvas.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ClickOutcome {
    /// The point hit this many shapes; each had its selection flipped.
    Toggled(usize),
    /// Nothing was hit; a shape was appended at the point.
    Created,
}

/// What a click from the input stream asked for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PointerAction {
    Click(ClickOutcome),
    /// Secondary click: the shell should offer the canvas menu (clear all) here.
    ContextMenu(Point),
}

/// Shapes, margin and defaults of one animation area.
#[derive(Debug)]
pub struct Canvas {
    shapes: Vec<Shape>,
    defaults: Defaults,
    margin: Size,
    rng: StdRng,
}

impl Canvas {
    /// Empty canvas with default attributes, seeded from OS entropy.
    pub fn new(margin: Size) -> Self {
        Self::with_rng(margin, StdRng::from_entropy())
    }

    /// Empty canvas whose path randomness is reproducible.
    pub fn with_seed(margin: Size, seed: u64) -> Self {
        Self::with_rng(margin, StdRng::seed_from_u64(seed))
    }

    fn with_rng(margin: Size, rng: StdRng) -> Self {
        Self {
            shapes: Vec::new(),
            defaults: Defaults::default(),
            margin,
            rng,
        }
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn selected(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|s| s.is_selected())
    }

    #[inline]
    pub fn margin(&self) -> Size {
        self.margin
    }

    #[inline]
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    #[inline]
    pub fn default_width(&self) -> i32 {
        self.defaults.width.get()
    }

    #[inline]
    pub fn default_height(&self) -> i32 {
        self.defaults.height.get()
    }

    // ── pointer entry points ──────────────────────────────────────────────

    /// Appends a shape built from the current defaults with its top-left at `at`.
    pub fn create_shape_at(&mut self, at: Point) {
        let d = self.defaults;
        let body = Body::new(at, Size::new(d.width.get(), d.height.get()), self.margin);
        let path = d.path.build(&mut self.rng);
        let shape = Shape::new(d.shape, body, Palette::new(d.fill, d.border), path);

        log::debug!("created {shape} on a {} path", d.path);
        self.shapes.push(shape);
    }

    /// Toggles selection on every shape containing `at`; creates a shape there
    /// when none does.
    pub fn handle_click(&mut self, at: Point) -> ClickOutcome {
        let mut hits = 0;
        for shape in self.shapes.iter_mut().filter(|s| s.contains(at)) {
            let selected = shape.toggle_selected();
            log::debug!("{shape} selected={selected}");
            hits += 1;
        }

        if hits == 0 {
            self.create_shape_at(at);
            ClickOutcome::Created
        } else {
            ClickOutcome::Toggled(hits)
        }
    }

    /// Routes the clicks collected in `frame`, in arrival order.
    pub fn apply_input(&mut self, frame: &InputFrame) -> Vec<PointerAction> {
        frame
            .clicks
            .iter()
            .filter_map(|click| {
                if click.button.is_primary() {
                    Some(PointerAction::Click(self.handle_click(click.pos)))
                } else if click.button.is_secondary() {
                    Some(PointerAction::ContextMenu(click.pos))
                } else {
                    None
                }
            })
            .collect()
    }

    // ── defaults (cascade to the selection) ───────────────────────────────

    /// Affects new shapes only.
    pub fn set_default_shape_kind(&mut self, kind: ShapeKind) {
        log::debug!("default shape kind: {kind}");
        self.defaults.shape = kind;
    }

    /// Every selected shape gets a brand-new path of `kind`.
    pub fn set_default_path_kind(&mut self, kind: PathKind) {
        log::debug!("default path kind: {kind}");
        self.defaults.path = kind;
        let rng = &mut self.rng;
        for shape in self.shapes.iter_mut().filter(|s| s.is_selected()) {
            shape.set_path(kind.build(rng));
        }
    }

    /// Rejects non-positive widths, leaving the default and the shapes untouched.
    pub fn set_default_width(&mut self, width: i32) -> Result<(), CanvasError> {
        let width = Dimension::try_from(width).inspect_err(|e| {
            log::warn!("rejected default width: {e}");
        })?;
        self.defaults.width = width;
        self.for_each_selected(|s| s.set_width(width.get()));
        Ok(())
    }

    /// Rejects non-positive heights, leaving the default and the shapes untouched.
    pub fn set_default_height(&mut self, height: i32) -> Result<(), CanvasError> {
        let height = Dimension::try_from(height).inspect_err(|e| {
            log::warn!("rejected default height: {e}");
        })?;
        self.defaults.height = height;
        self.for_each_selected(|s| s.set_height(height.get()));
        Ok(())
    }

    pub fn set_default_fill(&mut self, fill: Color) {
        log::debug!("default fill: {fill}");
        self.defaults.fill = fill;
        self.for_each_selected(|s| s.set_fill(fill));
    }

    pub fn set_default_border(&mut self, border: Color) {
        log::debug!("default border: {border}");
        self.defaults.border = border;
        self.for_each_selected(|s| s.set_border(border));
    }

    fn for_each_selected(&mut self, mut f: impl FnMut(&mut Shape)) {
        self.shapes
            .iter_mut()
            .filter(|s| s.is_selected())
            .for_each(|s| f(s));
    }

    // ── scene-wide operations ─────────────────────────────────────────────

    pub fn clear(&mut self) {
        log::debug!("cleared {} shapes", self.shapes.len());
        self.shapes.clear();
    }

    /// Stores the new margin and hands it to every shape's path.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.margin = Size::new(width, height);
        for shape in &mut self.shapes {
            shape.set_margin(self.margin);
        }
    }

    /// Moves every shape one step.
    pub fn step(&mut self) {
        for shape in &mut self.shapes {
            shape.advance();
        }
    }

    /// Paints every shape, first-added at the bottom.
    pub fn render_all(&mut self, surface: &mut dyn Surface) {
        for shape in &mut self.shapes {
            shape.render(surface);
        }
    }
}
