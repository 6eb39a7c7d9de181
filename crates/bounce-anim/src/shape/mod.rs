//! Moving shapes.
//!
//! A [`Shape`] pairs a [`Figure`] (what it looks like and where it can be hit)
//! with a [`Path`] (how it moves). Geometry is kept in a [`Body`] that the
//! shape lends to its path once per tick.

mod bowtie;
mod circle;
mod pacman;
mod rect;

use core::fmt;

use bounce_engine::coords::{Point, Rect, Size};
use bounce_engine::paint::Color;
use bounce_engine::scene::Surface;

use crate::error::CanvasError;
use crate::path::{Body, Motion, Path};

pub use bowtie::BowTie;
pub use circle::Circle;
pub use pacman::{MouthState, PacMan};
pub use rect::Rectangle;

/// Side of the square selection handles, in pixels.
const HANDLE_SIZE: i32 = 4;
const HANDLE_COLOR: Color = Color::BLACK;

/// Fill and border colors of a shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Palette {
    pub fill: Color,
    pub border: Color,
}

impl Palette {
    #[inline]
    pub const fn new(fill: Color, border: Color) -> Self {
        Self { fill, border }
    }
}

/// Per-variant drawing and hit-testing.
pub trait Outline {
    /// Paints the figure into `bounds`. May advance figure-local animation.
    fn paint(&mut self, bounds: Rect, palette: Palette, surface: &mut dyn Surface);

    /// Whether `p` hits the figure occupying `bounds`.
    fn contains(&self, bounds: Rect, p: Point) -> bool;
}

/// Shape kinds, in toolbar order. The discriminant is the stable ordinal.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ShapeKind {
    #[default]
    Circle = 0,
    Rectangle = 1,
    PacMan = 2,
    BowTie = 3,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::PacMan,
        ShapeKind::BowTie,
    ];

    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::PacMan => "PacMan",
            ShapeKind::BowTie => "BowTie",
        }
    }
}

impl TryFrom<u8> for ShapeKind {
    type Error = CanvasError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        ShapeKind::ALL
            .get(v as usize)
            .copied()
            .ok_or(CanvasError::UnknownShapeKind(v))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Closed set of figures; dispatches [`Outline`] to the variant.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Figure {
    Circle(Circle),
    Rectangle(Rectangle),
    PacMan(PacMan),
    BowTie(BowTie),
}

impl Figure {
    pub fn new(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Circle => Figure::Circle(Circle),
            ShapeKind::Rectangle => Figure::Rectangle(Rectangle),
            ShapeKind::PacMan => Figure::PacMan(PacMan::new()),
            ShapeKind::BowTie => Figure::BowTie(BowTie),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Figure::Circle(_) => ShapeKind::Circle,
            Figure::Rectangle(_) => ShapeKind::Rectangle,
            Figure::PacMan(_) => ShapeKind::PacMan,
            Figure::BowTie(_) => ShapeKind::BowTie,
        }
    }
}

impl Outline for Figure {
    fn paint(&mut self, bounds: Rect, palette: Palette, surface: &mut dyn Surface) {
        match self {
            Figure::Circle(f) => f.paint(bounds, palette, surface),
            Figure::Rectangle(f) => f.paint(bounds, palette, surface),
            Figure::PacMan(f) => f.paint(bounds, palette, surface),
            Figure::BowTie(f) => f.paint(bounds, palette, surface),
        }
    }

    fn contains(&self, bounds: Rect, p: Point) -> bool {
        match self {
            Figure::Circle(f) => f.contains(bounds, p),
            Figure::Rectangle(f) => f.contains(bounds, p),
            Figure::PacMan(f) => f.contains(bounds, p),
            Figure::BowTie(f) => f.contains(bounds, p),
        }
    }
}

/// A figure moving along a path.
///
/// Width and height are expected to be positive; the canvas enforces this
/// before calling the setters.
#[derive(Debug, Clone)]
pub struct Shape {
    figure: Figure,
    body: Body,
    palette: Palette,
    selected: bool,
    path: Path,
}

impl Shape {
    pub fn new(kind: ShapeKind, body: Body, palette: Palette, path: Path) -> Self {
        Self {
            figure: Figure::new(kind),
            body,
            palette,
            selected: false,
            path,
        }
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.figure.kind()
    }

    #[inline]
    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    #[inline]
    pub fn body(&self) -> &Body {
        &self.body
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.body.origin
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.body.size
    }

    #[inline]
    pub fn margin(&self) -> Size {
        self.body.margin
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.body.bounds()
    }

    #[inline]
    pub fn palette(&self) -> Palette {
        self.palette
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Flips the selection flag and returns the new value.
    pub fn toggle_selected(&mut self) -> bool {
        self.selected = !self.selected;
        self.selected
    }

    pub fn set_width(&mut self, width: i32) {
        self.body.size.width = width;
    }

    pub fn set_height(&mut self, height: i32) {
        self.body.size.height = height;
    }

    pub fn set_fill(&mut self, fill: Color) {
        self.palette.fill = fill;
    }

    pub fn set_border(&mut self, border: Color) {
        self.palette.border = border;
    }

    /// Replaces the path; the old path's phase and direction are discarded.
    pub fn set_path(&mut self, path: Path) {
        self.path = path;
    }

    pub fn set_margin(&mut self, margin: Size) {
        self.body.margin = margin;
    }

    /// Moves the shape one step along its path.
    #[inline]
    pub fn advance(&mut self) {
        self.path.advance(&mut self.body);
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.figure.contains(self.bounds(), p)
    }

    /// Paints the figure, then corner handles when selected.
    pub fn render(&mut self, surface: &mut dyn Surface) {
        let bounds = self.bounds();
        self.figure.paint(bounds, self.palette, surface);

        if self.selected {
            for corner in bounds.corners() {
                surface.fill_rect(Rect::centered(corner, HANDLE_SIZE), HANDLE_COLOR);
            }
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Point { x, y } = self.origin();
        write!(f, "[{},{},{}]", self.kind(), x, y)
    }
}
