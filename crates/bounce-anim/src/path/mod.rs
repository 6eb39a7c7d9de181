//! Motion paths.
//!
//! A path is a small state machine that moves its shape one step per
//! animation tick. Paths never own the shape: the shape lends a [`Body`]
//! (position plus its live size and margin) to [`Motion::advance`].
//!
//! Adding a path:
//! - implement [`Motion`] for a new type in this module tree
//! - add a variant to [`Path`] and [`PathKind`]
//! - extend [`PathKind::build`]

mod boundary;
mod drift;

use core::fmt;

use bounce_engine::coords::{Point, Rect, Size};
use rand::Rng;

use crate::error::CanvasError;

pub use boundary::{Boundary, Heading};
pub use drift::{Falling, FloatingSideways, FloatingSidewaysOpposite, Flying, Sway};

/// The part of a shape a path is allowed to touch.
///
/// `size` and `margin` are read fresh on every step so a resized canvas or a
/// resized shape takes effect on the next tick.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Body {
    /// Top-left corner.
    pub origin: Point,
    pub size: Size,
    /// Extent of the canvas the shape moves within.
    pub margin: Size,
}

impl Body {
    #[inline]
    pub const fn new(origin: Point, size: Size, margin: Size) -> Self {
        Self { origin, size, margin }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// One step of movement.
pub trait Motion {
    fn advance(&mut self, body: &mut Body);
}

/// Path kinds, in toolbar order. The discriminant is the stable ordinal.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum PathKind {
    #[default]
    Boundary = 0,
    Falling = 1,
    FloatingSideways = 2,
    FloatingSidewaysOpposite = 3,
    Flying = 4,
}

impl PathKind {
    pub const ALL: [PathKind; 5] = [
        PathKind::Boundary,
        PathKind::Falling,
        PathKind::FloatingSideways,
        PathKind::FloatingSidewaysOpposite,
        PathKind::Flying,
    ];

    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Builds a fresh path of this kind with randomized speed/amplitude.
    pub fn build<R: Rng + ?Sized>(self, rng: &mut R) -> Path {
        match self {
            PathKind::Boundary => Path::Boundary(Boundary::random(rng)),
            PathKind::Falling => Path::Falling(Falling::new(Sway::random(rng))),
            PathKind::FloatingSideways => {
                Path::FloatingSideways(FloatingSideways::new(Sway::random(rng)))
            }
            PathKind::FloatingSidewaysOpposite => {
                Path::FloatingSidewaysOpposite(FloatingSidewaysOpposite::new(Sway::random(rng)))
            }
            PathKind::Flying => Path::Flying(Flying::new(Sway::random(rng))),
        }
    }
}

impl TryFrom<u8> for PathKind {
    type Error = CanvasError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        PathKind::ALL
            .get(v as usize)
            .copied()
            .ok_or(CanvasError::UnknownPathKind(v))
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PathKind::Boundary => "boundary",
            PathKind::Falling => "falling",
            PathKind::FloatingSideways => "floating sideways",
            PathKind::FloatingSidewaysOpposite => "floating sideways (opposite)",
            PathKind::Flying => "flying",
        };
        f.write_str(name)
    }
}

/// Closed set of motion paths.
#[derive(Debug, Clone, PartialEq)]
pub enum Path {
    Boundary(Boundary),
    Falling(Falling),
    FloatingSideways(FloatingSideways),
    FloatingSidewaysOpposite(FloatingSidewaysOpposite),
    Flying(Flying),
}

impl Path {
    pub fn kind(&self) -> PathKind {
        match self {
            Path::Boundary(_) => PathKind::Boundary,
            Path::Falling(_) => PathKind::Falling,
            Path::FloatingSideways(_) => PathKind::FloatingSideways,
            Path::FloatingSidewaysOpposite(_) => PathKind::FloatingSidewaysOpposite,
            Path::Flying(_) => PathKind::Flying,
        }
    }
}

impl Motion for Path {
    #[inline]
    fn advance(&mut self, body: &mut Body) {
        match self {
            Path::Boundary(p) => p.advance(body),
            Path::Falling(p) => p.advance(body),
            Path::FloatingSideways(p) => p.advance(body),
            Path::FloatingSidewaysOpposite(p) => p.advance(body),
            Path::Flying(p) => p.advance(body),
        }
    }
}
