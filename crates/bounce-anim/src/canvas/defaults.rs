use core::fmt;
use core::str::FromStr;

use bounce_engine::paint::Color;

use crate::error::CanvasError;
use crate::path::PathKind;
use crate::shape::ShapeKind;

/// Strictly positive pixel length for a shape width or height.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Dimension(i32);

impl Dimension {
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Dimension {
    type Error = CanvasError;

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        if v > 0 {
            Ok(Dimension(v))
        } else {
            Err(CanvasError::NonPositiveDimension(v))
        }
    }
}

impl FromStr for Dimension {
    type Err = CanvasError;

    /// Parses text-field input such as `" 25 "`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v: i32 = s
            .trim()
            .parse()
            .map_err(|_| CanvasError::InvalidDimension(s.to_string()))?;
        Dimension::try_from(v)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Attributes given to newly created shapes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Defaults {
    pub shape: ShapeKind,
    pub path: PathKind,
    pub width: Dimension,
    pub height: Dimension,
    pub fill: Color,
    pub border: Color,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Circle,
            path: PathKind::Boundary,
            width: Dimension(20),
            height: Dimension(20),
            fill: Color::BLUE,
            border: Color::BLACK,
        }
    }
}
