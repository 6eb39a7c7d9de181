use thiserror::Error;

/// Errors raised at the canvas boundary.
///
/// Only width/height input can actually be wrong at runtime; the kind
/// variants exist for shells that store kinds as ordinals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("dimension must be a positive number of pixels, got {0}")]
    NonPositiveDimension(i32),

    #[error("`{0}` is not a whole number of pixels")]
    InvalidDimension(String),

    #[error("unknown shape kind ordinal {0}")]
    UnknownShapeKind(u8),

    #[error("unknown path kind ordinal {0}")]
    UnknownPathKind(u8),
}

/// Errors raised by the animation driver.
#[derive(Debug, Error)]
pub enum AnimatorError {
    #[error("failed to spawn the animation thread")]
    Spawn(#[source] std::io::Error),
}
