//! Bounce animation core.
//!
//! Shapes placed on a [`Canvas`] by clicking, each moving along a motion
//! [`Path`], stepped and repainted by an [`Animator`].

pub mod animator;
pub mod canvas;
pub mod error;
pub mod path;
pub mod shape;

pub use animator::{Animator, AnimatorConfig, FrameSink, SharedCanvas};
pub use canvas::{Canvas, ClickOutcome, Defaults, Dimension, PointerAction};
pub use error::{AnimatorError, CanvasError};
pub use path::{Path, PathKind};
pub use shape::{Palette, Shape, ShapeKind};
