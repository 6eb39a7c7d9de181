pub(crate) mod oval;
pub(crate) mod pie;
pub(crate) mod polygon;
pub(crate) mod rect;

/// Whether a command paints the interior or only the one-pixel outline.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DrawStyle {
    Fill,
    Stroke,
}
