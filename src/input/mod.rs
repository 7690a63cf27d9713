use crate::geometry::Point;

mod controller;
pub use controller::{CanvasController, GestureConfig};

/// A pointer event in grid coordinates.
///
/// The (excluded) UI layer maps screen positions to cells before handing
/// events to the core; positions outside the grid are legal and get filtered
/// rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
}

/// A single committed mutation produced by the controller.
///
/// Exactly one command is emitted per completed gesture (per pixel for the
/// pencil, which has no gesture beyond continuous invocation). The session
/// executes commands against the owned frame sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasCommand {
    /// Write one pixel at the given cell.
    PaintPixel(Point),
    /// Write a rasterized, bounds-filtered shape point set.
    PaintShape(Vec<Point>),
    /// Flood-fill the region around the given seed cell.
    Fill(Point),
}
