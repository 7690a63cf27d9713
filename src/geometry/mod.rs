use serde::{Deserialize, Serialize};

pub mod fill;
pub mod shapes;

pub use fill::flood_fill;
pub use shapes::{circle_points, line_points, rectangle_points};

/// An integer grid coordinate.
///
/// Intermediate results of rasterization may lie outside the grid; callers
/// clip against [`crate::frame::GridSize`] before writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two grid points.
///
/// Used to derive a circle radius from the anchor and the current pointer
/// position.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = f64::from(b.x - a.x);
    let dy = f64::from(b.y - a.y);
    (dx * dx + dy * dy).sqrt()
}
