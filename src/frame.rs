use crate::color::Color;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Fixed dimensions of an editing session's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Whether a point addresses a valid cell of this grid.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && (p.x as usize) < self.width && p.y >= 0 && (p.y as usize) < self.height
    }
}

/// One animation cell: a rectangular grid of color tokens, row-major.
///
/// Serializes as the bare nested array so a frame round-trips through the
/// persistence boundary as the identical matrix of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frame {
    cells: Vec<Vec<Color>>,
}

impl Frame {
    /// A frame with every cell set to the blank (white) token.
    pub fn blank(size: GridSize) -> Self {
        Self {
            cells: vec![vec![Color::white(); size.width]; size.height],
        }
    }

    /// Wrap an existing matrix of tokens.
    ///
    /// Rows must be non-empty and all of equal width; loaded data that is
    /// not rectangular is rejected at the persistence boundary instead.
    pub fn from_cells(cells: Vec<Vec<Color>>) -> Option<Self> {
        let width = cells.first().map(Vec::len)?;
        if width == 0 || cells.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Self { cells })
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn size(&self) -> GridSize {
        GridSize::new(self.width(), self.height())
    }

    /// The color at `p`, or `None` outside the grid.
    pub fn get(&self, p: Point) -> Option<&Color> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        self.cells.get(p.y as usize)?.get(p.x as usize)
    }

    /// Write `color` at `p`. Out-of-range writes are silently ignored.
    pub fn set(&mut self, p: Point, color: &Color) {
        if p.x < 0 || p.y < 0 {
            return;
        }
        if let Some(cell) = self
            .cells
            .get_mut(p.y as usize)
            .and_then(|row| row.get_mut(p.x as usize))
        {
            *cell = color.clone();
        }
    }

    pub fn rows(&self) -> &[Vec<Color>] {
        &self.cells
    }

    /// Check that the frame matches the declared grid dimensions.
    pub fn matches(&self, size: GridSize) -> bool {
        self.height() == size.height && self.cells.iter().all(|row| row.len() == size.width)
    }
}
