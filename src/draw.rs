//! Symmetry-aware pixel mutation.
//!
//! Both entry points are pure: they take the current frame sequence and
//! return a new one, leaving the input untouched. The session owns the
//! sequence and replaces it with the returned value.

use crate::color::Color;
use crate::frame::{Frame, GridSize};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// How a written point is replicated across the grid's center lines.
///
/// Session-scoped: selected once and threaded into every mutation, never
/// persisted per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymmetryMode {
    #[default]
    None,
    /// Mirror across the vertical center line: `(w-1-x, y)`.
    Horizontal,
    /// Mirror across the horizontal center line: `(x, h-1-y)`.
    Vertical,
    /// Both mirrors plus the point reflected through both axes.
    Both,
}

impl SymmetryMode {
    fn mirror_horizontal(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    fn mirror_vertical(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }
}

/// Write `color` at `p` in the frame at `frame_index`, plus its symmetry
/// mirrors, returning the new frame sequence.
///
/// Mirrors of a valid point are always in range, since they are derived from
/// the fixed grid dimensions. An out-of-range point or frame index leaves
/// the sequence unchanged.
pub fn set_pixel(
    frames: &[Frame],
    frame_index: usize,
    p: Point,
    color: &Color,
    size: GridSize,
    symmetry: SymmetryMode,
) -> Vec<Frame> {
    let mut next: Vec<Frame> = frames.to_vec();

    let Some(frame) = next.get_mut(frame_index) else {
        return next;
    };
    if !size.contains(p) {
        return next;
    }

    frame.set(p, color);
    for mirror in mirrors_of(p, size, symmetry) {
        frame.set(mirror, color);
    }

    next
}

/// Write every in-range point of `points` (and its mirrors) into the frame
/// at `frame_index`, returning the new frame sequence.
///
/// Points are processed in input order; later points win on coordinate
/// collision. Out-of-range input points are discarded, and each mirror is
/// bounds-checked on its own since shape points may sit at a grid edge.
pub fn apply_shape(
    frames: &[Frame],
    frame_index: usize,
    points: &[Point],
    color: &Color,
    size: GridSize,
    symmetry: SymmetryMode,
) -> Vec<Frame> {
    let mut next: Vec<Frame> = frames.to_vec();

    let Some(frame) = next.get_mut(frame_index) else {
        return next;
    };

    for &p in points {
        if !size.contains(p) {
            continue;
        }
        frame.set(p, color);
        for mirror in mirrors_of(p, size, symmetry) {
            if size.contains(mirror) {
                frame.set(mirror, color);
            }
        }
    }

    next
}

/// The mirrored coordinates of `p` for the given mode, excluding `p` itself.
fn mirrors_of(p: Point, size: GridSize, symmetry: SymmetryMode) -> Vec<Point> {
    let mut mirrors = Vec::with_capacity(3);
    let mx = size.width as i32 - 1 - p.x;
    let my = size.height as i32 - 1 - p.y;

    if symmetry.mirror_horizontal() {
        mirrors.push(Point::new(mx, p.y));
    }
    if symmetry.mirror_vertical() {
        mirrors.push(Point::new(p.x, my));
    }
    if symmetry == SymmetryMode::Both {
        mirrors.push(Point::new(mx, my));
    }

    mirrors
}
