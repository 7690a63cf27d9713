//! Connected-region color replacement.

use super::Point;
use crate::color::Color;
use crate::frame::Frame;
use std::collections::HashSet;

/// Collect every cell reachable from `seed` over 4-directional adjacency
/// while staying on `target`-colored cells.
///
/// The frame is not mutated; the returned points are exactly the cells whose
/// color should change to `fill`. The result is empty when the seed is out
/// of bounds, when `target == fill`, or when the seed cell is not `target`
/// — re-running a fill after applying it is therefore a no-op.
///
/// The traversal is an iterative stack-based walk with a visited set, so
/// large regions cannot overflow the call stack and each cell is processed
/// once no matter how many times it is pushed.
pub fn flood_fill(frame: &Frame, seed: Point, target: &Color, fill: &Color) -> Vec<Point> {
    let mut points = Vec::new();

    if target == fill {
        return points;
    }
    match frame.get(seed) {
        Some(color) if color == target => {}
        _ => return points,
    }

    let mut stack = vec![seed];
    let mut visited: HashSet<Point> = HashSet::new();

    while let Some(p) = stack.pop() {
        if !visited.insert(p) {
            continue;
        }
        match frame.get(p) {
            Some(color) if color == target => {}
            _ => continue,
        }

        points.push(p);

        stack.push(Point::new(p.x + 1, p.y));
        stack.push(Point::new(p.x - 1, p.y));
        stack.push(Point::new(p.x, p.y + 1));
        stack.push(Point::new(p.x, p.y - 1));
    }

    points
}
