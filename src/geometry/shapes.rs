//! Integer rasterization of the shape tools.
//!
//! All functions here are pure and perform no bounds filtering; they cover
//! the requested shape exactly and leave clipping to the caller. Degenerate
//! inputs (zero-length line, zero-area rectangle, zero radius) produce a
//! single point, never an empty result.

use super::Point;

/// Rasterize the segment from `start` to `end` with Bresenham's algorithm.
///
/// Both endpoints are always included; `start == end` yields that one point.
/// Swapping the endpoints covers the same point set (order may differ).
pub fn line_points(start: Point, end: Point) -> Vec<Point> {
    let mut points = Vec::new();

    let dx = (end.x - start.x).abs();
    let dy = (end.y - start.y).abs();
    let sx = if start.x < end.x { 1 } else { -1 };
    let sy = if start.y < end.y { 1 } else { -1 };
    let mut err = dx - dy;

    let mut x = start.x;
    let mut y = start.y;

    loop {
        points.push(Point::new(x, y));

        if x == end.x && y == end.y {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    points
}

/// Rasterize the axis-aligned rectangle spanned by two corners.
///
/// The corners may be given in any order. Unfilled mode returns only the
/// border, with no duplicates at the corners; filled mode returns every
/// point of the spanned area.
pub fn rectangle_points(start: Point, end: Point, filled: bool) -> Vec<Point> {
    let mut points = Vec::new();

    let min_x = start.x.min(end.x);
    let max_x = start.x.max(end.x);
    let min_y = start.y.min(end.y);
    let max_y = start.y.max(end.y);

    if filled {
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                points.push(Point::new(x, y));
            }
        }
    } else {
        // Top and bottom edges
        for x in min_x..=max_x {
            points.push(Point::new(x, min_y));
            if min_y != max_y {
                points.push(Point::new(x, max_y));
            }
        }
        // Left and right edges
        for y in (min_y + 1)..max_y {
            points.push(Point::new(min_x, y));
            if min_x != max_x {
                points.push(Point::new(max_x, y));
            }
        }
    }

    points
}

/// Rasterize a circle of integer `radius` around `center`.
///
/// Unfilled mode runs the midpoint circle algorithm and emits the 8-way
/// symmetric boundary; duplicate points at octant boundaries are allowed and
/// callers must tolerate them. Filled mode returns every point with
/// `dx² + dy² ≤ radius²`. Radius 0 yields exactly the center point in
/// either mode.
pub fn circle_points(center: Point, radius: u32, filled: bool) -> Vec<Point> {
    if radius == 0 {
        return vec![center];
    }

    let r = radius as i32;
    let mut points = Vec::new();

    if filled {
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    points.push(Point::new(center.x + dx, center.y + dy));
                }
            }
        }
    } else {
        let mut x = 0;
        let mut y = r;
        let mut d = 3 - 2 * r;

        while y >= x {
            // One point per octant
            points.push(Point::new(center.x + x, center.y + y));
            points.push(Point::new(center.x - x, center.y + y));
            points.push(Point::new(center.x + x, center.y - y));
            points.push(Point::new(center.x - x, center.y - y));
            points.push(Point::new(center.x + y, center.y + x));
            points.push(Point::new(center.x - y, center.y + x));
            points.push(Point::new(center.x + y, center.y - x));
            points.push(Point::new(center.x - y, center.y - x));

            x += 1;
            if d > 0 {
                y -= 1;
                d += 4 * (x - y) + 10;
            } else {
                d += 4 * x + 6;
            }
        }
    }

    points
}
