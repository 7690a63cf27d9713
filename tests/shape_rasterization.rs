use pixel_paint::geometry::{circle_points, distance, line_points, rectangle_points, Point};
use std::collections::HashSet;

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

fn point_set(points: &[Point]) -> HashSet<Point> {
    points.iter().copied().collect()
}

#[test]
fn line_contains_both_endpoints() {
    let points = line_points(p(1, 2), p(7, 5));
    assert_eq!(points.first(), Some(&p(1, 2)));
    assert_eq!(points.last(), Some(&p(7, 5)));
}

#[test]
fn degenerate_line_is_a_single_point() {
    assert_eq!(line_points(p(3, 3), p(3, 3)), vec![p(3, 3)]);
}

#[test]
fn line_covers_same_cells_in_both_directions() {
    let forward = line_points(p(0, 0), p(6, 3));
    let backward = line_points(p(6, 3), p(0, 0));
    assert_eq!(point_set(&forward), point_set(&backward));
}

#[test]
fn horizontal_and_vertical_lines_are_dense() {
    let horizontal = line_points(p(2, 4), p(6, 4));
    assert_eq!(
        horizontal,
        vec![p(2, 4), p(3, 4), p(4, 4), p(5, 4), p(6, 4)]
    );

    let vertical = line_points(p(1, 1), p(1, 4));
    assert_eq!(vertical, vec![p(1, 1), p(1, 2), p(1, 3), p(1, 4)]);
}

#[test]
fn rectangle_border_has_no_interior_or_duplicates() {
    let border = rectangle_points(p(2, 2), p(5, 5), false);

    assert_eq!(border.len(), 12);
    assert_eq!(point_set(&border).len(), 12);
    // No interior cells
    assert!(!border.contains(&p(3, 3)));
    assert!(!border.contains(&p(4, 4)));
    // All four corners present
    for corner in [p(2, 2), p(5, 2), p(2, 5), p(5, 5)] {
        assert!(border.contains(&corner));
    }
}

#[test]
fn rectangle_corners_may_come_in_any_order() {
    let a = rectangle_points(p(5, 5), p(2, 2), false);
    let b = rectangle_points(p(2, 5), p(5, 2), false);
    let c = rectangle_points(p(2, 2), p(5, 5), false);
    assert_eq!(point_set(&a), point_set(&c));
    assert_eq!(point_set(&b), point_set(&c));
}

#[test]
fn filled_rectangle_covers_the_whole_span() {
    let filled = rectangle_points(p(1, 1), p(3, 2), true);
    assert_eq!(filled.len(), 6);
    for y in 1..=2 {
        for x in 1..=3 {
            assert!(filled.contains(&p(x, y)));
        }
    }
}

#[test]
fn degenerate_rectangle_is_a_single_point_in_both_modes() {
    assert_eq!(rectangle_points(p(4, 4), p(4, 4), false), vec![p(4, 4)]);
    assert_eq!(rectangle_points(p(4, 4), p(4, 4), true), vec![p(4, 4)]);
}

#[test]
fn one_row_rectangle_has_no_doubled_edge() {
    let strip = rectangle_points(p(1, 3), p(4, 3), false);
    assert_eq!(strip.len(), 4);
    assert_eq!(point_set(&strip).len(), 4);
}

#[test]
fn zero_radius_circle_is_the_center() {
    assert_eq!(circle_points(p(5, 5), 0, false), vec![p(5, 5)]);
    assert_eq!(circle_points(p(5, 5), 0, true), vec![p(5, 5)]);
}

#[test]
fn circle_border_is_eight_way_symmetric() {
    let border = point_set(&circle_points(p(0, 0), 3, false));
    for &Point { x, y } in &border {
        assert!(border.contains(&p(-x, y)));
        assert!(border.contains(&p(x, -y)));
        assert!(border.contains(&p(y, x)));
    }
    // Cardinal extremes sit exactly at the radius
    for extreme in [p(3, 0), p(-3, 0), p(0, 3), p(0, -3)] {
        assert!(border.contains(&extreme));
    }
}

#[test]
fn filled_circle_is_every_cell_within_the_radius() {
    let filled = point_set(&circle_points(p(0, 0), 2, true));
    let expected: HashSet<Point> = (-2..=2)
        .flat_map(|y| (-2..=2).map(move |x| p(x, y)))
        .filter(|q| q.x * q.x + q.y * q.y <= 4)
        .collect();
    assert_eq!(filled, expected);
    assert_eq!(filled.len(), 13);
}

#[test]
fn distance_is_euclidean() {
    assert_eq!(distance(p(0, 0), p(3, 4)), 5.0);
    assert_eq!(distance(p(2, 2), p(2, 2)), 0.0);
    // Rounding the distance is how a circle radius is derived
    assert_eq!(distance(p(0, 0), p(2, 2)).round() as u32, 3);
}
