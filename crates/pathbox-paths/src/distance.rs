use pathbox_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Euclidean (L2) distance between two points.
///
/// Admissible and consistent as an A* heuristic on a unit-cost grid
/// with axis-aligned moves.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}
