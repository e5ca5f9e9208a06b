use pathstep_core::Point;

/// Taxicab (L1) distance between two points: `|Δx| + |Δy|`.
#[inline]
pub fn taxicab(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    f64::from(a.x - b.x).hypot(f64::from(a.y - b.y))
}
