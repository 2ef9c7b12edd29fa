/// A vertex position on the integer plane.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

pub type Cost = u64;

/// Distance of a vertex that has not been reached yet.
pub const INFINITY: Cost = Cost::MAX;

/// Euclidean distance between two points, truncated toward zero.
/// The squared length is exact in u128 for any pair of i32 coordinates.
pub fn euclidean(p1: Point, p2: Point) -> Cost {
    let dx = u128::from((i64::from(p1.x) - i64::from(p2.x)).unsigned_abs());
    let dy = u128::from((i64::from(p1.y) - i64::from(p2.y)).unsigned_abs());
    floor_sqrt(dx * dx + dy * dy) as Cost
}

/// Largest `r` with `r * r <= n`. The f64 estimate can be off by one once
/// `n` exceeds 2^53, so it is corrected in integers.
fn floor_sqrt(n: u128) -> u128 {
    let mut r = (n as f64).sqrt() as u128;
    while r * r > n {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    r
}
