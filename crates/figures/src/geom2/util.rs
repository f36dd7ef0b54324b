use nalgebra::Vector2;

use super::{cfg::EPSILON, types::Point};

/// Euclidean length of the segment `a`–`b`.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (b.to_vec2() - a.to_vec2()).norm()
}

/// Twice the signed area of triangle `(a, b, c)`, i.e. `(b - a) × (c - a)`.
///
/// Positive for a left (counterclockwise) turn at `b`, negative for a right turn.
#[inline]
pub fn cross_product(a: Point, b: Point, c: Point) -> f64 {
    let ab = b.to_vec2() - a.to_vec2();
    let ac = c.to_vec2() - a.to_vec2();
    ab.perp(&ac)
}

/// `true` iff `|cross_product(a, b, c)| < EPSILON`.
#[inline]
pub fn are_collinear(a: Point, b: Point, c: Point) -> bool {
    cross_product(a, b, c).abs() < EPSILON
}

/// Segments `a→b` and `c→d` are parallel.
///
/// Pre: none; degenerate input is handled.
/// Post: `false` whenever either segment has length `<= EPSILON`, so a
/// collapsed side is never counted as a parallel pair.
pub fn are_parallel(a: Point, b: Point, c: Point, d: Point) -> bool {
    let u: Vector2<f64> = b.to_vec2() - a.to_vec2();
    let v: Vector2<f64> = d.to_vec2() - c.to_vec2();
    if u.perp(&v).abs() >= EPSILON {
        return false;
    }
    u.norm() > EPSILON && v.norm() > EPSILON
}
