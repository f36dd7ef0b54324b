//! Trapezoid: convex quadrilateral with exactly one pair of parallel sides.
//!
//! Parallelograms (two parallel pairs) are not trapezoids here; this is the
//! exclusive definition, so squares, rectangles and rhombi are rejected.

use std::fmt;
use std::str::FromStr;

use crate::geom2::{are_parallel, Point};

use super::ring::{check_convex_turns, check_finite, check_no_collinear, parse_points, Ring};
use super::{Polygon, ShapeError, ShapeKind, Violation};

const KIND: ShapeKind = ShapeKind::Trapezoid;

#[derive(Clone, Debug, Default)]
pub struct Trapezoid {
    ring: Ring<4>,
}

/// Trapezoid invariants, in order:
/// 1. finite coordinates,
/// 2. no three cyclically consecutive vertices collinear,
/// 3. all turns share one orientation (convex),
/// 4. exactly one of the opposite side pairs (0–1, 2–3) and (1–2, 3–0) is parallel.
pub fn validate(v: &[Point; 4]) -> Result<(), Violation> {
    check_finite(v)?;
    check_no_collinear(v)?;
    check_convex_turns(v)?;
    let count = [(0, 1, 2, 3), (1, 2, 3, 0)]
        .iter()
        .filter(|&&(a, b, c, d)| are_parallel(v[a], v[b], v[c], v[d]))
        .count();
    if count != 1 {
        return Err(Violation::ParallelPairs { count });
    }
    Ok(())
}

impl Trapezoid {
    pub fn new(p1: Point, p2: Point, p3: Point, p4: Point) -> Result<Self, ShapeError> {
        Self::from_vertices([p1, p2, p3, p4])
    }

    pub fn from_vertices(vertices: [Point; 4]) -> Result<Self, ShapeError> {
        Ok(Self {
            ring: Ring::validated(KIND, vertices, validate)?,
        })
    }

    /// A trapezoid with no vertices.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Move the vertex data out, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        Self {
            ring: self.ring.take(),
        }
    }

    /// Independent copy in the same state.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }
}

impl Polygon for Trapezoid {
    fn kind(&self) -> ShapeKind {
        KIND
    }

    fn vertices(&self) -> Result<&[Point], ShapeError> {
        self.ring.checked(KIND).map(|p| &p[..])
    }

    fn raw_vertices(&self) -> Option<&[Point]> {
        self.ring.points().map(|p| &p[..])
    }

    fn vertex(&self, index: usize) -> Result<Point, ShapeError> {
        self.ring.get(KIND, index)
    }

    fn set_vertex(&mut self, index: usize, p: Point) -> Result<(), ShapeError> {
        self.ring.set(KIND, index, p)
    }

    fn revalidate(&mut self) -> Result<(), ShapeError> {
        self.ring.revalidate(KIND, validate)
    }

    fn read_tokens<'a>(
        &mut self,
        tokens: &mut dyn Iterator<Item = &'a str>,
    ) -> Result<(), ShapeError> {
        self.ring.read_from(KIND, tokens, validate)
    }

    fn clear(&mut self) {
        self.ring = Ring::Empty;
    }

    fn is_live(&self) -> bool {
        self.ring.is_live()
    }
}

impl PartialEq for Trapezoid {
    fn eq(&self, other: &Self) -> bool {
        self.ring.same_vertices(&other.ring)
    }
}

impl fmt::Display for Trapezoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ring.write(KIND, f)
    }
}

/// Parses exactly eight numbers `x1 y1 .. x4 y4`.
impl FromStr for Trapezoid {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_vertices(parse_points(KIND, s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn isosceles() -> Trapezoid {
        Trapezoid::new(p(0.0, 0.0), p(4.0, 0.0), p(3.0, 2.0), p(1.0, 2.0)).unwrap()
    }

    #[test]
    fn isosceles_area_and_centroid() {
        let t = isosceles();
        // bases 4 and 2, height 2
        assert!((t.area().unwrap() - 6.0).abs() < 1e-12);
        let c = t.centroid().unwrap();
        assert!((c.x - 2.0).abs() < 1e-12 && (c.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn clockwise_order_is_accepted() {
        let t = Trapezoid::new(p(1.0, 2.0), p(3.0, 2.0), p(4.0, 0.0), p(0.0, 0.0)).unwrap();
        assert!((t.area().unwrap() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn square_is_a_parallelogram_not_a_trapezoid() {
        let err = Trapezoid::new(p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)).unwrap_err();
        assert_eq!(err.violation(), Some(Violation::ParallelPairs { count: 2 }));
    }

    #[test]
    fn no_parallel_sides_rejected() {
        let err = Trapezoid::new(p(0.0, 0.0), p(4.0, 0.0), p(5.0, 3.0), p(1.0, 2.0)).unwrap_err();
        assert_eq!(err.violation(), Some(Violation::ParallelPairs { count: 0 }));
        // not convex either way
        assert!(Trapezoid::new(p(0.0, 0.0), p(1.0, 3.0), p(3.0, 2.0), p(2.0, 1.0)).is_err());
    }

    #[test]
    fn collinear_run_rejected() {
        let err = Trapezoid::new(p(0.0, 0.0), p(2.0, 0.0), p(3.0, 0.0), p(1.0, 2.0)).unwrap_err();
        assert!(matches!(
            err,
            ShapeError::Geometry {
                kind: ShapeKind::Trapezoid,
                violation: Violation::Collinear { at: 1 }
            }
        ));
    }

    #[test]
    fn self_intersecting_rejected_as_not_convex() {
        // bow-tie: the "bases" are parallel but traversed in the same direction
        let err = Trapezoid::new(p(0.0, 0.0), p(4.0, 0.0), p(1.0, 2.0), p(3.0, 2.0)).unwrap_err();
        assert!(matches!(err.violation(), Some(Violation::NotConvex { .. })));
    }

    #[test]
    fn non_finite_rejected() {
        let err =
            Trapezoid::new(p(0.0, 0.0), p(f64::NAN, 0.0), p(3.0, 2.0), p(1.0, 2.0)).unwrap_err();
        assert_eq!(err.violation(), Some(Violation::NonFinite));
    }

    #[test]
    fn from_str_requires_exactly_eight_numbers() {
        let t: Trapezoid = "0 0 4 0 3 2 1 2".parse().unwrap();
        assert_eq!(t, isosceles());
        assert!(matches!(
            "0 0 4 0 3 2 1".parse::<Trapezoid>(),
            Err(ShapeError::Parse { .. })
        ));
        assert!(matches!(
            "0 0 4 0 3 2 1 2 9".parse::<Trapezoid>(),
            Err(ShapeError::Parse { .. })
        ));
        assert!(matches!(
            "0 0 4 x 3 2 1 2".parse::<Trapezoid>(),
            Err(ShapeError::Parse { .. })
        ));
        assert!(matches!(
            "0 0 1 3 3 2 2 1".parse::<Trapezoid>(),
            Err(ShapeError::Geometry { .. })
        ));
    }

    #[test]
    fn failed_read_keeps_previous_vertices() {
        let mut t = isosceles();
        let before = t.clone();
        let mut bad = "0 0 2 0 2 2 0 2".split_whitespace();
        assert!(t.read_tokens(&mut bad).is_err());
        assert!(t.is_live());
        assert_eq!(t, before);

        let mut short = "1 1".split_whitespace();
        assert!(t.read_tokens(&mut short).is_err());
        assert_eq!(t, before);
    }

    #[test]
    fn read_consumes_only_its_tokens() {
        let mut t = Trapezoid::empty();
        let mut tokens = "0 0 4 0 3 2 1 2 rest".split_whitespace();
        t.read_tokens(&mut tokens).unwrap();
        assert!(t.is_live());
        assert_eq!(tokens.next(), Some("rest"));
    }

    #[test]
    fn display_format() {
        assert_eq!(
            isosceles().to_string(),
            "Trapezoid vertices: (0, 0) (4, 0) (3, 2) (1, 2) "
        );
        assert_eq!(Trapezoid::empty().to_string(), "Trapezoid (moved-from state)");
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut src = isosceles();
        let mut dst = Trapezoid::new(p(1.0, 1.0), p(6.0, 1.0), p(5.0, 4.0), p(2.0, 4.0)).unwrap();
        assert_ne!(dst, src);
        dst = src.take();
        assert!(src.is_empty());
        assert!(matches!(src.area(), Err(ShapeError::Empty { .. })));
        assert_eq!(dst, isosceles());
    }
}
