use std::fmt;
use std::str::FromStr;

use crate::geom2::{distance, Point, EPSILON};

use super::ring::{check_finite, check_no_collinear, parse_points, Ring};
use super::{Polygon, ShapeError, ShapeKind, Violation};

const KIND: ShapeKind = ShapeKind::Rhombus;

/// Quadrilateral with four equal sides and perpendicular diagonals.
#[derive(Clone, Debug, Default)]
pub struct Rhombus {
    ring: Ring<4>,
}

/// Rhombus invariants: equal consecutive sides, perpendicular diagonals
/// `v2 - v0` and `v3 - v1`, and no collinear consecutive triplet (which
/// would otherwise let a zero-area shape through).
pub fn validate(v: &[Point; 4]) -> Result<(), Violation> {
    check_finite(v)?;
    let sides: [f64; 4] = std::array::from_fn(|i| distance(v[i], v[(i + 1) % 4]));
    if sides.windows(2).any(|w| (w[0] - w[1]).abs() > EPSILON) {
        return Err(Violation::UnequalSides);
    }
    let d1 = v[2].to_vec2() - v[0].to_vec2();
    let d2 = v[3].to_vec2() - v[1].to_vec2();
    if d1.dot(&d2).abs() > EPSILON {
        return Err(Violation::DiagonalsNotPerpendicular);
    }
    check_no_collinear(v)
}

impl Rhombus {
    pub fn new(p1: Point, p2: Point, p3: Point, p4: Point) -> Result<Self, ShapeError> {
        Self::from_vertices([p1, p2, p3, p4])
    }

    pub fn from_vertices(vertices: [Point; 4]) -> Result<Self, ShapeError> {
        Ok(Self {
            ring: Ring::validated(KIND, vertices, validate)?,
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Self {
        Self {
            ring: self.ring.take(),
        }
    }

    pub fn duplicate(&self) -> Self {
        self.clone()
    }
}

impl Polygon for Rhombus {
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

impl PartialEq for Rhombus {
    fn eq(&self, other: &Self) -> bool {
        self.ring.same_vertices(&other.ring)
    }
}

impl fmt::Display for Rhombus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ring.write(KIND, f)
    }
}

impl FromStr for Rhombus {
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

    fn diamond() -> Rhombus {
        Rhombus::new(p(0.0, 2.0), p(2.0, 0.0), p(0.0, -2.0), p(-2.0, 0.0)).unwrap()
    }

    #[test]
    fn diamond_area_and_centroid() {
        let r = diamond();
        assert!((r.area().unwrap() - 8.0).abs() < 1e-12);
        let c = r.centroid().unwrap();
        assert!(c.x.abs() < 1e-12 && c.y.abs() < 1e-12);
    }

    #[test]
    fn skewed_rhombus() {
        // side 5 via a 3-4-5 offset; diagonals (8, 4) and (-2, 4)
        let r = Rhombus::new(p(0.0, 0.0), p(5.0, 0.0), p(8.0, 4.0), p(3.0, 4.0)).unwrap();
        assert!((r.area().unwrap() - 20.0).abs() < 1e-12);
    }

    #[test]
    fn rectangle_has_unequal_sides() {
        let err = Rhombus::new(p(0.0, 0.0), p(3.0, 0.0), p(3.0, 2.0), p(0.0, 2.0)).unwrap_err();
        assert_eq!(err.violation(), Some(Violation::UnequalSides));
    }

    #[test]
    fn kite_has_unequal_sides() {
        let err = Rhombus::new(p(0.0, 3.0), p(1.0, 0.0), p(0.0, -1.0), p(-1.0, 0.0)).unwrap_err();
        assert_eq!(err.violation(), Some(Violation::UnequalSides));
    }

    #[test]
    fn collapsed_rhombus_rejected() {
        // all sides zero, diagonals zero
        let o = p(1.0, 1.0);
        let err = Rhombus::new(o, o, o, o).unwrap_err();
        assert!(matches!(err.violation(), Some(Violation::Collinear { .. })));
    }

    #[test]
    fn one_side_stretched_fails() {
        let err = Rhombus::new(p(0.0, 2.0), p(2.0, 0.0), p(0.0, -2.0 - 1e-6), p(-2.0, 0.0))
            .unwrap_err();
        assert_eq!(err.violation(), Some(Violation::UnequalSides));
    }

    #[test]
    fn skewed_diagonals_rejected() {
        // centrally symmetric, so opposite sides match exactly; adjacent sides
        // differ by ~1.4e-10 while the diagonal dot product is 4e-7
        let (a, d) = (1000.0, 1e-10);
        let err = Rhombus::new(p(a, 0.0), p(d, a), p(-a, 0.0), p(-d, -a)).unwrap_err();
        assert_eq!(err.violation(), Some(Violation::DiagonalsNotPerpendicular));
    }

    #[test]
    fn unchecked_mutation_blocks_area_until_revalidated() {
        let mut r = diamond();
        r.set_vertex(0, p(0.0, 3.0)).unwrap();
        assert!(!r.is_live());
        assert!(matches!(r.area(), Err(ShapeError::Unvalidated { .. })));
        assert!(r.revalidate().is_err());
        assert!(!r.is_live());

        r.set_vertex(0, p(0.0, 2.0)).unwrap();
        r.revalidate().unwrap();
        assert!(r.is_live());
        assert!((r.area().unwrap() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn vertex_index_bounds() {
        let mut r = diamond();
        assert_eq!(r.vertex(3).unwrap(), p(-2.0, 0.0));
        assert_eq!(r.vertex(4), Err(ShapeError::Index { index: 4, len: 4 }));
        assert!(matches!(
            r.set_vertex(9, p(0.0, 0.0)),
            Err(ShapeError::Index { index: 9, len: 4 })
        ));
        r.clear();
        assert!(matches!(r.vertex(0), Err(ShapeError::Empty { .. })));
        assert_eq!(r.to_string(), "Rhombus (moved-from state)");
    }

    #[test]
    fn stream_validation() {
        let mut r = Rhombus::empty();
        r.read_tokens(&mut "0 2 2 0 0 -2 -2 0".split_whitespace()).unwrap();
        assert_eq!(r, diamond());

        let mut bad = Rhombus::empty();
        assert!(matches!(
            bad.read_tokens(&mut "0 0 3 0 3 2 0 2".split_whitespace()),
            Err(ShapeError::Geometry { .. })
        ));
        assert!(bad.is_empty());
    }
}
