//! Convex pentagon.
//!
//! Unlike the quadrilaterals there is no side/angle relation to check: any
//! strictly convex five-vertex ring with non-degenerate sides is accepted.

use std::fmt;
use std::str::FromStr;

use crate::geom2::{distance, Point, EPSILON};

use super::ring::{check_convex_turns, check_finite, parse_points, Ring};
use super::{Polygon, ShapeError, ShapeKind, Violation};

const KIND: ShapeKind = ShapeKind::Pentagon;

#[derive(Clone, Debug, Default)]
pub struct Pentagon {
    ring: Ring<5>,
}

/// Pentagon invariants.
///
/// Walks the five cyclic turns once: each must be non-degenerate and share
/// the first turn's orientation. Then every side must be at least `EPSILON`
/// long.
pub fn validate(v: &[Point; 5]) -> Result<(), Violation> {
    check_finite(v)?;
    check_convex_turns(v)?;
    match (0..5).find(|&i| distance(v[i], v[(i + 1) % 5]) < EPSILON) {
        Some(at) => Err(Violation::ShortSide { at }),
        None => Ok(()),
    }
}

impl Pentagon {
    pub fn new(p1: Point, p2: Point, p3: Point, p4: Point, p5: Point) -> Result<Self, ShapeError> {
        Self::from_vertices([p1, p2, p3, p4, p5])
    }

    pub fn from_vertices(vertices: [Point; 5]) -> Result<Self, ShapeError> {
        Ok(Self {
            ring: Ring::validated(KIND, vertices, validate)?,
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Move the vertex data out, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        Self {
            ring: self.ring.take(),
        }
    }

    pub fn duplicate(&self) -> Self {
        self.clone()
    }
}

impl Polygon for Pentagon {
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

impl PartialEq for Pentagon {
    fn eq(&self, other: &Self) -> bool {
        self.ring.same_vertices(&other.ring)
    }
}

impl fmt::Display for Pentagon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ring.write(KIND, f)
    }
}

/// Parses exactly ten numbers `x1 y1 .. x5 y5`.
impl FromStr for Pentagon {
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

    fn house() -> Pentagon {
        Pentagon::new(p(0.0, 2.0), p(2.0, 1.0), p(1.0, -1.0), p(-1.0, -1.0), p(-2.0, 1.0)).unwrap()
    }

    #[test]
    fn clockwise_house_centroid() {
        let c = house().centroid().unwrap();
        assert!(c.x.abs() < 1e-12);
        assert!((c.y - 0.4).abs() < 1e-12);
    }

    #[test]
    fn house_area() {
        // triangle roof (4 * 1 / 2) + trapezoid body ((4 + 2) / 2 * 2)
        assert!((house().area().unwrap() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn reflex_vertex_rejected() {
        let err = Pentagon::new(p(0.0, 0.0), p(3.0, 0.0), p(3.0, 3.0), p(1.0, 1.0), p(0.0, 3.0))
            .unwrap_err();
        assert_eq!(err.violation(), Some(Violation::NotConvex { at: 3 }));
    }

    #[test]
    fn collinear_run_rejected() {
        let err = Pentagon::new(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(2.0, 1.0), p(0.0, 1.0))
            .unwrap_err();
        assert_eq!(err.violation(), Some(Violation::Collinear { at: 1 }));
    }

    #[test]
    fn coincident_vertices_rejected() {
        let err = Pentagon::new(p(0.0, 0.0), p(0.0, 0.0), p(2.0, 0.0), p(2.0, 1.0), p(0.0, 1.0))
            .unwrap_err();
        // the duplicated vertex already collapses the first turn
        assert!(matches!(err.violation(), Some(Violation::Collinear { .. })));
    }

    #[test]
    fn short_side_rejected() {
        // the first turn is still strictly convex, only the side is too short
        let err = Pentagon::new(
            p(0.0, 0.0),
            p(5e-10, 0.0),
            p(10.0, 10.0),
            p(0.0, 20.0),
            p(-10.0, 10.0),
        )
        .unwrap_err();
        assert_eq!(err.violation(), Some(Violation::ShortSide { at: 0 }));
    }

    #[test]
    fn duplicate_is_independent() {
        let original = house();
        let mut copy = original.duplicate();
        assert_eq!(copy, original);
        copy.set_vertex(0, p(0.0, 5.0)).unwrap();
        assert_ne!(copy, original);
        assert!(original.is_live());
        assert_eq!(original.vertex(0).unwrap(), p(0.0, 2.0));
    }

    #[test]
    fn text_round_trip() {
        let original = house();
        let text = original.to_string();
        assert_eq!(
            text,
            "Pentagon vertices: (0, 2) (2, 1) (1, -1) (-1, -1) (-2, 1) "
        );
        let numbers: String = text
            .trim_start_matches("Pentagon vertices:")
            .chars()
            .map(|c| if matches!(c, '(' | ')' | ',') { ' ' } else { c })
            .collect();
        let parsed: Pentagon = numbers.parse().unwrap();
        assert_eq!(parsed, original);
    }
}
