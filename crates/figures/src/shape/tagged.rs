use std::fmt;

use crate::geom2::Point;

use super::{Pentagon, Polygon, Rhombus, ShapeError, ShapeKind, Trapezoid};

/// One shape of the closed family, tagged by kind.
///
/// All capability methods dispatch on the tag to the concrete type through
/// the `Polygon` trait. Equality compares tags first, then vertices, so a
/// trapezoid never equals a rhombus with the same coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Trapezoid(Trapezoid),
    Rhombus(Rhombus),
    Pentagon(Pentagon),
}

impl Shape {
    /// Empty shape of the given kind.
    pub fn empty(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Trapezoid => Self::Trapezoid(Trapezoid::empty()),
            ShapeKind::Rhombus => Self::Rhombus(Rhombus::empty()),
            ShapeKind::Pentagon => Self::Pentagon(Pentagon::empty()),
        }
    }

    /// Build a live shape of `kind` from `2 * kind.vertex_count()` tokens.
    pub fn read<'a>(
        kind: ShapeKind,
        tokens: &mut dyn Iterator<Item = &'a str>,
    ) -> Result<Self, ShapeError> {
        let mut shape = Self::empty(kind);
        shape.read_tokens(tokens)?;
        Ok(shape)
    }

    /// Parse a whole string of numbers as a shape of `kind`.
    pub fn parse(kind: ShapeKind, s: &str) -> Result<Self, ShapeError> {
        Ok(match kind {
            ShapeKind::Trapezoid => Self::Trapezoid(s.parse()?),
            ShapeKind::Rhombus => Self::Rhombus(s.parse()?),
            ShapeKind::Pentagon => Self::Pentagon(s.parse()?),
        })
    }

    pub fn as_polygon(&self) -> &dyn Polygon {
        match self {
            Self::Trapezoid(t) => t,
            Self::Rhombus(r) => r,
            Self::Pentagon(p) => p,
        }
    }

    pub fn as_polygon_mut(&mut self) -> &mut dyn Polygon {
        match self {
            Self::Trapezoid(t) => t,
            Self::Rhombus(r) => r,
            Self::Pentagon(p) => p,
        }
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.as_polygon().kind()
    }

    pub fn area(&self) -> Result<f64, ShapeError> {
        self.as_polygon().area()
    }

    pub fn centroid(&self) -> Result<Point, ShapeError> {
        self.as_polygon().centroid()
    }

    pub fn vertex_count(&self) -> usize {
        self.kind().vertex_count()
    }

    pub fn vertex(&self, index: usize) -> Result<Point, ShapeError> {
        self.as_polygon().vertex(index)
    }

    pub fn raw_vertices(&self) -> Option<&[Point]> {
        self.as_polygon().raw_vertices()
    }

    /// Unchecked single-vertex write; see `Polygon::set_vertex`.
    pub fn set_vertex(&mut self, index: usize, p: Point) -> Result<(), ShapeError> {
        self.as_polygon_mut().set_vertex(index, p)
    }

    pub fn revalidate(&mut self) -> Result<(), ShapeError> {
        self.as_polygon_mut().revalidate()
    }

    pub fn read_tokens<'a>(
        &mut self,
        tokens: &mut dyn Iterator<Item = &'a str>,
    ) -> Result<(), ShapeError> {
        self.as_polygon_mut().read_tokens(tokens)
    }

    pub fn clear(&mut self) {
        self.as_polygon_mut().clear()
    }

    pub fn is_live(&self) -> bool {
        self.as_polygon().is_live()
    }

    pub fn is_empty(&self) -> bool {
        self.as_polygon().is_empty()
    }

    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Move the vertex data into a new shape of the same kind, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        match self {
            Self::Trapezoid(t) => Self::Trapezoid(t.take()),
            Self::Rhombus(r) => Self::Rhombus(r.take()),
            Self::Pentagon(p) => Self::Pentagon(p.take()),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_polygon(), f)
    }
}

impl TryFrom<&Shape> for f64 {
    type Error = ShapeError;

    fn try_from(shape: &Shape) -> Result<Self, Self::Error> {
        shape.area()
    }
}

impl From<Trapezoid> for Shape {
    fn from(t: Trapezoid) -> Self {
        Self::Trapezoid(t)
    }
}

impl From<Rhombus> for Shape {
    fn from(r: Rhombus) -> Self {
        Self::Rhombus(r)
    }
}

impl From<Pentagon> for Shape {
    fn from(p: Pentagon) -> Self {
        Self::Pentagon(p)
    }
}
