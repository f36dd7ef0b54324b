use std::fmt;

use crate::geom2::Point;

use super::ring::{mean_point, shoelace_area};
use super::{ShapeError, ShapeKind};

/// Capabilities every concrete shape provides.
///
/// Required methods expose the vertex storage; `area` and `centroid` are
/// derived from the validated vertices and fail on empty or unchecked shapes.
/// `Display` is the text serialization.
pub trait Polygon: fmt::Display {
    fn kind(&self) -> ShapeKind;

    /// Vertices that passed validation.
    fn vertices(&self) -> Result<&[Point], ShapeError>;

    /// Stored vertices regardless of validation (`None` when empty).
    fn raw_vertices(&self) -> Option<&[Point]>;

    fn vertex(&self, index: usize) -> Result<Point, ShapeError>;

    /// Overwrite one vertex without running the validator.
    ///
    /// Post: the shape reports `is_live() == false` until `revalidate` succeeds.
    fn set_vertex(&mut self, index: usize, p: Point) -> Result<(), ShapeError>;

    /// Run the validator on the stored vertices.
    fn revalidate(&mut self) -> Result<(), ShapeError>;

    /// Read `2 * vertex_count()` numbers and validate them.
    ///
    /// Post: on error the shape is unchanged.
    fn read_tokens<'a>(
        &mut self,
        tokens: &mut dyn Iterator<Item = &'a str>,
    ) -> Result<(), ShapeError>;

    /// Drop the vertices (back to the empty state).
    fn clear(&mut self);

    fn is_live(&self) -> bool;

    #[inline]
    fn vertex_count(&self) -> usize {
        self.kind().vertex_count()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.raw_vertices().is_none()
    }

    fn area(&self) -> Result<f64, ShapeError> {
        self.vertices().map(shoelace_area)
    }

    /// Arithmetic mean of the vertices.
    fn centroid(&self) -> Result<Point, ShapeError> {
        self.vertices().map(mean_point)
    }
}
