//! Validated convex polygons: trapezoid, rhombus and pentagon.
//!
//! Layers (leaf first)
//! - `geom2`: `Point`, the fixed tolerance `EPSILON`, and the orientation /
//!   parallel / collinear predicates.
//! - `shape`: the three concrete shapes with their validators, the shared
//!   `Polygon` capability trait and the tagged `Shape` union.
//! - `collection`: `ShapeList`, an ordered list of owned shapes.
//! - `sample`: seeded generators of valid shapes (benches, property tests, CLI).
//!
//! Every public constructor and parser either returns a shape whose vertices
//! passed its validator or an error; no partially-built shape is observable.

pub mod collection;
pub mod geom2;
pub mod sample;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use collection::{ShapeList, TransferError};
pub use geom2::{Point, EPSILON};
pub use shape::{
    Pentagon, Polygon, Rhombus, Shape, ShapeError, ShapeKind, Trapezoid, Violation,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::collection::{ShapeList, TransferError};
    pub use crate::geom2::{are_collinear, are_parallel, cross_product, distance, Point, EPSILON};
    pub use crate::sample::{
        random_pentagon, random_rhombus, random_shape, random_trapezoid, SampleCfg,
    };
    pub use crate::shape::{
        Pentagon, Polygon, Rhombus, Shape, ShapeError, ShapeKind, Trapezoid, Violation,
    };
}
