//! Validated convex shapes: trapezoid, rhombus, pentagon.
//!
//! Purpose
//! - Each concrete shape owns a fixed-size vertex ring and its own validator.
//!   Construction and parsing only ever yield shapes whose vertices passed it.
//! - `Polygon` is the shared capability set (area, centroid, vertex access,
//!   parse, reset); `Shape` is the closed tagged union used by collections.
//!
//! State model
//! - Empty: no vertices. Only `Display` (placeholder) and reassignment work.
//! - Live: validated vertices.
//! - Unchecked: a vertex was overwritten via `set_vertex`; `area`/`centroid`
//!   fail with `ShapeError::Unvalidated` until `revalidate` succeeds.
//!
//! A failed `read_tokens`/`revalidate` never changes the stored vertices.

mod error;
mod kind;
pub mod pentagon;
mod polygon;
pub mod rhombus;
mod ring;
mod tagged;
pub mod trapezoid;

pub use error::{ShapeError, Violation};
pub use kind::{ShapeKind, UnknownKind};
pub use pentagon::Pentagon;
pub use polygon::Polygon;
pub use rhombus::Rhombus;
pub use tagged::Shape;
pub use trapezoid::Trapezoid;
