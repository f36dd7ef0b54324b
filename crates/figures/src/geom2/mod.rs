//! Planar primitives shared by every shape validator.
//!
//! Purpose
//! - `Point`: a 2D coordinate with tolerance-based equality.
//! - `util`: distance, orientation (signed cross product), parallel and
//!   collinear predicates.
//!
//! All predicates use the single fixed tolerance `EPSILON`; there is no
//! per-call override.

mod cfg;
mod types;
mod util;

pub use cfg::EPSILON;
pub use types::Point;
pub use util::{are_collinear, are_parallel, cross_product, distance};
