//! Tolerance for 2D predicates.
//!
//! Policy
//! - One fixed constant for equality, near-zero and length tests. Adjusting it
//!   changes which shapes are accepted, so it is not exposed as a knob.

/// Absolute tolerance for point equality, collinearity, parallelism, side
/// equality and diagonal perpendicularity.
pub const EPSILON: f64 = 1e-9;
