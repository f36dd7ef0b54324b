//! Errors raised by shape construction, parsing and access.

use std::fmt;

use super::ShapeKind;

/// The invariant a candidate vertex set failed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Violation {
    /// Some coordinate is NaN or infinite.
    NonFinite,
    /// The turn at vertex `at` is degenerate (three consecutive points on a line).
    Collinear { at: usize },
    /// The turn at vertex `at` has the opposite orientation to the first turn.
    NotConvex { at: usize },
    /// Trapezoids need exactly one pair of parallel opposite sides.
    ParallelPairs { count: usize },
    UnequalSides,
    DiagonalsNotPerpendicular,
    /// Side starting at vertex `at` is shorter than the tolerance.
    ShortSide { at: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => write!(f, "coordinates must be finite"),
            Self::Collinear { at } => {
                write!(f, "three consecutive points are collinear (around vertex {at})")
            }
            Self::NotConvex { at } => write!(f, "polygon is not convex (at vertex {at})"),
            Self::ParallelPairs { count } => write!(
                f,
                "must have exactly one pair of parallel sides (found {count})"
            ),
            Self::UnequalSides => write!(f, "all sides must be equal"),
            Self::DiagonalsNotPerpendicular => write!(f, "diagonals are not perpendicular"),
            Self::ShortSide { at } => write!(f, "side length is too small (side {at})"),
        }
    }
}

/// Error type shared by all shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// Candidate vertices failed the shape's validator.
    Geometry { kind: ShapeKind, violation: Violation },
    /// Token stream did not yield the required numbers.
    Parse { kind: ShapeKind, reason: String },
    /// Vertex index outside `[0, len)`.
    Index { index: usize, len: usize },
    /// Operation needs vertex data but the shape is empty.
    Empty { kind: ShapeKind },
    /// Vertices were mutated without revalidation.
    Unvalidated { kind: ShapeKind },
}

impl ShapeError {
    pub(crate) fn parse(kind: ShapeKind, reason: impl Into<String>) -> Self {
        Self::Parse {
            kind,
            reason: reason.into(),
        }
    }

    /// The failed invariant, if this is a geometry error.
    pub fn violation(&self) -> Option<Violation> {
        match self {
            Self::Geometry { violation, .. } => Some(*violation),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry { kind, violation } => {
                write!(f, "invalid {}: {violation}", kind.label())
            }
            Self::Parse { kind, reason } => {
                write!(f, "failed to read {} vertices: {reason}", kind.label())
            }
            Self::Index { index, len } => {
                write!(f, "vertex index {index} out of range (0..{len})")
            }
            Self::Empty { kind } => write!(f, "{} has no vertices (moved-from state)", kind),
            Self::Unvalidated { kind } => write!(f, "{} was modified without revalidation", kind),
        }
    }
}

impl std::error::Error for ShapeError {}
