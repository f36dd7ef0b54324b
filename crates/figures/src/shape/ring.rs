//! Fixed-size vertex storage shared by the concrete shapes.
//!
//! A `Ring<N>` is the only place vertex data lives. Its state is explicit:
//! - `Empty`: nothing stored (fresh, cleared, or transferred away).
//! - `Live`: the vertices passed the owner's validator.
//! - `Unchecked`: vertices changed through `set` since the last validation.
//!
//! Validators are plain functions `fn(&[Point; N]) -> Result<(), Violation>`
//! supplied by the owning shape; the ring never decides geometry itself.

use std::fmt;

use crate::geom2::{are_collinear, cross_product, Point, EPSILON};

use super::{ShapeError, ShapeKind, Violation};

pub(crate) type Validator<const N: usize> = fn(&[Point; N]) -> Result<(), Violation>;

#[derive(Clone, Debug, Default)]
pub(crate) enum Ring<const N: usize> {
    #[default]
    Empty,
    Live([Point; N]),
    Unchecked([Point; N]),
}

impl<const N: usize> Ring<N> {
    /// Validate `pts` and build a live ring.
    pub(crate) fn validated(
        kind: ShapeKind,
        pts: [Point; N],
        validate: Validator<N>,
    ) -> Result<Self, ShapeError> {
        match validate(&pts) {
            Ok(()) => Ok(Self::Live(pts)),
            Err(violation) => {
                tracing::debug!(%kind, %violation, "rejected candidate vertices");
                Err(ShapeError::Geometry { kind, violation })
            }
        }
    }

    #[inline]
    pub(crate) fn points(&self) -> Option<&[Point; N]> {
        match self {
            Self::Empty => None,
            Self::Live(p) | Self::Unchecked(p) => Some(p),
        }
    }

    /// Vertices that are known to satisfy the validator.
    pub(crate) fn checked(&self, kind: ShapeKind) -> Result<&[Point; N], ShapeError> {
        match self {
            Self::Live(p) => Ok(p),
            Self::Unchecked(_) => Err(ShapeError::Unvalidated { kind }),
            Self::Empty => Err(ShapeError::Empty { kind }),
        }
    }

    #[inline]
    pub(crate) fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    pub(crate) fn get(&self, kind: ShapeKind, index: usize) -> Result<Point, ShapeError> {
        if index >= N {
            return Err(ShapeError::Index { index, len: N });
        }
        self.points()
            .map(|p| p[index])
            .ok_or(ShapeError::Empty { kind })
    }

    /// Overwrite one vertex without validation; a live ring becomes unchecked.
    pub(crate) fn set(
        &mut self,
        kind: ShapeKind,
        index: usize,
        p: Point,
    ) -> Result<(), ShapeError> {
        if index >= N {
            return Err(ShapeError::Index { index, len: N });
        }
        let mut pts = *self.points().ok_or(ShapeError::Empty { kind })?;
        pts[index] = p;
        *self = Self::Unchecked(pts);
        Ok(())
    }

    /// Re-run `validate`; on failure the ring keeps its current state.
    pub(crate) fn revalidate(
        &mut self,
        kind: ShapeKind,
        validate: Validator<N>,
    ) -> Result<(), ShapeError> {
        let pts = *self.points().ok_or(ShapeError::Empty { kind })?;
        *self = Self::validated(kind, pts, validate)?;
        Ok(())
    }

    /// Parse `2 * N` numbers and validate them; the ring is only replaced on success.
    pub(crate) fn read_from<'a>(
        &mut self,
        kind: ShapeKind,
        tokens: &mut dyn Iterator<Item = &'a str>,
        validate: Validator<N>,
    ) -> Result<(), ShapeError> {
        let pts = read_points::<N>(kind, tokens)?;
        *self = Self::validated(kind, pts, validate)?;
        Ok(())
    }

    pub(crate) fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    pub(crate) fn same_vertices(&self, other: &Self) -> bool {
        match (self.points(), other.points()) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    pub(crate) fn write(&self, kind: ShapeKind, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.points() {
            None => write!(f, "{kind} (moved-from state)"),
            Some(pts) => {
                write!(f, "{kind} vertices: ")?;
                for p in pts {
                    write!(f, "{p} ")?;
                }
                Ok(())
            }
        }
    }
}

/// Read `N` points as `2 * N` whitespace tokens `x1 y1 x2 y2 ...`.
pub(crate) fn read_points<'a, const N: usize>(
    kind: ShapeKind,
    tokens: &mut dyn Iterator<Item = &'a str>,
) -> Result<[Point; N], ShapeError> {
    let mut pts = [Point::default(); N];
    for (i, slot) in pts.iter_mut().enumerate() {
        let x = next_coordinate(kind, tokens, 2 * i, 2 * N)?;
        let y = next_coordinate(kind, tokens, 2 * i + 1, 2 * N)?;
        *slot = Point::new(x, y);
    }
    Ok(pts)
}

/// Like `read_points`, but the whole string must be consumed.
pub(crate) fn parse_points<const N: usize>(
    kind: ShapeKind,
    s: &str,
) -> Result<[Point; N], ShapeError> {
    let mut tokens = s.split_whitespace();
    let pts = read_points::<N>(kind, &mut tokens)?;
    let extra = tokens.count();
    if extra > 0 {
        return Err(ShapeError::parse(
            kind,
            format!("expected {} numbers, got {} trailing token(s)", 2 * N, extra),
        ));
    }
    Ok(pts)
}

fn next_coordinate<'a>(
    kind: ShapeKind,
    tokens: &mut dyn Iterator<Item = &'a str>,
    position: usize,
    expected: usize,
) -> Result<f64, ShapeError> {
    let token = tokens.next().ok_or_else(|| {
        ShapeError::parse(kind, format!("expected {expected} numbers, got {position}"))
    })?;
    let value: f64 = token
        .parse()
        .map_err(|_| ShapeError::parse(kind, format!("{token:?} is not a number")))?;
    if !value.is_finite() {
        return Err(ShapeError::parse(
            kind,
            format!("{token:?} is not a finite number"),
        ));
    }
    Ok(value)
}

/// Shoelace formula: `|Σ (x_i y_{i+1} - x_{i+1} y_i)| / 2`.
pub(crate) fn shoelace_area(pts: &[Point]) -> f64 {
    let n = pts.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let (a, b) = (pts[i], pts[(i + 1) % n]);
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice.abs() / 2.0
}

/// Arithmetic mean of the vertices (not the area centroid).
pub(crate) fn mean_point(pts: &[Point]) -> Point {
    let n = pts.len() as f64;
    let (sx, sy) = pts
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

pub(crate) fn check_finite(pts: &[Point]) -> Result<(), Violation> {
    if pts.iter().all(Point::is_finite) {
        Ok(())
    } else {
        Err(Violation::NonFinite)
    }
}

/// Reject any cyclic triplet `(i, i+1, i+2)` that is collinear.
pub(crate) fn check_no_collinear(pts: &[Point]) -> Result<(), Violation> {
    let n = pts.len();
    for i in 0..n {
        if are_collinear(pts[i], pts[(i + 1) % n], pts[(i + 2) % n]) {
            return Err(Violation::Collinear { at: (i + 1) % n });
        }
    }
    Ok(())
}

/// All cyclic turns must be non-degenerate and share the orientation of the first one.
///
/// A negligible cross product is reported as `Collinear` before orientation
/// is compared, triplet by triplet.
pub(crate) fn check_convex_turns(pts: &[Point]) -> Result<(), Violation> {
    let n = pts.len();
    let mut orientation = 0.0;
    for i in 0..n {
        let at = (i + 1) % n;
        let cross = cross_product(pts[i], pts[at], pts[(i + 2) % n]);
        if cross.abs() < EPSILON {
            return Err(Violation::Collinear { at });
        }
        if orientation == 0.0 {
            orientation = cross.signum();
        } else if cross.signum() != orientation {
            return Err(Violation::NotConvex { at });
        }
    }
    Ok(())
}
