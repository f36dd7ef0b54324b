//! Ordered, exclusively-owned list of heterogeneous shapes.
//!
//! Indices are stable until a removal shifts later entries down by one.
//! Out-of-range removal is a no-op, not an error.

use std::fmt;

use crate::shape::{Shape, ShapeError, ShapeKind};

/// Why a slot-to-slot transfer was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferError {
    OutOfRange { index: usize, len: usize },
    KindMismatch { src: ShapeKind, dst: ShapeKind },
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range (0..{len})")
            }
            Self::KindMismatch { src, dst } => {
                write!(f, "cannot move a {src} into a {dst}")
            }
        }
    }
}

impl std::error::Error for TransferError {}

#[derive(Clone, Debug, Default)]
pub struct ShapeList {
    shapes: Vec<Shape>,
}

impl ShapeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Remove and return the shape at `index`; `None` (and no change) if out of range.
    pub fn remove(&mut self, index: usize) -> Option<Shape> {
        if index < self.shapes.len() {
            Some(self.shapes.remove(index))
        } else {
            tracing::debug!(index, len = self.shapes.len(), "remove ignored");
            None
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    pub fn as_slice(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    /// Sum of `area()` over all non-empty members.
    ///
    /// Empty (moved-from) members contribute nothing; a member modified
    /// without revalidation makes the sum fail.
    pub fn total_area(&self) -> Result<f64, ShapeError> {
        self.shapes
            .iter()
            .filter(|s| !s.is_empty())
            .map(Shape::area)
            .sum()
    }

    /// Independent copy of the shape at `index`.
    pub fn duplicate(&self, index: usize) -> Option<Shape> {
        self.get(index).map(Shape::duplicate)
    }

    /// Structural equality of two slots; `None` if either index is out of range.
    pub fn compare(&self, i: usize, j: usize) -> Option<bool> {
        Some(self.get(i)? == self.get(j)?)
    }

    /// Move the vertex data of `src` into `dst`, leaving `src` empty.
    ///
    /// Only same-kind transfers are allowed. `src == dst` is a no-op.
    pub fn transfer(&mut self, src: usize, dst: usize) -> Result<(), TransferError> {
        let len = self.shapes.len();
        for index in [src, dst] {
            if index >= len {
                return Err(TransferError::OutOfRange { index, len });
            }
        }
        let (src_kind, dst_kind) = (self.shapes[src].kind(), self.shapes[dst].kind());
        if src_kind != dst_kind {
            tracing::debug!(%src_kind, %dst_kind, "transfer rejected");
            return Err(TransferError::KindMismatch {
                src: src_kind,
                dst: dst_kind,
            });
        }
        if src != dst {
            let moved = self.shapes[src].take();
            self.shapes[dst] = moved;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ShapeList {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

impl FromIterator<Shape> for ShapeList {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self {
            shapes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> ShapeList {
        [
            (ShapeKind::Trapezoid, "0 0 4 0 3 2 1 2"),
            (ShapeKind::Rhombus, "0 2 2 0 0 -2 -2 0"),
            (ShapeKind::Pentagon, "0 2 2 1 1 -1 -1 -1 -2 1"),
            (ShapeKind::Trapezoid, "0 0 5 0 4 3 1 3"),
        ]
        .into_iter()
        .map(|(k, s)| Shape::parse(k, s).unwrap())
        .collect()
    }

    #[test]
    fn total_area_sums_members() {
        let list = sample_list();
        assert!((list.total_area().unwrap() - (6.0 + 8.0 + 8.0 + 12.0)).abs() < 1e-9);
        assert_eq!(ShapeList::new().total_area().unwrap(), 0.0);
    }

    #[test]
    fn remove_shifts_and_ignores_out_of_range() {
        let mut list = sample_list();
        assert!(list.remove(10).is_none());
        assert_eq!(list.len(), 4);
        let removed = list.remove(1).unwrap();
        assert_eq!(removed.kind(), ShapeKind::Rhombus);
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(1).unwrap().kind(), ShapeKind::Pentagon);
    }

    #[test]
    fn transfer_same_kind_empties_source() {
        let mut list = sample_list();
        let expected = list.duplicate(0).unwrap();
        list.transfer(0, 3).unwrap();
        assert!(list.get(0).unwrap().is_empty());
        assert_eq!(list.get(3).unwrap(), &expected);
        // empty source no longer counts toward the total
        assert!((list.total_area().unwrap() - (8.0 + 8.0 + 6.0)).abs() < 1e-9);
    }

    #[test]
    fn transfer_rejects_mixed_kinds_and_bad_indices() {
        let mut list = sample_list();
        let before = list.clone();
        assert_eq!(
            list.transfer(0, 1),
            Err(TransferError::KindMismatch {
                src: ShapeKind::Trapezoid,
                dst: ShapeKind::Rhombus
            })
        );
        assert_eq!(
            list.transfer(0, 7),
            Err(TransferError::OutOfRange { index: 7, len: 4 })
        );
        assert!(list.iter().zip(before.iter()).all(|(a, b)| a == b));
    }

    #[test]
    fn transfer_onto_itself_is_noop() {
        let mut list = sample_list();
        list.transfer(2, 2).unwrap();
        assert!(list.get(2).unwrap().is_live());
    }

    #[test]
    fn compare_and_duplicate() {
        let mut list = sample_list();
        let copy = list.duplicate(2).unwrap();
        list.push(copy);
        assert_eq!(list.compare(2, 4), Some(true));
        assert_eq!(list.compare(0, 3), Some(false));
        assert_eq!(list.compare(0, 9), None);
    }

    #[test]
    fn unchecked_member_fails_total() {
        let mut list = sample_list();
        list.get_mut(1)
            .unwrap()
            .set_vertex(0, crate::geom2::Point::new(0.0, 2.5))
            .unwrap();
        assert!(matches!(
            list.total_area(),
            Err(ShapeError::Unvalidated { kind: ShapeKind::Rhombus })
        ));
    }
}
