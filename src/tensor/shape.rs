// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Shape Utilities** - *Broadcasting and row-major indexing*
//!
//! Shapes are plain `&[usize]` slices in row-major order. An empty shape is a scalar.
//! Broadcasting aligns trailing dimensions and expands size-1 dimensions.

use crate::errors::{KernelError, log_shape_mismatch};

/// Number of elements described by `shape`, or `None` on overflow.
///
/// Any zero-sized dimension makes the count zero, however large the others are.
#[inline]
pub fn checked_numel(shape: &[usize]) -> Option<usize> {
    if shape.contains(&0) {
        return Some(0);
    }
    shape.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
}

/// Broadcast shape of `lhs` and `rhs`.
///
/// Dimensions are aligned from the right. Each aligned pair must be equal, or one of
/// them must be 1.
pub fn broadcast_shape(lhs: &[usize], rhs: &[usize]) -> Result<Vec<usize>, KernelError> {
    let ndim = lhs.len().max(rhs.len());
    let lhs_offset = ndim - lhs.len();
    let rhs_offset = ndim - rhs.len();
    let mut shape = Vec::with_capacity(ndim);

    for i in 0..ndim {
        let l = if i >= lhs_offset { lhs[i - lhs_offset] } else { 1 };
        let r = if i >= rhs_offset { rhs[i - rhs_offset] } else { 1 };
        let d = match (l, r) {
            (a, b) if a == b => a,
            (1, b) => b,
            (a, 1) => a,
            _ => {
                return Err(KernelError::ShapeMismatch(log_shape_mismatch(
                    "broadcast_shape",
                    lhs,
                    rhs,
                )));
            }
        };
        shape.push(d);
    }
    Ok(shape)
}

/// Row-major strides for a contiguous buffer of the given shape.
pub fn row_major_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![0usize; shape.len()];
    let mut acc = 1usize;
    for i in (0..shape.len()).rev() {
        strides[i] = acc;
        // Saturates only for zero-sized shapes, where no stride is ever used
        acc = acc.saturating_mul(shape[i]);
    }
    strides
}

/// Maps flat indices of a broadcast output back onto a source buffer.
///
/// Source dimensions that were expanded (missing or of size 1) get a zero stride,
/// so every output coordinate along them reads the same source element.
#[derive(Debug, Clone)]
pub struct BroadcastIndexer {
    out_shape: Vec<usize>,
    strides: Vec<usize>,
}

impl BroadcastIndexer {
    /// Builds an indexer reading a `src_shape` buffer as if it had `out_shape`.
    ///
    /// `out_shape` must already be a broadcast of `src_shape`.
    pub fn new(src_shape: &[usize], out_shape: &[usize]) -> Result<Self, KernelError> {
        if src_shape.len() > out_shape.len() {
            return Err(KernelError::ShapeMismatch(log_shape_mismatch(
                "BroadcastIndexer",
                src_shape,
                out_shape,
            )));
        }
        let offset = out_shape.len() - src_shape.len();
        let raw = row_major_strides(src_shape);
        let mut strides = vec![0usize; out_shape.len()];
        for i in offset..out_shape.len() {
            let s = src_shape[i - offset];
            let o = out_shape[i];
            if s == o {
                strides[i] = raw[i - offset];
            } else if s != 1 {
                return Err(KernelError::ShapeMismatch(log_shape_mismatch(
                    "BroadcastIndexer",
                    src_shape,
                    out_shape,
                )));
            }
        }
        Ok(Self {
            out_shape: out_shape.to_vec(),
            strides,
        })
    }

    /// Source offset of output element `flat`.
    #[inline]
    pub fn source_index(&self, flat: usize) -> usize {
        let mut remainder = flat;
        let mut idx = 0usize;
        for i in (0..self.out_shape.len()).rev() {
            let dim = self.out_shape[i];
            if dim == 0 {
                continue;
            }
            idx += (remainder % dim) * self.strides[i];
            remainder /= dim;
        }
        idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadcast_trailing_alignment() {
        assert_eq!(broadcast_shape(&[], &[]).unwrap(), Vec::<usize>::new());
        assert_eq!(broadcast_shape(&[3], &[]).unwrap(), vec![3]);
        assert_eq!(broadcast_shape(&[2, 1], &[3]).unwrap(), vec![2, 3]);
        assert_eq!(broadcast_shape(&[4, 1, 5], &[2, 1]).unwrap(), vec![4, 2, 5]);
        assert_eq!(broadcast_shape(&[0], &[1]).unwrap(), vec![0]);
    }

    #[test]
    fn broadcast_rejects_incompatible() {
        let err = broadcast_shape(&[2], &[3]).unwrap_err();
        assert!(matches!(err, KernelError::ShapeMismatch(_)));
        assert!(broadcast_shape(&[2, 3], &[3, 2]).is_err());
    }

    #[test]
    fn strides_row_major() {
        assert_eq!(row_major_strides(&[2, 3, 4]), vec![12, 4, 1]);
        assert_eq!(row_major_strides(&[]), Vec::<usize>::new());
    }

    #[test]
    fn numel_and_overflow() {
        assert_eq!(checked_numel(&[]), Some(1));
        assert_eq!(checked_numel(&[2, 3]), Some(6));
        assert_eq!(checked_numel(&[usize::MAX, 2]), None);
        assert_eq!(checked_numel(&[usize::MAX, 2, 0]), Some(0));
        assert_eq!(checked_numel(&[0, usize::MAX, 2]), Some(0));
    }

    #[test]
    fn zero_sized_shapes_broadcast_without_overflow() {
        let out = broadcast_shape(&[usize::MAX, 1, 0], &[2, 0]).unwrap();
        assert_eq!(out, vec![usize::MAX, 2, 0]);
        assert_eq!(checked_numel(&out), Some(0));
        let _ = row_major_strides(&[0, usize::MAX, 2]);
        assert!(BroadcastIndexer::new(&[usize::MAX, 1, 0], &out).is_ok());
    }

    #[test]
    fn indexer_repeats_expanded_dims() {
        // [3] read as [2, 3]
        let ix = BroadcastIndexer::new(&[3], &[2, 3]).unwrap();
        let got: Vec<usize> = (0..6).map(|i| ix.source_index(i)).collect();
        assert_eq!(got, vec![0, 1, 2, 0, 1, 2]);

        // [2, 1] read as [2, 3]
        let ix = BroadcastIndexer::new(&[2, 1], &[2, 3]).unwrap();
        let got: Vec<usize> = (0..6).map(|i| ix.source_index(i)).collect();
        assert_eq!(got, vec![0, 0, 0, 1, 1, 1]);

        // scalar read as [4]
        let ix = BroadcastIndexer::new(&[], &[4]).unwrap();
        assert!((0..4).all(|i| ix.source_index(i) == 0));
    }

    #[test]
    fn indexer_rejects_non_broadcast() {
        assert!(BroadcastIndexer::new(&[2], &[3]).is_err());
        assert!(BroadcastIndexer::new(&[2, 3], &[3]).is_err());
    }
}
