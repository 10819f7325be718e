// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Comparison Kernels Module** - *Elementwise predicates into bitmasks*
//!
//! Compares every element of a float slice against a scalar and packs the outcome into
//! a Minarrow `Bitmask` (bit set = predicate true). `NaN` never satisfies a comparison.

use minarrow::Bitmask;
use num_traits::Float;

/// Builds the Boolean result buffer.
/// `len` – number of rows that will be written.
#[inline(always)]
fn new_bool_buffer(len: usize) -> Bitmask {
    Bitmask::new_set_all(len, false)
}

#[inline(always)]
fn cmp_scalar<T, F>(x: &[T], pred: F) -> Bitmask
where
    T: Float,
    F: Fn(T) -> bool,
{
    let mut out = new_bool_buffer(x.len());
    for (i, &xi) in x.iter().enumerate() {
        if pred(xi) {
            out.set(i, true);
        }
    }
    out
}

/// `x < c` per element.
#[inline(always)]
pub fn lt_scalar<T: Float>(x: &[T], c: T) -> Bitmask {
    cmp_scalar(x, |v| v < c)
}

/// `x > c` per element.
#[inline(always)]
pub fn gt_scalar<T: Float>(x: &[T], c: T) -> Bitmask {
    cmp_scalar(x, |v| v > c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(mask: &Bitmask) -> Vec<bool> {
        (0..mask.len()).map(|i| mask.get(i)).collect()
    }

    #[test]
    fn lt_gt_scalar() {
        let x = [-2.0_f64, 0.0, 2.0, f64::NAN];
        assert_eq!(bits(&lt_scalar(&x, 0.0)), vec![true, false, false, false]);
        assert_eq!(bits(&gt_scalar(&x, 0.0)), vec![false, false, true, false]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(lt_scalar::<f32>(&[], 1.0).len(), 0);
    }
}
