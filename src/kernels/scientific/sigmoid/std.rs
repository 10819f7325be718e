// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::Vec64;
use num_traits::Float;

use crate::kernels::unary::map_dense;

/// Sigmoid of a single value, choosing the non-overflowing form by sign.
#[inline(always)]
pub fn sigmoid_scalar<T: Float>(z: T) -> T {
    if z >= T::zero() {
        T::one() / (T::one() + (-z).exp())
    } else {
        let e = z.exp();
        e / (T::one() + e)
    }
}

/// Sigmoid over a slice.
#[inline(always)]
pub fn sigmoid_std<T: Float>(x: &[T]) -> Vec64<T> {
    map_dense(x, sigmoid_scalar)
}
