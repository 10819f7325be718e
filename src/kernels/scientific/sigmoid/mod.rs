// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Logistic Sigmoid
//!
//! `sigmoid(z) = 1 / (1 + exp(-z))`, the CDF of the standard logistic distribution.
//! Evaluated on the branch where `exp` can only shrink, so neither tail overflows:
//! `1 / (1 + e^{-z})` for `z ≥ 0` and `e^{z} / (1 + e^{z})` for `z < 0`.

#[cfg(feature = "simd")]
pub mod simd;
pub mod std;

use minarrow::Vec64;

use crate::traits::float::KernelFloat;

/// Compute the logistic sigmoid of every element.
#[inline(always)]
pub fn sigmoid<T: KernelFloat>(x: &[T]) -> Vec64<T> {
    T::sigmoid_kernel(x)
}
