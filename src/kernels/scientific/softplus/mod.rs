// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Stable Softplus
//!
//! `softplus(x) = ln(1 + exp(x))`, a smooth approximation to `max(x, 0)` and the
//! workhorse behind the logistic log-density, log-CDF and log-survival functions.
//!
//! ## Regimes
//!
//! Inputs are classified against `t = ln(f32::EPSILON) + 1 ≈ -14.94`:
//! - **x < t**: `exp(x)`. `ln(1 + ε)` with a tiny `ε` is just `ε`.
//! - **x > -t**: `x`. Avoids overflow in `exp`.
//! - **otherwise**: `ln_1p(exp(x))` computed directly.
//!
//! The middle branch is evaluated on a sanitised copy of the input, with `1.0`
//! substituted wherever the element sits in either extreme regime. All three candidates
//! are then materialised over the whole slice and the result is selected per element.
//! The output is finite for every finite input.

#[cfg(feature = "simd")]
pub mod simd;
pub mod std;

use minarrow::Vec64;

use crate::errors::KernelError;
use crate::traits::float::KernelFloat;

/// Compute the numerically stable softplus `ln(1 + exp(x))` of every element.
///
/// Dispatches to the SIMD body when the `simd` feature is enabled and the input is
/// 64-byte aligned, otherwise runs the scalar body.
///
/// ## Examples
///
/// ```rust,ignore
/// use logistic_kernels::kernels::scientific::softplus::softplus;
///
/// let y = softplus(&[-100.0_f64, 0.0, 100.0]).unwrap();
/// // [3.7e-44, ln 2, 100.0]
/// ```
#[inline(always)]
pub fn softplus<T: KernelFloat>(x: &[T]) -> Result<Vec64<T>, KernelError> {
    T::softplus_kernel(x)
}
