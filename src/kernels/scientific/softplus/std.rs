// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::Vec64;
use num_traits::Float;

use crate::config::SOFTPLUS_THRESHOLD;
use crate::errors::KernelError;
use crate::kernels::comparison::{gt_scalar, lt_scalar};
use crate::kernels::conditional::select;
use crate::kernels::logical::or_masks;
use crate::kernels::unary::{exp, fill, ln_1p};
use crate::traits::float::KernelFloat;

/// Stable softplus over a slice, built from the elementwise primitives.
///
/// Classify, sanitise, evaluate every candidate over the full slice, then select.
/// `exp` is only ever evaluated on the sanitised input for the middle branch.
#[inline(always)]
pub fn softplus_std<T: KernelFloat>(x: &[T]) -> Result<Vec64<T>, KernelError> {
    let threshold = T::from_f64(SOFTPLUS_THRESHOLD);

    let too_small = lt_scalar(x, threshold);
    let too_large = gt_scalar(x, -threshold);
    let too_small_value = exp(x);

    let ones = fill(x.len(), T::one());
    let extreme = or_masks(&too_small, &too_large)?;
    let safe_x = select(&extreme, &ones, x)?;
    let y = ln_1p(&exp(&safe_x));

    let inner = select(&too_large, x, &y)?;
    select(&too_small, &too_small_value, &inner)
}

/// Single-element softplus with the same branch structure as [`softplus_std`].
///
/// Used for SIMD tails and unaligned fallbacks.
#[inline(always)]
pub fn softplus_scalar<T: Float>(x: T, threshold: T) -> T {
    let too_small = x < threshold;
    let too_large = x > -threshold;
    let safe_x = if too_small || too_large { T::one() } else { x };
    let y = safe_x.exp().ln_1p();
    if too_small {
        x.exp()
    } else if too_large {
        x
    } else {
        y
    }
}
