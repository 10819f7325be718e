// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Conditional Logic Kernels Module** - *Elementwise selection*
//!
//! IF-THEN-ELSE selection between two equal-length slices driven by a `Bitmask`.
//! Both candidate slices are fully materialised by the caller before selection, which is
//! what lets numerically unsafe branches be masked away instead of short-circuited.

use minarrow::{Bitmask, Vec64};

use crate::errors::{KernelError, log_length_mismatch};
use crate::utils::confirm_equal_len;

/// Conditional copy: element `i` comes from `then_data` where `cond[i]` is set, else from `else_data`.
#[inline(always)]
pub fn select<T: Copy>(
    cond: &Bitmask,
    then_data: &[T],
    else_data: &[T],
) -> Result<Vec64<T>, KernelError> {
    let len = cond.len();
    confirm_equal_len("select: then_data", len, then_data.len())?;
    if else_data.len() != len {
        return Err(KernelError::LengthMismatch(log_length_mismatch(
            "select: else_data",
            len,
            else_data.len(),
        )));
    }

    let mut data = Vec64::with_capacity(len);
    for i in 0..len {
        data.push(if cond.get(i) {
            then_data[i]
        } else {
            else_data[i]
        });
    }
    Ok(data)
}
