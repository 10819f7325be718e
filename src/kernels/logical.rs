// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Logical Operations Kernels Module** - *Boolean algebra on bitmasks*

use minarrow::Bitmask;

use crate::errors::{KernelError, log_length_mismatch};

/// Per-row OR of two equal-length bitmasks.
#[inline]
pub fn or_masks(lhs: &Bitmask, rhs: &Bitmask) -> Result<Bitmask, KernelError> {
    if lhs.len() != rhs.len() {
        return Err(KernelError::LengthMismatch(log_length_mismatch(
            "or_masks",
            lhs.len(),
            rhs.len(),
        )));
    }
    let len = lhs.len();
    let mut out = Bitmask::new_set_all(len, false);
    for i in 0..len {
        out.set(i, lhs.get(i) || rhs.get(i));
    }
    Ok(out)
}
