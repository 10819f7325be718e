// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Validation and alignment helpers*
//!
//! Eager argument checks shared by the kernels and the distribution, plus the
//! alignment probe the SIMD bodies use to pick their fast path.

use num_traits::Float;

use crate::errors::KernelError;
use crate::tensor::shape::checked_numel;

/// Validates that two lengths match before an elementwise kernel runs.
#[inline(always)]
pub fn confirm_equal_len(label: &str, a: usize, b: usize) -> Result<(), KernelError> {
    if a != b {
        return Err(KernelError::LengthMismatch(format!(
            "{}: length mismatch (lhs: {}, rhs: {})",
            label, a, b
        )));
    }
    Ok(())
}

/// Validates that a buffer holds exactly the number of elements its shape describes.
#[inline(always)]
pub fn confirm_capacity(label: &str, actual: usize, expected: usize) -> Result<(), KernelError> {
    if actual != expected {
        return Err(KernelError::ShapeMismatch(format!(
            "{}: capacity mismatch (expected {}, got {})",
            label, expected, actual
        )));
    }
    Ok(())
}

/// Every element is finite (not `NaN`, not `±inf`).
pub fn confirm_finite<T: Float>(label: &str, values: &[T]) -> Result<(), KernelError> {
    if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
        return Err(KernelError::InvalidArguments(format!(
            "{}: element {} is not finite",
            label, pos
        )));
    }
    Ok(())
}

/// Every element is finite and strictly greater than zero.
pub fn confirm_positive<T: Float>(label: &str, values: &[T]) -> Result<(), KernelError> {
    if let Some(pos) = values
        .iter()
        .position(|v| !(v.is_finite() && *v > T::zero()))
    {
        return Err(KernelError::InvalidArguments(format!(
            "{}: element {} must be finite and greater than zero",
            label, pos
        )));
    }
    Ok(())
}

/// Validates a requested sample shape and returns its element count.
pub fn confirm_sample_shape(shape: &[usize]) -> Result<usize, KernelError> {
    checked_numel(shape).ok_or_else(|| {
        KernelError::InvalidArguments(format!(
            "sample shape {:?}: element count overflows usize",
            shape
        ))
    })
}

/// SIMD Alignment check. Returns true if the slice is properly
/// 64-byte aligned for SIMD operations, false otherwise.
#[inline(always)]
pub fn is_simd_aligned<T>(slice: &[T]) -> bool {
    if slice.is_empty() {
        true
    } else {
        (slice.as_ptr() as usize) % 64 == 0
    }
}
