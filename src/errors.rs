// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel Operation Error Handling*
//!
//! Error types for kernel and distribution operations with structured error reporting.
//!
//! ## Error Categories
//! - **Type Errors**: values that cannot be represented in the working float type
//! - **Length and Shape Errors**: operand lengths that differ, or shapes that do not broadcast
//! - **Argument Errors**: invalid parameters such as a non-positive scale
//! - **Missing Parameters**: a distribution built without `loc`/`scale` and called without overrides
//! - **Boundary Errors**: out-of-bounds axis or index access
//!
//! Every error is raised eagerly, before any arithmetic, and indicates caller misuse.
//! None of them is transient, so there is nothing to retry.

use core::fmt;
use std::error::Error;

/// Error type for all kernel and distribution operations.
///
/// Each variant includes a contextual message string providing specific details
/// about the error condition.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// A value could not be cast to the working element type.
    TypeMismatch(String),

    /// Slice length mismatch between operands.
    LengthMismatch(String),

    /// Tensor shapes are not mutually broadcastable, or a buffer does not match its shape.
    ShapeMismatch(String),

    /// Invalid arguments provided to a kernel or distribution.
    InvalidArguments(String),

    /// A distribution parameter was neither stored nor supplied at the call site.
    MissingParameter(String),

    /// Axis or index access out of bounds.
    OutOfBounds(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::TypeMismatch(msg) => write!(f, "Type mismatch: {}", msg),
            KernelError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
            KernelError::ShapeMismatch(msg) => write!(f, "Shape mismatch: {}", msg),
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            KernelError::MissingParameter(msg) => write!(f, "Missing parameter: {}", msg),
            KernelError::OutOfBounds(msg) => write!(f, "Out of bounds: {}", msg),
        }
    }
}

impl Error for KernelError {}

/// Creates a formatted error message for length mismatches between left-hand side (LHS) and right-hand side (RHS) slices.
///
/// # Arguments
/// * `fname` - Function name where the mismatch occurred
/// * `lhs` - Length of the left-hand side slice
/// * `rhs` - Length of the right-hand side slice
pub fn log_length_mismatch(fname: &str, lhs: usize, rhs: usize) -> String {
    format!("{} => Length mismatch: LHS {} RHS {}", fname, lhs, rhs)
}

/// Creates a formatted error message for shapes that cannot be broadcast together.
pub fn log_shape_mismatch(fname: &str, lhs: &[usize], rhs: &[usize]) -> String {
    format!(
        "{} => shapes {:?} and {:?} cannot be broadcast together",
        fname, lhs, rhs
    )
}
