// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Runtime Behaviour Parameters*
//!
//! Global configuration constants controlling kernel behaviour.
//! These values are compile-time constants and are never recomputed per call.

/// Regime boundary for the stable softplus: `ln(f32::EPSILON) + 1 ≈ -14.94`.
///
/// Inputs below this value take the `exp(x)` branch and inputs above its negation
/// take the identity branch. Derived from the single precision epsilon for every
/// working type, so `f32` and `f64` kernels classify inputs identically.
pub const SOFTPLUS_THRESHOLD: f64 = -14.942385152878742;

/// Name given to a logistic distribution unless one is supplied with `with_name`.
pub const DEFAULT_DISTRIBUTION_NAME: &str = "Logistic";
