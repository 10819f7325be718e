// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Statistical Distributions Module** - *Numerically stable distribution objects*
//!
//! Distribution objects over broadcastable tensors. Each exposes its log-density, CDF and
//! survival family, closed-form summary statistics and reparameterised sampling.
//!
//! ### Null Value Philosophy
//! Rather than assume, we choose to recognise inf and NaN as valid float values
//! in `value` tensors, leaving it to the user to subsequently treat them as nulls if
//! they wish. Parameters are different: `loc` must be finite and `scale` finite and
//! strictly positive, and both are checked eagerly.
//!
//! ## Disclaimer
//! This implementation is provided on a best-effort basis and is intended for
//! general scientific and engineering use. Results may differ from other libraries
//! due to platform, compiler, or implementation differences. Users are responsible
//! for independently verifying that these functions meet their accuracy and
//! reliability requirements.

/// # **Shared Distribution Utilities**
///
/// - **`sampler`**: Explicit, optionally seeded uniform generator state
pub mod shared {
    pub mod sampler;
}

/// # **Univariate Distributions** - *Single-Variable Probability Distributions*
///
/// - **Continuous**: logistic
pub mod univariate {
    pub mod logistic;
}
