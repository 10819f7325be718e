// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

// At the time of writing this unlocks std::simd, which the developers
// intend on stabilising but haven't yet.
#![cfg_attr(feature = "simd", feature(portable_simd))]

// compile with RUSTFLAGS="-C target-cpu=native" cargo +nightly build --features simd

pub mod kernels {
    pub mod comparison;
    pub mod conditional;
    pub mod logical;
    pub mod unary;
    pub mod scientific {
        #[cfg(feature = "probability_distributions")]
        pub mod distributions;
        pub mod sigmoid;
        pub mod softplus;
    }
}

pub mod tensor;

pub mod traits {
    pub mod float;
}

pub mod config;

pub mod errors;

pub mod utils;

pub use errors::KernelError;
#[cfg(feature = "probability_distributions")]
pub use kernels::scientific::distributions::shared::sampler::Sampler;
#[cfg(feature = "probability_distributions")]
pub use kernels::scientific::distributions::univariate::logistic::Logistic;
pub use tensor::Tensor;
pub use traits::float::{DType, KernelFloat};
