// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Sampler** - *Explicit uniform generator state*
//!
//! Owns the pseudorandom generator used by distribution sampling. State is never
//! hidden in a process-wide global: callers either seed it for reproducible draws or
//! take OS entropy, and pass it by `&mut` into each `sample` call.

use minarrow::Vec64;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::errors::KernelError;
use crate::tensor::Tensor;
use crate::traits::float::KernelFloat;
use crate::utils::confirm_sample_shape;

/// Uniform random source backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
    seed: Option<u64>,
}

impl Sampler {
    /// Sampler seeded from operating-system entropy. Draws are not reproducible.
    #[inline]
    pub fn new() -> Self {
        log::debug!("Sampler::new: seeding from OS entropy");
        Sampler {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// Sampler with a fixed seed. Equal seeds give equal draw sequences.
    #[inline]
    pub fn seeded(seed: u64) -> Self {
        log::debug!("Sampler::seeded: seed = {}", seed);
        Sampler {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// `seeded` when a seed is given, else `new`.
    #[inline]
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::new(),
        }
    }

    /// Seed this sampler was created with, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Tensor of `shape` filled with draws from `Uniform[low, high)`.
    pub fn uniform<T: KernelFloat>(
        &mut self,
        shape: &[usize],
        low: T,
        high: T,
    ) -> Result<Tensor<T>, KernelError> {
        if !low.is_finite() || !high.is_finite() || !(low < high) {
            return Err(KernelError::InvalidArguments(format!(
                "uniform: require finite low < high, got low = {}, high = {}",
                low, high
            )));
        }
        let len = confirm_sample_shape(shape)?;
        let width = high - low;
        let mut data = Vec64::with_capacity(len);
        for _ in 0..len {
            let mut v = low + width * T::sample_unit(&mut self.rng);
            // Rounding can land exactly on `high` when `width` is large
            if v >= high {
                v = low;
            }
            data.push(v);
        }
        Tensor::from_vec64(data, shape.to_vec())
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}
