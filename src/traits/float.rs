// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **KernelFloat trait** - *Working element types for the logistic kernels*

use core::fmt;

use minarrow::Vec64;
use num_traits::{Float, FloatConst, NumCast};
use rand::Rng;

use crate::errors::KernelError;
use crate::kernels::scientific::sigmoid;
use crate::kernels::scientific::softplus;

/// Floating-point element kind of a tensor or distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    Float32,
    Float64,
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::Float32 => write!(f, "float32"),
            DType::Float64 => write!(f, "float64"),
        }
    }
}

/// Floating-point types the distribution kernels can work in.
///
/// Implemented for `f32` and `f64` only, so asking for a logistic distribution over
/// an integer or other non-float element type fails at compile time.
///
/// Besides the type tag and constants, the trait routes the fused elementwise kernels
/// to the SIMD body when the `simd` feature is on and to the scalar body otherwise.
pub trait KernelFloat:
    Float + FloatConst + NumCast + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Type tag of the working type.
    const DTYPE: DType;

    /// Smallest positive normal value of the type.
    const TINY: Self;

    /// Draws one value uniformly from `[0, 1)`.
    fn sample_unit<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Stable `ln(1 + exp(x))` over a slice.
    fn softplus_kernel(x: &[Self]) -> Result<Vec64<Self>, KernelError>;

    /// Branch-stable logistic sigmoid over a slice.
    fn sigmoid_kernel(x: &[Self]) -> Vec64<Self>;

    /// Lossless or rounding conversion from an `f64` constant.
    #[inline(always)]
    fn from_f64(v: f64) -> Self {
        <Self as NumCast>::from(v).unwrap_or_else(Self::nan)
    }
}

macro_rules! impl_kernel_float {
    ($ty:ty, $dtype:expr, $softplus_simd:ident, $sigmoid_simd:ident) => {
        impl KernelFloat for $ty {
            const DTYPE: DType = $dtype;
            const TINY: Self = <$ty>::MIN_POSITIVE;

            #[inline(always)]
            fn sample_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
                rng.random::<$ty>()
            }

            #[inline(always)]
            fn softplus_kernel(x: &[Self]) -> Result<Vec64<Self>, KernelError> {
                #[cfg(feature = "simd")]
                {
                    Ok(softplus::simd::$softplus_simd(x))
                }

                #[cfg(not(feature = "simd"))]
                {
                    softplus::std::softplus_std(x)
                }
            }

            #[inline(always)]
            fn sigmoid_kernel(x: &[Self]) -> Vec64<Self> {
                #[cfg(feature = "simd")]
                {
                    sigmoid::simd::$sigmoid_simd(x)
                }

                #[cfg(not(feature = "simd"))]
                {
                    sigmoid::std::sigmoid_std(x)
                }
            }
        }
    };
}

impl_kernel_float!(f32, DType::Float32, softplus_f32_simd, sigmoid_f32_simd);
impl_kernel_float!(f64, DType::Float64, softplus_f64_simd, sigmoid_f64_simd);
