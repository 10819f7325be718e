// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Sigmoid SIMD Implementation**

include!(concat!(env!("OUT_DIR"), "/simd_lanes.rs"));

use std::simd::{Simd, StdFloat, cmp::SimdPartialOrd, num::SimdFloat};

use minarrow::Vec64;

use super::std::sigmoid_scalar;
use crate::utils::is_simd_aligned;

macro_rules! impl_sigmoid_simd {
    ($fn_name:ident, $ty:ty, $lanes:expr) => {
        /// SIMD-accelerated logistic sigmoid.
        #[inline(always)]
        pub fn $fn_name(x: &[$ty]) -> Vec64<$ty> {
            const N: usize = $lanes;
            let len = x.len();
            let mut out = Vec64::with_capacity(len);
            let mut i = 0;

            if is_simd_aligned(x) {
                let zero_v = Simd::<$ty, N>::splat(0.0);
                let one_v = Simd::<$ty, N>::splat(1.0);
                while i + N <= len {
                    let z = Simd::<$ty, N>::from_slice(&x[i..i + N]);
                    // e^{-|z|} never overflows
                    let e = (-z.abs()).exp();
                    let pos = one_v / (one_v + e);
                    let neg = e / (one_v + e);
                    let r = z.simd_ge(zero_v).select(pos, neg);
                    out.extend_from_slice(r.as_array());
                    i += N;
                }
            }

            for &zi in &x[i..] {
                out.push(sigmoid_scalar(zi));
            }
            out
        }
    };
}

impl_sigmoid_simd!(sigmoid_f32_simd, f32, W32);
impl_sigmoid_simd!(sigmoid_f64_simd, f64, W64);
