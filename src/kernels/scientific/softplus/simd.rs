// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Softplus SIMD Implementation**
//!
//! Lane-parallel stable softplus. Each block computes the same three candidates as the
//! scalar body under SIMD masks and selects per lane. Falls back to the scalar body for
//! unaligned input and for the tail.

include!(concat!(env!("OUT_DIR"), "/simd_lanes.rs"));

use std::simd::{Simd, StdFloat, cmp::SimdPartialOrd};

use minarrow::Vec64;

use super::std::softplus_scalar;
use crate::config::SOFTPLUS_THRESHOLD;
use crate::utils::is_simd_aligned;

macro_rules! impl_softplus_simd {
    ($fn_name:ident, $ty:ty, $lanes:expr) => {
        /// SIMD-accelerated stable softplus.
        #[inline(always)]
        pub fn $fn_name(x: &[$ty]) -> Vec64<$ty> {
            const N: usize = $lanes;
            let threshold = SOFTPLUS_THRESHOLD as $ty;
            let len = x.len();
            let mut out = Vec64::with_capacity(len);
            let mut i = 0;

            if is_simd_aligned(x) {
                let thr_v = Simd::<$ty, N>::splat(threshold);
                let neg_thr_v = Simd::<$ty, N>::splat(-threshold);
                let one_v = Simd::<$ty, N>::splat(1.0);

                while i + N <= len {
                    let x_v = Simd::<$ty, N>::from_slice(&x[i..i + N]);
                    let too_small = x_v.simd_lt(thr_v);
                    let too_large = x_v.simd_gt(neg_thr_v);
                    let too_small_value = x_v.exp();

                    let safe_x = (too_small | too_large).select(one_v, x_v);
                    let e = safe_x.exp();
                    // ln_1p(e) as ln(u) * e / (u - 1); u > 1 on the sanitised range
                    let u = one_v + e;
                    let y = u.ln() * e / (u - one_v);

                    let r = too_small.select(too_small_value, too_large.select(x_v, y));
                    out.extend_from_slice(r.as_array());
                    i += N;
                }
            }

            // Scalar tail, or full fallback when alignment check failed
            for &xi in &x[i..] {
                out.push(softplus_scalar(xi, threshold));
            }
            out
        }
    };
}

impl_softplus_simd!(softplus_f32_simd, f32, W32);
impl_softplus_simd!(softplus_f64_simd, f64, W64);
