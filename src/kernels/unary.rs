// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Unary Operations Kernels Module** - *Single-Slice Elementwise Transformations*
//!
//! Elementwise numeric primitives over dense float slices, returning freshly allocated
//! 64-byte aligned buffers. These are the building blocks the stable softplus and the
//! logistic distribution are composed from.
//!
//! Non-finite results (`NaN`, `±inf`) are kept verbatim; the caller decides whether they
//! carry information.

use minarrow::Vec64;
use num_traits::Float;

/// Applies `f` to every element of `x`.
#[inline(always)]
pub fn map_dense<T, U, F>(x: &[T], f: F) -> Vec64<U>
where
    T: Copy,
    F: Fn(T) -> U,
{
    let mut out = Vec64::with_capacity(x.len());
    for &xi in x {
        out.push(f(xi));
    }
    out
}

/// Buffer of `len` copies of `value`.
#[inline(always)]
pub fn fill<T: Copy>(len: usize, value: T) -> Vec64<T> {
    let mut out = Vec64::with_capacity(len);
    for _ in 0..len {
        out.push(value);
    }
    out
}

/// `exp(x)`
#[inline(always)]
pub fn exp<T: Float>(x: &[T]) -> Vec64<T> {
    map_dense(x, |v| v.exp())
}

/// Natural logarithm `ln(x)`.
#[inline(always)]
pub fn ln<T: Float>(x: &[T]) -> Vec64<T> {
    map_dense(x, |v| v.ln())
}

/// `ln(1 + x)`, accurate for `|x|` near zero.
#[inline(always)]
pub fn ln_1p<T: Float>(x: &[T]) -> Vec64<T> {
    map_dense(x, |v| v.ln_1p())
}

/// `-x`
#[inline(always)]
pub fn neg<T: Float>(x: &[T]) -> Vec64<T> {
    map_dense(x, |v| -v)
}

/// `sqrt(x)`
#[inline(always)]
pub fn sqrt<T: Float>(x: &[T]) -> Vec64<T> {
    map_dense(x, |v| v.sqrt())
}

/// `x + c`
#[inline(always)]
pub fn add_scalar<T: Float>(x: &[T], c: T) -> Vec64<T> {
    map_dense(x, |v| v + c)
}

/// `x * c`
#[inline(always)]
pub fn mul_scalar<T: Float>(x: &[T], c: T) -> Vec64<T> {
    map_dense(x, |v| v * c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!(
            (a - b).abs() < tol,
            "assert_close failed: {a} vs {b} (tol={tol})"
        );
    }

    #[test]
    fn exp_ln_inverse() {
        let x = [-3.0_f64, -0.5, 0.0, 0.5, 3.0];
        let back = ln(&exp(&x));
        for (a, b) in back.iter().zip(x.iter()) {
            assert_close(*a, *b, 1e-15);
        }
    }

    #[test]
    fn ln_1p_small_values() {
        // ln(1 + x) = x - x²/2 + O(x³); the second-order term is far above rounding
        let x = [1e-12_f64, -1e-12];
        let got = ln_1p(&x);
        for (g, &xi) in got.iter().zip(x.iter()) {
            assert_close(*g, xi - xi * xi / 2.0, 1e-27);
            assert!((*g - xi).abs() > 1e-25);
        }
    }

    #[test]
    fn neg_sqrt_scalar_ops() {
        let x = [4.0_f32, 9.0];
        assert_eq!(neg(&x).as_slice(), &[-4.0, -9.0]);
        assert_eq!(sqrt(&x).as_slice(), &[2.0, 3.0]);
        assert_eq!(add_scalar(&x, 1.0).as_slice(), &[5.0, 10.0]);
        assert_eq!(mul_scalar(&x, 0.5).as_slice(), &[2.0, 4.5]);
    }

    #[test]
    fn fill_and_empty() {
        assert_eq!(fill(3, 1.0_f64).as_slice(), &[1.0, 1.0, 1.0]);
        assert!(exp::<f64>(&[]).is_empty());
    }

    #[test]
    fn non_finite_kept_verbatim() {
        let got = ln(&[0.0_f64, -1.0, f64::INFINITY]);
        assert!(got[0].is_infinite() && got[0].is_sign_negative());
        assert!(got[1].is_nan());
        assert!(got[2].is_infinite());
    }
}
