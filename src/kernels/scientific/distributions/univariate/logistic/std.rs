// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use crate::errors::KernelError;
use crate::tensor::Tensor;
use crate::traits::float::KernelFloat;

/// z = (x - μ) / s under broadcasting.
#[inline(always)]
pub fn standardise<T: KernelFloat>(
    x: &Tensor<T>,
    loc: &Tensor<T>,
    scale: &Tensor<T>,
) -> Result<Tensor<T>, KernelError> {
    x.sub(loc)?.div(scale)
}

/// Logistic log-density: -z - 2·softplus(-z) - ln s
#[inline(always)]
pub fn logistic_log_prob_std<T: KernelFloat>(
    x: &Tensor<T>,
    loc: &Tensor<T>,
    scale: &Tensor<T>,
) -> Result<Tensor<T>, KernelError> {
    let neg_z = standardise(x, loc, scale)?.neg();
    let two = T::one() + T::one();
    neg_z
        .sub(&neg_z.softplus()?.mul_scalar(two))?
        .sub(&scale.ln())
}

/// Logistic CDF: sigmoid(z)
#[inline(always)]
pub fn logistic_cdf_std<T: KernelFloat>(
    x: &Tensor<T>,
    loc: &Tensor<T>,
    scale: &Tensor<T>,
) -> Result<Tensor<T>, KernelError> {
    Ok(standardise(x, loc, scale)?.sigmoid())
}

/// Logistic log-CDF: -softplus(-z)
#[inline(always)]
pub fn logistic_log_cdf_std<T: KernelFloat>(
    x: &Tensor<T>,
    loc: &Tensor<T>,
    scale: &Tensor<T>,
) -> Result<Tensor<T>, KernelError> {
    Ok(standardise(x, loc, scale)?.neg().softplus()?.neg())
}

/// Logistic survival function: sigmoid(-z)
#[inline(always)]
pub fn logistic_survival_std<T: KernelFloat>(
    x: &Tensor<T>,
    loc: &Tensor<T>,
    scale: &Tensor<T>,
) -> Result<Tensor<T>, KernelError> {
    Ok(standardise(x, loc, scale)?.neg().sigmoid())
}

/// Logistic log-survival: -softplus(z)
#[inline(always)]
pub fn logistic_log_survival_std<T: KernelFloat>(
    x: &Tensor<T>,
    loc: &Tensor<T>,
    scale: &Tensor<T>,
) -> Result<Tensor<T>, KernelError> {
    Ok(standardise(x, loc, scale)?.softplus()?.neg())
}

/// Standard logistic quantile of uniform draws: ln(u) - ln(1 - u)
///
/// `u` must lie in `(0, 1)` for a finite result.
#[inline(always)]
pub fn logistic_logit_std<T: KernelFloat>(u: &Tensor<T>) -> Result<Tensor<T>, KernelError> {
    u.ln().sub(&u.neg().ln_1p())
}
