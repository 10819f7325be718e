// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Logistic Distribution
//!
//! The logistic distribution is a continuous probability distribution with applications in
//! logistic regression, survival analysis, and neural networks. It resembles the normal
//! distribution but has heavier tails and a simple closed-form CDF.
//!
//! ## Mathematical Definition
//!
//! Parameterised by location μ and scale s > 0, with z = (x - μ) / s:
//! - **log PDF**: -z - 2·softplus(-z) - ln s
//! - **CDF**: sigmoid(z)
//! - **log CDF**: -softplus(-z)
//! - **Survival**: sigmoid(-z)
//! - **log Survival**: -softplus(z)
//! - **Quantile**: μ + s·(ln p - ln(1 - p))
//!
//! Every log-space function is written in terms of the stable softplus, so all outputs are
//! finite for finite inputs however far into the tails `z` lies.
//!
//! ## Parameters
//!
//! `loc` and `scale` are tensors whose shapes broadcast to the distribution's batch shape.
//! Each method also accepts per-call overrides; an override is validated and used for that
//! call only, never stored.

pub mod std;

use core::fmt;

use num_traits::ToPrimitive;

use self::std::{
    logistic_cdf_std, logistic_log_cdf_std, logistic_log_prob_std, logistic_log_survival_std,
    logistic_logit_std, logistic_survival_std,
};
use crate::config::DEFAULT_DISTRIBUTION_NAME;
use crate::errors::{KernelError, log_shape_mismatch};
use crate::kernels::scientific::distributions::shared::sampler::Sampler;
use crate::tensor::Tensor;
use crate::tensor::shape::broadcast_shape;
use crate::traits::float::{DType, KernelFloat};
use crate::utils::{confirm_finite, confirm_positive};

/// Location/scale pair resolved for a single call.
struct Params<'a, T> {
    loc: &'a Tensor<T>,
    scale: &'a Tensor<T>,
    batch_shape: Vec<usize>,
}

/// Logistic distribution over broadcastable `f32` or `f64` tensors.
///
/// Parameters are fixed at construction. All evaluation methods take `&self`, so a
/// distribution can be shared across threads; only sampling needs a `&mut Sampler`.
#[derive(Debug, Clone)]
pub struct Logistic<T: KernelFloat> {
    loc: Option<Tensor<T>>,
    scale: Option<Tensor<T>>,
    batch_shape: Option<Vec<usize>>,
    seed: Option<u64>,
    name: String,
}

impl<T: KernelFloat> Logistic<T> {
    /// Builds a logistic distribution with stored parameters.
    ///
    /// Fails if any `loc` element is not finite, any `scale` element is not finite and
    /// strictly positive, or the two shapes do not broadcast.
    pub fn new(loc: Tensor<T>, scale: Tensor<T>) -> Result<Self, KernelError> {
        confirm_finite("Logistic::new: loc", loc.as_slice())?;
        confirm_positive("Logistic::new: scale", scale.as_slice())?;
        let batch_shape = broadcast_shape(loc.shape(), scale.shape()).map_err(|_| {
            KernelError::ShapeMismatch(log_shape_mismatch(
                "Logistic::new",
                loc.shape(),
                scale.shape(),
            ))
        })?;
        log::debug!(
            "Logistic::new: dtype = {}, batch_shape = {:?}",
            T::DTYPE,
            batch_shape
        );
        Ok(Self {
            loc: Some(loc),
            scale: Some(scale),
            batch_shape: Some(batch_shape),
            seed: None,
            name: DEFAULT_DISTRIBUTION_NAME.to_string(),
        })
    }

    /// Scalar-parameter convenience constructor.
    pub fn from_scalars(loc: T, scale: T) -> Result<Self, KernelError> {
        Self::new(Tensor::scalar(loc), Tensor::scalar(scale))
    }

    /// Distribution with no stored parameters.
    ///
    /// Every call must then pass both `loc` and `scale`, otherwise it fails with
    /// `MissingParameter`.
    pub fn unparameterised() -> Self {
        log::debug!("Logistic::unparameterised: dtype = {}", T::DTYPE);
        Self {
            loc: None,
            scale: None,
            batch_shape: None,
            seed: None,
            name: DEFAULT_DISTRIBUTION_NAME.to_string(),
        }
    }

    /// Sets the seed used by [`Logistic::sampler`].
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    #[inline]
    pub fn loc(&self) -> Option<&Tensor<T>> {
        self.loc.as_ref()
    }

    #[inline]
    pub fn scale(&self) -> Option<&Tensor<T>> {
        self.scale.as_ref()
    }

    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn dist_type(&self) -> &'static str {
        "Logistic"
    }

    #[inline]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Broadcast shape of the stored parameters, `None` when unparameterised.
    #[inline]
    pub fn batch_shape(&self) -> Option<&[usize]> {
        self.batch_shape.as_deref()
    }

    /// True when the stored parameters are both 0-dimensional.
    #[inline]
    pub fn is_scalar_batch(&self) -> bool {
        matches!(self.batch_shape.as_deref(), Some([]))
    }

    /// Returns the effective `(loc, scale)` for a call: each override when given, else the
    /// stored parameter.
    pub fn get_dist_args(
        &self,
        loc: Option<&Tensor<T>>,
        scale: Option<&Tensor<T>>,
    ) -> Result<(Tensor<T>, Tensor<T>), KernelError> {
        let p = self.resolve("get_dist_args", loc, scale)?;
        Ok((p.loc.clone(), p.scale.clone()))
    }

    /// Mean, equal to `loc`, broadcast to the batch shape.
    pub fn mean(
        &self,
        loc: Option<&Tensor<T>>,
        scale: Option<&Tensor<T>>,
    ) -> Result<Tensor<T>, KernelError> {
        let p = self.resolve("mean", loc, scale)?;
        p.loc.broadcast_to(&p.batch_shape)
    }

    /// Mode, equal to `loc`, broadcast to the batch shape.
    pub fn mode(
        &self,
        loc: Option<&Tensor<T>>,
        scale: Option<&Tensor<T>>,
    ) -> Result<Tensor<T>, KernelError> {
        let p = self.resolve("mode", loc, scale)?;
        p.loc.broadcast_to(&p.batch_shape)
    }

    /// Standard deviation `scale · π / √3`.
    pub fn sd(
        &self,
        loc: Option<&Tensor<T>>,
        scale: Option<&Tensor<T>>,
    ) -> Result<Tensor<T>, KernelError> {
        let p = self.resolve("sd", loc, scale)?;
        let factor = T::PI() / T::from_f64(3.0).sqrt();
        p.scale.mul_scalar(factor).broadcast_to(&p.batch_shape)
    }

    /// Variance `sd²`.
    pub fn var(
        &self,
        loc: Option<&Tensor<T>>,
        scale: Option<&Tensor<T>>,
    ) -> Result<Tensor<T>, KernelError> {
        let sd = self.sd(loc, scale)?;
        sd.mul(&sd)
    }

    /// Differential entropy `ln(scale) + 2`.
    pub fn entropy(
        &self,
        loc: Option<&Tensor<T>>,
        scale: Option<&Tensor<T>>,
    ) -> Result<Tensor<T>, KernelError> {
        let p = self.resolve("entropy", loc, scale)?;
        p.scale
            .ln()
            .add_scalar(T::from_f64(2.0))
            .broadcast_to(&p.batch_shape)
    }

    /// Log-density at `value`.
    pub fn log_prob<V: Copy + ToPrimitive>(
        &self,
        value: &Tensor<V>,
        loc: Option<&Tensor<T>>,
        scale: Option<&Tensor<T>>,
    ) -> Result<Tensor<T>, KernelError> {
        let (x, p) = self.prepare("log_prob", value, loc, scale)?;
        logistic_log_prob_std(&x, p.loc, p.scale)
    }

    /// Density at `value`, `exp(log_prob)`.
    pub fn prob<V: Copy + ToPrimitive>(
        &self,
        value: &Tensor<V>,
        loc: Option<&Tensor<T>>,
        scale: Option<&Tensor<T>>,
    ) -> Result<Tensor<T>, KernelError> {
        Ok(self.log_prob(value, loc, scale)?.exp())
    }

    /// Cumulative distribution function at `value`.
    pub fn cdf<V: Copy + ToPrimitive>(
        &self,
        value: &Tensor<V>,
        loc: Option<&Tensor<T>>,
        scale: Option<&Tensor<T>>,
    ) -> Result<Tensor<T>, KernelError> {
        let (x, p) = self.prepare("cdf", value, loc, scale)?;
        logistic_cdf_std(&x, p.loc, p.scale)
    }

    /// Log of the CDF, computed without forming the CDF.
    pub fn log_cdf<V: Copy + ToPrimitive>(
        &self,
        value: &Tensor<V>,
        loc: Option<&Tensor<T>>,
        scale: Option<&Tensor<T>>,
    ) -> Result<Tensor<T>, KernelError> {
        let (x, p) = self.prepare("log_cdf", value, loc, scale)?;
        logistic_log_cdf_std(&x, p.loc, p.scale)
    }

    /// Survival function `1 - cdf`, evaluated as `sigmoid(-z)`.
    pub fn survival_function<V: Copy + ToPrimitive>(
        &self,
        value: &Tensor<V>,
        loc: Option<&Tensor<T>>,
        scale: Option<&Tensor<T>>,
    ) -> Result<Tensor<T>, KernelError> {
        let (x, p) = self.prepare("survival_function", value, loc, scale)?;
        logistic_survival_std(&x, p.loc, p.scale)
    }

    /// Log of the survival function.
    pub fn log_survival<V: Copy + ToPrimitive>(
        &self,
        value: &Tensor<V>,
        loc: Option<&Tensor<T>>,
        scale: Option<&Tensor<T>>,
    ) -> Result<Tensor<T>, KernelError> {
        let (x, p) = self.prepare("log_survival", value, loc, scale)?;
        logistic_log_survival_std(&x, p.loc, p.scale)
    }

    /// Quantile (inverse CDF) `loc + scale · (ln p - ln(1 - p))`.
    ///
    /// `p = 0` and `p = 1` map to `-inf` and `+inf`. Probabilities outside `[0, 1]` are
    /// rejected; `NaN` propagates.
    pub fn quantile<V: Copy + ToPrimitive>(
        &self,
        p: &Tensor<V>,
        loc: Option<&Tensor<T>>,
        scale: Option<&Tensor<T>>,
    ) -> Result<Tensor<T>, KernelError> {
        let (q, params) = self.prepare("quantile", p, loc, scale)?;
        if let Some(pos) = q
            .as_slice()
            .iter()
            .position(|&v| v < T::zero() || v > T::one())
        {
            return Err(KernelError::InvalidArguments(format!(
                "quantile: probability at element {} lies outside [0, 1]",
                pos
            )));
        }
        logistic_logit_std(&q)?.mul(params.scale)?.add(params.loc)
    }

    /// Sampler seeded from this distribution's seed, or from OS entropy when unset.
    pub fn sampler(&self) -> Sampler {
        Sampler::from_seed(self.seed)
    }

    /// Draws samples of shape `shape ++ batch_shape` by inverse-CDF transform.
    ///
    /// Uniform draws are taken from `[T::TINY, 1)` so the logit stays finite. When both
    /// `shape` and the batch shape are empty the result is 0-dimensional.
    pub fn sample(
        &self,
        sampler: &mut Sampler,
        shape: &[usize],
        loc: Option<&Tensor<T>>,
        scale: Option<&Tensor<T>>,
    ) -> Result<Tensor<T>, KernelError> {
        let p = self.resolve("sample", loc, scale)?;

        let mut full_shape = shape.to_vec();
        full_shape.extend_from_slice(&p.batch_shape);
        let squeeze = full_shape.is_empty();
        if squeeze {
            full_shape.push(1);
        }
        log::trace!(
            "{}::sample: shape = {:?}, batch_shape = {:?}",
            self.name,
            shape,
            p.batch_shape
        );

        let u = sampler.uniform(&full_shape, T::TINY, T::one())?;
        let draws = logistic_logit_std(&u)?.mul(p.scale)?.add(p.loc)?;
        if squeeze {
            draws.squeeze(0)
        } else {
            Ok(draws)
        }
    }

    /// Resolves override-or-default parameters and their broadcast shape.
    fn resolve<'a>(
        &'a self,
        fname: &str,
        loc: Option<&'a Tensor<T>>,
        scale: Option<&'a Tensor<T>>,
    ) -> Result<Params<'a, T>, KernelError> {
        let loc = match loc {
            Some(l) => {
                confirm_finite(&format!("{}: loc", fname), l.as_slice())?;
                l
            }
            None => self.loc.as_ref().ok_or_else(|| {
                KernelError::MissingParameter(format!(
                    "{}: `loc` was not stored at construction and no override was given",
                    fname
                ))
            })?,
        };
        let scale = match scale {
            Some(s) => {
                confirm_positive(&format!("{}: scale", fname), s.as_slice())?;
                s
            }
            None => self.scale.as_ref().ok_or_else(|| {
                KernelError::MissingParameter(format!(
                    "{}: `scale` was not stored at construction and no override was given",
                    fname
                ))
            })?,
        };
        let batch_shape = broadcast_shape(loc.shape(), scale.shape()).map_err(|_| {
            KernelError::ShapeMismatch(log_shape_mismatch(fname, loc.shape(), scale.shape()))
        })?;
        Ok(Params {
            loc,
            scale,
            batch_shape,
        })
    }

    /// Resolves parameters, casts `value` to `T`, and checks its shape against the batch.
    fn prepare<'a, V: Copy + ToPrimitive>(
        &'a self,
        fname: &str,
        value: &Tensor<V>,
        loc: Option<&'a Tensor<T>>,
        scale: Option<&'a Tensor<T>>,
    ) -> Result<(Tensor<T>, Params<'a, T>), KernelError> {
        let p = self.resolve(fname, loc, scale)?;
        let x = value.cast::<T>().map_err(|e| match e {
            KernelError::TypeMismatch(msg) => {
                KernelError::TypeMismatch(format!("{}: value: {}", fname, msg))
            }
            other => other,
        })?;
        broadcast_shape(x.shape(), &p.batch_shape).map_err(|_| {
            KernelError::ShapeMismatch(log_shape_mismatch(fname, x.shape(), &p.batch_shape))
        })?;
        Ok((x, p))
    }
}

impl<T: KernelFloat> fmt::Display for Logistic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<", self.name)?;
        match (&self.loc, &self.scale, &self.batch_shape) {
            (Some(loc), Some(scale), Some(b)) if b.is_empty() => {
                write!(f, "location = {}, scale = {}", loc, scale)?
            }
            (_, _, Some(b)) => write!(f, "batch_shape = {:?}", b)?,
            _ => write!(f, "batch_shape = None")?,
        }
        write!(f, ">")
    }
}
