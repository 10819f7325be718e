// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Tensor** - *Broadcastable row-major buffers*
//!
//! A deliberately small n-dimensional container: a 64-byte aligned `Vec64` buffer and
//! a row-major shape. It offers exactly what the distribution kernels consume from a
//! host tensor library: construction, fill, squeeze, cast, broadcasting elementwise
//! arithmetic and the fused transcendental kernels.

pub mod shape;

use core::fmt;

use minarrow::Vec64;
use num_traits::{Float, NumCast, ToPrimitive};

use crate::errors::{KernelError, log_shape_mismatch};
use crate::kernels::scientific::{sigmoid, softplus};
use crate::kernels::unary;
use crate::traits::float::KernelFloat;
use crate::utils::confirm_capacity;
use shape::{BroadcastIndexer, broadcast_shape, checked_numel};

/// Dense n-dimensional tensor in row-major order. An empty shape is a scalar.
#[derive(Clone)]
pub struct Tensor<T> {
    data: Vec64<T>,
    shape: Vec<usize>,
}

impl<T: Copy> Tensor<T> {
    /// 0-dimensional tensor holding one value.
    pub fn scalar(value: T) -> Self {
        let mut data = Vec64::with_capacity(1);
        data.push(value);
        Self {
            data,
            shape: Vec::new(),
        }
    }

    /// 1-dimensional tensor copied from a slice.
    pub fn from_slice(values: &[T]) -> Self {
        let mut data = Vec64::with_capacity(values.len());
        data.extend_from_slice(values);
        Self {
            data,
            shape: vec![values.len()],
        }
    }

    /// Tensor with the given shape over `values` in row-major order.
    pub fn from_vec(values: Vec<T>, shape: &[usize]) -> Result<Self, KernelError> {
        let mut data = Vec64::with_capacity(values.len());
        data.extend_from_slice(&values);
        Self::from_vec64(data, shape.to_vec())
    }

    /// Wraps an existing aligned buffer, checking it against `shape`.
    pub fn from_vec64(data: Vec64<T>, shape: Vec<usize>) -> Result<Self, KernelError> {
        let expected = checked_numel(&shape).ok_or_else(|| {
            KernelError::InvalidArguments(format!("shape {:?}: element count overflows", shape))
        })?;
        confirm_capacity("Tensor::from_vec64", data.len(), expected)?;
        Ok(Self { data, shape })
    }

    /// Tensor of `shape` with every element set to `value`.
    pub fn fill(shape: &[usize], value: T) -> Result<Self, KernelError> {
        let len = checked_numel(shape).ok_or_else(|| {
            KernelError::InvalidArguments(format!("shape {:?}: element count overflows", shape))
        })?;
        Ok(Self {
            data: unary::fill(len, value),
            shape: shape.to_vec(),
        })
    }

    /// Shape in row-major order.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// True for a 0-dimensional tensor.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }

    /// Flat row-major view of the elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Element at a multi-dimensional index, or `None` when out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<T> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut flat = 0usize;
        for (&i, &d) in index.iter().zip(self.shape.iter()) {
            if i >= d {
                return None;
            }
            flat = flat * d + i;
        }
        self.as_slice().get(flat).copied()
    }

    /// The single element of a one-element tensor.
    pub fn item(&self) -> Option<T> {
        if self.data.len() == 1 {
            Some(self.data[0])
        } else {
            None
        }
    }

    /// Removes dimension `axis`, which must have size 1.
    pub fn squeeze(mut self, axis: usize) -> Result<Self, KernelError> {
        match self.shape.get(axis) {
            Some(1) => {
                self.shape.remove(axis);
                Ok(self)
            }
            Some(d) => Err(KernelError::InvalidArguments(format!(
                "squeeze: axis {} has size {}, expected 1",
                axis, d
            ))),
            None => Err(KernelError::OutOfBounds(format!(
                "squeeze: axis {} out of range for rank {}",
                axis,
                self.shape.len()
            ))),
        }
    }

    /// Applies `f` to every element, keeping the shape.
    pub fn map<U: Copy, F: Fn(T) -> U>(&self, f: F) -> Tensor<U> {
        Tensor {
            data: unary::map_dense(self.as_slice(), f),
            shape: self.shape.clone(),
        }
    }

    /// Materialises this tensor broadcast to `shape`.
    pub fn broadcast_to(&self, shape: &[usize]) -> Result<Self, KernelError> {
        if self.shape.as_slice() == shape {
            return Ok(self.clone());
        }
        let indexer = BroadcastIndexer::new(&self.shape, shape)?;
        let len = checked_numel(shape).ok_or_else(|| {
            KernelError::InvalidArguments(format!("shape {:?}: element count overflows", shape))
        })?;
        let src = self.as_slice();
        let mut data = Vec64::with_capacity(len);
        for i in 0..len {
            data.push(src[indexer.source_index(i)]);
        }
        Ok(Self {
            data,
            shape: shape.to_vec(),
        })
    }

    /// Elementwise combination of two tensors under broadcasting.
    pub fn zip_with<U, V, F>(&self, other: &Tensor<U>, f: F) -> Result<Tensor<V>, KernelError>
    where
        U: Copy,
        V: Copy,
        F: Fn(T, U) -> V,
    {
        let lhs = self.as_slice();
        let rhs = other.as_slice();

        // Dense fast path: identical shapes
        if self.shape == other.shape {
            let mut data = Vec64::with_capacity(lhs.len());
            for (&a, &b) in lhs.iter().zip(rhs.iter()) {
                data.push(f(a, b));
            }
            return Ok(Tensor {
                data,
                shape: self.shape.clone(),
            });
        }

        let out_shape = broadcast_shape(&self.shape, &other.shape).map_err(|_| {
            KernelError::ShapeMismatch(log_shape_mismatch("zip_with", &self.shape, &other.shape))
        })?;
        let li = BroadcastIndexer::new(&self.shape, &out_shape)?;
        let ri = BroadcastIndexer::new(&other.shape, &out_shape)?;
        let len = checked_numel(&out_shape).ok_or_else(|| {
            KernelError::InvalidArguments(format!(
                "zip_with: broadcast shape {:?}: element count overflows",
                out_shape
            ))
        })?;
        let mut data = Vec64::with_capacity(len);
        for i in 0..len {
            data.push(f(lhs[li.source_index(i)], rhs[ri.source_index(i)]));
        }
        Ok(Tensor {
            data,
            shape: out_shape,
        })
    }
}

impl<T: Copy + ToPrimitive> Tensor<T> {
    /// Casts every element to `U`.
    ///
    /// Fails with `TypeMismatch` if any element is not representable in `U`.
    pub fn cast<U: NumCast + Copy>(&self) -> Result<Tensor<U>, KernelError> {
        let mut data = Vec64::with_capacity(self.len());
        for (i, &v) in self.as_slice().iter().enumerate() {
            match U::from(v) {
                Some(u) => data.push(u),
                None => {
                    return Err(KernelError::TypeMismatch(format!(
                        "cast: element {} is not representable in the target type",
                        i
                    )));
                }
            }
        }
        Ok(Tensor {
            data,
            shape: self.shape.clone(),
        })
    }
}

impl<T: Float> Tensor<T> {
    /// Broadcasting `self + rhs`.
    pub fn add(&self, rhs: &Self) -> Result<Self, KernelError> {
        self.zip_with(rhs, |a, b| a + b)
    }

    /// Broadcasting `self - rhs`.
    pub fn sub(&self, rhs: &Self) -> Result<Self, KernelError> {
        self.zip_with(rhs, |a, b| a - b)
    }

    /// Broadcasting `self * rhs`.
    pub fn mul(&self, rhs: &Self) -> Result<Self, KernelError> {
        self.zip_with(rhs, |a, b| a * b)
    }

    /// Broadcasting `self / rhs`.
    pub fn div(&self, rhs: &Self) -> Result<Self, KernelError> {
        self.zip_with(rhs, |a, b| a / b)
    }

    pub fn add_scalar(&self, c: T) -> Self {
        self.with_data(unary::add_scalar(self.as_slice(), c))
    }

    pub fn mul_scalar(&self, c: T) -> Self {
        self.with_data(unary::mul_scalar(self.as_slice(), c))
    }

    pub fn neg(&self) -> Self {
        self.with_data(unary::neg(self.as_slice()))
    }

    pub fn exp(&self) -> Self {
        self.with_data(unary::exp(self.as_slice()))
    }

    pub fn ln(&self) -> Self {
        self.with_data(unary::ln(self.as_slice()))
    }

    pub fn ln_1p(&self) -> Self {
        self.with_data(unary::ln_1p(self.as_slice()))
    }

    pub fn sqrt(&self) -> Self {
        self.with_data(unary::sqrt(self.as_slice()))
    }

    /// True when every element is finite.
    pub fn all_finite(&self) -> bool {
        self.as_slice().iter().all(|v| v.is_finite())
    }

    #[inline]
    fn with_data(&self, data: Vec64<T>) -> Self {
        Tensor {
            data,
            shape: self.shape.clone(),
        }
    }
}

impl<T: KernelFloat> Tensor<T> {
    /// Stable `ln(1 + exp(x))` of every element.
    pub fn softplus(&self) -> Result<Self, KernelError> {
        Ok(self.with_data(softplus::softplus(self.as_slice())?))
    }

    /// Logistic sigmoid of every element.
    pub fn sigmoid(&self) -> Self {
        self.with_data(sigmoid::sigmoid(self.as_slice()))
    }
}

impl<T: Copy + PartialEq> PartialEq for Tensor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.as_slice() == other.as_slice()
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("data", &self.as_slice())
            .finish()
    }
}

impl<T: Copy + fmt::Display> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_scalar() {
            return write!(f, "{}", self.data[0]);
        }
        write!(f, "[")?;
        for (i, v) in self.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

impl<T: Copy> From<T> for Tensor<T> {
    fn from(value: T) -> Self {
        Tensor::scalar(value)
    }
}
