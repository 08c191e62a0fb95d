//! Input abstractions for elbow detection.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for elbow inputs, allowing the
//! `find` method to process multiple data formats (slices, vectors, arrays,
//! ndarray) through a single interface, plus a conversion boundary for
//! non-float numeric data such as integer cluster counts.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: Float containers are viewed as slices directly.
//! * **Fail-fast conversion**: Values that cannot be represented as the target
//!   float type are rejected before any geometry is computed.
//!
//! ## Key concepts
//!
//! * **ElbowInput Trait**: Requires types to provide a contiguous slice view.
//! * **Conversion Boundary**: [`to_float_vec`] turns any `ToPrimitive` data into floats.
//!
//! ## Invariants
//!
//! * Returned slices represent all elements in the input container, in order.
//! * Inputs must be contiguous in memory; non-contiguous inputs return an error.
//!
//! ## Non-goals
//!
//! * This module does not perform data cleaning or imputation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(feature = "ndarray")]
use ndarray::{ArrayBase, Data, Ix1};

// External dependencies
use num_traits::{Float, NumCast, ToPrimitive};

// Internal dependencies
use crate::primitives::errors::ElbowError;

/// Trait for types that can be used as input for elbow detection.
pub trait ElbowInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_elbow_slice(&self) -> Result<&[T], ElbowError>;
}

impl<T: Float> ElbowInput<T> for [T] {
    fn as_elbow_slice(&self) -> Result<&[T], ElbowError> {
        Ok(self)
    }
}

impl<T: Float, const N: usize> ElbowInput<T> for [T; N] {
    fn as_elbow_slice(&self) -> Result<&[T], ElbowError> {
        Ok(self.as_slice())
    }
}

impl<T: Float> ElbowInput<T> for Vec<T> {
    fn as_elbow_slice(&self) -> Result<&[T], ElbowError> {
        Ok(self.as_slice())
    }
}

#[cfg(feature = "ndarray")]
impl<T: Float, S> ElbowInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_elbow_slice(&self) -> Result<&[T], ElbowError> {
        self.as_slice().ok_or_else(|| {
            ElbowError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}

/// Convert arbitrary numeric values to the float type `T`.
///
/// `name` labels the array in error messages (e.g. `"x"`).
pub fn to_float_vec<T: Float, S: ToPrimitive + Clone>(
    vals: &[S],
    name: &str,
) -> Result<Vec<T>, ElbowError> {
    vals.iter()
        .enumerate()
        .map(|(i, v)| {
            <T as NumCast>::from(v.clone()).ok_or_else(|| {
                ElbowError::InvalidNumericValue(format!(
                    "{}[{}] is not representable as a float",
                    name, i
                ))
            })
        })
        .collect()
}
