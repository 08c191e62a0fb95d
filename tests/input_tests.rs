#![cfg(feature = "dev")]

use elbow_rs::internals::input::{ElbowInput, to_float_vec};
use elbow_rs::internals::primitives::errors::ElbowError;
use num_traits::ToPrimitive;

// ============================================================================
// Slice View Tests
// ============================================================================

#[test]
fn test_slice_vec_and_array_inputs() {
    let v = vec![1.0, 2.0, 3.0];
    let a = [1.0, 2.0, 3.0];

    assert_eq!(v.as_elbow_slice().unwrap(), &[1.0, 2.0, 3.0]);
    assert_eq!(a.as_elbow_slice().unwrap(), &[1.0, 2.0, 3.0]);
    assert_eq!(v[..2].as_elbow_slice().unwrap(), &[1.0, 2.0]);
}

#[cfg(feature = "ndarray")]
#[test]
fn test_ndarray_input() {
    use ndarray::{Array1, s};

    let arr = Array1::from(vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(arr.as_elbow_slice().unwrap(), &[1.0, 2.0, 3.0, 4.0]);

    let strided = arr.slice(s![..;2]);
    assert!(matches!(
        strided.as_elbow_slice(),
        Err(ElbowError::InvalidInput(_))
    ));
}

// ============================================================================
// Conversion Tests
// ============================================================================

#[test]
fn test_to_float_vec_integers() {
    let k: Vec<u32> = vec![1, 2, 3];
    let out: Vec<f64> = to_float_vec(&k, "x").unwrap();
    assert_eq!(out, vec![1.0, 2.0, 3.0]);

    let signed = [-4i64, 0, 7];
    let out: Vec<f32> = to_float_vec(&signed, "y").unwrap();
    assert_eq!(out, vec![-4.0, 0.0, 7.0]);
}

/// A value type that can only sometimes be expressed as a number.
#[derive(Clone)]
struct Reading(Option<f64>);

impl ToPrimitive for Reading {
    fn to_i64(&self) -> Option<i64> {
        self.0.and_then(|v| v.to_i64())
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.and_then(|v| v.to_u64())
    }

    fn to_f64(&self) -> Option<f64> {
        self.0
    }
}

#[test]
fn test_to_float_vec_rejects_unconvertible() {
    let vals = [Reading(Some(1.0)), Reading(None), Reading(Some(3.0))];
    let err = to_float_vec::<f64, _>(&vals, "y").unwrap_err();
    assert_eq!(
        err,
        ElbowError::InvalidNumericValue("y[1] is not representable as a float".to_string())
    );
}

#[test]
fn test_to_float_vec_empty() {
    let empty: [u8; 0] = [];
    let out: Vec<f64> = to_float_vec(&empty, "x").unwrap();
    assert!(out.is_empty());
}
