//! Error types for elbow detection.
//!
//! ## Purpose
//!
//! This module defines [`ElbowError`], the single error type returned by
//! every fallible operation in the crate.
//!
//! ## Design notes
//!
//! * **no_std**: `Display` is implemented by hand so the type works without `std`.
//! * **Comparable**: `Clone + PartialEq` so callers and tests can match on values.
//!
//! ## Non-goals
//!
//! * This module does not perform validation (see the engine validator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// ============================================================================
// Error Enum
// ============================================================================

/// Errors produced while validating input or locating an elbow.
#[derive(Debug, Clone, PartialEq)]
pub enum ElbowError {
    /// Both input arrays are empty.
    EmptyInput,

    /// Input container could not be used as-is.
    InvalidInput(String),

    /// `x` and `y` have different lengths.
    MismatchedInputs {
        /// Number of x values.
        x_len: usize,
        /// Number of y values.
        y_len: usize,
    },

    /// A value is NaN, infinite, or not representable as a float.
    InvalidNumericValue(String),

    /// Not enough points to define a chord.
    TooFewPoints {
        /// Number of points supplied.
        got: usize,
        /// Minimum number of points required.
        min: usize,
    },

    /// The chord joining the first and last points has zero length.
    DegenerateChord {
        /// x coordinate of the first point.
        x: f64,
        /// y coordinate of the first point.
        y: f64,
    },

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for ElbowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElbowError::EmptyInput => write!(f, "Input arrays are empty"),
            ElbowError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ElbowError::MismatchedInputs { x_len, y_len } => write!(
                f,
                "Length mismatch: x has {} points, y has {}",
                x_len, y_len
            ),
            ElbowError::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            ElbowError::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {}, need at least {}", got, min)
            }
            ElbowError::DegenerateChord { x, y } => write!(
                f,
                "Degenerate chord: chord from ({}, {}) to the last point has zero length",
                x, y
            ),
            ElbowError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ElbowError {}
