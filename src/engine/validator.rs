//! Input validation for elbow detection.
//!
//! ## Purpose
//!
//! This module provides the validation functions run before an elbow search.
//! It checks input lengths, the minimum point count and finiteness.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Pairing**: `x[i]` and `y[i]` form one point, so lengths must match.
//! * **Chord Requirements**: At least 2 points are needed to define a chord.
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not check that the curve is monotonic.
//! * This module does not detect a zero-length chord (policy dependent).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ElbowError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for elbow input data and builder configuration.
///
/// All methods return `Result<(), ElbowError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    /// Minimum number of points that defines a chord.
    pub const MIN_POINTS: usize = 2;

    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate paired input arrays.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), ElbowError> {
        // Check 1: Matching lengths
        if x.len() != y.len() {
            return Err(ElbowError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        // Check 2: Non-empty arrays
        if x.is_empty() {
            return Err(ElbowError::EmptyInput);
        }

        // Check 3: Enough points for a chord
        if x.len() < Self::MIN_POINTS {
            return Err(ElbowError::TooFewPoints {
                got: x.len(),
                min: Self::MIN_POINTS,
            });
        }

        // Check 4: All values finite
        Self::validate_finite(x, "x")?;
        Self::validate_finite(y, "y")
    }

    /// Validate that every value in `vals` is finite.
    pub fn validate_finite<T: Float>(vals: &[T], name: &str) -> Result<(), ElbowError> {
        for (i, &val) in vals.iter().enumerate() {
            if !val.is_finite() {
                return Err(ElbowError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), ElbowError> {
        if let Some(param) = duplicate_param {
            return Err(ElbowError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
