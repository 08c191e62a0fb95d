//! High-level API for elbow detection.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the [`find_elbow`]
//! function for the common case and a fluent builder for configuring the
//! degenerate-chord policy and optional outputs.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration is validated when `.build()` is called.
//! * **Reusable**: A built [`ElbowFinder`] can be applied to any number of curves.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create an [`ElbowBuilder`] via `Elbow::new()`.
//! 2. Chain configuration methods (`.degenerate_chord()`, `.return_distances()`).
//! 3. Call `.build()` to obtain an [`ElbowFinder`], then `.find(&x, &y)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::marker::PhantomData;

// External dependencies
use num_traits::{Float, ToPrimitive};

// Internal dependencies
use crate::engine::executor::ElbowExecutor;
use crate::engine::validator::Validator;
use crate::input::to_float_vec;

// Publicly re-exported types
pub use crate::engine::executor::ElbowConfig;
pub use crate::engine::output::ElbowResult;
pub use crate::input::ElbowInput;
pub use crate::primitives::errors::ElbowError;
pub use crate::primitives::policy::DegenerateChord;

// ============================================================================
// Free Functions
// ============================================================================

/// Find the elbow of the curve `(x_vals[i], y_vals[i])`.
///
/// The elbow is the first point with the maximum perpendicular distance from
/// the chord joining the first and last points. The returned pair is always
/// one of the input points.
///
/// A zero-length chord is reported as [`ElbowError::DegenerateChord`]; use
/// [`ElbowBuilder::degenerate_chord`] to propagate NaN distances instead.
///
/// ```
/// use elbow_rs::prelude::*;
///
/// let x = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let y = [0.0, 0.0, 0.0, 5.0, 5.0];
///
/// assert_eq!(find_elbow(&x, &y)?, (2.0, 0.0));
/// # Result::<(), ElbowError>::Ok(())
/// ```
pub fn find_elbow<T: Float>(x_vals: &[T], y_vals: &[T]) -> Result<(T, T), ElbowError> {
    ElbowExecutor::run_with_config(x_vals, y_vals, &ElbowConfig::default()).map(|r| r.point())
}

/// Find the elbow of a curve given as arbitrary numeric values.
///
/// Values are converted to `T` first; any value that cannot be represented
/// fails with [`ElbowError::InvalidNumericValue`] before the search begins.
///
/// ```
/// use elbow_rs::prelude::*;
///
/// let clusters: Vec<u32> = (1..=6).collect();
/// let inertia = [1000.0, 400.0, 150.0, 120.0, 100.0, 90.0];
///
/// let (k, _): (f64, f64) = find_elbow_from(&clusters, &inertia)?;
/// assert_eq!(k, 3.0);
/// # Result::<(), ElbowError>::Ok(())
/// ```
pub fn find_elbow_from<T, X, Y>(x_vals: &[X], y_vals: &[Y]) -> Result<(T, T), ElbowError>
where
    T: Float,
    X: ToPrimitive + Clone,
    Y: ToPrimitive + Clone,
{
    let x: Vec<T> = to_float_vec(x_vals, "x")?;
    let y: Vec<T> = to_float_vec(y_vals, "y")?;
    find_elbow(&x, &y)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring elbow detection.
#[derive(Debug, Clone)]
pub struct ElbowBuilder<T> {
    /// Handling of a zero-length chord (default: Error).
    pub degenerate_chord: Option<DegenerateChord>,

    /// Return every point's distance from the chord.
    pub return_distances: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: Float> Default for ElbowBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ElbowBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            degenerate_chord: None,
            return_distances: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Set the zero-length chord policy.
    pub fn degenerate_chord(mut self, policy: DegenerateChord) -> Self {
        if self.degenerate_chord.is_some() {
            self.duplicate_param = Some("degenerate_chord");
        }
        self.degenerate_chord = Some(policy);
        self
    }

    /// Include every point's distance in the result.
    pub fn return_distances(mut self) -> Self {
        if self.return_distances.is_some() {
            self.duplicate_param = Some("return_distances");
        }
        self.return_distances = Some(true);
        self
    }

    /// Build the elbow finder.
    pub fn build(self) -> Result<ElbowFinder<T>, ElbowError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(ElbowFinder {
            config: ElbowConfig {
                degenerate_chord: self.degenerate_chord.unwrap_or_default(),
                return_distances: self.return_distances.unwrap_or(false),
            },
            _marker: PhantomData,
        })
    }
}

// ============================================================================
// Finder
// ============================================================================

/// Configured elbow finder.
#[derive(Debug, Clone, Copy)]
pub struct ElbowFinder<T> {
    config: ElbowConfig,
    _marker: PhantomData<T>,
}

impl<T: Float> ElbowFinder<T> {
    /// Locate the elbow of the curve `(x[i], y[i])`.
    pub fn find<X, Y>(&self, x: &X, y: &Y) -> Result<ElbowResult<T>, ElbowError>
    where
        X: ElbowInput<T> + ?Sized,
        Y: ElbowInput<T> + ?Sized,
    {
        let x = x.as_elbow_slice()?;
        let y = y.as_elbow_slice()?;
        ElbowExecutor::run_with_config(x, y, &self.config)
    }

    /// The resolved configuration.
    pub fn config(&self) -> &ElbowConfig {
        &self.config
    }
}
