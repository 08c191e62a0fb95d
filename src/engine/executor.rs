//! Execution engine for elbow detection.
//!
//! ## Purpose
//!
//! This module orchestrates a single elbow search: it validates the input,
//! runs the maximum-distance scan and assembles an [`ElbowResult`].
//!
//! ## Design notes
//!
//! * **Configuration-based**: All options travel in an [`ElbowConfig`].
//! * **Allocation on demand**: A distance buffer is only allocated when requested.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * The result point is copied from the input arrays, never interpolated.
//! * `distances`, when present, has the same length as the input.
//!
//! ## Non-goals
//!
//! * This module does not convert foreign input types (handled by `input`).
//! * This module does not provide public-facing builder ergonomics.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::elbow::MaxDistance;
use crate::engine::output::ElbowResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::ElbowError;
use crate::primitives::policy::DegenerateChord;

// ============================================================================
// Configuration
// ============================================================================

/// Resolved options for one elbow search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElbowConfig {
    /// Handling of a zero-length chord.
    pub degenerate_chord: DegenerateChord,

    /// Whether to return every point's distance.
    pub return_distances: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs validation, the elbow scan and result assembly.
pub struct ElbowExecutor;

impl ElbowExecutor {
    /// Locate the elbow of `(x[i], y[i])` under `config`.
    pub fn run_with_config<T: Float>(
        x: &[T],
        y: &[T],
        config: &ElbowConfig,
    ) -> Result<ElbowResult<T>, ElbowError> {
        Validator::validate_inputs(x, y)?;

        let mut distances = if config.return_distances {
            Some(Vec::with_capacity(x.len()))
        } else {
            None
        };

        let location = MaxDistance::locate(x, y, config.degenerate_chord, distances.as_mut())?;

        Ok(ElbowResult {
            index: location.index,
            x: x[location.index],
            y: y[location.index],
            distance: location.distance,
            chord_length: location.chord.length(),
            n_points: x.len(),
            distances,
        })
    }
}
