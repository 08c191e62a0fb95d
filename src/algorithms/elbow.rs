//! Maximum-distance elbow search.
//!
//! ## Purpose
//!
//! This module locates the elbow of a curve: the point with the largest
//! perpendicular distance from the chord joining the first and last points.
//!
//! ## Design notes
//!
//! * **Single pass**: Distances are computed and compared in one O(n) loop.
//! * **Optional capture**: Per-point distances are written to a caller buffer
//!   only when one is supplied.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **First maximum**: Ties resolve to the lowest index.
//! * **NaN ordering**: A NaN distance outranks every number and the first NaN
//!   wins, matching array arg-max conventions. This only arises for a
//!   zero-length chord under [`DegenerateChord::Propagate`].
//!
//! ## Invariants
//!
//! * The returned index is always in `0..n`.
//! * Inputs are never modified.
//!
//! ## Non-goals
//!
//! * This module does not validate lengths or finiteness (see the validator).
//! * This module does not smooth the curve or look for multiple elbows.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::chord::Chord;
use crate::primitives::errors::ElbowError;
use crate::primitives::policy::DegenerateChord;

// ============================================================================
// Search Output
// ============================================================================

/// Location and distance of the elbow within the input arrays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElbowLocation<T> {
    /// Index of the elbow point.
    pub index: usize,

    /// Perpendicular distance of the elbow point from the chord.
    pub distance: T,

    /// Chord joining the first and last points.
    pub chord: Chord<T>,
}

// ============================================================================
// Max-Distance Search
// ============================================================================

/// Elbow search by maximum perpendicular distance to the endpoint chord.
pub struct MaxDistance;

impl MaxDistance {
    /// Locate the elbow of the curve `(x[i], y[i])`.
    ///
    /// `x` and `y` must have the same length of at least one. When
    /// `distances` is `Some`, it is cleared and filled with every point's
    /// distance in input order.
    pub fn locate<T: Float>(
        x: &[T],
        y: &[T],
        policy: DegenerateChord,
        mut distances: Option<&mut Vec<T>>,
    ) -> Result<ElbowLocation<T>, ElbowError> {
        debug_assert_eq!(x.len(), y.len(), "x and y must have the same length");

        let chord = Chord::from_endpoints(x, y).ok_or(ElbowError::EmptyInput)?;

        if chord.is_degenerate() && policy == DegenerateChord::Error {
            let (x0, y0) = chord.start();
            return Err(ElbowError::DegenerateChord {
                x: x0.to_f64().unwrap_or(f64::NAN),
                y: y0.to_f64().unwrap_or(f64::NAN),
            });
        }

        if let Some(buf) = distances.as_deref_mut() {
            buf.clear();
            buf.reserve(x.len());
        }

        let mut best_idx = 0;
        let mut best_dist = T::neg_infinity();

        for (i, (&xi, &yi)) in x.iter().zip(y.iter()).enumerate() {
            let d = chord.perpendicular_distance(xi, yi);
            if let Some(buf) = distances.as_deref_mut() {
                buf.push(d);
            }
            if i == 0 || Self::supersedes(d, best_dist) {
                best_idx = i;
                best_dist = d;
            }
        }

        Ok(ElbowLocation {
            index: best_idx,
            distance: best_dist,
            chord,
        })
    }

    /// True when `candidate` strictly beats the current maximum.
    #[inline]
    fn supersedes<T: Float>(candidate: T, incumbent: T) -> bool {
        !incumbent.is_nan() && (candidate.is_nan() || candidate > incumbent)
    }
}
