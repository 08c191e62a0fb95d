//! Output types for elbow detection.
//!
//! ## Purpose
//!
//! This module defines [`ElbowResult`], which holds the located elbow point
//! together with the metadata of the search that produced it.
//!
//! ## Design notes
//!
//! * Optional outputs use `Option<Vec<T>>` so they cost nothing when disabled.
//! * Results are generic over `Float` types to support f32 and f64.
//! * Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `(x, y)` equals the input point at `index`.
//! * `distances`, when present, has `n_points` entries and `distances[index] == distance`
//!   (both NaN for a propagated zero-length chord).
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;
use num_traits::Float;

// ============================================================================
// Result Struct
// ============================================================================

/// Elbow point and search metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ElbowResult<T> {
    /// Index of the elbow within the input arrays.
    pub index: usize,

    /// x value of the elbow.
    pub x: T,

    /// y value of the elbow.
    pub y: T,

    /// Perpendicular distance of the elbow from the endpoint chord.
    pub distance: T,

    /// Length of the chord joining the first and last points.
    pub chord_length: T,

    /// Number of input points.
    pub n_points: usize,

    /// Distance of every point from the chord, in input order.
    pub distances: Option<Vec<T>>,
}

impl<T: Float> ElbowResult<T> {
    /// The elbow as an `(x, y)` pair.
    #[inline]
    pub fn point(&self) -> (T, T) {
        (self.x, self.y)
    }

    /// Check if per-point distances are available.
    pub fn has_distances(&self) -> bool {
        self.distances.is_some()
    }

    /// True when the elbow is the first or last input point.
    ///
    /// This happens for straight or nearly straight curves, where every
    /// distance is zero and the first index wins.
    pub fn is_endpoint(&self) -> bool {
        self.index == 0 || self.index + 1 == self.n_points
    }
}

impl<T: Float + fmt::Display> fmt::Display for ElbowResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.n_points)?;
        writeln!(f, "  Chord length: {}", self.chord_length)?;
        writeln!(f, "  Elbow index: {}", self.index)?;
        writeln!(f, "  Elbow point: ({}, {})", self.x, self.y)?;
        writeln!(f, "  Distance: {}", self.distance)?;

        if let Some(distances) = &self.distances {
            writeln!(f)?;
            writeln!(f, "Distances:")?;
            writeln!(f, "{:>8} {:>14}", "Index", "Distance")?;
            writeln!(f, "  {:-<21}", "")?;
            for (i, d) in distances.iter().enumerate() {
                let marker = if i == self.index { " *" } else { "" };
                writeln!(f, "{:>8} {:>14.6}{}", i, d, marker)?;
            }
        }

        Ok(())
    }
}
