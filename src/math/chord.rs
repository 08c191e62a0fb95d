//! Chord geometry for elbow detection.
//!
//! ## Purpose
//!
//! This module provides the [`Chord`] type: the straight segment joining the
//! first and last points of a curve, together with the perpendicular distance
//! from an arbitrary point to the line through it.
//!
//! ## Design notes
//!
//! * **Stateless**: A chord is derived from two points and holds no references.
//! * **Generics**: Generic over `Float` types.
//! * **Exact arithmetic order**: Operations are evaluated in a fixed order so
//!   results are bit-for-bit reproducible across callers.
//!
//! ## Key concepts
//!
//! * **Line vector**: `(dx, dy) = end - start`.
//! * **Cross magnitude**: `|dx * (py - y0) - dy * (px - x0)|`, twice the area
//!   of the triangle spanned by the chord and the point.
//! * **Perpendicular distance**: cross magnitude divided by the chord length.
//!
//! ## Invariants
//!
//! * Cross magnitudes and distances are non-negative (or NaN for a zero-length chord).
//! * Both endpoints are at distance zero from a non-degenerate chord.
//!
//! ## Non-goals
//!
//! * This module does not decide how a zero-length chord is handled.
//! * This module does not clamp to the segment; distances are to the infinite line.

// External dependencies
use num_traits::Float;

// ============================================================================
// Chord
// ============================================================================

/// Line segment from a start point to an end point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chord<T> {
    x0: T,
    y0: T,
    dx: T,
    dy: T,
    length: T,
}

impl<T: Float> Chord<T> {
    /// Build the chord from `start` to `end`.
    #[inline]
    pub fn new(start: (T, T), end: (T, T)) -> Self {
        let dx = end.0 - start.0;
        let dy = end.1 - start.1;
        Self {
            x0: start.0,
            y0: start.1,
            dx,
            dy,
            length: (dx * dx + dy * dy).sqrt(),
        }
    }

    /// Build the chord joining the first and last points of a curve.
    ///
    /// Returns `None` when either slice is empty.
    #[inline]
    pub fn from_endpoints(x: &[T], y: &[T]) -> Option<Self> {
        let start = (*x.first()?, *y.first()?);
        let end = (*x.last()?, *y.last()?);
        Some(Self::new(start, end))
    }

    /// Start point of the chord.
    #[inline]
    pub fn start(&self) -> (T, T) {
        (self.x0, self.y0)
    }

    /// x component of the line vector.
    #[inline]
    pub fn dx(&self) -> T {
        self.dx
    }

    /// y component of the line vector.
    #[inline]
    pub fn dy(&self) -> T {
        self.dy
    }

    /// Euclidean length of the chord.
    #[inline]
    pub fn length(&self) -> T {
        self.length
    }

    /// True when the chord length is zero.
    ///
    /// Besides coinciding endpoints, this also holds for distinct endpoints
    /// whose squared separation underflows.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length == T::zero()
    }

    /// Magnitude of the 2D cross product of the line vector and `(px, py) - start`.
    #[inline]
    pub fn cross_magnitude(&self, px: T, py: T) -> T {
        let vx = px - self.x0;
        let vy = py - self.y0;
        (self.dx() * vy - self.dy() * vx).abs()
    }

    /// Perpendicular distance from `(px, py)` to the line through the chord.
    ///
    /// For a degenerate chord this is `0 / 0`, i.e. NaN.
    #[inline]
    pub fn perpendicular_distance(&self, px: T, py: T) -> T {
        self.cross_magnitude(px, py) / self.length
    }
}
