//! Policy types for degenerate input geometry.
//!
//! ## Purpose
//!
//! This module defines [`DegenerateChord`], which controls what happens when
//! the chord between the first and last points of a curve has zero length.
//!
//! ## Design notes
//!
//! * **Trait Implementation**: Implements `Debug`, `Clone`, `Copy`, `PartialEq`, and `Eq`.
//! * **Re-exported**: Accessible via the prelude and the `api` module.
//!
//! ## Key concepts
//!
//! With a zero-length chord every perpendicular distance is `0 / 0`. The
//! default policy reports this as an error. The propagating policy keeps the
//! IEEE arithmetic, so all distances are NaN and the arg-max resolves to the
//! first point.
//!
//! ## Non-goals
//!
//! * This module does not detect the condition itself (handled by `algorithms`).

/// Handling of a zero-length chord (first point equals last point).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegenerateChord {
    /// Fail with [`ElbowError::DegenerateChord`](crate::primitives::errors::ElbowError::DegenerateChord).
    #[default]
    Error,

    /// Divide by zero anyway: distances become NaN and the first point is returned.
    Propagate,
}
