//! # elbow-rs — Elbow (Knee) Point Detection for Rust
//!
//! A small, dependency-light implementation of the maximum-distance elbow
//! heuristic for model-selection curves.
//!
//! ## What is an elbow?
//!
//! When a metric is plotted against a tuning parameter (inertia against the
//! number of clusters, explained variance against the number of components,
//! error against regularization strength) the curve usually bends sharply
//! once and then flattens. The bend, the *elbow* or *knee*, is a common choice
//! for the parameter value.
//!
//! **How it is located:**
//!
//! 1. Draw the chord from the first point to the last point
//! 2. Measure every point's perpendicular distance to the line through the chord
//! 3. Pick the point farthest away (the first one on ties)
//!
//! The distance of point `(px, py)` from the chord `(x0, y0) → (x1, y1)` is
//!
//! ```text
//! |dx * (py - y0) - dy * (px - x0)| / sqrt(dx² + dy²),   (dx, dy) = (x1 - x0, y1 - y0)
//! ```
//!
//! The result is always one of the input points; nothing is interpolated.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use elbow_rs::prelude::*;
//!
//! let k = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
//! let inertia = vec![1000.0, 420.0, 180.0, 150.0, 130.0, 118.0, 110.0];
//!
//! let (best_k, best_inertia) = find_elbow(&k, &inertia)?;
//! assert_eq!((best_k, best_inertia), (3.0, 180.0));
//! # Result::<(), ElbowError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use elbow_rs::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! let y = vec![0.0, 0.0, 0.0, 5.0, 5.0];
//!
//! let finder = Elbow::new()
//!     .degenerate_chord(DegenerateChord::Error)   // Zero-length chord handling
//!     .return_distances()                         // Keep every point's distance
//!     .build()?;
//!
//! let result = finder.find(&x, &y)?;
//! println!("{}", result);
//! # Result::<(), ElbowError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 5
//!   Chord length: 6.4031242374328485
//!   Elbow index: 2
//!   Elbow point: (2, 0)
//!   Distance: 1.5617376188860608
//!
//! Distances:
//!    Index       Distance
//!   ---------------------
//!        0       0.000000
//!        1       0.780869
//!        2       1.561738 *
//!        3       0.780869
//!        4       0.000000
//! ```
//!
//! ### Result and Error Handling
//!
//! Every entry point returns `Result<_, ElbowError>`:
//!
//! - **Length mismatch**: `x` and `y` differ in length.
//! - **Too few points**: fewer than 2 points cannot define a chord.
//! - **Invalid numeric value**: NaN, infinity, or a value not representable as a float.
//! - **Degenerate chord**: the chord joining the first and last points has zero length.
//!
//! ```rust
//! use elbow_rs::prelude::*;
//!
//! match find_elbow(&[0.0, 1.0, 2.0], &[0.0, 1.0]) {
//!     Ok(point) => println!("Elbow: {:?}", point),
//!     Err(e) => eprintln!("Elbow search failed: {}", e),
//! }
//! ```
//!
//! ### Degenerate Chords
//!
//! If the curve starts and ends at the same point, every distance is `0 / 0`.
//! By default this is an error. To keep IEEE semantics instead (all distances
//! NaN, first point returned) opt in explicitly:
//!
//! ```rust
//! use elbow_rs::prelude::*;
//!
//! let x = [0.0f64, 1.0, 2.0, 0.0];
//! let y = [0.0, 1.0, 0.0, 0.0];
//!
//! let result = Elbow::new()
//!     .degenerate_chord(DegenerateChord::Propagate)
//!     .build()?
//!     .find(&x, &y)?;
//!
//! assert_eq!(result.index, 0);
//! assert!(result.distance.is_nan());
//! # Result::<(), ElbowError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency
//! (`alloc` is still required):
//!
//! ```toml
//! [dependencies]
//! elbow-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## Parameters
//!
//! | Parameter            | Default | Options             | Description                               |
//! |----------------------|---------|---------------------|-------------------------------------------|
//! | **degenerate_chord** | `Error` | `Error`/`Propagate` | Behavior when the chord has zero length   |
//! | **return_distances** | false   | true/false          | Include every point's distance in output  |
//!
//! ## Cargo Features
//!
//! - **`std`** (default): `std::error::Error` for [`prelude::ElbowError`].
//! - **`ndarray`**: accept one-dimensional `ndarray` arrays as input.
//! - **`dev`**: expose internal layers under `internals` for testing.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error type and policies.
mod primitives;

// Layer 2: Math - chord geometry.
//
// Contains the line vector, chord length, cross-product magnitude and
// perpendicular distance.
mod math;

// Layer 3: Algorithms - the maximum-distance scan with first-index tie-breaking.
mod algorithms;

// Layer 4: Engine - validation, execution and result assembly.
mod engine;

// Layer 5: Input - container abstraction and numeric conversion.
mod input;

// High-level API: `find_elbow` and the `ElbowBuilder`.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard elbow-rs prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use elbow_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        DegenerateChord, ElbowBuilder as Elbow, ElbowConfig, ElbowError, ElbowFinder, ElbowInput,
        ElbowResult, find_elbow, find_elbow_from,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal input abstractions.
    pub mod input {
        pub use crate::input::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
