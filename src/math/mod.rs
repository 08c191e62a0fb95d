//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure geometric functions used for elbow detection:
//! - Chord construction between two points
//! - 2D cross-product magnitude and perpendicular distance to the chord
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Input
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Chord geometry and perpendicular distances.
pub mod chord;
