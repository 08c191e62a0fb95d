//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the elbow search: scanning every point of a curve,
//! measuring its perpendicular distance to the endpoint chord, and selecting
//! the first point that attains the maximum.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Maximum-distance elbow search.
pub mod elbow;
