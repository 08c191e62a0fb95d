//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer runs an elbow search end to end:
//! - Validation of input arrays and builder configuration
//! - Execution of the maximum-distance scan
//! - Assembly of the result container
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Input
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Orchestration of a single search.
pub mod executor;

/// Result container.
pub mod output;

/// Input and configuration validation.
pub mod validator;
