//! Layer 1: Primitives
//!
//! Core building blocks and types.
//!
//! This layer provides the shared error type and the policy enums consumed by
//! the higher layers. It has zero internal dependencies within the crate.
//!
//! # Module Organization
//!
//! - **errors**: Shared error type (ElbowError)
//! - **policy**: Degenerate-chord handling policy
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Input
//!   ↓
//! Layer 4: Engine (executor, output, validator)
//!   ↓
//! Layer 3: Algorithms (elbow)
//!   ↓
//! Layer 2: Math (chord)
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
///
/// Provides:
/// - Unified `ElbowError` enum
/// - Specific error variants
pub mod errors;

/// Policy types.
///
/// Provides:
/// - Zero-length chord handling
pub mod policy;
