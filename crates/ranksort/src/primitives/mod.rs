//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data types and utility functions used
//! throughout the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Ordering
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Keyed record type.
pub mod record;

/// Shared error types.
pub mod errors;

/// Permutation-index utilities.
pub mod permute;
