//! Layer 2: Ordering
//!
//! # Purpose
//!
//! This layer provides the pure comparison logic of the crate: three-way key
//! comparisons, sort directions, and composable key plans. Everything here
//! is deterministic and allocation-free at comparison time.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Ordering ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Three-way key comparison functions.
pub mod compare;

/// Sort direction handling.
pub mod direction;

/// Composable key plans.
pub mod plan;
