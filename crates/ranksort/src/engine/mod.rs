//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates ranked sorting: it validates inputs and plans,
//! executes the stable permutation sort, and assembles the public result
//! type.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Ordering
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and plan validation.
pub mod validator;

/// Ranking execution.
pub mod executor;

/// Public result types.
pub mod output;
