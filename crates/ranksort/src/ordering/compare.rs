//! Three-way comparison functions for record keys.
//!
//! ## Purpose
//!
//! This module provides the two primitive comparisons every ranking is built
//! from: a sign-based three-way comparison for numeric primary keys and a
//! code-point lexicographic comparison for textual secondary keys.
//!
//! ## Design notes
//!
//! * **Sign-based**: Numeric comparison inspects which operand orders before
//!   the other. It is never derived by truncating a subtraction to an
//!   integer, so fractional differences (e.g. `1.1` vs `1.10000001`) order
//!   correctly instead of collapsing to "equal".
//! * **Exact equality**: Two primary keys tie only when exactly equal. No
//!   epsilon tolerance is applied.
//! * **Totality**: Unordered float pairs (NaN involved) degrade to `Equal`
//!   so the comparison is total; the validator rejects non-finite keys
//!   before they reach a sort.
//!
//! ## Invariants
//!
//! * Both functions are deterministic and side-effect free.
//! * `three_way(a, b)` agrees with the sign of `a - b` for finite inputs.
//! * `lexicographic` compares by code point, so all uppercase ASCII orders
//!   before all lowercase ASCII.
//!
//! ## Non-goals
//!
//! * This module does not apply sort directions (see `direction`).
//! * This module does not combine criteria (see `plan`).

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Comparison Functions
// ============================================================================

/// Three-way comparison of two primary-key values.
///
/// Returns `Less`, `Equal`, or `Greater` based on which operand orders
/// before the other. Equality is exact. Unordered pairs compare as `Equal`.
#[inline]
pub fn three_way<T: Float>(a: T, b: T) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Code-point lexicographic comparison of two secondary-key values.
#[inline]
pub fn lexicographic(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}
