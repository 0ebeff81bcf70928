//! Keyed record type for ranked sorting.
//!
//! ## Purpose
//!
//! This module defines the `Record` struct, the two-field value type the
//! crate orders: a numeric primary key and a textual secondary key.
//!
//! ## Design notes
//!
//! * **Value semantics**: Records carry no identity beyond their field
//!   values; two field-equal records are interchangeable.
//! * **Generics**: The primary key is generic over `Float` to support both
//!   `f32` and `f64`.
//! * **Immutability**: The library never mutates records; sorting produces a
//!   new sequence.
//!
//! ## Invariants
//!
//! * The secondary key is an owned `String` and therefore always present.
//! * Finiteness of the primary key is a ranking contract enforced by the
//!   validator, not by this type.
//!
//! ## Non-goals
//!
//! * This module does not define ordering between records (see the ordering
//!   layer).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Record Type
// ============================================================================

/// A sortable record with a numeric primary key and a textual secondary key.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<T> {
    /// Primary sort key (finite-precision real number).
    pub primary: T,

    /// Secondary sort key (owned text, compared by code point).
    pub secondary: String,
}

impl<T: Float> Record<T> {
    /// Create a new record from a primary and secondary key.
    #[inline]
    pub fn new(primary: T, secondary: impl Into<String>) -> Self {
        Self {
            primary,
            secondary: secondary.into(),
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Record<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.secondary, self.primary)
    }
}
