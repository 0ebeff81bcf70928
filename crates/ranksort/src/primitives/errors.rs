//! Error types for ranked sorting operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while configuring or
//! running a ranked sort, covering input validation and plan construction.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending
//!   index and key value).
//! * **No-std**: Variants avoid heap allocation so they work without `std`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Non-finite primary keys are rejected up front.
//! 2. **Plan validation**: Empty plans and repeated keys are rejected.
//! 3. **Builder misuse**: Parameters configured more than once are rejected.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for ranked sorting operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RanksortError {
    /// A record's primary key is NaN or infinite.
    NonFinitePrimaryKey {
        /// Position of the offending record in the input sequence.
        index: usize,
        /// The non-finite value, widened to `f64` for reporting.
        value: f64,
    },

    /// An explicitly configured plan contains no ordering criteria.
    EmptyKeyPlan,

    /// The same key appears more than once in a single plan.
    DuplicateKey {
        /// Name of the repeated key.
        key: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RanksortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::NonFinitePrimaryKey { index, value } => {
                write!(
                    f,
                    "Non-finite primary key at index {index}: {value} (must be finite)"
                )
            }
            Self::EmptyKeyPlan => {
                write!(f, "Empty key plan (at least one ordering criterion is required)")
            }
            Self::DuplicateKey { key } => {
                write!(f, "Key '{key}' appears more than once in the ordering plan")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RanksortError {}
