//! Input validation for ranking configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for record sequences, ordering
//! plans, and builder configuration. It enforces the ranking contract before
//! any sorting work begins.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Totality**: Empty and single-record sequences are valid; no
//!   well-formed input is ever rejected.
//!
//! ## Key concepts
//!
//! * **Finite Checks**: Primary keys must be finite (no NaN/Inf).
//! * **Plan Constraints**: Plans must be non-empty and name each key once.
//! * **Builder Misuse**: Parameters configured twice are rejected.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//! * Reported indices refer to positions in the input sequence.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::ordering::plan::KeyOrdering;
use crate::primitives::errors::RanksortError;
use crate::primitives::record::Record;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for ranking configuration and input data.
///
/// Provides static methods for validating record sequences and ordering
/// plans. All methods return `Result<(), RanksortError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a record sequence for ranking.
    ///
    /// Empty and single-record sequences are valid: they sort to themselves.
    /// The only contract is that every primary key is finite.
    pub fn validate_records<T: Float>(records: &[Record<T>]) -> Result<(), RanksortError> {
        for (i, record) in records.iter().enumerate() {
            if !record.primary.is_finite() {
                return Err(RanksortError::NonFinitePrimaryKey {
                    index: i,
                    value: record.primary.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        Ok(())
    }

    // ========================================================================
    // Plan Validation
    // ========================================================================

    /// Validate an ordering plan.
    pub fn validate_plan(plan: &[KeyOrdering]) -> Result<(), RanksortError> {
        // Check 1: At least one criterion
        if plan.is_empty() {
            return Err(RanksortError::EmptyKeyPlan);
        }

        // Check 2: No key named twice
        for (i, criterion) in plan.iter().enumerate() {
            if plan[..i].iter().any(|earlier| earlier.key == criterion.key) {
                return Err(RanksortError::DuplicateKey {
                    key: criterion.key.name(),
                });
            }
        }

        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RanksortError> {
        if let Some(param) = duplicate_param {
            return Err(RanksortError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
