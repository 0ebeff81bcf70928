//! Execution engine for ranked sorting.
//!
//! ## Purpose
//!
//! This module provides the executor that turns a validated record sequence
//! and an ordering plan into a ranked sequence plus its permutation mapping.
//!
//! ## Design notes
//!
//! * **Stable**: Uses stable sorting so records equal under every criterion
//!   keep their relative input order.
//! * **Index sort**: Sorts positions rather than records to keep the sorted
//!   elements small and avoid moving owned strings during comparisons.
//! * **Fast path**: Already-ordered input is detected with one adjacent-pair
//!   pass and returned with an identity mapping.
//!
//! ## Invariants
//!
//! * The output contains the same records as the input, reordered.
//! * The index mapping is a valid permutation of `0..n` with
//!   `indices[sorted_pos] = original_pos`.
//! * The fast path result equals what the stable sort would produce.
//!
//! ## Non-goals
//!
//! * This module does not validate input data or plans (handled by
//!   `validator`).
//! * This module does not compute inverse rank mappings (handled by
//!   `permute`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::ordering::plan::{compare_with, KeyOrdering};
use crate::primitives::permute::is_permutation;
use crate::primitives::record::Record;

// ============================================================================
// Output Structure
// ============================================================================

/// Output from ranking execution.
#[derive(Debug, Clone)]
pub struct RankedData<T> {
    /// Records reordered under the plan.
    pub records: Vec<Record<T>>,

    /// Index mapping where `indices[sorted_pos] = original_pos`.
    pub indices: Vec<usize>,

    /// Ordering plan that produced this order.
    pub plan: Vec<KeyOrdering>,

    /// Whether the input was already ordered (fast path taken).
    pub presorted: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Ranking executor holding a validated ordering plan.
#[derive(Debug, Clone)]
pub struct RankExecutor {
    /// Ordering criteria applied in sequence.
    pub plan: Vec<KeyOrdering>,
}

impl RankExecutor {
    /// Create a new executor from a validated plan.
    pub fn new(plan: Vec<KeyOrdering>) -> Self {
        Self { plan }
    }

    /// Execute the ranking over a record sequence.
    ///
    /// 1. Checks if records are already ordered under the plan (fast path).
    /// 2. Otherwise pairs positions with records and stable-sorts the
    ///    positions by the plan comparator.
    /// 3. Materializes the reordered records and the permutation mapping.
    pub fn run<T: Float>(self, records: &[Record<T>]) -> RankedData<T> {
        let n = records.len();

        // Fast path: check if records are already ordered under the plan
        let presorted = records
            .windows(2)
            .all(|pair| compare_with(&self.plan, &pair[0], &pair[1]) != Ordering::Greater);
        if presorted {
            return RankedData {
                records: records.to_vec(),
                indices: (0..n).collect(),
                plan: self.plan,
                presorted: true,
            };
        }

        // Sort positions instead of records to keep the sorted elements small
        let mut order: Vec<usize> = (0..n).collect();

        // Stable sort so records equal under every criterion keep input order
        order.sort_by(|&a, &b| compare_with(&self.plan, &records[a], &records[b]));

        debug_assert!(
            is_permutation(&order),
            "run: sorted index mapping must be a permutation"
        );

        RankedData {
            records: order.iter().map(|&i| records[i].clone()).collect(),
            indices: order,
            plan: self.plan,
            presorted: false,
        }
    }
}
