//! Output types and result structures for ranked sorting.
//!
//! ## Purpose
//!
//! This module defines the `RankedResult` struct which encapsulates all
//! outputs from a ranked sort: the reordered records, the permutation
//! mapping back to the input, the optional rank mapping, and the plan that
//! produced the order.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: The rank mapping is `Option<Vec<usize>>` and
//!   only populated on request.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Key concepts
//!
//! * **Source indices**: `source_indices[sorted_pos] = original_pos`.
//! * **Ranks**: the inverse mapping, `ranks[original_pos] = sorted_pos`,
//!   counted from zero. The rendered table numbers ranks from 1 for
//!   readability.
//!
//! ## Invariants
//!
//! * `records` and `source_indices` always have the same length.
//! * `source_indices` is a valid permutation of `0..n`.
//! * When populated, `ranks` is the inverse of `source_indices`.
//!
//! ## Non-goals
//!
//! * This module does not perform sorting; it only stores results.
//! * This module does not validate result consistency (responsibility of
//!   the engine).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::ordering::plan::KeyOrdering;
use crate::primitives::record::Record;

// ============================================================================
// Result Structure
// ============================================================================

/// Complete output of a ranked sort.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult<T> {
    /// Records in ranked order.
    pub records: Vec<Record<T>>,

    /// Index mapping where `source_indices[sorted_pos] = original_pos`.
    pub source_indices: Vec<usize>,

    /// Rank per input position (`ranks[original_pos] = sorted_pos`), if
    /// requested.
    pub ranks: Option<Vec<usize>>,

    /// Ordering plan that produced this order.
    pub plan: Vec<KeyOrdering>,

    /// Whether the input was already ordered (fast path taken).
    pub presorted: bool,
}

impl<T: Float> RankedResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of ranked records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the result contains no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check if the rank mapping was computed.
    pub fn has_ranks(&self) -> bool {
        self.ranks.is_some()
    }

    /// Get the rank assigned to an input position, counted from zero.
    ///
    /// Uses the precomputed rank mapping when present, otherwise scans the
    /// source indices in O(n).
    pub fn rank_of(&self, original_pos: usize) -> Option<usize> {
        if let Some(ranks) = &self.ranks {
            return ranks.get(original_pos).copied();
        }
        self.source_indices
            .iter()
            .position(|&idx| idx == original_pos)
    }

    /// Consume the result, yielding the ranked records.
    pub fn into_records(self) -> Vec<Record<T>> {
        self.records
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for RankedResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Records:  {}", self.records.len())?;

        write!(f, "  Ordering:")?;
        for (i, criterion) in self.plan.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {} {}", criterion.key.name(), criterion.direction.name())?;
        }
        writeln!(f)?;

        // Show fast path status
        if self.presorted {
            writeln!(f, "  Presorted: input already ordered")?;
        }

        if self.has_ranks() {
            writeln!(f, "  Ranks:    computed")?;
        }
        writeln!(f)?;

        writeln!(f, "Ranked Records:")?;

        // Build header
        writeln!(
            f,
            "{:>8} {:>12} {:>16} {:>8}",
            "Rank", "Primary", "Secondary", "Source"
        )?;

        // Separator line
        let line_width = 8 + 13 + 17 + 9;
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        // Data rows (show first 10 and last 10 if more than 20 records)
        let n = self.records.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            // Add ellipsis if we skipped rows
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            writeln!(
                f,
                "{:>8} {:>12.4} {:>16} {:>8}",
                idx + 1,
                self.records[idx].primary,
                self.records[idx].secondary,
                self.source_indices[idx]
            )?;
        }

        Ok(())
    }
}
