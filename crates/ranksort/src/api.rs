//! High-level API for ranked sorting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for ranked
//! sorting. It implements a fluent builder pattern for configuring the
//! ordering plan and optional outputs, producing a validated sorter.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with a sensible default plan.
//! * **Validated**: Plans and builder usage are validated during `build()`.
//! * **Reusable**: The built sorter is `Clone`; `sort` consumes one sorter
//!   per run.
//!
//! ## Key concepts
//!
//! * **Default plan**: With no configured criteria, the sorter ranks by
//!   primary key descending with ties broken by secondary key ascending.
//! * **Configuration Flow**: `Ranksort::new()` then chained criteria, ending
//!   in `.build()`.
//! * **One plan parameter**: The plan may be grown criterion by criterion
//!   with `.key()` or set wholesale with `.ranking()`, but not both.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::RankExecutor;
use crate::engine::validator::Validator;
use crate::primitives::permute::invert;

// Publicly re-exported types
pub use crate::engine::output::RankedResult;
pub use crate::ordering::compare::{lexicographic, three_way};
pub use crate::ordering::direction::Direction;
pub use crate::ordering::plan::{compare_with, standard_ranking, KeyOrdering, SortKey};
pub use crate::primitives::errors::RanksortError;
pub use crate::primitives::record::Record;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a ranked sorter.
#[derive(Debug, Clone)]
pub struct RanksortBuilder {
    /// Ordering criteria configured so far.
    pub keys: Vec<KeyOrdering>,

    /// Whether to include the rank mapping in results.
    pub return_ranks: Option<bool>,

    /// Whether the plan was set wholesale via `ranking()`.
    pub(crate) ranking_set: bool,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for RanksortBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RanksortBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            return_ranks: None,
            ranking_set: false,
            duplicate_param: None,
        }
    }

    /// Append one ordering criterion to the plan.
    ///
    /// Criteria apply in the order they are added; later criteria only break
    /// ties left by earlier ones.
    pub fn key(mut self, key: SortKey, direction: Direction) -> Self {
        if self.ranking_set {
            self.duplicate_param = Some("ranking");
        }
        self.keys.push(KeyOrdering::new(key, direction));
        self
    }

    /// Set the whole ordering plan at once.
    ///
    /// The plan is a single logical parameter: combining `ranking()` with
    /// `key()` or calling it twice is rejected at `build()`.
    pub fn ranking(mut self, plan: Vec<KeyOrdering>) -> Self {
        if self.ranking_set || !self.keys.is_empty() {
            self.duplicate_param = Some("ranking");
        }
        self.keys = plan;
        self.ranking_set = true;
        self
    }

    /// Include the rank mapping (input position to rank) in results.
    pub fn return_ranks(mut self) -> Self {
        self.return_ranks = Some(true);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the ranked sorter.
    pub fn build(self) -> Result<RankedSorter, RanksortError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Default plan: primary descending, ties by secondary ascending
        let plan = if self.keys.is_empty() && !self.ranking_set {
            standard_ranking()
        } else {
            self.keys
        };

        Validator::validate_plan(&plan)?;

        Ok(RankedSorter {
            plan,
            return_ranks: self.return_ranks.unwrap_or(false),
        })
    }
}

// ============================================================================
// Ranked Sorter
// ============================================================================

/// Configured ranked sorter.
#[derive(Debug, Clone)]
pub struct RankedSorter {
    /// Validated ordering plan.
    plan: Vec<KeyOrdering>,

    /// Whether to include the rank mapping in results.
    return_ranks: bool,
}

impl RankedSorter {
    /// Rank a sequence of records.
    ///
    /// The output is a permutation of the input: same records, reordered
    /// under the plan. Empty and single-record sequences are valid.
    pub fn sort<T: Float>(self, records: &[Record<T>]) -> Result<RankedResult<T>, RanksortError> {
        Validator::validate_records(records)?;

        // Execute the stable permutation sort
        let ranked = RankExecutor::new(self.plan).run(records);

        // Rank mapping is the inverse of the source-index permutation
        let ranks = if self.return_ranks {
            Some(invert(&ranked.indices))
        } else {
            None
        };

        Ok(RankedResult {
            records: ranked.records,
            source_indices: ranked.indices,
            ranks,
            plan: ranked.plan,
            presorted: ranked.presorted,
        })
    }
}
