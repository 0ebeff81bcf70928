//! Composable key plans for multi-key ordering.
//!
//! ## Purpose
//!
//! This module combines the primitive comparisons into named, reusable
//! ordering rules. A plan is an ordered list of criteria; each criterion
//! names a record key and a direction. Earlier criteria take precedence and
//! later criteria only break ties.
//!
//! ## Design notes
//!
//! * **First difference wins**: `compare_with` applies criteria in order and
//!   returns the first non-equal result.
//! * **Named over inline**: Plans replace ad-hoc comparison closures so the
//!   ordering rule can be tested independently of any sort call site.
//! * **Canonical plan**: `standard_ranking` encodes the default rule of the
//!   crate: primary key descending, ties by secondary key ascending.
//!
//! ## Invariants
//!
//! * A plan imposes a total order on records with finite primary keys.
//! * Records equal under every criterion compare as `Equal`.
//!
//! ## Non-goals
//!
//! * This module does not validate plans (see the engine validator).
//! * This module does not perform sorting (see the engine executor).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::ordering::compare::{lexicographic, three_way};
use crate::ordering::direction::Direction;
use crate::primitives::record::Record;

// ============================================================================
// Key Selection
// ============================================================================

/// Selects which record field a criterion compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// The numeric primary key.
    #[default]
    Primary,

    /// The textual secondary key.
    Secondary,
}

impl SortKey {
    /// Get the name of the key.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            SortKey::Primary => "Primary",
            SortKey::Secondary => "Secondary",
        }
    }
}

// ============================================================================
// Ordering Criterion
// ============================================================================

/// One ordering criterion: a key paired with a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOrdering {
    /// Record field this criterion compares.
    pub key: SortKey,

    /// Orientation of the comparison.
    pub direction: Direction,
}

impl KeyOrdering {
    /// Create a new criterion from a key and a direction.
    #[inline]
    pub const fn new(key: SortKey, direction: Direction) -> Self {
        Self { key, direction }
    }

    /// Compare two records under this single criterion.
    #[inline]
    pub fn compare<T: Float>(&self, a: &Record<T>, b: &Record<T>) -> Ordering {
        let ordering = match self.key {
            SortKey::Primary => three_way(a.primary, b.primary),
            SortKey::Secondary => lexicographic(&a.secondary, &b.secondary),
        };
        self.direction.apply(ordering)
    }
}

// ============================================================================
// Plan Functions
// ============================================================================

/// The canonical ranking plan: primary key descending, ties broken by
/// secondary key ascending.
pub fn standard_ranking() -> Vec<KeyOrdering> {
    vec![
        KeyOrdering::new(SortKey::Primary, Direction::Descending),
        KeyOrdering::new(SortKey::Secondary, Direction::Ascending),
    ]
}

/// Compare two records under an ordered list of criteria.
///
/// Criteria are applied in order; the first to distinguish the records
/// decides the result. Records equal under every criterion (or compared
/// under an empty plan) compare as `Equal`.
#[inline]
pub fn compare_with<T: Float>(plan: &[KeyOrdering], a: &Record<T>, b: &Record<T>) -> Ordering {
    for criterion in plan {
        let ordering = criterion.compare(a, b);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}
