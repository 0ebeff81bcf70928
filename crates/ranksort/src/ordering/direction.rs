//! Sort direction handling.
//!
//! ## Purpose
//!
//! This module defines the `Direction` enum used to orient a single ordering
//! criterion: ascending keeps a raw comparison as-is, descending reverses it.
//!
//! ## Design notes
//!
//! * **Composable**: Applying a direction to an `Ordering` keeps the raw
//!   comparison functions direction-free.
//! * **Symmetry**: `Descending` is exactly the reversal of `Ascending`;
//!   `Equal` is unchanged by either.
//!
//! ## Invariants
//!
//! * The default direction is always `Ascending`.
//!
//! ## Non-goals
//!
//! * This module does not compare key values (see `compare`).

// External dependencies
use core::cmp::Ordering;

// ============================================================================
// Direction Type
// ============================================================================

/// Orientation of a single ordering criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Smallest value first (raw comparison order).
    #[default]
    Ascending,

    /// Largest value first (reversed comparison order).
    Descending,
}

impl Direction {
    /// Orient a raw three-way comparison in this direction.
    #[inline]
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }

    /// Get the name of the direction.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Direction::Ascending => "Ascending",
            Direction::Descending => "Descending",
        }
    }
}
