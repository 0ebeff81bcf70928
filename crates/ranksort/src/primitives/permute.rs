//! Permutation-index utilities for rank mapping.
//!
//! ## Purpose
//!
//! This module provides utilities for working with the index mappings a
//! ranked sort produces: inverting a permutation to recover per-input ranks
//! and checking that a mapping is a valid permutation.
//!
//! ## Key concepts
//!
//! ### Two directions of the same mapping
//! 1. **Source indices**: `indices[sorted_pos] = original_pos`, produced by
//!    the executor.
//! 2. **Ranks**: the inverse, `ranks[original_pos] = sorted_pos`, assigning
//!    each input position its rank.
//!
//! ## Invariants
//!
//! * Inverting a valid permutation of `0..n` yields a valid permutation.
//! * Inversion is an involution: inverting twice restores the input.
//!
//! ## Non-goals
//!
//! * This module does not sort records or build permutations.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// ============================================================================
// Permutation Functions
// ============================================================================

/// Invert a permutation mapping in O(n) time.
///
/// Given `indices` where `indices[sorted_pos] = original_pos`, produces the
/// inverse mapping where `inverse[original_pos] = sorted_pos`. Applied to a
/// ranking this assigns each input position its rank, counted from zero.
#[inline]
pub fn invert(indices: &[usize]) -> Vec<usize> {
    let n = indices.len();
    let mut inverse = vec![0usize; n];

    // Map each sorted position back to its original position
    for (sorted_idx, &orig_idx) in indices.iter().enumerate() {
        inverse[orig_idx] = sorted_idx;
    }

    inverse
}

/// Check that an index mapping is a valid permutation of `0..n`.
pub fn is_permutation(indices: &[usize]) -> bool {
    let n = indices.len();
    let mut seen = vec![false; n];

    for &idx in indices {
        if idx >= n || seen[idx] {
            return false;
        }
        seen[idx] = true;
    }

    true
}
