#![cfg(feature = "dev")]
//! Tests for permutation utilities.
//!
//! These tests verify the index bookkeeping used when ranking:
//! - Inverting a sorted-to-original index mapping
//! - Recognizing valid permutations of 0..n
//!
//! ## Test Organization
//!
//! 1. **Inversion** - invert with identity, shuffled, and involutive inputs
//! 2. **Permutation Checks** - is_permutation on valid and corrupt mappings

use ranksort::internals::primitives::permute::{invert, is_permutation};

// ============================================================================
// Inversion Tests
// ============================================================================

/// Test inverting the identity mapping.
///
/// The identity permutation is its own inverse.
#[test]
fn test_invert_identity() {
    let indices = vec![0, 1, 2, 3];

    assert_eq!(invert(&indices), vec![0, 1, 2, 3]);
}

/// Test inversion of a known mapping.
///
/// If sorted position 0 holds original record 1, then original record 1
/// ranks at position 0 in the inverse.
#[test]
fn test_invert_known_mapping() {
    let indices = vec![1, 2, 0];

    assert_eq!(invert(&indices), vec![2, 0, 1]);
}

/// Test that inverting twice recovers the original mapping.
#[test]
fn test_invert_is_involutive() {
    let indices = vec![2, 0, 3, 1];

    let twice = invert(&invert(&indices));

    assert_eq!(twice, indices, "Double inversion should round-trip");
}

/// Test inverting a self-inverse mapping.
#[test]
fn test_invert_reversal() {
    let indices = vec![2, 1, 0];

    assert_eq!(invert(&indices), vec![2, 1, 0]);
}

/// Test inverting an empty mapping.
#[test]
fn test_invert_empty() {
    let indices: Vec<usize> = vec![];

    assert!(invert(&indices).is_empty());
}

// ============================================================================
// Permutation Check Tests
// ============================================================================

/// Test recognition of valid permutations.
#[test]
fn test_is_permutation_valid() {
    assert!(is_permutation(&[0, 1, 2, 3]));
    assert!(is_permutation(&[3, 1, 2, 0]));
    assert!(is_permutation(&[0]));
}

/// Test rejection of out-of-range indices.
#[test]
fn test_is_permutation_out_of_range() {
    assert!(!is_permutation(&[0, 3]), "Index 3 exceeds length 2");
}

/// Test rejection of repeated indices.
#[test]
fn test_is_permutation_repeated() {
    assert!(!is_permutation(&[0, 0, 1]), "Index 0 appears twice");
}

/// Test that the empty mapping is a valid permutation.
#[test]
fn test_is_permutation_empty() {
    assert!(is_permutation(&[]));
}
