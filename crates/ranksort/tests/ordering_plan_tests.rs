//! Tests for directions and composable key plans.
//!
//! These tests verify the pieces a multi-key ordering rule is assembled
//! from:
//! - Direction application (ascending keeps, descending reverses)
//! - Single-criterion comparison of records
//! - The canonical ranking plan
//! - First-difference-wins composition over a list of criteria
//!
//! ## Test Organization
//!
//! 1. **Direction** - Orientation of a raw comparison
//! 2. **Sort Keys** - Key selection and naming
//! 3. **Single Criterion** - KeyOrdering comparison per key and direction
//! 4. **Plan Composition** - standard_ranking and compare_with

use std::cmp::Ordering;

use ranksort::prelude::*;

// ============================================================================
// Direction Tests
// ============================================================================

/// Test that Ascending keeps a raw comparison unchanged.
#[test]
fn test_direction_ascending_identity() {
    assert_eq!(Ascending.apply(Ordering::Less), Ordering::Less);
    assert_eq!(Ascending.apply(Ordering::Equal), Ordering::Equal);
    assert_eq!(Ascending.apply(Ordering::Greater), Ordering::Greater);
}

/// Test that Descending reverses a raw comparison.
///
/// Equal must stay Equal under reversal.
#[test]
fn test_direction_descending_reverses() {
    assert_eq!(Descending.apply(Ordering::Less), Ordering::Greater);
    assert_eq!(Descending.apply(Ordering::Equal), Ordering::Equal);
    assert_eq!(Descending.apply(Ordering::Greater), Ordering::Less);
}

/// Test direction names and the default direction.
#[test]
fn test_direction_names_and_default() {
    assert_eq!(Ascending.name(), "Ascending");
    assert_eq!(Descending.name(), "Descending");
    assert_eq!(Direction::default(), Ascending);
}

// ============================================================================
// Sort Key Tests
// ============================================================================

/// Test key names and the default key.
#[test]
fn test_sort_key_names_and_default() {
    assert_eq!(Primary.name(), "Primary");
    assert_eq!(Secondary.name(), "Secondary");
    assert_eq!(SortKey::default(), Primary);
}

// ============================================================================
// Single Criterion Tests
// ============================================================================

/// Test a primary-key criterion in both directions.
#[test]
fn test_criterion_primary() {
    let low = Record::new(3.5, "Charlie");
    let high = Record::new(3.8, "Akshit");

    let ascending = KeyOrdering::new(Primary, Ascending);
    assert_eq!(ascending.compare(&low, &high), Ordering::Less);

    let descending = KeyOrdering::new(Primary, Descending);
    assert_eq!(descending.compare(&low, &high), Ordering::Greater);
}

/// Test a secondary-key criterion in both directions.
#[test]
fn test_criterion_secondary() {
    let a = Record::new(3.5, "Charlie");
    let b = Record::new(3.5, "Dlice");

    let ascending = KeyOrdering::new(Secondary, Ascending);
    assert_eq!(ascending.compare(&a, &b), Ordering::Less);

    let descending = KeyOrdering::new(Secondary, Descending);
    assert_eq!(descending.compare(&a, &b), Ordering::Greater);
}

/// Test that a criterion ignores the other key entirely.
///
/// Two records equal in the compared key must tie regardless of how the
/// uncompared key differs.
#[test]
fn test_criterion_ignores_other_key() {
    let a = Record::new(3.5, "Zed");
    let b = Record::new(3.5, "Amy");

    let primary_only = KeyOrdering::new(Primary, Descending);
    assert_eq!(primary_only.compare(&a, &b), Ordering::Equal);

    let c = Record::new(1.0, "Same");
    let d = Record::new(9.0, "Same");

    let secondary_only = KeyOrdering::new(Secondary, Ascending);
    assert_eq!(secondary_only.compare(&c, &d), Ordering::Equal);
}

// ============================================================================
// Plan Composition Tests
// ============================================================================

/// Test the shape of the canonical ranking plan.
///
/// The plan must order by primary key descending first and break ties by
/// secondary key ascending.
#[test]
fn test_standard_ranking_shape() {
    let plan = standard_ranking();

    assert_eq!(plan.len(), 2, "Canonical plan has two criteria");
    assert_eq!(plan[0], KeyOrdering::new(Primary, Descending));
    assert_eq!(plan[1], KeyOrdering::new(Secondary, Ascending));
}

/// Test that the first distinguishing criterion decides.
///
/// When primary keys differ, the secondary key must not influence the
/// result.
#[test]
fn test_compare_with_first_difference_wins() {
    let plan = standard_ranking();

    // Higher primary orders first despite the later secondary
    let a = Record::new(3.8, "Zed");
    let b = Record::new(3.5, "Amy");
    assert_eq!(compare_with(&plan, &a, &b), Ordering::Less);
    assert_eq!(compare_with(&plan, &b, &a), Ordering::Greater);
}

/// Test tie-breaking through the second criterion.
#[test]
fn test_compare_with_tie_break() {
    let plan = standard_ranking();

    let a = Record::new(3.5, "Charlie");
    let b = Record::new(3.5, "Dlice");
    assert_eq!(compare_with(&plan, &a, &b), Ordering::Less);
}

/// Test records equal under every criterion.
#[test]
fn test_compare_with_full_equality() {
    let plan = standard_ranking();

    let a = Record::new(3.5, "Charlie");
    let b = Record::new(3.5, "Charlie");
    assert_eq!(compare_with(&plan, &a, &b), Ordering::Equal);
}

/// Test that an empty plan compares everything as equal.
#[test]
fn test_compare_with_empty_plan() {
    let plan: Vec<KeyOrdering> = Vec::new();

    let a = Record::new(1.0, "a");
    let b = Record::new(2.0, "b");
    assert_eq!(compare_with(&plan, &a, &b), Ordering::Equal);
}

/// Test a plan with reversed precedence.
///
/// With the secondary key first, equal secondaries fall through to the
/// primary criterion.
#[test]
fn test_compare_with_secondary_first_plan() {
    let plan = vec![
        KeyOrdering::new(Secondary, Ascending),
        KeyOrdering::new(Primary, Descending),
    ];

    let a = Record::new(1.0, "Same");
    let b = Record::new(9.0, "Same");
    assert_eq!(compare_with(&plan, &a, &b), Ordering::Greater);

    let c = Record::new(1.0, "Alpha");
    let d = Record::new(9.0, "Beta");
    assert_eq!(compare_with(&plan, &c, &d), Ordering::Less);
}
