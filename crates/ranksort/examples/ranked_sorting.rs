//! Comprehensive Ranked Sorting Examples
//!
//! This example demonstrates various ranking scenarios:
//! - Basic ranked sorting with the default plan
//! - Custom ordering plans built criterion by criterion
//! - Rank mapping back to input positions
//! - The presorted fast path and idempotence
//! - Fractional precision in primary keys
//! - Ranking a large dataset
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use ranksort::prelude::*;
#[cfg(feature = "std")]
use std::time::Instant;

#[cfg(feature = "std")]
fn main() -> Result<(), RanksortError> {
    println!("{}", "=".repeat(80));
    println!("Ranksort - Comprehensive Ranked Sorting Examples");
    println!("{}", "=".repeat(80));
    println!();

    // Run all example scenarios
    example_1_basic_ranking()?;
    example_2_custom_plans()?;
    example_3_rank_mapping()?;
    example_4_presorted_fast_path()?;
    example_5_fractional_precision()?;
    example_6_large_dataset()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Basic Ranked Sorting
/// Demonstrates the simplest usage with the default plan
fn example_1_basic_ranking() -> Result<(), RanksortError> {
    println!("Example 1: Basic Ranked Sorting");
    println!("{}", "-".repeat(80));

    // Scores with a tie at 3.5
    let records = vec![
        Record::new(3.5, "Dlice"),
        Record::new(3.7, "Bob"),
        Record::new(3.5, "Charlie"),
        Record::new(3.8, "Akshit"),
    ];

    let sorter = Ranksort::new().build()?;

    let result = sorter.sort(&records)?;
    println!("{}", result);

    /* Expected Output:
    Summary:
      Records:  4
      Ordering: Primary Descending, Secondary Ascending

    Ranked Records:
        Rank      Primary        Secondary   Source
    -----------------------------------------------
           1       3.8000           Akshit        3
           2       3.7000              Bob        1
           3       3.5000          Charlie        2
           4       3.5000            Dlice        0
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Custom Ordering Plans
/// Shows plans built with .key() and set wholesale with .ranking()
fn example_2_custom_plans() -> Result<(), RanksortError> {
    println!("Example 2: Custom Ordering Plans");
    println!("{}", "-".repeat(80));

    let records = vec![
        Record::new(3.5, "Dlice"),
        Record::new(3.7, "Bob"),
        Record::new(3.5, "Charlie"),
        Record::new(3.8, "Akshit"),
    ];

    // Lowest score first, ties still alphabetical
    let result = Ranksort::new()
        .key(Primary, Ascending)
        .key(Secondary, Ascending)
        .build()?
        .sort(&records)?;
    println!("{}", result);

    // A wholesale plan: reverse alphabetical, ignoring scores
    let result = Ranksort::new()
        .ranking(vec![KeyOrdering::new(Secondary, Descending)])
        .build()?
        .sort(&records)?;

    print!("Reverse alphabetical: [");
    for (i, record) in result.records.iter().enumerate() {
        if i > 0 {
            print!(", ");
        }
        print!("{}", record.secondary);
    }
    println!("]");

    /* Expected Output:
    Summary:
      Records:  4
      Ordering: Primary Ascending, Secondary Ascending

    Ranked Records:
        Rank      Primary        Secondary   Source
    -----------------------------------------------
           1       3.5000          Charlie        2
           2       3.5000            Dlice        0
           3       3.7000              Bob        1
           4       3.8000           Akshit        3

    Reverse alphabetical: [Dlice, Charlie, Bob, Akshit]
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Rank Mapping
/// Maps each input position to its rank in the output
fn example_3_rank_mapping() -> Result<(), RanksortError> {
    println!("Example 3: Rank Mapping");
    println!("{}", "-".repeat(80));

    let records = vec![
        Record::new(3.5, "Dlice"),
        Record::new(3.7, "Bob"),
        Record::new(3.5, "Charlie"),
        Record::new(3.8, "Akshit"),
    ];

    let result = Ranksort::new()
        .return_ranks()
        .build()?
        .sort(&records)?;
    println!("{}", result);

    // Look up where each input record landed
    println!("Rank lookup:");
    for (pos, record) in records.iter().enumerate() {
        if let Some(rank) = result.rank_of(pos) {
            println!(
                "  Input {} ({}) ranks at position {}",
                pos,
                record.secondary,
                rank + 1
            );
        }
    }

    /* Expected Output:
    Summary:
      Records:  4
      Ordering: Primary Descending, Secondary Ascending
      Ranks:    computed

    Ranked Records:
        Rank      Primary        Secondary   Source
    -----------------------------------------------
           1       3.8000           Akshit        3
           2       3.7000              Bob        1
           3       3.5000          Charlie        2
           4       3.5000            Dlice        0

    Rank lookup:
      Input 0 (Dlice) ranks at position 4
      Input 1 (Bob) ranks at position 2
      Input 2 (Charlie) ranks at position 3
      Input 3 (Akshit) ranks at position 1
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Presorted Fast Path
/// Sorting ordered input changes nothing and skips the sort pass
fn example_4_presorted_fast_path() -> Result<(), RanksortError> {
    println!("Example 4: Presorted Fast Path");
    println!("{}", "-".repeat(80));

    let records = vec![
        Record::new(3.5, "Dlice"),
        Record::new(3.7, "Bob"),
        Record::new(3.5, "Charlie"),
        Record::new(3.8, "Akshit"),
    ];

    let first = Ranksort::new().build()?.sort(&records)?;
    let second = Ranksort::new().build()?.sort(&first.records)?;

    println!("First pass presorted:  {}", first.presorted);
    println!("Second pass presorted: {}", second.presorted);
    println!("Order unchanged:       {}", first.records == second.records);

    /* Expected Output:
    First pass presorted:  false
    Second pass presorted: true
    Order unchanged:       true
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 5: Fractional Precision
/// Tiny differences in primary keys still decide the order
fn example_5_fractional_precision() -> Result<(), RanksortError> {
    println!("Example 5: Fractional Precision");
    println!("{}", "-".repeat(80));

    let records = vec![Record::new(1.1, "x"), Record::new(1.10000001, "y")];

    let result = Ranksort::new().build()?.sort(&records)?;

    for record in &result.records {
        println!("  {:.8} ({})", record.primary, record.secondary);
    }

    /* Expected Output:
      1.10000001 (y)
      1.10000000 (x)
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 6: Large Dataset
/// Measure execution time for ranking a large shuffled dataset
fn example_6_large_dataset() -> Result<(), RanksortError> {
    println!("Example 6: Large Dataset");
    println!("{}", "-".repeat(80));

    // Generate a larger synthetic dataset
    let n = 10_000;
    let records: Vec<Record<f64>> = (0..n)
        .map(|i| Record::new(((i * 7919) % n) as f64, format!("node-{:05}", i)))
        .collect();

    let start = Instant::now();
    let result = Ranksort::new().build()?.sort(&records)?;
    let duration = start.elapsed();

    println!("Ranked {} records in {:?}", n, duration);
    println!(
        "Top record: {} with primary key {:.0}",
        result.records[0].secondary, result.records[0].primary
    );

    println!();
    Ok(())
}
