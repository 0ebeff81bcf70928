//! # ranksort — Ranked Collection Sorting for Rust
//!
//! Deterministic multi-key ranked sorting for keyed records: highest primary
//! key first, ties broken by secondary key in lexicographic order, with
//! stable handling of fully-equal records and a permutation mapping back to
//! the input.
//!
//! ## What is ranked sorting?
//!
//! A ranked sort orders a sequence of records by a list of criteria applied
//! in precedence order. Each criterion names a record key and a direction;
//! the first criterion to distinguish two records decides their order and
//! later criteria only break ties. The comparison of numeric keys is a
//! sign-based three-way comparison with exact equality, so fractional
//! differences order correctly instead of collapsing to "equal".
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use ranksort::prelude::*;
//!
//! let records = vec![
//!     Record::new(3.5, "Dlice"),
//!     Record::new(3.7, "Bob"),
//!     Record::new(3.5, "Charlie"),
//!     Record::new(3.8, "Akshit"),
//! ];
//!
//! // Build the sorter (default plan: primary descending, ties by secondary ascending)
//! let sorter = Ranksort::new().build()?;
//!
//! // Rank the records
//! let result = sorter.sort(&records)?;
//!
//! println!("{}", result);
//! # Result::<(), RanksortError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Records:  4
//!   Ordering: Primary Descending, Secondary Ascending
//!
//! Ranked Records:
//!     Rank      Primary        Secondary   Source
//! -----------------------------------------------
//!        1       3.8000           Akshit        3
//!        2       3.7000              Bob        1
//!        3       3.5000          Charlie        2
//!        4       3.5000            Dlice        0
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use ranksort::prelude::*;
//!
//! let records = vec![
//!     Record::new(88.0, "delta"),
//!     Record::new(92.5, "alpha"),
//!     Record::new(88.0, "bravo"),
//! ];
//!
//! // Build a sorter with an explicit plan and the rank mapping enabled
//! let sorter = Ranksort::new()
//!     .key(Primary, Descending)  // Highest primary key first
//!     .key(Secondary, Ascending) // Break ties lexicographically
//!     .return_ranks()            // Include input position -> rank mapping
//!     .build()?;
//!
//! let result = sorter.sort(&records)?;
//!
//! assert_eq!(result.records[0].secondary, "alpha");
//! assert_eq!(result.ranks, Some(vec![2, 0, 1]));
//! assert_eq!(result.rank_of(1), Some(0));
//! # Result::<(), RanksortError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! The `sort` method returns a `Result<RankedResult<T>, RanksortError>`.
//!
//! - **`Ok(RankedResult<T>)`**: Contains the ranked records and mappings.
//! - **`Err(RanksortError)`**: Indicates a failure (e.g., a non-finite
//!   primary key, an invalid plan).
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use ranksort::prelude::*;
//! # let records = vec![Record::new(3.5, "Dlice"), Record::new(3.7, "Bob")];
//!
//! let sorter = Ranksort::new().build()?;
//!
//! let result = sorter.sort(&records)?;
//! // or to be more explicit:
//! // let result: RankedResult<f64> = sorter.sort(&records)?;
//! # Result::<(), RanksortError>::Ok(())
//! ```
//!
//! But you can also handle results explicitly:
//!
//! ```rust
//! use ranksort::prelude::*;
//!
//! let records = vec![
//!     Record::new(f64::NAN, "corrupt"),
//!     Record::new(3.7, "Bob"),
//! ];
//!
//! let sorter = Ranksort::new().build()?;
//!
//! match sorter.sort(&records) {
//!     Ok(result) => {
//!         // result is RankedResult<f64>
//!         println!("Ranked: {:?}", result.records);
//!     }
//!     Err(e) => {
//!         // e is RanksortError
//!         eprintln!("Ranking failed: {}", e);
//!     }
//! }
//! # Result::<(), RanksortError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments for embedded devices and
//! resource-constrained systems. Disable default features to remove the
//! standard library dependency:
//!
//! ```toml
//! [dependencies]
//! ranksort = { version = "0.1", default-features = false }
//! ```
//!
//! **Minimal example for embedded systems:**
//!
//! ```rust
//! # #[cfg(feature = "std")] {
//! use ranksort::prelude::*;
//!
//! // In an embedded context (e.g., prioritizing sensor channels)
//! fn rank_channels() -> Result<(), RanksortError> {
//!     // Small set of channel readings
//!     let readings = vec![
//!         Record::new(0.72_f32, "probe-a"),
//!         Record::new(0.91, "probe-b"),
//!         Record::new(0.72, "probe-c"),
//!     ];
//!
//!     let result = Ranksort::new().build()?.sort(&readings)?;
//!
//!     // Strongest reading first, ties by label
//!     // ...
//!
//!     Ok(())
//! }
//! # rank_channels().unwrap();
//! # }
//! ```
//!
//! **Tips for embedded/no_std usage:**
//! - Use `f32` instead of `f64` to reduce memory footprint
//! - Keep secondary keys short to reduce heap pressure
//! - Skip `.return_ranks()` unless the inverse mapping is needed
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - record type, errors, and permutation utilities.
mod primitives;

// Layer 2: Ordering - comparison functions, directions, and key plans.
mod ordering;

// Layer 3: Engine - validation, execution, and result assembly.
mod engine;

// High-level fluent API for ranked sorting.
mod api;

// Standard ranksort prelude.
pub mod prelude {
    pub use crate::api::{
        compare_with, lexicographic, standard_ranking, three_way,
        Direction::{self, Ascending, Descending},
        KeyOrdering, RankedResult, RankedSorter, RanksortBuilder as Ranksort, RanksortError,
        Record,
        SortKey::{self, Primary, Secondary},
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod ordering {
        pub use crate::ordering::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
