#![forbid(unsafe_code)]
//! # samplelist
//!
//! Build **injection sequences** for GC/LC-MS runs from a plain list of sample
//! names: each name gets a **tray location**, requested **replicate injections**
//! are expanded in place, and every repeated name receives a stable numeric
//! suffix so each row of the sequence is unique.
//!
//! ## Pipeline
//! 1. [`loader`]: read names, one per line, no header.
//! 2. [`sequence::index_names`]: locations `start, start + 1, ...`.
//! 3. [`sequence::expand`]: repeat rows per a [`ReplicateMap`].
//! 4. [`sequence::disambiguate_rows`]: `name`, `name_2`, `name_3`, ...
//! 5. [`sequence::order_rows`]: keep the order or shuffle uniformly.
//!
//! Locations are **not** renumbered after shuffling: a location always points
//! at the vial the sample is drawn from, not at the position in the run.
//!
//! ## Examples
//! ```rust
//! use samplelist::{ReplicateMap, RunOrder, SequenceBuilder};
//!
//! let builder = SequenceBuilder::from_names(["sample1", "sample2", "sample3"], 1).unwrap();
//! let reps: ReplicateMap = r#"{"sample1": 2, "sample2": 3}"#.parse().unwrap();
//! let list = builder.build(Some(&reps), &RunOrder::AsListed);
//! assert_eq!(
//!     list.samples(),
//!     ["sample1", "sample1_2", "sample2", "sample2_2", "sample2_3", "sample3"]
//! );
//! assert_eq!(list.locations(), [1, 1, 2, 2, 2, 3]);
//! ```

pub mod sample;
pub mod error;
pub mod loader;
pub mod replicates;
pub mod sequence;
pub mod export;

use std::path::Path;

pub use error::{Result, SampleListError};
pub use replicates::ReplicateMap;
pub use sample::{BuildOptions, LocationIndex, RunOrder, SampleList, SampleName, SequenceRow, DEFAULT_START};
pub use sequence::{OccurrenceCounter, SequenceBuilder};

/// Load names from `path` and build the injection sequence in one call.
///
/// Fails with [`SampleListError::NotFound`] before any work if `path` does not exist.
///
/// # Examples
/// ```
/// let err = samplelist::generate_sample_list("invalid/location", None, &Default::default()).unwrap_err();
/// assert!(err.is_not_found());
/// ```
pub fn generate_sample_list<P: AsRef<Path>>(
    path: P,
    replicates: Option<&ReplicateMap>,
    opts: &BuildOptions,
) -> Result<SampleList> {
    let builder = SequenceBuilder::from_path(path, opts.start)?;
    Ok(builder.build(replicates, &opts.order))
}

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    #[test]
    fn default_options_start_at_one_and_randomize() {
        let o = BuildOptions::default();
        assert_eq!(o.start, 1);
        assert!(o.order.is_randomized());
    }

    #[test]
    fn missing_source_fails_before_building() {
        let opts = BuildOptions { start: 1, order: RunOrder::AsListed };
        match generate_sample_list("does/not/exist.txt", None, &opts) {
            Err(SampleListError::NotFound { path }) => assert!(path.ends_with("exist.txt")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
