//! Core types for **samples**, **tray locations** and **sequence rows**.
//!
//! This module holds the data model used across the crate. Sample names are
//! opaque strings: nothing here validates their syntax, and names may repeat
//! in the input list.
//!
//! A [`SequenceRow`] pairs a (possibly suffixed) sample name with the tray
//! location of the vial it is injected from. Replicate injections share the
//! location of their source row.
use core::fmt;

/// Opaque sample identifier as read from the input list (e.g. `"QC_01"`).
pub type SampleName = String;

/// Position of a vial on the sample tray (`start`, `start + 1`, ...).
pub type LocationIndex = i64;

/// Default first tray location.
pub const DEFAULT_START: LocationIndex = 1;

/// A single injection: sample name plus the tray location it is drawn from.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SequenceRow {
    /// Sample name; replicate and duplicate occurrences carry a `_<n>` suffix.
    pub sample: SampleName,
    /// Tray location of the source vial.
    pub location: LocationIndex,
}

impl SequenceRow {
    pub fn new(sample: impl Into<SampleName>, location: LocationIndex) -> Self {
        Self { sample: sample.into(), location }
    }
}

impl fmt::Display for SequenceRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.sample, self.location)
    }
}

/// How the final injection sequence is ordered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RunOrder {
    /// Keep expansion order (base-table order, replicate blocks contiguous).
    AsListed,
    /// Uniform random permutation of all rows. `seed = None` draws from the
    /// thread-local RNG, so every run may differ.
    Randomized { seed: Option<u64> },
}

impl RunOrder {
    /// Build from the CLI-style pair `(randomize, seed)`.
    pub fn from_flags(randomize: bool, seed: Option<u64>) -> Self {
        if randomize { RunOrder::Randomized { seed } } else { RunOrder::AsListed }
    }

    pub fn is_randomized(&self) -> bool {
        matches!(self, RunOrder::Randomized { .. })
    }
}

impl Default for RunOrder {
    fn default() -> Self { RunOrder::Randomized { seed: None } }
}

/// Options for the one-call pipeline [`crate::generate_sample_list`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BuildOptions {
    /// First tray location (default `1`).
    pub start: LocationIndex,
    /// Final ordering (default randomized, unseeded).
    pub order: RunOrder,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { start: DEFAULT_START, order: RunOrder::default() }
    }
}

/// The finished injection sequence: a two-column table of `sample` and `location`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SampleList {
    rows: Vec<SequenceRow>,
}

impl SampleList {
    pub fn new(rows: Vec<SequenceRow>) -> Self { Self { rows } }

    pub fn rows(&self) -> &[SequenceRow] { &self.rows }

    pub fn into_rows(self) -> Vec<SequenceRow> { self.rows }

    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// The `sample` column in row order.
    pub fn samples(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.sample.as_str()).collect()
    }

    /// The `location` column in row order.
    pub fn locations(&self) -> Vec<LocationIndex> {
        self.rows.iter().map(|r| r.location).collect()
    }
}

impl From<Vec<SequenceRow>> for SampleList {
    fn from(rows: Vec<SequenceRow>) -> Self { Self::new(rows) }
}
