//! Injection sequence construction: indexing, replicate expansion, suffixing
//! of repeated names and run ordering.
//!
//! The pipeline is `index_names -> expand -> disambiguate_rows -> order_rows`.
//! [`SequenceBuilder`] ties the steps together.
//!
//! ### Naming repeated samples
//! One [`OccurrenceCounter`] walks the expanded rows in order. The first time a
//! name is seen it is left alone; the n-th time it becomes `name_n`. Natural
//! duplicates in the input and replicate rows share the same count, so suffixes
//! are unique across the whole sequence.
//!
//! The counter is a value owned by the caller. [`SequenceBuilder::build`] makes a
//! fresh one per call; [`SequenceBuilder::build_with_counter`] threads a
//! caller-supplied one, and counts then carry over between passes.
use std::collections::HashMap;
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::{Result, SampleListError};
use crate::loader::load_sample_names;
use crate::replicates::ReplicateMap;
use crate::sample::{LocationIndex, RunOrder, SampleList, SampleName, SequenceRow};

/// Assign `start + position` to each name, in input order.
///
/// Fails with [`SampleListError::LocationOverflow`] if the last location would
/// not fit in a [`LocationIndex`].
pub fn index_names(names: &[SampleName], start: LocationIndex) -> Result<Vec<SequenceRow>> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            LocationIndex::try_from(i)
                .ok()
                .and_then(|i| start.checked_add(i))
                .map(|location| SequenceRow::new(name.clone(), location))
                .ok_or(SampleListError::LocationOverflow { start, count: names.len() })
        })
        .collect()
}

/// Repeat each base row `replicates.count(name)` times.
///
/// Repeats of one row stay contiguous and blocks follow base-table order.
/// Without a map (or with an empty one) the base table is returned as is.
pub fn expand(base: &[SequenceRow], replicates: Option<&ReplicateMap>) -> Vec<SequenceRow> {
    let Some(map) = replicates.filter(|m| !m.is_empty()) else {
        return base.to_vec();
    };
    let total = base.iter().map(|r| map.count(&r.sample)).sum();
    let mut out = Vec::with_capacity(total);
    for row in base {
        for _ in 0..map.count(&row.sample) {
            out.push(row.clone());
        }
    }
    out
}

/// Running count of how often each sample name has been seen.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OccurrenceCounter {
    seen: HashMap<SampleName, usize>,
}

impl OccurrenceCounter {
    pub fn new() -> Self { Self::default() }

    /// Record one more sighting of `name` and return its display name:
    /// `name` the first time, `name_<n>` for the n-th sighting after that.
    pub fn disambiguate(&mut self, name: &str) -> SampleName {
        let n = self.seen.entry(name.to_string()).or_insert(0);
        *n += 1;
        if *n > 1 { format!("{name}_{n}") } else { name.to_string() }
    }

    /// How many times `name` has been seen so far.
    pub fn get(&self, name: &str) -> usize {
        self.seen.get(name).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool { self.seen.is_empty() }
}

/// Rename repeated samples in place, in row order, using `counter`.
pub fn disambiguate_rows(rows: &mut [SequenceRow], counter: &mut OccurrenceCounter) {
    for row in rows.iter_mut() {
        row.sample = counter.disambiguate(&row.sample);
    }
}

/// Apply `order` to `rows`. Locations are never renumbered.
pub fn order_rows(mut rows: Vec<SequenceRow>, order: &RunOrder) -> Vec<SequenceRow> {
    match *order {
        RunOrder::AsListed => {}
        RunOrder::Randomized { seed: Some(seed) } => shuffle_rows(&mut rows, &mut StdRng::seed_from_u64(seed)),
        RunOrder::Randomized { seed: None } => shuffle_rows(&mut rows, &mut rand::thread_rng()),
    }
    rows
}

/// Uniform in-place permutation of `rows`.
pub fn shuffle_rows<R: Rng + ?Sized>(rows: &mut [SequenceRow], rng: &mut R) {
    rows.shuffle(rng);
}

/// Builds injection sequences from one ordered list of sample names.
///
/// The base table (names plus tray locations) is fixed at construction;
/// each [`build`](Self::build) derives a new sequence from it.
#[derive(Clone, Debug)]
pub struct SequenceBuilder {
    start: LocationIndex,
    names: Vec<SampleName>,
    base: Vec<SequenceRow>,
}

impl SequenceBuilder {
    /// Load names from `path` and index them from `start`.
    ///
    /// Fails with [`crate::SampleListError::NotFound`] if `path` does not exist.
    pub fn from_path<P: AsRef<Path>>(path: P, start: LocationIndex) -> Result<Self> {
        let names = load_sample_names(path)?;
        Self::from_names(names, start)
    }

    /// Index in-memory names from `start`.
    pub fn from_names<I, S>(names: I, start: LocationIndex) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<SampleName>,
    {
        let names: Vec<SampleName> = names.into_iter().map(Into::into).collect();
        let base = index_names(&names, start)?;
        Ok(Self { start, names, base })
    }

    pub fn start(&self) -> LocationIndex { self.start }

    pub fn names(&self) -> &[SampleName] { &self.names }

    /// One row per input name, locations `start..start + n`.
    pub fn base_table(&self) -> SampleList {
        SampleList::new(self.base.clone())
    }

    /// Expand, rename repeats and order, with a fresh occurrence counter.
    ///
    /// Renaming and ordering run even when `replicates` is `None`: names that
    /// repeat in the input list still become `name_2`, ... and
    /// [`RunOrder::Randomized`] still shuffles.
    pub fn build(&self, replicates: Option<&ReplicateMap>, order: &RunOrder) -> SampleList {
        let mut counter = OccurrenceCounter::new();
        self.build_with_counter(replicates, order, &mut counter)
    }

    /// Like [`build`](Self::build) but threads `counter` through renaming.
    ///
    /// Counts already in `counter` are continued, not reset: passing the same
    /// counter to two builds suffixes every name of the second pass as a repeat.
    pub fn build_with_counter(
        &self,
        replicates: Option<&ReplicateMap>,
        order: &RunOrder,
        counter: &mut OccurrenceCounter,
    ) -> SampleList {
        if let Some(map) = replicates {
            for (name, _) in map.iter().filter(|(n, _)| !self.names.iter().any(|s| s.as_str() == *n)) {
                tracing::warn!(sample = name, "replicate request matches no sample in the list");
            }
        }
        let mut rows = expand(&self.base, replicates);
        tracing::debug!(base = self.base.len(), expanded = rows.len(), "expanded replicate injections");
        disambiguate_rows(&mut rows, counter);
        let rows = order_rows(rows, order);
        tracing::debug!(?order, n = rows.len(), "ordered injection sequence");
        SampleList::new(rows)
    }

    /// Parse `replicates` text, then [`build`](Self::build).
    ///
    /// Malformed text fails with `InvalidSpecification` before any renaming happens.
    pub fn build_from_spec(&self, replicates: &str, order: &RunOrder) -> Result<SampleList> {
        let map = ReplicateMap::parse_optional(replicates)?;
        Ok(self.build(map.as_ref(), order))
    }
}
