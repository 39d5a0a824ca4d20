//! Replicate injection requests: a typed `sample -> count` map.
//!
//! Counts are [`NonZeroUsize`], so a map that exists is always well formed.
//! Text is validated once here, at the boundary; the sequence builder never
//! sees untyped input.
//!
//! # Accepted text
//! - JSON object: `{"sample1": 2, "sample2": 3}`
//! - shorthand: `sample1=2,sample2=3`
//! - `None`, `null` or blank text: no map
//!
//! Both forms reject a sample listed more than once.
//!
//! # Examples
//! ```
//! use samplelist::replicates::ReplicateMap;
//! let m: ReplicateMap = r#"{"sample1": 2, "sample2": 3}"#.parse().unwrap();
//! assert_eq!(m.count("sample2"), 3);
//! assert_eq!(m.count("sample3"), 1);
//! assert!(ReplicateMap::parse_optional("None").unwrap().is_none());
//! ```
use std::collections::BTreeMap;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::Value;

use crate::error::{Result, SampleListError};
use crate::sample::SampleName;

/// Requested injection count per sample. Names absent from the map count as 1.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReplicateMap {
    counts: BTreeMap<SampleName, NonZeroUsize>,
}

impl ReplicateMap {
    pub fn new() -> Self { Self::default() }

    /// Build from `(name, count)` pairs; a zero count is rejected.
    pub fn from_counts<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<SampleName>,
    {
        let mut map = Self::new();
        for (name, count) in pairs {
            let name = name.into();
            let count = NonZeroUsize::new(count)
                .ok_or_else(|| SampleListError::invalid_spec(format!("count for {name:?} must be a positive integer, got 0")))?;
            map.insert(name, count);
        }
        Ok(map)
    }

    pub fn insert(&mut self, name: impl Into<SampleName>, count: NonZeroUsize) -> Option<NonZeroUsize> {
        self.counts.insert(name.into(), count)
    }

    /// Number of injections requested for `name` (1 when not listed).
    pub fn count(&self, name: &str) -> usize {
        self.counts.get(name).map_or(1, |c| c.get())
    }

    pub fn contains(&self, name: &str) -> bool { self.counts.contains_key(name) }

    pub fn len(&self) -> usize { self.counts.len() }

    pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, NonZeroUsize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Parse replicate text where `None`/`null`/blank means "no map".
    pub fn parse_optional(text: &str) -> Result<Option<Self>> {
        let t = text.trim();
        if t.is_empty() || t == "None" || t == "null" {
            return Ok(None);
        }
        if t.starts_with('{') {
            parse_json(t).map(Some)
        } else {
            parse_shorthand(t).map(Some)
        }
    }
}

impl FromStr for ReplicateMap {
    type Err = SampleListError;
    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::parse_optional(s)?.unwrap_or_default())
    }
}

/// JSON object entries in document order, repeated keys included.
struct JsonEntries(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for JsonEntries {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = JsonEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object of sample -> count")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<JsonEntries, A::Error> {
                let mut entries = Vec::new();
                while let Some(entry) = access.next_entry::<String, Value>()? {
                    entries.push(entry);
                }
                Ok(JsonEntries(entries))
            }
        }

        d.deserialize_map(EntriesVisitor)
    }
}

fn parse_json(text: &str) -> Result<ReplicateMap> {
    let JsonEntries(entries) = serde_json::from_str(text)
        .map_err(|e| SampleListError::invalid_spec(format!("expected a JSON object of sample -> count: {e}")))?;
    let mut map = ReplicateMap::new();
    for (name, value) in entries {
        let count = value
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| SampleListError::invalid_spec(format!("count for {name:?} must be a positive integer, got {value}")))?;
        if map.contains(&name) {
            return Err(SampleListError::invalid_spec(format!("sample {name:?} listed more than once")));
        }
        map.insert(name, count);
    }
    Ok(map)
}

fn parse_shorthand(text: &str) -> Result<ReplicateMap> {
    let mut map = ReplicateMap::new();
    for item in text.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (name, count) = item
            .rsplit_once('=')
            .ok_or_else(|| SampleListError::invalid_spec(format!("expected name=count, got {item:?}")))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(SampleListError::invalid_spec(format!("missing sample name in {item:?}")));
        }
        let count = count
            .trim()
            .parse::<NonZeroUsize>()
            .map_err(|_| SampleListError::invalid_spec(format!("count for {name:?} must be a positive integer, got {:?}", count.trim())))?;
        if map.insert(name, count).is_some() {
            return Err(SampleListError::invalid_spec(format!("sample {name:?} listed more than once")));
        }
    }
    Ok(map)
}
