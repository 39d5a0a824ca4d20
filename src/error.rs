//! Error type for the sample-list pipeline.
//!
//! Callers branch on the variant rather than inspecting message text.
use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SampleListError {
    /// The sample name source does not exist. Raised before any table is built.
    #[error("the file at location {} does not exist; please provide a valid file location", path.display())]
    NotFound { path: PathBuf },

    /// Tray locations from `start` for `count` samples do not fit in an `i64`.
    #[error("tray locations overflow: start {start} with {count} samples exceeds the location range")]
    LocationOverflow { start: i64, count: usize },

    /// Replicate text could not be parsed into a name -> positive count map.
    #[error("invalid replicate specification: {0}")]
    InvalidSpecification(String),

    /// The source exists but could not be read as one-name-per-line text.
    #[error("failed to read sample names from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Building or writing the output table failed.
    #[error("export error: {0}")]
    Export(#[from] PolarsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SampleListError {
    pub fn invalid_spec(msg: impl Into<String>) -> Self {
        SampleListError::InvalidSpecification(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SampleListError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, SampleListError>;
