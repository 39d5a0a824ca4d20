//! Tabular view and CSV export of an injection sequence.
//!
//! The table has exactly two columns, `sample` (str) and `location` (i64), in
//! row order. CSV output has a header row and no index column.
use std::path::Path;

use polars::prelude::*;

use crate::error::Result;
use crate::sample::SampleList;

/// File name used when the caller does not choose one.
pub const DEFAULT_EXPORT_FILE: &str = "sample_list_result.csv";

impl SampleList {
    /// Build a polars `DataFrame` with columns `sample` and `location`.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let samples: Vec<String> = self.rows().iter().map(|r| r.sample.clone()).collect();
        let locations: Vec<i64> = self.rows().iter().map(|r| r.location).collect();
        df!(
            "sample"   => samples,
            "location" => locations,
        )
    }
}

/// Write `list` as CSV to any writer.
pub fn write_csv_to<W: std::io::Write>(list: &SampleList, w: W) -> Result<()> {
    let mut df = list.to_dataframe()?;
    CsvWriter::new(w).include_header(true).finish(&mut df)?;
    Ok(())
}

/// Write `list` as CSV to `path`, replacing any existing file.
pub fn write_csv<P: AsRef<Path>>(list: &SampleList, path: P) -> Result<()> {
    let p = path.as_ref();
    let file = std::fs::File::create(p)?;
    write_csv_to(list, file)?;
    tracing::info!(path = %p.display(), rows = list.len(), "exported sample list");
    Ok(())
}

/// Render the table for the console with Polars' pretty-printer.
///
/// Truncation follows the `POLARS_FMT_*` environment; this function never
/// changes it.
pub fn render_table(list: &SampleList) -> Result<String> {
    let df = list.to_dataframe()?;
    Ok(df.to_string())
}
