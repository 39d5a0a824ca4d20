//! Reading sample names from a headerless, one-name-per-line text file.
//!
//! ### Format
//! - No header row; every non-blank line is one sample name.
//! - The file is read with the `csv` crate, so a name is the **first field** of
//!   its line and may be quoted to contain commas.
//! - Order and duplicates are preserved. Nothing is trimmed or normalized.
//!
//! ### Errors
//! A missing path yields [`SampleListError::NotFound`] before anything is read;
//! read or decode failures yield [`SampleListError::Read`].
//!
//! ### Example
//! ```no_run
//! let names = samplelist::loader::load_sample_names("sample_names.txt").unwrap();
//! println!("loaded {} names", names.len());
//! ```
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{Result, SampleListError};
use crate::sample::SampleName;

/// Load sample names from `path`, failing with `NotFound` if it does not exist.
pub fn load_sample_names<P: AsRef<Path>>(path: P) -> Result<Vec<SampleName>> {
    let p = path.as_ref();
    if !p.exists() {
        return Err(SampleListError::NotFound { path: p.to_path_buf() });
    }
    let file = std::fs::File::open(p)?;
    let names = read_sample_names(file).map_err(|source| SampleListError::Read { path: p.to_path_buf(), source })?;
    tracing::debug!(path = %p.display(), n = names.len(), "loaded sample names");
    Ok(names)
}

/// Parse names from any reader (one per line, no header).
pub fn read_sample_names<R: Read>(rdr: R) -> std::result::Result<Vec<SampleName>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(rdr);
    let mut names = Vec::new();
    for result in reader.records() {
        let rec = result?;
        match rec.get(0) {
            Some(name) if !name.is_empty() => names.push(name.to_string()),
            _ => {}
        }
    }
    Ok(names)
}
