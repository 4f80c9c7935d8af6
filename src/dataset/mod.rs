//! Labeled corpus loading and class balancing.
//!
//! The training corpus is a UTF-8 CSV with a `Comment,Sentiment` header:
//! column 0 is the raw text, column 1 the label. Messy rows are tolerated
//! per-row: rows with fewer than two columns and rows with an empty label
//! are skipped without raising an error.

pub mod balance;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use balance::balance;

/// One labeled raw text, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSample {
    /// Raw comment text.
    pub text: String,
    /// Label token, trimmed of surrounding whitespace.
    pub label: String,
}

impl RawSample {
    /// Create a sample, trimming the label.
    pub fn new<T: Into<String>, L: AsRef<str>>(text: T, label: L) -> Self {
        RawSample {
            text: text.into(),
            label: label.as_ref().trim().to_string(),
        }
    }
}

/// Load a labeled corpus from a CSV file.
///
/// The header row is skipped. Rows with fewer than two columns or an empty
/// label are dropped silently.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<RawSample>> {
    let file = File::open(path.as_ref())?;
    read_corpus(file)
}

/// Load a labeled corpus from any reader producing CSV bytes.
pub fn read_corpus<R: Read>(reader: R) -> Result<Vec<RawSample>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut samples = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if record.len() < 2 {
            continue;
        }

        let label = record[1].trim();
        if label.is_empty() {
            continue;
        }

        samples.push(RawSample::new(&record[0], label));
    }

    log::debug!("loaded {} samples", samples.len());
    Ok(samples)
}
