//! WSJT-X log reading: extracting the locator column from each record.
//!
//! A log line looks like
//! `2023-12-24,18:30,2023-12-24,18:31,DL1XYZ,JO52,14.074,FT8,-10,-12,,,`
//! with the contact's locator in column 5 (0-based). The column may be empty
//! and short records do occur; both must pass through without failing the run.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};

/// 0-based index of the locator column in a WSJT-X log record.
const LOCATOR_COLUMN: usize = 5;

/// The locator entry of one record, or `None` for records too short to carry
/// the locator column.
pub fn locator_entry(record: &StringRecord) -> Option<&str> {
    record.get(LOCATOR_COLUMN)
}

/// Read every locator entry from a WSJT-X log file, in log order.
///
/// Empty entries are kept; the aggregation pass filters them out, so the
/// entry count here matches the log's line count rather than the QSO count.
pub fn read_locators(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("failed to open log file {}", path.display()))?;
    locators_from_reader(file)
        .with_context(|| format!("failed to read log file {}", path.display()))
}

/// Read locator entries from any byte stream of log records.
pub fn locators_from_reader(reader: impl Read) -> Result<Vec<String>> {
    let mut log = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut locators = Vec::new();
    for record in log.records() {
        let record = record.context("malformed log record")?;
        if let Some(locator) = locator_entry(&record) {
            locators.push(locator.to_string());
        }
    }
    Ok(locators)
}
