//! Worked-locator map generation from WSJT-X logs.
//!
//! The collaborators around the locator kernel:
//! - `logfile`: extracts the locator column from the comma-delimited log
//! - `mapper`: the one-shot pipeline (read, aggregate, render, write)
//!
//! The CLI in `main.rs` validates configuration before any of this runs.

pub mod logfile;
pub mod mapper;
