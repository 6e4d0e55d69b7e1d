//! Locator Kernel: worked-square aggregation and map rendering for
//! Maidenhead grid locators.
//!
//! This crate implements the core of the worked-locator map generator:
//! - Deduplicates logged 4-character locators into worked squares and fields
//! - Classifies every cell of the 18x18 field grid (10x10 squares per field)
//! - Renders the map as plain text or as a standalone HTML table
//!
//! Reading the log and persisting the output belong to the application crate;
//! everything here is a pure pass over in-memory data.

pub mod config;
pub mod grid;
pub mod locator;
pub mod render;
pub mod worked;

pub use config::{MapConfig, OutputMode, Palette};
pub use grid::CellClass;
pub use locator::Locator;
pub use render::render;
pub use worked::WorkedSet;
