//! The one-shot mapping pipeline: read log, aggregate, render, write.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use locator_kernel::config::MapConfig;
use locator_kernel::render;
use locator_kernel::worked::WorkedSet;

use crate::logfile;

/// Configuration for one mapping run.
#[derive(Debug, Clone)]
pub struct MapperConfig {
    /// WSJT-X log file to read.
    pub logfile: PathBuf,
    /// Output base path; the mode's suffix is appended.
    pub outfile: PathBuf,
    /// Render configuration handed to the kernel.
    pub map: MapConfig,
}

/// What a run produced, for the caller to report.
#[derive(Debug, Clone)]
pub struct MapReport {
    /// Non-empty log entries (QSOs with a locator).
    pub contacts: usize,
    /// Distinct worked fields.
    pub fields: usize,
    /// Distinct worked squares.
    pub squares: usize,
    /// Where the map was written.
    pub output_path: PathBuf,
}

/// One-shot map generation: a single blocking pass with no retries; re-running
/// on the same input reproduces identical output.
pub struct Mapper {
    config: MapperConfig,
}

impl Mapper {
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<MapReport> {
        let locators = logfile::read_locators(&self.config.logfile)?;
        debug!(entries = locators.len(), "log entries read");

        let worked = WorkedSet::from_locators(&locators);
        info!(
            contacts = worked.contacts(),
            squares = worked.square_count(),
            fields = worked.field_count(),
            "worked squares aggregated"
        );

        let document = render::render(&worked, &self.config.map);

        let output_path = self.output_path();
        std::fs::write(&output_path, document)
            .with_context(|| format!("failed to write map to {}", output_path.display()))?;
        info!(path = %output_path.display(), "map written");

        Ok(MapReport {
            contacts: worked.contacts(),
            fields: worked.field_count(),
            squares: worked.square_count(),
            output_path,
        })
    }

    /// `<outfile>.<txt|html>`: the suffix is appended to the base path as
    /// given, never replacing an extension already in it.
    fn output_path(&self) -> PathBuf {
        let mut path = self.config.outfile.clone().into_os_string();
        path.push(".");
        path.push(self.config.map.mode.extension());
        PathBuf::from(path)
    }
}
