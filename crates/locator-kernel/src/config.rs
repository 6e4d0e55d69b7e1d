//! Render configuration: the explicit, immutable inputs of the grid renderer.
//!
//! The renderer has no notion of default home square or callsign; those
//! defaults belong to the CLI layer. Only the map colors carry defaults here,
//! as the fallback for palette files that override a subset of them.

use chrono::{DateTime, Local};
use serde::Deserialize;

use crate::grid::CellClass;
use crate::locator::Locator;

/// Output document flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Html,
}

impl OutputMode {
    /// File suffix appended to the output base path.
    pub fn extension(self) -> &'static str {
        match self {
            OutputMode::Text => "txt",
            OutputMode::Html => "html",
        }
    }
}

/// Background colors for the HTML map, keyed by cell classification.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Own square
    pub home: String,
    /// Worked squares (dark brown earth)
    pub worked_square: String,
    /// Worked fields (light brown earth)
    pub worked_field: String,
    /// Nothing worked (blue ocean)
    pub empty: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            home: "#FF0000".to_string(),
            worked_square: "#994D33".to_string(),
            worked_field: "#DFAF9F".to_string(),
            empty: "#CCEEFF".to_string(),
        }
    }
}

impl Palette {
    /// The background color for a cell classification. Both home states share
    /// the home color; worked/unworked is told apart by the cell symbol.
    pub fn color(&self, class: CellClass) -> &str {
        match class {
            CellClass::HomeWorked | CellClass::HomeUnworked => &self.home,
            CellClass::WorkedSquare => &self.worked_square,
            CellClass::WorkedField => &self.worked_field,
            CellClass::Unworked => &self.empty,
        }
    }
}

/// Complete configuration for one render pass.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// The operator's own grid square, validated before it gets here.
    pub home_square: Locator,
    /// Operator callsign shown in the document title.
    pub callsign: String,
    /// Output document flavor.
    pub mode: OutputMode,
    /// HTML background colors.
    pub palette: Palette,
    /// Stamp for the HTML footer; `None` keeps the output reproducible.
    pub generated_at: Option<DateTime<Local>>,
}
