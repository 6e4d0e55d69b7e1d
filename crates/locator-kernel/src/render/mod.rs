//! Map rendering: one linear pass over the 180x180 grid per output mode.
//!
//! Rendering is a pure function of the worked sets and the render
//! configuration; identical inputs produce byte-identical documents. Rows are
//! emitted north to south, columns west to east.

mod html;
mod text;

pub use html::render_html;
pub use text::render_text;

use crate::config::{MapConfig, OutputMode};
use crate::worked::WorkedSet;

/// Render the complete map document for the configured output mode.
pub fn render(worked: &WorkedSet, config: &MapConfig) -> String {
    match config.mode {
        OutputMode::Text => render_text(worked, config),
        OutputMode::Html => render_html(worked, config),
    }
}

/// Statistics line shared by both output modes.
fn summary_line(worked: &WorkedSet) -> String {
    format!(
        "{} fields, {} squares",
        worked.field_count(),
        worked.square_count()
    )
}
