//! Plain-text map output.
//!
//! One corner blank plus 180 orientation labels above and below the grid,
//! 180 rows of a row label plus 180 classification symbols, a blank line,
//! then the summary.

use crate::config::MapConfig;
use crate::grid::{self, CellClass};
use crate::worked::WorkedSet;

pub fn render_text(worked: &WorkedSet, config: &MapConfig) -> String {
    // labels + symbols + newlines for 182 lines of up to 181 characters
    let mut out = String::with_capacity((grid::GRID_EDGE + 2) * (grid::GRID_EDGE + 2));

    push_label_row(&mut out);

    for (field_ns, digit_ns) in grid::rows() {
        out.push(grid::axis_label(field_ns, digit_ns));
        for (field_we, digit_we) in grid::columns() {
            let square = grid::square_at(field_we, field_ns, digit_we, digit_ns);
            let class = CellClass::classify(&square, &square[..2], worked, &config.home_square);
            out.push(class.symbol());
        }
        out.push('\n');
    }

    push_label_row(&mut out);

    out.push('\n');
    out.push_str(&super::summary_line(worked));
    out.push('\n');
    out
}

/// One orientation row: the corner blank, then the 180 column labels.
fn push_label_row(out: &mut String) {
    out.push(' ');
    for (field, digit) in grid::columns() {
        out.push(grid::axis_label(field, digit));
    }
    out.push('\n');
}
