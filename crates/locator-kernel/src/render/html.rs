//! HTML map output: a standalone page with one styled table.
//!
//! Cells carry their classification as an inline background color. Grid rules
//! are drawn at field boundaries only: every header cell contributes a bottom
//! border, the first column of each 10-column field run a left border, the
//! last row of each 10-row field run a bottom border. The label cells close
//! the frame on the east edge.

use std::fmt::Display;
use std::fmt::Write;

use crate::config::MapConfig;
use crate::grid::{self, CellClass};
use crate::worked::WorkedSet;

const RULE: &str = "1px solid #000000";

pub fn render_html(worked: &WorkedSet, config: &MapConfig) -> String {
    let mut out = String::with_capacity(grid::GRID_EDGE * grid::GRID_EDGE * 40);

    out.push_str("<html>\n<head></head>\n<body>\n");
    let _ = writeln!(
        out,
        "Worked squares and fields by {} in WSJT-X in {}\n",
        config.callsign, config.home_square
    );
    out.push_str("<p/>\n");
    out.push_str("<table cellspacing=\"0\" cellpadding=\"2\">\n");
    // one equal-width column per square column plus the two label columns
    let _ = writeln!(
        out,
        "<colgroup width=\"1*\" span=\"{}\">\n</colgroup>",
        grid::GRID_EDGE + 2
    );

    push_header_row(&mut out);

    for (field_ns, digit_ns) in grid::rows() {
        let last_row = digit_ns == 0;
        let label = grid::axis_label(field_ns, digit_ns);

        out.push_str("<tr>");
        push_cell(&mut out, &frame_style(last_row, false), label);
        for (field_we, digit_we) in grid::columns() {
            let square = grid::square_at(field_we, field_ns, digit_we, digit_ns);
            let class = CellClass::classify(&square, &square[..2], worked, &config.home_square);
            let style = cell_style(config.palette.color(class), digit_we == 0, last_row);
            push_cell(&mut out, &style, class.symbol());
        }
        push_cell(&mut out, &frame_style(last_row, true), label);
        out.push_str("</tr>\n");
    }

    push_footer_row(&mut out);

    out.push_str("</table>\n<p/>\n");
    let _ = writeln!(out, "\n{}", super::summary_line(worked));
    if let Some(stamp) = config.generated_at {
        let _ = writeln!(out, "<br/>generated {}", stamp.format("%Y-%m-%d %H:%M"));
    }
    out.push_str("</body>\n</html>\n");
    out
}

/// Orientation labels above the grid. Every cell carries the bottom border
/// forming the map frame's top rule.
fn push_header_row(out: &mut String) {
    out.push_str("<tr>");
    push_cell(out, &frame_style(true, false), "&nbsp;");
    for (field, digit) in grid::columns() {
        push_cell(out, &frame_style(true, digit == 0), grid::axis_label(field, digit));
    }
    push_cell(out, &frame_style(true, true), "&nbsp;");
    out.push_str("</tr>\n");
}

/// Orientation labels below the grid. Only the field-boundary left borders
/// remain; the bottom rule was drawn by the last data row.
fn push_footer_row(out: &mut String) {
    out.push_str("<tr>");
    push_cell(out, "", "&nbsp;");
    for (field, digit) in grid::columns() {
        push_cell(out, &frame_style(false, digit == 0), grid::axis_label(field, digit));
    }
    push_cell(out, &frame_style(false, true), "&nbsp;");
    out.push_str("</tr>\n");
}

fn push_cell(out: &mut String, style: &str, content: impl Display) {
    if style.is_empty() {
        let _ = write!(out, "<td>{content}</td>");
    } else {
        let _ = write!(out, "<td style=\"{style}\">{content}</td>");
    }
}

/// Inline style for one classified map cell.
fn cell_style(color: &str, first_col: bool, last_row: bool) -> String {
    let mut parts = Vec::with_capacity(3);
    if last_row {
        parts.push(format!("border-bottom: {RULE};"));
    }
    if first_col {
        parts.push(format!("border-left: {RULE};"));
    }
    parts.push(format!("background-color: {color};"));
    parts.join(" ")
}

/// Inline style for label and corner cells: borders only.
fn frame_style(bottom: bool, left: bool) -> String {
    let mut parts = Vec::with_capacity(2);
    if bottom {
        parts.push(format!("border-bottom: {RULE};"));
    }
    if left {
        parts.push(format!("border-left: {RULE};"));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputMode, Palette};
    use crate::locator::Locator;
    use chrono::TimeZone;

    fn config() -> MapConfig {
        MapConfig {
            home_square: Locator::parse("JO52").unwrap(),
            callsign: "DL8ABG".to_string(),
            mode: OutputMode::Html,
            palette: Palette::default(),
            generated_at: None,
        }
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_document_scaffolding() {
        let output = render_html(&WorkedSet::new(), &config());

        assert!(output.starts_with("<html>\n<head></head>\n<body>\n"));
        assert!(output.ends_with("</body>\n</html>\n"));
        assert!(output.contains("Worked squares and fields by DL8ABG in WSJT-X in JO52"));
        assert!(output.contains("<table cellspacing=\"0\" cellpadding=\"2\">"));
        assert!(output.contains("<colgroup width=\"1*\" span=\"182\">"));
    }

    #[test]
    fn test_table_shape() {
        let output = render_html(&WorkedSet::new(), &config());

        // header + 180 data rows + footer
        assert_eq!(count(&output, "<tr>"), 182);
        assert_eq!(count(&output, "</tr>"), 182);
        // 182 rows of 182 cells
        assert_eq!(count(&output, "<td"), 182 * 182);
    }

    #[test]
    fn test_cell_colors_by_classification() {
        let worked = WorkedSet::from_locators(["JO52", "JN59"]);
        let output = render_html(&worked, &config());

        assert_eq!(count(&output, "background-color: #FF0000;"), 1, "home square");
        assert_eq!(count(&output, "background-color: #994D33;"), 1, "worked square");
        // fields JO and JN minus their two specially-classified squares
        assert_eq!(count(&output, "background-color: #DFAF9F;"), 198);
        assert_eq!(
            count(&output, "background-color: #CCEEFF;"),
            180 * 180 - 200,
            "everything else is ocean"
        );
        assert!(output.contains("\n2 fields, 2 squares\n"));
    }

    #[test]
    fn test_home_square_symbols() {
        let worked = WorkedSet::from_locators(["JO52"]);
        let home_worked = render_html(&worked, &config());
        assert!(home_worked.contains("background-color: #FF0000;\">#</td>"));

        let home_unworked = render_html(&WorkedSet::new(), &config());
        assert!(home_unworked.contains("background-color: #FF0000;\">O</td>"));
    }

    #[test]
    fn test_field_boundary_rules() {
        let output = render_html(&WorkedSet::new(), &config());

        // header: corner with bottom rule, then a field-boundary cell
        assert!(output.contains(
            "<tr><td style=\"border-bottom: 1px solid #000000;\">&nbsp;</td>\
             <td style=\"border-bottom: 1px solid #000000; border-left: 1px solid #000000;\">0</td>"
        ));
        // data cell on a field boundary column carries the left rule
        assert!(output.contains(
            "border-left: 1px solid #000000; background-color: #CCEEFF;"
        ));
        // square boundaries inside a field carry no rule
        assert!(output.contains("<td style=\"background-color: #CCEEFF;\"> </td>"));

        // per row: 18 field-boundary columns + the trailing label cell
        let data_row = output
            .lines()
            .filter(|line| line.starts_with("<tr>"))
            .nth(1)
            .unwrap();
        assert_eq!(count(data_row, "border-left"), 19);
    }

    #[test]
    fn test_custom_palette() {
        let mut cfg = config();
        cfg.palette.worked_square = "#112233".to_string();
        let worked = WorkedSet::from_locators(["JN59"]);
        let output = render_html(&worked, &cfg);
        assert_eq!(count(&output, "background-color: #112233;"), 1);
        assert_eq!(count(&output, "background-color: #994D33;"), 0);
    }

    #[test]
    fn test_generated_stamp() {
        let without = render_html(&WorkedSet::new(), &config());
        assert!(!without.contains("generated"));

        let mut cfg = config();
        cfg.generated_at = Some(
            chrono::Local
                .with_ymd_and_hms(2023, 12, 24, 18, 30, 0)
                .unwrap(),
        );
        let with = render_html(&WorkedSet::new(), &cfg);
        assert!(with.contains("<br/>generated 2023-12-24 18:30"));
    }
}
