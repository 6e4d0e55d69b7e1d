//! Grid geometry: axes, orientation labels, and cell classification.
//!
//! The map is a fixed 18x18 field grid, each field subdivided into 10x10
//! squares: 180 columns west to east, 180 rows north to south.

use crate::locator::Locator;
use crate::worked::WorkedSet;

/// Field letters per axis.
pub const FIELD_COUNT: usize = 18;

/// Square digits per field and axis.
pub const SQUARES_PER_FIELD: usize = 10;

/// Cells along one edge of the rendered map.
pub const GRID_EDGE: usize = FIELD_COUNT * SQUARES_PER_FIELD;

/// Field letters west to east (and south to north).
pub const FIELDS_WEST_TO_EAST: [char; FIELD_COUNT] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
];

/// The longitude axis: (field letter, square digit) for each of the 180
/// columns, west to east.
pub fn columns() -> impl Iterator<Item = (char, u8)> {
    FIELDS_WEST_TO_EAST
        .iter()
        .flat_map(|&field| (0..SQUARES_PER_FIELD as u8).map(move |digit| (field, digit)))
}

/// The latitude axis: (field letter, square digit) for each of the 180 rows,
/// north to south.
pub fn rows() -> impl Iterator<Item = (char, u8)> {
    FIELDS_WEST_TO_EAST
        .iter()
        .rev()
        .flat_map(|&field| (0..SQUARES_PER_FIELD as u8).rev().map(move |digit| (field, digit)))
}

/// Orientation label for one axis position: the square digit everywhere
/// except digit 5, where the enclosing field's letter is shown instead,
/// marking the field roughly centered within its 10-cell span.
pub fn axis_label(field: char, digit: u8) -> char {
    if digit == 5 { field } else { (b'0' + digit) as char }
}

/// The full 4-character locator at a grid coordinate.
pub fn square_at(field_we: char, field_ns: char, digit_we: u8, digit_ns: u8) -> String {
    format!("{field_we}{field_ns}{digit_we}{digit_ns}")
}

/// Classification of a single grid cell, in precedence order.
///
/// Ephemeral: computed per coordinate during rendering, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    /// The home square, confirmed worked.
    HomeWorked,
    /// The home square, not yet worked.
    HomeUnworked,
    /// A worked square.
    WorkedSquare,
    /// An unworked square inside a worked field.
    WorkedField,
    /// Neither square nor field worked.
    Unworked,
}

impl CellClass {
    /// Classify the square at a coordinate against the worked sets and the
    /// home square. The home square wins over every other classification.
    pub fn classify(square: &str, field: &str, worked: &WorkedSet, home: &Locator) -> Self {
        if square == home.as_str() {
            if worked.is_worked_square(square) {
                CellClass::HomeWorked
            } else {
                CellClass::HomeUnworked
            }
        } else if worked.is_worked_square(square) {
            CellClass::WorkedSquare
        } else if worked.is_worked_field(field) {
            CellClass::WorkedField
        } else {
            CellClass::Unworked
        }
    }

    /// The single-character symbol used by the text renderer.
    pub fn symbol(self) -> char {
        match self {
            CellClass::HomeWorked => '#',
            CellClass::HomeUnworked => 'O',
            CellClass::WorkedSquare => 'X',
            CellClass::WorkedField => '.',
            CellClass::Unworked => ' ',
        }
    }
}
