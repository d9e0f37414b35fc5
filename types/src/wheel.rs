//! Wheel facts: the red/black partition, pocket colors, and the table grid.

use serde::{Deserialize, Serialize};

/// Red numbers on a single-zero roulette wheel.
pub const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Highest number on the wheel. Spins draw uniformly from `0..=WHEEL_MAX`.
pub const WHEEL_MAX: u8 = 36;

/// Chip denominations offered by the table UI.
pub const CHIP_VALUES: [u64; 5] = [1, 5, 10, 25, 100];

/// The number grid as rendered on the table, top row first. Each row ends in
/// a `"2to1"` column cell in the UI; only the numbers live here.
pub const TABLE_ROWS: [[u8; 12]; 3] = [
    [3, 6, 9, 12, 15, 18, 21, 24, 27, 30, 33, 36],
    [2, 5, 8, 11, 14, 17, 20, 23, 26, 29, 32, 35],
    [1, 4, 7, 10, 13, 16, 19, 22, 25, 28, 31, 34],
];

/// Check if a number is red.
pub fn is_red(number: u8) -> bool {
    RED_NUMBERS.contains(&number)
}

/// Pocket color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
    Green,
}

/// Color of a pocket. Zero is green; anything off the wheel is also treated
/// as green rather than panicking.
pub fn color_of(number: u8) -> Color {
    if number == 0 || number > WHEEL_MAX {
        Color::Green
    } else if is_red(number) {
        Color::Red
    } else {
        Color::Black
    }
}

/// Column of a number, if any.
///
/// Column 0: 1, 4, 7, ..., 34. Column 1: 2, 5, 8, ..., 35.
/// Column 2: 3, 6, 9, ..., 36. Zero sits outside the grid.
pub fn column_of(number: u8) -> Option<u8> {
    if number == 0 || number > WHEEL_MAX {
        return None;
    }
    Some((number - 1) % 3)
}
