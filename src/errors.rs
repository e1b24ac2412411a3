//! Errors that may be encountered when constructing a board
#[cfg(doc)]
use crate::Board;

/// Error for [`Board::with_level`] and [`Board::from_level`]
///
/// A sudoku needs at least 17 givens and can hold at most 80 before it is
/// fully determined. Contains the rejected count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("level should be between 17 and 80, found {0}")]
pub struct InvalidLevel(pub u8);

/// Error for [`Board::from_puzzle_str`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseError {
    /// The puzzle string does not contain exactly 81 cells.
    #[error("puzzle should contain 81 digits, found {0}")]
    InvalidPuzzleLength(usize),
    /// A character in the puzzle string is not a decimal digit.
    #[error("cell {cell} contains invalid character '{ch}'")]
    InvalidDigit {
        /// Cell number from 0..=80, 0..=8 for the first row, 9..=17 for the 2nd and so on
        cell: u8,
        /// The parsed invalid char
        ch: char,
    },
}
