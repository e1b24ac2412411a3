//! Grid dimensions, fixed for a classic 9x9 sudoku.

/// Rows and columns on the board.
pub(crate) const SIZE: u8 = 9;
/// Total cell count.
pub(crate) const N_CELLS: usize = 81;
