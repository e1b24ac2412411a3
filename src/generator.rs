//! Random generation of boards with a target count of givens.
use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::consts::N_CELLS;
use crate::errors::InvalidLevel;

impl Board {
    /// Generates a board with `level` randomly placed, mutually consistent
    /// givens, drawing from `rng`.
    ///
    /// Returns [`InvalidLevel`] when `level` is outside `17..=80`: a
    /// sudoku needs at least 17 givens to have any chance of a unique
    /// solution, and 81 givens would leave nothing to solve.
    ///
    /// The produced puzzle carries no guarantee of solvability or of a
    /// unique solution.
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use sudokugen::Board;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let board = Board::with_level(17, &mut rng).unwrap();
    /// let givens = board.puzzle().chars().filter(|&ch| ch != '0').count();
    /// assert_eq!(givens, 17);
    /// ```
    pub fn with_level<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Result<Board, InvalidLevel> {
        if !(17..=80).contains(&level) {
            return Err(InvalidLevel(level));
        }

        let mut board = Board::empty();
        let mut placed = 0;
        while placed < level {
            let k = rng.gen_range(0..N_CELLS);
            if board.cells[k].solved {
                continue;
            }

            // A drawn 0 never passes is_safe: the chosen cell itself sits
            // empty in its own row. The attempt is spent regardless.
            let digit: u8 = rng.gen_range(0..=9);
            let (row, column) = (board.cells[k].row, board.cells[k].column);
            if board.is_safe(row, column, digit) {
                board.cells[k].digit = digit;
                board.cells[k].solved = true;
                placed += 1;
            }
        }

        board.puzzle = board.flatten();
        board.level = board.classify();
        debug!("generated a {} board with {} givens", board.level, level);
        Ok(board)
    }

    /// Like [`Board::with_level`], drawing from [`rand::thread_rng`].
    pub fn from_level(level: u8) -> Result<Board, InvalidLevel> {
        Board::with_level(level, &mut rand::thread_rng())
    }
}
