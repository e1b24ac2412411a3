//! Cell visitation strategies for the backtracking solver.
//!
//! Every strategy runs the identical search; what changes is the order in
//! which empty cells are attempted, which can shift the amount of
//! backtracking by orders of magnitude on the same puzzle.

use std::collections::BTreeMap;

use crate::board::Board;
use crate::consts::N_CELLS;

/// A policy choosing the order in which the solver visits cells.
///
/// The order is computed once per [`Board::solve_with`] call and stays
/// fixed for the entire recursion.
pub trait Strategy {
    /// Row-major cell indices, `0..=80`, in visitation order.
    ///
    /// Must return a permutation of all 81 indices; the solver skips the
    /// ones that already hold a digit.
    fn visit_order(&self, board: &Board) -> Vec<usize>;
}

/// Scans cells in positional order.
///
/// The default starts at row 1 column 1 and walks to row 9 column 9;
/// with `reverse` set it starts at row 9 column 9 and walks backwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Scanner {
    /// Walk from the last cell to the first instead.
    pub reverse: bool,
}

impl Strategy for Scanner {
    fn visit_order(&self, _board: &Board) -> Vec<usize> {
        let mut order: Vec<usize> = (0..N_CELLS).collect();
        if self.reverse {
            order.reverse();
        }
        order
    }
}

/// Visits the most constrained cells first.
///
/// Every cell gets a heat score: the count of filled cells in its row,
/// plus the count in its column, plus the count in its box. The sums are
/// not deduplicated: a filled cell sitting in two shared units counts
/// twice, and a filled cell heats its own score three times over. Groups
/// of equal heat are visited from hottest to coldest, in positional order
/// within a group.
///
/// The ranking is a snapshot of the starting grid; it is not refreshed
/// while the search fills cells, so it drifts away from the live
/// constraint counts as the recursion progresses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HeatMap;

impl Strategy for HeatMap {
    fn visit_order(&self, board: &Board) -> Vec<usize> {
        let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();

        for (k, cell) in board.cells().iter().enumerate() {
            let heat = board
                .cells_in_row(cell.row())
                .filter(|c| c.digit() != 0)
                .count()
                + board
                    .cells_in_column(cell.column())
                    .filter(|c| c.digit() != 0)
                    .count()
                + board
                    .cells_in_box(cell.row(), cell.column())
                    .filter(|c| c.digit() != 0)
                    .count();

            groups.entry(heat).or_insert_with(Vec::new).push(k);
        }

        groups
            .into_iter()
            .rev()
            .flat_map(|(_, cells)| cells)
            .collect()
    }
}
