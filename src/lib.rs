#![warn(missing_docs)]
//! The sudokugen library
//!
//! ## Overview
//!
//! sudokugen generates and solves 9x9 sudokus. Solving is an exhaustive
//! backtracking search; the order in which cells are visited is pluggable,
//! so the same search can run as a plain scan, a reverse scan or a
//! most-constrained-first traversal. See the [`strategy`] module.
//!
//! ## Example
//!
//! ```
//! use sudokugen::Board;
//!
//! let puzzle =
//!     "800000000003600000070090200050007000000045700000100030001000068008500010090000400";
//!
//! let mut board = Board::from_puzzle_str(puzzle).unwrap();
//!
//! if board.solve() {
//!     // A pretty-printed grid and the flat 81 digit solution
//!     println!("{}", board);
//!     println!("{}", board.solution().unwrap());
//! }
//! ```
//!
//! Generation draws from a caller-supplied random source, so puzzles can be
//! reproduced from a seed:
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use sudokugen::{Board, Level};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let board = Board::with_level(36, &mut rng).unwrap();
//! assert_eq!(board.level(), Level::VeryEasy);
//! ```

mod board;
mod consts;
mod generator;
mod solver;

pub mod errors;
pub mod strategy;

pub use crate::board::{Board, Cell, Level};
pub use crate::errors::{InvalidLevel, ParseError};
pub use crate::strategy::{HeatMap, Scanner, Strategy};
