use std::env;
use std::process;

use sudokugen::Board;

fn main() {
    env_logger::init();

    let level = env::args().nth(1).map(|arg| arg.parse()).unwrap_or(Ok(17));
    let level = match level {
        Ok(level) => level,
        Err(err) => {
            eprintln!("invalid level: {}", err);
            process::exit(1);
        }
    };

    let mut board = match Board::from_level(level) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    println!("Generated a {} puzzle:", board.level());
    println!("{}", board);

    if board.solve() {
        println!("Solved after {} placement attempts:", board.backtracking());
        println!("{}", board);
    } else {
        println!("Sudoku is unsolvable.");
    }
}
