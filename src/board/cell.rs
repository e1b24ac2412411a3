/// An individual cell of a [`Board`](crate::Board).
///
/// Identity is positional: the coordinates are set on creation and never
/// change afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub(crate) digit: u8,
    pub(crate) solved: bool,
    pub(crate) row: u8,
    pub(crate) column: u8,
}

impl Cell {
    /// The digit of the cell, `0` for an empty cell.
    pub fn digit(&self) -> u8 {
        self.digit
    }

    /// True for givens and for digits placed by the search.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Row coordinate on the board, `1..=9`, topmost row first.
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Column coordinate on the board, `1..=9`, leftmost column first.
    pub fn column(&self) -> u8 {
        self.column
    }
}
