//! Board representation for Caro

pub mod board;

#[cfg(test)]
mod tests;

use thiserror::Error;

// Re-exports
pub use board::Board;

/// Board size used when nothing else is configured (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;
/// Largest supported board side, bounded by the `u8` coordinates in [`Pos`]
pub const MAX_BOARD_SIZE: usize = u8::MAX as usize;

/// Cell marks. `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    /// Get opponent mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Single-character label used by the GUI and in log output
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Empty => ".",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of the given side
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    /// Offset by a signed step, or `None` when the result leaves a board of `size`
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, size: usize) -> Option<Pos> {
        let r = i32::from(self.row) + dr;
        let c = i32::from(self.col) + dc;
        if Pos::is_valid(r, c, size) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        let size = size as i32;
        row >= 0 && row < size && col >= 0 && col < size
    }

    /// Manhattan distance to another position
    #[inline]
    pub fn manhattan(self, other: Pos) -> u32 {
        u32::from(self.row.abs_diff(other.row)) + u32::from(self.col.abs_diff(other.col))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Contract violations caught at the board boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board size {0} is out of range (1-{max})", max = MAX_BOARD_SIZE)]
    InvalidSize(usize),
    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: u8, col: u8, size: usize },
    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },
    #[error("cannot place an empty mark")]
    EmptyMark,
    #[error("unexpected character {ch:?} at ({row}, {col})")]
    InvalidCell { row: u8, col: u8, ch: char },
}
