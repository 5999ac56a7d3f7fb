//! Win condition checking for Caro
//!
//! A player wins by forming a contiguous run of five or more of their marks
//! horizontally, vertically or along either diagonal. Overlines count.

use crate::board::{Board, Mark, Pos};

/// Length of a winning run
pub const WIN_LENGTH: usize = 5;

/// The four line axes, in the order they are examined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right
    DiagonalDown,
    /// Top-right to bottom-left
    DiagonalUp,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    /// Unit step `(dr, dc)` along the axis
    #[inline]
    pub const fn step(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalDown => (1, 1),
            Axis::DiagonalUp => (1, -1),
        }
    }
}

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    Axis::Horizontal.step(),
    Axis::Vertical.step(),
    Axis::DiagonalDown.step(),
    Axis::DiagonalUp.step(),
];

/// A completed line of at least five same-mark cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinLine {
    pub axis: Axis,
    pub mark: Mark,
    /// Cells from the negative end of the axis to the positive end
    pub cells: Vec<Pos>,
}

impl WinLine {
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }
}

/// Check whether the mark just played at `pos` completes a winning line.
///
/// Walks both ways along each axis from `pos`, counting `pos` itself.
/// The first axis with a run of [`WIN_LENGTH`] or more is returned.
/// `pos` is assumed to hold `mark`.
pub fn check_winner(board: &Board, pos: Pos, mark: Mark) -> Option<WinLine> {
    if mark == Mark::Empty {
        return None;
    }
    for axis in Axis::ALL {
        let (dr, dc) = axis.step();
        let backward = run_from(board, pos, -dr, -dc, mark);
        let forward = run_from(board, pos, dr, dc, mark);
        if backward.len() + 1 + forward.len() >= WIN_LENGTH {
            let mut cells = backward;
            cells.reverse();
            cells.push(pos);
            cells.extend(forward);
            return Some(WinLine { axis, mark, cells });
        }
    }
    None
}

/// Cells holding `mark` contiguous with `origin` in one direction, nearest first
fn run_from(board: &Board, origin: Pos, dr: i32, dc: i32, mark: Mark) -> Vec<Pos> {
    let mut cells = Vec::new();
    let mut cur = origin;
    while let Some(next) = cur.offset(dr, dc, board.size()) {
        if board.get(next) != mark {
            break;
        }
        cells.push(next);
        cur = next;
    }
    cells
}
