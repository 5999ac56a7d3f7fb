//! Square grid of marks with occupancy tracking

use super::{BoardError, Mark, Pos, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};

/// Game board. The side length is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major cells
    cells: Vec<Mark>,
    /// Number of non-empty cells
    occupied: usize,
}

impl Board {
    /// Create an empty `size`x`size` board
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Mark::Empty; size * size],
            occupied: 0,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Center cell `(N/2, N/2)`
    #[inline]
    pub fn center(&self) -> Pos {
        let c = (self.size / 2) as u8;
        Pos::new(c, c)
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.to_index(self.size)]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Place a mark without validation.
    /// Callers guarantee `pos` is in bounds and empty; use `try_place` for
    /// moves coming from outside the engine.
    /// The occupancy check is a `debug_assert!` only; in release builds a
    /// second placement on the same cell would count it twice.
    #[inline]
    pub fn place(&mut self, pos: Pos, mark: Mark) {
        debug_assert!(self.contains(pos));
        debug_assert!(self.is_empty(pos), "placing on occupied cell {:?}", pos);
        if mark == Mark::Empty {
            return;
        }
        self.cells[pos.to_index(self.size)] = mark;
        self.occupied += 1;
    }

    /// Reset a cell to empty
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        let idx = pos.to_index(self.size);
        if self.cells[idx] != Mark::Empty {
            self.cells[idx] = Mark::Empty;
            self.occupied -= 1;
        }
    }

    /// Checked placement for human moves
    pub fn try_place(&mut self, pos: Pos, mark: Mark) -> Result<(), BoardError> {
        if mark == Mark::Empty {
            return Err(BoardError::EmptyMark);
        }
        if !self.contains(pos) {
            return Err(BoardError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.size,
            });
        }
        if !self.is_empty(pos) {
            return Err(BoardError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }
        self.place(pos, mark);
        Ok(())
    }

    /// Total marks on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.occupied
    }

    /// Check if board has no marks
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Check if every cell is taken
    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied == self.cells.len()
    }

    /// Occupied cells with their marks, row-major
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Pos, Mark)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, m)| **m != Mark::Empty)
            .map(move |(idx, m)| (Pos::from_index(idx, size), *m))
    }

    /// Empty cells, row-major
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, m)| **m == Mark::Empty)
            .map(move |(idx, _)| Pos::from_index(idx, size))
    }

    /// Build a board from rows of `X`, `O` and `.` characters.
    /// Whitespace is ignored; every row must be as long as the row count.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let mut board = Board::new(rows.len())?;
        for (r, line) in rows.iter().enumerate() {
            let marks: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if marks.len() != board.size {
                return Err(BoardError::InvalidSize(marks.len()));
            }
            for (c, ch) in marks.into_iter().enumerate() {
                let mark = match ch {
                    'X' | 'x' => Mark::X,
                    'O' | 'o' => Mark::O,
                    '.' => continue,
                    _ => {
                        return Err(BoardError::InvalidCell { row: r as u8, col: c as u8, ch });
                    }
                };
                board.place(Pos::new(r as u8, c as u8), mark);
            }
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            cells: vec![Mark::Empty; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
            occupied: 0,
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: Vec<&str> = row.iter().map(|m| m.symbol()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
