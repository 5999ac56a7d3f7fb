//! Candidate move generation
//!
//! Only empty cells near existing marks are worth searching. The generator
//! collects them in a fixed, reproducible order and, when there are too many,
//! keeps the ones closest to the center. The same builder feeds the root of
//! the engine and every node of the search, which keeps the branching factor
//! independent of the board size.

use crate::board::{Board, Pos};

/// Neighborhood and size limits for one generation pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateParams {
    /// Chebyshev radius around each occupied cell; fractional radii round up
    pub radius: f32,
    /// Maximum number of moves returned
    pub max_moves: usize,
}

impl CandidateParams {
    pub const fn new(radius: f32, max_moves: usize) -> Self {
        Self { radius, max_moves }
    }

    /// Integer neighborhood actually scanned
    #[inline]
    pub fn cell_radius(&self) -> i32 {
        self.radius.ceil().max(0.0) as i32
    }
}

/// Deduplicating, order-preserving set of candidate cells for one board
struct CandidateSet {
    size: usize,
    seen: Vec<bool>,
    moves: Vec<Pos>,
}

impl CandidateSet {
    fn new(size: usize) -> Self {
        Self {
            size,
            seen: vec![false; size * size],
            moves: Vec::with_capacity(64),
        }
    }

    #[inline]
    fn insert(&mut self, pos: Pos) {
        let idx = pos.to_index(self.size);
        if !self.seen[idx] {
            self.seen[idx] = true;
            self.moves.push(pos);
        }
    }

    fn into_moves(self) -> Vec<Pos> {
        self.moves
    }
}

/// Generate the ranked candidate moves for `board`.
///
/// - Empty board: the center cell only.
/// - Otherwise every empty cell within the radius of an occupied cell, in
///   first-seen order (occupied cells row-major, offsets row then column).
/// - Above `max_moves`, a stable sort by Manhattan distance to the center
///   followed by truncation.
///
/// Returns an empty list only when the board is full.
#[must_use]
pub fn strategic_moves(board: &Board, params: CandidateParams) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![board.center()];
    }

    let size = board.size();
    let radius = params.cell_radius();
    let mut set = CandidateSet::new(size);

    for (pos, _) in board.occupied_cells() {
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if let Some(p) = pos.offset(dr, dc, size) {
                    if board.is_empty(p) {
                        set.insert(p);
                    }
                }
            }
        }
    }

    let mut moves = set.into_moves();
    if moves.is_empty() {
        // Only a zero radius leaves a non-full board without neighbors
        moves = board.empty_cells().collect();
    }

    if moves.len() > params.max_moves {
        rank_by_center(&mut moves, board.center());
        moves.truncate(params.max_moves);
    }
    moves
}

/// Stable sort by Manhattan distance to `center`, closest first
pub fn rank_by_center(moves: &mut [Pos], center: Pos) {
    moves.sort_by_key(|p| p.manhattan(center));
}
