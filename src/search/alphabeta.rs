//! Depth-limited minimax with alpha-beta pruning
//!
//! The search works on a single board buffer. Each trial mark is placed,
//! explored and cleared again before the loop moves on, including the early
//! return taken when a trial mark wins on the spot.
//!
//! Leaves are always scored from the AI's point of view. The split into
//! maximizing and minimizing nodes already says whose turn it is, so scores
//! are never negated on the way up.
//!
//! # Example
//!
//! ```
//! use caro::board::{Board, Mark, Pos};
//! use caro::search::{Difficulty, Searcher};
//!
//! let mut board = Board::new(9).unwrap();
//! board.place(Pos::new(4, 4), Mark::X);
//!
//! let mut searcher = Searcher::new(Mark::O, Difficulty::Medium);
//! let score = searcher.minimax(&mut board, 1, f64::NEG_INFINITY, f64::INFINITY, true);
//! assert!(score.is_finite());
//! assert_eq!(board.stone_count(), 1);
//! ```

use tracing::trace;

use crate::board::{Board, Mark, Pos};
use crate::eval::{evaluate, PatternScore};
use crate::rules::check_winner;

use super::candidates::{strategic_moves, CandidateParams};
use super::difficulty::Difficulty;

/// Score of a win found inside the search, before the depth adjustment
pub const WIN_SCORE: f64 = PatternScore::FIVE as f64;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Alpha-beta cutoffs taken
    pub cutoffs: u64,
    /// Leaves scored by the static evaluator
    pub evaluations: u64,
    /// Nodes that ended on an immediate win or loss
    pub terminal_wins: u64,
}

/// Best root move found by [`Searcher::search_root`]
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax value of the best move
    pub score: f64,
    /// Depth each root move was searched to
    pub depth: i8,
    /// Total nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Minimax searcher bound to the AI's mark and a difficulty's move caps.
pub struct Searcher {
    ai_mark: Mark,
    params: CandidateParams,
    pruning: bool,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    /// Searcher with alpha-beta pruning enabled
    pub fn new(ai_mark: Mark, difficulty: Difficulty) -> Self {
        Self {
            ai_mark,
            params: difficulty.search_params(),
            pruning: true,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    /// Searcher that visits every candidate at every node.
    /// Returns the same values as [`Searcher::new`], only slower.
    pub fn full_width(ai_mark: Mark, difficulty: Difficulty) -> Self {
        Self {
            pruning: false,
            ..Self::new(ai_mark, difficulty)
        }
    }

    #[inline]
    pub fn ai_mark(&self) -> Mark {
        self.ai_mark
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Score every root candidate with an AI mark on it and keep the best.
    ///
    /// Each candidate gets its own full window. Ties keep the earliest
    /// candidate.
    pub fn search_root(&mut self, board: &mut Board, candidates: &[Pos], depth: i8) -> SearchResult {
        let mut best_move = None;
        let mut best_score = f64::NEG_INFINITY;

        for &mov in candidates {
            board.place(mov, self.ai_mark);
            let score = self.minimax(board, depth, f64::NEG_INFINITY, f64::INFINITY, false);
            board.clear(mov);

            trace!(row = mov.row, col = mov.col, score, "root move scored");

            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
        }

        SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Minimax value of `board` with `depth` plies left.
    ///
    /// `maximizing` is true when the AI is to move. A full board is a draw
    /// (0); at depth 0 the position is evaluated for the AI regardless of
    /// whose turn it is. A trial move that wins scores
    /// `WIN_SCORE - depth` for the AI and `-WIN_SCORE + depth` for the
    /// opponent.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: i8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> f64 {
        self.nodes += 1;

        if board.is_full() {
            return 0.0;
        }
        if depth <= 0 {
            self.stats.evaluations += 1;
            return evaluate(board, self.ai_mark);
        }

        let moves = strategic_moves(board, self.params);

        if maximizing {
            let mark = self.ai_mark;
            let mut max_score = f64::NEG_INFINITY;

            for mov in moves {
                board.place(mov, mark);

                if check_winner(board, mov, mark).is_some() {
                    board.clear(mov);
                    self.stats.terminal_wins += 1;
                    return WIN_SCORE - f64::from(depth);
                }

                let score = self.minimax(board, depth - 1, alpha, beta, false);
                board.clear(mov);

                max_score = max_score.max(score);
                alpha = alpha.max(score);
                if self.pruning && beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }

            max_score
        } else {
            let mark = self.ai_mark.opponent();
            let mut min_score = f64::INFINITY;

            for mov in moves {
                board.place(mov, mark);

                if check_winner(board, mov, mark).is_some() {
                    board.clear(mov);
                    self.stats.terminal_wins += 1;
                    return -WIN_SCORE + f64::from(depth);
                }

                let score = self.minimax(board, depth - 1, alpha, beta, true);
                board.clear(mov);

                min_score = min_score.min(score);
                beta = beta.min(score);
                if self.pruning && beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }

            min_score
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const INF: f64 = f64::INFINITY;

    fn midgame_board() -> Board {
        Board::from_rows(&[
            ". . . . . . . . .",
            ". . . . . . . . .",
            ". . . O . . . . .",
            ". . . X X O . . .",
            ". . . O X . . . .",
            ". . . . X . . . .",
            ". . . . O . . . .",
            ". . . . . . . . .",
            ". . . . . . . . .",
        ])
        .unwrap()
    }

    #[test]
    fn test_depth_zero_scores_for_ai_at_both_node_types() {
        let mut board = midgame_board();
        let expected = evaluate(&board, Mark::O);

        let mut searcher = Searcher::new(Mark::O, Difficulty::Hard);
        assert_eq!(searcher.minimax(&mut board, 0, -INF, INF, true), expected);
        assert_eq!(searcher.minimax(&mut board, 0, -INF, INF, false), expected);
        // Not flipped to the opponent's point of view
        assert_ne!(searcher.minimax(&mut board, 0, -INF, INF, false), evaluate(&board, Mark::X));
    }

    #[test]
    fn test_full_board_is_draw() {
        let mut board = Board::from_rows(&["XOX", "XOO", "OXX"]).unwrap();
        let mut searcher = Searcher::new(Mark::X, Difficulty::Hard);
        assert_eq!(searcher.minimax(&mut board, 3, -INF, INF, true), 0.0);
        assert_eq!(searcher.minimax(&mut board, 0, -INF, INF, false), 0.0);
    }

    #[test]
    fn test_immediate_win_at_maximizing_node() {
        let mut board = Board::new(9).unwrap();
        for c in 2..6 {
            board.place(Pos::new(4, c), Mark::X);
        }
        board.place(Pos::new(0, 0), Mark::O);

        let mut searcher = Searcher::new(Mark::X, Difficulty::Hard);
        let score = searcher.minimax(&mut board, 2, -INF, INF, true);
        assert_eq!(score, WIN_SCORE - 2.0);
        assert!(searcher.stats().terminal_wins >= 1);
    }

    #[test]
    fn test_immediate_loss_at_minimizing_node() {
        let mut board = Board::new(9).unwrap();
        for c in 2..6 {
            board.place(Pos::new(4, c), Mark::O);
        }
        board.place(Pos::new(0, 0), Mark::X);

        let mut searcher = Searcher::new(Mark::X, Difficulty::Hard);
        let score = searcher.minimax(&mut board, 3, -INF, INF, false);
        assert_eq!(score, -WIN_SCORE + 3.0);
    }

    #[test]
    fn test_search_restores_board() {
        let original = midgame_board();
        let mut board = original.clone();

        let mut searcher = Searcher::new(Mark::X, Difficulty::Medium);
        searcher.minimax(&mut board, 3, -INF, INF, true);
        assert_eq!(board, original);

        searcher.minimax(&mut board, 2, -INF, INF, false);
        assert_eq!(board, original);

        let candidates = strategic_moves(&board, Difficulty::Medium.root_params());
        searcher.search_root(&mut board, &candidates, 2);
        assert_eq!(board, original);
    }

    #[test]
    fn test_search_restores_board_after_early_win() {
        let mut board = Board::new(9).unwrap();
        for c in 2..6 {
            board.place(Pos::new(4, c), Mark::X);
        }
        let original = board.clone();

        let mut searcher = Searcher::new(Mark::X, Difficulty::Hard);
        searcher.minimax(&mut board, 3, -INF, INF, true);
        assert_eq!(board, original);
    }

    #[test]
    fn test_pruning_matches_full_width() {
        for (difficulty, depth) in [(Difficulty::Medium, 2), (Difficulty::Medium, 3), (Difficulty::Easy, 1)] {
            for ai in [Mark::X, Mark::O] {
                let mut board = midgame_board();
                let candidates = strategic_moves(&board, difficulty.root_params());

                let mut pruned = Searcher::new(ai, difficulty);
                let a = pruned.search_root(&mut board, &candidates, depth);

                let mut full = Searcher::full_width(ai, difficulty);
                let b = full.search_root(&mut board, &candidates, depth);

                assert_eq!(a.best_move, b.best_move, "{:?} depth {} ai {:?}", difficulty, depth, ai);
                assert_eq!(a.score, b.score);
                assert!(a.nodes <= b.nodes);
                assert_eq!(b.stats.cutoffs, 0);
            }
        }
    }

    /// Board with `stones` alternating marks at seeded random cells and no five yet
    fn random_board(rng: &mut StdRng, size: usize, stones: usize) -> Board {
        let mut board = Board::new(size).unwrap();
        let mut mark = Mark::X;
        while board.stone_count() < stones {
            let pos = Pos::from_index(rng.random_range(0..size * size), size);
            if !board.is_empty(pos) {
                continue;
            }
            board.place(pos, mark);
            if check_winner(&board, pos, mark).is_some() {
                board.clear(pos);
                continue;
            }
            mark = mark.opponent();
        }
        board
    }

    fn assert_pruning_matches(board: &mut Board, ai: Mark, difficulty: Difficulty, depth: i8) {
        let candidates = strategic_moves(board, difficulty.root_params());
        let before = board.clone();

        let a = Searcher::new(ai, difficulty).search_root(board, &candidates, depth);
        let b = Searcher::full_width(ai, difficulty).search_root(board, &candidates, depth);

        assert_eq!(
            a.best_move, b.best_move,
            "{:?} depth {} ai {:?} on\n{}",
            difficulty, depth, ai, before
        );
        assert_eq!(a.score, b.score);
        assert_eq!(*board, before);
    }

    #[test]
    fn test_pruning_matches_full_width_on_random_boards() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for i in 0..24 {
            let mut board = random_board(&mut rng, 7, 4 + i % 9);
            let ai = if i % 2 == 0 { Mark::X } else { Mark::O };
            assert_pruning_matches(&mut board, ai, Difficulty::Medium, 2);
            assert_pruning_matches(&mut board, ai, Difficulty::Easy, 1);
        }
        for i in 0..6 {
            let mut board = random_board(&mut rng, 7, 5 + i);
            let ai = if i % 2 == 0 { Mark::O } else { Mark::X };
            assert_pruning_matches(&mut board, ai, Difficulty::Hard, 2);
            assert_pruning_matches(&mut board, ai, Difficulty::Hard, 3);
        }
    }

    #[test]
    fn test_pruning_cuts_nodes() {
        let mut board = midgame_board();
        let candidates = strategic_moves(&board, Difficulty::Medium.root_params());

        let mut pruned = Searcher::new(Mark::O, Difficulty::Medium);
        let a = pruned.search_root(&mut board, &candidates, 3);
        let mut full = Searcher::full_width(Mark::O, Difficulty::Medium);
        let b = full.search_root(&mut board, &candidates, 3);

        assert!(a.stats.cutoffs > 0);
        assert!(a.nodes < b.nodes, "pruned {} vs full {}", a.nodes, b.nodes);
    }

    #[test]
    fn test_search_root_prefers_win_over_quiet_move() {
        let mut board = Board::new(9).unwrap();
        for c in 2..6 {
            board.place(Pos::new(4, c), Mark::X);
        }
        board.place(Pos::new(0, 8), Mark::O);

        // Root moves: a quiet corner move first, then the completion
        let candidates = [Pos::new(8, 8), Pos::new(4, 6)];
        let mut searcher = Searcher::new(Mark::X, Difficulty::Medium);
        let result = searcher.search_root(&mut board, &candidates, 1);
        assert_eq!(result.best_move, Some(Pos::new(4, 6)));
    }

    #[test]
    fn test_search_root_ties_keep_first() {
        // Either move leaves one cell, which fills the board: both are draws
        let mut board = Board::from_rows(&["XOX", "OXO", "X.."]).unwrap();

        let candidates = [Pos::new(2, 2), Pos::new(2, 1)];
        let mut searcher = Searcher::new(Mark::O, Difficulty::Easy);
        let result = searcher.search_root(&mut board, &candidates, 1);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.best_move, Some(Pos::new(2, 2)));
    }

    #[test]
    fn test_empty_root_candidates() {
        let mut board = Board::new(5).unwrap();
        let mut searcher = Searcher::new(Mark::X, Difficulty::Easy);
        let result = searcher.search_root(&mut board, &[], 1);
        assert!(result.best_move.is_none());
        assert_eq!(result.score, f64::NEG_INFINITY);
    }
}
