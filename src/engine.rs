//! Difficulty-aware move selection for the Caro AI
//!
//! The engine runs a fixed priority sequence for every move:
//!
//! 1. **Opening**: on an empty board play the center
//! 2. **Random pick** (Easy only): sometimes play one of the central candidates
//! 3. **Immediate win**: any candidate that completes five
//! 4. **Block**: any candidate that stops the opponent completing five
//!    (Easy only blocks half of the time)
//! 5. **Alpha-Beta**: depth-limited minimax over the candidates
//!
//! # Example
//!
//! ```
//! use caro::{AIEngine, Board, Difficulty, Mark, Pos};
//!
//! let mut engine = AIEngine::with_seed(7);
//! let mut board = Board::new(15).unwrap();
//! board.place(Pos::new(7, 7), Mark::X);
//!
//! let result = engine.get_move_with_stats(&board, Mark::O, Difficulty::Medium, 1);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

use crate::board::{Board, Mark, Pos};
use crate::rules::check_winner;
use crate::search::{rank_by_center, strategic_moves, Difficulty, SearchResult, Searcher, WIN_SCORE};

/// Which step of the priority sequence produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Center of an empty board
    Opening,
    /// Easy-mode random choice among the central candidates
    RandomPick,
    /// Completes five for the AI
    ImmediateWin,
    /// Stops the opponent from completing five
    Block,
    /// Regular alpha-beta search result
    AlphaBeta,
}

impl SearchType {
    pub fn label(self) -> &'static str {
        match self {
            SearchType::Opening => "Opening",
            SearchType::RandomPick => "Random",
            SearchType::ImmediateWin => "Win",
            SearchType::Block => "Block",
            SearchType::AlphaBeta => "Alpha-Beta",
        }
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` when there is nowhere to play
    pub best_move: Option<Pos>,
    /// Search score of the move, from the AI's point of view
    pub score: f64,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0.0,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn shortcut(pos: Pos, score: f64, search_type: SearchType, time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: Some(pos),
            score,
            search_type,
            time_ms,
            nodes,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Move selector for one AI player.
///
/// Holds the random source used by the Easy tier. Medium and Hard never
/// draw from it, so their answers depend on the position alone.
#[derive(Debug, Clone)]
pub struct AIEngine {
    rng: StdRng,
}

impl AIEngine {
    /// Engine seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Engine with a reproducible random sequence
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose a move for `ai_mark`, or `None` when the board is full.
    ///
    /// `move_count` is the number of moves played so far in the game and
    /// selects the search depth together with the board size.
    pub fn get_best_move(
        &mut self,
        board: &Board,
        ai_mark: Mark,
        difficulty: Difficulty,
        move_count: usize,
    ) -> Option<Pos> {
        self.get_move_with_stats(board, ai_mark, difficulty, move_count)
            .best_move
    }

    /// Same as [`get_best_move`](Self::get_best_move) with search metadata.
    ///
    /// The caller's board is never modified; the search works on a private copy.
    pub fn get_move_with_stats(
        &mut self,
        board: &Board,
        ai_mark: Mark,
        difficulty: Difficulty,
        move_count: usize,
    ) -> MoveResult {
        let start = Instant::now();
        let elapsed = || start.elapsed().as_millis() as u64;

        if ai_mark.is_empty() {
            warn!("engine asked to move for an empty mark");
            return MoveResult::no_move(elapsed());
        }

        let candidates = strategic_moves(board, difficulty.root_params());
        if candidates.is_empty() {
            debug!(%difficulty, "no candidate moves, board is full");
            return MoveResult::no_move(elapsed());
        }
        trace!(count = candidates.len(), ?candidates, "root candidates");

        if board.is_board_empty() {
            let center = candidates[0];
            debug!(?center, "opening move");
            return MoveResult::shortcut(center, 0.0, SearchType::Opening, elapsed(), 1);
        }

        // Easy sometimes skips the search for a nearby central move
        let random_chance = difficulty.random_move_probability();
        if random_chance > 0.0 && self.rng.random::<f64>() < random_chance {
            let pick = self.random_central_pick(board, &candidates, difficulty.random_pool());
            debug!(?pick, %difficulty, "random pick");
            return MoveResult::shortcut(pick, 0.0, SearchType::RandomPick, elapsed(), 0);
        }

        let mut work = board.clone();
        let opponent = ai_mark.opponent();

        if let Some(win) = find_completing_move(&mut work, &candidates, ai_mark) {
            debug!(?win, mark = ai_mark.symbol(), "immediate win");
            return MoveResult::shortcut(win, WIN_SCORE, SearchType::ImmediateWin, elapsed(), 1);
        }

        if let Some(block) = find_completing_move(&mut work, &candidates, opponent) {
            let block_chance = difficulty.block_probability();
            if block_chance >= 1.0 || self.rng.random::<f64>() < block_chance {
                debug!(?block, %difficulty, "blocking opponent five");
                return MoveResult::shortcut(block, -WIN_SCORE, SearchType::Block, elapsed(), 1);
            }
            debug!(?block, %difficulty, "block skipped");
        }

        let depth = difficulty.depth(board.size(), move_count);
        let mut searcher = Searcher::new(ai_mark, difficulty);
        let result = searcher.search_root(&mut work, &candidates, depth);

        debug!(
            best = ?result.best_move,
            score = result.score,
            depth,
            nodes = result.nodes,
            cutoffs = result.stats.cutoffs,
            "alpha-beta search finished"
        );
        MoveResult::from_alphabeta(result, elapsed())
    }

    /// Uniform choice among the `pool` candidates closest to the center
    fn random_central_pick(&mut self, board: &Board, candidates: &[Pos], pool: usize) -> Pos {
        let mut ranked = candidates.to_vec();
        rank_by_center(&mut ranked, board.center());
        let n = ranked.len().min(pool).max(1);
        ranked[self.rng.random_range(0..n)]
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// First candidate that completes five for `mark`, trying each on `board`
/// and restoring it afterwards.
fn find_completing_move(board: &mut Board, candidates: &[Pos], mark: Mark) -> Option<Pos> {
    candidates.iter().copied().find(|&mov| {
        board.place(mov, mark);
        let wins = check_winner(board, mov, mark).is_some();
        board.clear(mov);
        wins
    })
}
