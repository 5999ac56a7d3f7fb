//! Search module for the Caro AI
//!
//! Contains:
//! - Candidate move generation shared by the engine and the search
//! - Difficulty tiers and their tuning tables
//! - Alpha-Beta minimax search

pub mod alphabeta;
pub mod candidates;
pub mod difficulty;

pub use alphabeta::{SearchResult, SearchStats, Searcher, WIN_SCORE};
pub use candidates::{rank_by_center, strategic_moves, CandidateParams};
pub use difficulty::Difficulty;
