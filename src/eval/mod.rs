//! Evaluation module for Caro positions
//!
//! This module provides pattern scoring for board positions.
//! The evaluation considers:
//! - Line patterns (twos, threes, fours, fives) and their open ends
//! - Defensive weighting of the opponent's lines

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_line};
pub use patterns::{line_score, PatternScore, DEFENSE_WEIGHT};
