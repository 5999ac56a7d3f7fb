//! Caro (five-in-a-row) engine and desktop game
//!
//! Two players alternate placing X and O on a square board of any size from
//! 1x1 to 255x255; the first to line up five or more marks wins.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation, marks and positions
//! - [`rules`]: Five-in-a-row detection
//! - [`eval`]: Line patterns and position evaluation
//! - [`search`]: Candidate generation, difficulty tiers and alpha-beta search
//! - [`engine`]: Difficulty-aware move selection integrating all components
//! - [`ui`]: egui desktop game
//!
//! # Quick Start
//!
//! ```
//! use caro::{check_winner, AIEngine, Board, Difficulty, Mark, Pos};
//!
//! let mut board = Board::new(15).unwrap();
//! let mut engine = AIEngine::with_seed(1);
//!
//! board.place(Pos::new(7, 7), Mark::X);
//!
//! // AI responds as O
//! if let Some(pos) = engine.get_best_move(&board, Mark::O, Difficulty::Medium, 1) {
//!     board.place(pos, Mark::O);
//!     assert!(check_winner(&board, pos, Mark::O).is_none());
//!     println!("AI plays at {}", pos);
//! }
//! ```
//!
//! # Move Priority
//!
//! The engine follows this priority:
//! 1. Center of an empty board
//! 2. Random central move (Easy only, 60% of the time)
//! 3. Immediate winning move
//! 4. Block of the opponent's immediate win (Easy blocks half of the time)
//! 5. Alpha-Beta search to a depth set by difficulty, board size and game phase

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, Mark, Pos, DEFAULT_BOARD_SIZE};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use rules::{check_winner, WinLine};
pub use search::Difficulty;
