//! Game rules for Caro
//!
//! Five or more contiguous marks in a row, column or diagonal win.
//! There are no captures and no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, Axis, WinLine, DIRECTIONS, WIN_LENGTH};
