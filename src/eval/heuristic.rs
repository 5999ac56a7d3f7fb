//! Heuristic evaluation function for Caro board positions
//!
//! Every occupied cell contributes one line score per axis. A run of length
//! `k` is therefore scored `k` times, once from each of its cells; the
//! evaluator does not deduplicate runs.

use crate::board::{Board, Mark, Pos};
use crate::rules::DIRECTIONS;

use super::patterns::{line_score, DEFENSE_WEIGHT};

/// Evaluate the board from the perspective of the given mark.
///
/// Own lines add their score, opponent lines subtract theirs scaled by
/// [`DEFENSE_WEIGHT`]. Positive values favor `perspective`.
#[must_use]
pub fn evaluate(board: &Board, perspective: Mark) -> f64 {
    let opponent = perspective.opponent();
    let mut score = 0.0;

    for (pos, mark) in board.occupied_cells() {
        for &(dr, dc) in &DIRECTIONS {
            if mark == perspective {
                score += f64::from(evaluate_line(board, pos, dr, dc, mark));
            } else if mark == opponent {
                score -= f64::from(evaluate_line(board, pos, dr, dc, mark)) * DEFENSE_WEIGHT;
            }
        }
    }

    score
}

/// Score the run of `mark` through `pos` along `(dr, dc)`.
///
/// Counts contiguous cells forward from `pos` (inclusive) and backward from
/// the neighbor behind it, and the open ends beyond each side.
#[must_use]
pub fn evaluate_line(board: &Board, pos: Pos, dr: i32, dc: i32, mark: Mark) -> i32 {
    let mut count = 0;
    let mut open_ends = 0u8;

    // Forward, starting at pos itself
    let mut cur = Some(pos);
    while let Some(p) = cur {
        if board.get(p) != mark {
            break;
        }
        count += 1;
        cur = p.offset(dr, dc, board.size());
    }
    if cur.is_some_and(|p| board.is_empty(p)) {
        open_ends += 1;
    }

    // Backward, starting behind pos
    let mut cur = pos.offset(-dr, -dc, board.size());
    while let Some(p) = cur {
        if board.get(p) != mark {
            break;
        }
        count += 1;
        cur = p.offset(-dr, -dc, board.size());
    }
    if cur.is_some_and(|p| board.is_empty(p)) {
        open_ends += 1;
    }

    line_score(count, open_ends)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::PatternScore;

    fn row_board(size: usize, row: u8, cols: std::ops::Range<u8>, mark: Mark) -> Board {
        let mut board = Board::new(size).unwrap();
        for c in cols {
            board.place(Pos::new(row, c), mark);
        }
        board
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new(15).unwrap();
        assert_eq!(evaluate(&board, Mark::X), 0.0);
        assert_eq!(evaluate(&board, Mark::O), 0.0);
    }

    #[test]
    fn test_single_stone() {
        let mut board = Board::new(15).unwrap();
        board.place(Pos::new(7, 7), Mark::X);
        // Each axis: run of 1, two open ends -> raw count 1
        assert_eq!(evaluate(&board, Mark::X), 4.0);
    }

    #[test]
    fn test_evaluate_line_open_four() {
        let board = row_board(15, 7, 7..11, Mark::X);
        let score = evaluate_line(&board, Pos::new(7, 7), 0, 1, Mark::X);
        assert_eq!(score, PatternScore::OPEN_FOUR);
        // Same run seen from its middle
        let score = evaluate_line(&board, Pos::new(7, 9), 0, 1, Mark::X);
        assert_eq!(score, PatternScore::OPEN_FOUR);
    }

    #[test]
    fn test_evaluate_line_edge_closes_end() {
        let board = row_board(15, 0, 0..3, Mark::X);
        let score = evaluate_line(&board, Pos::new(0, 0), 0, 1, Mark::X);
        assert_eq!(score, PatternScore::CLOSED_THREE);
    }

    #[test]
    fn test_evaluate_line_blocked_by_opponent() {
        let mut board = row_board(15, 7, 5..9, Mark::X);
        board.place(Pos::new(7, 4), Mark::O);
        board.place(Pos::new(7, 9), Mark::O);
        // Dead four falls back to its length
        assert_eq!(evaluate_line(&board, Pos::new(7, 5), 0, 1, Mark::X), 4);

        board.clear(Pos::new(7, 9));
        assert_eq!(
            evaluate_line(&board, Pos::new(7, 5), 0, 1, Mark::X),
            PatternScore::CLOSED_FOUR
        );
    }

    #[test]
    fn test_evaluate_line_five() {
        let board = row_board(15, 3, 2..7, Mark::O);
        assert_eq!(evaluate_line(&board, Pos::new(3, 4), 0, 1, Mark::O), PatternScore::FIVE);
    }

    #[test]
    fn test_runs_are_counted_per_cell() {
        // Open two on a row: each stone sees the open two horizontally (100)
        // and a lone stone on the other three axes (1 each).
        let board = row_board(15, 7, 7..9, Mark::X);
        assert_eq!(evaluate(&board, Mark::X), 2.0 * (100.0 + 3.0));
    }

    #[test]
    fn test_defense_asymmetry() {
        let board = row_board(15, 7, 6..9, Mark::X);
        let for_x = evaluate(&board, Mark::X);
        let for_o = evaluate(&board, Mark::O);

        assert!(for_x > 0.0);
        assert!(for_o < 0.0);
        assert!((for_o + for_x * 1.1).abs() < 1e-9, "x={} o={}", for_x, for_o);
        assert_ne!(for_o, -for_x);
    }

    #[test]
    fn test_defense_asymmetry_for_o_stones() {
        let mut board = Board::new(10).unwrap();
        for i in 0..3 {
            board.place(Pos::new(2 + i, 2 + i), Mark::O);
        }
        let for_o = evaluate(&board, Mark::O);
        let for_x = evaluate(&board, Mark::X);
        assert!((for_x + for_o * 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_mixed_position_favors_stronger_side() {
        let mut board = row_board(15, 7, 5..9, Mark::X);
        board.place(Pos::new(3, 3), Mark::O);
        assert!(evaluate(&board, Mark::X) > 0.0);
        assert!(evaluate(&board, Mark::O) < 0.0);
    }
}
