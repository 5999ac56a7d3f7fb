//! Line pattern scores for Caro evaluation
//!
//! A run is scored by its length and by how many of its two ends are open
//! (in bounds and empty). Longer and more extensible runs grow super-linearly.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row
    pub const FIVE: i32 = 100_000;
    /// Open four: _XXXX_
    pub const OPEN_FOUR: i32 = 10_000;
    /// Closed four: OXXXX_ or _XXXXO
    pub const CLOSED_FOUR: i32 = 1_000;
    /// Open three: _XXX_
    pub const OPEN_THREE: i32 = 1_000;
    /// Closed three
    pub const CLOSED_THREE: i32 = 100;
    /// Open two: _XX_
    pub const OPEN_TWO: i32 = 100;
    /// Closed two
    pub const CLOSED_TWO: i32 = 10;
}

/// Weight applied to the opponent's lines. Blocking is valued slightly above
/// building an equal threat of one's own.
pub const DEFENSE_WEIGHT: f64 = 1.1;

/// Map a run length and its number of open ends (0-2) to a score.
///
/// Anything not in the table (singles, dead twos/threes/fours) scores its
/// raw length.
#[inline]
pub fn line_score(count: i32, open_ends: u8) -> i32 {
    match (count, open_ends) {
        (c, _) if c >= 5 => PatternScore::FIVE,
        (4, 2) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::CLOSED_FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 2) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        (c, _) => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::CLOSED_FOUR);
        assert!(PatternScore::CLOSED_FOUR >= PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::CLOSED_THREE);
        assert!(PatternScore::CLOSED_THREE >= PatternScore::OPEN_TWO);
        assert!(PatternScore::OPEN_TWO > PatternScore::CLOSED_TWO);
    }

    #[test]
    fn test_line_score_table() {
        assert_eq!(line_score(5, 0), 100_000);
        assert_eq!(line_score(7, 2), 100_000);
        assert_eq!(line_score(4, 2), 10_000);
        assert_eq!(line_score(4, 1), 1_000);
        assert_eq!(line_score(3, 2), 1_000);
        assert_eq!(line_score(3, 1), 100);
        assert_eq!(line_score(2, 2), 100);
        assert_eq!(line_score(2, 1), 10);
    }

    #[test]
    fn test_line_score_falls_back_to_count() {
        assert_eq!(line_score(1, 2), 1);
        assert_eq!(line_score(1, 0), 1);
        assert_eq!(line_score(2, 0), 2);
        assert_eq!(line_score(3, 0), 3);
        assert_eq!(line_score(4, 0), 4);
        assert_eq!(line_score(0, 0), 0);
    }
}
