//! Difficulty tiers and their tuning tables

use super::candidates::CandidateParams;

/// Moves played before the search switches from the opening depth to the
/// board-size depth table
const OPENING_MOVES: usize = 8;

/// AI strength setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Neighborhood radius for candidate generation
    pub const fn search_radius(self) -> f32 {
        match self {
            Difficulty::Easy => 2.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 1.0,
        }
    }

    /// Candidate cap at the root of the engine
    pub const fn root_move_cap(self) -> usize {
        match self {
            Difficulty::Easy => 8,
            Difficulty::Medium => 12,
            Difficulty::Hard => 20,
        }
    }

    /// Candidate cap at every node inside the search
    pub const fn search_move_cap(self) -> usize {
        match self {
            Difficulty::Easy => 8,
            Difficulty::Medium => 12,
            Difficulty::Hard => 20,
        }
    }

    pub const fn root_params(self) -> CandidateParams {
        CandidateParams::new(self.search_radius(), self.root_move_cap())
    }

    pub const fn search_params(self) -> CandidateParams {
        CandidateParams::new(self.search_radius(), self.search_move_cap())
    }

    /// Search depth for a board of `board_size` after `move_count` moves
    pub fn depth(self, board_size: usize, move_count: usize) -> i8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => {
                if move_count < OPENING_MOVES {
                    2
                } else if board_size <= 10 {
                    3
                } else if board_size <= 15 {
                    2
                } else {
                    1
                }
            }
            Difficulty::Hard => {
                if move_count < OPENING_MOVES {
                    4
                } else if board_size <= 7 {
                    6
                } else if board_size <= 10 {
                    5
                } else if board_size <= 15 {
                    4
                } else {
                    3
                }
            }
        }
    }

    /// Chance of skipping the search for a random central move
    pub const fn random_move_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.6,
            Difficulty::Medium | Difficulty::Hard => 0.0,
        }
    }

    /// Chance of blocking an opponent's immediate win once it is found
    pub const fn block_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.5,
            Difficulty::Medium | Difficulty::Hard => 1.0,
        }
    }

    /// Number of center-closest candidates the random pick chooses from
    pub const fn random_pool(self) -> usize {
        3
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
