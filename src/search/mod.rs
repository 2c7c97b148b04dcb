//! Move selection for the computer player: a depth-limited [`minimax()`] search
//! with alpha-beta pruning and a [`random`] mode for the easiest tier.
//!
//! [`choose_ai_move`] is the entry point used by [`crate::game::GameState`]:
//! it maps the [`Difficulty`] to either of the strategies.

pub mod minimax;
pub mod random;

use std::fmt;

use anyhow::bail;
use rand::Rng;

use crate::chess::board::Board;
use crate::chess::core::{Move, Player};
use crate::evaluation::Value;

pub use minimax::{minimax, search};
pub use random::pick_random_move;

/// Search depth in plies.
pub type Depth = u8;

/// Bound of the initial alpha-beta window. It is strictly greater than any
/// value [`crate::evaluation::evaluate`] can return, so the first explored move
/// always replaces the initial best score.
pub const INFINITY: Value = Value::MAX;

/// Depth used when the difficulty is not set.
pub const DEFAULT_DEPTH: Depth = 3;

/// Result of the search: the score of the position and the move that achieves
/// it. The move is absent when the search did not explore any moves (depth 0
/// or no legal moves).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Evaluation of the position from White's perspective.
    pub score: Value,
    /// First move of the principal line, if any.
    pub best_move: Option<Move>,
}

/// Strength of the computer player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Difficulty {
    /// Uniformly random legal moves.
    Easy,
    /// Searches 2 plies ahead.
    Medium,
    /// Searches 4 plies ahead.
    Hard,
}

impl Difficulty {
    /// Search depth of the tier. [`Difficulty::Easy`] does not search at all,
    /// but its nominal depth is still 1.
    #[must_use]
    pub const fn depth(self) -> Depth {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 4,
        }
    }
}

impl TryFrom<&str> for Difficulty {
    type Error = anyhow::Error;

    fn try_from(input: &str) -> anyhow::Result<Self> {
        match input {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => bail!("unknown difficulty: expected easy, medium or hard, got {input}"),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        })
    }
}

/// Maps the (possibly unset) difficulty to the search depth.
#[must_use]
pub const fn search_depth(difficulty: Option<Difficulty>) -> Depth {
    match difficulty {
        Some(difficulty) => difficulty.depth(),
        None => DEFAULT_DEPTH,
    }
}

/// Picks the computer's move for `side`. Returns `None` only if `side` has no
/// legal moves.
#[must_use]
pub fn choose_ai_move<R: Rng + ?Sized>(
    board: &Board,
    side: Player,
    difficulty: Option<Difficulty>,
    rng: &mut R,
) -> Option<Move> {
    match difficulty {
        Some(Difficulty::Easy) => pick_random_move(board, side, rng),
        _ => search(board, side, search_depth(difficulty)).best_move,
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::chess::movegen::all_legal_moves;

    #[test]
    fn depth_policy() {
        assert_eq!(search_depth(Some(Difficulty::Easy)), 1);
        assert_eq!(search_depth(Some(Difficulty::Medium)), 2);
        assert_eq!(search_depth(Some(Difficulty::Hard)), 4);
        assert_eq!(search_depth(None), 3);
    }

    #[test]
    fn parse_difficulty() {
        assert_eq!(Difficulty::try_from("easy").unwrap(), Difficulty::Easy);
        assert_eq!(Difficulty::try_from("hard").unwrap(), Difficulty::Hard);
        assert!(Difficulty::try_from("Hard").is_err());
        assert!(Difficulty::try_from("").is_err());
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn every_tier_returns_legal_move() {
        let mut rng = SmallRng::seed_from_u64(42);
        let board = Board::starting();
        let legal = all_legal_moves(&board, Player::Black);
        for difficulty in [
            None,
            Some(Difficulty::Easy),
            Some(Difficulty::Medium),
            Some(Difficulty::Hard),
        ] {
            let chosen = choose_ai_move(&board, Player::Black, difficulty, &mut rng)
                .expect("there are legal moves in the starting position");
            assert!(legal.contains(&chosen), "{chosen} is not legal");
        }
    }

    #[test]
    fn no_moves() {
        let mut rng = SmallRng::seed_from_u64(0);
        // Black is checkmated.
        let board = Board::from_fen("3R2k1/5ppp/8/8/8/8/8/6K1").unwrap();
        for difficulty in [None, Some(Difficulty::Easy), Some(Difficulty::Medium)] {
            assert_eq!(
                choose_ai_move(&board, Player::Black, difficulty, &mut rng),
                None
            );
        }
    }
}
