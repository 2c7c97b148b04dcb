//! Game-end classification: checkmate and stalemate detection and the derived
//! [`GameOutcome`] of a position.

use std::fmt;

use crate::chess::attacks::is_in_check;
use crate::chess::board::Board;
use crate::chess::core::Player;
use crate::chess::movegen::legal_moves;

/// Returns `true` if any of the player's pieces has at least one legal move.
#[must_use]
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    board
        .player_pieces(player)
        .any(|(from, piece)| !legal_moves(board, from, piece).is_empty())
}

/// The player is in check and has no legal moves.
#[must_use]
pub fn is_checkmate(board: &Board, player: Player) -> bool {
    is_in_check(board, player) && !has_legal_move(board, player)
}

/// The player is not in check but has no legal moves.
#[must_use]
pub fn is_stalemate(board: &Board, player: Player) -> bool {
    !is_in_check(board, player) && !has_legal_move(board, player)
}

/// State of the game from the perspective of the player to move. It is not
/// stored anywhere: it is recalculated from the board after every move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// The player to move is not in check and has legal moves.
    Ongoing,
    /// The player to move is in check but can escape it.
    Check(Player),
    /// The player to move is in check and can not escape it: the opponent
    /// wins.
    Checkmate(Player),
    /// The player to move is not in check but has no legal moves: draw.
    Stalemate(Player),
}

impl GameOutcome {
    /// Classifies the position for the player to move.
    #[must_use]
    pub fn of(board: &Board, to_move: Player) -> Self {
        let check = is_in_check(board, to_move);
        match (check, has_legal_move(board, to_move)) {
            (true, false) => Self::Checkmate(to_move),
            (false, false) => Self::Stalemate(to_move),
            (true, true) => Self::Check(to_move),
            (false, true) => Self::Ongoing,
        }
    }

    /// Checkmate and stalemate end the game.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Checkmate(_) | Self::Stalemate(_))
    }

    /// The player who delivered checkmate, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::Checkmate(loser) => Some(loser.opponent()),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ongoing => Ok(()),
            Self::Check(player) => write!(f, "{player} is in check!"),
            Self::Checkmate(loser) => write!(f, "Checkmate! {} wins!", loser.opponent()),
            Self::Stalemate(_) => write!(f, "Stalemate! Game is a draw!"),
        }
    }
}
