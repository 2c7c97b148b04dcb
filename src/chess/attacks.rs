//! Check detection. Attacks are calculated with the unfiltered
//! [`pseudo_legal_moves`]: whether the attacker's own king is exposed does not
//! matter for whether it attacks a square.

use crate::chess::board::Board;
use crate::chess::core::{Player, Square};
use crate::chess::movegen::pseudo_legal_moves;

/// Returns `true` if any of the `attacker`'s pieces can move to `square`.
///
/// Only precise for occupied squares: an empty square in front of a pawn counts
/// as "attacked" while an empty square diagonally in front of it does not.
/// Check detection only asks about the king's square.
#[must_use]
pub(crate) fn is_attacked(board: &Board, square: Square, attacker: Player) -> bool {
    board
        .player_pieces(attacker)
        .any(|(from, piece)| pseudo_legal_moves(board, from, piece).contains(&square))
}

/// Returns `true` if the `player`'s king is attacked by any of the opponent's
/// pieces.
///
/// A board without the player's king is not a valid chess position, but it is
/// still handled: there is nothing to attack, so the king is not in check.
///
/// ```
/// use pawnstorm::chess::attacks::is_in_check;
/// use pawnstorm::chess::board::Board;
/// use pawnstorm::chess::core::Player;
///
/// let board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3").unwrap();
/// assert!(!is_in_check(&board, Player::Black));
/// let board = Board::from_fen("4k3/8/8/8/8/8/8/4K2R").unwrap();
/// assert!(!is_in_check(&board, Player::Black));
/// let board = Board::from_fen("4k3/8/8/8/8/8/8/4R2K").unwrap();
/// assert!(is_in_check(&board, Player::Black));
/// ```
#[must_use]
pub fn is_in_check(board: &Board, player: Player) -> bool {
    match board.king(player) {
        Some(king) => is_attacked(board, king, player.opponent()),
        None => false,
    }
}
