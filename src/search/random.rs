//! The weakest computer player: picks any legal move.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::chess::board::Board;
use crate::chess::core::{Move, Player};
use crate::chess::movegen::all_legal_moves;

/// Chooses one of the player's legal moves uniformly at random. Returns `None`
/// if there are no legal moves.
#[must_use]
pub fn pick_random_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Option<Move> {
    let moves = all_legal_moves(board, player);
    let chosen = moves.choose(rng).copied();
    log::trace!("picked {chosen:?} out of {} legal moves", moves.len());
    chosen
}
