//! Provides a very basic implementation of evaluation based on material
//! advantage using "[standard piece valuations]".
//!
//! This evaluation is stable (it will not change because of the fixed piece
//! "values"), easy to understand and deterministic. The king's value dwarfs
//! everything else so that a position without a king is decisive.
//!
//! [standard piece valuations]: https://en.wikipedia.org/wiki/Chess_piece_relative_value

use crate::chess::board::Board;
use crate::chess::core::{PieceKind, Player};
use crate::evaluation::Value;

const PAWN_VALUE: Value = 100;
const KNIGHT_VALUE: Value = 320;
const BISHOP_VALUE: Value = 330;
const ROOK_VALUE: Value = 500;
const QUEEN_VALUE: Value = 900;
const KING_VALUE: Value = 20_000;

/// Material value of a single piece regardless of its owner.
#[must_use]
pub const fn piece_value(kind: PieceKind) -> Value {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

/// Sums the value of White's pieces and subtracts the value of Black's.
///
/// ```
/// use pawnstorm::chess::board::Board;
/// use pawnstorm::evaluation::evaluate;
///
/// assert_eq!(evaluate(&Board::starting()), 0);
/// ```
#[must_use]
pub fn evaluate(board: &Board) -> Value {
    board
        .occupied()
        .map(|(_, piece)| match piece.owner {
            Player::White => piece_value(piece.kind),
            Player::Black => -piece_value(piece.kind),
        })
        .sum()
}
