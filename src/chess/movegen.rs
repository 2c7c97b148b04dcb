//! Move generation: [pseudo-legal] destinations of a single piece and the
//! legal subset of them that does not leave the mover's king in check.
//!
//! The two stages are deliberately separate operations: check detection in
//! [`crate::chess::attacks`] is built on top of [`pseudo_legal_moves`] and
//! [`legal_moves`] is built on top of check detection.
//!
//! [pseudo-legal]: https://www.chessprogramming.org/Pseudo-Legal_Move

use arrayvec::ArrayVec;

use crate::chess::attacks::is_in_check;
use crate::chess::board::Board;
use crate::chess::core::{Move, Piece, PieceKind, Player, Rank, Square};

/// Upper bound on the number of destinations of a single piece: a queen in the
/// center of an otherwise empty board.
pub const MAX_DESTINATIONS: usize = 27;

/// Destination squares of a single piece in generation order.
pub type Destinations = ArrayVec<Square, MAX_DESTINATIONS>;

/// (row, column) deltas.
type Offset = (i8, i8);

const ORTHOGONAL_DIRECTIONS: [Offset; 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL_DIRECTIONS: [Offset; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_OFFSETS: [Offset; 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Calculates the squares `piece` standing on `from` can move to, ignoring
/// whether its own king would be left in check.
///
/// The order of destinations is fixed: it only depends on the piece kind and
/// the board contents.
///
/// ```
/// use pawnstorm::chess::board::Board;
/// use pawnstorm::chess::core::Square;
/// use pawnstorm::chess::movegen::pseudo_legal_moves;
///
/// let board = Board::starting();
/// let knight = board.at(Square::G1).unwrap();
/// assert_eq!(
///     pseudo_legal_moves(&board, Square::G1, knight).as_slice(),
///     &[Square::H3, Square::F3]
/// );
/// ```
#[must_use]
pub fn pseudo_legal_moves(board: &Board, from: Square, piece: Piece) -> Destinations {
    let mut destinations = Destinations::new();
    let owner = piece.owner;
    let out = &mut destinations;
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, owner, out),
        PieceKind::Knight => step_moves(board, from, owner, &KNIGHT_OFFSETS, out),
        PieceKind::Bishop => slide_moves(board, from, owner, &DIAGONAL_DIRECTIONS, out),
        PieceKind::Rook => slide_moves(board, from, owner, &ORTHOGONAL_DIRECTIONS, out),
        PieceKind::Queen => {
            slide_moves(board, from, owner, &ORTHOGONAL_DIRECTIONS, out);
            slide_moves(board, from, owner, &DIAGONAL_DIRECTIONS, out);
        },
        PieceKind::King => {
            step_moves(board, from, owner, &ORTHOGONAL_DIRECTIONS, out);
            step_moves(board, from, owner, &DIAGONAL_DIRECTIONS, out);
        },
    }
    destinations
}

/// Filters [`pseudo_legal_moves`] down to the moves that do not leave (or
/// put) the mover's king in check. An empty result means the piece can not
/// move.
#[must_use]
pub fn legal_moves(board: &Board, from: Square, piece: Piece) -> Destinations {
    let mut destinations = pseudo_legal_moves(board, from, piece);
    destinations.retain(|to| !is_in_check(&board.with_move(Move::new(from, *to)), piece.owner));
    destinations
}

/// Collects legal moves of every piece owned by `player`: pieces are visited
/// in `A1..H8` order, destinations of each piece in generation order.
#[must_use]
pub fn all_legal_moves(board: &Board, player: Player) -> Vec<Move> {
    // The average branching factor for chess is 35.
    let mut moves = Vec::with_capacity(48);
    for (from, piece) in board.player_pieces(player) {
        moves.extend(
            legal_moves(board, from, piece)
                .into_iter()
                .map(|to| Move::new(from, to)),
        );
    }
    moves
}

fn pawn_moves(board: &Board, from: Square, owner: Player, destinations: &mut Destinations) {
    let direction = owner.push_direction();
    if let Some(single_push) = from.offset(direction, 0) {
        if board.at(single_push).is_none() {
            destinations.push(single_push);
            if from.rank() == Rank::pawns_starting(owner) {
                if let Some(double_push) = single_push.offset(direction, 0) {
                    if board.at(double_push).is_none() {
                        destinations.push(double_push);
                    }
                }
            }
        }
    }
    for side in [-1, 1] {
        if let Some(to) = from.offset(direction, side) {
            if matches!(board.at(to), Some(target) if target.owner != owner) {
                destinations.push(to);
            }
        }
    }
}

/// Knight and king moves: a single jump in each of the given offsets.
fn step_moves(
    board: &Board,
    from: Square,
    owner: Player,
    offsets: &[Offset],
    destinations: &mut Destinations,
) {
    for &(rows, columns) in offsets {
        if let Some(to) = from.offset(rows, columns) {
            match board.at(to) {
                Some(target) if target.owner == owner => {},
                _ => destinations.push(to),
            }
        }
    }
}

/// Sliding piece moves: walk each direction until the edge of the board or
/// the first blocker (inclusive if it can be captured).
fn slide_moves(
    board: &Board,
    from: Square,
    owner: Player,
    directions: &[Offset],
    destinations: &mut Destinations,
) {
    for &(rows, columns) in directions {
        let mut current = from;
        while let Some(to) = current.offset(rows, columns) {
            match board.at(to) {
                None => destinations.push(to),
                Some(target) => {
                    if target.owner != owner {
                        destinations.push(to);
                    }
                    break;
                },
            }
            current = to;
        }
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    use super::*;

    fn setup(placement: &str) -> Board {
        Board::from_fen(placement).expect("parsing valid placement: {placement}")
    }

    fn get_moves(board: &Board, from: Square) -> Vec<String> {
        let piece = board.at(from).expect("there should be a piece on {from}");
        pseudo_legal_moves(board, from, piece)
            .iter()
            .map(Square::to_string)
            .sorted()
            .collect()
    }

    fn sorted_squares(squares: &[&str]) -> Vec<String> {
        squares
            .iter()
            .map(|square| (*square).to_string())
            .sorted()
            .collect()
    }

    #[test]
    fn pawn_pushes() {
        let board = Board::starting();
        assert_eq!(get_moves(&board, Square::E2), sorted_squares(&["e3", "e4"]));
        assert_eq!(get_moves(&board, Square::D7), sorted_squares(&["d6", "d5"]));
        // Double push is only allowed from the starting rank.
        let board = setup("4k3/8/8/8/8/4P3/8/4K3");
        assert_eq!(get_moves(&board, Square::E3), sorted_squares(&["e4"]));
        // Blocked pawns.
        let board = setup("4k3/8/8/8/8/4n3/4P3/4K3");
        assert_eq!(get_moves(&board, Square::E2), Vec::<String>::new());
        let board = setup("4k3/8/8/8/4n3/8/4P3/4K3");
        assert_eq!(get_moves(&board, Square::E2), sorted_squares(&["e3"]));
    }

    #[test]
    fn pawn_captures() {
        let board = setup("4k3/8/8/3p1P2/4P3/8/8/4K3");
        assert_eq!(get_moves(&board, Square::E4), sorted_squares(&["e5", "d5"]));
        assert_eq!(get_moves(&board, Square::D5), sorted_squares(&["d4", "e4"]));
        // Own pieces can not be captured.
        let board = setup("4k3/8/8/8/8/3N1n2/4P3/4K3");
        assert_eq!(
            get_moves(&board, Square::E2),
            sorted_squares(&["e3", "e4", "f3"])
        );
    }

    #[test]
    fn pawns_on_last_rank_do_not_promote() {
        let board = setup("P3k3/8/8/8/8/8/8/4K2p");
        assert_eq!(get_moves(&board, Square::A8), Vec::<String>::new());
        assert_eq!(get_moves(&board, Square::H1), Vec::<String>::new());
    }

    #[test]
    fn knights() {
        let board = Board::starting();
        let knight = board.at(Square::B1).unwrap();
        assert_eq!(
            pseudo_legal_moves(&board, Square::B1, knight).as_slice(),
            &[Square::C3, Square::A3]
        );
        let board = setup("4k3/8/2p5/8/3N4/8/4P3/4K3");
        assert_eq!(
            get_moves(&board, Square::D4),
            sorted_squares(&["c6", "e6", "b5", "f5", "b3", "f3", "c2"])
        );
    }

    #[test]
    fn sliders() {
        let board = setup("4k3/8/8/1p6/8/3R4/8/4K3");
        assert_eq!(
            get_moves(&board, Square::D3),
            sorted_squares(&[
                "d1", "d2", "d4", "d5", "d6", "d7", "d8", "a3", "b3", "c3", "e3", "f3", "g3", "h3"
            ])
        );
        let board = setup("4k3/8/8/1p6/8/3B4/8/4K3");
        assert_eq!(
            get_moves(&board, Square::D3),
            sorted_squares(&["c4", "b5", "e4", "f5", "g6", "h7", "c2", "b1", "e2", "f1"])
        );
        // Queen in the center of an empty board reaches the maximum.
        let board = setup("k7/8/8/8/3Q4/8/8/7K");
        let queen = board.at(Square::D4).unwrap();
        assert_eq!(
            pseudo_legal_moves(&board, Square::D4, queen).len(),
            MAX_DESTINATIONS
        );
    }

    #[test]
    fn slide_order() {
        let board = setup("4k3/8/8/8/8/8/1p6/R3K3");
        let rook = board.at(Square::A1).unwrap();
        assert_eq!(
            pseudo_legal_moves(&board, Square::A1, rook).as_slice(),
            &[
                Square::B1,
                Square::C1,
                Square::D1,
                Square::A2,
                Square::A3,
                Square::A4,
                Square::A5,
                Square::A6,
                Square::A7,
                Square::A8,
            ]
        );
    }

    #[test]
    fn kings() {
        let board = setup("4k3/8/8/8/8/8/3P4/4K3");
        assert_eq!(
            get_moves(&board, Square::E1),
            sorted_squares(&["d1", "f1", "e2", "f2"])
        );
        // No castling.
        let board = setup("4k3/8/8/8/8/8/8/R3K2R");
        assert_eq!(
            get_moves(&board, Square::E1),
            sorted_squares(&["d1", "f1", "d2", "e2", "f2"])
        );
    }

    #[test]
    fn legal_moves_respect_pins() {
        // The knight is pinned by the rook.
        let board = setup("4r1k1/8/8/8/8/8/4N3/4K3");
        let knight = board.at(Square::E2).unwrap();
        assert!(legal_moves(&board, Square::E2, knight).is_empty());
        assert_eq!(pseudo_legal_moves(&board, Square::E2, knight).len(), 6);
        // The king can not step into the rook's file.
        let king = board.at(Square::E1).unwrap();
        assert_eq!(
            legal_moves(&board, Square::E1, king).as_slice(),
            &[Square::F1, Square::D1, Square::F2, Square::D2]
        );
    }

    #[test]
    fn all_moves_of_starting_position() {
        let moves = all_legal_moves(&Board::starting(), Player::White);
        assert_eq!(moves.len(), 20);
        assert_eq!(
            moves.iter().map(Move::to_string).sorted().collect::<Vec<_>>(),
            sorted_squares(&[
                "a2a3", "a2a4", "b1a3", "b1c3", "b2b3", "b2b4", "c2c3", "c2c4", "d2d3", "d2d4",
                "e2e3", "e2e4", "f2f3", "f2f4", "g1f3", "g1h3", "g2g3", "g2g4", "h2h3", "h2h4"
            ])
        );
        assert_eq!(all_legal_moves(&Board::starting(), Player::Black).len(), 20);
    }
}
