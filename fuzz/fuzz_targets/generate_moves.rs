#![no_main]
use itertools::Itertools;
use libfuzzer_sys::fuzz_target;
use pawnstorm::chess::core::{Move, PieceKind, Player, Rank};
use pawnstorm::chess::movegen::all_legal_moves;
use pawnstorm::game::GameState;
use pretty_assertions::assert_eq;
use shakmaty::{CastlingMode, Chess, Position};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(game) = GameState::from_fen(input) else {
        return;
    };
    let player = match game.to_move() {
        Player::White => "w",
        Player::Black => "b",
    };
    let fen = format!("{} {player} - - 0 1", game.board());
    let shakmaty_setup: shakmaty::fen::Fen = fen
        .parse()
        .expect("when we parsed a valid position it should be accepted by shakmaty");
    let Ok(shakmaty_position) = shakmaty_setup.into_position::<Chess>(CastlingMode::Standard)
    else {
        return;
    };
    let board = game.board();
    assert_eq!(
        all_legal_moves(board, game.to_move())
            .iter()
            .filter(|m: &&Move| {
                board.at(m.from()).map_or(true, |piece| {
                    piece.kind != PieceKind::Pawn
                        || m.to().rank() != Rank::backrank(piece.owner.opponent())
                })
            })
            .map(|m| m.to_string())
            .sorted()
            .collect::<Vec<_>>(),
        shakmaty_position
            .legal_moves()
            .iter()
            .filter(|m| m.promotion().is_none())
            .map(|m| m.to_uci(CastlingMode::Standard).to_string())
            .sorted()
            .collect::<Vec<_>>()
    );
});
