#![no_main]
use libfuzzer_sys::fuzz_target;
use pawnstorm::chess::board::Board;
use pretty_assertions::assert_eq;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(board) = Board::try_from(input) {
        // Printing the placement back and parsing it again is lossless.
        assert_eq!(Board::from_fen(&board.to_string()).unwrap(), board);
    }
});
