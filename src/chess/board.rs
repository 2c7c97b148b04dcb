//! Square-centric [board representation]: each of the 64 squares holds at
//! most one piece.
//!
//! At this board size copying the whole board is cheap, so the rules engine
//! and the search apply hypothetical moves to clones instead of implementing
//! reversible make/unmake pairs.
//!
//! [board representation]: https://www.chessprogramming.org/Mailbox

use std::fmt::{self, Write};

use anyhow::{bail, Context};
use strum::IntoEnumIterator;

use crate::chess::core::{File, Move, Piece, PieceKind, Player, Rank, Square, BOARD_SIZE};

/// Piece placement on the board. It does not track the side to move: that is
/// owned by [`crate::game::GameState`] or passed explicitly to the rules and
/// search functions.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; BOARD_SIZE as usize],
}

impl Board {
    /// Creates the starting position of the standard chess variant.
    ///
    /// ```
    /// use pawnstorm::chess::board::Board;
    ///
    /// assert_eq!(
    ///     &Board::starting().to_string(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
    /// );
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        const BACKRANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut board = Self::empty();
        for player in [Player::White, Player::Black] {
            for (file, kind) in File::iter().zip(BACKRANK) {
                board.put(
                    Square::new(file, Rank::backrank(player)),
                    Piece::new(player, kind),
                );
                board.put(
                    Square::new(file, Rank::pawns_starting(player)),
                    Piece::new(player, PieceKind::Pawn),
                );
            }
        }
        board
    }

    /// Creates a board without any pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            squares: [None; BOARD_SIZE as usize],
        }
    }

    /// Returns the piece standing on given square, if any.
    #[must_use]
    pub const fn at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    /// Places the piece on the square, replacing whatever was there.
    pub fn put(&mut self, square: Square, piece: Piece) {
        self.squares[square as usize] = Some(piece);
    }

    /// Removes the piece from the square (if any).
    pub fn clear(&mut self, square: Square) {
        self.squares[square as usize] = None;
    }

    /// Moves the piece from `from` to `to`, capturing whatever stands on the
    /// destination square. The move is not validated: the caller is
    /// responsible for checking it against [`crate::chess::movegen`] first.
    pub fn apply_move(&mut self, from: Square, to: Square) {
        debug_assert!(self.at(from).is_some(), "no piece to move on {from}");
        self.squares[to as usize] = self.squares[from as usize].take();
    }

    /// Returns a copy of the board with the move applied.
    #[must_use]
    pub fn with_move(&self, next_move: Move) -> Self {
        let mut board = self.clone();
        board.apply_move(next_move.from(), next_move.to());
        board
    }

    /// Iterates over all occupied squares in `A1..H8` order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|square| self.at(square).map(|piece| (square, piece)))
    }

    /// Iterates over the squares occupied by the player's pieces in `A1..H8`
    /// order.
    pub fn player_pieces(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.owner == player)
    }

    /// Returns the square of the player's king. If there are several kings
    /// (impossible in a regular game), the first one in `A1..H8` order is
    /// returned.
    #[must_use]
    pub fn king(&self, player: Player) -> Option<Square> {
        self.player_pieces(player)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// Swaps the colors of all pieces and reflects them across the horizontal
    /// axis, producing the same position from the other player's perspective.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let mut board = Self::empty();
        for (square, piece) in self.occupied() {
            board.put(square.flip(), piece.recolored());
        }
        board
    }

    /// Parses the piece placement part of [Forsyth-Edwards Notation]: ranks
    /// from 8 down to 1 separated by '/', digits for runs of empty squares.
    ///
    /// The number of kings is not validated: the rules engine tolerates
    /// positions without kings (see [`crate::chess::attacks::is_in_check`]).
    ///
    /// [Forsyth-Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
    ///
    /// # Errors
    ///
    /// Returns an error if the placement does not describe exactly 8 ranks of
    /// 8 squares or contains unknown symbols.
    pub fn from_fen(placement: &str) -> anyhow::Result<Self> {
        let mut board = Self::empty();
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            bail!("expected 8 ranks in piece placement, got {}", ranks.len());
        }
        for (rank, rank_fen) in Rank::iter().rev().zip(ranks) {
            let mut file: u8 = 0;
            for symbol in rank_fen.chars() {
                if let Some(skip) = symbol.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        bail!("empty square count should be within 1..=8, got {skip}");
                    }
                    file += skip as u8;
                    if file > 8 {
                        bail!("rank {rank} has more than 8 squares");
                    }
                    continue;
                }
                let piece = Piece::try_from(symbol)?;
                let square = Square::new(
                    File::try_from(file)
                        .with_context(|| format!("rank {rank} has more than 8 squares"))?,
                    rank,
                );
                board.put(square, piece);
                file += 1;
            }
            if file != 8 {
                bail!("rank {rank} should have 8 squares, got {file}");
            }
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl TryFrom<&str> for Board {
    type Error = anyhow::Error;

    fn try_from(input: &str) -> anyhow::Result<Self> {
        Self::from_fen(input.trim())
    }
}

impl fmt::Display for Board {
    /// Prints piece placement in Forsyth-Edwards Notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            let mut empty_squares = 0;
            for file in File::iter() {
                match self.at(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty_squares != 0 {
                            write!(f, "{empty_squares}")?;
                            empty_squares = 0;
                        }
                        write!(f, "{piece}")?;
                    },
                    None => empty_squares += 1,
                }
            }
            if empty_squares != 0 {
                write!(f, "{empty_squares}")?;
            }
            if rank != Rank::One {
                f.write_char('/')?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    /// Dumps the board in a simple format ('.' for empty square, FEN algebraic
    /// symbol for piece) a-la Stockfish "debug" command in UCI mode.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            for file in File::iter() {
                match self.at(Square::new(file, rank)) {
                    Some(piece) => write!(f, "{piece}"),
                    None => f.write_char('.'),
                }?;
                if file != File::H {
                    f.write_str(SQUARE_SEPARATOR)?;
                }
            }
            if rank != Rank::One {
                f.write_str(LINE_SEPARATOR)?;
            }
        }
        Ok(())
    }
}

const LINE_SEPARATOR: &str = "\n";
const SQUARE_SEPARATOR: &str = " ";
