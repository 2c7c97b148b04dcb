//! A game session: the board, the player to move and the last played move.
//!
//! [`GameState`] is the single owner of the authoritative board. Front-ends
//! validate and apply moves through it instead of mutating the board directly.

use anyhow::{bail, Context};
use rand::Rng;

use crate::chess::board::Board;
use crate::chess::core::{Move, Player, Square};
use crate::chess::movegen::{legal_moves, Destinations};
use crate::chess::outcome::GameOutcome;
use crate::search::{choose_ai_move, Difficulty};

/// State of a single game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    to_move: Player,
    last_move: Option<Move>,
}

impl GameState {
    /// Starting position with White to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::starting(),
            to_move: Player::White,
            last_move: None,
        }
    }

    /// Sets up a game from the piece placement and (optionally) the player to
    /// move, e.g. `"4k3/8/8/8/8/8/8/4K2R b"`. White moves if the player is
    /// omitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the placement is malformed, the player is not
    /// "w" or "b", or there is trailing input.
    pub fn from_fen(input: &str) -> anyhow::Result<Self> {
        let mut parts = input.split_ascii_whitespace();
        let Some(placement) = parts.next() else {
            bail!("empty position");
        };
        let board = Board::from_fen(placement).context("parsing piece placement")?;
        let to_move = match parts.next() {
            Some(player) => Player::try_from(player)?,
            None => Player::White,
        };
        if let Some(extra) = parts.next() {
            bail!("unexpected trailing input after the player to move: \"{extra}\"");
        }
        Ok(Self {
            board,
            to_move,
            last_move: None,
        })
    }

    /// Resets to the starting position.
    pub fn restart(&mut self) {
        log::info!("Restarting the game");
        *self = Self::new();
    }

    /// Current piece placement.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    #[must_use]
    pub const fn to_move(&self) -> Player {
        self.to_move
    }

    /// The most recently applied move (for highlighting).
    #[must_use]
    pub const fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Status of the game for the player to move.
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::of(&self.board, self.to_move)
    }

    /// Legal destinations of the current player's piece standing on `square`.
    ///
    /// # Errors
    ///
    /// Returns an error if the square is empty or holds an opponent's piece.
    pub fn legal_moves_from(&self, square: Square) -> anyhow::Result<Destinations> {
        let Some(piece) = self.board.at(square) else {
            bail!("there is no piece on {square}");
        };
        if piece.owner != self.to_move {
            bail!(
                "{square} holds a {} piece but it is {}'s turn",
                piece.owner,
                self.to_move
            );
        }
        Ok(legal_moves(&self.board, square, piece))
    }

    /// Validates and applies the current player's move, then passes the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over or the move is not legal for the
    /// player to move. The state is not changed in that case.
    pub fn play(&mut self, next_move: Move) -> anyhow::Result<()> {
        let outcome = self.outcome();
        if outcome.is_over() {
            bail!("the game is over: {outcome}");
        }
        let destinations = self
            .legal_moves_from(next_move.from())
            .with_context(|| format!("illegal move {next_move}"))?;
        if !destinations.contains(&next_move.to()) {
            bail!("illegal move {next_move}");
        }
        self.commit(next_move);
        Ok(())
    }

    /// Lets the computer pick and play a move for the current player. Returns
    /// the played move or `None` if there is nothing to play.
    pub fn play_computer<R: Rng + ?Sized>(
        &mut self,
        difficulty: Option<Difficulty>,
        rng: &mut R,
    ) -> Option<Move> {
        let next_move = choose_ai_move(&self.board, self.to_move, difficulty, rng)?;
        log::info!("{} (computer) plays {next_move}", self.to_move);
        self.commit(next_move);
        Some(next_move)
    }

    fn commit(&mut self, next_move: Move) {
        self.board.apply_move(next_move.from(), next_move.to());
        self.last_move = Some(next_move);
        self.to_move = self.to_move.opponent();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
