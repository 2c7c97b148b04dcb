//! Implementation of chess rules without castling, en passant and pawn
//! promotion: board representation, move generation, check detection and
//! game-end classification.

pub mod attacks;
pub mod board;
pub mod core;
pub mod movegen;
pub mod outcome;
