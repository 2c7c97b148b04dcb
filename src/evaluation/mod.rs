//! This module implements "static" [evaluation], i.e. predicting the relative
//! value/score of given position without [`crate::search`].
//!
//! The score is returned in centipawn units from White's perspective: positive
//! values favor White, negative values favor Black.
//!
//! [evaluation]: https://www.chessprogramming.org/Evaluation

pub mod material;

pub use material::evaluate;

/// Evaluation of a position in centipawns (100 CP = 1 "pawn").
pub type Value = i32;
