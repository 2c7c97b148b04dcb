//! Implementation of [Minimax] algorithm with [Alpha-Beta pruning] and static
//! move ordering.
//!
//! White is the maximizing player and Black is the minimizing one, matching
//! the sign convention of [`crate::evaluation::evaluate`]. Terminal positions
//! (checkmate and stalemate) are not scored specially: a side without legal
//! moves gets the static evaluation of the position.
//!
//! [Minimax]: https://en.wikipedia.org/wiki/Minimax
//! [Alpha-Beta pruning]: https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning

use std::cmp::Reverse;
use std::time::Instant;

use crate::chess::board::Board;
use crate::chess::core::{Move, Player};
use crate::chess::movegen::all_legal_moves;
use crate::evaluation::{evaluate, Value};
use crate::search::{Depth, SearchResult, INFINITY};

/// Searches `depth` plies ahead with `side` to move within the `(alpha, beta)`
/// window.
///
/// Candidates are explored best-first according to the static evaluation of
/// the position right after the move. Only strictly better scores replace the
/// current best move, so among equally scored moves the first explored one
/// wins.
#[must_use]
pub fn minimax(
    board: &Board,
    depth: Depth,
    alpha: Value,
    beta: Value,
    side: Player,
) -> SearchResult {
    let mut nodes = 0;
    alpha_beta(board, depth, alpha, beta, side, &mut nodes)
}

/// Runs [`minimax`] with the full window and reports search statistics.
#[must_use]
pub fn search(board: &Board, side: Player, depth: Depth) -> SearchResult {
    let start = Instant::now();
    let mut nodes: u64 = 0;
    let result = alpha_beta(board, depth, -INFINITY, INFINITY, side, &mut nodes);
    let elapsed = start.elapsed();
    log::debug!(
        "{side} searched depth {depth}: {nodes} nodes in {elapsed:?}, score {}, best move {}",
        result.score,
        result
            .best_move
            .map_or_else(|| "none".to_string(), |best| best.to_string()),
    );
    result
}

/// Pairs every legal move with the position it leads to and sorts them so that
/// the most promising move for `side` comes first. Equally evaluated moves are
/// ordered by their origin and destination squares (rank-major), descending for
/// the maximizing side and ascending for the minimizing one.
fn ordered_moves(board: &Board, side: Player) -> Vec<(Move, Board)> {
    let mut candidates: Vec<(Move, Board, Value)> = all_legal_moves(board, side)
        .into_iter()
        .map(|next_move| {
            let child = board.with_move(next_move);
            let value = evaluate(&child);
            (next_move, child, value)
        })
        .collect();
    if side.is_maximizing() {
        candidates.sort_by_key(|(next_move, _, value)| {
            Reverse((*value, next_move.from(), next_move.to()))
        });
    } else {
        candidates.sort_by_key(|(next_move, _, value)| (*value, next_move.from(), next_move.to()));
    }
    log::trace!(
        "{side} move order: {}",
        itertools::join(
            candidates
                .iter()
                .map(|(next_move, _, value)| format!("{next_move}({value})")),
            " "
        )
    );
    candidates
        .into_iter()
        .map(|(next_move, child, _)| (next_move, child))
        .collect()
}

fn alpha_beta(
    board: &Board,
    depth: Depth,
    mut alpha: Value,
    mut beta: Value,
    side: Player,
    nodes: &mut u64,
) -> SearchResult {
    *nodes += 1;
    if depth == 0 {
        return SearchResult {
            score: evaluate(board),
            best_move: None,
        };
    }
    let candidates = ordered_moves(board, side);
    if candidates.is_empty() {
        return SearchResult {
            score: evaluate(board),
            best_move: None,
        };
    }
    let maximizing = side.is_maximizing();
    let mut best = SearchResult {
        score: if maximizing { -INFINITY } else { INFINITY },
        best_move: None,
    };
    for (next_move, child) in candidates {
        let score = alpha_beta(&child, depth - 1, alpha, beta, side.opponent(), nodes).score;
        if maximizing {
            if score > best.score {
                best = SearchResult {
                    score,
                    best_move: Some(next_move),
                };
            }
            alpha = alpha.max(score);
        } else {
            if score < best.score {
                best = SearchResult {
                    score,
                    best_move: Some(next_move),
                };
            }
            beta = beta.min(score);
        }
        if beta <= alpha {
            break;
        }
    }
    best
}
