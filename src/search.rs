//! Minimax move selection.
//!
//! The selector searches the full game tree: for every empty cell it
//! hypothetically places the mover's mark, scores the resulting position
//! by recursive minimax, and undoes the placement before trying the next
//! cell. With at most nine plies the tree is small enough that no pruning
//! or caching is needed.
//!
//! Terminal positions score +1 for a mover win, -1 for an opponent win
//! and 0 for a draw, with no depth adjustment: a win in two plies scores
//! the same as a win in six. Candidates are scanned in cell order 0-8 and
//! only a strictly greater score replaces the current best, so ties keep
//! the lowest cell. The same board therefore always yields the same move,
//! which may be a slower win reached from an earlier cell.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Score of a position won by the searching side.
const WIN: i32 = 1;
/// Score of a position lost by the searching side.
const LOSS: i32 = -1;
/// Score of a drawn position.
const DRAW: i32 = 0;

/// Returns the best move for `mover` on the given board.
///
/// Returns `None` only when the board has no empty cell. Callers that
/// hold a live game never see that case: an in-progress status implies
/// at least one empty square.
#[instrument(skip(board))]
pub fn select_move(board: &Board, mover: Player) -> Option<Position> {
    // Scratch copy for the mutate/undo recursion; the caller's board is
    // left untouched.
    let mut scratch = board.clone();
    let mut best_score = i32::MIN;
    let mut best_move = None;

    for pos in Position::iter() {
        if scratch.is_empty(pos) {
            scratch.set(pos, Square::Occupied(mover));
            let score = minimax(&mut scratch, mover, false);
            scratch.set(pos, Square::Empty);

            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }
    }

    debug!(?best_move, best_score, "Selected move");
    best_move
}

/// Scores a position for `mover` by exhaustive depth-first search.
///
/// `maximizing` is true when `mover` is to place next, false when the
/// opponent is. Every placement is undone before the function returns,
/// so the board is bit-for-bit restored for the caller.
fn minimax(board: &mut Board, mover: Player, maximizing: bool) -> i32 {
    if let Some(winner) = rules::check_winner(board) {
        return if winner == mover { WIN } else { LOSS };
    }
    if rules::is_full(board) {
        return DRAW;
    }

    if maximizing {
        let mut best = i32::MIN;
        for pos in Position::iter() {
            if board.is_empty(pos) {
                board.set(pos, Square::Occupied(mover));
                best = best.max(minimax(board, mover, false));
                board.set(pos, Square::Empty);
            }
        }
        best
    } else {
        let opponent = mover.opponent();
        let mut worst = i32::MAX;
        for pos in Position::iter() {
            if board.is_empty(pos) {
                board.set(pos, Square::Occupied(opponent));
                worst = worst.min(minimax(board, mover, true));
                board.set(pos, Square::Empty);
            }
        }
        worst
    }
}
