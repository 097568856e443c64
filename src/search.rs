//! Exhaustive move selection for one side: negamax over board copies with
//! alpha-beta pruning.
//!
//! The tree from move three onward is small enough to brute-force, so there
//! is no depth cutoff and no positional guesswork; terminal boards are the
//! only boards that get scored. The first and second moves skip the search
//! entirely and take the center (or the top-left corner when the center is
//! gone).

use crate::board::Board;
use crate::common::{BoardError, Side};
use crate::config::CENTER;

/// Score bound well outside the terminal range of ±(cells + 1).
const INF: i32 = 1_000;

/// Vacancy count above which the opening shortcut applies (only the first
/// two moves of a game qualify).
const OPENING_MOVES_AVAILABLE: usize = 7;

/// Whether a ply raises alpha or lowers beta; flips at every level of the
/// tree as the side to move alternates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Objective {
    Maximize,
    Minimize,
}

impl Objective {
    #[inline]
    fn flip(self) -> Self {
        match self {
            Objective::Maximize => Objective::Minimize,
            Objective::Minimize => Objective::Maximize,
        }
    }
}

/// Returns the optimal position for `side` under perfect play by both
/// sides. Deterministic: equal-scoring moves resolve to the lowest index.
///
/// Fails with [`BoardError::NoMovesAvailable`] on a board that is already
/// complete; callers should check [`Board::is_complete`] first.
pub fn best_move(board: &Board, side: Side) -> Result<u8, BoardError> {
    if board.is_complete() {
        return Err(BoardError::NoMovesAvailable);
    }
    let available = board.available_moves();
    if available.count_ones() > OPENING_MOVES_AVAILABLE {
        // Opening book of one entry: the center dominates by symmetry, and
        // any corner is fine as the second choice.
        if available.contains(CENTER) {
            return Ok(CENTER);
        }
        return Ok(0);
    }

    let mut best: Option<(i32, u8)> = None;
    for position in available.iter() {
        let mut child = *board;
        child.place_move(position, side)?;
        let score = negamax(
            &child,
            side,
            side.opponent(),
            Objective::Minimize,
            -INF,
            INF,
        )?;
        match best {
            Some((highest, _)) if score <= highest => {}
            _ => best = Some((score, position)),
        }
    }
    best.map(|(_, position)| position)
        .ok_or(BoardError::NoMovesAvailable)
}

/// Recursive evaluation of `board` from `root`'s perspective with
/// `to_move` about to play. Each branch descends on its own copy of the
/// board, so siblings never observe each other's moves.
fn negamax(
    board: &Board,
    root: Side,
    to_move: Side,
    objective: Objective,
    mut alpha: i32,
    mut beta: i32,
) -> Result<i32, BoardError> {
    if board.is_complete() {
        return Ok(heuristic(board, root));
    }
    match objective {
        Objective::Maximize => {
            for position in board.available_moves().iter() {
                let mut child = *board;
                child.place_move(position, to_move)?;
                let score = negamax(
                    &child,
                    root,
                    to_move.opponent(),
                    objective.flip(),
                    alpha,
                    beta,
                )?;
                alpha = alpha.max(score);
                if alpha >= beta {
                    return Ok(beta);
                }
            }
            Ok(alpha)
        }
        Objective::Minimize => {
            for position in board.available_moves().iter() {
                let mut child = *board;
                child.place_move(position, to_move)?;
                let score = negamax(
                    &child,
                    root,
                    to_move.opponent(),
                    objective.flip(),
                    alpha,
                    beta,
                )?;
                beta = beta.min(score);
                if beta <= alpha {
                    return Ok(alpha);
                }
            }
            Ok(beta)
        }
    }
}

/// Terminal score for `side`: +1 for a win, 0 for a draw, -1 for a loss,
/// scaled by the vacancy count plus one. The +1 keeps a win on the last
/// cell above a draw, and the scaling ranks earlier wins above later ones
/// and later losses above earlier ones.
fn heuristic(board: &Board, side: Side) -> i32 {
    let value = match board.winner() {
        Some(winner) if winner == side => 1,
        Some(_) => -1,
        None => 0,
    };
    let remaining = board.available_moves().count_ones() as i32 + 1;
    value * remaining
}
