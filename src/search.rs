//! Depth-limited minimax search with alpha-beta pruning
//!
//! The search explores columns in ascending order, always scoring positions
//! from the root side's perspective, and degrades to a static evaluation
//! once a wall-clock deadline has passed. The deadline is polled at call
//! entry only; a level that has started iterating its children runs each
//! child to completion, so an expired budget never aborts a branch halfway.

use anyhow::{ensure, Result};
use log::debug;

use std::fmt;
use std::time::{Duration, Instant};

use crate::board::{Board, Cell};
use crate::eval::{Heuristic, WIN_SCORE};

// initial alpha-beta window, outside every reachable score
const INFINITY: i32 = WIN_SCORE + 1;

/// Error returned when a move is requested on a board with no open column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoLegalMove;

impl fmt::Display for NoLegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no legal move, the board is full")
    }
}

impl std::error::Error for NoLegalMove {}

/// An agent choosing moves by heuristic game tree search
///
/// # Notes
/// The searcher works on its own copy of the position handed to
/// [`choose_move`], applying and undoing one move per recursion level; the
/// caller's board is never touched.
///
/// # Position Scoring
/// Scores are always expressed for the side the search was started for:
/// [`WIN_SCORE`] for a guaranteed win, `-WIN_SCORE` for a guaranteed loss,
/// `0` for a terminal draw, and heuristic estimates strictly in between
/// everywhere else.
///
/// [`choose_move`]: Searcher::choose_move
pub struct Searcher {
    board: Board,

    /// The number of nodes visited by the last search (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            node_count: 0,
        }
    }

    /// Chooses a column for `piece` on `position`
    ///
    /// Searches `depth` plies deep within `time_limit`, scoring leaves with
    /// `heuristic`, and returns the chosen column and its score. A column
    /// is returned even when the budget is already spent on entry; a
    /// [`NoLegalMove`] error is returned only when the board is full.
    pub fn choose_move(
        &mut self,
        position: &Board,
        piece: Cell,
        depth: usize,
        time_limit: Duration,
        heuristic: Heuristic,
    ) -> Result<(usize, i32)> {
        ensure!(depth >= 1, "search depth must be at least 1, got {}", depth);

        let legal = position.legal_columns();
        let first_legal = match legal.first() {
            Some(&column) => column,
            None => return Err(NoLegalMove.into()),
        };

        let deadline = Instant::now() + time_limit;
        self.board = position.clone();
        self.node_count = 0;

        let (best, score) =
            self.minimax(depth, -INFINITY, INFINITY, true, piece, deadline, heuristic);
        // an already-expired deadline yields no column; the first open
        // column is still a usable answer
        let column = best.unwrap_or(first_legal);

        debug!(
            "search finished: depth {}, {} nodes, column {}, score {}",
            depth,
            self.node_count,
            column + 1,
            score
        );

        Ok((column, score))
    }

    /// Performs the recursive search
    ///
    /// Scores are relative to `root_side` at every level; only the
    /// alpha-beta bounds flip roles between maximizing and minimizing
    /// levels, never the sign of the score.
    fn minimax(
        &mut self,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        root_side: Cell,
        deadline: Instant,
        heuristic: Heuristic,
    ) -> (Option<usize>, i32) {
        self.node_count += 1;

        let legal = self.board.legal_columns();
        let opponent = root_side.opponent();
        let terminal =
            legal.is_empty() || self.board.is_win(root_side) || self.board.is_win(opponent);

        // soft timeout, checked before anything else is decided
        if Instant::now() >= deadline {
            return (None, heuristic.evaluate(&self.board, root_side));
        }

        if depth == 0 || terminal {
            if terminal {
                return if self.board.is_win(root_side) {
                    (None, WIN_SCORE)
                } else if self.board.is_win(opponent) {
                    (None, -WIN_SCORE)
                } else {
                    // full board, no winner
                    (None, 0)
                };
            }
            return (None, heuristic.evaluate(&self.board, root_side));
        }

        let mover = if maximizing { root_side } else { opponent };
        let mut best_column = legal[0];

        if maximizing {
            let mut value = -INFINITY;
            for &column in &legal {
                if self.board.play(column, mover).is_err() {
                    continue;
                }
                let (_, score) =
                    self.minimax(depth - 1, alpha, beta, false, root_side, deadline, heuristic);
                self.board.undo(column);

                // ties keep the first column seen
                if score > value {
                    value = score;
                    best_column = column;
                }
                alpha = alpha.max(value);
                if alpha >= beta {
                    // a perfect opponent will not allow this branch
                    break;
                }
            }
            (Some(best_column), value)
        } else {
            let mut value = INFINITY;
            for &column in &legal {
                if self.board.play(column, mover).is_err() {
                    continue;
                }
                let (_, score) =
                    self.minimax(depth - 1, alpha, beta, true, root_side, deadline, heuristic);
                self.board.undo(column);

                if score < value {
                    value = score;
                    best_column = column;
                }
                beta = beta.min(value);
                if alpha >= beta {
                    break;
                }
            }
            (Some(best_column), value)
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
