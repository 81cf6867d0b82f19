//! A heuristic agent for playing the board game 'Connect 4'
//!
//! This agent runs a depth-limited minimax search with alpha-beta pruning,
//! scoring non-terminal leaves with one of three interchangeable evaluation
//! functions, under a soft wall-clock budget.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{Board, Cell, Heuristic, Searcher};
//! use connect4_minimax::eval::WIN_SCORE;
//!
//! use std::time::Duration;
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // player one threatens to complete four on the bottom row
//! let board = Board::from_moves("112233")?;
//! let mut searcher = Searcher::new();
//! let (column, score) = searcher.choose_move(
//!     &board,
//!     Cell::PlayerOne,
//!     4,
//!     Duration::from_secs(2),
//!     Heuristic::Windowed,
//! )?;
//!
//! assert!((column, score) == (3, WIN_SCORE));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod eval;

pub mod search;


pub use crate::board::{Board, Cell};
pub use crate::eval::Heuristic;
pub use crate::search::Searcher;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// a winning run of four must fit along every line family
const_assert!(WIDTH >= 4);
const_assert!(HEIGHT >= 4);
