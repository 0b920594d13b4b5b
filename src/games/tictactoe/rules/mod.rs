//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. They hold no state and
//! never fail, so the state machine and every read-model query can share
//! one evaluator.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinningLine, check_winner};

use super::Board;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A line is complete.
    Winner(WinningLine),
    /// Every square is filled and no line is complete.
    Draw,
    /// Moves remain and nobody has won.
    Undecided,
}

impl Outcome {
    /// Returns true if no further move may be played on the board.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }
}

/// Evaluates a board: winner first, then draw.
pub fn evaluate(board: &Board) -> Outcome {
    match check_winner(board) {
        Some(line) => Outcome::Winner(line),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::Undecided,
    }
}
