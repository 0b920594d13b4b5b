//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner is a draw.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    check_winner(board).is_none() && is_full(board)
}
