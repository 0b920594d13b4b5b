//! First-class commands for the tic-tac-toe timeline.
//!
//! Commands are domain events, not side effects. They represent the
//! player's intent and are applied to a [`GameState`](super::GameState)
//! to produce the next state.

use super::Position;
use serde::{Deserialize, Serialize};

/// A command accepted by the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Place the next player's mark at a position.
    ApplyMove(Position),
    /// View the board as it was after the given move number.
    JumpTo(usize),
    /// Flip the move list between ascending and descending order.
    ToggleOrder,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::ApplyMove(pos) => write!(f, "move {} ({})", pos.to_index(), pos.label()),
            Command::JumpTo(step) => write!(f, "jump {}", step),
            Command::ToggleOrder => write!(f, "toggle"),
        }
    }
}

/// Reason a move was refused.
///
/// Refused moves leave the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The viewed board already has a winner or is full.
    #[display("Game is already over")]
    GameOver,
}

/// A jump target outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Step {} is out of range (history has {} entries)", step, len)]
pub struct StepError {
    /// Requested step.
    pub step: usize,
    /// History length at the time of the request.
    pub len: usize,
}
