//! Tic-tac-toe with full move history and time travel.

mod action;
mod contracts;
mod game;
mod history;
mod position;
mod types;
mod view;

pub mod invariants;
pub mod rules;

pub use action::{Command, MoveError, StepError};
pub use contracts::{Contract, GameUndecided, LegalMove, MoveContract, SquareIsEmpty};
pub use game::GameState;
pub use history::{History, HistoryEntry};
pub use position::Position;
pub use rules::{Outcome, WinningLine};
pub use types::{Board, Player, Square};
pub use view::{DisplayOrder, GameStatus, GameView, MoveListEntry};
