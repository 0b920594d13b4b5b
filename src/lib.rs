//! Tic-tac-toe timeline library - a game state machine with time travel
//!
//! Every move is kept as a board snapshot. Players can jump back to any
//! earlier move, review a finished game, and branch off by playing a new
//! move from the past.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation over one board
//! - **GameState**: immutable state machine (`apply_move`, `jump_to_move`,
//!   `toggle_order`) plus a derived read-model
//! - **Session**: holds the current state and dispatches text commands
//! - **Config**: TOML settings for the command-line front end
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameState, Position};
//!
//! let game = GameState::new()
//!     .apply_move(Position::TopLeft)
//!     .apply_move(Position::Center);
//! assert_eq!(game.status_text(), "Next player: X");
//!
//! let rewound = game.jump_to_move(1).unwrap();
//! assert_eq!(rewound.status_text(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{Config, ConfigError};

// Crate-level exports - Session management
pub use session::{HELP, Session, SessionError, SessionInput};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Command, DisplayOrder, GameState, GameStatus, GameView, History, HistoryEntry,
    MoveError, MoveListEntry, Outcome, Player, Position, Square, StepError, WinningLine,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, TimelineInvariants,
};
pub use games::tictactoe::rules::{LINES, check_winner, evaluate, is_draw, is_full};
pub use games::tictactoe::{Contract, GameUndecided, LegalMove, MoveContract, SquareIsEmpty};
