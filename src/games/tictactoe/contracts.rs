//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::invariants::{InvariantSet, InvariantViolation, TimelineInvariants};
use super::{GameState, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The viewed board has neither a winner nor a full grid.
pub struct GameUndecided;

impl GameUndecided {
    /// Rejects moves on a decided board.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.status().is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameState) -> Result<(), MoveError> {
        if game.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: the viewed game is undecided and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameState) -> Result<(), MoveError> {
        GameUndecided::check(game)?;
        SquareIsEmpty::check(pos, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Viewed board is undecided
/// - Square must be empty
///
/// Postconditions:
/// - Board remains monotonic
/// - Players still alternate
/// - History remains consistent with the viewed step
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(game: &GameState, pos: &Position) -> Result<(), MoveError> {
        LegalMove::check(*pos, game)
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        TimelineInvariants::check_all(after)
    }
}

/// Asserts that all timeline invariants hold (panic on violation in debug builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = TimelineInvariants::check_all(game)
    {
        for violation in &violations {
            warn!(%violation, "Invariant violated");
        }
        panic!("Timeline invariants violated: {:?}", violations);
    }
}
