//! History consistency invariant: the viewed step exists and play stops
//! once a board is decided.

use super::super::GameState;
use super::super::rules;
use super::Invariant;

/// Invariant: `current_step` indexes a recorded entry, and no entry
/// follows a board that already has a winner or is full.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let entries = game.history().entries();
        if game.current_step() >= entries.len() {
            return false;
        }

        // The final entry may be decided; nothing before it may be.
        entries[..entries.len() - 1]
            .iter()
            .all(|entry| !rules::evaluate(entry.board()).is_decided())
    }

    fn description() -> &'static str {
        "Viewed step is recorded and no move follows a decided board"
    }
}
