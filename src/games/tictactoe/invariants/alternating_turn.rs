//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move N (the entry at step N) is placed by X when N is odd and by O when
/// N is even, which is exactly what `next_player` derives from the step
/// parity before the move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        (1..history.len()).all(|step| match history.move_at(step) {
            Some((_, player)) => player == Player::for_step(step - 1),
            None => false,
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
