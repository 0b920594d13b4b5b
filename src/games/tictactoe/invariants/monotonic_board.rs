//! Monotonic board invariant: each move fills exactly one empty square.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: History starts blank and grows one mark per step.
///
/// Entry 0 is the empty board. Every later entry differs from its
/// predecessor in exactly one cell, and that cell went from Empty to
/// Occupied. Squares are therefore never overwritten.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let entries = game.history().entries();

        let Some(first) = entries.first() else {
            return false;
        };
        if !first.board().is_blank() {
            return false;
        }

        entries.windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            match before.diff(after).as_slice() {
                [pos] => before.get(*pos) == Square::Empty && after.get(*pos) != Square::Empty,
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Board squares are monotonic (one empty square filled per move)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, History, Player, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let game = GameState::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ])
        .expect("legal moves");
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let x = Board::new().with(Position::Center, Player::X);
        let mut game = GameState::new();
        game.history = History::from_boards(vec![
            Board::new(),
            x,
            x.with(Position::Center, Player::O),
        ]);
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_two_cells_in_one_step_violates() {
        let mut game = GameState::new();
        game.history = History::from_boards(vec![
            Board::new(),
            Board::new()
                .with(Position::TopLeft, Player::X)
                .with(Position::Center, Player::O),
        ]);
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_non_blank_start_violates() {
        let mut game = GameState::new();
        game.history =
            History::from_boards(vec![Board::new().with(Position::Center, Player::X)]);
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
