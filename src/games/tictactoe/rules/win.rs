//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in scan order.
///
/// Rows, then columns, then diagonals. When one move completes two lines
/// the earlier line in this table is the one reported.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line together with the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// The winning player.
    pub player: Player,
    /// The three cells of the line, in scan order.
    pub line: [Position; 3],
}

impl WinningLine {
    /// Board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }

    /// Returns true if `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first complete line in [`LINES`] order, or `None`.
#[instrument]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some(WinningLine {
                    player,
                    line: [a, b, c],
                })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_of(cells: &[(Position, Player)]) -> Board {
        cells
            .iter()
            .fold(Board::new(), |board, &(pos, player)| board.with(pos, player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_of(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        let win = check_winner(&board).expect("top row is complete");
        assert_eq!(win.player, Player::X);
        assert_eq!(win.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_of(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        let win = check_winner(&board).expect("diagonal is complete");
        assert_eq!(win.player, Player::O);
        assert_eq!(win.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let board = line
                .iter()
                .fold(Board::new(), |board, &pos| board.with(pos, Player::O));
            let win = check_winner(&board).expect("line is complete");
            assert_eq!(win.line, line);
        }
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = board_of(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_of(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_double_line_reports_first_in_scan_order() {
        // Center completes the middle row and the main diagonal at once.
        let board = board_of(&[
            (Position::MiddleLeft, Player::X),
            (Position::MiddleRight, Player::X),
            (Position::TopLeft, Player::X),
            (Position::BottomRight, Player::X),
            (Position::Center, Player::X),
        ]);
        let win = check_winner(&board).expect("two lines are complete");
        assert_eq!(win.indices(), [3, 4, 5]);
    }

    #[test]
    fn test_contains() {
        let board = board_of(&[
            (Position::TopLeft, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        let win = check_winner(&board).expect("left column is complete");
        assert!(win.contains(Position::MiddleLeft));
        assert!(!win.contains(Position::Center));
    }
}
