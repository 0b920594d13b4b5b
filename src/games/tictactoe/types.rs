//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the player whose turn it is after `step` moves.
    ///
    /// X moves on even steps, O on odd ones.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Character used when rendering the square.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: placing a mark produces a new board, so snapshots
/// recorded in history are never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from raw squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Returns a copy of this board with `player` placed at `pos`.
    pub fn with(&self, pos: Position, player: Player) -> Self {
        let mut squares = self.squares;
        squares[pos.to_index()] = Square::Occupied(player);
        Self { squares }
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns true if no square is occupied.
    pub fn is_blank(&self) -> bool {
        self.squares.iter().all(|s| *s == Square::Empty)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Positions whose squares differ between `self` and `other`, in index order.
    pub fn diff(&self, other: &Board) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.get(*pos) != other.get(*pos))
            .collect()
    }
}
