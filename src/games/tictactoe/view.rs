//! Derived read-model handed to presentation layers.
//!
//! Nothing here is stored: every value is recomputed from a
//! [`GameState`](super::GameState) on demand.

use super::history::History;
use super::rules::WinningLine;
use super::types::{Player, Square};
use serde::{Deserialize, Serialize};

/// Order in which the move list is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl DisplayOrder {
    /// The opposite order.
    pub fn toggled(self) -> Self {
        match self {
            DisplayOrder::Ascending => DisplayOrder::Descending,
            DisplayOrder::Descending => DisplayOrder::Ascending,
        }
    }
}

/// Status of the currently viewed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress {
        /// Player to move at the viewed step.
        next: Player,
    },
    /// A line is complete.
    Won(WinningLine),
    /// Board is full with no winner.
    Draw,
}

impl GameStatus {
    /// Returns true if moves are refused at this status.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Won(line) => write!(f, "Winner: {}", line.player),
            GameStatus::Draw => write!(f, "Draw. Restart the game."),
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListEntry {
    /// Move number this entry jumps to (0 is the game start).
    pub step: usize,
    /// Button text, e.g. `Go to move #3 (2,1)`.
    pub label: String,
    /// True for the step currently viewed.
    pub is_current: bool,
    /// Cells that changed relative to the previous step.
    pub changes: Vec<super::Position>,
}

/// Builds the move list in ascending step order.
pub(crate) fn annotate(history: &History, current_step: usize) -> Vec<MoveListEntry> {
    (0..history.len())
        .map(|step| {
            let changes = history.changes_at(step);
            let label = if step == 0 {
                "Go to game start".to_string()
            } else {
                changes.iter().fold(format!("Go to move #{}", step), |mut label, pos| {
                    label.push_str(&format!(" ({},{})", pos.column(), pos.row()));
                    label
                })
            };
            MoveListEntry {
                step,
                label,
                is_current: step == current_step,
                changes,
            }
        })
        .collect()
}

/// Serializable snapshot of everything a presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Viewed board, one character per cell (`' '`, `X` or `O`).
    pub board: Vec<char>,
    /// Status line, e.g. `Next player: O`.
    pub status: String,
    /// Indices of the winning line, empty when nobody has won.
    pub winning_line: Vec<usize>,
    /// Move list in the selected display order.
    pub moves: Vec<MoveListEntry>,
    /// Player to move at the viewed step, reported even once the game is over.
    pub next_player: Player,
    /// Step currently viewed.
    pub current_step: usize,
    /// Selected display order.
    pub order: DisplayOrder,
}

impl GameView {
    /// Renders the board and move list as plain text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in self.board.chunks(3) {
            let cells: Vec<String> = row
                .iter()
                .map(|c| if *c == ' ' { ".".to_string() } else { c.to_string() })
                .collect();
            out.push_str(&cells.join(" "));
            out.push('\n');
        }
        out.push_str(&self.status);
        out.push('\n');
        for entry in &self.moves {
            let marker = if entry.is_current { '>' } else { ' ' };
            out.push_str(&format!("{} {}\n", marker, entry.label));
        }
        out
    }
}

pub(crate) fn board_chars(squares: &[Square; 9]) -> Vec<char> {
    squares.iter().map(|s| s.symbol()).collect()
}
