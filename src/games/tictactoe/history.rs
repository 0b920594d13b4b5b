//! Board snapshots, one per move.

use super::position::Position;
use super::types::{Board, Player};
use serde::Serialize;

/// One recorded board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_new::new)]
pub struct HistoryEntry {
    board: Board,
}

impl HistoryEntry {
    /// The board after this entry's move.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// Ordered board snapshots: entry 0 is the empty board, entry N the board
/// after the N-th move.
///
/// The only mutations are [`History::branch`], which drops every entry
/// after a step and appends one new snapshot. The sequence is therefore
/// never empty and always starts from a blank board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// History holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::new(Board::new())],
        }
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the starting board is always present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot at `step`, if recorded.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// Most recent snapshot.
    pub fn last(&self) -> &HistoryEntry {
        // entries is never empty
        &self.entries[self.entries.len() - 1]
    }

    /// All snapshots in move order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns a new history: entries `0..=step` followed by `board`.
    ///
    /// Any entries after `step` belonged to an abandoned line of play and
    /// are discarded.
    pub(crate) fn branch(&self, step: usize, board: Board) -> Self {
        let keep = (step + 1).min(self.entries.len());
        let mut entries = Vec::with_capacity(keep + 1);
        entries.extend_from_slice(&self.entries[..keep]);
        entries.push(HistoryEntry::new(board));
        Self { entries }
    }

    /// Cells that changed between `step - 1` and `step`.
    ///
    /// Empty for step 0 or an unknown step. A well-formed history yields
    /// exactly one cell per move.
    pub fn changes_at(&self, step: usize) -> Vec<Position> {
        match (step.checked_sub(1).and_then(|prev| self.get(prev)), self.get(step)) {
            (Some(before), Some(after)) => before.board().diff(after.board()),
            _ => Vec::new(),
        }
    }

    /// The cell and player of the move that produced `step`, when exactly
    /// one empty cell became occupied.
    pub fn move_at(&self, step: usize) -> Option<(Position, Player)> {
        let changes = self.changes_at(step);
        let [pos] = changes.as_slice() else {
            return None;
        };
        let before = self.get(step - 1)?.board().get(*pos);
        let after = self.get(step)?.board().get(*pos);
        match (before.player(), after.player()) {
            (None, Some(player)) => Some((*pos, player)),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_boards(boards: Vec<Board>) -> Self {
        Self {
            entries: boards.into_iter().map(HistoryEntry::new).collect(),
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
