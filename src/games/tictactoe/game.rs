//! Time-travelling game state machine for tic-tac-toe.
//!
//! [`GameState`] is a value. Every command returns a new state and leaves
//! the receiver untouched, so a caller keeps the current state and swaps
//! it wholesale after each command.

use super::Position;
use super::action::{Command, MoveError, StepError};
use super::contracts::{Contract, MoveContract, assert_invariants};
use super::history::History;
use super::rules::{self, Outcome, WinningLine};
use super::types::{Board, Player};
use super::view::{self, DisplayOrder, GameStatus, GameView, MoveListEntry};
use serde::Serialize;
use tracing::{debug, instrument};

/// Complete game state: recorded boards, viewed step and list order.
///
/// The player to move is never stored; it follows from the parity of
/// `current_step`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) current_step: usize,
    pub(crate) display_order: DisplayOrder,
}

impl GameState {
    /// Creates a new game: one empty board, step 0, ascending order.
    pub fn new() -> Self {
        Self::with_order(DisplayOrder::Ascending)
    }

    /// Creates a new game with the given move list order.
    pub fn with_order(display_order: DisplayOrder) -> Self {
        Self {
            history: History::new(),
            current_step: 0,
            display_order,
        }
    }

    /// Builds a game by playing `moves` in order from the start.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] encountered.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        moves
            .iter()
            .try_fold(Self::new(), |game, &pos| game.try_apply_move(pos))
    }

    // ─────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────

    /// Places the next player's mark at `pos`.
    ///
    /// Entries after the viewed step are discarded first, so moving after
    /// a jump starts a new branch.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the viewed board is won or full.
    /// - [`MoveError::SquareOccupied`] if `pos` is taken on the viewed board.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player()))]
    pub fn try_apply_move(&self, pos: Position) -> Result<Self, MoveError> {
        MoveContract::pre(self, &pos)?;

        let board = self.current_board().with(pos, self.next_player());
        let history = self.history.branch(self.current_step, board);
        let next = Self {
            current_step: history.len() - 1,
            history,
            display_order: self.display_order,
        };

        debug_assert!(
            MoveContract::post(self, &next).is_ok(),
            "Move postcondition failed"
        );
        Ok(next)
    }

    /// Places the next player's mark at `pos`, ignoring illegal moves.
    ///
    /// An illegal move yields a state equal to `self`.
    #[instrument(skip(self))]
    pub fn apply_move(&self, pos: Position) -> Self {
        match self.try_apply_move(pos) {
            Ok(next) => next,
            Err(error) => {
                debug!(%error, position = %pos, "Move ignored");
                self.clone()
            }
        }
    }

    /// Views the board as it was after move `step`.
    ///
    /// History is kept intact; the player to move is recomputed from `step`.
    ///
    /// # Errors
    ///
    /// Returns [`StepError`] if `step` is not a recorded move number.
    #[instrument(skip(self))]
    pub fn jump_to_move(&self, step: usize) -> Result<Self, StepError> {
        if step >= self.history.len() {
            return Err(StepError {
                step,
                len: self.history.len(),
            });
        }
        let next = Self {
            current_step: step,
            ..self.clone()
        };
        assert_invariants(&next);
        Ok(next)
    }

    /// Flips the move list between ascending and descending order.
    #[instrument(skip(self))]
    pub fn toggle_order(&self) -> Self {
        let next = Self {
            display_order: self.display_order.toggled(),
            ..self.clone()
        };
        assert_invariants(&next);
        next
    }

    /// Applies a [`Command`].
    ///
    /// Illegal moves are ignored as in [`GameState::apply_move`].
    ///
    /// # Errors
    ///
    /// Only [`Command::JumpTo`] can fail.
    pub fn apply(&self, command: Command) -> Result<Self, StepError> {
        match command {
            Command::ApplyMove(pos) => Ok(self.apply_move(pos)),
            Command::JumpTo(step) => self.jump_to_move(step),
            Command::ToggleOrder => Ok(self.toggle_order()),
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────

    /// Recorded boards in move order.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Move number currently viewed.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Selected move list order.
    pub fn display_order(&self) -> DisplayOrder {
        self.display_order
    }

    /// Player to move at the viewed step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Board at the viewed step.
    pub fn current_board(&self) -> &Board {
        // current_step < history.len() is an invariant of every constructor.
        self.history
            .get(self.current_step)
            .unwrap_or_else(|| self.history.last())
            .board()
    }

    /// Completed line on the viewed board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::check_winner(self.current_board())
    }

    /// True if the viewed board is full with no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.current_board())
    }

    /// Status of the viewed board.
    pub fn status(&self) -> GameStatus {
        match rules::evaluate(self.current_board()) {
            Outcome::Winner(line) => GameStatus::Won(line),
            Outcome::Draw => GameStatus::Draw,
            Outcome::Undecided => GameStatus::InProgress {
                next: self.next_player(),
            },
        }
    }

    /// Status line: winner, draw, or next player.
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// Annotated move list in the selected display order.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        let mut moves = view::annotate(&self.history, self.current_step);
        if self.display_order == DisplayOrder::Descending {
            moves.reverse();
        }
        moves
    }

    /// Snapshot of the full read-model.
    pub fn view(&self) -> GameView {
        GameView {
            board: view::board_chars(self.current_board().squares()),
            status: self.status_text(),
            winning_line: self
                .winning_line()
                .map(|line| line.indices().to_vec())
                .unwrap_or_default(),
            moves: self.move_list(),
            next_player: self.next_player(),
            current_step: self.current_step,
            order: self.display_order,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(cells: &[usize]) -> GameState {
        cells.iter().fold(GameState::new(), |game, &cell| {
            game.apply_move(Position::from_index(cell).expect("test cell in range"))
        })
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_step(), 0);
        assert_eq!(game.next_player(), Player::X);
        assert!(game.current_board().is_blank());
        assert_eq!(game.status_text(), "Next player: X");
    }

    #[test]
    fn test_move_advances_step_and_turn() {
        let game = play(&[4]);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.current_step(), 1);
        assert_eq!(game.next_player(), Player::O);
        assert_eq!(game.status_text(), "Next player: O");
    }

    #[test]
    fn test_occupied_square_is_noop() {
        let game = play(&[4]);
        assert_eq!(game.apply_move(Position::Center), game);
        assert_eq!(
            game.try_apply_move(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_top_row_win_freezes_board() {
        let game = play(&[0, 4, 1, 3, 2]);
        let line = game.winning_line().expect("X completed the top row");
        assert_eq!(line.indices(), [0, 1, 2]);
        assert_eq!(line.player, Player::X);
        assert_eq!(game.status_text(), "Winner: X");
        assert_eq!(game.apply_move(Position::BottomRight), game);
        assert_eq!(game.try_apply_move(Position::BottomRight), Err(MoveError::GameOver));
    }

    #[test]
    fn test_full_board_draw() {
        let game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.history().len(), 10);
        assert!(game.winning_line().is_none());
        assert!(game.is_draw());
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.status_text(), "Draw. Restart the game.");
    }

    #[test]
    fn test_jump_recomputes_turn_and_keeps_history() {
        let game = play(&[4, 0, 8]);
        let jumped = game.jump_to_move(1).expect("step in range");
        assert_eq!(jumped.current_step(), 1);
        assert_eq!(jumped.history(), game.history());
        assert_eq!(jumped.next_player(), Player::O);
        assert_eq!(
            jumped.current_board(),
            &Board::new().with(Position::Center, Player::X)
        );
    }

    #[test]
    fn test_jump_out_of_range() {
        let game = play(&[4, 0]);
        assert_eq!(game.jump_to_move(3), Err(StepError { step: 3, len: 3 }));
        assert!(game.jump_to_move(2).is_ok());
    }

    #[test]
    fn test_move_after_jump_branches() {
        let game = play(&[4, 0, 8, 2]);
        let branched = game
            .jump_to_move(1)
            .expect("step in range")
            .apply_move(Position::TopRight);
        assert_eq!(branched.history().len(), 3);
        assert_eq!(branched.current_step(), 2);
        assert_eq!(branched.history().move_at(2), Some((Position::TopRight, Player::O)));
    }

    #[test]
    fn test_jump_back_from_win_allows_moves() {
        let won = play(&[0, 4, 1, 3, 2]);
        let rewound = won.jump_to_move(4).expect("step in range");
        assert!(rewound.winning_line().is_none());
        let next = rewound.apply_move(Position::BottomRight);
        assert_eq!(next.history().len(), 6);
        assert_eq!(next.status_text(), "Next player: O");
    }

    #[test]
    fn test_move_list_labels_and_current_marker() {
        let game = play(&[4, 0]).jump_to_move(1).expect("step in range");
        let labels: Vec<_> = game.move_list().into_iter().map(|m| m.label).collect();
        assert_eq!(
            labels,
            vec!["Go to game start", "Go to move #1 (2,2)", "Go to move #2 (1,1)"]
        );
        let current: Vec<_> = game
            .move_list()
            .into_iter()
            .filter(|m| m.is_current)
            .map(|m| m.step)
            .collect();
        assert_eq!(current, vec![1]);
    }

    #[test]
    fn test_toggle_reverses_only_the_list() {
        let game = play(&[4, 0, 8]);
        let toggled = game.toggle_order();
        assert_eq!(toggled.history(), game.history());
        assert_eq!(toggled.current_step(), game.current_step());

        let mut forward = game.move_list();
        forward.reverse();
        assert_eq!(toggled.move_list(), forward);
        assert_eq!(toggled.toggle_order().move_list(), game.move_list());
    }

    #[test]
    fn test_apply_command() {
        let game = GameState::new()
            .apply(Command::ApplyMove(Position::Center))
            .and_then(|g| g.apply(Command::ToggleOrder))
            .and_then(|g| g.apply(Command::JumpTo(0)))
            .expect("commands are valid");
        assert_eq!(game.current_step(), 0);
        assert_eq!(game.display_order(), DisplayOrder::Descending);
        assert!(game.apply(Command::JumpTo(5)).is_err());
    }

    #[test]
    fn test_view_snapshot() {
        let view = play(&[0, 4, 1, 3, 2]).view();
        assert_eq!(view.winning_line, vec![0, 1, 2]);
        assert_eq!(view.status, "Winner: X");
        assert_eq!(view.board[..3], ['X', 'X', 'X']);
        assert_eq!(view.board[5], ' ');
        assert_eq!(view.moves.len(), 6);
        assert_eq!(view.next_player, Player::O);

        let rewound = play(&[0, 4, 1]).jump_to_move(1).expect("step 1 exists").view();
        assert_eq!(rewound.next_player, Player::O);
        assert_eq!(rewound.status, "Next player: O");
        assert_eq!(rewound.current_step, 1);
    }

    #[test]
    fn test_toggle_order_twice_is_identity() {
        let game = play(&[4, 0]);
        assert_eq!(game.toggle_order().toggle_order(), game);
    }

    #[test]
    #[should_panic(expected = "Timeline invariants violated")]
    #[cfg(debug_assertions)]
    fn test_toggle_order_rejects_corrupt_state() {
        let mut game = play(&[4, 0]);
        game.current_step = 7;
        let _ = game.toggle_order();
    }
}
