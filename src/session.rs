//! Interactive game session.
//!
//! A [`Session`] owns the current [`GameState`] and swaps it for the
//! state returned by each command. Text commands typed by a player are
//! parsed here so front ends only deal with lines of input.

use crate::games::tictactoe::{Command, DisplayOrder, GameState, MoveError, Position};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument, warn};

/// Errors surfaced while handling player input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// Cell index outside 0-8 or unknown label.
    #[display("Invalid cell '{}' (expected 0-8 or a label like 'center')", _0)]
    InvalidCell(#[error(not(source))] String),

    /// Jump target outside the recorded history.
    #[display("Invalid step {} (choose 0-{})", step, max)]
    InvalidStep {
        /// Requested step.
        step: usize,
        /// Largest valid step.
        max: usize,
    },

    /// Input that is not a known command.
    #[display("Unknown command '{}'", _0)]
    UnknownCommand(#[error(not(source))] String),
}

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionInput {
    /// A game command.
    Command(Command),
    /// Re-render the current view.
    Show,
    /// Print available commands.
    Help,
    /// Leave the session.
    Quit,
}

impl SessionInput {
    /// Parses one line of input.
    ///
    /// Accepted forms: `move <cell>`, a bare `<cell>`, `jump <step>`,
    /// `toggle`, `show`, `help`, `quit`.
    #[instrument]
    pub fn parse(line: &str) -> Result<Self, SessionError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(SessionInput::Show);
        };
        let rest = words.collect::<Vec<_>>().join(" ");

        match head.to_lowercase().as_str() {
            "move" | "m" => {
                parse_cell(&rest).map(|pos| SessionInput::Command(Command::ApplyMove(pos)))
            }
            "jump" | "j" => rest
                .parse::<usize>()
                .map(|step| SessionInput::Command(Command::JumpTo(step)))
                .map_err(|_| SessionError::UnknownCommand(line.trim().to_string())),
            "toggle" | "t" => Ok(SessionInput::Command(Command::ToggleOrder)),
            "show" | "s" => Ok(SessionInput::Show),
            "help" | "h" | "?" => Ok(SessionInput::Help),
            "quit" | "q" | "exit" => Ok(SessionInput::Quit),
            _ => match parse_cell(line) {
                Ok(pos) => Ok(SessionInput::Command(Command::ApplyMove(pos))),
                Err(_) => Err(SessionError::UnknownCommand(line.trim().to_string())),
            },
        }
    }
}

fn parse_cell(text: &str) -> Result<Position, SessionError> {
    Position::from_label_or_number(text)
        .ok_or_else(|| SessionError::InvalidCell(text.trim().to_string()))
}

/// Help text for interactive play.
pub const HELP: &str = "\
Commands:
  move <cell>   place the next mark (cell 0-8, or just type the number)
  jump <step>   view the board after that move
  toggle        reverse the move list order
  show          print the board again
  quit          leave";

/// Holder of the current game state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    game: GameState,
}

impl Session {
    /// Creates a session with a fresh game.
    #[instrument]
    pub fn new(order: DisplayOrder) -> Self {
        info!(?order, "Starting new session");
        Self {
            game: GameState::with_order(order),
        }
    }

    /// Current game state.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Executes a command, replacing the game state.
    ///
    /// Illegal moves leave the state unchanged and return the reason, which
    /// a front end may show or ignore.
    #[instrument(skip(self), fields(step = self.game.current_step()))]
    pub fn execute(&mut self, command: Command) -> Result<Option<MoveError>, SessionError> {
        match command {
            Command::ApplyMove(pos) => match self.game.try_apply_move(pos) {
                Ok(next) => {
                    info!(%command, step = next.current_step(), "Move applied");
                    self.game = next;
                    Ok(None)
                }
                Err(reason) => {
                    debug!(%command, %reason, "Move ignored");
                    Ok(Some(reason))
                }
            },
            Command::JumpTo(_) | Command::ToggleOrder => {
                let next = self.game.apply(command).map_err(|e| {
                    warn!(error = %e, "Rejected jump");
                    SessionError::InvalidStep {
                        step: e.step,
                        max: e.len - 1,
                    }
                })?;
                info!(%command, "Command applied");
                self.game = next;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!(
            SessionInput::parse("move 4"),
            Ok(SessionInput::Command(Command::ApplyMove(Position::Center)))
        );
        assert_eq!(
            SessionInput::parse("8"),
            Ok(SessionInput::Command(Command::ApplyMove(Position::BottomRight)))
        );
        assert_eq!(
            SessionInput::parse("m top-left"),
            Ok(SessionInput::Command(Command::ApplyMove(Position::TopLeft)))
        );
        assert_eq!(
            SessionInput::parse("jump 2"),
            Ok(SessionInput::Command(Command::JumpTo(2)))
        );
        assert_eq!(
            SessionInput::parse("toggle"),
            Ok(SessionInput::Command(Command::ToggleOrder))
        );
        assert_eq!(SessionInput::parse("   "), Ok(SessionInput::Show));
        assert_eq!(SessionInput::parse("QUIT"), Ok(SessionInput::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            SessionInput::parse("move 9"),
            Err(SessionError::InvalidCell("9".to_string()))
        );
        assert!(matches!(
            SessionInput::parse("jump back"),
            Err(SessionError::UnknownCommand(_))
        ));
        assert!(matches!(
            SessionInput::parse("dance"),
            Err(SessionError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_execute_reports_ignored_move() {
        let mut session = Session::new(DisplayOrder::Ascending);
        assert_eq!(session.execute(Command::ApplyMove(Position::Center)), Ok(None));
        let before = session.game().clone();
        assert_eq!(
            session.execute(Command::ApplyMove(Position::Center)),
            Ok(Some(MoveError::SquareOccupied(Position::Center)))
        );
        assert_eq!(session.game(), &before);
    }

    #[test]
    fn test_execute_invalid_jump() {
        let mut session = Session::default();
        session
            .execute(Command::ApplyMove(Position::Center))
            .expect("move is accepted");
        assert_eq!(
            session.execute(Command::JumpTo(4)),
            Err(SessionError::InvalidStep { step: 4, max: 1 })
        );
        assert_eq!(session.game().current_step(), 1);
    }
}
