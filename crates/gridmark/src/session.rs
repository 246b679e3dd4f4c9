//! Intent parsing and dispatch for one interactive game.
//!
//! The session is the only thing that touches the engine. It turns text
//! commands into intents, applies them, and re-reads the view afterwards;
//! the sort direction is the one piece of state it keeps for itself.

use crate::config::GridmarkConfig;
use crate::render;
use derive_more::{Display, Error};
use gridmark_engine::{
    CellPosition, ConfigError, EngineError, GameConfig, GameEngine, MoveRejection, Placement,
    SortOrder,
};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  place <index>              mark a cell by linear index (row * cols + col)
  place <row> <col>          mark a cell by coordinates
  jump <ply>                 view an earlier or later ply (0 = game start)
  sort                       toggle move list order
  config <rows> <cols> <k>   start over on a new board needing k in a row
  show                       redraw the board
  help                       show this text
  quit                       leave";

/// A user intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Mark a cell by linear index.
    Place(usize),
    /// Mark a cell by row and column.
    PlaceAt(CellPosition),
    /// Move the cursor to a ply.
    Jump(usize),
    /// Flip the move list direction.
    ToggleSort,
    /// Start over with a new configuration.
    Reconfigure(GameConfig),
    /// Redraw without changing anything.
    Show,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

/// Error parsing a command line into an [`Intent`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseIntentError {
    /// Nothing was typed.
    #[display("Empty command")]
    Empty,

    /// The first word is not a command.
    #[display("Unknown command '{}' (try 'help')", _0)]
    UnknownCommand(#[error(not(source))] String),

    /// The command needs more arguments.
    #[display("'{}' expects {}", command, usage)]
    WrongArity {
        /// Command name.
        command: &'static str,
        /// Expected arguments.
        usage: &'static str,
    },

    /// An argument is not a non-negative integer.
    #[display("'{}' is not a valid number", _0)]
    InvalidNumber(#[error(not(source))] String),

    /// The requested configuration is invalid.
    #[display("{}", _0)]
    InvalidConfig(ConfigError),
}

impl From<ConfigError> for ParseIntentError {
    fn from(err: ConfigError) -> Self {
        ParseIntentError::InvalidConfig(err)
    }
}

fn number(arg: &str) -> Result<usize, ParseIntentError> {
    arg.parse()
        .map_err(|_| ParseIntentError::InvalidNumber(arg.to_string()))
}

impl FromStr for Intent {
    type Err = ParseIntentError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Err(ParseIntentError::Empty);
        };
        let args: Vec<&str> = words.collect();

        match (command.to_lowercase().as_str(), args.as_slice()) {
            ("place" | "p", [index]) => Ok(Intent::Place(number(index)?)),
            ("place" | "p", [row, col]) => Ok(Intent::PlaceAt(CellPosition::new(
                number(row)?,
                number(col)?,
            ))),
            ("place" | "p", _) => Err(ParseIntentError::WrongArity {
                command: "place",
                usage: "<index> or <row> <col>",
            }),
            ("jump" | "j", [ply]) => Ok(Intent::Jump(number(ply)?)),
            ("jump" | "j", _) => Err(ParseIntentError::WrongArity {
                command: "jump",
                usage: "<ply>",
            }),
            ("sort" | "s", []) => Ok(Intent::ToggleSort),
            ("config" | "c", [rows, cols, win_length]) => Ok(Intent::Reconfigure(
                GameConfig::new(number(rows)?, number(cols)?, number(win_length)?)?,
            )),
            ("config" | "c", _) => Err(ParseIntentError::WrongArity {
                command: "config",
                usage: "<rows> <cols> <win_length>",
            }),
            ("show", []) => Ok(Intent::Show),
            ("help" | "?", []) => Ok(Intent::Help),
            ("quit" | "q" | "exit", []) => Ok(Intent::Quit),
            (other, _) => Err(ParseIntentError::UnknownCommand(other.to_string())),
        }
    }
}

/// What an intent did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// The engine recorded or ignored a placement.
    Placement(Placement),
    /// The cursor moved.
    Jumped(usize),
    /// The move list direction changed.
    Sorted(SortOrder),
    /// The board was replaced.
    Reconfigured(GameConfig),
    /// Nothing changed.
    Shown,
    /// Help was requested.
    Help,
    /// The session should end.
    Quit,
}

/// One game session: the engine plus the display direction.
#[derive(Debug, Clone)]
pub struct Session {
    engine: GameEngine,
    sort: SortOrder,
}

impl Session {
    /// Creates a session from front-end configuration.
    #[instrument]
    pub fn new(config: &GridmarkConfig) -> Self {
        Self {
            engine: GameEngine::new(*config.game()),
            sort: *config.display().sort(),
        }
    }

    /// The engine driving this session.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Current move list direction.
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Applies one intent.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] for a jump past the recorded history.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> Result<Feedback, EngineError> {
        let feedback = match intent {
            Intent::Place(index) => Feedback::Placement(self.engine.place_mark(index)),
            Intent::PlaceAt(position) => {
                let index = self.engine.current().board().index_of(position);
                match index {
                    Some(index) => Feedback::Placement(self.engine.place_mark(index)),
                    None => {
                        debug!(%position, "Position outside the board");
                        Feedback::Placement(Placement::Ignored(MoveRejection::OutsideBoard))
                    }
                }
            }
            Intent::Jump(ply) => {
                self.engine.jump_to(ply)?;
                Feedback::Jumped(ply)
            }
            Intent::ToggleSort => {
                self.sort = self.sort.toggle();
                Feedback::Sorted(self.sort)
            }
            Intent::Reconfigure(config) => {
                self.engine.reconfigure(config);
                Feedback::Reconfigured(config)
            }
            Intent::Show => Feedback::Shown,
            Intent::Help => Feedback::Help,
            Intent::Quit => Feedback::Quit,
        };
        Ok(feedback)
    }

    /// Renders the board, status line and move list.
    pub fn render(&self) -> String {
        render::screen(
            &self.engine.view_state(),
            &self.engine.move_list(self.sort),
            self.sort,
        )
    }

    /// Runs the read-dispatch-render loop until `quit` or end of input.
    ///
    /// Bad commands (including lines that are not valid UTF-8) and failed
    /// jumps are reported on `output` and the loop continues. Only I/O
    /// failures end it early.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> anyhow::Result<()> {
        info!("Session started");
        writeln!(output, "{}", self.render())?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if line.trim().is_empty() {
                continue;
            }

            let intent = match line.parse::<Intent>() {
                Ok(intent) => intent,
                Err(err) => {
                    debug!(%err, "Unparseable command");
                    writeln!(output, "error: {}", err)?;
                    continue;
                }
            };

            match self.dispatch(intent) {
                Ok(Feedback::Quit) => break,
                Ok(Feedback::Help) => writeln!(output, "{}", HELP)?,
                Ok(Feedback::Placement(Placement::Ignored(reason))) => {
                    writeln!(output, "ignored: {}", reason)?;
                }
                Ok(_) => writeln!(output, "{}", self.render())?,
                Err(err) => {
                    warn!(%err, "Intent failed");
                    writeln!(output, "error: {}", err)?;
                }
            }
        }

        info!("Session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_place_forms() {
        assert_eq!("place 4".parse::<Intent>().unwrap(), Intent::Place(4));
        assert_eq!(
            "P 1 2".parse::<Intent>().unwrap(),
            Intent::PlaceAt(CellPosition::new(1, 2))
        );
    }

    #[test]
    fn test_parse_config() {
        assert_eq!(
            "config 4 4 4".parse::<Intent>().unwrap(),
            Intent::Reconfigure(GameConfig::new(4, 4, 4).unwrap())
        );
        assert!(matches!(
            "config 0 4 4".parse::<Intent>(),
            Err(ParseIntentError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Intent>(), Err(ParseIntentError::Empty));
        assert!(matches!(
            "jump".parse::<Intent>(),
            Err(ParseIntentError::WrongArity { command: "jump", .. })
        ));
        assert_eq!(
            "jump -1".parse::<Intent>(),
            Err(ParseIntentError::InvalidNumber("-1".to_string()))
        );
        assert_eq!(
            "undo".parse::<Intent>(),
            Err(ParseIntentError::UnknownCommand("undo".to_string()))
        );
    }

    #[test]
    fn test_dispatch_toggle_sort() {
        let mut session = Session::new(&GridmarkConfig::default());
        assert_eq!(
            session.dispatch(Intent::ToggleSort).unwrap(),
            Feedback::Sorted(SortOrder::Descending)
        );
        assert_eq!(session.sort(), SortOrder::Descending);
    }

    #[test]
    fn test_dispatch_place_at_outside_board() {
        let mut session = Session::new(&GridmarkConfig::default());
        let feedback = session
            .dispatch(Intent::PlaceAt(CellPosition::new(0, 3)))
            .unwrap();
        assert_eq!(
            feedback,
            Feedback::Placement(Placement::Ignored(MoveRejection::OutsideBoard))
        );
        assert_eq!(session.engine().history().ply_count(), 1);
    }

    #[test]
    fn test_run_skips_invalid_utf8_line() {
        let mut session = Session::new(&GridmarkConfig::default());
        let mut output = Vec::new();
        let input: &[u8] = b"place 0\n\xff\xfe\nplace 4\n";
        session.run(input, &mut output).unwrap();

        assert_eq!(session.engine().history().ply_count(), 3);
        assert!(String::from_utf8_lossy(&output).contains("error: Unknown command"));
    }

    #[test]
    fn test_run_reports_oversized_config() {
        let mut session = Session::new(&GridmarkConfig::default());
        let mut output = Vec::new();
        session
            .run("config 18446744073709551615 2 3\nplace 4\n".as_bytes(), &mut output)
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("error: Config error: a 18446744073709551615x2 grid exceeds"));
        assert_eq!(session.engine().config(), &GameConfig::classic());
        assert_eq!(session.engine().history().ply_count(), 2);
    }
}
