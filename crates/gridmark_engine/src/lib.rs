//! Game-state engine for generalized tic-tac-toe.
//!
//! Boards of any shape, a configurable run length to win, and a navigable
//! history of board states with branch-discarding time travel.
//!
//! # Architecture
//!
//! - **Board**: immutable grid snapshot, copy-on-write
//! - **Rules**: win detection around the last placed cell, draw detection
//! - **History**: arena of plies plus a cursor
//! - **Engine**: validates intents and derives status and view state
//! - **Move list**: pure display ordering of the history
//!
//! # Example
//!
//! ```
//! use gridmark_engine::{GameConfig, GameEngine, Player};
//!
//! let mut engine = GameEngine::new(GameConfig::classic());
//! for index in [0, 4, 1, 3, 2] {
//!     engine.place_mark(index);
//! }
//! let view = engine.view_state();
//! assert_eq!(view.winner().as_ref().map(|w| w.player), Some(Player::X));
//! assert_eq!(view.status_text(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod engine;
mod error;
mod history;
pub mod invariants;
pub mod move_list;
pub mod rules;
mod types;

pub use config::{ConfigError, GameConfig};
pub use engine::{GameEngine, Placement, ViewState};
pub use error::{EngineError, MoveRejection};
pub use history::{HistoryStore, Ply};
pub use move_list::{MoveListEntry, SortOrder};
pub use rules::{GameStatus, Winner};
pub use types::{Board, CellPosition, Mark, Player};
