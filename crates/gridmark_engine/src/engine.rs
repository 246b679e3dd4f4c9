//! Game engine: the single source of truth for one game session.
//!
//! The engine owns the configuration and the history. Status, winner and
//! turn are never stored; they are derived from the ply under the cursor on
//! every read, so time travel can revisit any earlier position.

use crate::invariants::{GameInvariants, InvariantSet};
use crate::move_list::{self, MoveListEntry, SortOrder};
use crate::rules::{self, GameStatus, Winner};
use crate::{Board, EngineError, GameConfig, HistoryStore, Mark, MoveRejection, Ply, Player};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Outcome of a place-mark intent.
///
/// Ignored placements leave the engine untouched and are not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Placement {
    /// A new ply was recorded.
    Placed {
        /// Number of the new ply.
        ply: usize,
        /// Status of the new ply.
        status: GameStatus,
    },
    /// Nothing happened.
    Ignored(MoveRejection),
}

impl Placement {
    /// Checks if a mark was placed.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. })
    }
}

/// Everything a renderer needs to draw the current ply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ViewState {
    /// Configuration in force.
    config: GameConfig,
    /// Board at the cursor.
    board: Board,
    /// Status at the cursor.
    status: GameStatus,
    /// Winning line at the cursor, if any.
    winner: Option<Winner>,
    /// Cursor position.
    current_ply: usize,
    /// Number of recorded plies, root included.
    total_plies: usize,
}

impl ViewState {
    /// Status line, e.g. `Next player: O`.
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }
}

/// Generalized tic-tac-toe engine with time-travel history.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    history: HistoryStore,
}

impl GameEngine {
    /// Creates an engine at the empty board for `config`.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        if !config.is_win_reachable() {
            warn!("Win length exceeds both board dimensions; no game can be won");
        }
        Self {
            config,
            history: HistoryStore::new(&config),
        }
    }

    /// Places the current player's mark at `index`.
    ///
    /// Silently ignored when the ply under the cursor is already won, or the
    /// cell is occupied or off the board. If the cursor is on an earlier ply,
    /// the plies after it are discarded.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn place_mark(&mut self, index: usize) -> Placement {
        if self.status().winner().is_some() {
            debug!("Ignoring placement on a won ply");
            return Placement::Ignored(MoveRejection::GameAlreadyWon);
        }

        if let Some(reason) = self.rejection(index) {
            debug!(%reason, "Ignoring placement");
            return Placement::Ignored(reason);
        }

        let player = self.next_player();
        let ply = match self.history.append(player, index) {
            Ok(ply) => ply.ply_number(),
            Err(err) => {
                warn!(%err, "History refused a checked placement");
                return Placement::Ignored(err.rejection().unwrap_or(MoveRejection::OutsideBoard));
            }
        };

        self.check_invariants();
        let status = self.status();
        info!(ply, ?player, %status, "Mark placed");
        Placement::Placed { ply, status }
    }

    /// Moves the cursor to `ply_number`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] if the ply was never recorded.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, ply_number: usize) -> Result<(), EngineError> {
        self.history.jump(ply_number)?;
        debug!(next = %self.next_player(), "Cursor moved");
        Ok(())
    }

    /// Replaces the configuration and starts over from an empty board.
    ///
    /// The win length is not checked against the board shape.
    #[instrument(skip(self))]
    pub fn reconfigure(&mut self, config: GameConfig) {
        if !config.is_win_reachable() {
            warn!("Win length exceeds both board dimensions; no game can be won");
        }
        self.config = config;
        self.history.reset(&config);
        info!(
            rows = config.rows(),
            cols = config.cols(),
            win_length = config.win_length(),
            "Engine reconfigured"
        );
    }

    /// Derives the view of the ply under the cursor.
    #[instrument(skip(self))]
    pub fn view_state(&self) -> ViewState {
        let current = self.history.current();
        let status = self.status();
        ViewState {
            config: self.config,
            board: current.board().clone(),
            winner: status.winner().cloned(),
            status,
            current_ply: self.history.cursor(),
            total_plies: self.history.ply_count(),
        }
    }

    /// Labelled move list in the given direction.
    pub fn move_list(&self, sort: SortOrder) -> Vec<MoveListEntry> {
        move_list::entries(self.history.all(), sort, self.history.cursor())
    }

    /// Status of the ply under the cursor. Won beats Drawn beats Ongoing.
    pub fn status(&self) -> GameStatus {
        let current = self.history.current();
        rules::evaluate(
            current.board(),
            current.placed_index(),
            current.ply_number(),
            &self.config,
        )
    }

    /// Winning line at the cursor, if any.
    pub fn winner(&self) -> Option<Winner> {
        match self.status() {
            GameStatus::Won(winner) => Some(winner),
            _ => None,
        }
    }

    /// Player whose mark the next placement writes, from cursor parity.
    pub fn next_player(&self) -> Player {
        Player::to_move_at(self.history.cursor())
    }

    /// Configuration in force.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Recorded history.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Ply under the cursor.
    pub fn current(&self) -> &Ply {
        self.history.current()
    }

    /// Why a mark at `index` would be refused on the cursor board, if it would.
    fn rejection(&self, index: usize) -> Option<MoveRejection> {
        match self.history.current().board().get(index) {
            None => Some(MoveRejection::OutsideBoard),
            Some(Mark::Placed(_)) => Some(MoveRejection::CellOccupied),
            Some(Mark::Empty) => None,
        }
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions) {
            if let Err(violations) = GameInvariants::check_all(&self.history) {
                for violation in &violations {
                    warn!(description = %violation.description, "Game invariant violated");
                }
                debug_assert!(violations.is_empty(), "Game invariants violated");
            }
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameConfig::classic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(engine: &mut GameEngine, moves: &[usize]) {
        for &index in moves {
            assert!(engine.place_mark(index).is_placed(), "move {} should be legal", index);
        }
    }

    #[test]
    fn test_new_engine_view() {
        let engine = GameEngine::default();
        let view = engine.view_state();
        assert_eq!(*view.current_ply(), 0);
        assert_eq!(*view.total_plies(), 1);
        assert_eq!(view.winner(), &None);
        assert_eq!(view.status_text(), "Next player: X");
    }

    #[test]
    fn test_turns_alternate() {
        let mut engine = GameEngine::default();
        assert_eq!(engine.next_player(), Player::X);
        play(&mut engine, &[4]);
        assert_eq!(engine.next_player(), Player::O);
        assert_eq!(engine.current().player(), Some(Player::X));
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut engine = GameEngine::default();
        play(&mut engine, &[4]);
        let before = engine.history().clone();
        assert_eq!(
            engine.place_mark(4),
            Placement::Ignored(MoveRejection::CellOccupied)
        );
        assert_eq!(engine.history(), &before);
    }

    #[test]
    fn test_outside_board_is_ignored() {
        let mut engine = GameEngine::default();
        assert_eq!(
            engine.place_mark(42),
            Placement::Ignored(MoveRejection::OutsideBoard)
        );
        assert_eq!(engine.history().ply_count(), 1);
    }

    #[test]
    fn test_placement_reports_status() {
        let mut engine = GameEngine::default();
        play(&mut engine, &[0, 4, 1, 3]);
        match engine.place_mark(2) {
            Placement::Placed { ply, status } => {
                assert_eq!(ply, 5);
                assert!(matches!(status, GameStatus::Won(ref w) if w.player == Player::X));
            }
            other => panic!("expected placement, got {:?}", other),
        }
    }

    #[test]
    fn test_jump_rederives_turn() {
        let mut engine = GameEngine::default();
        play(&mut engine, &[0, 4, 1]);
        engine.jump_to(2).unwrap();
        assert_eq!(engine.next_player(), Player::X);
        engine.jump_to(1).unwrap();
        assert_eq!(engine.next_player(), Player::O);
        assert_eq!(engine.history().ply_count(), 4);
    }

    #[test]
    fn test_winner_only_at_winning_ply() {
        let mut engine = GameEngine::default();
        play(&mut engine, &[0, 4, 1, 3, 2]);
        assert!(engine.winner().is_some());
        engine.jump_to(4).unwrap();
        assert!(engine.winner().is_none());
        // Play resumes from the earlier ply and overwrites the win.
        assert!(engine.place_mark(8).is_placed());
        assert_eq!(engine.history().ply_count(), 6);
        assert!(engine.winner().is_none());
    }
}
