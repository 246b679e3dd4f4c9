//! Non-interactive replay of a move sequence.

use crate::config::GridmarkConfig;
use crate::render;
use gridmark_engine::{GameEngine, MoveListEntry, Placement, ViewState};
use serde::Serialize;
use tracing::{instrument, warn};

/// Result of replaying a sequence of placements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// What each requested move did, in order.
    pub placements: Vec<Placement>,
    /// View at the end of the replay.
    pub view: ViewState,
    /// Move list in the configured direction.
    pub moves: Vec<MoveListEntry>,
}

/// Plays `moves` from an empty board.
///
/// Ignored moves are kept in the report and do not stop the replay.
#[instrument(skip(config))]
pub fn replay(config: &GridmarkConfig, moves: &[usize]) -> ReplayReport {
    let mut engine = GameEngine::new(*config.game());
    let placements: Vec<Placement> = moves
        .iter()
        .map(|&index| {
            let placement = engine.place_mark(index);
            if let Placement::Ignored(reason) = &placement {
                warn!(index, %reason, "Replay move ignored");
            }
            placement
        })
        .collect();

    ReplayReport {
        placements,
        view: engine.view_state(),
        moves: engine.move_list(*config.display().sort()),
    }
}

impl ReplayReport {
    /// Renders the final position as text.
    pub fn to_text(&self, config: &GridmarkConfig) -> String {
        render::screen(&self.view, &self.moves, *config.display().sort())
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
