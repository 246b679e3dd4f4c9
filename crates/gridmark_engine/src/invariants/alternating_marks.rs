//! Alternating marks invariant: X, O, X, O, ... starting with X.

use super::Invariant;
use crate::{HistoryStore, Player};

/// Invariant: the player of ply `i` is the one whose turn it was at ply `i - 1`.
///
/// The history itself accepts any player; the engine is what guarantees
/// alternation, so this is checked at engine level.
pub struct AlternatingMarksInvariant;

impl Invariant<HistoryStore> for AlternatingMarksInvariant {
    fn holds(history: &HistoryStore) -> bool {
        history
            .all()
            .iter()
            .skip(1)
            .all(|ply| ply.player() == Some(Player::to_move_at(ply.ply_number() - 1)))
    }

    fn description() -> &'static str {
        "Players alternate marks (X, O, X, O, ...)"
    }
}
