//! Cursor invariant: the cursor always points at a recorded ply.

use super::Invariant;
use crate::HistoryStore;

/// Invariant: `0 <= cursor < ply_count`.
pub struct CursorInBoundsInvariant;

impl Invariant<HistoryStore> for CursorInBoundsInvariant {
    fn holds(history: &HistoryStore) -> bool {
        history.cursor() < history.ply_count()
    }

    fn description() -> &'static str {
        "Cursor points at a recorded ply"
    }
}
