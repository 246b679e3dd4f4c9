//! Sequence invariant: plies are numbered by position and each one adds a single mark.

use super::Invariant;
use crate::HistoryStore;

/// Invariant: consecutive plies form a chain of single placements.
///
/// - `plies[i].ply_number == i`
/// - ply `i` differs from ply `i - 1` in exactly its placed cell, which was empty before
pub struct PlySequenceInvariant;

impl Invariant<HistoryStore> for PlySequenceInvariant {
    fn holds(history: &HistoryStore) -> bool {
        let plies = history.all();

        let numbered = plies
            .iter()
            .enumerate()
            .all(|(position, ply)| ply.ply_number() == position);
        if !numbered {
            return false;
        }

        plies.windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let Some(index) = pair[1].placed_index() else {
                return false;
            };

            before.cell_count() == after.cell_count()
                && before.is_vacant(index)
                && after.get(index).is_some_and(|mark| !mark.is_empty())
                && before
                    .cells()
                    .iter()
                    .zip(after.cells())
                    .enumerate()
                    .all(|(cell, (old, new))| cell == index || old == new)
        })
    }

    fn description() -> &'static str {
        "Plies are numbered contiguously and each adds exactly one mark"
    }
}
