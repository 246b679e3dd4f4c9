//! Root invariant: history always starts from an empty board.

use super::Invariant;
use crate::HistoryStore;

/// Invariant: ply 0 exists, places nothing and shows an empty board.
pub struct EmptyRootInvariant;

impl Invariant<HistoryStore> for EmptyRootInvariant {
    fn holds(history: &HistoryStore) -> bool {
        history.all().first().is_some_and(|root| {
            root.ply_number() == 0
                && root.placed_index().is_none()
                && root.position().is_none()
                && root.board().occupied_count() == 0
        })
    }

    fn description() -> &'static str {
        "History starts with an empty-board ply 0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameConfig, Player};

    #[test]
    fn test_root_survives_moves_and_reset() {
        let mut history = HistoryStore::new(&GameConfig::classic());
        history.append(Player::X, 4).unwrap();
        assert!(EmptyRootInvariant::holds(&history));

        history.reset(&GameConfig::new(5, 5, 4).unwrap());
        assert!(EmptyRootInvariant::holds(&history));
    }
}
