//! Plain-text rendering of the engine's view state.

use gridmark_engine::{MoveListEntry, SortOrder, ViewState};
use std::fmt;

/// Renders board, status, winning cells and move list as one block of text.
pub fn screen(view: &ViewState, moves: &[MoveListEntry], sort: SortOrder) -> String {
    Screen { view, moves, sort }.to_string()
}

/// One full redraw of the session.
struct Screen<'a> {
    view: &'a ViewState,
    moves: &'a [MoveListEntry],
    sort: SortOrder,
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.view;
        writeln!(f, "{}", view.board())?;
        writeln!(f)?;
        writeln!(f, "{}", view.status_text())?;
        if let Some(winner) = view.winner() {
            let cells = winner
                .line
                .iter()
                .map(|index| index.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "Winning cells: {}", cells)?;
        }
        writeln!(
            f,
            "Ply {} of {} ({}x{}, {} in a row)",
            view.current_ply(),
            view.total_plies() - 1,
            view.config().rows(),
            view.config().cols(),
            view.config().win_length()
        )?;
        write!(f, "Moves ({}):", self.sort)?;
        for entry in self.moves {
            let marker = if entry.is_current { ">" } else { " " };
            write!(f, "\n {} {}", marker, entry.label)?;
        }
        Ok(())
    }
}
