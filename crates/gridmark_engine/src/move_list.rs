//! Display ordering of the move history.
//!
//! Everything here is a pure function of the plies handed in. Sort direction
//! belongs to the caller and nothing is cached between renders.

use crate::Ply;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Direction of the move list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Oldest ply first.
    #[default]
    Ascending,
    /// Newest ply first.
    Descending,
}

impl SortOrder {
    /// Flips the direction.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Checks if this is ascending order.
    pub fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }
}

/// One row of the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveListEntry {
    /// Ply this entry jumps to.
    pub ply_number: usize,
    /// Button text, e.g. `Go to move #3 (col:2, row:0)`.
    pub label: String,
    /// Whether the cursor is on this ply.
    pub is_current: bool,
}

/// Orders plies by ply number in the requested direction.
///
/// The sort is stable; descending is exactly ascending reversed.
#[instrument(skip(plies), fields(plies = plies.len()))]
pub fn order(plies: &[Ply], direction: SortOrder) -> Vec<&Ply> {
    let mut sorted: Vec<&Ply> = plies.iter().collect();
    sorted.sort_by_key(|ply| ply.ply_number());
    if !direction.is_ascending() {
        sorted.reverse();
    }
    sorted
}

/// Label for a ply's entry in the move list.
pub fn label(ply: &Ply) -> String {
    match ply.position() {
        Some(position) if ply.ply_number() > 0 => {
            format!("Go to move #{} ({})", ply.ply_number(), position)
        }
        _ => "Go to game start".to_string(),
    }
}

/// Builds the labelled move list, marking the ply under `cursor`.
#[instrument(skip(plies), fields(plies = plies.len()))]
pub fn entries(plies: &[Ply], sort: SortOrder, cursor: usize) -> Vec<MoveListEntry> {
    order(plies, sort)
        .into_iter()
        .map(|ply| MoveListEntry {
            ply_number: ply.ply_number(),
            label: label(ply),
            is_current: ply.ply_number() == cursor,
        })
        .collect()
}
