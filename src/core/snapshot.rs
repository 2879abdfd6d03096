//! Read-model snapshots for the presentation layer
//!
//! A snapshot is a plain-data copy of everything a renderer needs for one
//! frame. Building it never mutates the session, and presenters never reach
//! into live game state.

use crate::types::{PieceType, SelectOutcome};

/// One piece as the presenter sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceView {
    pub id: u32,
    pub kind: PieceType,
    /// Drawn face up
    pub visible: bool,
    /// Cascade offset from the stack anchor, layout pixels
    pub offset_px: (i32, i32),
    /// Draw order; higher values render on top
    pub z_order: i32,
}

/// One stack: anchor position plus its pieces top-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackSnapshot {
    pub x: i32,
    pub y: i32,
    pub pieces: Vec<PieceView>,
}

impl StackSnapshot {
    pub fn top(&self) -> Option<&PieceView> {
        self.pieces.first()
    }
}

/// Complete frame state for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub stacks: Vec<StackSnapshot>,
    /// Bar contents in grouped order
    pub bar: Vec<PieceType>,
    pub bar_capacity: usize,
    pub outcome: SelectOutcome,
    pub episode_id: u32,
    /// RNG stream position at snapshot time
    pub seed: u32,
    /// Pieces still on the board
    pub remaining: usize,
}

impl GameSnapshot {
    /// Whether the session still accepts selections
    pub fn playable(&self) -> bool {
        !self.outcome.is_terminal()
    }

    pub fn bar_free(&self) -> usize {
        self.bar_capacity.saturating_sub(self.bar.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playable_tracks_outcome() {
        let mut snapshot = GameSnapshot {
            stacks: Vec::new(),
            bar: Vec::new(),
            bar_capacity: 7,
            outcome: SelectOutcome::Continue,
            episode_id: 0,
            seed: 1,
            remaining: 0,
        };
        assert!(snapshot.playable());

        snapshot.outcome = SelectOutcome::Lost;
        assert!(!snapshot.playable());
    }

    #[test]
    fn test_bar_free_saturates() {
        let snapshot = GameSnapshot {
            stacks: Vec::new(),
            bar: vec![PieceType::A; 7],
            bar_capacity: 7,
            outcome: SelectOutcome::Continue,
            episode_id: 0,
            seed: 1,
            remaining: 0,
        };
        assert_eq!(snapshot.bar_free(), 0);
    }
}
