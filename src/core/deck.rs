//! Deck module - builds the piece multiset for a game
//!
//! Applies the weighted-type policy: the favored types supply roughly 75% of
//! the deck, every type is emitted in groups of exactly three, and the result
//! is shuffled uniformly so stack composition is unpredictable.

use crate::core::rng::RandomSource;
use crate::types::{GameConfig, PieceType};

/// A single tile on the board or in the bar.
///
/// Pieces of the same type are distinct objects; `id` is unique within a
/// deal and identifies the piece across moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub id: u32,
    pub kind: PieceType,
    /// Presentation hint only; selectability never depends on it
    pub visible: bool,
}

impl Piece {
    pub fn new(id: u32, kind: PieceType) -> Self {
        Self {
            id,
            kind,
            visible: false,
        }
    }
}

/// Generate the shuffled deck for one deal.
///
/// The favored types (first `favored_type_count`) split `favored_share` of
/// the requested total between them; the remaining types split the rest.
/// Each type emits whole triples until its fractional share is covered, so
/// the realized deck can exceed the requested total by up to three pieces
/// per type. That divergence is the accepted default policy, not corrected;
/// distribution onto the board truncates to the requested total.
pub fn generate_deck(config: &GameConfig, mut rng: &mut dyn RandomSource) -> Vec<Piece> {
    let total = config.total_count();
    let types = config.piece_types();
    let split = config.favored_type_count.min(types.len());
    let (favored, remaining) = types.split_at(split);

    let favored_count = (total as f64 * config.favored_share).floor();
    let remaining_count = total as f64 - favored_count;

    let mut kinds = Vec::with_capacity(total + 3 * types.len());
    push_triples(&mut kinds, favored, favored_count);
    push_triples(&mut kinds, remaining, remaining_count);

    (&mut rng).shuffle(&mut kinds);

    kinds
        .into_iter()
        .enumerate()
        .map(|(i, kind)| Piece::new(i as u32, kind))
        .collect()
}

/// Emit groups of three per type until the per-type share is covered.
fn push_triples(out: &mut Vec<PieceType>, types: &[PieceType], count: f64) {
    if types.is_empty() || count <= 0.0 {
        return;
    }
    let share = count / types.len() as f64;
    for &kind in types {
        let mut emitted = 0.0;
        while emitted < share {
            out.extend([kind, kind, kind]);
            emitted += 3.0;
        }
    }
}
