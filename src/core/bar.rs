//! Bar module - the capacity-limited holding area
//!
//! Selected pieces land here and are kept grouped by type. Once any type
//! reaches three pieces, every piece of that type is removed. Exceeding
//! capacity is a terminal loss signal, never a silent truncation.

use arrayvec::ArrayVec;

use crate::core::deck::Piece;
use crate::types::{PieceType, BAR_CAPACITY_LIMIT};

/// Pieces of one type required to trigger a match
const MATCH_THRESHOLD: usize = 3;

/// Result of offering a piece to the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarOutcome {
    Accepted,
    /// The bar was already at capacity; the caller must end the session
    Overflow,
}

/// The holding area collecting selected pieces awaiting a match.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pieces: ArrayVec<Piece, BAR_CAPACITY_LIMIT>,
    capacity: usize,
}

impl Bar {
    pub fn new(capacity: usize) -> Self {
        Self {
            pieces: ArrayVec::new(),
            capacity: capacity.min(BAR_CAPACITY_LIMIT),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.pieces.len() >= self.capacity
    }

    /// Pieces in grouped order (sorted by type, arrival order within a type)
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn count_of(&self, kind: PieceType) -> usize {
        self.pieces.iter().filter(|p| p.kind == kind).count()
    }

    /// Append a piece and regroup by type, or report overflow.
    ///
    /// On overflow the piece is dropped without being appended; the caller
    /// treats this as the end of the session, so the bar never holds more
    /// than `capacity` pieces.
    pub fn receive(&mut self, piece: Piece) -> BarOutcome {
        if self.is_full() {
            return BarOutcome::Overflow;
        }
        self.pieces.push(piece);
        // Stable sort keeps same-type pieces grouped in arrival order.
        self.pieces.sort_by_key(|p| p.kind.index());
        BarOutcome::Accepted
    }

    /// Clear the first type holding three or more pieces.
    ///
    /// Types are scanned in ascending type order and every piece of the
    /// matched type is removed, not just three. At most one type is matched
    /// per call even when several qualify; this single-match-per-insertion
    /// behavior is intentional.
    pub fn auto_match(&mut self) -> Option<PieceType> {
        let mut counts = [0usize; PieceType::COUNT];
        for piece in &self.pieces {
            counts[piece.kind.index()] += 1;
        }

        let kind = PieceType::ALL
            .into_iter()
            .find(|k| counts[k.index()] >= MATCH_THRESHOLD)?;
        self.pieces.retain(|p| p.kind != kind);
        Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(id: u32, kind: PieceType) -> Piece {
        Piece::new(id, kind)
    }

    #[test]
    fn test_new_bar_is_empty() {
        let bar = Bar::new(7);
        assert!(bar.is_empty());
        assert!(!bar.is_full());
        assert_eq!(bar.capacity(), 7);
    }

    #[test]
    fn test_capacity_clamped_to_storage_limit() {
        let bar = Bar::new(999);
        assert_eq!(bar.capacity(), BAR_CAPACITY_LIMIT);
    }

    #[test]
    fn test_receive_groups_by_type() {
        let mut bar = Bar::new(7);
        bar.receive(piece(0, PieceType::C));
        bar.receive(piece(1, PieceType::A));
        bar.receive(piece(2, PieceType::B));
        bar.receive(piece(3, PieceType::A));

        let kinds: Vec<PieceType> = bar.pieces().iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![PieceType::A, PieceType::A, PieceType::B, PieceType::C]
        );
    }

    #[test]
    fn test_grouping_is_stable_within_a_type() {
        let mut bar = Bar::new(7);
        bar.receive(piece(10, PieceType::A));
        bar.receive(piece(20, PieceType::B));
        bar.receive(piece(11, PieceType::A));

        let a_ids: Vec<u32> = bar
            .pieces()
            .iter()
            .filter(|p| p.kind == PieceType::A)
            .map(|p| p.id)
            .collect();
        assert_eq!(a_ids, vec![10, 11]);
    }

    #[test]
    fn test_receive_beyond_capacity_overflows_without_appending() {
        let mut bar = Bar::new(2);
        assert_eq!(bar.receive(piece(0, PieceType::A)), BarOutcome::Accepted);
        assert_eq!(bar.receive(piece(1, PieceType::B)), BarOutcome::Accepted);

        assert_eq!(bar.receive(piece(2, PieceType::C)), BarOutcome::Overflow);
        assert_eq!(bar.len(), 2);
    }

    #[test]
    fn test_auto_match_clears_every_piece_of_the_type() {
        let mut bar = Bar::new(7);
        for (id, kind) in [
            (0, PieceType::A),
            (1, PieceType::B),
            (2, PieceType::A),
            (3, PieceType::C),
            (4, PieceType::A),
        ] {
            assert_eq!(bar.receive(piece(id, kind)), BarOutcome::Accepted);
        }

        assert_eq!(bar.auto_match(), Some(PieceType::A));
        let kinds: Vec<PieceType> = bar.pieces().iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![PieceType::B, PieceType::C]);
    }

    #[test]
    fn test_auto_match_below_threshold_is_none() {
        let mut bar = Bar::new(7);
        bar.receive(piece(0, PieceType::A));
        bar.receive(piece(1, PieceType::A));
        bar.receive(piece(2, PieceType::B));

        assert_eq!(bar.auto_match(), None);
        assert_eq!(bar.len(), 3);
    }

    #[test]
    fn test_auto_match_takes_one_type_per_call_in_ascending_order() {
        let mut bar = Bar::new(8);
        for (id, kind) in [
            (0, PieceType::D),
            (1, PieceType::D),
            (2, PieceType::D),
            (3, PieceType::B),
            (4, PieceType::B),
            (5, PieceType::B),
        ] {
            bar.receive(piece(id, kind));
        }

        // Both B and D qualify; the ascending scan clears B first.
        assert_eq!(bar.auto_match(), Some(PieceType::B));
        assert_eq!(bar.count_of(PieceType::D), 3);

        assert_eq!(bar.auto_match(), Some(PieceType::D));
        assert!(bar.is_empty());
    }

    #[test]
    fn test_auto_match_clears_more_than_three_if_accumulated() {
        // A fourth piece of a type can accumulate when a different type's
        // insertion triggered the earlier scans.
        let mut bar = Bar::new(8);
        for id in 0..4 {
            bar.receive(piece(id, PieceType::E));
        }

        assert_eq!(bar.auto_match(), Some(PieceType::E));
        assert_eq!(bar.count_of(PieceType::E), 0);
        assert!(bar.is_empty());
    }
}
