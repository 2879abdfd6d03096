//! Board module - stack placement and piece distribution
//!
//! Stacks are placed at random non-colliding pixel coordinates within the
//! board bounds, then the shuffled deck is dealt round-robin, one piece per
//! stack per pass. Each stack stores its pieces top-first: index 0 is the
//! piece the player can take next.

use std::fmt;

use crate::core::deck::Piece;
use crate::core::rng::RandomSource;
use crate::types::GameConfig;

/// Number of top-of-stack pieces exposed to the player
const EXPOSED_PIECES: usize = 2;

/// Placement could not find a non-colliding coordinate within the configured
/// attempt ceiling.
///
/// This replaces an unbounded retry loop: a board too crowded for its pixel
/// bounds fails fast at session start instead of hanging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutError {
    /// Index of the stack that could not be placed
    pub stack: usize,
    /// Attempts consumed before giving up
    pub attempts: u32,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no non-colliding placement for stack {} after {} attempts",
            self.stack, self.attempts
        )
    }
}

impl std::error::Error for LayoutError {}

/// An ordered pile of pieces at a fixed board position.
///
/// Pieces are stored top-first; only index 0 is selectable. `x`/`y` are
/// layout pixels within the board bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack {
    pieces: Vec<Piece>,
    x: i32,
    y: i32,
}

impl Stack {
    fn new(x: i32, y: i32) -> Self {
        Self {
            pieces: Vec::new(),
            x,
            y,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Pieces top-first
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The piece the player can take next
    pub fn top(&self) -> Option<&Piece> {
        self.pieces.first()
    }

    /// Whether the identified piece may be taken.
    ///
    /// A piece is selectable only when it is the topmost piece, or when it is
    /// the sole piece of the stack. Pure function of stack state; the
    /// `visible` presentation hint plays no part.
    pub fn is_selectable(&self, piece_id: u32) -> bool {
        if self.pieces.len() == 1 {
            return self.pieces[0].id == piece_id;
        }
        self.pieces.first().map_or(false, |top| top.id == piece_id)
    }

    /// Remove the identified piece, transferring ownership to the caller.
    ///
    /// Non-selectable pieces are rejected with no state change. On success
    /// the next two remaining pieces become visible.
    pub fn try_select(&mut self, piece_id: u32) -> Option<Piece> {
        if !self.is_selectable(piece_id) {
            return None;
        }
        let index = self.pieces.iter().position(|p| p.id == piece_id)?;
        let piece = self.pieces.remove(index);
        self.reveal_exposed();
        Some(piece)
    }

    fn reveal_exposed(&mut self) {
        for piece in self.pieces.iter_mut().take(EXPOSED_PIECES) {
            piece.visible = true;
        }
    }

    /// Whether the piece at `index` counts as exposed (cascade-offset,
    /// drawn face up)
    pub fn is_exposed(index: usize) -> bool {
        index < EXPOSED_PIECES
    }
}

/// The full playing field: `stack_count` stacks and their pieces.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    stacks: Vec<Stack>,
}

impl Board {
    /// Place `stack_count` stacks at random non-colliding coordinates.
    ///
    /// Each candidate is sampled uniformly inside the margin-inset bounds and
    /// rejected while it collides with an already placed stack. Collision
    /// means both per-axis deltas are below `1.5 x piece_size`.
    pub fn place(config: &GameConfig, rng: &mut dyn RandomSource) -> Result<Self, LayoutError> {
        let min = config.margin_px;
        let max = config.board_size_px - config.piece_size_px - config.margin_px;

        let mut stacks: Vec<Stack> = Vec::with_capacity(config.stack_count);
        for i in 0..config.stack_count {
            let mut attempts = 0u32;
            let (x, y) = loop {
                if attempts >= config.placement_attempt_limit {
                    return Err(LayoutError { stack: i, attempts });
                }
                attempts += 1;

                let x = rng.int_in_range(min, max);
                let y = rng.int_in_range(min, max);
                if !collides(&stacks, x, y, config.piece_size_px) {
                    break (x, y);
                }
            };
            stacks.push(Stack::new(x, y));
        }

        Ok(Self { stacks })
    }

    /// Deal the deck round-robin across the stacks.
    ///
    /// Exactly `total_count` pieces are placed. A longer deck is truncated; a
    /// shorter deck recycles kinds via modulo while minting fresh identities,
    /// so no two pieces on the board ever share an id. The top two pieces of
    /// every stack start visible.
    pub fn distribute(&mut self, deck: Vec<Piece>, config: &GameConfig) {
        if deck.is_empty() || self.stacks.is_empty() {
            return;
        }

        let total = config.total_count();
        let stack_count = self.stacks.len();
        let mut next_id = deck.len() as u32;
        for i in 0..total {
            let mut piece = if i < deck.len() {
                deck[i]
            } else {
                let recycled = Piece::new(next_id, deck[i % deck.len()].kind);
                next_id += 1;
                recycled
            };

            let stack = &mut self.stacks[i % stack_count];
            piece.visible = Stack::is_exposed(stack.pieces.len());
            stack.pieces.push(piece);
        }
    }

    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    pub fn stack(&self, index: usize) -> Option<&Stack> {
        self.stacks.get(index)
    }

    pub fn stack_mut(&mut self, index: usize) -> Option<&mut Stack> {
        self.stacks.get_mut(index)
    }

    /// Total pieces remaining on the board
    pub fn piece_count(&self) -> usize {
        self.stacks.iter().map(|s| s.pieces.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.iter().all(|s| s.pieces.is_empty())
    }

    #[cfg(test)]
    pub(crate) fn from_stacks(placements: &[(i32, i32)], pieces: Vec<Vec<Piece>>) -> Self {
        let stacks = placements
            .iter()
            .zip(pieces)
            .map(|(&(x, y), pieces)| Stack { pieces, x, y })
            .collect();
        Self { stacks }
    }
}

fn collides(placed: &[Stack], x: i32, y: i32, piece_size: i32) -> bool {
    // Minimum separation is 1.5 x piece size on both axes.
    let min_sep = piece_size * 3 / 2;
    placed
        .iter()
        .any(|s| (s.x - x).abs() < min_sep && (s.y - y).abs() < min_sep)
}
