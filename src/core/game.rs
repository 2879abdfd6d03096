//! Game session - orchestrates deck, board and bar into one game
//!
//! A session owns its board and bar outright; there is no ambient global
//! state. Each `select` is processed to completion before the next, and a
//! terminal outcome freezes the session until `reset`.

use std::fmt;

use crate::core::bar::{Bar, BarOutcome};
use crate::core::board::{Board, LayoutError};
use crate::core::deck::generate_deck;
use crate::core::rng::{RandomSource, SimpleRng};
use crate::core::snapshot::{GameSnapshot, PieceView, StackSnapshot};
use crate::types::{GameConfig, PieceType, SelectOutcome, REVEAL_OFFSET_PX, Z_ORDER_BASE};

/// Session construction or reset failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The configuration cannot describe a playable game
    Config(&'static str),
    /// Stack placement exhausted its attempt ceiling
    Layout(LayoutError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Config(reason) => write!(f, "invalid config: {}", reason),
            SessionError::Layout(err) => write!(f, "layout unsatisfiable: {}", err),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<LayoutError> for SessionError {
    fn from(err: LayoutError) -> Self {
        SessionError::Layout(err)
    }
}

/// Consumable record of the last processed selection (for observers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionEvent {
    /// Stack the selection targeted
    pub stack: usize,
    /// Type of the selected piece
    pub kind: PieceType,
    /// Type cleared by the automatic match, if any
    pub matched: Option<PieceType>,
    pub outcome: SelectOutcome,
}

/// One game of solitaire: board, bar and outcome state.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    rng: SimpleRng,
    board: Board,
    bar: Bar,
    outcome: SelectOutcome,
    /// Monotonic episode id (increments on reset)
    episode_id: u32,
    /// Last selection result (consumed by observers)
    last_event: Option<SessionEvent>,
}

impl GameSession {
    /// Deal a new session from the given seed.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, SessionError> {
        config.validate().map_err(SessionError::Config)?;

        let mut rng = SimpleRng::new(seed);
        let (board, bar) = deal(&config, &mut rng)?;

        Ok(Self {
            config,
            rng,
            board,
            bar,
            outcome: SelectOutcome::Continue,
            episode_id: 0,
            last_event: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn bar(&self) -> &Bar {
        &self.bar
    }

    pub fn outcome(&self) -> SelectOutcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Current RNG stream position
    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// Pieces remaining on the board
    pub fn remaining(&self) -> usize {
        self.board.piece_count()
    }

    /// Take and clear the last selection event.
    pub fn take_last_event(&mut self) -> Option<SessionEvent> {
        self.last_event.take()
    }

    /// Select the top piece of a stack.
    ///
    /// Empty or out-of-range stacks are a no-op. Terminal sessions stay
    /// frozen and report their outcome unchanged.
    pub fn select(&mut self, stack_index: usize) -> SelectOutcome {
        if self.outcome.is_terminal() {
            return self.outcome;
        }

        let top_id = match self.board.stack(stack_index).and_then(|s| s.top()) {
            Some(top) => top.id,
            None => return SelectOutcome::Continue,
        };
        self.select_piece(stack_index, top_id)
    }

    /// Piece-targeted selection for presenters with per-piece hit testing.
    ///
    /// Selecting a buried piece is rejected as a silent no-op, not an error.
    pub fn select_piece(&mut self, stack_index: usize, piece_id: u32) -> SelectOutcome {
        if self.outcome.is_terminal() {
            return self.outcome;
        }

        let stack = match self.board.stack_mut(stack_index) {
            Some(stack) => stack,
            None => return SelectOutcome::Continue,
        };
        if !stack.is_selectable(piece_id) {
            return SelectOutcome::Continue;
        }

        // The id is known to be in the stack at this point.
        let kind = match stack.pieces().iter().find(|p| p.id == piece_id) {
            Some(piece) => piece.kind,
            None => return SelectOutcome::Continue,
        };

        // Capacity is checked before the piece leaves its stack, so a losing
        // selection mutates nothing: the transfer is atomic.
        if self.bar.is_full() {
            self.outcome = SelectOutcome::Lost;
            self.last_event = Some(SessionEvent {
                stack: stack_index,
                kind,
                matched: None,
                outcome: SelectOutcome::Lost,
            });
            return SelectOutcome::Lost;
        }

        let piece = match stack.try_select(piece_id) {
            Some(piece) => piece,
            None => return SelectOutcome::Continue,
        };

        let accepted = self.bar.receive(piece);
        debug_assert_eq!(accepted, BarOutcome::Accepted);

        let matched = self.bar.auto_match();
        let outcome = if self.board.is_empty() && self.bar.is_empty() {
            SelectOutcome::Won
        } else {
            SelectOutcome::Continue
        };

        self.outcome = outcome;
        self.last_event = Some(SessionEvent {
            stack: stack_index,
            kind,
            matched,
            outcome,
        });
        outcome
    }

    /// Discard board and bar and deal a fresh game.
    ///
    /// The RNG stream continues from where the previous deal left off, so
    /// consecutive resets produce independently randomized sessions.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        let (board, bar) = deal(&self.config, &mut self.rng)?;
        self.board = board;
        self.bar = bar;
        self.outcome = SelectOutcome::Continue;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.last_event = None;
        Ok(())
    }

    /// Build the read-model the presentation layer consumes.
    pub fn snapshot(&self) -> GameSnapshot {
        let max_height = self.config.max_stack_height;
        let stacks = self
            .board
            .stacks()
            .iter()
            .map(|stack| StackSnapshot {
                x: stack.x(),
                y: stack.y(),
                pieces: stack
                    .pieces()
                    .iter()
                    .enumerate()
                    .map(|(i, piece)| PieceView {
                        id: piece.id,
                        kind: piece.kind,
                        visible: piece.visible,
                        offset_px: cascade_offset(i),
                        z_order: (max_height as i32) * Z_ORDER_BASE - i as i32,
                    })
                    .collect(),
            })
            .collect();

        GameSnapshot {
            stacks,
            bar: self.bar.pieces().iter().map(|p| p.kind).collect(),
            bar_capacity: self.bar.capacity(),
            outcome: self.outcome,
            episode_id: self.episode_id,
            seed: self.rng.seed(),
            remaining: self.board.piece_count(),
        }
    }
}

/// Deck first, then placement: the fixed invocation order keeps a seeded
/// stream reproducible.
fn deal(config: &GameConfig, rng: &mut SimpleRng) -> Result<(Board, Bar), LayoutError> {
    let deck = generate_deck(config, rng as &mut dyn RandomSource);
    let mut board = Board::place(config, rng)?;
    board.distribute(deck, config);
    Ok((board, Bar::new(config.bar_capacity)))
}

fn cascade_offset(index: usize) -> (i32, i32) {
    if index < 2 {
        let step = REVEAL_OFFSET_PX * index as i32;
        (step, step)
    } else {
        (0, 0)
    }
}
