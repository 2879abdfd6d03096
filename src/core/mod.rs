//! Core game logic, free of any I/O or terminal concerns
//!
//! Everything here is pure state manipulation: deck generation, board
//! layout, selection rules, the matching bar and the session that ties them
//! together. The `term` and `input` modules consume this through
//! [`GameSession`] and its snapshots.

pub mod bar;
pub mod board;
pub mod deck;
pub mod game;
pub mod rng;
pub mod snapshot;

pub use bar::{Bar, BarOutcome};
pub use board::{Board, LayoutError, Stack};
pub use deck::{generate_deck, Piece};
pub use game::{GameSession, SessionError, SessionEvent};
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::{GameSnapshot, PieceView, StackSnapshot};
