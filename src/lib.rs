//! Terminal tile-matching solitaire.
//!
//! `core` holds the pure game logic: weighted deck generation, scattered
//! stack layout, top-only selection and the capacity-limited matching bar.
//! `term` renders snapshots to the terminal and `input` maps key events to
//! game actions.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
