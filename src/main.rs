//! Terminal solitaire runner (default binary).
//!
//! Uses crossterm for input and a custom framebuffer-based renderer.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_triples::core::GameSession;
use tui_triples::input::{handle_key_event, should_quit};
use tui_triples::term::{GameView, TerminalRenderer, Viewport};
use tui_triples::types::{GameAction, GameConfig};

const POLL_MS: u64 = 250;

fn main() -> Result<()> {
    let mut session = GameSession::new(GameConfig::default(), entropy_seed())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession) -> Result<()> {
    let view = GameView::new();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&session.snapshot(), Viewport::new(w, h));
        term.draw(&fb)?;

        if !event::poll(Duration::from_millis(POLL_MS))? {
            continue;
        }
        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };

        if should_quit(key) {
            return Ok(());
        }
        match handle_key_event(key) {
            Some(GameAction::Quit) => return Ok(()),
            Some(GameAction::Reset) => session.reset()?,
            Some(GameAction::SelectStack(i)) => {
                session.select(i);
            }
            None => {}
        }
    }
}

fn entropy_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}
