//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Stack positions come out of the snapshot in layout pixels and are scaled
//! into the terminal grid, so the scattered board geometry survives the
//! translation to character cells.

use crate::core::{GameSnapshot, StackSnapshot};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceType, SelectOutcome, BOARD_SIZE_PX, PIECE_SIZE_PX};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Character footprint of one stack card.
const CARD_W: u16 = 7;
const CARD_H: u16 = 3;

/// Rows reserved below the board for the bar, status and help lines.
const FOOTER_H: u16 = 4;

/// A lightweight terminal renderer for the matching game.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render a snapshot into a framebuffer.
    pub fn render(&self, snapshot: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_h = viewport.height.saturating_sub(FOOTER_H);
        if viewport.width < CARD_W + 2 || board_h < CARD_H + 2 {
            fb.put_str(0, 0, "terminal too small", CellStyle::default());
            return fb;
        }

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
        self.draw_border(&mut fb, 0, 0, viewport.width, board_h, border);

        for (i, stack) in snapshot.stacks.iter().enumerate() {
            self.draw_stack(&mut fb, stack, i, viewport.width, board_h);
        }

        self.draw_bar(&mut fb, snapshot, board_h);
        self.draw_status(&mut fb, snapshot, board_h);

        match snapshot.outcome {
            SelectOutcome::Won => {
                self.draw_overlay_text(&mut fb, viewport.width, board_h, "YOU WIN")
            }
            SelectOutcome::Lost => {
                self.draw_overlay_text(&mut fb, viewport.width, board_h, "BAR FULL - YOU LOSE")
            }
            SelectOutcome::Continue => {}
        }

        fb
    }

    /// Scale a layout-pixel anchor into the bordered board area.
    fn scale(&self, px: i32, py: i32, width: u16, board_h: u16) -> (u16, u16) {
        let span = (BOARD_SIZE_PX - PIECE_SIZE_PX).max(1);
        let inner_w = width.saturating_sub(2 + CARD_W) as i64;
        let inner_h = board_h.saturating_sub(2 + CARD_H) as i64;
        let x = 1 + (px.clamp(0, span) as i64 * inner_w / span as i64) as u16;
        let y = 1 + (py.clamp(0, span) as i64 * inner_h / span as i64) as u16;
        (x, y)
    }

    fn draw_stack(
        &self,
        fb: &mut FrameBuffer,
        stack: &StackSnapshot,
        index: usize,
        width: u16,
        board_h: u16,
    ) {
        let top = match stack.top() {
            Some(top) => top,
            None => return,
        };
        let (x, y) = self.scale(stack.x, stack.y, width, board_h);

        let card = CellStyle {
            fg: Rgb::new(230, 230, 230),
            bg: Rgb::new(40, 40, 52),
            bold: false,
            dim: false,
        };
        fb.fill_rect(x, y, CARD_W, CARD_H, ' ', card);

        // Key hint (stacks beyond the digit row get no hint).
        if index < 9 {
            let hint = CellStyle {
                fg: Rgb::new(140, 140, 150),
                ..card
            };
            fb.put_char(x, y, char::from(b'1' + index as u8), hint);
        }

        let kind_style = CellStyle {
            fg: piece_color(top.kind),
            bold: true,
            ..card
        };
        fb.put_str(x + CARD_W / 2, y + 1, top.kind.as_str(), kind_style);

        // Peek at the second exposed piece, if revealed.
        if let Some(under) = stack.pieces.get(1) {
            if under.visible {
                let peek = CellStyle {
                    fg: piece_color(under.kind),
                    dim: true,
                    ..card
                };
                fb.put_str(x + CARD_W - 1, y, under.kind.as_str(), peek);
            }
        }

        let count = CellStyle {
            fg: Rgb::new(170, 170, 180),
            ..card
        };
        fb.put_str(x + CARD_W - 2, y + CARD_H - 1, &format!("{}", stack.pieces.len()), count);
    }

    fn draw_bar(&self, fb: &mut FrameBuffer, snapshot: &GameSnapshot, board_h: u16) {
        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        fb.put_str(1, board_h, "BAR", label);

        let mut x = 5;
        for slot in 0..snapshot.bar_capacity {
            let (glyph, style) = match snapshot.bar.get(slot) {
                Some(&kind) => (
                    kind.as_str(),
                    CellStyle {
                        fg: piece_color(kind),
                        bg: Rgb::new(40, 40, 52),
                        bold: true,
                        dim: false,
                    },
                ),
                None => (
                    ".",
                    CellStyle {
                        fg: Rgb::new(110, 110, 120),
                        dim: true,
                        ..CellStyle::default()
                    },
                ),
            };
            fb.put_char(x, board_h, '[', CellStyle::default());
            fb.put_str(x + 1, board_h, glyph, style);
            fb.put_char(x + 2, board_h, ']', CellStyle::default());
            x += 3;
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snapshot: &GameSnapshot, board_h: u16) {
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
        fb.put_str(
            1,
            board_h + 1,
            &format!(
                "LEFT {}  GAME {}",
                snapshot.remaining,
                snapshot.episode_id + 1
            ),
            value,
        );

        let help = CellStyle {
            fg: Rgb::new(140, 140, 150),
            dim: true,
            ..CellStyle::default()
        };
        fb.put_str(1, board_h + 2, "1-9 select   r restart   q quit", help);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, width: u16, board_h: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = width.saturating_sub(text_w) / 2;
        let y = board_h / 2;
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bold: true,
            ..CellStyle::default()
        };
        fb.put_str(x, y, text, style);
    }
}

fn piece_color(kind: PieceType) -> Rgb {
    match kind {
        PieceType::A => Rgb::new(80, 220, 220),
        PieceType::B => Rgb::new(240, 220, 80),
        PieceType::C => Rgb::new(200, 120, 220),
        PieceType::D => Rgb::new(100, 220, 120),
        PieceType::E => Rgb::new(220, 80, 80),
        PieceType::F => Rgb::new(80, 120, 220),
        PieceType::G => Rgb::new(255, 165, 0),
        PieceType::H => Rgb::new(160, 160, 170),
    }
}
