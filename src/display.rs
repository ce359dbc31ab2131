//! Rendering layer: all terminal I/O lives here.
//!
//! The playfield is drawn in pixel space and squeezed onto the terminal grid:
//! the left part of the terminal shows the playfield, the right part the
//! scoreboard, split in the same proportion as the configured screen.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use bullet_dodge::config::GameConfig;
use bullet_dodge::entities::EntityKind;
use bullet_dodge::render::Surface;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_BULLET: Color = Color::Magenta;
const C_SCORE: Color = Color::Yellow;
const C_TIME: Color = Color::Grey;
const C_HINT: Color = Color::DarkGrey;
const C_PAUSED: Color = Color::Red;

/// Enemy glyphs, one per quarter turn.
const ENEMY_GLYPHS: [&str; 4] = ["◓", "◑", "◒", "◐"];

/// Smallest terminal the game can be played in.
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 12;

// ── Pixel ↔ cell mapping ──────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub cols: u16,
    pub rows: u16,
    /// Terminal columns given to the playfield; the rest is scoreboard.
    pub playfield_cols: u16,
    playfield_width: f64,
    screen_height: f64,
}

impl Layout {
    pub fn new(cols: u16, rows: u16, config: &GameConfig) -> Self {
        let share = f64::from(config.playfield_width()) / f64::from(config.screen_width);
        let playfield_cols =
            ((f64::from(cols) * share) as u16).clamp(1, cols.saturating_sub(1).max(1));
        Layout {
            cols,
            rows,
            playfield_cols,
            playfield_width: f64::from(config.playfield_width()),
            screen_height: f64::from(config.screen_height),
        }
    }

    /// Cell showing the playfield pixel, or `None` if it falls off the grid.
    pub fn to_cell(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        let col = (x * f64::from(self.playfield_cols) / self.playfield_width).floor();
        let row = (y * f64::from(self.rows) / self.screen_height).floor();
        if col < 0.0
            || row < 0.0
            || col >= f64::from(self.playfield_cols)
            || row >= f64::from(self.rows)
        {
            return None;
        }
        Some((col as u16, row as u16))
    }

    /// Playfield pixel at the top-left of a cell. Cells right of the
    /// playfield map past its edge; the simulation clamps them.
    pub fn to_playfield(&self, col: u16, row: u16) -> (f64, f64) {
        (
            f64::from(col) * self.playfield_width / f64::from(self.playfield_cols),
            f64::from(row) * self.screen_height / f64::from(self.rows),
        )
    }
}

// ── Surface ───────────────────────────────────────────────────────────────────

pub struct TerminalSurface<'a, W: Write> {
    out: &'a mut W,
    layout: Layout,
    /// Cell the player was drawn in; the terminal cursor stands in for the
    /// host pointer and is parked there.
    player_cell: Option<(u16, u16)>,
}

impl<'a, W: Write> TerminalSurface<'a, W> {
    pub fn new(out: &'a mut W, layout: Layout) -> Self {
        TerminalSurface {
            out,
            layout,
            player_cell: None,
        }
    }

    /// Clear the screen and draw the static frame around the scoreboard.
    pub fn begin_frame(&mut self) -> std::io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        draw_divider(&mut *self.out, &self.layout)?;
        draw_controls_hint(&mut *self.out, &self.layout)
    }

    pub fn draw_paused(&mut self) -> std::io::Result<()> {
        let msg = "PAUSED";
        let col = (self.layout.playfield_cols / 2).saturating_sub(msg.len() as u16 / 2);
        self.out.queue(cursor::MoveTo(col, self.layout.rows / 2))?;
        self.out.queue(style::SetForegroundColor(C_PAUSED))?;
        self.out.queue(Print(msg))?;
        Ok(())
    }

    /// Park the cursor on the player (or the bottom-left corner when the
    /// player is off the grid) and flush.
    pub fn present(&mut self) -> std::io::Result<()> {
        let (col, row) = self
            .player_cell
            .unwrap_or((0, self.layout.rows.saturating_sub(1)));
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.flush()
    }
}

impl<W: Write> Surface for TerminalSurface<'_, W> {
    type Error = std::io::Error;

    fn set_pointer_visible(&mut self, visible: bool) -> std::io::Result<()> {
        if visible {
            self.out.queue(cursor::Show)?;
        } else {
            self.out.queue(cursor::Hide)?;
        }
        Ok(())
    }

    fn draw_entity(&mut self, kind: EntityKind, x: f64, y: f64, angle: f64) -> std::io::Result<()> {
        let Some((col, row)) = self.layout.to_cell(x, y) else {
            return Ok(());
        };
        let (color, glyph) = match kind {
            EntityKind::Player => {
                self.player_cell = Some((col, row));
                (C_PLAYER, "@")
            }
            EntityKind::Bullet => (C_BULLET, "•"),
            EntityKind::Enemy => {
                let quarter = (angle.rem_euclid(360.0) / 90.0) as usize % ENEMY_GLYPHS.len();
                (C_ENEMY, ENEMY_GLYPHS[quarter])
            }
        };
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(glyph))?;
        Ok(())
    }

    /// Elapsed seconds at the top of the scoreboard, score in the middle.
    fn draw_scoreboard(&mut self, score: u64, elapsed_secs: u64) -> std::io::Result<()> {
        let left = self.layout.playfield_cols + 1;
        let width = self.layout.cols.saturating_sub(left);

        let time = elapsed_secs.to_string();
        self.out.queue(cursor::MoveTo(centered(left, width, &time), 0))?;
        self.out.queue(style::SetForegroundColor(C_TIME))?;
        self.out.queue(Print(&time))?;

        let score = score.to_string();
        self.out.queue(cursor::MoveTo(centered(left, width, &score), self.layout.rows / 2))?;
        self.out.queue(style::SetForegroundColor(C_SCORE))?;
        self.out.queue(Print(&score))?;
        Ok(())
    }
}

fn centered(left: u16, width: u16, text: &str) -> u16 {
    left + width.saturating_sub(text.chars().count() as u16) / 2
}

// ── Static chrome ─────────────────────────────────────────────────────────────

fn draw_divider<W: Write>(out: &mut W, layout: &Layout) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_BORDER))?;
    for row in 0..layout.rows {
        out.queue(cursor::MoveTo(layout.playfield_cols, row))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, layout: &Layout) -> std::io::Result<()> {
    let hint = "P : Pause   Q : Quit";
    out.queue(cursor::MoveTo(0, layout.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}
