//! Rendering layer — all terminal I/O lives here.
//!
//! Implements the core's `Renderer` over crossterm.  Canvas coordinates are
//! scaled onto the terminal grid; the last row is reserved for the controls
//! hint.  No game logic is performed here.

use std::io::{self, Write};

use arcade_shooter::config::CanvasConfig;
use arcade_shooter::entities::{ColorTag, Rect};
use arcade_shooter::ports::Renderer;
use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SHIP: Color = Color::Blue;
const C_ENEMY: Color = Color::Red;
const C_BULLET: Color = Color::Green;
// Canvas text is black-on-white; terminals are usually the other way round.
const C_TEXT: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;
const C_PAUSED: Color = Color::Yellow;

fn terminal_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Blue => C_SHIP,
        ColorTag::Red => C_ENEMY,
        ColorTag::Green => C_BULLET,
        ColorTag::Black => C_TEXT,
    }
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    canvas_width: f64,
    canvas_height: f64,
    // Renderer calls cannot fail; the first error is held until `flush`.
    error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, cols: u16, rows: u16, canvas: &CanvasConfig) -> Self {
        Self {
            out,
            cols,
            rows,
            canvas_width: canvas.width,
            canvas_height: canvas.height,
            error: None,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    /// Rows available to the canvas (everything but the hint line).
    fn play_rows(&self) -> u16 {
        self.rows.saturating_sub(1)
    }

    fn col_of(&self, x: f64) -> f64 {
        x / self.canvas_width * self.cols as f64
    }

    fn row_of(&self, y: f64) -> f64 {
        y / self.canvas_height * self.play_rows() as f64
    }

    fn queue_result(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            self.error.get_or_insert(e);
        }
    }

    fn try_print_at(&mut self, col: u16, row: u16, color: Color, text: &str) -> io::Result<()> {
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn print_at(&mut self, col: u16, row: u16, color: Color, text: &str) {
        let result = self.try_print_at(col, row, color, text);
        self.queue_result(result);
    }

    /// Overlay shown while the game is paused (no ticks run, so nothing
    /// else redraws the screen).
    pub fn draw_pause_banner(&mut self) {
        let msg = "PAUSED  -  P to resume";
        let col = (self.cols / 2).saturating_sub(msg.chars().count() as u16 / 2);
        let row = self.play_rows() / 2;
        self.print_at(col, row, C_PAUSED, msg);
    }

    fn draw_controls_hint(&mut self) {
        let row = self.rows.saturating_sub(1);
        self.print_at(1, row, C_HINT, "← → ↑ ↓ : Move   SPACE : Shoot   P : Pause   Q : Quit");
    }

    /// Push everything queued this frame to the terminal.
    pub fn flush(&mut self) -> io::Result<()> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.queue(style::ResetColor)?;
        // Park cursor in a harmless spot
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self) {
        let result = self
            .out
            .queue(terminal::Clear(terminal::ClearType::All))
            .map(|_| ());
        self.queue_result(result);
        self.draw_controls_hint();
    }

    /// Cells partially covered by the rectangle are filled; anything off the
    /// canvas (enemies spawn above it) is clipped.
    fn fill_rect(&mut self, rect: Rect, color: ColorTag) {
        let left = self.col_of(rect.x).floor().max(0.0);
        let right = self.col_of(rect.right()).ceil().min(self.cols as f64);
        let top = self.row_of(rect.y).floor().max(0.0);
        let bottom = self.row_of(rect.bottom()).ceil().min(self.play_rows() as f64);
        if left >= right || top >= bottom {
            return;
        }

        let span = "█".repeat((right - left) as usize);
        let color = terminal_color(color);
        for row in top as u16..bottom as u16 {
            self.print_at(left as u16, row, color, &span);
        }
    }

    /// `y` is the text baseline, as on a canvas; the font is ignored.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, _font: &str, color: ColorTag) {
        let col = self.col_of(x).floor().max(0.0) as u16;
        let row = (self.row_of(y).ceil() - 1.0).max(0.0) as u16;
        if row >= self.play_rows() {
            return;
        }
        self.print_at(col, row, terminal_color(color), text);
    }
}
