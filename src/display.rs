/// Rendering layer — all terminal I/O lives here.
///
/// `TerminalSurface` maps the fixed playfield onto whatever terminal grid is
/// available, keeping the playfield's proportions (a cell is roughly twice as
/// tall as it is wide) and boxing it in a border. Sprites are small pieces of
/// glyph art stretched to the sprite's footprint; spaces are transparent.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::assets::SpriteId;
use crate::config::GameConfig;
use crate::surface::{Surface, TextStyle};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_PLAYER: Color = Color::White;
const C_PLAYER_ALT: Color = Color::Grey;
const C_ENEMY: Color = Color::Yellow;
const C_EXPLOSION: Color = Color::Red;
const C_STARS: Color = Color::DarkGrey;
const C_SHIMMER: Color = Color::Cyan;
const C_SKY: Color = Color::Blue;
const C_BACKDROP: Color = Color::DarkRed;
const C_HINT: Color = Color::DarkGrey;

// ── Glyph art ─────────────────────────────────────────────────────────────────

const ENEMY_ART: &[&str] = &[
    " /\\_/\\ ",
    "( o.o )",
    " > ^ < ",
    " |   | ",
    " |___| ",
    "  U U  ",
];

const PLAYER_ART: [&[&str]; 2] = [
    &[" (o o) ", "<( | )>", "  / \\  "],
    &[" [o o] ", " ( | ) ", " _/ \\_ "],
];

const EXPLOSION_ART: &[&str] = &["\\ * | * /", "-- BOOM --", "/ * | * \\"];

const HINT: &str = "← → : Move   Q : Quit";

/// Where the playfield sits on the terminal, in cells (border excluded).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub col: u16,
    pub row: u16,
    pub cols: u16,
    pub rows: u16,
    scale_x: f64,
    scale_y: f64,
}

impl Viewport {
    /// Fit a `field_w` x `field_h` playfield into a terminal of
    /// `term_cols` x `term_rows`, leaving room for the border and hint row.
    pub fn fit(field_w: u32, field_h: u32, term_cols: u16, term_rows: u16) -> Self {
        let avail_cols = term_cols.saturating_sub(2).max(1) as f64;
        let avail_rows = term_rows.saturating_sub(3).max(1) as f64;
        let aspect = field_w.max(1) as f64 / field_h.max(1) as f64;

        // Terminal cells are about 1:2, so a square needs twice the columns.
        let (cols, rows) = if avail_rows * aspect * 2.0 <= avail_cols {
            (avail_rows * aspect * 2.0, avail_rows)
        } else {
            (avail_cols, avail_cols / aspect / 2.0)
        };
        let cols = cols.floor().max(1.0) as u16;
        let rows = rows.floor().max(1.0) as u16;

        Self {
            col: 1 + (avail_cols as u16).saturating_sub(cols) / 2,
            row: 1,
            cols,
            rows,
            scale_x: cols as f64 / field_w.max(1) as f64,
            scale_y: rows as f64 / field_h.max(1) as f64,
        }
    }

    /// Playfield point → cell offsets inside the viewport. May be negative
    /// or past the far edge.
    pub fn to_cell(&self, x: f64, y: f64) -> (i32, i32) {
        ((x * self.scale_x).floor() as i32, (y * self.scale_y).floor() as i32)
    }

    /// Playfield length → number of cells, at least one.
    fn span(&self, length: f64, scale: f64) -> i32 {
        ((length * scale).round() as i32).max(1)
    }

    fn contains(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && col < self.cols as i32 && row < self.rows as i32
    }
}

pub struct TerminalSurface<W: Write> {
    out: W,
    viewport: Viewport,
    term_rows: u16,
    sizes: SpriteSizes,
    /// Frames presented so far; drives the shimmering background.
    frames: u64,
}

#[derive(Clone, Copy, Debug)]
struct SpriteSizes {
    enemy: (f64, f64),
    player: (f64, f64),
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, config: &GameConfig, term_cols: u16, term_rows: u16) -> Self {
        Self {
            out,
            viewport: Viewport::fit(config.width, config.height, term_cols, term_rows),
            term_rows,
            sizes: SpriteSizes {
                enemy: (config.enemy_width as f64, config.enemy_height as f64),
                player: (config.player_width as f64, config.player_height as f64),
            },
            frames: 0,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // ── Backgrounds ──────────────────────────────────────────────────────────

    fn draw_background(&mut self, sprite: SpriteId) -> io::Result<()> {
        self.out.queue(style::ResetColor)?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;

        let (glyph, color, density) = match sprite {
            SpriteId::Background(index) => match index % 3 {
                0 => ('✦', C_SHIMMER, 23),
                1 => ('~', C_SKY, 41),
                _ => ('·', C_STARS, 17),
            },
            _ => ('*', C_BACKDROP, 13),
        };
        // The shimmering field re-seeds every few frames.
        let phase = match sprite {
            SpriteId::Background(index) if index % 3 == 0 => self.frames / 8,
            _ => 0,
        };

        self.out.queue(style::SetForegroundColor(color))?;
        let vp = self.viewport;
        for row in 0..vp.rows {
            for col in 0..vp.cols {
                if scatter(col, row, phase) % density == 0 {
                    self.out.queue(cursor::MoveTo(vp.col + col, vp.row + row))?;
                    self.out.queue(Print(glyph))?;
                }
            }
        }
        Ok(())
    }

    // ── Glyph art ────────────────────────────────────────────────────────────

    /// Stretch `art` over the footprint `size` at playfield point (x, y).
    fn draw_art(&mut self, art: &[&str], color: Color, x: f64, y: f64, size: (f64, f64)) -> io::Result<()> {
        let vp = self.viewport;
        let (c0, r0) = vp.to_cell(x, y);
        let width = vp.span(size.0, vp.scale_x);
        let height = vp.span(size.1, vp.scale_y);

        self.out.queue(style::SetForegroundColor(color))?;
        for dy in 0..height {
            let line: Vec<char> = art[(dy as usize * art.len()) / height as usize].chars().collect();
            for dx in 0..width {
                let glyph = line[(dx as usize * line.len()) / width as usize];
                let (col, row) = (c0 + dx, r0 + dy);
                if glyph == ' ' || !vp.contains(col, row) {
                    continue;
                }
                self.out
                    .queue(cursor::MoveTo(vp.col + col as u16, vp.row + row as u16))?;
                self.out.queue(Print(glyph))?;
            }
        }
        Ok(())
    }

    // ── Frame chrome ─────────────────────────────────────────────────────────

    fn draw_border(&mut self) -> io::Result<()> {
        let vp = self.viewport;
        let left = vp.col - 1;
        let right = vp.col + vp.cols;
        let bottom = vp.row + vp.rows;
        let bar = "─".repeat(vp.cols as usize);

        self.out.queue(style::SetForegroundColor(C_BORDER))?;
        self.out.queue(cursor::MoveTo(left, 0))?;
        self.out.queue(Print(format!("┌{bar}┐")))?;
        self.out.queue(cursor::MoveTo(left, bottom))?;
        self.out.queue(Print(format!("└{bar}┘")))?;
        for row in vp.row..bottom {
            self.out.queue(cursor::MoveTo(left, row))?;
            self.out.queue(Print("│"))?;
            self.out.queue(cursor::MoveTo(right, row))?;
            self.out.queue(Print("│"))?;
        }
        Ok(())
    }

    fn draw_controls_hint(&mut self) -> io::Result<()> {
        self.out
            .queue(cursor::MoveTo(self.viewport.col, self.term_rows.saturating_sub(1)))?;
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.out.queue(Print(HINT))?;
        Ok(())
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn draw_sprite(&mut self, sprite: SpriteId, x: f64, y: f64) -> io::Result<()> {
        match sprite {
            SpriteId::Background(_) | SpriteId::Backdrop => self.draw_background(sprite),
            SpriteId::Enemy => self.draw_art(ENEMY_ART, C_ENEMY, x, y, self.sizes.enemy),
            SpriteId::Player(frame) => {
                let color = if frame % 2 == 0 { C_PLAYER } else { C_PLAYER_ALT };
                self.draw_art(PLAYER_ART[frame % PLAYER_ART.len()], color, x, y, self.sizes.player)
            }
            SpriteId::Explosion => self.draw_art(EXPLOSION_ART, C_EXPLOSION, x, y, self.sizes.player),
        }
    }

    /// `y` is the text baseline, as on a canvas.
    fn draw_text(&mut self, text: &str, text_style: &TextStyle, x: f64, y: f64) -> io::Result<()> {
        let vp = self.viewport;
        let (col, row) = vp.to_cell(x, y);
        let row = (row - 1).max(0);
        if !vp.contains(col.max(0), row) {
            return Ok(());
        }
        let room = (vp.cols as i32 - col.max(0)).max(0) as usize;
        let clipped: String = text.chars().take(room).collect();

        self.out
            .queue(cursor::MoveTo(vp.col + col.max(0) as u16, vp.row + row as u16))?;
        self.out.queue(style::SetForegroundColor(parse_fill(&text_style.fill)))?;
        if text_style.font.split_whitespace().any(|w| w == "bold") {
            self.out.queue(style::SetAttribute(Attribute::Bold))?;
        }
        self.out.queue(Print(clipped))?;
        self.out.queue(style::SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.draw_border()?;
        self.draw_controls_hint()?;

        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.term_rows.saturating_sub(1)))?;
        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }
}

/// `#rrggbb` → terminal colour. Anything else renders white.
pub fn parse_fill(fill: &str) -> Color {
    let hex = fill.strip_prefix('#').unwrap_or(fill);
    if hex.len() != 6 {
        return Color::White;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb { r, g, b },
        _ => Color::White,
    }
}

/// Cheap deterministic hash for placing background glyphs.
fn scatter(col: u16, row: u16, phase: u64) -> u64 {
    let mut h = (col as u64).wrapping_mul(0x9E37_79B9) ^ (row as u64).wrapping_mul(0x85EB_CA6B);
    h ^= phase.wrapping_mul(0xC2B2_AE35);
    h ^= h >> 13;
    h.wrapping_mul(0x27D4_EB2F) >> 7
}
