//! The drawing boundary between the engine and whatever shows the game.
//!
//! Coordinates are playfield units with the origin at the top-left corner.
//! Sprites may be drawn partly outside the playfield; clipping is the
//! surface's job.

use std::io;

use crate::assets::SpriteId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextStyle {
    /// CSS-style font description, e.g. `bold 30px Impact`.
    pub font: String,
    /// `#rrggbb` fill colour.
    pub fill: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: "bold 30px Impact".to_string(),
            fill: "#ffffff".to_string(),
        }
    }
}

pub trait Surface {
    fn draw_sprite(&mut self, sprite: SpriteId, x: f64, y: f64) -> io::Result<()>;

    fn draw_text(&mut self, text: &str, style: &TextStyle, x: f64, y: f64) -> io::Result<()>;

    /// Called once after everything in a frame has been drawn.
    fn present(&mut self) -> io::Result<()> {
        Ok(())
    }
}
