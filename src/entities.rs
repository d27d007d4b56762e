/// All game entity types — pure data, no logic.

use crate::assets::SpriteId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Engine state. There is no way back from `Exploding`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    Exploding,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    /// Lane-aligned, a multiple of the player width.
    pub x: u32,
    pub y: f64,
    pub lives: u32,
    /// Position in the two-frame animation cycle.
    pub frame_index: usize,
    pub sprite: SpriteId,
}

impl Player {
    pub fn new(x: u32, y: f64, lives: u32) -> Self {
        Self {
            x,
            y,
            lives,
            frame_index: 0,
            sprite: SpriteId::Player(0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    /// Lane-aligned, `lane * enemy_width`.
    pub x: u32,
    /// May be negative (still above the playfield) or beyond the bottom edge.
    pub y: f64,
    /// Units per millisecond, fixed at creation.
    pub speed: f64,
}

impl Enemy {
    pub fn new(x: u32, y: f64, speed: f64) -> Self {
        Self { x, y, speed }
    }
}
