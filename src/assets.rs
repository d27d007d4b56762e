//! Sprite handles.
//!
//! The engine never looks inside a sprite; it only picks which handle to
//! draw. How a handle turns into pixels or glyphs is up to the `Surface`.

use rand::Rng;

/// Frames in the player animation cycle.
pub const PLAYER_FRAMES: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Enemy,
    /// One frame of the player animation, `0..PLAYER_FRAMES`.
    Player(usize),
    Explosion,
    /// One of the session backgrounds.
    Background(usize),
    /// Star field shown behind the game-over screen.
    Backdrop,
}

/// Sprite catalogue for a single session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assets {
    background_count: usize,
    background_index: usize,
}

impl Assets {
    /// Picks the session background at random. `background_count` is
    /// clamped to at least one.
    pub fn new(background_count: usize, rng: &mut impl Rng) -> Self {
        let background_count = background_count.max(1);
        Self {
            background_count,
            background_index: rng.gen_range(0..background_count),
        }
    }

    pub fn background(&self) -> SpriteId {
        SpriteId::Background(self.background_index)
    }

    pub fn background_index(&self) -> usize {
        self.background_index
    }

    pub fn background_count(&self) -> usize {
        self.background_count
    }

    pub fn backdrop(&self) -> SpriteId {
        SpriteId::Backdrop
    }

    pub fn enemy(&self) -> SpriteId {
        SpriteId::Enemy
    }

    pub fn explosion(&self) -> SpriteId {
        SpriteId::Explosion
    }

    /// Player frame for `index`, wrapping around the cycle.
    pub fn player_frame(&self, index: usize) -> SpriteId {
        SpriteId::Player(index % PLAYER_FRAMES)
    }
}
