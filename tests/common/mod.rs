#![allow(dead_code)]

use std::io;

use rand::rngs::StdRng;
use rand::SeedableRng;

use lane_dodge::assets::SpriteId;
use lane_dodge::surface::{Surface, TextStyle};

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[derive(Clone, Debug, PartialEq)]
pub enum Draw {
    Sprite(SpriteId, f64, f64),
    Text(String, f64, f64),
}

/// Surface that remembers every draw call, grouped by frame.
#[derive(Default)]
pub struct RecordingSurface {
    pub current: Vec<Draw>,
    pub frames: Vec<Vec<Draw>>,
}

impl RecordingSurface {
    pub fn last_frame(&self) -> &[Draw] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn texts(&self) -> Vec<String> {
        self.last_frame()
            .iter()
            .filter_map(|d| match d {
                Draw::Text(t, _, _) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn sprites(&self) -> Vec<SpriteId> {
        self.last_frame()
            .iter()
            .filter_map(|d| match d {
                Draw::Sprite(s, _, _) => Some(*s),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn draw_sprite(&mut self, sprite: SpriteId, x: f64, y: f64) -> io::Result<()> {
        self.current.push(Draw::Sprite(sprite, x, y));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, _style: &TextStyle, x: f64, y: f64) -> io::Result<()> {
        self.current.push(Draw::Text(text.to_string(), x, y));
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.frames.push(std::mem::take(&mut self.current));
        Ok(())
    }
}
