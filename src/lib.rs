//! Lane Dodge - a lane-based arcade dodger for the terminal.
//!
//! Core modules:
//! - `entities`: plain game data (player, enemies, phase)
//! - `compute`: entity motion and the per-tick expiry/collision evaluator
//! - `spawner`: lane slot table that keeps the enemy population topped up
//! - `engine`: the Running/Exploding state machine driving one tick
//! - `surface` / `assets`: the drawing boundary and sprite handles
//! - `input`, `host`, `display`: keyboard mapping, frame scheduling, terminal output

pub mod assets;
pub mod compute;
pub mod config;
pub mod display;
pub mod engine;
pub mod entities;
pub mod host;
pub mod input;
pub mod spawner;
pub mod surface;

pub use config::{ConfigError, GameConfig};
pub use engine::Engine;
pub use entities::{Direction, Enemy, Phase, Player};
