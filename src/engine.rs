//! The game engine.
//!
//! One `Engine` is one session. It owns every piece of mutable state (the
//! player, the lane table, the score, the frame counter and the session
//! RNG) and advances it one frame per `tick`. The host decides when frames
//! happen; the engine only measures the time between them.

use std::io;

use rand::Rng;
use tracing::{debug, info};

use crate::assets::{Assets, SpriteId};
use crate::compute::{advance_enemy, animate_player, evaluate, expire_enemies, move_player};
use crate::config::{ConfigError, GameConfig};
use crate::entities::{Direction, Phase, Player};
use crate::spawner::Spawner;
use crate::surface::{Surface, TextStyle};

const SCORE_POS: (f64, f64) = (5.0, 30.0);
const LIVES_POS: (f64, f64) = (5.0, 70.0);
const GAME_OVER_TEXT: &str = "GAME OVER!";

pub struct Engine<R: Rng> {
    config: GameConfig,
    rng: R,
    assets: Assets,
    player: Player,
    spawner: Spawner,
    score: u64,
    frame: u64,
    last_frame: u64,
    phase: Phase,
    hud_style: TextStyle,
}

impl<R: Rng> Engine<R> {
    /// Build a session: pick the background, place the player and seed the
    /// first wave of enemies.
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let assets = Assets::new(config.background_count, &mut rng);
        let player = Player::new(config.player_start_x(), config.player_y(), config.starting_lives);
        let mut spawner = Spawner::new(&config);
        spawner.setup_enemies(&mut rng);

        debug!(
            lanes = spawner.lane_count(),
            background = assets.background_index(),
            "session created"
        );

        Ok(Self {
            config,
            rng,
            assets,
            player,
            spawner,
            score: 0,
            frame: 0,
            last_frame: 0,
            phase: Phase::Running,
            hud_style: TextStyle::default(),
        })
    }

    /// Reset the score and start measuring frame time from `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.score = 0;
        self.last_frame = now_ms;
        info!("game started");
    }

    /// Steer the player. Still works after game over; the explosion
    /// follows the keys.
    pub fn move_player(&mut self, direction: Direction) {
        move_player(&mut self.player, direction, &self.config);
    }

    /// Run one frame at timestamp `now_ms` and draw it onto `surface`.
    pub fn tick<S: Surface>(&mut self, now_ms: u64, surface: &mut S) -> io::Result<Phase> {
        self.frame += 1;
        let elapsed = now_ms.saturating_sub(self.last_frame);

        match self.phase {
            Phase::Running => self.running_tick(elapsed, surface)?,
            Phase::Exploding => self.exploding_tick(elapsed, surface)?,
        }

        surface.present()?;
        self.last_frame = now_ms;
        Ok(self.phase)
    }

    fn running_tick<S: Surface>(&mut self, elapsed: u64, surface: &mut S) -> io::Result<()> {
        self.score += elapsed;
        self.advance_enemies(elapsed);

        animate_player(&mut self.player, self.frame, &self.config);
        self.player.sprite = self.assets.player_frame(self.player.frame_index);
        self.draw_scene(surface, self.assets.background())?;

        let evaluation = evaluate(&mut self.spawner, &mut self.player, &self.config);
        if !evaluation.collided.is_empty() {
            debug!(lives = self.player.lives, hits = evaluation.lives_lost(), "collisions resolved");
        }
        self.spawner.setup_enemies(&mut self.rng);

        if self.player.lives == 0 {
            self.phase = Phase::Exploding;
            self.player.sprite = self.assets.explosion();
            info!(score = self.score, frame = self.frame, "game over");
            self.draw_game_over(surface)?;
        } else {
            self.draw_hud(surface)?;
        }
        Ok(())
    }

    fn exploding_tick<S: Surface>(&mut self, elapsed: u64, surface: &mut S) -> io::Result<()> {
        self.advance_enemies(elapsed);
        self.draw_scene(surface, self.assets.backdrop())?;

        expire_enemies(&mut self.spawner, &self.config);
        self.spawner.setup_enemies(&mut self.rng);

        self.draw_game_over(surface)
    }

    fn advance_enemies(&mut self, elapsed: u64) {
        for enemy in self.spawner.iter_mut() {
            advance_enemy(enemy, elapsed);
        }
    }

    fn draw_scene<S: Surface>(&self, surface: &mut S, background: SpriteId) -> io::Result<()> {
        surface.draw_sprite(background, 0.0, 0.0)?;
        for (_, enemy) in self.spawner.iter() {
            surface.draw_sprite(self.assets.enemy(), enemy.x as f64, enemy.y)?;
        }
        surface.draw_sprite(self.player.sprite, self.player.x as f64, self.player.y)
    }

    fn draw_hud<S: Surface>(&self, surface: &mut S) -> io::Result<()> {
        surface.draw_text(&self.score.to_string(), &self.hud_style, SCORE_POS.0, SCORE_POS.1)?;
        surface.draw_text(
            &format!("Lives: {}", self.player.lives),
            &self.hud_style,
            LIVES_POS.0,
            LIVES_POS.1,
        )
    }

    fn draw_game_over<S: Surface>(&self, surface: &mut S) -> io::Result<()> {
        self.draw_hud(surface)?;
        surface.draw_text(
            GAME_OVER_TEXT,
            &self.hud_style,
            self.config.width as f64 * 0.33,
            self.config.height as f64 / 2.0,
        )
    }

    // ── Read-only views ─────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Exploding
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Direct access to the lane table, for staging scenarios.
    pub fn spawner_mut(&mut self) -> &mut Spawner {
        &mut self.spawner
    }
}
