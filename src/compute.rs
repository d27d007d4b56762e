/// Pure game-logic functions.
///
/// Entity motion plus the per-tick lifecycle evaluator: enemies that fell off
/// the bottom are expired, enemies sharing the player's lane inside the hit
/// window cost a life. Randomness never enters here; spawning lives in
/// `spawner`.

use tracing::info;

use crate::assets::PLAYER_FRAMES;
use crate::config::GameConfig;
use crate::entities::{Direction, Enemy, Player};
use crate::spawner::Spawner;

/// Fraction of the enemy height above the player where a hit starts.
const HIT_WINDOW_ABOVE: f64 = 0.7;
/// Units below the player's top edge where a hit stops.
const HIT_WINDOW_BELOW: f64 = 5.0;

// ── Entity motion ────────────────────────────────────────────────────────────

/// Move an enemy down by `elapsed_ms * speed`. No clamping.
pub fn advance_enemy(enemy: &mut Enemy, elapsed_ms: u64) {
    enemy.y += elapsed_ms as f64 * enemy.speed;
}

/// Step the player one lane. Stepping into a wall is a no-op.
pub fn move_player(player: &mut Player, direction: Direction, config: &GameConfig) {
    match direction {
        Direction::Left if player.x > 0 => {
            player.x = player.x.saturating_sub(config.player_width);
        }
        Direction::Right if player.x < config.player_max_x() => {
            player.x += config.player_width;
        }
        _ => {}
    }
}

/// Advance the player animation every `animation_period` frames.
pub fn animate_player(player: &mut Player, frame: u64, config: &GameConfig) {
    if config.animation_period == 0 || frame % config.animation_period != 0 {
        return;
    }
    player.frame_index = (player.frame_index + 1) % PLAYER_FRAMES;
}

// ── Lifecycle checks ─────────────────────────────────────────────────────────

/// An enemy is gone once it is strictly below the bottom edge.
pub fn is_expired(enemy: &Enemy, config: &GameConfig) -> bool {
    enemy.y > config.height as f64
}

/// Lane-exact hit test: same x, and the enemy's top inside the window
/// around the player's top edge.
pub fn collides(enemy: &Enemy, player: &Player, config: &GameConfig) -> bool {
    let top = player.y - config.enemy_height as f64 * HIT_WINDOW_ABOVE;
    let bottom = player.y + HIT_WINDOW_BELOW;
    enemy.x == player.x && enemy.y > top && enemy.y < bottom
}

/// What one evaluation pass removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub expired: Vec<usize>,
    pub collided: Vec<usize>,
}

impl Evaluation {
    pub fn lives_lost(&self) -> u32 {
        self.collided.len() as u32
    }
}

/// Remove enemies that left the playfield.
pub fn expire_enemies(spawner: &mut Spawner, config: &GameConfig) -> Vec<usize> {
    spawner.prune_expired(config.height as f64)
}

/// Remove every enemy hitting the player, one life each.
pub fn resolve_collisions(
    spawner: &mut Spawner,
    player: &mut Player,
    config: &GameConfig,
) -> Vec<usize> {
    let collided = spawner.remove_where(|enemy| collides(enemy, player, config));
    for lane in &collided {
        player.lives = player.lives.saturating_sub(1);
        info!(lane, lives = player.lives, "player hit");
    }
    collided
}

/// Full lifecycle pass: expiry first, then collisions. The two checks are
/// independent; an expired enemy never counts as a hit.
pub fn evaluate(spawner: &mut Spawner, player: &mut Player, config: &GameConfig) -> Evaluation {
    let expired = expire_enemies(spawner, config);
    let collided = resolve_collisions(spawner, player, config);
    Evaluation { expired, collided }
}
