/// Lane slot table.
///
/// The playfield is cut into `lane_count` columns, each one enemy wide. A
/// slot is either empty or owns exactly one live enemy. New enemies are
/// dropped into a uniformly random empty lane, so the spawner can never spin
/// looking for space that does not exist.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::config::GameConfig;
use crate::entities::Enemy;

#[derive(Clone, Debug)]
pub struct Spawner {
    slots: Vec<Option<Enemy>>,
    target: usize,
    enemy_width: u32,
    spawn_y: f64,
    speed_min: f64,
    speed_max: f64,
}

impl Spawner {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            slots: vec![None; config.lane_count()],
            target: config.target_population(),
            enemy_width: config.enemy_width,
            spawn_y: -(config.enemy_height as f64),
            speed_min: config.enemy_speed_min,
            speed_max: config.enemy_speed_max,
        }
    }

    pub fn lane_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of lanes holding a live enemy.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Indices of the lanes that are currently free.
    pub fn empty_lanes(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(lane, _)| lane)
            .collect()
    }

    pub fn get(&self, lane: usize) -> Option<&Enemy> {
        self.slots.get(lane).and_then(Option::as_ref)
    }

    /// Put an enemy straight into a lane, replacing whatever was there.
    /// Out-of-range lanes are ignored.
    pub fn place(&mut self, lane: usize, enemy: Enemy) {
        if let Some(slot) = self.slots.get_mut(lane) {
            *slot = Some(enemy);
        }
    }

    /// Spawn one enemy in a random empty lane at the top of the playfield.
    /// Returns the lane used, or `None` when every lane is taken.
    pub fn add_enemy(&mut self, rng: &mut impl Rng) -> Option<usize> {
        let lane = *self.empty_lanes().choose(rng)?;
        let speed = rng.gen_range(self.speed_min..self.speed_max);
        let x = lane as u32 * self.enemy_width;
        self.slots[lane] = Some(Enemy::new(x, self.spawn_y, speed));
        debug!(lane, x, speed, "enemy spawned");
        Some(lane)
    }

    /// Top the population back up to the target. Returns how many enemies
    /// were added.
    pub fn setup_enemies(&mut self, rng: &mut impl Rng) -> usize {
        let mut added = 0;
        while self.occupied() < self.target {
            if self.add_enemy(rng).is_none() {
                break;
            }
            added += 1;
        }
        added
    }

    /// Free a lane, handing back the enemy that lived there.
    pub fn remove(&mut self, lane: usize) -> Option<Enemy> {
        self.slots.get_mut(lane).and_then(Option::take)
    }

    /// Empty every lane whose enemy satisfies `predicate`. Returns the lanes
    /// that were cleared.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&Enemy) -> bool) -> Vec<usize> {
        let mut cleared = Vec::new();
        for (lane, slot) in self.slots.iter_mut().enumerate() {
            if slot.as_ref().is_some_and(&mut predicate) {
                *slot = None;
                cleared.push(lane);
            }
        }
        cleared
    }

    /// Drop enemies that have fallen past `floor` (strictly below it).
    pub fn prune_expired(&mut self, floor: f64) -> Vec<usize> {
        let cleared = self.remove_where(|enemy| enemy.y > floor);
        if !cleared.is_empty() {
            debug!(lanes = ?cleared, "enemies expired");
        }
        cleared
    }

    /// Live enemies with their lane index, left to right.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Enemy)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(lane, slot)| slot.as_ref().map(|enemy| (lane, enemy)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Enemy> + '_ {
        self.slots.iter_mut().flatten()
    }
}
