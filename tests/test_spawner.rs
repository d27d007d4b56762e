mod common;

use common::seeded_rng;
use lane_dodge::config::GameConfig;
use lane_dodge::entities::Enemy;
use lane_dodge::spawner::Spawner;

#[test]
fn five_lanes_three_enemies_after_setup() {
    let c = GameConfig::default(); // 375 / 75 = 5 lanes
    let mut s = Spawner::new(&c);
    assert_eq!(s.lane_count(), 5);

    let added = s.setup_enemies(&mut seeded_rng());

    assert_eq!(added, 3);
    assert_eq!(s.occupied(), 3);
    assert_eq!(s.empty_lanes().len(), 2);
}

#[test]
fn spawned_enemies_are_lane_aligned_above_the_playfield() {
    let c = GameConfig::default();
    let mut s = Spawner::new(&c);
    s.setup_enemies(&mut seeded_rng());

    for (lane, enemy) in s.iter() {
        assert_eq!(enemy.x, lane as u32 * c.enemy_width);
        assert_eq!(enemy.y, -(c.enemy_height as f64));
        assert!(enemy.speed >= c.enemy_speed_min && enemy.speed < c.enemy_speed_max);
    }
}

#[test]
fn setup_is_a_noop_when_already_full() {
    let mut s = Spawner::new(&GameConfig::default());
    let mut rng = seeded_rng();
    s.setup_enemies(&mut rng);
    let before: Vec<usize> = s.iter().map(|(lane, _)| lane).collect();

    assert_eq!(s.setup_enemies(&mut rng), 0);

    let after: Vec<usize> = s.iter().map(|(lane, _)| lane).collect();
    assert_eq!(before, after);
}

#[test]
fn add_enemy_returns_none_when_saturated() {
    let c = GameConfig { max_enemies: 5, ..GameConfig::default() };
    let mut s = Spawner::new(&c);
    let mut rng = seeded_rng();
    s.setup_enemies(&mut rng);
    assert_eq!(s.occupied(), 5);

    assert_eq!(s.add_enemy(&mut rng), None);
    assert_eq!(s.occupied(), 5);
}

#[test]
fn add_enemy_fills_the_only_free_lane() {
    let c = GameConfig { max_enemies: 5, ..GameConfig::default() };
    let mut s = Spawner::new(&c);
    let mut rng = seeded_rng();
    s.setup_enemies(&mut rng);
    s.remove(3);

    assert_eq!(s.add_enemy(&mut rng), Some(3));
    assert_eq!(s.get(3).map(|e| e.x), Some(225));
}

#[test]
fn top_up_refills_freed_lanes() {
    let mut s = Spawner::new(&GameConfig::default());
    let mut rng = seeded_rng();
    s.setup_enemies(&mut rng);
    let lane = s.iter().map(|(lane, _)| lane).next().unwrap();
    s.remove(lane);
    assert_eq!(s.occupied(), 2);

    assert_eq!(s.setup_enemies(&mut rng), 1);
    assert_eq!(s.occupied(), 3);
}

#[test]
fn prune_expired_frees_only_lanes_past_the_floor() {
    let mut s = Spawner::new(&GameConfig::default());
    s.place(0, Enemy::new(0, 500.0, 0.5));
    s.place(1, Enemy::new(75, 500.5, 0.5));
    s.place(4, Enemy::new(300, -10.0, 0.5));

    let cleared = s.prune_expired(500.0);

    assert_eq!(cleared, vec![1]);
    assert!(s.get(0).is_some());
    assert!(s.get(4).is_some());
}

#[test]
fn remove_empty_or_unknown_lane_is_harmless() {
    let mut s = Spawner::new(&GameConfig::default());
    assert!(s.remove(2).is_none());
    assert!(s.remove(99).is_none());
    s.place(99, Enemy::new(0, 0.0, 0.5));
    assert_eq!(s.occupied(), 0);
}

#[test]
fn population_never_exceeds_target_over_many_top_ups() {
    let mut s = Spawner::new(&GameConfig::default());
    let mut rng = seeded_rng();
    for round in 0..50usize {
        s.setup_enemies(&mut rng);
        assert_eq!(s.occupied(), 3);
        // knock out a varying lane
        s.remove(round % 5);
        assert!(s.occupied() <= 3);
    }
}

#[test]
fn every_lane_gets_used_eventually() {
    let mut s = Spawner::new(&GameConfig::default());
    let mut rng = seeded_rng();
    let mut seen = [false; 5];
    for _ in 0..200 {
        s.setup_enemies(&mut rng);
        for (lane, _) in s.iter() {
            seen[lane] = true;
        }
        let lanes: Vec<usize> = s.iter().map(|(lane, _)| lane).collect();
        for lane in lanes {
            s.remove(lane);
        }
    }
    assert!(seen.iter().all(|&used| used));
}
