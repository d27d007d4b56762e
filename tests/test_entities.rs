use lane_dodge::assets::SpriteId;
use lane_dodge::entities::*;

#[test]
fn entity_clone_and_eq() {
    assert_eq!(Direction::Left, Direction::Left);
    assert_ne!(Direction::Left, Direction::Right);
    assert_eq!(Phase::Running, Phase::Running);
    assert_ne!(Phase::Running, Phase::Exploding);

    let enemy = Enemy::new(75, -156.0, 0.5);
    assert_eq!(enemy.clone(), enemy);
}

#[test]
fn new_player_starts_on_first_animation_frame() {
    let player = Player::new(150, 436.0, 3);
    assert_eq!(player.x, 150);
    assert_eq!(player.lives, 3);
    assert_eq!(player.frame_index, 0);
    assert_eq!(player.sprite, SpriteId::Player(0));
}

#[test]
fn player_clone_is_independent() {
    let original = Player::new(150, 436.0, 3);
    let mut cloned = original.clone();

    cloned.x = 0;
    cloned.lives = 1;

    assert_eq!(original.x, 150);
    assert_eq!(original.lives, 3);
}
