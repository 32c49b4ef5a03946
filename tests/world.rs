//! Integration tests for the game core.
//!
//! These drive `World::tick` directly, the way the app does each frame, and
//! verify the state machine, collision resolution and scoring end to end.

use galaxy_runner::{
    Boss, Bullet, COUNTDOWN_FRAMES, Enemy, EnemyKind, GameEvent, GameState, PowerUp, PowerUpKind,
    TickInput, World,
};

fn confirm() -> TickInput {
    TickInput {
        confirm: true,
        ..TickInput::default()
    }
}

fn idle() -> TickInput {
    TickInput::default()
}

fn fire() -> TickInput {
    TickInput {
        fire: true,
        ..TickInput::default()
    }
}

/// A deterministic world already in `Playing`, with wave spawning pushed far
/// out so scripted scenarios stay undisturbed.
fn playing_world() -> World {
    let mut world = World::with_seed(120.0, 40.0, 0, 42);
    world.tick(confirm());
    for _ in 0..COUNTDOWN_FRAMES {
        world.tick(idle());
    }
    assert_eq!(world.state, GameState::Playing);
    world.wave_timer = u16::MAX;
    world
}

#[test]
fn test_countdown_is_monotonic_and_transitions_once() {
    let mut world = World::with_seed(120.0, 40.0, 0, 1);
    world.tick(confirm());
    assert_eq!(world.state, GameState::Countdown);

    let mut previous = world.countdown;
    let mut transitions = 0;
    for _ in 0..COUNTDOWN_FRAMES {
        world.tick(idle());
        assert!(world.countdown <= previous);
        previous = world.countdown;
        if world.state == GameState::Playing {
            transitions += 1;
            break;
        }
    }
    assert_eq!(transitions, 1);
    assert_eq!(world.countdown, 0);

    // Stays in Playing afterwards
    for _ in 0..10 {
        world.tick(idle());
        assert_eq!(world.state, GameState::Playing);
    }
}

#[test]
fn test_countdown_timer_resets_on_each_entry() {
    let mut world = playing_world();

    // Lose the run, then restart
    world.player.lives = 1;
    world
        .enemies
        .push(Enemy::new(world.player.x, world.player.y, EnemyKind::Small));
    world.tick(idle());
    assert_eq!(world.state, GameState::GameOver);

    world.tick(confirm());
    assert_eq!(world.state, GameState::Countdown);
    assert_eq!(world.countdown, COUNTDOWN_FRAMES);
}

#[test]
fn test_small_enemy_killed_by_bullet_awards_ten() {
    let mut world = playing_world();
    world.enemies.push(Enemy::new(60.0, 10.0, EnemyKind::Small));
    world.player.bullets.push(Bullet::new(60.0, 14.0, 0.0, -1.2));

    for _ in 0..10 {
        world.tick(idle());
        if world.enemies.is_empty() {
            break;
        }
    }

    assert!(world.enemies.is_empty(), "enemy should be destroyed");
    assert!(world.player.bullets.is_empty(), "bullet was consumed");
    assert_eq!(world.score(), 10);
}

#[test]
fn test_bullet_is_consumed_by_first_hit_only() {
    let mut world = playing_world();
    // Two overlapping shooters (2 hp each) stacked on the bullet's path
    world
        .enemies
        .push(Enemy::new(60.0, 10.0, EnemyKind::Shooter));
    world
        .enemies
        .push(Enemy::new(60.0, 10.0, EnemyKind::Shooter));
    world.player.bullets.push(Bullet::new(60.0, 10.5, 0.0, -1.2));

    world.tick(idle());

    // Exactly one hit landed, on the first enemy in list order
    let total_hp: u32 = world.enemies.iter().map(|e| e.hp as u32).sum();
    assert_eq!(total_hp, 3);
    assert_eq!(world.enemies[0].hp, 1);
    assert_eq!(world.enemies[1].hp, 2);
}

#[test]
fn test_dead_enemy_no_longer_absorbs_bullets() {
    let mut world = playing_world();
    let mut weak = Enemy::new(60.0, 10.0, EnemyKind::Shooter);
    weak.hp = 1;
    world.enemies.push(weak);
    world
        .enemies
        .push(Enemy::new(60.0, 10.0, EnemyKind::Shooter));
    // Two bullets arrive on the same tick
    world.player.bullets.push(Bullet::new(60.0, 10.5, 0.0, -1.2));
    world.player.bullets.push(Bullet::new(60.0, 10.5, 0.0, -1.2));

    world.tick(idle());

    // First bullet kills the weak enemy, second passes to the survivor
    assert_eq!(world.enemies.len(), 1);
    assert_eq!(world.enemies[0].hp, 1);
}

#[test]
fn test_shield_absorbs_then_expires() {
    let mut world = playing_world();
    world.player.shield_timer = 60;

    for _ in 0..60 {
        world
            .enemies
            .push(Enemy::new(world.player.x, world.player.y, EnemyKind::Small));
        world.tick(idle());
        assert_eq!(world.player.lives, 3, "shield must absorb every hit");
        assert!(world.enemies.is_empty(), "collider is removed either way");
    }

    assert_eq!(world.player.shield_timer, 0);
    world
        .enemies
        .push(Enemy::new(world.player.x, world.player.y, EnemyKind::Small));
    world.tick(idle());
    assert_eq!(world.player.lives, 2);
}

#[test]
fn test_enemy_bullet_costs_a_life() {
    let mut world = playing_world();
    world
        .enemy_bullets
        .push(Bullet::new(world.player.x, world.player.y, 0.0, 0.0));
    world.tick(idle());
    assert_eq!(world.player.lives, 2);
    assert!(world.enemy_bullets.is_empty());
    assert!(world.shake_timer > 0);
}

#[test]
fn test_spread_shot_fires_exactly_three_bullets() {
    let mut world = playing_world();
    world.player.spread_timer = 100;
    world.tick(fire());
    assert_eq!(world.player.bullets.len(), 3);
}

#[test]
fn test_restart_resets_everything() {
    let mut world = playing_world();
    world.enemies.push(Enemy::new(10.0, 10.0, EnemyKind::Zigzag));
    world.enemy_bullets.push(Bullet::new(10.0, 10.0, 0.0, 0.5));
    world.powerups.push(PowerUp::new(10.0, 10.0, PowerUpKind::Bomb));
    world.boss = Some(Boss::new(120.0));
    world.player.lives = 1;

    // Collide with the player to end the run
    world
        .enemies
        .push(Enemy::new(world.player.x, world.player.y, EnemyKind::Chaser));
    world.tick(idle());
    assert_eq!(world.state, GameState::GameOver);

    world.tick(confirm());
    assert_eq!(world.state, GameState::Countdown);
    assert_eq!(world.score(), 0);
    assert_eq!(world.player.lives, 3);
    assert!(world.enemies.is_empty());
    assert!(world.enemy_bullets.is_empty());
    assert!(world.player.bullets.is_empty());
    assert!(world.powerups.is_empty());
    assert!(world.boss.is_none());
}

#[test]
fn test_high_score_is_max_of_runs() {
    let mut world = playing_world();

    // Kill one small enemy for 10 points, then lose
    world.enemies.push(Enemy::new(60.0, 10.0, EnemyKind::Small));
    world.player.bullets.push(Bullet::new(60.0, 12.0, 0.0, -1.2));
    for _ in 0..10 {
        world.tick(idle());
        if world.enemies.is_empty() {
            break;
        }
    }
    assert_eq!(world.score(), 10);

    world.player.lives = 1;
    world
        .enemies
        .push(Enemy::new(world.player.x, world.player.y, EnemyKind::Small));
    let events = world.tick(idle());
    assert!(events.contains(&GameEvent::RunEnded {
        score: 10,
        new_high_score: true,
    }));
    assert_eq!(world.high_score, 10);

    // A worse second run leaves the high score alone
    world.tick(confirm());
    for _ in 0..COUNTDOWN_FRAMES {
        world.tick(idle());
    }
    world.wave_timer = u16::MAX;
    world.player.lives = 1;
    world
        .enemies
        .push(Enemy::new(world.player.x, world.player.y, EnemyKind::Small));
    let events = world.tick(idle());
    assert!(events.contains(&GameEvent::RunEnded {
        score: 0,
        new_high_score: false,
    }));
    assert_eq!(world.high_score, 10);
}

#[test]
fn test_enemy_below_field_is_removed() {
    let mut world = playing_world();
    world.enemies.push(Enemy::new(60.0, 44.0, EnemyKind::Small));
    world.enemies.push(Enemy::new(60.0, 10.0, EnemyKind::Small));
    world.tick(idle());
    assert_eq!(world.enemies.len(), 1);
}

#[test]
fn test_splitter_spawns_two_children() {
    let mut world = playing_world();
    let mut splitter = Enemy::new(60.0, 10.0, EnemyKind::Splitter);
    splitter.hp = 1;
    world.enemies.push(splitter);
    world.player.bullets.push(Bullet::new(60.0, 11.0, 0.0, -1.2));

    world.tick(idle());

    assert_eq!(world.enemies.len(), 2);
    assert!(world.enemies.iter().all(|e| e.kind == EnemyKind::Small));
    // Award for the splitter itself
    assert_eq!(world.score(), 20);
}

#[test]
fn test_boss_kill_awards_and_drops_loot() {
    let mut world = playing_world();
    let mut boss = Boss::new(120.0);
    boss.entering = false;
    boss.y = 10.0;
    boss.hp = 1;
    world.boss = Some(boss);
    world.player.bullets.push(Bullet::new(60.0, 12.0, 0.0, -1.2));

    world.tick(idle());

    assert!(world.boss.is_none());
    assert_eq!(world.score(), 250);
    assert_eq!(world.powerups.len(), 1);
}

#[test]
fn test_extra_life_powerup() {
    let mut world = playing_world();
    world.powerups.push(PowerUp::new(
        world.player.x,
        world.player.y,
        PowerUpKind::ExtraLife,
    ));
    world.tick(idle());
    assert_eq!(world.player.lives, 4);
    assert!(world.powerups.is_empty());
}

#[test]
fn test_shield_powerup_arms_the_shield() {
    let mut world = playing_world();
    world.powerups.push(PowerUp::new(
        world.player.x,
        world.player.y,
        PowerUpKind::Shield,
    ));
    world.tick(idle());
    assert!(world.player.shield_timer > 0);
}

#[test]
fn test_freeze_powerup_freezes_enemies() {
    let mut world = playing_world();
    world.powerups.push(PowerUp::new(
        world.player.x,
        world.player.y,
        PowerUpKind::Freeze,
    ));
    world.tick(idle());
    assert!(world.freeze_timer > 0);

    world.enemies.push(Enemy::new(10.0, 5.0, EnemyKind::Small));
    let y_before = world.enemies[0].y;
    world.tick(idle());
    assert_eq!(world.enemies[0].y, y_before);
}

#[test]
fn test_bomb_powerup_clears_and_scores() {
    let mut world = playing_world();
    world.enemies.push(Enemy::new(10.0, 5.0, EnemyKind::Small));
    world.enemies.push(Enemy::new(20.0, 5.0, EnemyKind::Shooter));
    world.powerups.push(PowerUp::new(
        world.player.x,
        world.player.y,
        PowerUpKind::Bomb,
    ));
    world.tick(idle());
    assert!(world.enemies.is_empty());
    // 10 for the small, 25 for the shooter
    assert_eq!(world.score(), 35);
}

#[test]
fn test_drone_powerup_adds_an_orbiter() {
    let mut world = playing_world();
    world.powerups.push(PowerUp::new(
        world.player.x,
        world.player.y,
        PowerUpKind::Drone,
    ));
    world.tick(idle());
    assert_eq!(world.player.drones.len(), 1);
}
