use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::entities::{
    Boss, Drone, Enemy, EnemyKind, Player, PowerUp, PowerUpKind, explosion_burst, hit_sparks,
};

pub const COUNTDOWN_FRAMES: u16 = 180;
const SCORE_TRICKLE: f64 = 0.03;
const WAVE_INTERVAL_BASE: u16 = 90;
const WAVE_INTERVAL_FLOOR: u16 = 35;
const POWERUP_SPAWN_CHANCE: f64 = 0.002;
const POWERUP_DROP_CHANCE: f64 = 0.1;
const SHIELD_DURATION: u16 = 300;
const RAPID_FIRE_DURATION: u16 = 360;
const SPREAD_SHOT_DURATION: u16 = 360;
const FREEZE_DURATION: u16 = 300;
const SCORE_BONUS_AWARD: f64 = 50.0;
const BOSS_SCORE_THRESHOLD: u32 = 500;
const BOSS_SPAWN_CHANCE: f64 = 0.005;
const BOSS_KILL_AWARD: f64 = 250.0;
const SHAKE_FRAMES: u8 = 10;
const MAX_DRONES: usize = 2;

/// The four screens of the game. Exactly one is active; the only legal
/// transitions are Title -> Countdown -> Playing -> GameOver -> Countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Title,
    Countdown,
    Playing,
    GameOver,
}

/// Fire-and-forget triggers for the audio layer. The world only emits these,
/// it never waits on playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    Shoot,
    Explosion,
    PowerUp,
    BossEntry,
}

/// Things a tick wants the outside world to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Sound(SoundEffect),
    /// A run just ended; `new_high_score` asks the app to persist `score`.
    RunEnded { score: u32, new_high_score: bool },
}

/// One frame's worth of sampled input, already merged across keyboard and
/// any other control source.
#[derive(Debug, Default, Clone, Copy)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    pub special: bool,
    pub confirm: bool,
}

/// The whole game in one owned aggregate, advanced by [`World::tick`]. Does
/// no I/O of its own: rendering, audio and persistence consume its fields
/// and events, which keeps the update step testable without a terminal.
pub struct World {
    pub state: GameState,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub enemy_bullets: Vec<crate::entities::Bullet>,
    pub powerups: Vec<PowerUp>,
    pub particles: Vec<crate::entities::Particle>,
    pub boss: Option<Boss>,
    /// Best score ever achieved, loaded once at startup
    pub high_score: u32,
    pub countdown: u16,
    /// Frames until the next wave spawns
    pub wave_timer: u16,
    /// Frames of enemy freeze remaining
    pub freeze_timer: u16,
    /// Frames of screen shake remaining
    pub shake_timer: u8,
    /// Total ticks since startup, used for blink effects
    pub frame: u64,
    pub field_width: f32,
    pub field_height: f32,
    score: f64,
    rng: SmallRng,
}

impl World {
    pub fn new(field_width: f32, field_height: f32, high_score: u32) -> Self {
        Self::with_rng(field_width, field_height, high_score, SmallRng::from_os_rng())
    }

    /// Deterministic construction for tests.
    pub fn with_seed(field_width: f32, field_height: f32, high_score: u32, seed: u64) -> Self {
        Self::with_rng(
            field_width,
            field_height,
            high_score,
            SmallRng::seed_from_u64(seed),
        )
    }

    fn with_rng(field_width: f32, field_height: f32, high_score: u32, rng: SmallRng) -> Self {
        Self {
            state: GameState::Title,
            player: Player::new(field_width / 2.0, field_height - 5.0),
            enemies: Vec::new(),
            enemy_bullets: Vec::new(),
            powerups: Vec::new(),
            particles: Vec::new(),
            boss: None,
            high_score,
            countdown: COUNTDOWN_FRAMES,
            wave_timer: WAVE_INTERVAL_BASE,
            freeze_timer: 0,
            shake_timer: 0,
            frame: 0,
            field_width,
            field_height,
            score: 0.0,
            rng,
        }
    }

    /// Current score. The floored value is canonical everywhere the score is
    /// compared or displayed; the fractional trickle only lives inside.
    pub fn score(&self) -> u32 {
        self.score as u32
    }

    /// Playfield bounds follow the rendering surface.
    pub fn resize(&mut self, field_width: f32, field_height: f32) {
        self.field_width = field_width;
        self.field_height = field_height;
        self.player
            .apply_movement(0.0, 0.0, field_width, field_height);
    }

    /// Advances the game by one frame. All state mutation for the tick
    /// completes before this returns; the caller acts on the events.
    pub fn tick(&mut self, input: TickInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.frame += 1;

        match self.state {
            GameState::Title | GameState::GameOver => {
                if input.confirm {
                    self.start_run();
                }
            }
            GameState::Countdown => {
                self.countdown = self.countdown.saturating_sub(1);
                if self.countdown == 0 {
                    self.state = GameState::Playing;
                }
            }
            GameState::Playing => self.update_playing(input, &mut events),
        }

        events
    }

    /// Resets everything a run owns and enters the countdown.
    fn start_run(&mut self) {
        self.player = Player::new(self.field_width / 2.0, self.field_height - 5.0);
        self.enemies.clear();
        self.enemy_bullets.clear();
        self.powerups.clear();
        self.particles.clear();
        self.boss = None;
        self.score = 0.0;
        self.wave_timer = WAVE_INTERVAL_BASE;
        self.freeze_timer = 0;
        self.shake_timer = 0;
        self.countdown = COUNTDOWN_FRAMES;
        self.state = GameState::Countdown;
    }

    fn update_playing(&mut self, input: TickInput, events: &mut Vec<GameEvent>) {
        self.score += SCORE_TRICKLE;
        self.player.tick_fire_cooldown();

        let dx = (input.right as i8 - input.left as i8) as f32;
        let dy = (input.down as i8 - input.up as i8) as f32;
        self.player
            .apply_movement(dx, dy, self.field_width, self.field_height);

        if input.fire {
            let fired = self.player.try_fire();
            if !fired.is_empty() {
                events.push(GameEvent::Sound(SoundEffect::Shoot));
                self.player.bullets.extend(fired);
            }
        }

        if input.special && self.player.energy_ready {
            self.player.energy_ready = false;
            self.energy_blast(events);
        }

        self.player.update_drones();

        let (field_width, field_height) = (self.field_width, self.field_height);
        for bullet in &mut self.player.bullets {
            bullet.update();
        }
        self.player
            .bullets
            .retain(|b| !b.is_out_of_bounds(field_width, field_height));

        if self.wave_timer > 0 {
            self.wave_timer -= 1;
        } else {
            self.spawn_wave();
            self.wave_timer = self.wave_interval();
        }

        if self.freeze_timer == 0 {
            let (px, py) = (self.player.x, self.player.y);
            let mut shots = Vec::new();
            for enemy in &mut self.enemies {
                enemy.advance(px, py, field_width);
                if let Some(bullet) = enemy.try_fire(px, py) {
                    shots.push(bullet);
                }
            }
            self.enemy_bullets.extend(shots);
        }
        self.enemies.retain(|e| !e.is_below_field(field_height));

        for bullet in &mut self.enemy_bullets {
            bullet.update();
        }
        self.enemy_bullets
            .retain(|b| !b.is_out_of_bounds(field_width, field_height));

        if self.rng.random_bool(POWERUP_SPAWN_CHANCE) {
            let x = self.rng.random_range(2.0..(field_width - 2.0).max(3.0));
            let kind = self.random_powerup_kind();
            self.powerups.push(PowerUp::new(x, -2.0, kind));
        }
        for powerup in &mut self.powerups {
            powerup.update();
        }
        self.powerups.retain(|p| !p.is_below_field(field_height));

        self.update_boss(events);

        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(|p| !p.is_dead());

        self.resolve_bullet_hits(events);
        self.resolve_player_collisions(events);
        self.resolve_pickups(events);

        if !self.player.is_alive() {
            self.finish_run(events);
            return;
        }

        // Timers tick after the collision phase so a value set to N absorbs
        // hits for exactly N frames
        self.player.tick_modifier_timers();
        self.freeze_timer = self.freeze_timer.saturating_sub(1);
        self.shake_timer = self.shake_timer.saturating_sub(1);
    }

    /// Wave cadence shrinks as the score grows, down to a floor. This is the
    /// sole difficulty-scaling mechanism.
    fn wave_interval(&self) -> u16 {
        let reduced = WAVE_INTERVAL_BASE as i64 - (self.score() as i64) / 20;
        reduced.max(WAVE_INTERVAL_FLOOR as i64) as u16
    }

    fn spawn_wave(&mut self) {
        let field_width = self.field_width;
        let mut spawn_x = |rng: &mut SmallRng| rng.random_range(2.0..(field_width - 2.0).max(3.0));

        let roll: f64 = self.rng.random();
        if roll < 0.40 {
            // Small swarm, occasionally carrying a splitter
            for _ in 0..4 {
                let x = spawn_x(&mut self.rng);
                self.enemies.push(Enemy::new(x, -2.0, EnemyKind::Small));
            }
            if self.rng.random_bool(0.3) {
                let x = spawn_x(&mut self.rng);
                self.enemies.push(Enemy::new(x, -3.0, EnemyKind::Splitter));
            }
        } else if roll < 0.65 {
            let base = spawn_x(&mut self.rng);
            for i in 0..3 {
                let x = (base + i as f32 * 8.0).min(field_width - 2.0);
                self.enemies.push(Enemy::new(x, -2.0, EnemyKind::Zigzag));
            }
        } else if roll < 0.85 {
            for _ in 0..2 {
                let x = spawn_x(&mut self.rng);
                self.enemies.push(Enemy::new(x, -2.0, EnemyKind::Chaser));
            }
        } else {
            let x = spawn_x(&mut self.rng);
            self.enemies.push(Enemy::new(x, -2.0, EnemyKind::Shooter));
        }
    }

    /// The once-per-run special: wipes every enemy and enemy bullet from the
    /// field without awarding score.
    fn energy_blast(&mut self, events: &mut Vec<GameEvent>) {
        for enemy in &self.enemies {
            self.particles.extend(explosion_burst(enemy.x, enemy.y));
        }
        self.enemies.clear();
        self.enemy_bullets.clear();
        events.push(GameEvent::Sound(SoundEffect::Explosion));
    }

    fn update_boss(&mut self, events: &mut Vec<GameEvent>) {
        if self.boss.is_none()
            && self.score() > BOSS_SCORE_THRESHOLD
            && self.rng.random_bool(BOSS_SPAWN_CHANCE)
        {
            self.boss = Some(Boss::new(self.field_width));
            events.push(GameEvent::Sound(SoundEffect::BossEntry));
            return;
        }
        if self.freeze_timer > 0 {
            return;
        }

        let (px, py) = (self.player.x, self.player.y);
        let field_width = self.field_width;
        let Some(boss) = self.boss.as_mut() else {
            return;
        };

        boss.advance(field_width);
        if boss.escorts_due() {
            let (bx, by) = (boss.x, boss.y);
            self.enemies
                .push(Enemy::new(bx - 10.0, by + 2.0, EnemyKind::Small));
            self.enemies
                .push(Enemy::new(bx + 10.0, by + 2.0, EnemyKind::Small));
        }
        if let Some(volley) = boss.try_volley(px, py) {
            self.enemy_bullets.extend(volley);
        }
    }

    /// Player bullets against enemies and the boss. Bullets are tested in
    /// list order and each is consumed by its first hit; an enemy that dies
    /// mid-pass no longer matches later bullets.
    fn resolve_bullet_hits(&mut self, events: &mut Vec<GameEvent>) {
        let mut bullets = std::mem::take(&mut self.player.bullets);
        bullets.retain(|bullet| {
            let hb = bullet.hitbox();
            for enemy in &mut self.enemies {
                if enemy.is_alive() && hb.intersects(&enemy.hitbox()) {
                    enemy.take_hit();
                    if enemy.is_alive() {
                        self.particles.extend(hit_sparks(bullet.x, bullet.y));
                    }
                    return false;
                }
            }
            if let Some(boss) = self.boss.as_mut()
                && hb.intersects(&boss.hitbox())
            {
                boss.take_hit();
                self.particles.extend(hit_sparks(bullet.x, bullet.y));
                return false;
            }
            true
        });
        self.player.bullets = bullets;

        let mut killed = Vec::new();
        self.enemies.retain(|enemy| {
            if enemy.is_alive() {
                true
            } else {
                killed.push((enemy.kind, enemy.x, enemy.y, enemy.points()));
                false
            }
        });
        for (kind, x, y, points) in killed {
            self.score += points as f64;
            self.particles.extend(explosion_burst(x, y));
            events.push(GameEvent::Sound(SoundEffect::Explosion));
            if kind == EnemyKind::Splitter {
                self.enemies.push(Enemy::split_child(x - 1.5, y));
                self.enemies.push(Enemy::split_child(x + 1.5, y));
            }
            if self.rng.random_bool(POWERUP_DROP_CHANCE) {
                let kind = self.random_powerup_kind();
                self.powerups.push(PowerUp::new(x, y, kind));
            }
        }

        if let Some(boss) = self.boss.take_if(|b| !b.is_alive()) {
            self.score += BOSS_KILL_AWARD;
            self.particles.extend(explosion_burst(boss.x, boss.y));
            events.push(GameEvent::Sound(SoundEffect::Explosion));
            let kind = self.random_powerup_kind();
            self.powerups.push(PowerUp::new(boss.x, boss.y, kind));
        }
    }

    /// Enemies and enemy bullets against the player. An active shield
    /// absorbs every hit this frame; the collider is removed either way.
    fn resolve_player_collisions(&mut self, events: &mut Vec<GameEvent>) {
        let player_box = self.player.hitbox();
        let shielded = self.player.shield_active();
        let mut impacts: Vec<(f32, f32)> = Vec::new();

        self.enemies.retain(|enemy| {
            if player_box.intersects(&enemy.hitbox()) {
                impacts.push((enemy.x, enemy.y));
                false
            } else {
                true
            }
        });
        self.enemy_bullets.retain(|bullet| {
            if player_box.intersects(&bullet.hitbox()) {
                impacts.push((bullet.x, bullet.y));
                false
            } else {
                true
            }
        });

        let mut lives_lost = 0u8;
        for (x, y) in impacts {
            self.particles.extend(explosion_burst(x, y));
            events.push(GameEvent::Sound(SoundEffect::Explosion));
            if !shielded {
                lives_lost += 1;
            }
        }
        if lives_lost > 0 {
            self.player.lives = self.player.lives.saturating_sub(lives_lost);
            self.shake_timer = SHAKE_FRAMES;
        }
    }

    fn resolve_pickups(&mut self, events: &mut Vec<GameEvent>) {
        let player_box = self.player.hitbox();
        let mut collected = Vec::new();
        self.powerups.retain(|powerup| {
            if player_box.intersects(&powerup.hitbox()) {
                collected.push(powerup.kind);
                false
            } else {
                true
            }
        });
        for kind in collected {
            self.apply_powerup(kind, events);
            events.push(GameEvent::Sound(SoundEffect::PowerUp));
        }
    }

    fn apply_powerup(&mut self, kind: PowerUpKind, events: &mut Vec<GameEvent>) {
        match kind {
            PowerUpKind::Shield => self.player.shield_timer = SHIELD_DURATION,
            PowerUpKind::RapidFire => self.player.rapid_timer = RAPID_FIRE_DURATION,
            PowerUpKind::SpreadShot => self.player.spread_timer = SPREAD_SHOT_DURATION,
            PowerUpKind::Bomb => {
                // Clears the field, scoring each enemy as a kill
                let cleared = std::mem::take(&mut self.enemies);
                if !cleared.is_empty() {
                    events.push(GameEvent::Sound(SoundEffect::Explosion));
                }
                for enemy in cleared {
                    self.score += enemy.points() as f64;
                    self.particles.extend(explosion_burst(enemy.x, enemy.y));
                }
            }
            PowerUpKind::Drone => {
                if self.player.drones.len() < MAX_DRONES {
                    let index = self.player.drones.len();
                    self.player.drones.push(Drone::new(index));
                }
            }
            PowerUpKind::ExtraLife => {
                self.player.lives = self.player.lives.saturating_add(1);
            }
            PowerUpKind::Freeze => self.freeze_timer = FREEZE_DURATION,
            PowerUpKind::ScoreBonus => self.score += SCORE_BONUS_AWARD,
        }
    }

    fn random_powerup_kind(&mut self) -> PowerUpKind {
        PowerUpKind::ALL[self.rng.random_range(0..PowerUpKind::ALL.len())]
    }

    /// Entering GameOver: the high score is compared against the floored
    /// final score and the app is asked to persist an improvement.
    fn finish_run(&mut self, events: &mut Vec<GameEvent>) {
        let score = self.score();
        let new_high_score = score > self.high_score;
        if new_high_score {
            self.high_score = score;
        }
        events.push(GameEvent::RunEnded {
            score,
            new_high_score,
        });
        self.state = GameState::GameOver;
    }
}
