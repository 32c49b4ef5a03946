use super::bullet::Bullet;
use super::drone::Drone;
use super::hitbox::Hitbox;

/// Frames between shots with the base gun, halved while rapid fire is active.
const FIRE_COOLDOWN: i16 = 15;
const RAPID_FIRE_COOLDOWN: i16 = 7;
const PLAYER_BULLET_SPEED: f32 = -1.2;
const SPREAD_FAN_VX: f32 = 0.4;
pub const STARTING_LIVES: u8 = 3;

#[derive(Debug, Clone)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub speed: f32,
    pub fire_cooldown: i16,
    pub lives: u8,
    /// Frames of shield remaining, 0 = inactive
    pub shield_timer: u16,
    pub rapid_timer: u16,
    pub spread_timer: u16,
    /// One-shot screen-clearing blast, restored on every new run
    pub energy_ready: bool,
    pub bullets: Vec<Bullet>,
    pub drones: Vec<Drone>,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            w: 5.0,
            h: 3.0,
            speed: 0.8,
            fire_cooldown: 0,
            lives: STARTING_LIVES,
            shield_timer: 0,
            rapid_timer: 0,
            spread_timer: 0,
            energy_ready: true,
            bullets: Vec::new(),
            drones: Vec::new(),
        }
    }

    /// Applies a directional input for one frame and clamps so the ship's box
    /// stays fully inside the playfield.
    pub fn apply_movement(&mut self, dx: f32, dy: f32, field_width: f32, field_height: f32) {
        self.x += dx * self.speed;
        self.y += dy * self.speed;
        self.x = self.x.clamp(self.w / 2.0, (field_width - self.w / 2.0).max(self.w / 2.0));
        self.y = self.y.clamp(self.h / 2.0, (field_height - self.h / 2.0).max(self.h / 2.0));
    }

    pub fn can_fire(&self) -> bool {
        self.fire_cooldown <= 0
    }

    pub fn rapid_active(&self) -> bool {
        self.rapid_timer > 0
    }

    pub fn spread_active(&self) -> bool {
        self.spread_timer > 0
    }

    pub fn shield_active(&self) -> bool {
        self.shield_timer > 0
    }

    /// Attempts to fire if the cooldown allows. Returns the bullets produced:
    /// one straight shot, or a three-way fan while spread shot is active.
    pub fn try_fire(&mut self) -> Vec<Bullet> {
        if !self.can_fire() {
            return vec![];
        }

        self.fire_cooldown = if self.rapid_active() {
            RAPID_FIRE_COOLDOWN
        } else {
            FIRE_COOLDOWN
        };

        let muzzle_y = self.y - self.h / 2.0 - 1.0;
        if self.spread_active() {
            vec![
                Bullet::new(self.x, muzzle_y, -SPREAD_FAN_VX, PLAYER_BULLET_SPEED),
                Bullet::new(self.x, muzzle_y, 0.0, PLAYER_BULLET_SPEED),
                Bullet::new(self.x, muzzle_y, SPREAD_FAN_VX, PLAYER_BULLET_SPEED),
            ]
        } else {
            vec![Bullet::new(self.x, muzzle_y, 0.0, PLAYER_BULLET_SPEED)]
        }
    }

    /// Advances drone orbits and collects any shots they fire this frame
    /// into the player's bullet list.
    pub fn update_drones(&mut self) {
        let (px, py) = (self.x, self.y);
        let mut fired = Vec::new();
        for drone in &mut self.drones {
            drone.advance();
            if let Some(bullet) = drone.try_fire(px, py) {
                fired.push(bullet);
            }
        }
        self.bullets.extend(fired);
    }

    pub fn tick_fire_cooldown(&mut self) {
        if self.fire_cooldown > 0 {
            self.fire_cooldown -= 1;
        }
    }

    /// Timed modifiers count down once per frame; shield decrements whether
    /// or not anything collides.
    pub fn tick_modifier_timers(&mut self) {
        self.shield_timer = self.shield_timer.saturating_sub(1);
        self.rapid_timer = self.rapid_timer.saturating_sub(1);
        self.spread_timer = self.spread_timer.saturating_sub(1);
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, self.w, self.h)
    }
}
