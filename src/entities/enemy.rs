use super::bullet::Bullet;
use super::hitbox::Hitbox;

const SHOOTER_FIRE_INTERVAL: u16 = 90;
const ENEMY_BULLET_SPEED: f32 = 0.6;

/// The fixed set of enemy variants. Behavior dispatches on this tag with
/// exhaustive matches, so adding a variant forces every branch to be updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    /// Falls straight down
    Small,
    /// Steps toward the player's current position
    Chaser,
    /// Falls while oscillating horizontally on a sine of its phase
    Zigzag,
    /// Drifts down slowly and fires aimed bullets on its own cooldown
    Shooter,
    /// Falls straight; splits into two Small children on death
    Splitter,
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub kind: EnemyKind,
    pub hp: u8,
    /// Frames until the next shot (Shooter only)
    pub shot_cooldown: u16,
    /// Oscillation angle (Zigzag only)
    pub phase: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, kind: EnemyKind) -> Self {
        let hp = match kind {
            EnemyKind::Small | EnemyKind::Chaser | EnemyKind::Zigzag => 1,
            EnemyKind::Shooter | EnemyKind::Splitter => 2,
        };
        let (w, h) = match kind {
            EnemyKind::Small => (3.0, 2.0),
            _ => (5.0, 3.0),
        };

        Self {
            x,
            y,
            w,
            h,
            kind,
            hp,
            shot_cooldown: SHOOTER_FIRE_INTERVAL,
            phase: 0.0,
        }
    }

    /// A half-size replacement spawned where a Splitter died.
    pub fn split_child(x: f32, y: f32) -> Self {
        let mut child = Self::new(x, y, EnemyKind::Small);
        child.w = 2.0;
        child.h = 1.0;
        child
    }

    /// Moves one frame. Chasers need the player's position; everything stays
    /// horizontally inside the field.
    pub fn advance(&mut self, player_x: f32, player_y: f32, field_width: f32) {
        match self.kind {
            EnemyKind::Small => {
                self.y += 0.25;
            }
            EnemyKind::Chaser => {
                let dx = player_x - self.x;
                let dy = player_y - self.y;
                let len = (dx * dx + dy * dy).sqrt();
                if len > f32::EPSILON {
                    self.x += dx / len * 0.3;
                    self.y += dy / len * 0.3;
                } else {
                    self.y += 0.3;
                }
            }
            EnemyKind::Zigzag => {
                self.phase += 0.1;
                self.x += self.phase.sin() * 0.6;
                self.y += 0.25;
            }
            EnemyKind::Shooter => {
                self.y += 0.12;
            }
            EnemyKind::Splitter => {
                self.y += 0.2;
            }
        }
        self.x = self.x.clamp(0.0, field_width);
    }

    /// Ticks the shot cooldown; Some when a Shooter gets to fire an aimed
    /// bullet at the player this frame.
    pub fn try_fire(&mut self, player_x: f32, player_y: f32) -> Option<Bullet> {
        if self.kind != EnemyKind::Shooter {
            return None;
        }
        if self.shot_cooldown > 0 {
            self.shot_cooldown -= 1;
            return None;
        }
        self.shot_cooldown = SHOOTER_FIRE_INTERVAL;
        Some(Bullet::aimed(
            self.x,
            self.y + self.h / 2.0,
            player_x,
            player_y,
            ENEMY_BULLET_SPEED,
        ))
    }

    pub fn take_hit(&mut self) {
        self.hp = self.hp.saturating_sub(1);
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Score awarded when this enemy is destroyed.
    pub fn points(&self) -> u32 {
        match self.kind {
            EnemyKind::Small => 10,
            EnemyKind::Chaser => 15,
            EnemyKind::Zigzag => 15,
            EnemyKind::Shooter => 25,
            EnemyKind::Splitter => 20,
        }
    }

    pub fn is_below_field(&self, field_height: f32) -> bool {
        self.y - self.h / 2.0 > field_height + 2.0
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, self.w, self.h)
    }
}
