use super::bullet::Bullet;
use super::hitbox::Hitbox;

const BOSS_HP: u16 = 60;
const BOSS_TARGET_Y: f32 = 5.0;
const BOSS_DESCENT_SPEED: f32 = 0.1;
const ESCORT_INTERVAL: u16 = 180;
const VOLLEY_INTERVAL: u16 = 90;
const VOLLEY_BULLET_SPEED: f32 = 0.7;

/// The single large enemy. While descending into view it is exempt from the
/// out-of-bounds removal rule; once in position it drifts laterally on a sine
/// of its internal timer and runs escort/volley schedules.
#[derive(Debug, Clone)]
pub struct Boss {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub hp: u16,
    pub max_hp: u16,
    /// Still descending into view
    pub entering: bool,
    phase: f32,
    escort_timer: u16,
    volley_timer: u16,
}

impl Boss {
    pub fn new(field_width: f32) -> Self {
        Self {
            x: field_width / 2.0,
            y: -4.0,
            w: 16.0,
            h: 5.0,
            hp: BOSS_HP,
            max_hp: BOSS_HP,
            entering: true,
            phase: 0.0,
            escort_timer: ESCORT_INTERVAL,
            volley_timer: VOLLEY_INTERVAL,
        }
    }

    pub fn advance(&mut self, field_width: f32) {
        if self.entering {
            self.y += BOSS_DESCENT_SPEED;
            if self.y >= BOSS_TARGET_Y {
                self.y = BOSS_TARGET_Y;
                self.entering = false;
            }
            return;
        }
        self.phase += 1.0;
        let sweep = field_width / 3.0;
        self.x = field_width / 2.0 + (self.phase * 0.015).sin() * sweep;
    }

    /// True when the escort schedule fires this frame. Not ticked while the
    /// boss is still descending.
    pub fn escorts_due(&mut self) -> bool {
        if self.entering {
            return false;
        }
        if self.escort_timer > 0 {
            self.escort_timer -= 1;
            return false;
        }
        self.escort_timer = ESCORT_INTERVAL;
        true
    }

    /// Some with a three-bullet aimed volley when the volley schedule fires.
    pub fn try_volley(&mut self, player_x: f32, player_y: f32) -> Option<Vec<Bullet>> {
        if self.entering {
            return None;
        }
        if self.volley_timer > 0 {
            self.volley_timer -= 1;
            return None;
        }
        self.volley_timer = VOLLEY_INTERVAL;

        let origin_y = self.y + self.h / 2.0;
        let center = Bullet::aimed(self.x, origin_y, player_x, player_y, VOLLEY_BULLET_SPEED);
        let mut left = center.clone();
        left.vx -= 0.25;
        let mut right = center.clone();
        right.vx += 0.25;
        Some(vec![left, center, right])
    }

    pub fn take_hit(&mut self) {
        self.hp = self.hp.saturating_sub(1);
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, self.w, self.h)
    }
}
