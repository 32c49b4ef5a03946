use super::hitbox::Hitbox;

const FALL_SPEED: f32 = 0.15;

/// The fixed set of pickup effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    Shield,
    RapidFire,
    SpreadShot,
    /// Clears every enemy on screen
    Bomb,
    Drone,
    ExtraLife,
    /// Suspends enemy motion and firing for a while
    Freeze,
    ScoreBonus,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 8] = [
        PowerUpKind::Shield,
        PowerUpKind::RapidFire,
        PowerUpKind::SpreadShot,
        PowerUpKind::Bomb,
        PowerUpKind::Drone,
        PowerUpKind::ExtraLife,
        PowerUpKind::Freeze,
        PowerUpKind::ScoreBonus,
    ];
}

#[derive(Debug, Clone)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn new(x: f32, y: f32, kind: PowerUpKind) -> Self {
        Self {
            x,
            y,
            w: 1.0,
            h: 1.0,
            kind,
        }
    }

    pub fn update(&mut self) {
        self.y += FALL_SPEED;
    }

    pub fn is_below_field(&self, field_height: f32) -> bool {
        self.y > field_height + 2.0
    }

    pub fn glyph(&self) -> char {
        match self.kind {
            PowerUpKind::Shield => 'S',
            PowerUpKind::RapidFire => 'R',
            PowerUpKind::SpreadShot => 'W',
            PowerUpKind::Bomb => 'B',
            PowerUpKind::Drone => 'D',
            PowerUpKind::ExtraLife => '+',
            PowerUpKind::Freeze => 'F',
            PowerUpKind::ScoreBonus => '$',
        }
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, self.w, self.h)
    }
}
