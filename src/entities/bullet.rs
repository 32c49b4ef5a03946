use super::hitbox::Hitbox;

/// A projectile with a fixed velocity vector. Player bullets live in the
/// player's own list, enemy and boss bullets in the world's list, so no
/// owner tag is needed.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub w: f32,
    pub h: f32,
}

impl Bullet {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            w: 1.0,
            h: 1.0,
        }
    }

    /// A bullet aimed from `(x, y)` at `(tx, ty)`, travelling at `speed`.
    /// Degenerates to straight down if the points coincide.
    pub fn aimed(x: f32, y: f32, tx: f32, ty: f32, speed: f32) -> Self {
        let dx = tx - x;
        let dy = ty - y;
        let len = (dx * dx + dy * dy).sqrt();
        if len < f32::EPSILON {
            Self::new(x, y, 0.0, speed)
        } else {
            Self::new(x, y, dx / len * speed, dy / len * speed)
        }
    }

    pub fn update(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }

    pub fn is_out_of_bounds(&self, field_width: f32, field_height: f32) -> bool {
        self.y < -2.0 || self.y > field_height + 2.0 || self.x < -2.0 || self.x > field_width + 2.0
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_moves_by_velocity() {
        let mut bullet = Bullet::new(10.0, 10.0, 0.5, -1.2);
        bullet.update();
        assert_eq!(bullet.x, 10.5);
        assert_eq!(bullet.y, 8.8);
    }

    #[test]
    fn test_aimed_bullet_normalizes_direction() {
        let bullet = Bullet::aimed(0.0, 0.0, 3.0, 4.0, 1.0);
        // Direction (3,4)/5 at speed 1
        assert!((bullet.vx - 0.6).abs() < 1e-6);
        assert!((bullet.vy - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_aimed_bullet_at_own_position_falls_straight() {
        let bullet = Bullet::aimed(5.0, 5.0, 5.0, 5.0, 0.9);
        assert_eq!(bullet.vx, 0.0);
        assert_eq!(bullet.vy, 0.9);
    }

    #[test]
    fn test_bullet_out_of_bounds() {
        let above = Bullet::new(10.0, -3.0, 0.0, -1.0);
        assert!(above.is_out_of_bounds(80.0, 30.0));

        let below = Bullet::new(10.0, 33.0, 0.0, 1.0);
        assert!(below.is_out_of_bounds(80.0, 30.0));

        let inside = Bullet::new(10.0, 10.0, 0.0, 1.0);
        assert!(!inside.is_out_of_bounds(80.0, 30.0));
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_aimed_bullet_speed_is_preserved(
                tx in -40.0f32..40.0,
                ty in -40.0f32..40.0,
                speed in 0.1f32..5.0
            ) {
                let bullet = Bullet::aimed(0.0, 0.0, tx, ty, speed);
                let magnitude = (bullet.vx * bullet.vx + bullet.vy * bullet.vy).sqrt();
                prop_assert!((magnitude - speed).abs() < 1e-3);
            }
        }
    }
}
