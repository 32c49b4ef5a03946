use super::bullet::Bullet;

const ORBIT_RADIUS: f32 = 6.0;
const ORBIT_STEP: f32 = 0.08;
const DRONE_FIRE_INTERVAL: u16 = 45;
const DRONE_BULLET_SPEED: f32 = -1.2;

/// A small helper ship that orbits the player and fires upward on its own
/// cooldown. Picked up from the `Drone` power-up.
#[derive(Debug, Clone)]
pub struct Drone {
    pub angle: f32,
    pub fire_cooldown: u16,
}

impl Drone {
    /// `index` staggers the starting angle so two drones sit opposite each
    /// other instead of stacking.
    pub fn new(index: usize) -> Self {
        Self {
            angle: index as f32 * std::f32::consts::PI,
            fire_cooldown: DRONE_FIRE_INTERVAL,
        }
    }

    pub fn advance(&mut self) {
        self.angle += ORBIT_STEP;
    }

    /// Current position relative to the player it orbits.
    pub fn position(&self, player_x: f32, player_y: f32) -> (f32, f32) {
        (
            player_x + self.angle.cos() * ORBIT_RADIUS,
            player_y + self.angle.sin() * ORBIT_RADIUS,
        )
    }

    pub fn try_fire(&mut self, player_x: f32, player_y: f32) -> Option<Bullet> {
        if self.fire_cooldown > 0 {
            self.fire_cooldown -= 1;
            return None;
        }
        self.fire_cooldown = DRONE_FIRE_INTERVAL;
        let (x, y) = self.position(player_x, player_y);
        Some(Bullet::new(x, y, 0.0, DRONE_BULLET_SPEED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drone_orbits_at_fixed_radius() {
        let mut drone = Drone::new(0);
        for _ in 0..100 {
            drone.advance();
            let (x, y) = drone.position(40.0, 25.0);
            let dist = ((x - 40.0).powi(2) + (y - 25.0).powi(2)).sqrt();
            assert!((dist - ORBIT_RADIUS).abs() < 1e-3);
        }
    }

    #[test]
    fn test_two_drones_start_opposed() {
        let a = Drone::new(0);
        let b = Drone::new(1);
        let (ax, _) = a.position(0.0, 0.0);
        let (bx, _) = b.position(0.0, 0.0);
        assert!((ax + bx).abs() < 1e-3);
    }

    #[test]
    fn test_drone_fires_on_interval() {
        let mut drone = Drone::new(0);
        let mut shots = 0;
        for _ in 0..(DRONE_FIRE_INTERVAL * 2 + 2) {
            drone.advance();
            if drone.try_fire(40.0, 25.0).is_some() {
                shots += 1;
            }
        }
        assert_eq!(shots, 2);
    }

    #[test]
    fn test_drone_bullets_go_up() {
        let mut drone = Drone::new(0);
        drone.fire_cooldown = 0;
        let bullet = drone.try_fire(40.0, 25.0).expect("cooldown elapsed");
        assert!(bullet.vy < 0.0);
    }
}
