/// Purely cosmetic debris spawned on hits and explosions.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub lifetime: u8,
    pub glyph: char,
}

impl Particle {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32, lifetime: u8, glyph: char) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            lifetime,
            glyph,
        }
    }

    pub fn update(&mut self) {
        if self.lifetime > 0 {
            self.lifetime -= 1;
        }
        self.x += self.vx;
        self.y += self.vy;
    }

    pub fn is_dead(&self) -> bool {
        self.lifetime == 0
    }
}

/// A full explosion burst at the given position: eight directions plus a
/// brief central flash.
pub fn explosion_burst(center_x: f32, center_y: f32) -> Vec<Particle> {
    let directions = [
        (0.0, -1.0),
        (0.7, -0.7),
        (1.0, 0.0),
        (0.7, 0.7),
        (0.0, 1.0),
        (-0.7, 0.7),
        (-1.0, 0.0),
        (-0.7, -0.7),
    ];

    let mut particles: Vec<Particle> = directions
        .iter()
        .map(|&(dx, dy)| Particle::new(center_x, center_y, dx, dy, 6, '*'))
        .collect();
    particles.push(Particle::new(center_x, center_y, 0.0, 0.0, 4, 'o'));
    particles
}

/// A smaller burst for a non-lethal bullet hit.
pub fn hit_sparks(center_x: f32, center_y: f32) -> Vec<Particle> {
    [(0.5, -0.5), (-0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)]
        .iter()
        .map(|&(dx, dy)| Particle::new(center_x, center_y, dx, dy, 4, '.'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_moves_and_ages() {
        let mut particle = Particle::new(10.0, 10.0, 1.0, -0.5, 5, '*');
        particle.update();
        assert_eq!(particle.x, 11.0);
        assert_eq!(particle.y, 9.5);
        assert_eq!(particle.lifetime, 4);
    }

    #[test]
    fn test_particle_dies_when_lifetime_expires() {
        let mut particle = Particle::new(10.0, 10.0, 0.0, 0.0, 2, '*');
        assert!(!particle.is_dead());
        particle.update();
        particle.update();
        assert!(particle.is_dead());
    }

    #[test]
    fn test_explosion_burst_shape() {
        let particles = explosion_burst(10.0, 10.0);
        // 8 directions plus the central flash
        assert_eq!(particles.len(), 9);
        for particle in &particles {
            assert_eq!(particle.x, 10.0);
            assert_eq!(particle.y, 10.0);
        }
    }

    #[test]
    fn test_hit_sparks_are_smaller_than_explosions() {
        assert!(hit_sparks(0.0, 0.0).len() < explosion_burst(0.0, 0.0).len());
    }
}
