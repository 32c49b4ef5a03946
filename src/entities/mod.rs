mod boss;
mod bullet;
mod drone;
mod enemy;
mod hitbox;
mod particle;
mod player;
mod powerup;

// Re-export all public types
pub use boss::Boss;
pub use bullet::Bullet;
pub use drone::Drone;
pub use enemy::{Enemy, EnemyKind};
pub use hitbox::Hitbox;
pub use particle::{Particle, explosion_burst, hit_sparks};
pub use player::Player;
pub use powerup::{PowerUp, PowerUpKind};
