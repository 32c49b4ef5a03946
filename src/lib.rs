// Library exports for the binary and the integration tests
pub use entities::{
    Boss, Bullet, Drone, Enemy, EnemyKind, Hitbox, Particle, Player, PowerUp, PowerUpKind,
};
pub use world::{COUNTDOWN_FRAMES, GameEvent, GameState, SoundEffect, TickInput, World};

pub mod app;
pub mod audio;
pub mod entities;
pub mod input;
pub mod renderer;
pub mod score;
pub mod world;
