/// Axis-aligned bounding box around a center point. Every collidable entity
/// reports one of these; no rotation is modeled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    /// Center X
    pub x: f32,
    /// Center Y
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Hitbox {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Two boxes overlap iff the distance between centers is less than half
    /// the summed sizes on both axes.
    pub fn intersects(&self, other: &Hitbox) -> bool {
        (self.x - other.x).abs() < (self.w + other.w) / 2.0
            && (self.y - other.y).abs() < (self.h + other.h) / 2.0
    }
}
