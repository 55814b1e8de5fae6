use glam::Vec3;

/// Half-line used for pointer picking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point in world space.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray; `direction` is normalized (a zero direction stays zero
    /// and never hits anything).
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
