use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::geometry::Ray;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        self.build_projection() * view
    }

    /// Projection matrix alone.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // [0,1] depth range
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Unit vector from eye toward target (`-Z` if they coincide).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        let dir = self.target - self.eye;
        if dir.length_squared() < 1e-12 {
            Vec3::NEG_Z
        } else {
            dir.normalize()
        }
    }

    /// Picking ray through a point in normalized device coordinates
    /// (`x`, `y` in `[-1, 1]`, `+y` up).
    #[must_use]
    pub fn ray_through(&self, ndc: Vec2) -> Ray {
        let inv = self.build_matrix().inverse();
        let unproject = |depth: f32| {
            let p = inv * Vec4::new(ndc.x, ndc.y, depth, 1.0);
            p.truncate() / p.w
        };
        let near = unproject(0.0);
        let far = unproject(1.0);
        Ray::new(near, far - near)
    }

    /// Picking ray through a pixel of a `width` × `height` viewport
    /// (origin top-left).
    #[must_use]
    pub fn ray_through_pixel(&self, x: f32, y: f32, width: f32, height: f32) -> Ray {
        let ndc = Vec2::new(
            2.0 * x / width.max(1.0) - 1.0,
            1.0 - 2.0 * y / height.max(1.0),
        );
        self.ray_through(ndc)
    }
}
