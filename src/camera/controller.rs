use glam::{Mat3, Quat, Vec2, Vec3};

use super::core::Camera;
use super::rig::{CameraRig, OrbitControls};
use crate::options::CameraOptions;

/// Orbit camera: rotates, pans and zooms around a pivot while enabled.
///
/// The eye is always `pivot + orientation * +Z * distance`. Setting the eye
/// or pivot directly (as the focus animation does) and calling
/// [`OrbitControls::update`] re-derives orientation and distance from them.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Projection and pose.
    pub camera: Camera,
    orientation: Quat,
    distance: f32,
    enabled: bool,
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    min_distance: f32,
    max_distance: f32,
}

impl OrbitCamera {
    /// Camera at the configured default pose.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let camera = Camera {
            eye: Vec3::from_array(options.default_position),
            target: Vec3::from_array(options.default_target),
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };
        let mut orbit = Self {
            camera,
            orientation: Quat::IDENTITY,
            distance: 1.0,
            enabled: true,
            rotate_speed: options.rotate_speed * 0.01,
            pan_speed: options.pan_speed * 0.01,
            zoom_speed: options.zoom_speed,
            min_distance: options.min_distance,
            max_distance: options.max_distance,
        };
        orbit.sync_from_pose();
        orbit
    }

    /// Distance between eye and pivot.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Update the viewport aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.aspect = width as f32 / height.max(1) as f32;
    }

    /// Orbit around the pivot. Returns `false` (and does nothing) while the
    /// controls are disabled.
    pub fn rotate(&mut self, delta: Vec2) -> bool {
        if !self.enabled {
            return false;
        }
        // Horizontal rotation around camera's up vector
        let up = self.orientation * Vec3::Y;
        let horizontal = Quat::from_axis_angle(up, -delta.x * self.rotate_speed);
        self.orientation = horizontal * self.orientation;

        // Vertical rotation around camera's right vector (after horizontal
        // rotation)
        let right = self.orientation * Vec3::X;
        let vertical = Quat::from_axis_angle(right, -delta.y * self.rotate_speed);
        self.orientation = (vertical * self.orientation).normalize();

        self.update_camera_pos();
        true
    }

    /// Slide eye and pivot in the view plane.
    pub fn pan(&mut self, delta: Vec2) -> bool {
        if !self.enabled {
            return false;
        }
        let right = self.orientation * Vec3::X;
        let up = self.orientation * Vec3::Y;
        let scale = self.pan_speed * self.distance;
        self.camera.target += right * (-delta.x * scale) + up * (delta.y * scale);
        self.update_camera_pos();
        true
    }

    /// Dolly toward (`delta > 0`) or away from the pivot.
    pub fn zoom(&mut self, delta: f32) -> bool {
        if !self.enabled {
            return false;
        }
        self.distance = (self.distance * (1.0 - delta * self.zoom_speed))
            .clamp(self.min_distance, self.max_distance);
        self.update_camera_pos();
        true
    }

    fn update_camera_pos(&mut self) {
        let dir = self.orientation * Vec3::Z;
        self.camera.eye = self.camera.target + dir * self.distance;
        self.camera.up = self.orientation * Vec3::Y;
    }

    /// Re-derive orientation and distance from the current eye and pivot.
    fn sync_from_pose(&mut self) {
        let offset = self.camera.eye - self.camera.target;
        let distance = offset.length();
        if distance < 1e-6 {
            return;
        }
        let back = offset / distance;

        let mut right = Vec3::Y.cross(back);
        if right.length_squared() < 1e-8 {
            // Looking straight up or down: keep the previous roll.
            let prev = self.orientation * Vec3::X;
            right = prev - back * prev.dot(back);
        }
        let right = right.try_normalize().unwrap_or_else(|| back.any_orthonormal_vector());
        let up = back.cross(right);

        self.orientation = Quat::from_mat3(&Mat3::from_cols(right, up, back)).normalize();
        self.distance = distance;
        self.camera.up = up;
    }
}

impl OrbitControls for OrbitCamera {
    fn target(&self) -> Vec3 {
        self.camera.target
    }

    fn set_target(&mut self, target: Vec3) {
        self.camera.target = target;
    }

    fn update(&mut self) {
        self.sync_from_pose();
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            log::debug!("orbit controls {}", if enabled { "enabled" } else { "disabled" });
        }
        self.enabled = enabled;
    }
}

impl CameraRig for OrbitCamera {
    fn position(&self) -> Vec3 {
        self.camera.eye
    }

    fn set_position(&mut self, position: Vec3) {
        self.camera.eye = position;
    }

    fn forward(&self) -> Vec3 {
        self.camera.forward()
    }

    fn up(&self) -> Vec3 {
        self.camera.up
    }

    fn look_at(&mut self, target: Vec3) {
        self.camera.target = target;
        self.sync_from_pose();
    }

    fn controls(&self) -> Option<&dyn OrbitControls> {
        Some(self)
    }

    fn controls_mut(&mut self) -> Option<&mut dyn OrbitControls> {
        Some(self)
    }
}
