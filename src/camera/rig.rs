//! The seam between focus/lock logic and whatever drives the camera.

use glam::Vec3;

use crate::geometry::CameraFrame;

/// Orbit-style camera controls: a pivot target, a commit step, and an
/// enabled flag that gates user input.
pub trait OrbitControls {
    /// Current orbit pivot.
    fn target(&self) -> Vec3;

    /// Move the orbit pivot. Takes effect on [`update`](Self::update).
    fn set_target(&mut self, target: Vec3);

    /// Commit pending changes (re-aim the camera at the pivot).
    fn update(&mut self);

    /// Whether user input currently drives the camera.
    fn enabled(&self) -> bool;

    /// Enable or disable user input.
    fn set_enabled(&mut self, enabled: bool);
}

/// A camera that can be moved and aimed, optionally carrying orbit
/// controls.
pub trait CameraRig {
    /// Eye position in world space.
    fn position(&self) -> Vec3;

    /// Move the eye.
    fn set_position(&mut self, position: Vec3);

    /// Unit view direction.
    fn forward(&self) -> Vec3;

    /// Camera up vector in world space.
    fn up(&self) -> Vec3;

    /// Aim the camera at a world point directly (used when there are no
    /// orbit controls).
    fn look_at(&mut self, target: Vec3);

    /// Orbit controls, if this rig has any.
    fn controls(&self) -> Option<&dyn OrbitControls>;

    /// Mutable orbit controls, if this rig has any.
    fn controls_mut(&mut self) -> Option<&mut dyn OrbitControls>;

    /// Live look target: the orbit pivot when present, otherwise one unit
    /// along the view direction.
    fn look_target(&self) -> Vec3 {
        self.controls().map_or_else(
            || self.position() + self.forward(),
            OrbitControls::target,
        )
    }

    /// Aim at `target`, through the orbit controls when present.
    fn aim(&mut self, target: Vec3) {
        if let Some(controls) = self.controls_mut() {
            controls.set_target(target);
            controls.update();
        } else {
            self.look_at(target);
        }
    }

    /// Position and up vector, as consumed by basis derivation.
    fn frame(&self) -> CameraFrame {
        CameraFrame::new(self.position(), self.up())
    }
}
