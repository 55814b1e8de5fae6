//! A single camera flight between two poses.

use std::time::Duration;

use glam::Vec3;
use web_time::Instant;

use super::easing::EasingFunction;

/// Eye position plus the point the camera looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Look target in world space.
    pub target: Vec3,
}

impl FocusPose {
    /// Pose from an eye position and a look target.
    #[must_use]
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Componentwise linear interpolation between two poses.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            target: self.target.lerp(other.target, t),
        }
    }
}

/// Interpolates eye and look target from a start pose to an end pose.
///
/// A tween is inert data: it never touches the camera, it only answers
/// "where should the camera be at `now`".
#[derive(Debug, Clone)]
pub struct CameraTween {
    start: FocusPose,
    end: FocusPose,
    start_time: Instant,
    duration: Duration,
    easing: EasingFunction,
}

impl CameraTween {
    /// Tween with the default quadratic ease-in-out.
    #[must_use]
    pub fn new(
        start: FocusPose,
        end: FocusPose,
        start_time: Instant,
        duration: Duration,
    ) -> Self {
        Self {
            start,
            end,
            start_time,
            duration,
            easing: EasingFunction::DEFAULT,
        }
    }

    /// Pose the tween departs from.
    #[must_use]
    pub fn start(&self) -> FocusPose {
        self.start
    }

    /// Pose the tween arrives at.
    #[must_use]
    pub fn end(&self) -> FocusPose {
        self.end
    }

    /// Total length.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Raw progress in [0, 1]. A zero-length tween is always complete.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Whether the tween has reached its end pose at `now`.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Eased pose at `now`.
    #[must_use]
    pub fn sample(&self, now: Instant) -> FocusPose {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.end;
        }
        self.start.lerp(&self.end, self.easing.evaluate(t))
    }
}
