//! Camera focus: framing a screen and flying the camera to it and back.

use std::time::Duration;

use glam::Vec3;
use web_time::Instant;

use super::tween::{CameraTween, FocusPose};
use crate::camera::CameraRig;
use crate::options::{CameraOptions, FocusOptions};

/// Which vector the framing direction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramingSource {
    /// From the camera toward the object center.
    TowardCenter,
    /// Camera sits on the center; its view direction was used.
    CameraForward,
    /// Both of the above were degenerate; world -Z was used.
    NegativeZ,
}

/// Unit direction the camera should look along to frame `center`.
#[must_use]
pub fn framing_direction(
    center: Vec3,
    camera_position: Vec3,
    camera_forward: Vec3,
) -> (Vec3, FramingSource) {
    if let Some(dir) = (center - camera_position).try_normalize() {
        return (dir, FramingSource::TowardCenter);
    }
    if let Some(dir) = camera_forward.try_normalize() {
        return (dir, FramingSource::CameraForward);
    }
    (Vec3::NEG_Z, FramingSource::NegativeZ)
}

impl FocusPose {
    /// Pose that frames an object: backed off from `center` along the
    /// current approach direction by a distance proportional to its
    /// bounding diagonal, looking at the center.
    #[must_use]
    pub fn framing(
        center: Vec3,
        diagonal: f32,
        camera_position: Vec3,
        camera_forward: Vec3,
        options: &FocusOptions,
    ) -> Self {
        let (dir, _) = framing_direction(center, camera_position, camera_forward);
        let distance = options.framing_distance(diagonal);
        let position = center - dir * distance + Vec3::from_array(options.offset);
        Self::new(position, center)
    }

    /// The configured home pose.
    #[must_use]
    pub fn home(options: &CameraOptions) -> Self {
        Self::new(
            Vec3::from_array(options.default_position),
            Vec3::from_array(options.default_target),
        )
    }
}

/// Drives at most one camera tween at a time.
///
/// Starting a new flight captures the camera's live pose, so interrupting
/// a flight in progress never makes the camera jump.
#[derive(Debug, Clone)]
pub struct FocusAnimator {
    tween: Option<CameraTween>,
    home: FocusPose,
    reset_duration: Duration,
}

impl FocusAnimator {
    /// Animator that returns to `home` over `reset_duration`.
    #[must_use]
    pub fn new(home: FocusPose, reset_duration: Duration) -> Self {
        Self {
            tween: None,
            home,
            reset_duration,
        }
    }

    /// Animator configured from options.
    #[must_use]
    pub fn from_options(camera: &CameraOptions, focus: &FocusOptions) -> Self {
        Self::new(FocusPose::home(camera), focus.reset_duration())
    }

    /// Home pose used by [`reset`](Self::reset).
    #[must_use]
    pub fn home(&self) -> FocusPose {
        self.home
    }

    /// Whether a tween is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// The in-flight tween, if any.
    #[must_use]
    pub fn tween(&self) -> Option<&CameraTween> {
        self.tween.as_ref()
    }

    /// Fly from the camera's live pose to `end`. Replaces any tween in
    /// flight.
    pub fn focus(
        &mut self,
        rig: &dyn CameraRig,
        end: FocusPose,
        duration: Duration,
        now: Instant,
    ) {
        let start = FocusPose::new(rig.position(), rig.look_target());
        if self.tween.is_some() {
            log::debug!("camera tween interrupted");
        }
        self.tween = Some(CameraTween::new(start, end, now, duration));
    }

    /// Fly back to the home pose.
    pub fn reset(&mut self, rig: &dyn CameraRig, now: Instant) {
        self.focus(rig, self.home, self.reset_duration, now);
    }

    /// Drop the tween in flight, leaving the camera where it is.
    pub fn cancel(&mut self) {
        self.tween = None;
    }

    /// Apply the tween's pose at `now` to the camera. Returns `true` while
    /// the tween is still running.
    pub fn tick(&mut self, rig: &mut dyn CameraRig, now: Instant) -> bool {
        let Some(tween) = &self.tween else {
            return false;
        };
        let pose = tween.sample(now);
        let done = tween.is_complete(now);

        rig.set_position(pose.position);
        rig.aim(pose.target);

        if done {
            self.tween = None;
        }
        !done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{OrbitCamera, OrbitControls};

    /// A rig with no orbit controls.
    struct FixedCamera {
        position: Vec3,
        looking_at: Vec3,
    }

    impl CameraRig for FixedCamera {
        fn position(&self) -> Vec3 {
            self.position
        }

        fn set_position(&mut self, position: Vec3) {
            self.position = position;
        }

        fn forward(&self) -> Vec3 {
            (self.looking_at - self.position).normalize_or_zero()
        }

        fn up(&self) -> Vec3 {
            Vec3::Y
        }

        fn look_at(&mut self, target: Vec3) {
            self.looking_at = target;
        }

        fn controls(&self) -> Option<&dyn OrbitControls> {
            None
        }

        fn controls_mut(&mut self) -> Option<&mut dyn OrbitControls> {
            None
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn framing_direction_outcomes() {
        let (dir, source) = framing_direction(Vec3::new(0.0, 0.0, -3.0), Vec3::ZERO, Vec3::X);
        assert_eq!(source, FramingSource::TowardCenter);
        assert!(approx(dir, Vec3::NEG_Z));

        let (dir, source) = framing_direction(Vec3::ONE, Vec3::ONE, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(source, FramingSource::CameraForward);
        assert!(approx(dir, Vec3::X));

        let (dir, source) = framing_direction(Vec3::ONE, Vec3::ONE, Vec3::ZERO);
        assert_eq!(source, FramingSource::NegativeZ);
        assert_eq!(dir, Vec3::NEG_Z);
    }

    #[test]
    fn unit_diagonal_frames_at_distance_two() {
        let options = FocusOptions::default();
        let center = Vec3::new(0.0, 1.0, -2.0);
        let pose = FocusPose::framing(center, 1.0, Vec3::new(0.0, 1.0, 2.0), Vec3::NEG_Z, &options);
        assert!(approx(pose.position, Vec3::new(0.0, 1.0, 0.0)));
        assert_eq!(pose.target, center);
    }

    #[test]
    fn small_objects_use_distance_floor() {
        let options = FocusOptions::default();
        let pose = FocusPose::framing(Vec3::ZERO, 0.1, Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, &options);
        assert!(approx(pose.position, Vec3::new(0.0, 0.0, 0.6)));
    }

    #[test]
    fn framing_offset_is_added() {
        let options = FocusOptions {
            offset: [0.0, 0.25, 0.0],
            ..FocusOptions::default()
        };
        let pose = FocusPose::framing(Vec3::ZERO, 1.0, Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, &options);
        assert!(approx(pose.position, Vec3::new(0.0, 0.25, 2.0)));
    }

    #[test]
    fn camera_on_center_backs_off_along_forward() {
        let options = FocusOptions::default();
        let pose = FocusPose::framing(Vec3::ZERO, 1.0, Vec3::ZERO, Vec3::NEG_Z, &options);
        assert!(approx(pose.position, Vec3::new(0.0, 0.0, 2.0)));
    }

    #[test]
    fn tick_without_controls_uses_look_at() {
        let mut rig = FixedCamera {
            position: Vec3::new(0.0, 0.0, 5.0),
            looking_at: Vec3::ZERO,
        };
        let mut animator = FocusAnimator::new(FocusPose::new(Vec3::ZERO, Vec3::NEG_Z), ms(100));
        let t0 = Instant::now();
        let end = FocusPose::new(Vec3::new(1.0, 0.0, 3.0), Vec3::new(1.0, 0.0, 0.0));
        animator.focus(&rig, end, ms(100), t0);

        assert!(animator.tick(&mut rig, t0 + ms(50)));
        assert!(!approx(rig.position, end.position));

        assert!(!animator.tick(&mut rig, t0 + ms(100)));
        assert!(approx(rig.position, end.position));
        assert!(approx(rig.looking_at, end.target));
        assert!(!animator.is_animating());
        assert!(!animator.tick(&mut rig, t0 + ms(200)));
    }

    #[test]
    fn tick_with_controls_moves_the_pivot() {
        let options = CameraOptions::default();
        let mut rig = OrbitCamera::new(&options, 1.0);
        let mut animator = FocusAnimator::from_options(&options, &FocusOptions::default());
        let t0 = Instant::now();
        let end = FocusPose::new(Vec3::new(0.0, 1.0, 1.0), Vec3::new(0.0, 1.0, -1.0));
        animator.focus(&rig, end, ms(100), t0);
        assert!(!animator.tick(&mut rig, t0 + ms(150)));

        assert!(approx(rig.position(), end.position));
        assert!(approx(OrbitControls::target(&rig), end.target));
        assert!(approx(rig.forward(), Vec3::NEG_Z));
    }

    #[test]
    fn interrupting_is_continuous() {
        let mut rig = FixedCamera {
            position: Vec3::new(0.0, 0.0, 5.0),
            looking_at: Vec3::ZERO,
        };
        let mut animator = FocusAnimator::new(FocusPose::new(Vec3::ZERO, Vec3::NEG_Z), ms(100));
        let t0 = Instant::now();
        animator.focus(
            &rig,
            FocusPose::new(Vec3::new(4.0, 0.0, 5.0), Vec3::new(4.0, 0.0, 0.0)),
            ms(100),
            t0,
        );
        let _ = animator.tick(&mut rig, t0 + ms(40));
        let before = (rig.position, rig.looking_at);

        let t1 = t0 + ms(40);
        animator.focus(
            &rig,
            FocusPose::new(Vec3::new(-4.0, 0.0, 5.0), Vec3::new(-4.0, 0.0, 0.0)),
            ms(100),
            t1,
        );
        assert!(animator.tick(&mut rig, t1));
        assert!(approx(rig.position, before.0));
        assert!(approx(rig.looking_at, before.1));

        // A small step later the camera has barely moved.
        let _ = animator.tick(&mut rig, t1 + ms(1));
        assert!((rig.position - before.0).length() < 0.01);
    }

    #[test]
    fn reset_returns_home() {
        let options = CameraOptions::default();
        let home = FocusPose::home(&options);
        let mut rig = FixedCamera {
            position: Vec3::new(0.0, 0.5, -1.0),
            looking_at: Vec3::new(0.0, 0.5, -2.0),
        };
        let mut animator = FocusAnimator::from_options(&options, &FocusOptions::default());
        let t0 = Instant::now();
        animator.reset(&rig, t0);
        assert_eq!(animator.tween().map(CameraTween::duration), Some(ms(500)));
        assert!(!animator.tick(&mut rig, t0 + ms(500)));
        assert!(approx(rig.position, home.position));
        assert!(approx(rig.looking_at, home.target));
    }

    #[test]
    fn cancel_leaves_camera_in_place() {
        let mut rig = FixedCamera {
            position: Vec3::new(0.0, 0.0, 5.0),
            looking_at: Vec3::ZERO,
        };
        let mut animator = FocusAnimator::new(FocusPose::new(Vec3::ZERO, Vec3::NEG_Z), ms(100));
        let t0 = Instant::now();
        animator.reset(&rig, t0);
        animator.cancel();
        assert!(!animator.tick(&mut rig, t0 + ms(50)));
        assert_eq!(rig.position, Vec3::new(0.0, 0.0, 5.0));
    }
}
