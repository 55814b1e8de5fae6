//! Ownership of camera input while the user interacts with an overlay.

use super::event::{EventFlow, OverlayEvent};
use crate::camera::CameraRig;

/// Tracks pointer presence and active touches over the overlay and keeps
/// the orbit controls disabled while either is present.
///
/// Controls are enabled exactly when `touches == 0 && !pointer_inside`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionLock {
    touches: u32,
    pointer_inside: bool,
}

impl InteractionLock {
    /// A lock that owns nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Active touch count.
    #[must_use]
    pub fn touches(&self) -> u32 {
        self.touches
    }

    /// Whether the mouse pointer is over the overlay.
    #[must_use]
    pub fn pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    /// Whether the orbit controls should currently accept input.
    #[must_use]
    pub fn controls_enabled(&self) -> bool {
        self.touches == 0 && !self.pointer_inside
    }

    /// Update the lock for `event` and push the resulting enabled state to
    /// the rig's orbit controls (if any).
    pub fn handle(&mut self, event: OverlayEvent, rig: &mut dyn CameraRig) -> EventFlow {
        match event {
            OverlayEvent::PointerEnter => self.pointer_inside = true,
            OverlayEvent::PointerLeave => {
                self.pointer_inside = false;
                self.touches = 0;
            }
            OverlayEvent::TouchStart => {
                self.touches = self.touches.saturating_add(1);
            }
            OverlayEvent::TouchEnd => {
                self.touches = self.touches.saturating_sub(1);
            }
            OverlayEvent::TouchCancel => self.touches = 0,
            OverlayEvent::Wheel { .. } => return EventFlow::Stop,
        }
        self.apply(rig);
        EventFlow::Continue
    }

    /// Give up all ownership and re-enable the controls.
    pub fn release(&mut self, rig: &mut dyn CameraRig) {
        if *self != Self::default() {
            log::debug!(
                "interaction lock released ({} touches, pointer inside: {})",
                self.touches,
                self.pointer_inside
            );
        }
        *self = Self::default();
        self.apply(rig);
    }

    fn apply(&self, rig: &mut dyn CameraRig) {
        let enabled = self.controls_enabled();
        if let Some(controls) = rig.controls_mut() {
            controls.set_enabled(enabled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{OrbitCamera, OrbitControls};
    use crate::options::CameraOptions;

    fn camera() -> OrbitCamera {
        OrbitCamera::new(&CameraOptions::default(), 1.0)
    }

    fn enabled(rig: &OrbitCamera) -> bool {
        OrbitControls::enabled(rig)
    }

    #[test]
    fn pointer_enter_and_leave() {
        let mut rig = camera();
        let mut lock = InteractionLock::new();

        assert_eq!(lock.handle(OverlayEvent::PointerEnter, &mut rig), EventFlow::Continue);
        assert!(!enabled(&rig));
        assert!(lock.pointer_inside());

        let _ = lock.handle(OverlayEvent::PointerLeave, &mut rig);
        assert!(enabled(&rig));
    }

    #[test]
    fn touch_end_never_underflows() {
        let mut rig = camera();
        let mut lock = InteractionLock::new();
        for _ in 0..3 {
            let _ = lock.handle(OverlayEvent::TouchEnd, &mut rig);
        }
        assert_eq!(lock.touches(), 0);
        assert!(enabled(&rig));

        let _ = lock.handle(OverlayEvent::TouchStart, &mut rig);
        assert_eq!(lock.touches(), 1);
        assert!(!enabled(&rig));
    }

    #[test]
    fn balanced_touches_re_enable() {
        let mut rig = camera();
        let mut lock = InteractionLock::new();
        for n in 1..=4 {
            for _ in 0..n {
                let _ = lock.handle(OverlayEvent::TouchStart, &mut rig);
            }
            for i in 0..n {
                assert!(!enabled(&rig), "still {} touches down", n - i);
                let _ = lock.handle(OverlayEvent::TouchEnd, &mut rig);
            }
            assert!(enabled(&rig));
            assert_eq!(lock.touches(), 0);
        }
    }

    #[test]
    fn touch_end_keeps_lock_while_pointer_inside() {
        let mut rig = camera();
        let mut lock = InteractionLock::new();
        let _ = lock.handle(OverlayEvent::PointerEnter, &mut rig);
        let _ = lock.handle(OverlayEvent::TouchStart, &mut rig);
        let _ = lock.handle(OverlayEvent::TouchEnd, &mut rig);
        assert!(!enabled(&rig));
        assert!(!lock.controls_enabled());
    }

    #[test]
    fn touch_cancel_clears_all_touches() {
        let mut rig = camera();
        let mut lock = InteractionLock::new();
        let _ = lock.handle(OverlayEvent::TouchStart, &mut rig);
        let _ = lock.handle(OverlayEvent::TouchStart, &mut rig);
        let _ = lock.handle(OverlayEvent::TouchCancel, &mut rig);
        assert_eq!(lock.touches(), 0);
        assert!(enabled(&rig));
    }

    #[test]
    fn pointer_leave_drops_stale_touches() {
        let mut rig = camera();
        let mut lock = InteractionLock::new();
        let _ = lock.handle(OverlayEvent::TouchStart, &mut rig);
        let _ = lock.handle(OverlayEvent::PointerLeave, &mut rig);
        assert_eq!(lock.touches(), 0);
        assert!(enabled(&rig));
    }

    #[test]
    fn wheel_is_consumed_without_state_change() {
        let mut rig = camera();
        let mut lock = InteractionLock::new();
        let _ = lock.handle(OverlayEvent::PointerEnter, &mut rig);
        let before = lock;
        assert_eq!(
            lock.handle(OverlayEvent::Wheel { delta: 3.0 }, &mut rig),
            EventFlow::Stop
        );
        assert_eq!(lock, before);
        assert!(!enabled(&rig));
    }

    #[test]
    fn release_re_enables() {
        let mut rig = camera();
        let mut lock = InteractionLock::new();
        let _ = lock.handle(OverlayEvent::PointerEnter, &mut rig);
        let _ = lock.handle(OverlayEvent::TouchStart, &mut rig);
        lock.release(&mut rig);
        assert!(enabled(&rig));
        assert_eq!(lock, InteractionLock::new());
    }
}
