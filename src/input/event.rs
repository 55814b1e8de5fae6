/// Platform-agnostic events raised on the focused screen's overlay.
///
/// These are fed into an [`InteractionLock`](super::InteractionLock), which
/// decides whether the orbit controls may keep driving the camera.
///
/// # Example
///
/// ```ignore
/// let flow = lock.handle(OverlayEvent::TouchStart, &mut camera);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayEvent {
    /// Mouse pointer entered the overlay.
    PointerEnter,
    /// Mouse pointer left the overlay.
    PointerLeave,
    /// A finger touched the overlay.
    TouchStart,
    /// A finger lifted off the overlay.
    TouchEnd,
    /// The platform cancelled all touches on the overlay.
    TouchCancel,
    /// Scroll wheel over the overlay.
    Wheel {
        /// Scroll amount (positive = down/away).
        delta: f32,
    },
}

/// Whether an event may continue on to the scene behind the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFlow {
    /// Let the event propagate.
    Continue,
    /// The overlay consumed the event.
    Stop,
}
