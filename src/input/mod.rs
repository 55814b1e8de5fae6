//! Overlay input: event types and the lock that keeps the orbit controls
//! out of the way while the user works inside an overlay.

/// Platform-agnostic overlay events.
pub mod event;
/// Pointer/touch ownership of the camera controls.
pub mod lock;

pub use event::{EventFlow, OverlayEvent};
pub use lock::InteractionLock;
