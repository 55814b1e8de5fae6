//! Camera flight animation: easing curves, tweens and the focus animator.

pub mod easing;
pub mod focus;
pub mod tween;

pub use easing::EasingFunction;
pub use focus::{framing_direction, FocusAnimator, FramingSource};
pub use tween::{CameraTween, FocusPose};
