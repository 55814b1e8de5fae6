//! Camera system for 3D scene viewing.
//!
//! Provides the rig/controls traits the focus and lock logic drive, plus an
//! orbit camera implementing them.

/// Orbit camera controller managing rotation, pan and zoom.
pub mod controller;
/// Core camera struct: pose, projection and picking rays.
pub mod core;
/// Camera rig and orbit-control traits.
pub mod rig;

pub use controller::OrbitCamera;
pub use rig::{CameraRig, OrbitControls};
