use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, orbit control, and default (home) pose parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Pan sensitivity multiplier.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub pan_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Closest the orbit camera may dolly to its pivot.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest the orbit camera may dolly from its pivot.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Eye position of the home view (also the reset-animation end).
    #[schemars(skip)]
    pub default_position: [f32; 3],
    /// Look target of the home view.
    #[schemars(skip)]
    pub default_target: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.05,
            zfar: 200.0,
            rotate_speed: 0.5,
            pan_speed: 0.5,
            zoom_speed: 0.1,
            min_distance: 0.3,
            max_distance: 30.0,
            default_position: [2.6, 1.9, 3.4],
            default_target: [0.0, 1.1, 0.0],
        }
    }
}
