use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::engine::FocusTarget;
use crate::geometry::HitPlaneTweak;

/// Binds one focus target to a mesh in the loaded model.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct ScreenBinding {
    /// Name of the mesh acting as this screen.
    pub mesh: String,
    /// Panel header shown while focused.
    pub title: String,
    /// Hit-plane adjustments for this mesh.
    pub tweak: HitPlaneTweak,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Screens", inline)]
#[serde(default)]
/// The two interactive screens.
pub struct ScreenOptions {
    /// Left screen.
    pub left: ScreenBinding,
    /// Right screen.
    pub right: ScreenBinding,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            left: ScreenBinding {
                mesh: "ScreenLeft".into(),
                title: "Blockchain".into(),
                tweak: HitPlaneTweak::default(),
            },
            right: ScreenBinding {
                mesh: "ScreenRight".into(),
                title: "Hacking".into(),
                tweak: HitPlaneTweak::default(),
            },
        }
    }
}

impl ScreenOptions {
    /// Binding for a focus target.
    #[must_use]
    pub fn binding(&self, target: FocusTarget) -> &ScreenBinding {
        match target {
            FocusTarget::Left => &self.left,
            FocusTarget::Right => &self.right,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Overlay", inline)]
#[serde(default)]
/// Placement of focused overlay content relative to the screen basis.
pub struct OverlayOptions {
    /// Lift of the backing image plane along the screen normal.
    #[schemars(skip)]
    pub image_lift: f32,
    /// Lift of the interactive content plane along the screen normal.
    #[schemars(skip)]
    pub content_lift: f32,
    /// Scale applied to content laid out in pixels.
    #[schemars(title = "Content Scale", range(min = 0.5, max = 3.0), extend("step" = 0.05))]
    pub distance_factor: f32,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            image_lift: 0.005,
            content_lift: 0.02,
            distance_factor: 1.3,
        }
    }
}
