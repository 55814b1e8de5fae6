use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Focus", inline)]
#[serde(default)]
/// Camera focus animation timing and framing.
pub struct FocusOptions {
    /// Duration of the fly-to-screen animation, in milliseconds.
    #[schemars(title = "Focus Duration", range(min = 120, max = 3000), extend("step" = 10))]
    pub focus_duration_ms: u64,
    /// Duration of the return-to-home animation, in milliseconds.
    #[schemars(title = "Reset Duration", range(min = 0, max = 3000), extend("step" = 10))]
    pub reset_duration_ms: u64,
    /// Lower bound applied to the focus duration.
    #[schemars(skip)]
    pub min_duration_ms: u64,
    /// Framing distance per unit of bounding-box diagonal.
    #[schemars(title = "Framing Scale", range(min = 0.5, max = 5.0), extend("step" = 0.1))]
    pub distance_scale: f32,
    /// Framing distance floor, so small objects are not over-zoomed.
    #[schemars(skip)]
    pub min_distance: f32,
    /// World-space fine adjustment added to the framed eye position.
    #[schemars(skip)]
    pub offset: [f32; 3],
}

impl Default for FocusOptions {
    fn default() -> Self {
        Self {
            focus_duration_ms: 650,
            reset_duration_ms: 500,
            min_duration_ms: 120,
            distance_scale: 2.0,
            min_distance: 0.6,
            offset: [0.0; 3],
        }
    }
}

impl FocusOptions {
    /// Focus animation length, floored at `min_duration_ms`.
    #[must_use]
    pub fn focus_duration(&self) -> Duration {
        Duration::from_millis(self.focus_duration_ms.max(self.min_duration_ms))
    }

    /// Reset animation length.
    #[must_use]
    pub fn reset_duration(&self) -> Duration {
        Duration::from_millis(self.reset_duration_ms)
    }

    /// Camera distance used to frame an object with the given bounding
    /// diagonal.
    #[must_use]
    pub fn framing_distance(&self, diagonal: f32) -> f32 {
        (diagonal * self.distance_scale).max(self.min_distance)
    }
}
