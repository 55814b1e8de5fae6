//! Easing functions for animation interpolation.
//!
//! Provides the easing curves used by camera tweens.

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Symmetric quadratic ease-in-out: `2t²` on the first half,
    /// `1 - (2 - 2t)² / 2` on the second.
    QuadraticInOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control value.
        c1: f32,
        /// Second control value.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default easing: the symmetric quadratic used for camera flights.
    pub const DEFAULT: EasingFunction = EasingFunction::QuadraticInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
