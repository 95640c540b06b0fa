/// Easing functions used to map normalized animation progress.
///
/// JSON names are snake_case; `power3_out` is accepted for [`Ease::OutQuart`] and
/// `{"back_out": {"overshoot": 1.7}}` selects the overshooting curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Linear interpolation.
    #[default]
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Quartic ease-out, the decelerating curve used for entrances from below.
    #[serde(alias = "power3_out")]
    OutQuart,
    /// Ease-out that overshoots the target before settling back.
    BackOut {
        /// Overshoot amount; 1.70158 is the classic value.
        overshoot: f64,
    },
}

impl Ease {
    /// Decelerating entrance curve.
    pub const POWER3_OUT: Self = Self::OutQuart;

    /// Overshooting entrance curve with the given strength.
    pub const fn back_out(overshoot: f64) -> Self {
        Self::BackOut { overshoot }
    }

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    ///
    /// `t` is clamped; the output may leave `[0, 1]` for [`Ease::BackOut`].
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::BackOut { overshoot } => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u.powi(3) + overshoot * u.powi(2)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
