//! Easing curves for tween pacing.

/// Maps an elapsed-time fraction to a progress fraction.
///
/// Every curve is monotonic over [0,1] and returns exactly 0 at 0 and 1 at 1,
/// which the snap-to-end behavior of completed tweens relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Quadratic acceleration from rest.
    QuadIn,
    /// Quadratic deceleration to rest.
    QuadOut,
    #[default]
    QuadInOut,
    CubicIn,
    CubicOut,
}

impl Easing {
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }

    pub const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
    ];
}
