//! Easing curves.
//!
//! Each curve maps normalized time `t` in `[0, 1]` to progress, with
//! `f(0) = 0` and `f(1) = 1`. Input outside the range is clamped.

use serde::{Deserialize, Serialize};

/// Easing curve applied to a tween's normalized time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    QuadraticIn,
    #[default]
    QuadraticOut,
    QuadraticInOut,
    CubicOut,
    SineInOut,
}

impl Easing {
    /// Evaluate the curve at `t`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadraticIn => t * t,
            Easing::QuadraticOut => t * (2.0 - t),
            Easing::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::CubicOut => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Easing::SineInOut => 0.5 * (1.0 - (std::f32::consts::PI * t).cos()),
        }
    }

    pub const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::QuadraticIn,
        Easing::QuadraticOut,
        Easing::QuadraticInOut,
        Easing::CubicOut,
        Easing::SineInOut,
    ];

    /// Display name for the debug panel.
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "Linear",
            Easing::QuadraticIn => "Quadratic In",
            Easing::QuadraticOut => "Quadratic Out",
            Easing::QuadraticInOut => "Quadratic In/Out",
            Easing::CubicOut => "Cubic Out",
            Easing::SineInOut => "Sine In/Out",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_endpoints() {
        for easing in Easing::ALL {
            assert!(easing.apply(0.0).abs() < EPSILON, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < EPSILON, "{:?} at 1", easing);
        }
    }

    #[test]
    fn test_clamps_input() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn test_quadratic_out_decelerates() {
        // Covers more than half the distance in the first half of the time
        assert!(Easing::QuadraticOut.apply(0.5) > 0.5);
        assert!((Easing::QuadraticOut.apply(0.5) - 0.75).abs() < EPSILON);
        assert!(Easing::QuadraticIn.apply(0.5) < 0.5);
    }

    #[test]
    fn test_monotonic() {
        for easing in Easing::ALL {
            let mut last = 0.0;
            for i in 1..=100 {
                let value = easing.apply(i as f32 / 100.0);
                assert!(value >= last - EPSILON, "{:?} not monotonic", easing);
                last = value;
            }
        }
    }
}
