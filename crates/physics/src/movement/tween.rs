//! Single-value tween with optional yoyo.
//!
//! A yoyo tween plays from `from` to `to` over `duration_ms`, then plays the
//! same curve backwards to `from` over another `duration_ms`. The backward
//! half is the time-reversal of the forward half, so the value passes through
//! the same heights on the way down as on the way up.

use serde::{Deserialize, Serialize};

use super::Easing;

/// Whether a tween still has time left after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenStatus {
    Running,
    Finished,
}

/// Interpolates one `f32` over time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tween {
    from: f32,
    to: f32,
    /// Duration of one leg (ms).
    duration_ms: f32,
    elapsed_ms: f32,
    easing: Easing,
    yoyo: bool,
}

impl Tween {
    /// Create a one-way tween.
    pub fn new(from: f32, to: f32, duration_ms: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            elapsed_ms: 0.0,
            easing,
            yoyo: false,
        }
    }

    /// Play back to the start value after reaching the end.
    pub fn with_yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    /// Total running time including the return leg (ms).
    pub fn total_duration_ms(&self) -> f32 {
        if self.yoyo {
            self.duration_ms * 2.0
        } else {
            self.duration_ms
        }
    }

    /// Advance by `delta_ms`. Negative deltas are ignored.
    pub fn advance(&mut self, delta_ms: f32) -> TweenStatus {
        let total = self.total_duration_ms();
        self.elapsed_ms = (self.elapsed_ms + delta_ms.max(0.0)).min(total);
        self.status()
    }

    pub fn status(&self) -> TweenStatus {
        if self.elapsed_ms >= self.total_duration_ms() {
            TweenStatus::Finished
        } else {
            TweenStatus::Running
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.status() == TweenStatus::Finished
    }

    /// Current interpolated value.
    pub fn value(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return self.end_value();
        }

        // Normalized position along the forward curve
        let t = if self.yoyo && self.elapsed_ms > self.duration_ms {
            (2.0 * self.duration_ms - self.elapsed_ms) / self.duration_ms
        } else {
            self.elapsed_ms / self.duration_ms
        };

        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Value once the tween has finished.
    pub fn end_value(&self) -> f32 {
        if self.yoyo {
            self.from
        } else {
            self.to
        }
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_one_way_tween() {
        let mut tween = Tween::new(0.0, 10.0, 100.0, Easing::Linear);
        assert_eq!(tween.value(), 0.0);

        assert_eq!(tween.advance(50.0), TweenStatus::Running);
        assert!((tween.value() - 5.0).abs() < EPSILON);

        assert_eq!(tween.advance(60.0), TweenStatus::Finished);
        assert_eq!(tween.value(), 10.0);
        assert_eq!(tween.elapsed_ms(), 100.0);
    }

    #[test]
    fn test_yoyo_returns_to_start() {
        let mut tween = Tween::new(0.0, 2.0, 300.0, Easing::QuadraticOut).with_yoyo(true);
        assert_eq!(tween.total_duration_ms(), 600.0);

        tween.advance(300.0);
        assert!((tween.value() - 2.0).abs() < EPSILON);
        assert!(!tween.is_finished());

        tween.advance(300.0);
        assert!(tween.is_finished());
        assert!(tween.value().abs() < EPSILON);
    }

    #[test]
    fn test_yoyo_is_symmetric() {
        let mut up = Tween::new(0.0, 2.0, 300.0, Easing::QuadraticOut).with_yoyo(true);
        let mut down = up.clone();

        up.advance(100.0);
        down.advance(500.0);
        assert!((up.value() - down.value()).abs() < EPSILON);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let tween = Tween::new(1.0, 3.0, 0.0, Easing::Linear).with_yoyo(true);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 1.0);
    }

    #[test]
    fn test_negative_delta_ignored() {
        let mut tween = Tween::new(0.0, 1.0, 100.0, Easing::Linear);
        tween.advance(-50.0);
        assert_eq!(tween.elapsed_ms(), 0.0);
    }
}
