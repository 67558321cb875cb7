// SPDX-License-Identifier: MPL-2.0
//! Time-based tween used by rendering surfaces to animate the track offset.

use std::time::{Duration, Instant};

/// CSS-style cubic Bézier timing curve anchored at (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

/// Decelerating curve the track uses for every settle animation.
pub const TRACK_EASING: CubicBezier = CubicBezier::new(0.25, 0.46, 0.45, 0.94);

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 24;
const SOLVE_EPSILON: f32 = 1e-5;

impl CubicBezier {
    /// Creates a curve from its two control points. `x1` and `x2` must lie
    /// in `[0, 1]` so the curve stays a function of time.
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f32, a2: f32, t: f32) -> f32 {
        // Bernstein form with P0 = 0 and P3 = 1.
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn slope(a1: f32, a2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    fn solve_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = Self::sample(self.x1, self.x2, t) - x;
            if error.abs() < SOLVE_EPSILON {
                return t;
            }
            let slope = Self::slope(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= error / slope;
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < SOLVE_EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Maps linear progress in `[0, 1]` to eased progress.
    #[must_use]
    pub fn ease(&self, progress: f32) -> f32 {
        let x = progress.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        Self::sample(self.y1, self.y2, self.solve_t(x))
    }
}

/// Animates a single scalar from `start` to `target` over `duration`.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    start: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
    easing: CubicBezier,
}

impl Tween {
    #[must_use]
    pub fn new(start: f32, target: f32, started_at: Instant, duration: Duration) -> Self {
        Self {
            start,
            target,
            started_at,
            duration,
            easing: TRACK_EASING,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }

    /// Value of the tween at `now`; returns the target once finished.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() || self.is_finished(now) {
            return self.target;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let progress = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        self.start + (self.target - self.start) * self.easing.ease(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn easing_is_anchored_at_endpoints() {
        assert_abs_diff_eq!(TRACK_EASING.ease(0.0), 0.0);
        assert_abs_diff_eq!(TRACK_EASING.ease(1.0), 1.0);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = TRACK_EASING.ease(step as f32 / 100.0);
            assert!(value >= previous - 1e-4, "step {step}: {value} < {previous}");
            previous = value;
        }
    }

    #[test]
    fn track_easing_decelerates() {
        // Ease-out: more than half the distance is covered at half time.
        assert!(TRACK_EASING.ease(0.5) > 0.6);
    }

    #[test]
    fn linear_curve_is_identity() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for step in 0..=10 {
            let x = step as f32 / 10.0;
            assert_abs_diff_eq!(linear.ease(x), x, epsilon = 1e-3);
        }
    }

    #[test]
    fn tween_reaches_target_after_duration() {
        let t0 = Instant::now();
        let tween = Tween::new(-500.0, -800.0, t0, Duration::from_millis(800));

        assert_abs_diff_eq!(tween.value_at(t0), -500.0);
        let midway = tween.value_at(t0 + Duration::from_millis(400));
        assert!(midway < -500.0 && midway > -800.0);
        assert_abs_diff_eq!(tween.value_at(t0 + Duration::from_millis(800)), -800.0);
        assert!(tween.is_finished(t0 + Duration::from_millis(800)));
    }

    #[test]
    fn zero_duration_tween_jumps() {
        let t0 = Instant::now();
        let tween = Tween::new(0.0, 10.0, t0, Duration::ZERO);
        assert_abs_diff_eq!(tween.value_at(t0), 10.0);
    }
}
