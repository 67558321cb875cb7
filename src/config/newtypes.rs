// SPDX-License-Identifier: MPL-2.0
//! Configuration newtypes.
//!
//! Values read from `settings.toml` pass through these wrappers so that the
//! rest of the application never sees an out-of-range interval or size.

use super::defaults::{
    DEFAULT_AUTO_PLAY_INTERVAL_MS, DEFAULT_LOADER_LOGO_SIZE, DEFAULT_SLIDE_GAP,
    DEFAULT_TRANSITION_DURATION_MS, MAX_AUTO_PLAY_INTERVAL_MS, MAX_DELAY_MS,
    MAX_LOADER_LOGO_SIZE, MAX_SLIDE_GAP, MAX_SLIDE_WIDTH, MAX_TRANSITION_DURATION_MS,
    MIN_AUTO_PLAY_INTERVAL_MS, MIN_LOADER_LOGO_SIZE, MIN_SLIDE_WIDTH,
};
use std::time::Duration;

// =============================================================================
// Durations
// =============================================================================

/// Time between auto-play advances, guaranteed to be within 500 ms–60 s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoPlayInterval(Duration);

impl AutoPlayInterval {
    /// Creates an interval from milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(
            ms.clamp(MIN_AUTO_PLAY_INTERVAL_MS, MAX_AUTO_PLAY_INTERVAL_MS),
        ))
    }

    #[must_use]
    pub fn value(self) -> Duration {
        self.0
    }
}

impl Default for AutoPlayInterval {
    fn default() -> Self {
        Self(Duration::from_millis(DEFAULT_AUTO_PLAY_INTERVAL_MS))
    }
}

/// Slide transition length. Zero disables the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDuration(Duration);

impl TransitionDuration {
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms.min(MAX_TRANSITION_DURATION_MS)))
    }

    #[must_use]
    pub fn value(self) -> Duration {
        self.0
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(Duration::from_millis(DEFAULT_TRANSITION_DURATION_MS))
    }
}

/// Short delay (resume after interaction, resize debounce), at most 10 s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortDelay(Duration);

impl ShortDelay {
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms.min(MAX_DELAY_MS)))
    }

    #[must_use]
    pub fn value(self) -> Duration {
        self.0
    }
}

// =============================================================================
// Sizes
// =============================================================================

/// Gap between slides in logical pixels (0–200).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideGap(f32);

impl SlideGap {
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_finite() {
            Self(px.clamp(0.0, MAX_SLIDE_GAP))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SlideGap {
    fn default() -> Self {
        Self(DEFAULT_SLIDE_GAP)
    }
}

/// Width of one slide element in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideWidth(f32);

impl SlideWidth {
    /// Clamps to the accepted range; non-finite input falls back to `fallback`.
    #[must_use]
    pub fn new(px: f32, fallback: f32) -> Self {
        let px = if px.is_finite() { px } else { fallback };
        Self(px.clamp(MIN_SLIDE_WIDTH, MAX_SLIDE_WIDTH))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

/// Loader logo box size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoSize(f32);

impl LogoSize {
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_finite() {
            Self(px.clamp(MIN_LOADER_LOGO_SIZE, MAX_LOADER_LOGO_SIZE))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for LogoSize {
    fn default() -> Self {
        Self(DEFAULT_LOADER_LOGO_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn auto_play_interval_clamps_to_range() {
        assert_eq!(
            AutoPlayInterval::from_millis(10).value(),
            Duration::from_millis(MIN_AUTO_PLAY_INTERVAL_MS)
        );
        assert_eq!(
            AutoPlayInterval::from_millis(u64::MAX).value(),
            Duration::from_millis(MAX_AUTO_PLAY_INTERVAL_MS)
        );
        assert_eq!(
            AutoPlayInterval::from_millis(3500).value(),
            Duration::from_millis(3500)
        );
    }

    #[test]
    fn transition_duration_allows_zero() {
        assert_eq!(TransitionDuration::from_millis(0).value(), Duration::ZERO);
        assert_eq!(
            TransitionDuration::from_millis(60_000).value(),
            Duration::from_millis(MAX_TRANSITION_DURATION_MS)
        );
    }

    #[test]
    fn slide_gap_rejects_negative_and_nan() {
        assert_abs_diff_eq!(SlideGap::new(-5.0).value(), 0.0);
        assert_abs_diff_eq!(SlideGap::new(f32::NAN).value(), DEFAULT_SLIDE_GAP);
        assert_abs_diff_eq!(SlideGap::new(500.0).value(), MAX_SLIDE_GAP);
    }

    #[test]
    fn slide_width_uses_fallback_for_non_finite() {
        assert_abs_diff_eq!(SlideWidth::new(f32::INFINITY, 280.0).value(), 280.0);
        assert_abs_diff_eq!(SlideWidth::new(1.0, 280.0).value(), MIN_SLIDE_WIDTH);
    }

    #[test]
    fn logo_size_clamps_to_range() {
        assert_abs_diff_eq!(LogoSize::new(4.0).value(), MIN_LOADER_LOGO_SIZE);
        assert_abs_diff_eq!(LogoSize::new(250.0).value(), 250.0);
    }
}
