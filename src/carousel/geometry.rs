// SPDX-License-Identifier: MPL-2.0
//! Loop geometry for the tripled slide track.
//!
//! All offsets are track translations in pixels: `0.0` shows the first
//! rendered slide at the leading edge and moving forward makes the value
//! more negative. The viewport parks at the start of the middle copy and is
//! shifted by one loop width whenever it drifts out of the buffer zone.

/// Number of slide widths of slack kept on each side of the middle copy.
const BUFFER_SLIDES: f32 = 2.0;

/// Positional math for a track made of three copies of `base_len` slides.
/// `base_len` is the loop length, which may repeat a short image list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopGeometry {
    base_len: usize,
    slide_width: f32,
}

impl LoopGeometry {
    /// Creates the geometry for `base_len` images and a slide pitch of
    /// `slide_width` pixels (slide element width plus gap).
    #[must_use]
    pub fn new(base_len: usize, slide_width: f32) -> Self {
        Self {
            base_len,
            slide_width: slide_width.max(0.0),
        }
    }

    #[must_use]
    pub fn base_len(&self) -> usize {
        self.base_len
    }

    #[must_use]
    pub fn slide_width(&self) -> f32 {
        self.slide_width
    }

    /// Returns a copy with a different slide pitch.
    #[must_use]
    pub fn with_slide_width(self, slide_width: f32) -> Self {
        Self::new(self.base_len, slide_width)
    }

    /// Width of one full copy of the base list.
    #[must_use]
    pub fn loop_width(&self) -> f32 {
        self.base_len as f32 * self.slide_width
    }

    /// Translate that shows the first slide of the middle copy.
    #[must_use]
    pub fn home_offset(&self) -> f32 {
        -self.loop_width()
    }

    /// Offsets above this value have drifted too far toward the start.
    #[must_use]
    pub fn start_threshold(&self) -> f32 {
        -BUFFER_SLIDES * self.slide_width
    }

    /// Offsets below this value have drifted too far toward the end.
    #[must_use]
    pub fn end_threshold(&self) -> f32 {
        -(2.0 * self.loop_width() + BUFFER_SLIDES * self.slide_width)
    }

    /// Returns the equivalent offset one loop away when `offset` left the
    /// buffer zone, or `None` when no jump is needed.
    #[must_use]
    pub fn recenter(&self, offset: f32) -> Option<f32> {
        if self.base_len == 0 || self.slide_width <= 0.0 {
            return None;
        }

        // A long drag can overshoot by more than one loop.
        let mut shifted = offset;
        while shifted > self.start_threshold() {
            shifted -= self.loop_width();
        }
        while shifted < self.end_threshold() {
            shifted += self.loop_width();
        }

        (shifted != offset).then_some(shifted)
    }

    /// Rounds an arbitrary translate to the nearest slide boundary.
    #[must_use]
    pub fn snap_nearest(&self, offset: f32) -> f32 {
        if self.slide_width <= 0.0 {
            return offset;
        }
        (offset / self.slide_width).round() * self.slide_width
    }

    /// Index of the rendered slide nearest to the leading edge.
    #[must_use]
    pub fn slide_index(&self, offset: f32) -> i64 {
        if self.slide_width <= 0.0 {
            return 0;
        }
        (-offset / self.slide_width).round() as i64
    }

    /// Index into the base image list of the slide at the leading edge.
    #[must_use]
    pub fn base_index(&self, offset: f32) -> usize {
        if self.base_len == 0 {
            return 0;
        }
        self.slide_index(offset).rem_euclid(self.base_len as i64) as usize
    }

    /// Translate that puts rendered slide `index` at the leading edge.
    #[must_use]
    pub fn offset_for_index(&self, index: i64) -> f32 {
        -(index as f32) * self.slide_width
    }

    /// Whether `offset` lies inside the buffer zone around the middle copy.
    #[must_use]
    pub fn is_within_buffer(&self, offset: f32) -> bool {
        offset <= self.start_threshold() && offset >= self.end_threshold()
    }
}
