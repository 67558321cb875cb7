// SPDX-License-Identifier: MPL-2.0
//! Responsive slide sizing.
//!
//! Slide width and container padding step down at two viewport breakpoints.
//! The gap between slides never changes.

use crate::config::defaults::{
    DEFAULT_ASPECT_HEIGHT, DEFAULT_ASPECT_WIDTH, DEFAULT_CONTAINER_PADDING,
    DEFAULT_MOBILE_BREAKPOINT, DEFAULT_MOBILE_CONTAINER_PADDING, DEFAULT_MOBILE_SLIDE_WIDTH,
    DEFAULT_SLIDE_GAP, DEFAULT_SLIDE_WIDTH, DEFAULT_TABLET_BREAKPOINT,
    DEFAULT_TABLET_CONTAINER_PADDING, DEFAULT_TABLET_SLIDE_WIDTH,
};

/// Sizes that apply up to and including `max_viewport` pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub max_viewport: f32,
    pub slide_width: f32,
    pub container_padding: f32,
}

/// Slide sizing rules for every viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsiveLayout {
    pub slide_width: f32,
    pub container_padding: f32,
    pub tablet: Breakpoint,
    pub mobile: Breakpoint,
    pub gap: f32,
    /// Image width divided by image height.
    pub aspect_ratio: f32,
}

impl Default for ResponsiveLayout {
    fn default() -> Self {
        Self {
            slide_width: DEFAULT_SLIDE_WIDTH,
            container_padding: DEFAULT_CONTAINER_PADDING,
            tablet: Breakpoint {
                max_viewport: DEFAULT_TABLET_BREAKPOINT,
                slide_width: DEFAULT_TABLET_SLIDE_WIDTH,
                container_padding: DEFAULT_TABLET_CONTAINER_PADDING,
            },
            mobile: Breakpoint {
                max_viewport: DEFAULT_MOBILE_BREAKPOINT,
                slide_width: DEFAULT_MOBILE_SLIDE_WIDTH,
                container_padding: DEFAULT_MOBILE_CONTAINER_PADDING,
            },
            gap: DEFAULT_SLIDE_GAP,
            aspect_ratio: DEFAULT_ASPECT_WIDTH / DEFAULT_ASPECT_HEIGHT,
        }
    }
}

/// Concrete sizes for one viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideMetrics {
    pub slide_width: f32,
    pub gap: f32,
    pub container_padding: f32,
    pub image_height: f32,
}

impl SlideMetrics {
    /// Distance between the leading edges of two neighbouring slides.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.slide_width + self.gap
    }

    /// Height of the carousel container including its padding.
    #[must_use]
    pub fn container_height(&self) -> f32 {
        self.image_height + 2.0 * self.container_padding
    }
}

impl ResponsiveLayout {
    /// Sizes for a viewport `viewport_width` pixels wide.
    #[must_use]
    pub fn metrics(&self, viewport_width: f32) -> SlideMetrics {
        let (slide_width, container_padding) = if viewport_width <= self.mobile.max_viewport {
            (self.mobile.slide_width, self.mobile.container_padding)
        } else if viewport_width <= self.tablet.max_viewport {
            (self.tablet.slide_width, self.tablet.container_padding)
        } else {
            (self.slide_width, self.container_padding)
        };

        let aspect = if self.aspect_ratio > 0.0 {
            self.aspect_ratio
        } else {
            DEFAULT_ASPECT_WIDTH / DEFAULT_ASPECT_HEIGHT
        };

        SlideMetrics {
            slide_width,
            gap: self.gap,
            container_padding,
            image_height: slide_width / aspect,
        }
    }
}
