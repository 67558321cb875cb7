// SPDX-License-Identifier: MPL-2.0
//! Rendering capability the carousel drives.
//!
//! The state machine never touches widgets directly. It tells a surface
//! where the track should sit and asks it how wide a slide currently is, so
//! the positional logic runs unchanged against Iced or a test double.

use std::time::{Duration, Instant};

/// How the surface should reach a new track offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Jump without animation (mount, re-center, drag follow, resize).
    Instant,
    /// Ease toward the offset over `duration`, starting at `started_at`.
    Animated {
        started_at: Instant,
        duration: Duration,
    },
}

impl Motion {
    #[must_use]
    pub fn is_animated(&self) -> bool {
        matches!(self, Motion::Animated { .. })
    }
}

/// Minimal rendering surface for the track.
pub trait TrackSurface {
    /// Moves the track to `offset` pixels (negative values scroll forward).
    fn set_track_offset(&mut self, offset: f32, motion: Motion);

    /// Current slide pitch: rendered slide width plus the gap between slides.
    fn slide_width(&self) -> f32;
}

/// Surface double that records every offset it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub slide_width: f32,
    pub calls: Vec<(f32, Motion)>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(slide_width: f32) -> Self {
        Self {
            slide_width,
            calls: Vec::new(),
        }
    }

    /// Offset of the most recent call.
    #[must_use]
    pub fn last_offset(&self) -> Option<f32> {
        self.calls.last().map(|(offset, _)| *offset)
    }

    /// Motion of the most recent call.
    #[must_use]
    pub fn last_motion(&self) -> Option<Motion> {
        self.calls.last().map(|(_, motion)| *motion)
    }
}

impl TrackSurface for RecordingSurface {
    fn set_track_offset(&mut self, offset: f32, motion: Motion) {
        self.calls.push((offset, motion));
    }

    fn slide_width(&self) -> f32 {
        self.slide_width
    }
}
