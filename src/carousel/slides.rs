// SPDX-License-Identifier: MPL-2.0
//! Tripled slide list backing the infinite track.
//!
//! A short base list is first repeated until one loop holds at least
//! [`MIN_LOOP_LEN`] slides, so the re-center buffer always lands on a
//! rendered slide.

use crate::media::ImageSource;

/// Number of concatenated copies of the base list on the track.
pub const COPIES: usize = 3;

/// Minimum number of slides in one loop copy.
pub const MIN_LOOP_LEN: usize = 3;

/// One rendered cell on the track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Position of this slide on the track (`0..3 × loop_len`).
    pub track_index: usize,
    /// Position of the image in the base list (`0..N`).
    pub base_index: usize,
}

/// The base images and their rendered slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideList {
    sources: Vec<ImageSource>,
    loop_len: usize,
    slides: Vec<Slide>,
}

impl SlideList {
    /// Renders three consecutive copies of `sources`, each copy holding
    /// the base list repeated up to [`MIN_LOOP_LEN`] slides.
    #[must_use]
    pub fn tripled(sources: Vec<ImageSource>) -> Self {
        let base_len = sources.len();
        let loop_len = if base_len == 0 {
            0
        } else {
            base_len * MIN_LOOP_LEN.div_ceil(base_len)
        };
        let slides = (0..loop_len * COPIES)
            .map(|track_index| Slide {
                track_index,
                base_index: track_index % base_len.max(1),
            })
            .collect();

        Self {
            sources,
            loop_len,
            slides,
        }
    }

    /// Number of distinct images.
    #[must_use]
    pub fn base_len(&self) -> usize {
        self.sources.len()
    }

    /// Slides in one copy of the loop: `base_len`, or a multiple of it
    /// for lists shorter than [`MIN_LOOP_LEN`].
    #[must_use]
    pub fn loop_len(&self) -> usize {
        self.loop_len
    }

    /// Number of rendered slides (`3 × loop_len`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn sources(&self) -> &[ImageSource] {
        &self.sources
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }

    #[must_use]
    pub fn get(&self, track_index: usize) -> Option<&Slide> {
        self.slides.get(track_index)
    }

    /// Image source shown by the slide at `track_index`.
    #[must_use]
    pub fn source_at(&self, track_index: usize) -> Option<&ImageSource> {
        self.get(track_index)
            .and_then(|slide| self.sources.get(slide.base_index))
    }
}
