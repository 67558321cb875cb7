// SPDX-License-Identifier: MPL-2.0
//! Named mount slots on a page.
//!
//! A page declares the slots a carousel may be mounted into. Mounting looks
//! the target up by id; mounting again on the same slot destroys the
//! previous carousel first, so a slot never holds more than one track.

use super::engine::Carousel;
use super::slides::SlideList;
use super::surface::TrackSurface;
use crate::config::CarouselSettings;
use crate::error::MountError;
use crate::media::ImageSource;
use std::time::Instant;

#[derive(Debug)]
struct Slot<S> {
    id: String,
    carousel: Option<Carousel<S>>,
}

/// Page with named mount slots.
#[derive(Debug)]
pub struct Page<S> {
    slots: Vec<Slot<S>>,
}

impl<S> Default for Page<S> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<S: TrackSurface> Page<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty slot; duplicate ids are ignored.
    #[must_use]
    pub fn with_slot(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if !self.slots.iter().any(|slot| slot.id == id) {
            self.slots.push(Slot { id, carousel: None });
        }
        self
    }

    #[must_use]
    pub fn has_slot(&self, id: &str) -> bool {
        self.slots.iter().any(|slot| slot.id == id)
    }

    /// Mounts a carousel showing `sources` into slot `target`.
    ///
    /// Failures are logged here and returned; the slot is left empty.
    pub fn mount(
        &mut self,
        target: &str,
        sources: Vec<ImageSource>,
        surface: S,
        settings: CarouselSettings,
        now: Instant,
    ) -> Result<&mut Carousel<S>, MountError> {
        let Some(slot) = self.slots.iter_mut().find(|slot| slot.id == target) else {
            let err = MountError::TargetNotFound(target.to_string());
            tracing::error!(target_id = target, "{err}");
            return Err(err);
        };

        if let Some(mut previous) = slot.carousel.take() {
            tracing::debug!(target_id = target, "replacing mounted carousel");
            previous.destroy();
        }

        match Carousel::mount(SlideList::tripled(sources), surface, settings, now) {
            Ok(carousel) => {
                tracing::info!(
                    target_id = target,
                    images = carousel.slides().base_len(),
                    "carousel mounted"
                );
                Ok(slot.carousel.insert(carousel))
            }
            Err(err) => {
                tracing::error!(target_id = target, "{err}");
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn carousel(&self, target: &str) -> Option<&Carousel<S>> {
        self.slots
            .iter()
            .find(|slot| slot.id == target)
            .and_then(|slot| slot.carousel.as_ref())
    }

    pub fn carousel_mut(&mut self, target: &str) -> Option<&mut Carousel<S>> {
        self.slots
            .iter_mut()
            .find(|slot| slot.id == target)
            .and_then(|slot| slot.carousel.as_mut())
    }

    /// Destroys and removes every mounted carousel.
    pub fn unmount_all(&mut self) {
        for slot in &mut self.slots {
            if let Some(mut carousel) = slot.carousel.take() {
                carousel.destroy();
            }
        }
    }
}
