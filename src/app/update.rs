// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler forwards a top-level message to the carousel state machine
//! or the loading screen and logs the effect it reports.

use super::Message;
use crate::carousel::{self, Effect as CarouselEffect, Page};
use crate::error::FetchError;
use crate::loader::{self, Effect as LoaderEffect, LoadingScreen};
use crate::media::{ImageSource, SlideImage};
use crate::ui::carousel_view::TrackView;
use iced::widget::image::Handle;
use iced::{window, Size, Task};
use std::time::Instant;

/// Mutable application state borrowed for the duration of one update.
pub struct UpdateContext<'a> {
    pub page: &'a mut Page<TrackView>,
    pub target: &'a str,
    pub images: &'a mut Vec<SlideImage>,
    pub pending_fetches: &'a mut usize,
    pub loader: &'a mut LoadingScreen,
    pub viewport_width: &'a mut f32,
}

pub fn handle_carousel_message(
    ctx: &mut UpdateContext<'_>,
    message: carousel::Message,
    now: Instant,
) -> Task<Message> {
    if let Some(carousel) = ctx.page.carousel_mut(ctx.target) {
        log_carousel_effect(carousel.handle(message, now));
    }
    Task::none()
}

pub fn handle_frame(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    if let Some(carousel) = ctx.page.carousel_mut(ctx.target) {
        log_carousel_effect(carousel.handle(carousel::Message::Frame, now));
        carousel.surface_mut().settle(now);
    }
    log_loader_effect(ctx.loader.handle(loader::Message::Tick, now));
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    if let Some(carousel) = ctx.page.carousel_mut(ctx.target) {
        log_carousel_effect(carousel.handle(carousel::Message::Tick, now));
        carousel.surface_mut().settle(now);
    }
    log_loader_effect(ctx.loader.handle(loader::Message::Tick, now));
    Task::none()
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    index: usize,
    result: Result<Handle, FetchError>,
    now: Instant,
) -> Task<Message> {
    if let Err(err) = &result {
        let image = ctx
            .page
            .carousel(ctx.target)
            .and_then(|carousel| carousel.slides().sources().get(index))
            .map(ImageSource::label)
            .unwrap_or_default();
        tracing::warn!(index, %image, error = %err, "slide image failed to load");
    }

    if let Some(slot) = ctx.images.get_mut(index) {
        *slot = result.into();
    }

    *ctx.pending_fetches = ctx.pending_fetches.saturating_sub(1);
    if *ctx.pending_fetches == 0 {
        let broken = ctx.images.iter().filter(|image| image.is_broken()).count();
        tracing::info!(total = ctx.images.len(), broken, "slide images settled");
        log_loader_effect(ctx.loader.handle(loader::Message::PageLoaded, now));
    }
    Task::none()
}

pub fn handle_logo_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Handle, FetchError>,
    now: Instant,
) -> Task<Message> {
    log_loader_effect(ctx.loader.handle(loader::Message::LogoLoaded(result), now));
    Task::none()
}

/// Updates slide sizes immediately; the track re-snaps after the debounce.
pub fn handle_window_resized(
    ctx: &mut UpdateContext<'_>,
    size: Size,
    now: Instant,
) -> Task<Message> {
    if (size.width - *ctx.viewport_width).abs() <= f32::EPSILON {
        return Task::none();
    }
    *ctx.viewport_width = size.width;

    if let Some(carousel) = ctx.page.carousel_mut(ctx.target) {
        carousel.surface_mut().resize(size.width);
        carousel.handle(carousel::Message::Resized, now);
    }
    Task::none()
}

/// Tears down timers and listeners before the window goes away.
pub fn handle_close_requested(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    ctx.page.unmount_all();
    ctx.loader.destroy();
    tracing::debug!("window close requested, carousel torn down");
    window::close(id)
}

fn log_carousel_effect(effect: CarouselEffect) {
    match effect {
        CarouselEffect::None => {}
        CarouselEffect::Advanced { base_index } => {
            tracing::trace!(base_index, "carousel advanced");
        }
        CarouselEffect::DragStarted => tracing::trace!("drag started"),
        CarouselEffect::Released { moved_by, target } => {
            tracing::trace!(moved_by, target, "drag released");
        }
        CarouselEffect::Settled {
            base_index,
            recentered_by,
        } => {
            tracing::trace!(base_index, ?recentered_by, "transition settled");
        }
        CarouselEffect::Resnapped { slide_width } => {
            tracing::debug!(slide_width, "track re-snapped after resize");
        }
    }
}

fn log_loader_effect(effect: LoaderEffect) {
    match effect {
        LoaderEffect::None => {}
        LoaderEffect::Shown => tracing::info!("loading screen shown"),
        LoaderEffect::Hidden => tracing::info!("loading screen hidden"),
    }
}
