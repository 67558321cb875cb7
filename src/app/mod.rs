// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct owns the page with its mount slot, the fetched slide
//! images and the loading screen, and translates Iced messages into calls on
//! the carousel state machine. Startup mounts the configured target, kicks
//! off one fetch per image and shows the loader until every fetch settled.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::carousel::{Carousel, Page};
use crate::config::{self, Config, DEFAULT_MOUNT_TARGET};
use crate::loader::{self, LoadingScreen};
use crate::media::{self, ImageSource, SlideImage};
use crate::ui::carousel_view::TrackView;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    theme_mode: ThemeMode,
    page: Page<TrackView>,
    /// Slot the carousel was mounted into.
    target: String,
    /// One entry per base image, in configuration order.
    images: Vec<SlideImage>,
    pending_fetches: usize,
    loader: LoadingScreen,
    viewport_width: f32,
    /// Timestamp of the last frame or tick, used for rendering.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("target", &self.target)
            .field("images", &self.images.len())
            .field("pending_fetches", &self.pending_fetches)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        // Close requests go through `Message::WindowCloseRequested` for cleanup.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and boots the application.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }
        Self::with_config(&config, flags, Instant::now())
    }

    /// Mounts the carousel, shows the loader and starts every image fetch.
    fn with_config(config: &Config, flags: Flags, now: Instant) -> (Self, Task<Message>) {
        let target = flags
            .target
            .unwrap_or_else(|| config.carousel.mount_target().to_string());
        let sources: Vec<ImageSource> = if flags.images.is_empty() {
            config.carousel.image_sources()
        } else {
            flags
                .images
                .iter()
                .map(String::as_str)
                .map(ImageSource::parse)
                .collect()
        };

        let viewport_width = config::DEFAULT_WINDOW_WIDTH;
        let surface = TrackView::new(
            config.layout.layout(config.carousel.slide_gap()),
            viewport_width,
        );

        let mut page = Page::new().with_slot(DEFAULT_MOUNT_TARGET);
        let mounted = page
            .mount(
                &target,
                sources.clone(),
                surface,
                config.carousel.settings(),
                now,
            )
            .is_ok();

        let mut tasks: Vec<Task<Message>> = Vec::new();
        let mut images = Vec::new();
        if mounted {
            images = vec![SlideImage::Pending; sources.len()];
            tasks.extend(sources.into_iter().enumerate().map(|(index, source)| {
                Task::perform(media::fetch(source), move |result| Message::ImageLoaded {
                    index,
                    result,
                })
            }));
        }
        let pending_fetches = tasks.len();

        let mut loader = LoadingScreen::new(config.loader.options());
        if loader.options().enabled {
            loader.handle(loader::Message::Show, now);
            if let Some(logo) = loader.options().logo.clone() {
                tasks.push(Task::perform(media::fetch(logo), Message::LogoLoaded));
            }
            if pending_fetches == 0 {
                loader.handle(loader::Message::PageLoaded, now);
            }
        }

        let app = App {
            theme_mode: config.general.theme_mode,
            page,
            target,
            images,
            pending_fetches,
            loader,
            viewport_width,
            now,
        };

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        String::from("Iced Carousel")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn carousel(&self) -> Option<&Carousel<TrackView>> {
        self.page.carousel(&self.target)
    }

    fn subscription(&self) -> Subscription<Message> {
        let now = Instant::now();
        let carousel = self.carousel();

        let animating = self.loader.is_visible()
            || carousel.is_some_and(|c| c.wants_frames() || c.surface().is_animating(now));
        let has_deadline = carousel.and_then(Carousel::next_deadline).is_some()
            || self.loader.next_deadline().is_some();

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_frame_subscription(animating),
            subscription::create_tick_subscription(has_deadline),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = match &message {
            Message::Frame(at) | Message::Tick(at) => *at,
            _ => Instant::now(),
        };
        self.now = now;

        let mut ctx = update::UpdateContext {
            page: &mut self.page,
            target: &self.target,
            images: &mut self.images,
            pending_fetches: &mut self.pending_fetches,
            loader: &mut self.loader,
            viewport_width: &mut self.viewport_width,
        };

        match message {
            Message::Carousel(carousel_message) => {
                update::handle_carousel_message(&mut ctx, carousel_message, now)
            }
            Message::Frame(_) => update::handle_frame(&mut ctx, now),
            Message::Tick(_) => update::handle_tick(&mut ctx, now),
            Message::ImageLoaded { index, result } => {
                update::handle_image_loaded(&mut ctx, index, result, now)
            }
            Message::LogoLoaded(result) => update::handle_logo_loaded(&mut ctx, result, now),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size, now),
            Message::WindowCloseRequested(id) => update::handle_close_requested(&mut ctx, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            page: &self.page,
            target: &self.target,
            images: &self.images,
            loader: &self.loader,
            colors: ColorScheme::for_mode(self.theme_mode),
            now: self.now,
        })
    }
}
