// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::carousel;
use crate::error::FetchError;
use iced::widget::image::Handle;
use iced::{window, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer, wheel and touch input from the carousel canvas.
    Carousel(carousel::Message),
    /// Display refresh while something is moving on screen.
    Frame(Instant),
    /// Periodic tick driving carousel and loader deadlines.
    Tick(Instant),
    /// A slide image finished loading (or failed to).
    ImageLoaded {
        index: usize,
        result: Result<Handle, FetchError>,
    },
    /// The loader logo finished loading (or failed to).
    LogoLoaded(Result<Handle, FetchError>),
    WindowResized(Size),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_CAROUSEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional mount target override.
    pub target: Option<String>,
    /// Image URLs or paths replacing the configured list when non-empty.
    pub images: Vec<String>,
}
