// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Carousel**: Mount target, image list and timing
//! - **Layout**: Responsive slide widths and paddings
//! - **Loader**: Loading screen timing and brand colors
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Identifier of the page slot the carousel mounts into.
pub const DEFAULT_MOUNT_TARGET: &str = "startups-carousel";

/// Startup logos shown when no image list is configured.
pub const DEFAULT_IMAGES: [&str; 13] = [
    "https://cdn.metadax.cloud/assets/images/metadax/startups/capivara.png",
    "https://cdn.metadax.cloud/assets/images/metadax/startups/creditix.png",
    "https://cdn.metadax.cloud/assets/images/metadax/startups/curamente.png",
    "https://cdn.metadax.cloud/assets/images/metadax/startups/econx.png",
    "https://cdn.metadax.cloud/assets/images/metadax/startups/ietesp.png",
    "https://cdn.metadax.cloud/assets/images/metadax/startups/logicadocaos.png",
    "https://cdn.metadax.cloud/assets/images/metadax/startups/mobivin.png",
    "https://cdn.metadax.cloud/assets/images/metadax/startups/neovolt.png",
    "https://cdn.metadax.cloud/assets/images/metadax/startups/seekpay.png",
    "https://cdn.metadax.cloud/assets/images/metadax/startups/veiacriativa.png",
    "https://cdn.metadax.cloud/assets/images/metadax/startups/dragonx.png",
    "https://cdn.metadax.cloud/assets/images/metadax/startups/icc.png",
    "https://cdn.metadax.cloud/assets/images/metadax/startups/marketguru.png",
];

/// Default time between auto-play advances (milliseconds).
pub const DEFAULT_AUTO_PLAY_INTERVAL_MS: u64 = 3500;

/// Minimum auto-play interval (milliseconds).
pub const MIN_AUTO_PLAY_INTERVAL_MS: u64 = 500;

/// Maximum auto-play interval (milliseconds).
pub const MAX_AUTO_PLAY_INTERVAL_MS: u64 = 60_000;

/// Default duration of a slide transition (milliseconds).
pub const DEFAULT_TRANSITION_DURATION_MS: u64 = 800;

/// Maximum transition duration (milliseconds).
pub const MAX_TRANSITION_DURATION_MS: u64 = 5000;

/// Default gap between slides (logical pixels).
pub const DEFAULT_SLIDE_GAP: f32 = 24.0;

/// Maximum gap between slides (logical pixels).
pub const MAX_SLIDE_GAP: f32 = 200.0;

/// Pause after a user interaction before auto-play restarts (milliseconds).
pub const DEFAULT_RESUME_DELAY_MS: u64 = 1000;

/// Quiet period before a window resize re-lays out the track (milliseconds).
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 250;

/// Upper bound for the resume delay and the resize debounce (milliseconds).
pub const MAX_DELAY_MS: u64 = 10_000;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Slide width on wide viewports (logical pixels).
pub const DEFAULT_SLIDE_WIDTH: f32 = 280.0;

/// Slide width at or below the tablet breakpoint.
pub const DEFAULT_TABLET_SLIDE_WIDTH: f32 = 220.0;

/// Slide width at or below the mobile breakpoint.
pub const DEFAULT_MOBILE_SLIDE_WIDTH: f32 = 200.0;

/// Horizontal container padding on wide viewports.
pub const DEFAULT_CONTAINER_PADDING: f32 = 40.0;

/// Horizontal container padding at or below the tablet breakpoint.
pub const DEFAULT_TABLET_CONTAINER_PADDING: f32 = 24.0;

/// Horizontal container padding at or below the mobile breakpoint.
pub const DEFAULT_MOBILE_CONTAINER_PADDING: f32 = 20.0;

/// Viewport width at or below which the tablet sizes apply.
pub const DEFAULT_TABLET_BREAKPOINT: f32 = 768.0;

/// Viewport width at or below which the mobile sizes apply.
pub const DEFAULT_MOBILE_BREAKPOINT: f32 = 480.0;

/// Logo aspect ratio, width part.
pub const DEFAULT_ASPECT_WIDTH: f32 = 1375.0;

/// Logo aspect ratio, height part.
pub const DEFAULT_ASPECT_HEIGHT: f32 = 697.0;

/// Smallest slide width accepted from the config file.
pub const MIN_SLIDE_WIDTH: f32 = 40.0;

/// Largest slide width accepted from the config file.
pub const MAX_SLIDE_WIDTH: f32 = 2000.0;

// ==========================================================================
// Loader Defaults
// ==========================================================================

/// Default logo shown by the loading screen.
pub const DEFAULT_LOADER_LOGO: &str = "https://cdn.metadax.cloud/assets/images/loader.png";

/// Brand name drawn when no logo image is available.
pub const DEFAULT_WORDMARK: &str = "METADAX";

/// Time the loading screen stays up after the page finished loading (milliseconds).
pub const DEFAULT_LOADER_DURATION_MS: u64 = 2500;

/// Loading screen fade-out duration (milliseconds).
pub const DEFAULT_LOADER_FADE_OUT_MS: u64 = 600;

/// Logo box size (logical pixels).
pub const DEFAULT_LOADER_LOGO_SIZE: f32 = 250.0;

/// Smallest logo box size.
pub const MIN_LOADER_LOGO_SIZE: f32 = 32.0;

/// Largest logo box size.
pub const MAX_LOADER_LOGO_SIZE: f32 = 1024.0;

/// Spinner ring color.
pub const DEFAULT_CIRCLE_COLOR: &str = "#0056B3";

/// Loading screen background color.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width.
pub const DEFAULT_WINDOW_WIDTH: f32 = 960.0;

/// Initial window height.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 480.0;

/// Minimum window width.
pub const MIN_WINDOW_WIDTH: f32 = 480.0;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: f32 = 240.0;
