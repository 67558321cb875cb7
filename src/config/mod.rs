// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[carousel]` - Mount target, image list and timing
//! - `[layout]` - Responsive slide sizes
//! - `[loader]` - Loading screen behavior and colors
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_CAROUSEL_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_carousel::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//!
//! let settings = config.carousel.settings();
//! assert!(settings.auto_play_interval.as_millis() > 0);
//! ```

pub mod defaults;
pub mod newtypes;

pub use defaults::*;
pub use newtypes::{AutoPlayInterval, LogoSize, ShortDelay, SlideGap, SlideWidth, TransitionDuration};

use crate::app::paths;
use crate::carousel::layout::{Breakpoint, ResponsiveLayout};
use crate::error::{Error, Result};
use crate::loader::LoaderOptions;
use crate::media::ImageSource;
use crate::ui::design_tokens::palette;
use crate::ui::theming::ThemeMode;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

/// Carousel mount options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Identifier of the page slot to mount into.
    #[serde(default = "default_mount_target", skip_serializing_if = "Option::is_none")]
    pub mount_target: Option<String>,

    /// Image URLs or local paths, in display order.
    #[serde(default = "default_images", skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    #[serde(
        default = "default_auto_play_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_play_interval_ms: Option<u64>,

    #[serde(
        default = "default_transition_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_duration_ms: Option<u64>,

    /// Gap between slides in logical pixels.
    #[serde(default = "default_slide_gap", skip_serializing_if = "Option::is_none")]
    pub slide_gap: Option<f32>,

    /// Pause after a drag or wheel step before auto-play restarts.
    #[serde(
        default = "default_resume_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub resume_delay_ms: Option<u64>,

    #[serde(
        default = "default_resize_debounce_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub resize_debounce_ms: Option<u64>,

    /// Stop auto-play while the pointer is over the carousel.
    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub pause_on_hover: Option<bool>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            mount_target: default_mount_target(),
            images: default_images(),
            auto_play_interval_ms: default_auto_play_interval_ms(),
            transition_duration_ms: default_transition_duration_ms(),
            slide_gap: default_slide_gap(),
            resume_delay_ms: default_resume_delay_ms(),
            resize_debounce_ms: default_resize_debounce_ms(),
            pause_on_hover: default_true(),
        }
    }
}

/// Responsive slide sizes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    #[serde(default = "default_slide_width", skip_serializing_if = "Option::is_none")]
    pub slide_width: Option<f32>,

    #[serde(
        default = "default_tablet_slide_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub tablet_slide_width: Option<f32>,

    #[serde(
        default = "default_mobile_slide_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub mobile_slide_width: Option<f32>,

    #[serde(
        default = "default_container_padding",
        skip_serializing_if = "Option::is_none"
    )]
    pub container_padding: Option<f32>,

    #[serde(
        default = "default_tablet_container_padding",
        skip_serializing_if = "Option::is_none"
    )]
    pub tablet_container_padding: Option<f32>,

    #[serde(
        default = "default_mobile_container_padding",
        skip_serializing_if = "Option::is_none"
    )]
    pub mobile_container_padding: Option<f32>,

    #[serde(
        default = "default_tablet_breakpoint",
        skip_serializing_if = "Option::is_none"
    )]
    pub tablet_breakpoint: Option<f32>,

    #[serde(
        default = "default_mobile_breakpoint",
        skip_serializing_if = "Option::is_none"
    )]
    pub mobile_breakpoint: Option<f32>,

    /// Image aspect ratio as `[width, height]`.
    #[serde(default = "default_aspect_ratio", skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<[f32; 2]>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            slide_width: default_slide_width(),
            tablet_slide_width: default_tablet_slide_width(),
            mobile_slide_width: default_mobile_slide_width(),
            container_padding: default_container_padding(),
            tablet_container_padding: default_tablet_container_padding(),
            mobile_container_padding: default_mobile_container_padding(),
            tablet_breakpoint: default_tablet_breakpoint(),
            mobile_breakpoint: default_mobile_breakpoint(),
            aspect_ratio: default_aspect_ratio(),
        }
    }
}

/// Loading screen options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoaderConfig {
    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Logo URL or path. An empty string shows the wordmark only.
    #[serde(default = "default_loader_logo", skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    #[serde(default = "default_wordmark", skip_serializing_if = "Option::is_none")]
    pub wordmark: Option<String>,

    /// Time the screen stays up after the page finished loading.
    #[serde(
        default = "default_loader_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_ms: Option<u64>,

    #[serde(
        default = "default_loader_fade_out_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub fade_out_ms: Option<u64>,

    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub auto_hide: Option<bool>,

    #[serde(
        default = "default_loader_logo_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub logo_size: Option<f32>,

    /// Spinner ring color as `#RRGGBB`.
    #[serde(default = "default_circle_color", skip_serializing_if = "Option::is_none")]
    pub circle_color: Option<String>,

    #[serde(
        default = "default_background_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            logo: default_loader_logo(),
            wordmark: default_wordmark(),
            duration_ms: default_loader_duration_ms(),
            fade_out_ms: default_loader_fade_out_ms(),
            auto_hide: default_true(),
            logo_size: default_loader_logo_size(),
            circle_color: default_circle_color(),
            background_color: default_background_color(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub loader: LoaderConfig,
}

// =============================================================================
// Runtime Views
// =============================================================================

/// Validated carousel timing, ready for the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselSettings {
    pub auto_play_interval: Duration,
    pub transition_duration: Duration,
    pub resume_delay: Duration,
    pub resize_debounce: Duration,
    pub pause_on_hover: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        CarouselConfig::default().settings()
    }
}

impl CarouselConfig {
    /// Clamps the raw values into runtime settings.
    #[must_use]
    pub fn settings(&self) -> CarouselSettings {
        CarouselSettings {
            auto_play_interval: self
                .auto_play_interval_ms
                .map(AutoPlayInterval::from_millis)
                .unwrap_or_default()
                .value(),
            transition_duration: self
                .transition_duration_ms
                .map(TransitionDuration::from_millis)
                .unwrap_or_default()
                .value(),
            resume_delay: ShortDelay::from_millis(
                self.resume_delay_ms.unwrap_or(DEFAULT_RESUME_DELAY_MS),
            )
            .value(),
            resize_debounce: ShortDelay::from_millis(
                self.resize_debounce_ms.unwrap_or(DEFAULT_RESIZE_DEBOUNCE_MS),
            )
            .value(),
            pause_on_hover: self.pause_on_hover.unwrap_or(true),
        }
    }

    #[must_use]
    pub fn mount_target(&self) -> &str {
        self.mount_target.as_deref().unwrap_or(DEFAULT_MOUNT_TARGET)
    }

    /// Configured image list, skipping blank entries.
    #[must_use]
    pub fn image_sources(&self) -> Vec<ImageSource> {
        match &self.images {
            Some(images) => images
                .iter()
                .filter(|image| !image.trim().is_empty())
                .map(|image| ImageSource::parse(image))
                .collect(),
            None => DEFAULT_IMAGES.iter().map(|image| ImageSource::parse(image)).collect(),
        }
    }

    #[must_use]
    pub fn slide_gap(&self) -> f32 {
        self.slide_gap.map(SlideGap::new).unwrap_or_default().value()
    }
}

impl LayoutConfig {
    /// Builds the responsive layout; `gap` comes from the carousel section.
    #[must_use]
    pub fn layout(&self, gap: f32) -> ResponsiveLayout {
        let width = |value: Option<f32>, fallback: f32| {
            SlideWidth::new(value.unwrap_or(fallback), fallback).value()
        };
        let non_negative = |value: Option<f32>, fallback: f32| {
            value.filter(|v| v.is_finite() && *v >= 0.0).unwrap_or(fallback)
        };
        let aspect_ratio = match self.aspect_ratio {
            Some([w, h]) if w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite() => w / h,
            _ => DEFAULT_ASPECT_WIDTH / DEFAULT_ASPECT_HEIGHT,
        };

        ResponsiveLayout {
            slide_width: width(self.slide_width, DEFAULT_SLIDE_WIDTH),
            container_padding: non_negative(self.container_padding, DEFAULT_CONTAINER_PADDING),
            tablet: Breakpoint {
                max_viewport: non_negative(self.tablet_breakpoint, DEFAULT_TABLET_BREAKPOINT),
                slide_width: width(self.tablet_slide_width, DEFAULT_TABLET_SLIDE_WIDTH),
                container_padding: non_negative(
                    self.tablet_container_padding,
                    DEFAULT_TABLET_CONTAINER_PADDING,
                ),
            },
            mobile: Breakpoint {
                max_viewport: non_negative(self.mobile_breakpoint, DEFAULT_MOBILE_BREAKPOINT),
                slide_width: width(self.mobile_slide_width, DEFAULT_MOBILE_SLIDE_WIDTH),
                container_padding: non_negative(
                    self.mobile_container_padding,
                    DEFAULT_MOBILE_CONTAINER_PADDING,
                ),
            },
            gap,
            aspect_ratio,
        }
    }
}

impl LoaderConfig {
    /// Builds loader options. Invalid colors fall back to the brand defaults.
    #[must_use]
    pub fn options(&self) -> LoaderOptions {
        let logo = match self.logo.as_deref() {
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(ImageSource::parse(raw)),
            None => Some(ImageSource::parse(DEFAULT_LOADER_LOGO)),
        };

        LoaderOptions {
            enabled: self.enabled.unwrap_or(true),
            logo,
            wordmark: self
                .wordmark
                .clone()
                .unwrap_or_else(|| DEFAULT_WORDMARK.to_string()),
            duration: Duration::from_millis(
                self.duration_ms
                    .unwrap_or(DEFAULT_LOADER_DURATION_MS)
                    .min(MAX_DELAY_MS),
            ),
            fade_out: Duration::from_millis(
                self.fade_out_ms
                    .unwrap_or(DEFAULT_LOADER_FADE_OUT_MS)
                    .min(MAX_DELAY_MS),
            ),
            auto_hide: self.auto_hide.unwrap_or(true),
            logo_size: self.logo_size.map(LogoSize::new).unwrap_or_default().value(),
            circle_color: color_or(
                "circle_color",
                self.circle_color.as_deref(),
                DEFAULT_CIRCLE_COLOR,
            ),
            background_color: color_or(
                "background_color",
                self.background_color.as_deref(),
                DEFAULT_BACKGROUND_COLOR,
            ),
        }
    }
}

fn color_or(key: &str, raw: Option<&str>, fallback: &str) -> Color {
    if let Some(raw) = raw {
        if let Some(color) = palette::parse_hex(raw) {
            return color;
        }
        tracing::warn!(key, value = raw, "invalid color in config, using default");
    }
    palette::parse_hex(fallback).unwrap_or(palette::BRAND_BLUE)
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_true() -> Option<bool> {
    Some(true)
}

fn default_mount_target() -> Option<String> {
    Some(DEFAULT_MOUNT_TARGET.to_string())
}

fn default_images() -> Option<Vec<String>> {
    Some(DEFAULT_IMAGES.iter().map(ToString::to_string).collect())
}

fn default_auto_play_interval_ms() -> Option<u64> {
    Some(DEFAULT_AUTO_PLAY_INTERVAL_MS)
}

fn default_transition_duration_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_DURATION_MS)
}

fn default_slide_gap() -> Option<f32> {
    Some(DEFAULT_SLIDE_GAP)
}

fn default_resume_delay_ms() -> Option<u64> {
    Some(DEFAULT_RESUME_DELAY_MS)
}

fn default_resize_debounce_ms() -> Option<u64> {
    Some(DEFAULT_RESIZE_DEBOUNCE_MS)
}

fn default_slide_width() -> Option<f32> {
    Some(DEFAULT_SLIDE_WIDTH)
}

fn default_tablet_slide_width() -> Option<f32> {
    Some(DEFAULT_TABLET_SLIDE_WIDTH)
}

fn default_mobile_slide_width() -> Option<f32> {
    Some(DEFAULT_MOBILE_SLIDE_WIDTH)
}

fn default_container_padding() -> Option<f32> {
    Some(DEFAULT_CONTAINER_PADDING)
}

fn default_tablet_container_padding() -> Option<f32> {
    Some(DEFAULT_TABLET_CONTAINER_PADDING)
}

fn default_mobile_container_padding() -> Option<f32> {
    Some(DEFAULT_MOBILE_CONTAINER_PADDING)
}

fn default_tablet_breakpoint() -> Option<f32> {
    Some(DEFAULT_TABLET_BREAKPOINT)
}

fn default_mobile_breakpoint() -> Option<f32> {
    Some(DEFAULT_MOBILE_BREAKPOINT)
}

fn default_aspect_ratio() -> Option<[f32; 2]> {
    Some([DEFAULT_ASPECT_WIDTH, DEFAULT_ASPECT_HEIGHT])
}

fn default_loader_logo() -> Option<String> {
    Some(DEFAULT_LOADER_LOGO.to_string())
}

fn default_wordmark() -> Option<String> {
    Some(DEFAULT_WORDMARK.to_string())
}

fn default_loader_duration_ms() -> Option<u64> {
    Some(DEFAULT_LOADER_DURATION_MS)
}

fn default_loader_fade_out_ms() -> Option<u64> {
    Some(DEFAULT_LOADER_FADE_OUT_MS)
}

fn default_loader_logo_size() -> Option<f32> {
    Some(DEFAULT_LOADER_LOGO_SIZE)
}

fn default_circle_color() -> Option<String> {
    Some(DEFAULT_CIRCLE_COLOR.to_string())
}

fn default_background_color() -> Option<String> {
    Some(DEFAULT_BACKGROUND_COLOR.to_string())
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "could not read {}, using defaults: {}",
                            path.display(),
                            err
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
