// SPDX-License-Identifier: MPL-2.0
use iced_carousel::config::{self, Config, DEFAULT_IMAGES, DEFAULT_MOUNT_TARGET};
use iced_carousel::ui::design_tokens::palette;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn partial_file_keeps_defaults_and_clamps_timing() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        r#"
[carousel]
images = ["https://cdn.example.com/a.png", "  ", "/srv/slides/b.webp"]
auto_play_interval_ms = 10
transition_duration_ms = 999999
"#,
    )
    .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let settings = config.carousel.settings();
    assert_eq!(settings.auto_play_interval, Duration::from_millis(500));
    assert_eq!(settings.transition_duration, Duration::from_millis(5000));
    assert_eq!(settings.resume_delay, Duration::from_millis(1000));
    assert_eq!(config.carousel.mount_target(), DEFAULT_MOUNT_TARGET);
    assert_eq!(config.carousel.image_sources().len(), 2);
    assert!(config.loader.options().enabled);
}

#[test]
fn malformed_file_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[carousel\nimages = 3")
        .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_some_and(|w| w.contains("settings.toml")));
    assert_eq!(config, Config::default());
    assert_eq!(config.carousel.image_sources().len(), DEFAULT_IMAGES.len());
}

#[test]
fn layout_section_drives_responsive_metrics() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        r#"
[carousel]
slide_gap = 10.0

[layout]
slide_width = 300.0
mobile_breakpoint = 500.0
mobile_slide_width = 150.0
aspect_ratio = [2.0, 1.0]
"#,
    )
    .expect("Failed to write config file");

    let (config, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    let layout = config.layout.layout(config.carousel.slide_gap());

    let desktop = layout.metrics(1280.0);
    assert_eq!(desktop.pitch(), 310.0);
    assert_eq!(desktop.image_height, 150.0);

    let mobile = layout.metrics(500.0);
    assert_eq!(mobile.slide_width, 150.0);
    assert_eq!(mobile.pitch(), 160.0);
}

#[test]
fn loader_section_accepts_blank_logo_and_rejects_bad_colors() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        r##"
[loader]
logo = ""
wordmark = "ACME"
circle_color = "not-a-color"
background_color = "#000"
"##,
    )
    .expect("Failed to write config file");

    let (config, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    let options = config.loader.options();

    assert!(options.logo.is_none());
    assert_eq!(options.wordmark, "ACME");
    assert_eq!(options.circle_color, palette::BRAND_BLUE);
    assert_eq!(options.background_color, palette::BLACK);
}

#[test]
fn saved_config_is_read_back_from_override_dir() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut config = Config::default();
    config.carousel.mount_target = Some("partners-carousel".to_string());
    config.carousel.pause_on_hover = Some(false);

    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded.carousel.mount_target(), "partners-carousel");
    assert!(!loaded.carousel.settings().pause_on_hover);
}
