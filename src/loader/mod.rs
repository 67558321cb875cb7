// SPDX-License-Identifier: MPL-2.0
//! Full-window loading screen shown while the page boots.
//!
//! The screen is an owned instance: the application creates one, shows it at
//! boot, tells it when the page finished loading and forwards clock ticks.
//! With auto-hide enabled it stays up for a configured time after the page
//! loaded, then fades out. The show and hide hooks surface as [`Effect`]s.

use crate::carousel::timer::Deadline;
use crate::error::FetchError;
use crate::media::{ImageSource, SlideImage};
use iced::widget::image::Handle;
use iced::Color;
use std::f32::consts::TAU;
use std::time::{Duration, Instant};

/// Spinner rotation speed in radians per second.
const SPINNER_SPEED: f32 = TAU;

/// Loading screen options.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderOptions {
    pub enabled: bool,
    /// Logo drawn inside the ring; the wordmark is shown when absent or broken.
    pub logo: Option<ImageSource>,
    pub wordmark: String,
    /// How long the screen stays up after the page loaded.
    pub duration: Duration,
    pub fade_out: Duration,
    pub auto_hide: bool,
    pub logo_size: f32,
    pub circle_color: Color,
    pub background_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Hidden,
    Visible,
    FadingOut { started_at: Instant },
    Destroyed,
}

/// Messages for the loading screen.
#[derive(Debug, Clone)]
pub enum Message {
    Show,
    Hide,
    /// Every startup fetch completed.
    PageLoaded,
    Tick,
    LogoLoaded(Result<Handle, FetchError>),
}

/// Effects produced by the loading screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The screen became visible.
    Shown,
    /// The fade-out finished and the screen is gone.
    Hidden,
}

/// Loading screen state.
#[derive(Debug, Clone)]
pub struct LoadingScreen {
    options: LoaderOptions,
    phase: Phase,
    hide_at: Deadline,
    spinner_rotation: f32,
    last_tick: Option<Instant>,
    logo: SlideImage,
}

impl LoadingScreen {
    #[must_use]
    pub fn new(options: LoaderOptions) -> Self {
        Self {
            options,
            phase: Phase::Hidden,
            hide_at: Deadline::default(),
            spinner_rotation: 0.0,
            last_tick: None,
            logo: SlideImage::Pending,
        }
    }

    /// Handle a loading screen message.
    pub fn handle(&mut self, msg: Message, now: Instant) -> Effect {
        if self.phase == Phase::Destroyed {
            return Effect::None;
        }

        match msg {
            Message::Show => self.show(now),
            Message::Hide => self.hide(now),
            Message::PageLoaded => {
                if self.options.auto_hide && self.phase == Phase::Visible {
                    self.hide_at.arm(now, self.options.duration);
                }
                Effect::None
            }
            Message::Tick => self.tick(now),
            Message::LogoLoaded(result) => {
                if let Err(err) = &result {
                    tracing::warn!(error = %err, "loader logo unavailable, using wordmark");
                }
                self.logo = result.into();
                Effect::None
            }
        }
    }

    fn show(&mut self, now: Instant) -> Effect {
        if self.phase == Phase::Visible {
            return Effect::None;
        }
        self.phase = Phase::Visible;
        self.hide_at.clear();
        self.last_tick = Some(now);
        tracing::debug!("loading screen shown");
        Effect::Shown
    }

    fn hide(&mut self, now: Instant) -> Effect {
        if self.phase != Phase::Visible {
            return Effect::None;
        }
        self.hide_at.clear();
        if self.options.fade_out.is_zero() {
            return self.finish_hide();
        }
        self.phase = Phase::FadingOut { started_at: now };
        Effect::None
    }

    fn finish_hide(&mut self) -> Effect {
        self.phase = Phase::Hidden;
        self.last_tick = None;
        tracing::debug!("loading screen hidden");
        Effect::Hidden
    }

    fn tick(&mut self, now: Instant) -> Effect {
        if let Some(last) = self.last_tick {
            let elapsed = now.saturating_duration_since(last).as_secs_f32();
            self.spinner_rotation = (self.spinner_rotation + SPINNER_SPEED * elapsed) % TAU;
        }
        if self.is_visible() {
            self.last_tick = Some(now);
        }

        if self.hide_at.fire(now) {
            return self.hide(now);
        }

        if let Phase::FadingOut { started_at } = self.phase {
            if now.saturating_duration_since(started_at) >= self.options.fade_out {
                return self.finish_hide();
            }
        }

        Effect::None
    }

    /// Drops all state. Later messages are ignored.
    pub fn destroy(&mut self) {
        self.phase = Phase::Destroyed;
        self.hide_at.clear();
        self.last_tick = None;
        self.logo = SlideImage::Pending;
    }

    /// Whether the screen is shown and not fading out.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Visible
    }

    /// Whether anything is drawn (shown or fading out).
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, Phase::Visible | Phase::FadingOut { .. })
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.phase == Phase::Destroyed
    }

    /// Opacity of the screen at `now`, from 1.0 down to 0.0 while fading.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Visible => 1.0,
            Phase::FadingOut { started_at } => {
                let fade = self.options.fade_out.as_secs_f32();
                if fade <= 0.0 {
                    return 0.0;
                }
                let elapsed = now.saturating_duration_since(started_at).as_secs_f32();
                (1.0 - elapsed / fade).clamp(0.0, 1.0)
            }
            Phase::Hidden | Phase::Destroyed => 0.0,
        }
    }

    /// Earliest instant at which a tick changes state.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::FadingOut { started_at } => Some(started_at + self.options.fade_out),
            _ => self.hide_at.at(),
        }
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    #[must_use]
    pub fn logo(&self) -> &SlideImage {
        &self.logo
    }

    #[must_use]
    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> LoaderOptions {
        LoaderOptions {
            enabled: true,
            logo: None,
            wordmark: "METADAX".to_string(),
            duration: Duration::from_millis(2500),
            fade_out: Duration::from_millis(600),
            auto_hide: true,
            logo_size: 250.0,
            circle_color: Color::from_rgb8(0x00, 0x56, 0xB3),
            background_color: Color::WHITE,
        }
    }

    #[test]
    fn show_emits_shown_once() {
        let t0 = Instant::now();
        let mut loader = LoadingScreen::new(options());

        assert_eq!(loader.handle(Message::Show, t0), Effect::Shown);
        assert!(loader.is_active());
        assert_eq!(loader.handle(Message::Show, t0), Effect::None);
    }

    #[test]
    fn hide_fades_then_emits_hidden() {
        let t0 = Instant::now();
        let mut loader = LoadingScreen::new(options());
        loader.handle(Message::Show, t0);

        assert_eq!(loader.handle(Message::Hide, t0), Effect::None);
        assert!(!loader.is_active());
        assert!(loader.is_visible());
        let half = loader.opacity(t0 + Duration::from_millis(300));
        assert!((half - 0.5).abs() < 1e-3);

        assert_eq!(
            loader.handle(Message::Tick, t0 + Duration::from_millis(599)),
            Effect::None
        );
        assert_eq!(
            loader.handle(Message::Tick, t0 + Duration::from_millis(600)),
            Effect::Hidden
        );
        assert!(!loader.is_visible());
    }

    #[test]
    fn hiding_a_hidden_loader_is_a_no_op() {
        let t0 = Instant::now();
        let mut loader = LoadingScreen::new(options());
        assert_eq!(loader.handle(Message::Hide, t0), Effect::None);
        assert_eq!(loader.handle(Message::Tick, t0 + Duration::from_secs(5)), Effect::None);
    }

    #[test]
    fn page_loaded_schedules_auto_hide() {
        let t0 = Instant::now();
        let mut loader = LoadingScreen::new(options());
        loader.handle(Message::Show, t0);
        loader.handle(Message::PageLoaded, t0);

        loader.handle(Message::Tick, t0 + Duration::from_millis(2499));
        assert!(loader.is_active());
        loader.handle(Message::Tick, t0 + Duration::from_millis(2500));
        assert!(!loader.is_active());
        assert_eq!(
            loader.handle(Message::Tick, t0 + Duration::from_millis(3100)),
            Effect::Hidden
        );
    }

    #[test]
    fn page_loaded_without_auto_hide_keeps_screen() {
        let t0 = Instant::now();
        let mut loader = LoadingScreen::new(LoaderOptions {
            auto_hide: false,
            ..options()
        });
        loader.handle(Message::Show, t0);
        loader.handle(Message::PageLoaded, t0);
        loader.handle(Message::Tick, t0 + Duration::from_secs(10));
        assert!(loader.is_active());
    }

    #[test]
    fn zero_fade_hides_immediately() {
        let t0 = Instant::now();
        let mut loader = LoadingScreen::new(LoaderOptions {
            fade_out: Duration::ZERO,
            ..options()
        });
        loader.handle(Message::Show, t0);
        assert_eq!(loader.handle(Message::Hide, t0), Effect::Hidden);
    }

    #[test]
    fn destroy_ignores_later_calls() {
        let t0 = Instant::now();
        let mut loader = LoadingScreen::new(options());
        loader.handle(Message::Show, t0);
        loader.destroy();

        assert!(!loader.is_active());
        assert!(loader.is_destroyed());
        assert_eq!(loader.handle(Message::Show, t0), Effect::None);
        assert!(loader.next_deadline().is_none());
    }

    #[test]
    fn spinner_advances_while_visible() {
        let t0 = Instant::now();
        let mut loader = LoadingScreen::new(options());
        loader.handle(Message::Show, t0);
        loader.handle(Message::Tick, t0 + Duration::from_millis(250));

        let rotation = loader.spinner_rotation();
        assert!((rotation - TAU / 4.0).abs() < 1e-3);
    }

    #[test]
    fn broken_logo_falls_back() {
        let t0 = Instant::now();
        let mut loader = LoadingScreen::new(options());
        loader.handle(Message::LogoLoaded(Err(FetchError::Status(404))), t0);
        assert!(loader.logo().is_broken());
    }
}
