// SPDX-License-Identifier: MPL-2.0
//! Positional state machine of the infinite drag carousel.
//!
//! The carousel owns its rendering surface and reacts to discrete messages
//! (pointer, wheel, hover, resize, frame and timer ticks). Every message
//! carries the caller's `now`, and all timers are deadlines checked on
//! [`Message::Tick`], so the whole machine runs deterministically in tests.
//!
//! Settled positions are always whole slide multiples. After each settle the
//! translate is pulled back into the buffer zone around the middle copy by
//! an invisible one-loop jump.

use super::geometry::LoopGeometry;
use super::slides::SlideList;
use super::surface::{Motion, TrackSurface};
use super::timer::{AutoPlay, Deadline, TimerId};
use crate::config::CarouselSettings;
use crate::error::MountError;
use std::time::Instant;

/// Direction of a single wheel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    /// Advance to the next slide.
    Forward,
    /// Go back to the previous slide.
    Backward,
}

impl WheelDirection {
    /// Maps a vertical scroll delta where positive means "scroll down"
    /// (toward the user). Zero deltas produce no step.
    #[must_use]
    pub fn from_scroll_down(delta: f32) -> Option<Self> {
        if delta > 0.0 {
            Some(WheelDirection::Forward)
        } else if delta < 0.0 {
            Some(WheelDirection::Backward)
        } else {
            None
        }
    }
}

/// Messages for the carousel state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Mouse button or finger went down at horizontal position `x`.
    PointerPressed { x: f32 },
    /// Pointer moved to horizontal position `x`.
    PointerMoved { x: f32 },
    /// Mouse button released, finger lifted or touch lost.
    PointerReleased,
    /// Pointer entered the carousel area.
    PointerEntered,
    /// Pointer left the carousel area.
    PointerExited,
    Wheel(WheelDirection),
    /// The viewport changed size; the re-snap is debounced.
    Resized,
    /// Rendering frame while a drag is in progress.
    Frame,
    /// Periodic clock tick driving all deadlines.
    Tick,
}

/// Effects produced by the carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// A one-slide move started (auto-play or wheel).
    Advanced { base_index: usize },
    /// A drag started; the track now follows the pointer.
    DragStarted,
    /// A drag ended and the track is snapping to `target`.
    Released { moved_by: f32, target: f32 },
    /// A transition completed. `recentered_by` is the invisible jump applied
    /// afterwards, if any.
    Settled {
        base_index: usize,
        recentered_by: Option<f32>,
    },
    /// The track was re-laid out for a new slide width.
    Resnapped { slide_width: f32 },
}

/// Infinite drag carousel bound to a rendering surface.
#[derive(Debug)]
pub struct Carousel<S> {
    surface: S,
    slides: SlideList,
    settings: CarouselSettings,
    geometry: LoopGeometry,
    current_translate: f32,
    prev_translate: f32,
    is_dragging: bool,
    is_transitioning: bool,
    is_hovered: bool,
    drag_start_x: f32,
    /// Per-frame position sync, active only between press and release.
    frame_sync: bool,
    autoplay: AutoPlay,
    resume: Deadline,
    settle: Deadline,
    /// Auto-play resumes after the pending settle (drag release).
    resume_after_settle: bool,
    resize: Deadline,
    destroyed: bool,
}

impl<S: TrackSurface> Carousel<S> {
    /// Mounts the carousel: parks the track at the first slide of the middle
    /// copy without animation and starts auto-play.
    pub fn mount(
        slides: SlideList,
        mut surface: S,
        settings: CarouselSettings,
        now: Instant,
    ) -> Result<Self, MountError> {
        if slides.base_len() == 0 {
            return Err(MountError::NoImages);
        }

        let geometry = LoopGeometry::new(slides.loop_len(), surface.slide_width());
        let home = geometry.home_offset();
        surface.set_track_offset(home, Motion::Instant);

        let mut autoplay = AutoPlay::new(settings.auto_play_interval);
        autoplay.start(now);

        Ok(Self {
            surface,
            slides,
            settings,
            geometry,
            current_translate: home,
            prev_translate: home,
            is_dragging: false,
            is_transitioning: false,
            is_hovered: false,
            drag_start_x: 0.0,
            frame_sync: false,
            autoplay,
            resume: Deadline::default(),
            settle: Deadline::default(),
            resume_after_settle: false,
            resize: Deadline::default(),
            destroyed: false,
        })
    }

    /// Handle a carousel message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message, now: Instant) -> Effect {
        if self.destroyed {
            return Effect::None;
        }

        match msg {
            Message::PointerPressed { x } => self.press(x, now),
            Message::PointerMoved { x } => {
                if self.is_dragging {
                    self.current_translate = self.prev_translate + (x - self.drag_start_x);
                }
                Effect::None
            }
            Message::PointerReleased => self.release(now),
            Message::PointerEntered => {
                self.is_hovered = true;
                if self.settings.pause_on_hover {
                    self.stop_auto_play();
                }
                Effect::None
            }
            Message::PointerExited => {
                self.is_hovered = false;
                if self.is_dragging {
                    return self.release(now);
                }
                if self.settings.pause_on_hover && !self.resume_after_settle {
                    self.start_auto_play(now);
                }
                Effect::None
            }
            Message::Wheel(direction) => self.step(direction, now),
            Message::Resized => {
                self.resize.arm(now, self.settings.resize_debounce);
                Effect::None
            }
            Message::Frame => {
                if self.frame_sync && self.is_dragging {
                    self.surface
                        .set_track_offset(self.current_translate, Motion::Instant);
                }
                Effect::None
            }
            Message::Tick => self.tick(now),
        }
    }

    fn tick(&mut self, now: Instant) -> Effect {
        if self.settle.fire(now) {
            return self.finish_transition(now);
        }

        if self.resize.fire(now) {
            return self.resnap(now);
        }

        if self.resume.fire(now) && !self.is_paused_by_hover() {
            self.autoplay.start(now);
        }

        if self.autoplay.poll(now) {
            return self.auto_advance(now);
        }

        Effect::None
    }

    /// Moves one slide forward unless a drag or a transition is in progress.
    pub fn auto_advance(&mut self, now: Instant) -> Effect {
        if self.is_dragging || self.is_transitioning {
            return Effect::None;
        }
        self.animate_by(-self.geometry.slide_width(), now)
    }

    fn step(&mut self, direction: WheelDirection, now: Instant) -> Effect {
        if self.is_transitioning || self.is_dragging {
            return Effect::None;
        }

        let width = self.geometry.slide_width();
        let delta = match direction {
            WheelDirection::Forward => -width,
            WheelDirection::Backward => width,
        };
        let effect = self.animate_by(delta, now);
        self.reset_auto_play(now);
        effect
    }

    fn animate_by(&mut self, delta: f32, now: Instant) -> Effect {
        self.current_translate += delta;
        self.prev_translate = self.current_translate;
        self.begin_transition(now);
        Effect::Advanced {
            base_index: self.visible_base_index(),
        }
    }

    fn begin_transition(&mut self, now: Instant) {
        self.is_transitioning = true;
        self.surface.set_track_offset(
            self.current_translate,
            Motion::Animated {
                started_at: now,
                duration: self.settings.transition_duration,
            },
        );
        self.settle.arm(now, self.settings.transition_duration);
    }

    fn press(&mut self, x: f32, now: Instant) -> Effect {
        if self.is_transitioning {
            // Start the drag from a settled, re-centered base.
            self.settle.clear();
            self.finish_transition(now);
        }

        self.is_dragging = true;
        self.drag_start_x = x;
        self.prev_translate = self.current_translate;
        self.resume_after_settle = false;
        self.stop_auto_play();
        self.frame_sync = true;
        self.surface
            .set_track_offset(self.current_translate, Motion::Instant);
        Effect::DragStarted
    }

    fn release(&mut self, now: Instant) -> Effect {
        if !self.is_dragging {
            return Effect::None;
        }

        self.is_dragging = false;
        self.frame_sync = false;

        let moved_by = self.current_translate - self.prev_translate;
        let target = self.geometry.snap_nearest(self.current_translate);
        self.current_translate = target;
        self.prev_translate = target;
        self.resume_after_settle = true;
        self.begin_transition(now);

        Effect::Released { moved_by, target }
    }

    fn finish_transition(&mut self, now: Instant) -> Effect {
        self.is_transitioning = false;
        let recentered_by = self.recenter();

        if std::mem::take(&mut self.resume_after_settle) {
            self.reset_auto_play(now);
        }

        if let Some(shift) = recentered_by {
            tracing::debug!(shift, offset = self.current_translate, "carousel re-centered");
        }

        Effect::Settled {
            base_index: self.visible_base_index(),
            recentered_by,
        }
    }

    /// Jumps one loop width back into the buffer zone when needed and
    /// returns the applied shift.
    fn recenter(&mut self) -> Option<f32> {
        let shifted = self.geometry.recenter(self.current_translate)?;
        let shift = shifted - self.current_translate;
        self.current_translate = shifted;
        self.prev_translate = shifted;
        self.surface.set_track_offset(shifted, Motion::Instant);
        Some(shift)
    }

    fn resnap(&mut self, now: Instant) -> Effect {
        if self.is_dragging {
            // Re-layout once the drag is over.
            self.resize.arm(now, self.settings.resize_debounce);
            return Effect::None;
        }

        let slide_width = self.surface.slide_width();
        if slide_width <= 0.0 {
            return Effect::None;
        }

        let index = self.geometry.slide_index(self.current_translate);
        self.geometry = self.geometry.with_slide_width(slide_width);
        self.current_translate = self.geometry.offset_for_index(index);
        self.prev_translate = self.current_translate;
        self.surface
            .set_track_offset(self.current_translate, Motion::Instant);
        self.recenter();

        Effect::Resnapped { slide_width }
    }

    /// Starts auto-play now, replacing any running timer.
    pub fn start_auto_play(&mut self, now: Instant) -> TimerId {
        self.resume.clear();
        self.autoplay.start(now)
    }

    /// Stops auto-play and cancels a pending resumption.
    pub fn stop_auto_play(&mut self) {
        self.autoplay.stop();
        self.resume.clear();
    }

    /// Stops auto-play and schedules it to restart after the resume delay.
    pub fn reset_auto_play(&mut self, now: Instant) {
        self.autoplay.stop();
        self.resume.arm(now, self.settings.resume_delay);
    }

    fn is_paused_by_hover(&self) -> bool {
        self.settings.pause_on_hover && self.is_hovered
    }

    /// Clears every timer and drag state. Further messages are ignored.
    pub fn destroy(&mut self) {
        self.stop_auto_play();
        self.settle.clear();
        self.resize.clear();
        self.frame_sync = false;
        self.is_dragging = false;
        self.is_transitioning = false;
        self.resume_after_settle = false;
        self.destroyed = true;
    }

    /// Earliest pending deadline, used to decide how often to tick.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.settle.at(),
            self.resize.at(),
            self.resume.at(),
            self.autoplay.next_fire(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Whether the per-frame position sync is running.
    #[must_use]
    pub fn wants_frames(&self) -> bool {
        self.frame_sync
    }

    #[must_use]
    pub fn current_translate(&self) -> f32 {
        self.current_translate
    }

    #[must_use]
    pub fn prev_translate(&self) -> f32 {
        self.prev_translate
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    #[must_use]
    pub fn is_auto_playing(&self) -> bool {
        self.autoplay.is_running()
    }

    #[must_use]
    pub fn auto_play_timer(&self) -> Option<TimerId> {
        self.autoplay.current()
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    #[must_use]
    pub fn slide_width(&self) -> f32 {
        self.geometry.slide_width()
    }

    #[must_use]
    pub fn geometry(&self) -> LoopGeometry {
        self.geometry
    }

    #[must_use]
    pub fn slides(&self) -> &SlideList {
        &self.slides
    }

    #[must_use]
    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    /// Rendered slide index at the leading edge.
    #[must_use]
    pub fn slide_index(&self) -> i64 {
        self.geometry.slide_index(self.current_translate)
    }

    /// Base image index at the leading edge.
    #[must_use]
    pub fn visible_base_index(&self) -> usize {
        self.geometry.base_index(self.current_translate) % self.slides.base_len().max(1)
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::surface::RecordingSurface;
    use crate::media::ImageSource;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use std::time::Duration;

    const W: f32 = 304.0;
    const INTERVAL: Duration = Duration::from_millis(3500);
    const TRANSITION: Duration = Duration::from_millis(800);
    const RESUME: Duration = Duration::from_millis(1000);

    fn slides(count: usize) -> SlideList {
        SlideList::tripled(
            (0..count)
                .map(|i| ImageSource::parse(&format!("https://cdn.example.com/{i}.png")))
                .collect(),
        )
    }

    fn settings() -> CarouselSettings {
        CarouselSettings {
            auto_play_interval: INTERVAL,
            transition_duration: TRANSITION,
            resume_delay: RESUME,
            resize_debounce: Duration::from_millis(250),
            pause_on_hover: true,
        }
    }

    fn mounted(count: usize, t0: Instant) -> Carousel<RecordingSurface> {
        Carousel::mount(slides(count), RecordingSurface::new(W), settings(), t0)
            .expect("mount")
    }

    fn assert_on_rendered_slide(carousel: &Carousel<RecordingSurface>, step: usize) {
        let index = carousel.slide_index();
        assert!(
            index >= 0 && (index as usize) < carousel.slides().len(),
            "step {step}: leading slide {index} of {} is not rendered",
            carousel.slides().len()
        );
    }

    #[test]
    fn short_lists_always_settle_on_rendered_slides() {
        for count in 1..=2 {
            let mut now = Instant::now();
            let mut carousel = mounted(count, now);
            carousel.stop_auto_play();
            assert_on_rendered_slide(&carousel, 0);

            let steps = 3 * count + 6;
            for step in 1..=steps {
                carousel.auto_advance(now);
                now += TRANSITION;
                carousel.handle(Message::Tick, now);
                assert_on_rendered_slide(&carousel, step);
                assert_eq!(carousel.visible_base_index(), step % count);
            }

            for step in 1..=steps {
                carousel.handle(Message::Wheel(WheelDirection::Backward), now);
                now += TRANSITION;
                carousel.handle(Message::Tick, now);
                assert_on_rendered_slide(&carousel, step);
            }
            assert_eq!(carousel.visible_base_index(), 0);
        }
    }

    #[test]
    fn mount_parks_on_middle_copy_instantly() {
        let t0 = Instant::now();
        let carousel = mounted(5, t0);

        assert_eq!(carousel.slides().len(), 15);
        assert_abs_diff_eq!(carousel.current_translate(), -5.0 * W, epsilon = F32_EPSILON);
        assert_eq!(carousel.surface().last_motion(), Some(Motion::Instant));
        assert!(carousel.is_auto_playing());
    }

    #[test]
    fn mount_without_images_fails() {
        let result = Carousel::mount(
            slides(0),
            RecordingSurface::new(W),
            settings(),
            Instant::now(),
        );
        assert_eq!(result.err(), Some(MountError::NoImages));
    }

    #[test]
    fn auto_advance_moves_one_slide_and_settles() {
        let t0 = Instant::now();
        let mut carousel = mounted(5, t0);

        let effect = carousel.handle(Message::Tick, t0 + INTERVAL);
        assert_eq!(effect, Effect::Advanced { base_index: 1 });
        assert_abs_diff_eq!(carousel.current_translate(), -6.0 * W, epsilon = F32_EPSILON);
        assert!(carousel.is_transitioning());
        assert!(carousel.surface().last_motion().is_some_and(|m| m.is_animated()));

        let effect = carousel.handle(Message::Tick, t0 + INTERVAL + TRANSITION);
        assert_eq!(
            effect,
            Effect::Settled {
                base_index: 1,
                recentered_by: None
            }
        );
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn auto_advance_is_skipped_mid_transition() {
        let t0 = Instant::now();
        let mut carousel = mounted(5, t0);
        carousel.handle(Message::Wheel(WheelDirection::Forward), t0);

        assert_eq!(carousel.auto_advance(t0), Effect::None);
        assert_abs_diff_eq!(carousel.current_translate(), -6.0 * W, epsilon = F32_EPSILON);
    }

    #[test]
    fn drag_follows_pointer_linearly() {
        let t0 = Instant::now();
        let mut carousel = mounted(5, t0);

        assert_eq!(
            carousel.handle(Message::PointerPressed { x: 400.0 }, t0),
            Effect::DragStarted
        );
        carousel.handle(Message::PointerMoved { x: 250.0 }, t0);
        assert_abs_diff_eq!(
            carousel.current_translate(),
            -5.0 * W - 150.0,
            epsilon = 1e-3
        );
        assert!(!carousel.is_auto_playing());
        assert!(carousel.wants_frames());

        carousel.handle(Message::Frame, t0);
        assert_abs_diff_eq!(
            carousel.surface().last_offset().unwrap_or_default(),
            -5.0 * W - 150.0,
            epsilon = 1e-3
        );
    }

    #[test]
    fn release_snaps_to_nearest_slide_and_resumes_later() {
        let t0 = Instant::now();
        let mut carousel = mounted(5, t0);
        carousel.handle(Message::PointerPressed { x: 400.0 }, t0);
        carousel.handle(Message::PointerMoved { x: 200.0 }, t0);

        let effect = carousel.handle(Message::PointerReleased, t0);
        match effect {
            Effect::Released { moved_by, target } => {
                assert_abs_diff_eq!(moved_by, -200.0, epsilon = 1e-3);
                assert_abs_diff_eq!(target, -6.0 * W, epsilon = 1e-3);
            }
            other => panic!("expected Released, got {other:?}"),
        }
        assert!(!carousel.wants_frames());
        assert!(!carousel.is_dragging());

        carousel.handle(Message::Tick, t0 + TRANSITION);
        assert!(!carousel.is_auto_playing());
        carousel.handle(Message::Tick, t0 + TRANSITION + RESUME);
        assert!(carousel.is_auto_playing());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let t0 = Instant::now();
        let mut carousel = mounted(5, t0);
        assert_eq!(carousel.handle(Message::PointerReleased, t0), Effect::None);
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn pointer_exit_while_dragging_releases() {
        let t0 = Instant::now();
        let mut carousel = mounted(5, t0);
        carousel.handle(Message::PointerEntered, t0);
        carousel.handle(Message::PointerPressed { x: 100.0 }, t0);
        carousel.handle(Message::PointerMoved { x: 300.0 }, t0);

        let effect = carousel.handle(Message::PointerExited, t0);
        assert!(matches!(effect, Effect::Released { .. }));
        assert!(!carousel.is_dragging());
        assert_abs_diff_eq!(carousel.current_translate(), -4.0 * W, epsilon = 1e-3);
    }

    #[test]
    fn press_mid_transition_completes_it_first() {
        let t0 = Instant::now();
        let mut carousel = mounted(5, t0);
        carousel.handle(Message::Wheel(WheelDirection::Backward), t0);
        assert!(carousel.is_transitioning());

        carousel.handle(Message::PointerPressed { x: 0.0 }, t0 + Duration::from_millis(100));
        assert!(!carousel.is_transitioning());
        assert!(carousel.is_dragging());
        assert_abs_diff_eq!(carousel.prev_translate(), -4.0 * W, epsilon = 1e-3);
    }

    #[test]
    fn wheel_steps_one_slide_each_way() {
        let t0 = Instant::now();
        let mut carousel = mounted(5, t0);

        carousel.handle(Message::Wheel(WheelDirection::Forward), t0);
        assert_abs_diff_eq!(carousel.current_translate(), -6.0 * W, epsilon = 1e-3);
        carousel.handle(Message::Tick, t0 + TRANSITION);

        carousel.handle(Message::Wheel(WheelDirection::Backward), t0 + TRANSITION);
        assert_abs_diff_eq!(carousel.current_translate(), -5.0 * W, epsilon = 1e-3);
    }

    #[test]
    fn wheel_during_transition_is_ignored() {
        let t0 = Instant::now();
        let mut carousel = mounted(5, t0);

        carousel.handle(Message::Wheel(WheelDirection::Forward), t0);
        let effect = carousel.handle(
            Message::Wheel(WheelDirection::Forward),
            t0 + Duration::from_millis(10),
        );
        assert_eq!(effect, Effect::None);
        assert_abs_diff_eq!(carousel.current_translate(), -6.0 * W, epsilon = 1e-3);
    }

    #[test]
    fn wheel_resets_auto_play() {
        let t0 = Instant::now();
        let mut carousel = mounted(5, t0);

        carousel.handle(Message::Wheel(WheelDirection::Forward), t0);
        assert!(!carousel.is_auto_playing());
        carousel.handle(Message::Tick, t0 + TRANSITION);
        carousel.handle(Message::Tick, t0 + RESUME);
        assert!(carousel.is_auto_playing());
    }

    #[test]
    fn settle_near_start_recenters_invisibly() {
        let t0 = Instant::now();
        let mut carousel = mounted(5, t0);
        let mut now = t0;
        for _ in 0..4 {
            carousel.handle(Message::Wheel(WheelDirection::Backward), now);
            now += TRANSITION;
            carousel.handle(Message::Tick, now);
        }

        // -5w → -1w, which is past the start threshold (-2w) and jumps to -6w.
        assert_abs_diff_eq!(carousel.current_translate(), -6.0 * W, epsilon = 1e-3);
        assert_eq!(carousel.visible_base_index(), 1);
        assert_eq!(carousel.surface().last_motion(), Some(Motion::Instant));
    }

    #[test]
    fn hover_pauses_and_leave_restarts_auto_play() {
        let t0 = Instant::now();
        let mut carousel = mounted(5, t0);

        carousel.handle(Message::PointerEntered, t0);
        assert!(!carousel.is_auto_playing());
        assert_eq!(carousel.handle(Message::Tick, t0 + INTERVAL * 2), Effect::None);

        let later = t0 + INTERVAL * 2;
        carousel.handle(Message::PointerExited, later);
        assert!(carousel.is_auto_playing());
        assert!(matches!(
            carousel.handle(Message::Tick, later + INTERVAL),
            Effect::Advanced { .. }
        ));
    }

    #[test]
    fn hover_defers_resume_after_wheel() {
        let t0 = Instant::now();
        let mut carousel = mounted(5, t0);
        carousel.handle(Message::PointerEntered, t0);
        carousel.handle(Message::Wheel(WheelDirection::Forward), t0);

        carousel.handle(Message::Tick, t0 + TRANSITION);
        carousel.handle(Message::Tick, t0 + RESUME);
        assert!(!carousel.is_auto_playing());
    }

    #[test]
    fn hover_pause_can_be_disabled() {
        let t0 = Instant::now();
        let mut carousel = Carousel::mount(
            slides(5),
            RecordingSurface::new(W),
            CarouselSettings {
                pause_on_hover: false,
                ..settings()
            },
            t0,
        )
        .expect("mount");

        carousel.handle(Message::PointerEntered, t0);
        assert!(carousel.is_auto_playing());
    }

    #[test]
    fn resize_is_debounced_and_keeps_logical_index() {
        let t0 = Instant::now();
        let mut carousel = mounted(5, t0);
        carousel.handle(Message::Wheel(WheelDirection::Forward), t0);
        carousel.handle(Message::Tick, t0 + TRANSITION);
        assert_eq!(carousel.slide_index(), 6);

        let resize_at = t0 + TRANSITION;
        carousel.surface_mut().slide_width = 244.0;
        carousel.handle(Message::Resized, resize_at);
        carousel.handle(Message::Resized, resize_at + Duration::from_millis(200));

        assert_eq!(
            carousel.handle(Message::Tick, resize_at + Duration::from_millis(300)),
            Effect::None
        );
        let effect = carousel.handle(Message::Tick, resize_at + Duration::from_millis(450));
        assert_eq!(effect, Effect::Resnapped { slide_width: 244.0 });
        assert_abs_diff_eq!(carousel.current_translate(), -6.0 * 244.0, epsilon = 1e-3);
        assert_eq!(carousel.slide_index(), 6);
        assert_eq!(carousel.surface().last_motion(), Some(Motion::Instant));
    }

    #[test]
    fn destroy_clears_timers_and_ignores_messages() {
        let t0 = Instant::now();
        let mut carousel = mounted(5, t0);
        carousel.handle(Message::PointerPressed { x: 10.0 }, t0);

        carousel.destroy();
        assert!(carousel.is_destroyed());
        assert!(!carousel.is_dragging());
        assert!(!carousel.wants_frames());
        assert!(carousel.next_deadline().is_none());
        assert_eq!(carousel.handle(Message::Tick, t0 + INTERVAL * 3), Effect::None);
    }

    #[test]
    fn next_deadline_tracks_auto_play() {
        let t0 = Instant::now();
        let carousel = mounted(5, t0);
        assert_eq!(carousel.next_deadline(), Some(t0 + INTERVAL));
    }
}
