// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the carousel track.
//!
//! [`TrackView`] is the toolkit side of the carousel: it receives offsets
//! from the state machine, eases animated moves and knows the responsive
//! slide sizes. [`CarouselCanvas`] draws the `3N` slides at the eased offset
//! and turns mouse, touch and wheel input into carousel messages.

use crate::carousel::animation::Tween;
use crate::carousel::layout::{ResponsiveLayout, SlideMetrics};
use crate::carousel::{Message, Motion, SlideList, TrackSurface, WheelDirection};
use crate::media::SlideImage;
use crate::ui::design_tokens::{radius, sizing};
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, touch, Element, Length, Point, Rectangle, Renderer, Size, Theme};
use std::time::Instant;

// =============================================================================
// Track surface
// =============================================================================

/// Rendering surface backed by an eased offset.
#[derive(Debug, Clone)]
pub struct TrackView {
    layout: ResponsiveLayout,
    metrics: SlideMetrics,
    offset: f32,
    tween: Option<Tween>,
}

impl TrackView {
    #[must_use]
    pub fn new(layout: ResponsiveLayout, viewport_width: f32) -> Self {
        Self {
            metrics: layout.metrics(viewport_width),
            layout,
            offset: 0.0,
            tween: None,
        }
    }

    /// Recomputes slide sizes for a new viewport width.
    /// Returns `true` when the slide pitch changed.
    pub fn resize(&mut self, viewport_width: f32) -> bool {
        let before = self.metrics.pitch();
        self.metrics = self.layout.metrics(viewport_width);
        (self.metrics.pitch() - before).abs() > f32::EPSILON
    }

    #[must_use]
    pub fn metrics(&self) -> SlideMetrics {
        self.metrics
    }

    /// Offset to draw at `now`.
    #[must_use]
    pub fn rendered_offset(&self, now: Instant) -> f32 {
        self.tween.map_or(self.offset, |tween| tween.value_at(now))
    }

    /// Whether an eased move is still in flight.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.tween.is_some_and(|tween| !tween.is_finished(now))
    }

    /// Drops a finished tween so the view stops requesting frames.
    pub fn settle(&mut self, now: Instant) {
        if self.tween.is_some_and(|tween| tween.is_finished(now)) {
            self.tween = None;
        }
    }
}

impl TrackSurface for TrackView {
    fn set_track_offset(&mut self, offset: f32, motion: Motion) {
        match motion {
            Motion::Instant => {
                self.tween = None;
            }
            Motion::Animated {
                started_at,
                duration,
            } => {
                let start = self.rendered_offset(started_at);
                self.tween = Some(Tween::new(start, offset, started_at, duration));
            }
        }
        self.offset = offset;
    }

    fn slide_width(&self) -> f32 {
        self.metrics.pitch()
    }
}

// =============================================================================
// Canvas program
// =============================================================================

/// Pointer state kept by the canvas between events.
#[derive(Debug, Default)]
pub struct PointerState {
    inside: bool,
    pressed: bool,
}

/// Draws the track and reports pointer input.
pub struct CarouselCanvas<'a> {
    slides: &'a SlideList,
    images: &'a [SlideImage],
    metrics: SlideMetrics,
    offset: f32,
    colors: ColorScheme,
}

impl<'a> CarouselCanvas<'a> {
    #[must_use]
    pub fn new(
        slides: &'a SlideList,
        images: &'a [SlideImage],
        view: &TrackView,
        colors: ColorScheme,
        now: Instant,
    ) -> Self {
        Self {
            slides,
            images,
            metrics: view.metrics(),
            offset: view.rendered_offset(now),
            colors,
        }
    }

    /// Full-width canvas as tall as the slides plus padding.
    pub fn into_element(self) -> Element<'a, Message> {
        let height = self.metrics.container_height();
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into()
    }

    /// Leading edge of the slide at `track_index`, relative to the canvas.
    fn slide_x(&self, track_index: usize) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let index = track_index as f32;
        self.metrics.container_padding + self.offset + index * self.metrics.pitch()
    }

    fn draw_placeholder(&self, frame: &mut Frame, rect: Rectangle, broken: bool) {
        let background = Path::rounded_rectangle(rect.position(), rect.size(), radius::MD.into());
        frame.fill(&background, self.colors.slide_placeholder);

        if broken {
            let center = rect.center();
            let half = sizing::BROKEN_MARK / 2.0;
            let cross = Path::new(|builder| {
                builder.move_to(Point::new(center.x - half, center.y - half));
                builder.line_to(Point::new(center.x + half, center.y + half));
                builder.move_to(Point::new(center.x + half, center.y - half));
                builder.line_to(Point::new(center.x - half, center.y + half));
            });
            frame.stroke(
                &cross,
                Stroke::default()
                    .with_width(2.0)
                    .with_color(self.colors.text_secondary),
            );
        }
    }
}

fn publish(message: Message) -> Option<Action<Message>> {
    Some(Action::publish(message).and_capture())
}

impl canvas::Program<Message> for CarouselCanvas<'_> {
    type State = PointerState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                let inside = cursor.position_in(bounds).is_some();
                if inside != state.inside {
                    state.inside = inside;
                    if !inside {
                        state.pressed = false;
                        return publish(Message::PointerExited);
                    }
                    return publish(Message::PointerEntered);
                }
                if state.pressed {
                    return publish(Message::PointerMoved { x: position.x });
                }
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                if state.inside {
                    state.inside = false;
                    state.pressed = false;
                    return publish(Message::PointerExited);
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_over(bounds) {
                    state.pressed = true;
                    return publish(Message::PointerPressed { x: position.x });
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if std::mem::take(&mut state.pressed) {
                    return publish(Message::PointerReleased);
                }
            }
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if cursor.is_over(bounds) {
                    let y = match delta {
                        mouse::ScrollDelta::Lines { y, .. }
                        | mouse::ScrollDelta::Pixels { y, .. } => *y,
                    };
                    // Iced reports wheel-away-from-user as positive y.
                    if let Some(direction) = WheelDirection::from_scroll_down(-y) {
                        return publish(Message::Wheel(direction));
                    }
                }
            }
            iced::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                if bounds.contains(*position) {
                    state.pressed = true;
                    return publish(Message::PointerPressed { x: position.x });
                }
            }
            iced::Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                if state.pressed {
                    return publish(Message::PointerMoved { x: position.x });
                }
            }
            iced::Event::Touch(
                touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. },
            ) => {
                if std::mem::take(&mut state.pressed) {
                    return publish(Message::PointerReleased);
                }
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = Size::new(self.metrics.slide_width, self.metrics.image_height);
        let top = self.metrics.container_padding;

        for slide in self.slides.iter() {
            let x = self.slide_x(slide.track_index);
            if x + size.width < 0.0 || x > bounds.width {
                continue;
            }

            let rect = Rectangle::new(Point::new(x, top), size);
            match self.images.get(slide.base_index) {
                Some(SlideImage::Ready(handle)) => {
                    frame.draw_image(rect, canvas::Image::new(handle.clone()));
                }
                Some(SlideImage::Broken) => self.draw_placeholder(&mut frame, rect, true),
                Some(SlideImage::Pending) | None => {
                    self.draw_placeholder(&mut frame, rect, false);
                }
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.pressed {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
