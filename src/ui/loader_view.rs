// SPDX-License-Identifier: MPL-2.0
//! Full-window loading screen view.

use crate::loader::LoadingScreen;
use crate::media::SlideImage;
use crate::ui::design_tokens::{palette, sizing, typography};
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{center, container, image, stack, text, Container, Space};
use iced::{Color, Element, Length};
use std::time::Instant;

/// Renders the loading screen at its current opacity.
pub fn view<'a, Message: 'static>(loader: &'a LoadingScreen, now: Instant) -> Element<'a, Message> {
    let options = loader.options();
    let alpha = loader.opacity(now);
    let logo_size = options.logo_size;
    let ring_size = logo_size + 2.0 * sizing::RING_INSET;

    let mark: Element<'a, Message> = match loader.logo() {
        SlideImage::Ready(handle) => image(handle.clone())
            .width(Length::Fixed(logo_size))
            .opacity(alpha)
            .into(),
        SlideImage::Pending if options.logo.is_some() => Space::new().into(),
        SlideImage::Pending | SlideImage::Broken => text(options.wordmark.as_str())
            .size(typography::WORDMARK)
            .color(Color {
                a: alpha,
                ..palette::INK
            })
            .into(),
    };

    let spinner = AnimatedSpinner::new(options.circle_color, loader.spinner_rotation(), ring_size)
        .with_alpha(alpha)
        .into_element();

    let badge = stack![
        spinner,
        center(mark).width(Length::Fixed(ring_size)).height(Length::Fixed(ring_size)),
    ];

    let background = Color {
        a: options.background_color.a * alpha,
        ..options.background_color
    };

    Container::new(center(badge))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(background.into()),
            ..container::Style::default()
        })
        .into()
}
