// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::carousel::Page;
use crate::loader::LoadingScreen;
use crate::media::SlideImage;
use crate::ui::carousel_view::{CarouselCanvas, TrackView};
use crate::ui::design_tokens::typography;
use crate::ui::loader_view;
use crate::ui::theming::ColorScheme;
use iced::widget::{container, opaque, stack, text, Container};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub page: &'a Page<TrackView>,
    pub target: &'a str,
    pub images: &'a [SlideImage],
    pub loader: &'a LoadingScreen,
    pub colors: ColorScheme,
    pub now: Instant,
}

/// Renders the carousel, with the loading screen on top while it is visible.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ctx.colors;

    let content: Element<'_, Message> = match ctx.page.carousel(ctx.target) {
        Some(carousel) => CarouselCanvas::new(
            carousel.slides(),
            ctx.images,
            carousel.surface(),
            colors,
            ctx.now,
        )
        .into_element()
        .map(Message::Carousel),
        None => Container::new(
            text("No images to display")
                .size(typography::CAPTION)
                .color(colors.text_secondary),
        )
        .center_x(Length::Fill)
        .into(),
    };

    // Full width so slide metrics follow the window width.
    let page = Container::new(content)
        .width(Length::Fill)
        .center_y(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(colors.page_background.into()),
            ..container::Style::default()
        });

    if ctx.loader.is_visible() {
        stack![page, opaque(loader_view::view(ctx.loader, ctx.now))].into()
    } else {
        page.into()
    }
}
