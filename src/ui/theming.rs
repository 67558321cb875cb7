// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes for the carousel page.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub page_background: Color,
    pub slide_placeholder: Color,
    pub text_secondary: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            page_background: palette::WHITE,
            slide_placeholder: Color {
                a: opacity::PLACEHOLDER,
                ..palette::GRAY_400
            },
            text_secondary: palette::GRAY_700,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            page_background: palette::GRAY_900,
            slide_placeholder: Color {
                a: opacity::PLACEHOLDER,
                ..palette::GRAY_200
            },
            text_secondary: palette::GRAY_200,
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Detection errors fall back to light.
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// Matching built-in Iced theme.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
