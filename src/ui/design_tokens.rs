// SPDX-License-Identifier: MPL-2.0
#![doc = r##"
# Design Tokens

Design tokens for the carousel page and its loading screen.

## Organization

- **Palette**: Brand and neutral colors, plus a hex color parser
- **Opacity**: Standardized opacity levels
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use iced_carousel::ui::design_tokens::{palette, opacity};
use iced::Color;

let placeholder = Color {
    a: opacity::PLACEHOLDER,
    ..palette::GRAY_400
};

assert_eq!(palette::parse_hex("#0056B3"), Some(palette::BRAND_BLUE));
```
"##]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const INK: Color = Color::from_rgb(
        0x1E as f32 / 255.0,
        0x1E as f32 / 255.0,
        0x1E as f32 / 255.0,
    );
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors
    pub const BRAND_BLUE: Color = Color::from_rgb(0.0, 0x56 as f32 / 255.0, 0xB3 as f32 / 255.0);

    /// Parses `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    #[must_use]
    pub fn parse_hex(raw: &str) -> Option<Color> {
        let hex = raw.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => {
                let expand = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
                Some(Color::from_rgb8(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Some(Color::from_rgb8(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            8 => Some(Color::from_rgba8(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                f32::from(channel(&hex[6..8])?) / 255.0,
            )),
            _ => None,
        }
    }
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Ring behind the loader's rotating arc.
    pub const RING_TRACK: f32 = 0.15;
    /// Slide placeholder while its image is pending or broken.
    pub const PLACEHOLDER: f32 = 0.12;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Stroke width of the loader ring.
    pub const RING_STROKE: f32 = 4.0;
    /// Extra room around the logo taken by the ring.
    pub const RING_INSET: f32 = 24.0;
    /// Icon drawn on broken slides.
    pub const BROKEN_MARK: f32 = 24.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    /// Loader wordmark.
    pub const WORDMARK: f32 = 36.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::PLACEHOLDER > 0.0 && opacity::PLACEHOLDER < 1.0);

    assert!(typography::WORDMARK > typography::CAPTION);
    assert!(sizing::RING_INSET > sizing::RING_STROKE);
};
