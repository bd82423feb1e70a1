// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing and sizes shared by every card of the greeting.

## Organization

- **Palette**: Base colors (pastel backdrop, card accents)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_greeting::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::CAROUSEL_BUTTON,
    ..palette::WHITE
};

let padding = spacing::LG; // 24px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb8(0x37, 0x41, 0x51);
    pub const GRAY_600: Color = Color::from_rgb8(0x4B, 0x55, 0x63);
    pub const GRAY_500: Color = Color::from_rgb8(0x6B, 0x72, 0x80);
    pub const GRAY_200: Color = Color::from_rgb8(0xE5, 0xE7, 0xEB);
    pub const GRAY_100: Color = Color::from_rgb8(0xF3, 0xF4, 0xF6);

    // Backdrop gradient stops
    pub const PINK_100: Color = Color::from_rgb8(0xFC, 0xE7, 0xF3);
    pub const PURPLE_100: Color = Color::from_rgb8(0xF3, 0xE8, 0xFF);
    pub const YELLOW_50: Color = Color::from_rgb8(0xFE, 0xFC, 0xE8);

    // Accents
    pub const PINK_400: Color = Color::from_rgb8(0xF4, 0x72, 0xB6);
    pub const PINK_500: Color = Color::from_rgb8(0xEC, 0x48, 0x99);
    pub const PINK_600: Color = Color::from_rgb8(0xDB, 0x27, 0x77);
    pub const ROSE_500: Color = Color::from_rgb8(0xF4, 0x3F, 0x5E);
    pub const PURPLE_400: Color = Color::from_rgb8(0xC0, 0x84, 0xFC);
    pub const PURPLE_500: Color = Color::from_rgb8(0xA8, 0x55, 0xF7);
    pub const PURPLE_600: Color = Color::from_rgb8(0x93, 0x33, 0xEA);
    pub const GREEN_400: Color = Color::from_rgb8(0x4A, 0xDE, 0x80);
    pub const GREEN_500: Color = Color::from_rgb8(0x22, 0xC5, 0x5E);
    pub const YELLOW_400: Color = Color::from_rgb8(0xFA, 0xCC, 0x15);
    pub const YELLOW_500: Color = Color::from_rgb8(0xEA, 0xB3, 0x08);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SHADOW: f32 = 0.15;
    /// Carousel arrows sit on top of the photo.
    pub const CAROUSEL_BUTTON: f32 = 0.8;
    pub const CAROUSEL_BUTTON_HOVER: f32 = 0.95;
    /// Confetti pieces.
    pub const CONFETTI: f32 = 0.95;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 1 unit
    pub const XS: f32 = 8.0; // 2 units
    pub const SM: f32 = 12.0; // 3 units
    pub const MD: f32 = 16.0; // 4 units
    pub const LG: f32 = 24.0; // 6 units
    pub const XL: f32 = 32.0; // 8 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Greeting and treats cards.
    pub const CARD_MAX_WIDTH: f32 = 576.0;
    /// Celebration card, wider to fit the carousel.
    pub const CELEBRATION_MAX_WIDTH: f32 = 768.0;
    pub const CAROUSEL_HEIGHT: f32 = 320.0;

    /// Top edge of a confetti piece at the start of its fall, above the
    /// visible area.
    pub const CONFETTI_START_OFFSET: f32 = -10.0;
    /// Confetti pieces fall to 110% of the window height.
    pub const CONFETTI_FALL_FACTOR: f32 = 1.1;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// The entry heart.
    pub const HERO: f32 = 72.0;

    /// Treat emojis.
    pub const EMOJI: f32 = 60.0;

    /// Greeting headline.
    pub const TITLE_XL: f32 = 36.0;

    /// Card headings.
    pub const TITLE_LG: f32 = 24.0;

    /// Emphasized body, entry hint.
    pub const BODY_LG: f32 = 18.0;

    /// Standard body text and button labels.
    pub const BODY: f32 = 16.0;

    /// Eyebrow labels, footers, checkbox label.
    pub const CAPTION: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const XS: f32 = 2.0;
    pub const MD: f32 = 8.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette, Color};
    use iced::{Shadow, Vector};

    const SHADOW_COLOR: Color = Color {
        a: opacity::SHADOW,
        ..palette::BLACK
    };

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Floating card.
    pub const LG: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 15.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::CAROUSEL_BUTTON < opacity::CAROUSEL_BUTTON_HOVER);
    assert!(opacity::CONFETTI > 0.0 && opacity::CONFETTI <= 1.0);

    // Sizing validation
    assert!(sizing::CELEBRATION_MAX_WIDTH > sizing::CARD_MAX_WIDTH);
    assert!(sizing::CONFETTI_START_OFFSET < 0.0);
    assert!(sizing::CONFETTI_FALL_FACTOR > 1.0);

    // Typography validation
    assert!(typography::HERO > typography::EMOJI);
    assert!(typography::TITLE_XL > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
