// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Solid accent button with white text (Next, Play, Celebrate).
///
/// `hover` is used while the pointer is over the button.
pub fn filled(accent: Color, hover: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, shadow) = match status {
            button::Status::Hovered => (hover, shadow::SM),
            button::Status::Disabled => (palette::GRAY_200, shadow::NONE),
            button::Status::Active | button::Status::Pressed => (accent, shadow::NONE),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::MD.into(),
            },
            shadow,
            snap: true,
        }
    }
}

/// Neutral gray button (Back).
pub fn soft(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GRAY_100,
        _ => palette::GRAY_200,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::GRAY_700,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round translucent arrow floating over the carousel photo.
pub fn carousel_arrow(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::CAROUSEL_BUTTON_HOVER,
        _ => opacity::CAROUSEL_BUTTON,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..WHITE })),
        text_color: palette::GRAY_700,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Borderless, backgroundless button (the entry heart).
pub fn bare(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: palette::ROSE_500,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_uses_hover_color_on_hover() {
        let style = filled(palette::PINK_500, palette::PINK_400);
        let active = style(&Theme::Light, button::Status::Active);
        let hovered = style(&Theme::Light, button::Status::Hovered);
        assert_eq!(
            active.background,
            Some(Background::Color(palette::PINK_500))
        );
        assert_eq!(
            hovered.background,
            Some(Background::Color(palette::PINK_400))
        );
        assert_eq!(active.text_color, WHITE);
    }

    #[test]
    fn carousel_arrow_is_translucent() {
        let style = carousel_arrow(&Theme::Light, button::Status::Active);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("expected color background, got {other:?}"),
        }
    }

    #[test]
    fn bare_has_no_background() {
        assert!(bare(&Theme::Light, button::Status::Hovered)
            .background
            .is_none());
    }
}
