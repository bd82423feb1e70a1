// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Gradient, Radians, Theme};
use std::f32::consts::FRAC_PI_4;

/// Pastel diagonal backdrop behind every card (pink, purple, yellow).
pub fn backdrop(_theme: &Theme) -> container::Style {
    let gradient = Linear::new(Radians(FRAC_PI_4 * 3.0))
        .add_stop(0.0, palette::PINK_100)
        .add_stop(0.5, palette::PURPLE_100)
        .add_stop(1.0, palette::YELLOW_50);

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        ..Default::default()
    }
}

/// White rounded card with a soft drop shadow.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        text_color: Some(palette::GRAY_700),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Gray frame behind the carousel photo; visible while a photo is loading
/// or when it failed to load.
pub fn photo_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_100)),
        text_color: Some(palette::GRAY_500),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
