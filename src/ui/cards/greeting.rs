// SPDX-License-Identifier: MPL-2.0
//! Greeting card: the birthday wish.

use super::back_next_row;
use crate::app::Message;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{container, Column, Row, Text};
use iced::{alignment, Color, Element, Font, Length};

const HEADLINE_FONT: Font = Font {
    weight: Weight::ExtraBold,
    ..Font::DEFAULT
};

fn headline_part(fragment: &str, color: Color) -> Text<'_> {
    Text::new(fragment)
        .size(typography::TITLE_XL)
        .font(HEADLINE_FONT)
        .color(color)
}

pub fn view<'a>(recipient: &'a str) -> Element<'a, Message> {
    let eyebrow = Text::new("A TINY WISH")
        .size(typography::CAPTION)
        .color(palette::GRAY_500);

    let headline = Row::new()
        .push(headline_part("Happy Birthday, ", palette::PINK_600))
        .push(headline_part(recipient, palette::ROSE_500))
        .push(headline_part("!", palette::PINK_600));

    let wish = Text::new("Wishing you a day filled with giggles, cake, and cozy hugs 💕")
        .size(typography::BODY)
        .color(palette::GRAY_700)
        .align_x(alignment::Horizontal::Center);

    let content = Column::new()
        .push(eyebrow)
        .push(headline)
        .push(wish)
        .push(back_next_row(palette::PINK_500, palette::PINK_400))
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center);

    container(content)
        .padding(spacing::XL)
        .max_width(sizing::CARD_MAX_WIDTH)
        .width(Length::Shrink)
        .style(styles::container::card)
        .into()
}
