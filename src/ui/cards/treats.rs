// SPDX-License-Identifier: MPL-2.0
//! Treats card.

use super::back_next_row;
use crate::app::Message;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, Column, Row, Text};
use iced::{alignment, Element, Length};

const TREATS: [&str; 3] = ["🧁", "🍭", "🍩"];

pub fn view<'a>() -> Element<'a, Message> {
    let heading = Text::new("Sweet treats for you 🍬🧁")
        .size(typography::TITLE_LG)
        .color(palette::PURPLE_600);

    let treats = TREATS
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, treat| {
            row.push(Text::new(*treat).size(typography::EMOJI))
        });

    let caption = Text::new("Because birthdays should be extra sweet!")
        .size(typography::BODY)
        .color(palette::GRAY_600);

    let content = Column::new()
        .push(heading)
        .push(treats)
        .push(caption)
        .push(back_next_row(palette::PURPLE_500, palette::PURPLE_400))
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center);

    container(content)
        .padding(spacing::XL)
        .max_width(sizing::CARD_MAX_WIDTH)
        .width(Length::Shrink)
        .style(styles::container::card)
        .into()
}
