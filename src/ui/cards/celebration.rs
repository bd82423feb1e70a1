// SPDX-License-Identifier: MPL-2.0
//! Celebration card: photo carousel, song controls and confetti trigger.

use crate::app::Message;
use crate::ui::carousel;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{button, checkbox, container, Column, Row, Space, Text};
use iced::{alignment, Element, Font, Length};

/// Contextual data needed to render the celebration card.
pub struct ViewContext<'a> {
    pub recipient: &'a str,
    pub auto_advance: bool,
    pub is_playing: bool,
    pub carousel: carousel::ViewContext<'a>,
}

/// Label of the play/pause button.
#[must_use]
pub fn playback_label(is_playing: bool) -> &'static str {
    if is_playing {
        "❚❚ Pause Song"
    } else {
        "▶ Play Song"
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(format!("🎉 Happy Birthday, {}! 🎉", ctx.recipient))
        .size(typography::TITLE_LG)
        .font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        })
        .color(palette::PINK_600);

    let autoplay = checkbox("Auto-play photos", ctx.auto_advance)
        .on_toggle(Message::AutoAdvanceToggled)
        .text_size(typography::CAPTION);

    let header = Row::new()
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(autoplay)
        .align_y(alignment::Vertical::Center)
        .spacing(spacing::SM);

    let wish = Text::new("May your day be filled with love, laughter, and memories 💖")
        .size(typography::BODY)
        .color(palette::GRAY_700);

    let play = button(Text::new(playback_label(ctx.is_playing)).size(typography::BODY))
        .on_press(Message::TogglePlayback)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::filled(
            palette::GREEN_500,
            palette::GREEN_400,
        ));

    let celebrate = button(Text::new("🎊 Celebrate").size(typography::BODY))
        .on_press(Message::Celebrate)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::filled(
            palette::YELLOW_500,
            palette::YELLOW_400,
        ));

    let controls = container(Row::new().push(play).push(celebrate).spacing(spacing::SM))
        .center_x(Length::Fill);

    let footer = container(
        Text::new("Any text")
            .size(typography::CAPTION)
            .color(palette::GRAY_500),
    )
    .center_x(Length::Fill);

    let content = Column::new()
        .push(header)
        .push(wish)
        .push(carousel::view(ctx.carousel))
        .push(controls)
        .push(footer)
        .spacing(spacing::MD);

    container(content)
        .padding(spacing::LG)
        .max_width(sizing::CELEBRATION_MAX_WIDTH)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}
