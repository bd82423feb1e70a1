// SPDX-License-Identifier: MPL-2.0
//! Photo carousel shown on the celebration card.
//!
//! The photo fills a fixed-height frame; two round arrows float over its
//! left and right edges. A photo that is still loading, or that failed to
//! load, shows a placeholder in its slot. Navigation never waits for it.

use crate::app::Message;
use crate::media::GalleryImage;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, image, Container, Row, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Load state of one carousel photo.
#[derive(Debug, Clone, Default)]
pub enum Slot {
    #[default]
    Loading,
    Ready(GalleryImage),
    Failed,
}

impl Slot {
    /// Placeholder caption, or `None` when the photo can be shown.
    #[must_use]
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Slot::Loading => Some("Loading photo…"),
            Slot::Ready(_) => None,
            Slot::Failed => Some("Photo unavailable"),
        }
    }
}

/// Contextual data needed to render the carousel.
pub struct ViewContext<'a> {
    /// Slot of the photo currently shown, if the gallery has one.
    pub slot: Option<&'a Slot>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let photo: Element<'a, Message> = match ctx.slot {
        Some(Slot::Ready(photo)) => image(photo.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        other => {
            let caption = other
                .and_then(Slot::placeholder)
                .unwrap_or("Photo unavailable");
            Text::new(caption)
                .size(typography::CAPTION)
                .align_x(alignment::Horizontal::Center)
                .into()
        }
    };

    let framed = container(photo)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::photo_frame);

    let arrows = Row::new()
        .push(arrow("◀", Message::CarouselPrevious))
        .push(Space::new().width(Length::Fill))
        .push(arrow("▶", Message::CarouselNext))
        .align_y(alignment::Vertical::Center)
        .padding(spacing::SM)
        .height(Length::Fill);

    let stack = Stack::new().push(framed).push(arrows);

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CAROUSEL_HEIGHT))
        .into()
}

fn arrow<'a>(label: &'a str, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::carousel_arrow)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_ready_slots_skip_the_placeholder() {
        assert!(Slot::Loading.placeholder().is_some());
        assert!(Slot::Failed.placeholder().is_some());

        let photo = GalleryImage::from_rgba(1, 1, vec![0, 0, 0, 255]);
        assert!(Slot::Ready(photo).placeholder().is_none());
    }

    #[test]
    fn default_slot_is_loading() {
        assert!(matches!(Slot::default(), Slot::Loading));
    }
}
