// SPDX-License-Identifier: MPL-2.0
//! The four screens of the greeting, one per step.
//!
//! - [`entry`] - the pulsing heart that opens the greeting
//! - [`greeting`] - the birthday wish
//! - [`treats`] - sweet treats
//! - [`celebration`] - photos, song controls and the confetti trigger

pub mod celebration;
pub mod entry;
pub mod greeting;
pub mod treats;

use crate::app::Message;
use crate::flow::Step;
use crate::ui::carousel;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Row, Text};
use iced::{Color, Element};
use std::time::Duration;

/// Contextual data needed to render the current card.
pub struct ViewContext<'a> {
    pub step: Step,
    /// Time since launch, drives the entry heart pulse.
    pub elapsed: Duration,
    pub recipient: &'a str,
    pub auto_advance: bool,
    pub is_playing: bool,
    pub carousel: carousel::ViewContext<'a>,
}

/// Renders the card for the current step.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    match ctx.step {
        Step::Entry => entry::view(ctx.elapsed),
        Step::Greeting => greeting::view(ctx.recipient),
        Step::Treats => treats::view(),
        Step::Celebration => celebration::view(celebration::ViewContext {
            recipient: ctx.recipient,
            auto_advance: ctx.auto_advance,
            is_playing: ctx.is_playing,
            carousel: ctx.carousel,
        }),
    }
}

/// "◀ Back" and "Next →" under the greeting and treats cards. `accent`
/// colors the Next button.
fn back_next_row<'a>(accent: Color, accent_hover: Color) -> Row<'a, Message> {
    let back = button(Text::new("◀ Back").size(typography::BODY))
        .on_press(Message::Back)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::soft);

    let next = button(Text::new("Next →").size(typography::BODY))
        .on_press(Message::Next)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::filled(accent, accent_hover));

    Row::new().push(back).push(next).spacing(spacing::SM)
}
