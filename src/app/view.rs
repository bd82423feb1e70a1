// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The current card sits centered on the pastel backdrop. While a confetti
//! burst is active, the confetti canvas is stacked on top of everything.

use super::Message;
use crate::flow::Flow;
use crate::ui::cards;
use crate::ui::carousel::{self, Slot};
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use crate::ui::widgets::ConfettiLayer;
use iced::widget::{Container, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub flow: &'a Flow,
    pub recipient: &'a str,
    pub is_playing: bool,
    pub gallery: &'a [Slot],
    /// Time of the last clock tick; confetti is drawn as of this instant.
    pub now: Instant,
    /// Launch time of the app.
    pub started_at: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let flow = ctx.flow;

    let card = cards::view(cards::ViewContext {
        step: flow.step(),
        elapsed: ctx.now.saturating_duration_since(ctx.started_at),
        recipient: ctx.recipient,
        auto_advance: flow.auto_advance(),
        is_playing: ctx.is_playing,
        carousel: carousel::ViewContext {
            slot: ctx.gallery.get(flow.carousel().index()),
        },
    });

    let backdrop = Container::new(card)
        .center(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::backdrop);

    let mut layers = Stack::new()
        .push(backdrop)
        .width(Length::Fill)
        .height(Length::Fill);

    let particles = flow.particles();
    if let Some(activated_at) = particles.activated_at() {
        let elapsed = ctx.now.saturating_duration_since(activated_at);
        layers = layers.push(ConfettiLayer::new(particles.particles(), elapsed).into_element());
    }

    layers.into()
}
