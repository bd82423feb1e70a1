// SPDX-License-Identifier: MPL-2.0
//! Entry screen: a big pulsing heart to tap.

use crate::app::Message;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Column, Text};
use iced::{alignment, Element, Length};
use std::f32::consts::TAU;
use std::time::Duration;

/// One full shrink-and-grow cycle of the heart.
pub const PULSE_PERIOD: Duration = Duration::from_secs(2);

/// How far the heart shrinks at the middle of a cycle.
const PULSE_DEPTH: f32 = 0.08;

/// Scale of the heart `elapsed` after launch: 1.0 at each cycle boundary,
/// `1.0 - PULSE_DEPTH` half way through.
#[must_use]
pub fn pulse_scale(elapsed: Duration) -> f32 {
    let period = PULSE_PERIOD.as_secs_f32();
    let phase = (elapsed.as_secs_f32() % period) / period;
    1.0 - PULSE_DEPTH * (1.0 - (phase * TAU).cos()) / 2.0
}

pub fn view<'a>(elapsed: Duration) -> Element<'a, Message> {
    let size = typography::HERO * pulse_scale(elapsed);
    let heart = button(Text::new("💖").size(size))
        .on_press(Message::StartTapped)
        .style(styles::button::bare);

    // Fixed slot so the hint does not move while the heart pulses.
    let slot = container(heart)
        .center_x(Length::Fixed(typography::HERO * 2.0))
        .center_y(Length::Fixed(typography::HERO * 1.5));

    let hint = Text::new("Tap the heart to enter")
        .size(typography::BODY_LG)
        .color(palette::GRAY_700);

    Column::new()
        .push(slot)
        .push(hint)
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_is_full_size_on_cycle_boundaries() {
        assert!((pulse_scale(Duration::ZERO) - 1.0).abs() < 1e-6);
        assert!((pulse_scale(PULSE_PERIOD * 3) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn pulse_is_smallest_half_way() {
        let half = pulse_scale(PULSE_PERIOD / 2);
        assert!((half - (1.0 - PULSE_DEPTH)).abs() < 1e-4);
    }

    #[test]
    fn pulse_stays_within_depth() {
        for step in 0..200u64 {
            let scale = pulse_scale(Duration::from_millis(step * 37));
            assert!((1.0 - PULSE_DEPTH - 1e-4..=1.0 + 1e-4).contains(&scale));
        }
    }
}
