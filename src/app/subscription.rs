// SPDX-License-Identifier: MPL-2.0
//! Event and clock subscriptions for the application.

use super::Message;
use crate::flow::{Flow, Step};
use iced::{event, time, window, Subscription};
use rand::Rng;
use std::time::Duration;

/// Poll period while flow timers are armed but nothing animates.
pub const TIMER_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What drives the application clock right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockMode {
    /// No timer armed, no animation: no ticks at all.
    Idle,
    /// Timers armed: coarse periodic ticks.
    Polling,
    /// Pulsing heart or confetti on screen: one tick per rendered frame.
    Animating,
}

impl ClockMode {
    pub fn for_flow<R: Rng>(flow: &Flow<R>) -> Self {
        if flow.step() == Step::Entry || flow.needs_animation_frames() {
            Self::Animating
        } else if flow.has_pending_timers() {
            Self::Polling
        } else {
            Self::Idle
        }
    }
}

/// Window close requests are routed to the app so it can release the audio
/// device before the window goes away.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        None
    })
}

pub fn create_tick_subscription(mode: ClockMode) -> Subscription<Message> {
    match mode {
        ClockMode::Animating => window::frames().map(Message::Tick),
        ClockMode::Polling => time::every(TIMER_POLL_INTERVAL).map(Message::Tick),
        ClockMode::Idle => Subscription::none(),
    }
}
