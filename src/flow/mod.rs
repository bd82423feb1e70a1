// SPDX-License-Identifier: MPL-2.0
//! Stateful orchestration of the greeting.
//!
//! [`Flow`] is the single owner of the step, the carousel position and the
//! confetti burst, together with the three timers that animate them:
//!
//! - the delayed confetti burst when the celebration card opens,
//! - the confetti auto-clear,
//! - the carousel auto-advance interval.
//!
//! The flow never reads a clock. Every operation that may arm or fire a
//! timer takes `now`, which keeps the whole state machine deterministic in
//! tests. Audio is not owned here: entering the celebration card returns
//! [`Event::StartPlayback`] and the caller routes it to the audio controller.

mod carousel;
mod particles;
mod step;
pub mod timer;

pub use carousel::Carousel;
pub use particles::{
    Particle, ParticleEffect, ParticleSettings, ASPECT_RATIO, DELAY_RANGE_MS, DURATION_RANGE_MS,
    PALETTE, SIZE_RANGE,
};
pub use step::Step;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};
use timer::{Interval, Timeout};

/// Timings and sizes of the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowSettings {
    /// Number of photos in the carousel.
    pub gallery_len: usize,
    /// Initial state of the auto-play checkbox.
    pub auto_advance: bool,
    /// Carousel auto-advance period.
    pub carousel_period: Duration,
    /// Delay between entering the celebration card and the confetti burst.
    pub activation_delay: Duration,
    pub particles: ParticleSettings,
}

impl Default for FlowSettings {
    fn default() -> Self {
        crate::config::Config::default().flow_settings()
    }
}

/// Side effects the owner of the flow must carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The celebration card opened with auto-play on: start the song.
    StartPlayback,
}

/// The greeting state machine.
#[derive(Debug)]
pub struct Flow<R = StdRng> {
    settings: FlowSettings,
    step: Step,
    auto_advance: bool,
    carousel: Carousel,
    carousel_timer: Interval,
    particles: ParticleEffect,
    burst_delay: Timeout,
    rng: R,
}

impl Flow<StdRng> {
    /// Creates a flow seeded from the operating system.
    #[must_use]
    pub fn new(settings: FlowSettings) -> Self {
        Self::with_rng(settings, StdRng::from_os_rng())
    }

    /// Creates a flow whose confetti is reproducible from `seed`.
    #[must_use]
    pub fn seeded(settings: FlowSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Flow<R> {
    /// Creates a flow drawing confetti from the given random source.
    pub fn with_rng(settings: FlowSettings, rng: R) -> Self {
        Self {
            settings,
            step: Step::Entry,
            auto_advance: settings.auto_advance,
            carousel: Carousel::new(settings.gallery_len),
            carousel_timer: Interval::new(),
            particles: ParticleEffect::new(settings.particles),
            burst_delay: Timeout::new(),
            rng,
        }
    }

    // =========================================================================
    // Step transitions
    // =========================================================================

    /// Moves one step forward (clamped at the celebration card).
    pub fn advance(&mut self, now: Instant) -> Event {
        self.go_to(self.step.next(), now)
    }

    /// Moves one step back (clamped at the entry screen).
    pub fn retreat(&mut self, now: Instant) -> Event {
        self.go_to(self.step.previous(), now)
    }

    fn go_to(&mut self, target: Step, now: Instant) -> Event {
        if target == self.step {
            return Event::None;
        }
        let previous = self.step;
        self.step = target;
        tracing::debug!(from = ?previous, to = ?target, "step changed");

        let event = if target.is_final() {
            self.burst_delay.schedule(now, self.settings.activation_delay);
            if self.auto_advance {
                Event::StartPlayback
            } else {
                Event::None
            }
        } else {
            self.burst_delay.cancel();
            self.particles.deactivate();
            Event::None
        };

        self.sync_carousel_timer(now);
        event
    }

    // =========================================================================
    // Carousel
    // =========================================================================

    /// Toggles carousel auto-advance.
    pub fn set_auto_advance(&mut self, enabled: bool, now: Instant) {
        self.auto_advance = enabled;
        self.sync_carousel_timer(now);
    }

    pub fn next_image(&mut self) {
        self.carousel.next();
    }

    pub fn previous_image(&mut self) {
        self.carousel.previous();
    }

    /// The interval exists only while the celebration card is shown with
    /// auto-advance on. Re-applying the same period keeps its schedule.
    fn sync_carousel_timer(&mut self, now: Instant) {
        let period = (self.step.is_final() && self.auto_advance)
            .then_some(self.settings.carousel_period);
        self.carousel_timer.set_period(period, now);
    }

    // =========================================================================
    // Confetti
    // =========================================================================

    /// Manual "celebrate" trigger: starts a fresh burst right away.
    pub fn celebrate(&mut self, now: Instant) {
        self.burst_delay.cancel();
        self.particles.activate(now, &mut self.rng);
    }

    // =========================================================================
    // Clock
    // =========================================================================

    /// Fires every timer due at `now`. A delayed burst starts at its
    /// deadline even when the tick arrives later.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.burst_delay.fire_if_due(now) {
            self.particles.activate(deadline, &mut self.rng);
        }
        self.particles.tick(now);
        if self.carousel_timer.poll(now) {
            self.carousel.set_index();
        }
    }

    /// Whether any timer is armed, i.e. whether the clock must keep ticking.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.burst_delay.is_armed()
            || self.particles.has_pending_clear()
            || self.carousel_timer.is_armed()
    }

    /// Whether confetti is on screen and needs per-frame redraws.
    #[must_use]
    pub fn needs_animation_frames(&self) -> bool {
        self.particles.is_active()
    }

    /// Tears the flow down: cancels every timer and discards the confetti.
    /// Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.burst_delay.cancel();
        self.carousel_timer.cancel();
        self.particles.deactivate();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    #[must_use]
    pub fn particles(&self) -> &ParticleEffect {
        &self.particles
    }

    #[must_use]
    pub fn carousel_timer(&self) -> &Interval {
        &self.carousel_timer
    }

    #[must_use]
    pub fn settings(&self) -> &FlowSettings {
        &self.settings
    }
}
