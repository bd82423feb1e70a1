// SPDX-License-Identifier: MPL-2.0
//! Confetti burst generation and lifetime.
//!
//! A burst is a fixed-size batch of independently randomized pieces. The
//! batch is discarded after its lifetime, or immediately on deactivation.
//! Pieces carry no identity across bursts.

use super::timer::Timeout;
use iced::Color;
use rand::Rng;
use std::ops::Range;
use std::time::{Duration, Instant};

/// Colors a confetti piece may take.
pub const PALETTE: [Color; 6] = [
    Color::from_rgb8(0xF4, 0x3F, 0x5E),
    Color::from_rgb8(0xFB, 0x92, 0x3C),
    Color::from_rgb8(0xF5, 0x9E, 0x0B),
    Color::from_rgb8(0x10, 0xB9, 0x81),
    Color::from_rgb8(0x60, 0xA5, 0xFA),
    Color::from_rgb8(0xA7, 0x8B, 0xFA),
];

/// Piece width range in logical pixels.
pub const SIZE_RANGE: Range<f32> = 6.0..18.0;

/// Piece height relative to its width.
pub const ASPECT_RATIO: f32 = 1.6;

/// Range of the start delay of a piece, in milliseconds.
pub const DELAY_RANGE_MS: Range<u64> = 0..1000;

/// Range of the fall duration of a piece, in milliseconds.
pub const DURATION_RANGE_MS: Range<u64> = 3000..6000;

/// Sizing of a confetti burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleSettings {
    /// Pieces per burst.
    pub count: usize,
    /// Time after which the whole burst is discarded.
    pub lifetime: Duration,
}

/// A single confetti piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub id: usize,
    /// Horizontal position in percent of the container width, `[0, 100]`.
    pub x_percent: f32,
    /// Width in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Initial rotation in degrees, `[0, 360)`.
    pub rotation_deg: f32,
    pub delay: Duration,
    pub duration: Duration,
}

impl Particle {
    fn random<R: Rng + ?Sized>(id: usize, rng: &mut R) -> Self {
        Self {
            id,
            x_percent: rng.random_range(0.0..=100.0),
            size: rng.random_range(SIZE_RANGE),
            color: PALETTE[rng.random_range(0..PALETTE.len())],
            rotation_deg: rng.random_range(0.0..360.0),
            delay: Duration::from_millis(rng.random_range(DELAY_RANGE_MS)),
            duration: Duration::from_millis(rng.random_range(DURATION_RANGE_MS)),
        }
    }

    /// Height in logical pixels.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.size * ASPECT_RATIO
    }

    /// Fall position in `[0, 1]` after `elapsed` time since the burst
    /// started: 0 while the piece waits for its delay, 1 once it has landed.
    #[must_use]
    pub fn fall_progress(&self, elapsed: Duration) -> f32 {
        let Some(moving) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        (moving.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// A self-clearing confetti burst.
#[derive(Debug, Clone)]
pub struct ParticleEffect {
    settings: ParticleSettings,
    particles: Vec<Particle>,
    activated_at: Option<Instant>,
    auto_clear: Timeout,
}

impl ParticleEffect {
    #[must_use]
    pub fn new(settings: ParticleSettings) -> Self {
        Self {
            settings,
            particles: Vec::new(),
            activated_at: None,
            auto_clear: Timeout::new(),
        }
    }

    /// Starts a fresh burst, replacing any running one and restarting the
    /// lifetime countdown.
    pub fn activate<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) {
        self.particles = (0..self.settings.count)
            .map(|id| Particle::random(id, rng))
            .collect();
        self.activated_at = Some(now);
        self.auto_clear.schedule(now, self.settings.lifetime);
        tracing::debug!(count = self.particles.len(), "confetti burst started");
    }

    /// Discards the burst and its pending auto-clear. No-op when inactive.
    pub fn deactivate(&mut self) {
        self.auto_clear.cancel();
        self.activated_at = None;
        self.particles.clear();
    }

    /// Clears the burst once its lifetime has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if self.auto_clear.fire_if_due(now).is_some() {
            tracing::debug!("confetti burst expired");
            self.activated_at = None;
            self.particles.clear();
        }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    /// When the current burst started.
    #[must_use]
    pub fn activated_at(&self) -> Option<Instant> {
        self.activated_at
    }

    /// Whether the auto-clear is still pending.
    #[must_use]
    pub fn has_pending_clear(&self) -> bool {
        self.auto_clear.is_armed()
    }

    #[must_use]
    pub fn settings(&self) -> ParticleSettings {
        self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn settings() -> ParticleSettings {
        ParticleSettings {
            count: 60,
            lifetime: Duration::from_millis(6000),
        }
    }

    #[test]
    fn activate_generates_full_batch_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut effect = ParticleEffect::new(settings());
        effect.activate(Instant::now(), &mut rng);

        assert_eq!(effect.particles().len(), 60);
        for (i, p) in effect.particles().iter().enumerate() {
            assert_eq!(p.id, i);
            assert!((0.0..=100.0).contains(&p.x_percent));
            assert!(SIZE_RANGE.contains(&p.size));
            assert!(PALETTE.contains(&p.color));
            assert!((0.0..360.0).contains(&p.rotation_deg));
            assert!(p.delay < Duration::from_millis(DELAY_RANGE_MS.end));
            assert!(DURATION_RANGE_MS.contains(&(p.duration.as_millis() as u64)));
        }
    }

    #[test]
    fn batch_clears_after_lifetime_and_stays_clear() {
        let mut rng = StdRng::seed_from_u64(1);
        let start = Instant::now();
        let mut effect = ParticleEffect::new(settings());
        effect.activate(start, &mut rng);

        effect.tick(start + Duration::from_millis(5999));
        assert!(effect.is_active());

        effect.tick(start + Duration::from_millis(6000));
        assert!(!effect.is_active());
        assert!(!effect.has_pending_clear());

        effect.tick(start + Duration::from_millis(20_000));
        assert!(!effect.is_active());
    }

    #[test]
    fn deactivate_cancels_auto_clear() {
        let mut rng = StdRng::seed_from_u64(2);
        let start = Instant::now();
        let mut effect = ParticleEffect::new(settings());
        effect.activate(start, &mut rng);

        effect.deactivate();
        assert!(!effect.is_active());
        assert!(!effect.has_pending_clear());

        // Deactivating again is a no-op.
        effect.deactivate();
        assert!(!effect.is_active());
    }

    #[test]
    fn reactivation_restarts_lifetime() {
        let mut rng = StdRng::seed_from_u64(3);
        let start = Instant::now();
        let mut effect = ParticleEffect::new(settings());
        effect.activate(start, &mut rng);
        let first_batch = effect.particles().to_vec();

        let restart = start + Duration::from_millis(4000);
        effect.activate(restart, &mut rng);
        assert_ne!(effect.particles(), first_batch.as_slice());

        // The original deadline no longer clears the new burst.
        effect.tick(start + Duration::from_millis(6000));
        assert!(effect.is_active());

        effect.tick(restart + Duration::from_millis(6000));
        assert!(!effect.is_active());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let start = Instant::now();
        let mut a = ParticleEffect::new(settings());
        let mut b = ParticleEffect::new(settings());
        a.activate(start, &mut StdRng::seed_from_u64(42));
        b.activate(start, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn fall_progress_respects_delay_and_duration() {
        let particle = Particle {
            id: 0,
            x_percent: 50.0,
            size: 10.0,
            color: PALETTE[0],
            rotation_deg: 0.0,
            delay: Duration::from_millis(500),
            duration: Duration::from_millis(4000),
        };

        assert_eq!(particle.fall_progress(Duration::from_millis(200)), 0.0);
        assert!((particle.fall_progress(Duration::from_millis(2500)) - 0.5).abs() < 1e-4);
        assert_eq!(particle.fall_progress(Duration::from_millis(10_000)), 1.0);
        assert!((particle.height() - 16.0).abs() < 1e-4);
    }
}
