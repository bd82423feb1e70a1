// SPDX-License-Identifier: MPL-2.0
//! Confetti layer drawn on a Canvas above the cards.
//!
//! Each piece starts just above the top edge, waits for its delay, then
//! falls linearly to below the bottom edge while making one full turn.

use crate::flow::Particle;
use crate::ui::design_tokens::{opacity, radius, sizing};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme, Vector};
use std::time::Duration;

/// Position and orientation of one piece at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub center: Point,
    /// Rotation in radians.
    pub rotation: f32,
}

/// Where `particle` is drawn `elapsed` after the burst started, inside a
/// layer of `bounds` size.
#[must_use]
pub fn placement(particle: &Particle, elapsed: Duration, bounds: Size) -> Placement {
    let progress = particle.fall_progress(elapsed);
    let start_top = sizing::CONFETTI_START_OFFSET;
    let travel = bounds.height * sizing::CONFETTI_FALL_FACTOR;

    let x = bounds.width * particle.x_percent / 100.0;
    let y = start_top + travel * progress + particle.height() / 2.0;
    let rotation = (particle.rotation_deg + 360.0 * progress).to_radians();

    Placement {
        center: Point::new(x, y),
        rotation,
    }
}

/// Canvas program rendering one frame of a confetti burst.
pub struct ConfettiLayer {
    particles: Vec<Particle>,
    elapsed: Duration,
}

impl ConfettiLayer {
    #[must_use]
    pub fn new(particles: &[Particle], elapsed: Duration) -> Self {
        Self {
            particles: particles.to_vec(),
            elapsed,
        }
    }

    /// Creates a full-window Canvas widget from this layer.
    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for ConfettiLayer {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        // Redrawn on every animation frame.
        let mut frame = Frame::new(renderer, bounds.size());

        for particle in &self.particles {
            let Placement { center, rotation } = placement(particle, self.elapsed, bounds.size());
            let size = Size::new(particle.size, particle.height());
            let color = Color {
                a: opacity::CONFETTI,
                ..particle.color
            };

            frame.with_save(|frame| {
                frame.translate(Vector::new(center.x, center.y));
                frame.rotate(rotation);
                let piece = Path::rounded_rectangle(
                    Point::new(-size.width / 2.0, -size.height / 2.0),
                    size,
                    radius::XS.into(),
                );
                frame.fill(&piece, color);
            });
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::PALETTE;

    fn particle(delay_ms: u64, duration_ms: u64) -> Particle {
        Particle {
            id: 0,
            x_percent: 50.0,
            size: 10.0,
            color: PALETTE[0],
            rotation_deg: 90.0,
            delay: Duration::from_millis(delay_ms),
            duration: Duration::from_millis(duration_ms),
        }
    }

    const BOUNDS: Size = Size {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn waiting_piece_sits_above_the_top_edge() {
        let p = particle(500, 3000);
        let placed = placement(&p, Duration::from_millis(200), BOUNDS);
        assert_eq!(placed.center.x, 400.0);
        assert!(placed.center.y - p.height() / 2.0 < 0.0);
        assert!((placed.rotation - 90f32.to_radians()).abs() < 1e-5);
    }

    #[test]
    fn landed_piece_is_below_the_bottom_edge() {
        let p = particle(0, 3000);
        let placed = placement(&p, Duration::from_millis(3000), BOUNDS);
        assert!(placed.center.y - p.height() / 2.0 > BOUNDS.height);
    }

    #[test]
    fn piece_turns_once_during_its_fall() {
        let p = particle(0, 4000);
        let start = placement(&p, Duration::ZERO, BOUNDS);
        let end = placement(&p, Duration::from_millis(4000), BOUNDS);
        let turn = end.rotation - start.rotation;
        assert!((turn - std::f32::consts::TAU).abs() < 1e-4);
    }

    #[test]
    fn halfway_piece_is_halfway_down() {
        let p = particle(1000, 2000);
        let start = placement(&p, Duration::ZERO, BOUNDS);
        let mid = placement(&p, Duration::from_millis(2000), BOUNDS);
        let expected = BOUNDS.height * sizing::CONFETTI_FALL_FACTOR / 2.0;
        assert!((mid.center.y - start.center.y - expected).abs() < 1e-3);
    }
}
