// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for confetti generation and per-frame flow updates.
//!
//! Measures the performance of:
//! - Generating a burst (default and maximum size)
//! - One animation-frame tick of a flow with an active burst

use criterion::{criterion_group, criterion_main, Criterion};
use iced_greeting::config::{DEFAULT_PARTICLE_COUNT, MAX_PARTICLE_COUNT};
use iced_greeting::flow::{Flow, FlowSettings, ParticleEffect, ParticleSettings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;
use std::time::{Duration, Instant};

fn bench_activate(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_generation");

    for count in [DEFAULT_PARTICLE_COUNT, MAX_PARTICLE_COUNT] {
        let settings = ParticleSettings {
            count,
            lifetime: Duration::from_secs(6),
        };
        let mut rng = StdRng::seed_from_u64(1);
        let mut effect = ParticleEffect::new(settings);
        let now = Instant::now();

        group.bench_function(format!("activate_{count}"), |b| {
            b.iter(|| {
                effect.activate(now, &mut rng);
                black_box(effect.particles().len());
            });
        });
    }

    group.finish();
}

/// Measures a frame tick while confetti is falling and the carousel runs.
fn bench_frame_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_generation");

    let mut flow = Flow::seeded(FlowSettings::default(), 1);
    let start = Instant::now();
    for _ in 0..3 {
        flow.advance(start);
    }
    flow.celebrate(start);
    let frame = start + Duration::from_millis(16);

    group.bench_function("frame_tick", |b| {
        b.iter(|| {
            flow.tick(black_box(frame));
            black_box(flow.particles().is_active());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_activate, bench_frame_tick);
criterion_main!(benches);
