//! Criterion micro-benchmarks for the core world operations.

use chicane_bench::{reference_profile, stress_profile};
use chicane_core::LaneChange;
use chicane_engine::RaceWorld;
use chicane_test_utils::spawn_column;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

/// Benchmark: 64 frames of `advance` over the reference profile.
///
/// Rebuilds the world per batch so culling cannot drain the field across
/// criterion's many iterations.
fn bench_advance_reference(c: &mut Criterion) {
    c.bench_function("advance_reference_64_frames", |b| {
        b.iter_batched(
            || RaceWorld::new(reference_profile(42)).unwrap(),
            |mut world| {
                for _ in 0..64 {
                    let collision = world.advance(0.016, 12.0, LaneChange::None).unwrap();
                    black_box(&collision);
                }
                world
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: 64 frames of `advance` over the stress profile (256 opponents).
fn bench_advance_stress(c: &mut Criterion) {
    c.bench_function("advance_stress_64_frames", |b| {
        b.iter_batched(
            || RaceWorld::new(stress_profile(42)).unwrap(),
            |mut world| {
                for _ in 0..64 {
                    let collision = world.advance(0.016, 12.0, LaneChange::None).unwrap();
                    black_box(&collision);
                }
                world
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: a full-registry collision scan with no overlap anywhere.
///
/// Every opponent sits in the player's lane but out of reach, forcing the
/// scan to visit the whole registry before giving up.
fn bench_detect_collision_full_scan(c: &mut Criterion) {
    let mut world = RaceWorld::new(reference_profile(42)).unwrap();
    // Park a dense column in the player's lane, far ahead.
    spawn_column(&mut world, 1, 200.0, 10.0, 256);

    c.bench_function("detect_collision_full_scan", |b| {
        b.iter(|| black_box(world.detect_collision()));
    });
}

/// Benchmark: spawn a column and cull it all in one oversized step.
fn bench_spawn_cull_churn(c: &mut Criterion) {
    c.bench_function("spawn_cull_churn_64", |b| {
        b.iter_batched(
            || {
                let mut world = RaceWorld::new(reference_profile(42)).unwrap();
                spawn_column(&mut world, 0, 10.0, 5.0, 64);
                world
            },
            |mut world| {
                // One huge step drives everything past the despawn cutoff.
                world.advance(100.0, 10.0, LaneChange::None).unwrap();
                black_box(world.opponent_count());
                world
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_advance_reference,
    bench_advance_stress,
    bench_detect_collision_full_scan,
    bench_spawn_cull_churn,
);
criterion_main!(benches);
