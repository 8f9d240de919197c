//! Benchmark profiles and workload generation for the Chicane simulation.
//!
//! Provides pre-built [`RaceConfig`] profiles for benchmarking and load
//! testing:
//!
//! - [`reference_profile`]: 3 lanes, 24 opponents (a typical play session)
//! - [`stress_profile`]: 8 lanes, 256 opponents (registry-heavy workload)
//! - [`traffic_pattern`]: deterministic opponent placement via seed
//!
//! The engine itself is fully deterministic; randomness only exists here,
//! in workload generation, and is driven by a seeded ChaCha8 RNG so equal
//! seeds produce identical traffic.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use chicane_core::Car;
use chicane_engine::{OpponentSeed, RaceConfig};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Build a reference profile: 3 lanes, player mid-lane, 24 opponents.
pub fn reference_profile(seed: u64) -> RaceConfig {
    RaceConfig {
        player: Car::new(1, 0.0),
        opponents: traffic_pattern(seed, 3, 24, 0.0),
        ..RaceConfig::new(3)
    }
}

/// Build a stress profile: 8 lanes, 256 opponents.
pub fn stress_profile(seed: u64) -> RaceConfig {
    RaceConfig {
        player: Car::new(3, 0.0),
        opponents: traffic_pattern(seed, 8, 256, 0.0),
        ..RaceConfig::new(8)
    }
}

/// Generate a deterministic stream of opponent seeds.
///
/// Lanes are drawn uniformly from `[0, lane_count)`; spawn positions start
/// a short distance ahead of `player_position` and step forward with
/// jittered gaps, so the column stretches away from the player and every
/// seed is strictly ahead. Equal inputs produce identical output.
pub fn traffic_pattern(
    seed: u64,
    lane_count: usize,
    count: usize,
    player_position: f64,
) -> Vec<OpponentSeed> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut position = player_position;
    let mut seeds = Vec::with_capacity(count);

    for _ in 0..count {
        position += rng.random_range(6.0..18.0);
        seeds.push(OpponentSeed {
            lane_index: rng.random_range(0..lane_count),
            distance_ahead: position,
            length: rng.random_range(3.6..5.2),
        });
    }

    seeds
}
