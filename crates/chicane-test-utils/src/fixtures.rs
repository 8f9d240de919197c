//! Ready-made worlds and spawn helpers.

use chicane_core::{Car, OpponentId};
use chicane_engine::{RaceConfig, RaceWorld};

/// The canonical test track: three lanes, player in the middle lane at
/// position 0, default cooldown and despawn margin, no opponents.
pub fn three_lane_world() -> RaceWorld {
    world_with_player(3, 1, 0.0)
}

/// A world with `lane_count` lanes and a default-length player at
/// `(lane_index, position)`.
///
/// # Panics
///
/// Panics if the resulting configuration is invalid. Fixtures are for
/// tests; an invalid fixture is a bug in the test.
pub fn world_with_player(lane_count: usize, lane_index: usize, position: f64) -> RaceWorld {
    let config = RaceConfig {
        player: Car::new(lane_index, position),
        ..RaceConfig::new(lane_count)
    };
    RaceWorld::new(config).expect("fixture config must validate")
}

/// Spawn `count` default-length opponents in `lane_index`, the first at
/// `start` and each subsequent one `gap` further ahead. Returns the handles
/// in spawn order.
///
/// # Panics
///
/// Panics if any spawn is rejected.
pub fn spawn_column(
    world: &mut RaceWorld,
    lane_index: usize,
    start: f64,
    gap: f64,
    count: usize,
) -> Vec<OpponentId> {
    (0..count)
        .map(|i| {
            world
                .spawn_opponent(lane_index, start + gap * i as f64)
                .expect("fixture spawn must succeed")
        })
        .collect()
}
