//! Chicane: the core simulation step of a lane-based racing mini-game.
//!
//! A [`RaceWorld`](engine::RaceWorld) owns one player vehicle on a track of
//! discrete parallel lanes and an ordered registry of opponents that close
//! in at a caller-supplied constant velocity. Each frame the host calls
//! [`advance()`](engine::RaceWorld::advance) with the elapsed time, the
//! opponent speed, and an already-resolved [`LaneChange`](types::LaneChange)
//! command; the world decays the lane-change cooldown, applies the command
//! if it is feasible, moves the opponents, reports at most one same-lane
//! overlap as a [`CollisionEvent`](types::CollisionEvent), and culls
//! opponents that have fallen far enough behind.
//!
//! # Quick start
//!
//! ```rust
//! use chicane::prelude::*;
//!
//! // Three lanes, player mid-lane at position 0.
//! let config = RaceConfig {
//!     player: Car::new(1, 0.0),
//!     ..RaceConfig::new(3)
//! };
//! let mut world = RaceWorld::new(config).unwrap();
//!
//! // An opponent 30 units ahead in the player's lane.
//! let rival = world.spawn_opponent(1, 30.0).unwrap();
//!
//! // Swerve left on the first frame; opponents close at 12 units/s.
//! let collision = world.advance(0.016, 12.0, LaneChange::Left).unwrap();
//! assert!(collision.is_none());
//! assert_eq!(world.player().lane_index, 0);
//!
//! // The cooldown now refuses further changes for a while.
//! assert!(!world.can_change_lane(LaneChange::Right));
//!
//! // The rival has moved toward the player.
//! assert!(world.opponent(rival).unwrap().position < 30.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `chicane-core` | `Car`, `LaneChange`, `CollisionEvent`, IDs, errors |
//! | [`engine`] | `chicane-engine` | `RaceWorld`, `RaceConfig`, `StepMetrics` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and identifiers (`chicane-core`).
///
/// Contains the [`types::Car`] vehicle record, the [`types::LaneChange`]
/// command, the [`types::CollisionEvent`] value, and the error enums.
pub use chicane_core as types;

/// The simulation engine (`chicane-engine`).
///
/// [`engine::RaceWorld`] is the caller-driven world;
/// [`engine::RaceConfig`] configures it.
pub use chicane_engine as engine;

/// Common imports for typical Chicane usage.
///
/// ```rust
/// use chicane::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use chicane_core::{Car, CollisionEvent, LaneChange, OpponentId, TickId};

    // Errors
    pub use chicane_core::{ConfigError, SpawnError, StepError};

    // Engine
    pub use chicane_engine::{OpponentSeed, RaceConfig, RaceWorld, StepMetrics};
}
