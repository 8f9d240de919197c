//! Simulation engine for the Chicane lane-racing core.
//!
//! Provides [`RaceWorld`], the caller-driven world that owns all simulation
//! state and advances it one frame per [`advance()`](RaceWorld::advance)
//! call. There are no background threads and no internal clocks; time only
//! passes when the caller supplies a `delta_time`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod world;

pub use config::{
    OpponentSeed, RaceConfig, DEFAULT_DESPAWN_MARGIN, DEFAULT_LANE_CHANGE_COOLDOWN,
};
pub use metrics::StepMetrics;
pub use world::RaceWorld;
