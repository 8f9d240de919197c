//! Test fixtures for Chicane development.
//!
//! Provides ready-made worlds and spawn helpers shared by the engine's
//! integration tests and the benchmark crate.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{spawn_column, three_lane_world, world_with_player};
