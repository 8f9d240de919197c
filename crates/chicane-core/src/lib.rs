//! Core types for the Chicane lane-racing simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fundamental types used throughout the Chicane workspace: the vehicle
//! record, the lane-change command enumeration, the collision event value,
//! strongly-typed identifiers, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod event;
pub mod id;
pub mod vehicle;

pub use command::LaneChange;
pub use error::{ConfigError, SpawnError, StepError};
pub use event::CollisionEvent;
pub use id::{OpponentId, TickId};
pub use vehicle::Car;
