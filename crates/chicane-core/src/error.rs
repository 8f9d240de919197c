//! Error types for the Chicane simulation.
//!
//! All errors are synchronous precondition failures: validation runs at the
//! start of a call, before any state is touched, so a failed call never
//! leaves a world partially mutated. Organized by subsystem: configuration,
//! spawning, and the step function.

use std::error::Error;
use std::fmt;

/// Errors detected while validating a world configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `lane_count` is zero.
    InvalidLaneCount {
        /// The configured lane count.
        configured: usize,
    },
    /// The initial player lane is outside `[0, lane_count)`.
    PlayerLaneOutOfRange {
        /// The configured player lane.
        lane_index: usize,
        /// The configured lane count.
        lane_count: usize,
    },
    /// `lane_change_cooldown` is NaN, infinite, zero, or negative.
    InvalidCooldown {
        /// The invalid value.
        value: f64,
    },
    /// `despawn_margin` is NaN, infinite, or negative.
    InvalidDespawnMargin {
        /// The invalid value.
        value: f64,
    },
    /// The initial player vehicle failed structural validation.
    InvalidVehicle {
        /// Description of the validation failure.
        reason: String,
    },
    /// An initial opponent seed failed the spawn rules.
    Spawn(SpawnError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLaneCount { configured } => {
                write!(f, "lane_count must be at least 1, got {configured}")
            }
            Self::PlayerLaneOutOfRange {
                lane_index,
                lane_count,
            } => {
                write!(
                    f,
                    "player lane {lane_index} is outside the {lane_count} configured lanes"
                )
            }
            Self::InvalidCooldown { value } => {
                write!(
                    f,
                    "lane_change_cooldown must be finite and positive, got {value}"
                )
            }
            Self::InvalidDespawnMargin { value } => {
                write!(
                    f,
                    "despawn_margin must be finite and non-negative, got {value}"
                )
            }
            Self::InvalidVehicle { reason } => write!(f, "invalid player vehicle: {reason}"),
            Self::Spawn(e) => write!(f, "initial opponent: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Spawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpawnError> for ConfigError {
    fn from(e: SpawnError) -> Self {
        Self::Spawn(e)
    }
}

/// Errors from spawning an opponent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpawnError {
    /// The requested lane is outside `[0, lane_count)`.
    LaneOutOfRange {
        /// The requested lane.
        lane_index: usize,
        /// The world's lane count.
        lane_count: usize,
    },
    /// The requested length is NaN, infinite, zero, or negative.
    InvalidLength {
        /// The invalid value.
        value: f64,
    },
    /// The spawn position is not strictly ahead of the player.
    NotAhead {
        /// The requested spawn position.
        distance_ahead: f64,
        /// The player's position at spawn time.
        player_position: f64,
    },
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LaneOutOfRange {
                lane_index,
                lane_count,
            } => {
                write!(
                    f,
                    "lane {lane_index} is outside the {lane_count} configured lanes"
                )
            }
            Self::InvalidLength { value } => {
                write!(f, "length must be finite and positive, got {value}")
            }
            Self::NotAhead {
                distance_ahead,
                player_position,
            } => {
                write!(
                    f,
                    "spawn position {distance_ahead} is not strictly ahead of the player at {player_position}"
                )
            }
        }
    }
}

impl Error for SpawnError {}

/// Errors from the per-frame step function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepError {
    /// `delta_time` is NaN, infinite, or negative.
    InvalidDeltaTime {
        /// The invalid value.
        value: f64,
    },
    /// `opponent_speed` is NaN, infinite, or negative.
    InvalidOpponentSpeed {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDeltaTime { value } => {
                write!(f, "delta_time must be finite and non-negative, got {value}")
            }
            Self::InvalidOpponentSpeed { value } => {
                write!(
                    f,
                    "opponent_speed must be finite and non-negative, got {value}"
                )
            }
        }
    }
}

impl Error for StepError {}
