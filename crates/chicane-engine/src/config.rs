//! World configuration and validation.
//!
//! [`RaceConfig`] is the input for constructing a [`RaceWorld`](crate::world::RaceWorld).
//! [`validate()`](RaceConfig::validate) is a pure, complete check of all
//! structural invariants; the world constructor runs it before touching any
//! state and then builds the initial opponents through the regular spawn
//! path.

use chicane_core::{Car, ConfigError, SpawnError};

/// Default minimum time between two accepted lane changes.
pub const DEFAULT_LANE_CHANGE_COOLDOWN: f64 = 0.15;

/// Default distance behind the player beyond which opponents are removed.
pub const DEFAULT_DESPAWN_MARGIN: f64 = 6.0;

// ── OpponentSeed ───────────────────────────────────────────────────

/// An opponent to create at world construction time.
///
/// Seeds pass the same rules as a runtime spawn: the lane must exist, the
/// length must be finite and positive, and the position must be strictly
/// ahead of the player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpponentSeed {
    /// Lane for the opponent.
    pub lane_index: usize,
    /// Spawn position; must be strictly ahead of the player.
    pub distance_ahead: f64,
    /// Vehicle length.
    pub length: f64,
}

impl OpponentSeed {
    /// Seed an opponent of default length.
    pub fn new(lane_index: usize, distance_ahead: f64) -> Self {
        Self {
            lane_index,
            distance_ahead,
            length: Car::DEFAULT_LENGTH,
        }
    }
}

// ── RaceConfig ─────────────────────────────────────────────────────

/// Complete configuration for constructing a race world.
///
/// [`RaceConfig::new`] fills every field except `lane_count` with defaults;
/// the fields are public, so callers override what they need:
///
/// ```
/// use chicane_engine::RaceConfig;
/// use chicane_core::Car;
///
/// let config = RaceConfig {
///     player: Car::new(1, 0.0),
///     ..RaceConfig::new(3)
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RaceConfig {
    /// Number of parallel lanes. Must be at least 1.
    pub lane_count: usize,
    /// Minimum time between two accepted lane changes. Finite, positive.
    pub lane_change_cooldown: f64,
    /// Distance behind the player beyond which opponents are removed.
    /// Finite, non-negative.
    pub despawn_margin: f64,
    /// Initial player vehicle. Its lane must lie in `[0, lane_count)`.
    pub player: Car,
    /// Opponents to create at construction time.
    pub opponents: Vec<OpponentSeed>,
}

impl RaceConfig {
    /// Create a configuration with `lane_count` lanes and defaults for
    /// everything else: default cooldown and despawn margin, a player of
    /// default length at lane 0 / position 0, and no initial opponents.
    pub fn new(lane_count: usize) -> Self {
        Self {
            lane_count,
            lane_change_cooldown: DEFAULT_LANE_CHANGE_COOLDOWN,
            despawn_margin: DEFAULT_DESPAWN_MARGIN,
            player: Car::new(0, 0.0),
            opponents: Vec::new(),
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. At least one lane.
        if self.lane_count < 1 {
            return Err(ConfigError::InvalidLaneCount {
                configured: self.lane_count,
            });
        }
        // 2. Cooldown must be finite and positive.
        if !self.lane_change_cooldown.is_finite() || self.lane_change_cooldown <= 0.0 {
            return Err(ConfigError::InvalidCooldown {
                value: self.lane_change_cooldown,
            });
        }
        // 3. Despawn margin must be finite and non-negative.
        if !self.despawn_margin.is_finite() || self.despawn_margin < 0.0 {
            return Err(ConfigError::InvalidDespawnMargin {
                value: self.despawn_margin,
            });
        }
        // 4. Player vehicle must be structurally sound.
        self.player
            .validate()
            .map_err(|reason| ConfigError::InvalidVehicle { reason })?;
        // 5. Player lane must exist.
        if self.player.lane_index >= self.lane_count {
            return Err(ConfigError::PlayerLaneOutOfRange {
                lane_index: self.player.lane_index,
                lane_count: self.lane_count,
            });
        }
        // 6. Every seed opponent must pass the spawn rules.
        for seed in &self.opponents {
            if seed.lane_index >= self.lane_count {
                return Err(ConfigError::Spawn(SpawnError::LaneOutOfRange {
                    lane_index: seed.lane_index,
                    lane_count: self.lane_count,
                }));
            }
            if !seed.length.is_finite() || seed.length <= 0.0 {
                return Err(ConfigError::Spawn(SpawnError::InvalidLength {
                    value: seed.length,
                }));
            }
            if !seed.distance_ahead.is_finite() || seed.distance_ahead <= self.player.position {
                return Err(ConfigError::Spawn(SpawnError::NotAhead {
                    distance_ahead: seed.distance_ahead,
                    player_position: self.player.position,
                }));
            }
        }
        Ok(())
    }
}
