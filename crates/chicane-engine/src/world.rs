//! The race world: a caller-driven, single-owner simulation.
//!
//! [`RaceWorld`] is the primary user-facing API. Each call to
//! [`advance()`](RaceWorld::advance) runs one complete step: decay the
//! lane-change cooldown, apply the lane-change command, translate the
//! opponents, detect collisions, and cull opponents that have fallen far
//! enough behind the player.
//!
//! # Ownership model
//!
//! `RaceWorld` exclusively owns the player and every opponent; all mutating
//! methods take `&mut self`, so the borrow checker enforces single-owner
//! confinement. If a host drives the world from several threads, external
//! synchronization is that host's job; the world performs no locking.
//!
//! # Failure atomicity
//!
//! `advance()` validates its inputs before touching any state. A call that
//! returns an error leaves the world exactly as it was.

use std::fmt;
use std::time::Instant;

use indexmap::IndexMap;

use chicane_core::{
    Car, CollisionEvent, ConfigError, LaneChange, OpponentId, SpawnError, StepError, TickId,
};

use crate::config::RaceConfig;
use crate::metrics::StepMetrics;

/// The lane-racing simulation world.
///
/// Created from a [`RaceConfig`] via [`new()`](RaceWorld::new). The caller
/// drives it one frame at a time:
///
/// ```
/// use chicane_engine::{RaceConfig, RaceWorld};
/// use chicane_core::LaneChange;
///
/// let mut world = RaceWorld::new(RaceConfig::new(3)).unwrap();
/// let rival = world.spawn_opponent(0, 25.0).unwrap();
///
/// // One 60 Hz frame with opponents closing at 10 units/s.
/// let collision = world.advance(0.016, 10.0, LaneChange::None).unwrap();
/// assert!(collision.is_none());
/// assert!(world.opponent(rival).unwrap().position < 25.0);
/// ```
pub struct RaceWorld {
    lane_count: usize,
    lane_change_cooldown: f64,
    despawn_margin: f64,
    player: Car,
    initial_player: Car,
    opponents: IndexMap<OpponentId, Car>,
    next_opponent_id: u64,
    lane_timer: f64,
    current_tick: TickId,
    lane_changes: u64,
    collisions: u64,
    last_metrics: StepMetrics,
}

impl RaceWorld {
    /// Construct a world from a [`RaceConfig`].
    ///
    /// Validates the configuration, then spawns any seed opponents through
    /// the same path as [`spawn_opponent_with_length()`](Self::spawn_opponent_with_length).
    /// The world starts at tick 0 with the cooldown timer expired.
    pub fn new(config: RaceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut world = Self {
            lane_count: config.lane_count,
            lane_change_cooldown: config.lane_change_cooldown,
            despawn_margin: config.despawn_margin,
            player: config.player,
            initial_player: config.player,
            opponents: IndexMap::new(),
            next_opponent_id: 0,
            lane_timer: 0.0,
            current_tick: TickId(0),
            lane_changes: 0,
            collisions: 0,
            last_metrics: StepMetrics::default(),
        };
        for seed in &config.opponents {
            world.spawn_opponent_with_length(seed.lane_index, seed.distance_ahead, seed.length)?;
        }
        Ok(world)
    }

    /// Spawn an opponent of default length that will travel toward the player.
    ///
    /// Returns a stable handle for the new opponent. The opponent is
    /// appended after all existing ones; relative order is never changed
    /// afterward.
    ///
    /// # Errors
    ///
    /// - [`SpawnError::LaneOutOfRange`] if `lane_index` is not a configured lane.
    /// - [`SpawnError::NotAhead`] if `distance_ahead` is not strictly ahead
    ///   of the player (or not finite).
    pub fn spawn_opponent(
        &mut self,
        lane_index: usize,
        distance_ahead: f64,
    ) -> Result<OpponentId, SpawnError> {
        self.spawn_opponent_with_length(lane_index, distance_ahead, Car::DEFAULT_LENGTH)
    }

    /// Spawn an opponent with an explicit vehicle length.
    ///
    /// Same rules as [`spawn_opponent()`](Self::spawn_opponent), plus the
    /// length must be finite and positive
    /// ([`SpawnError::InvalidLength`] otherwise).
    pub fn spawn_opponent_with_length(
        &mut self,
        lane_index: usize,
        distance_ahead: f64,
        length: f64,
    ) -> Result<OpponentId, SpawnError> {
        if lane_index >= self.lane_count {
            return Err(SpawnError::LaneOutOfRange {
                lane_index,
                lane_count: self.lane_count,
            });
        }
        if !length.is_finite() || length <= 0.0 {
            return Err(SpawnError::InvalidLength { value: length });
        }
        if !distance_ahead.is_finite() || distance_ahead <= self.player.position {
            return Err(SpawnError::NotAhead {
                distance_ahead,
                player_position: self.player.position,
            });
        }

        let id = OpponentId(self.next_opponent_id);
        self.next_opponent_id += 1;
        self.opponents
            .insert(id, Car::with_length(lane_index, distance_ahead, length));
        Ok(id)
    }

    /// Whether the player could satisfy `command` right now.
    ///
    /// Pure query, no side effects. `LaneChange::None` is never satisfiable;
    /// any command is refused while the cooldown timer is running; `Left`
    /// and `Right` are refused at the track edges.
    ///
    /// This is the one and only feasibility rule: the gate inside
    /// [`advance()`](Self::advance) calls this same method, so the public
    /// query and the in-step decision cannot diverge.
    pub fn can_change_lane(&self, command: LaneChange) -> bool {
        if self.lane_timer > 0.0 {
            return false;
        }
        match command {
            LaneChange::None => false,
            LaneChange::Left => self.player.lane_index > 0,
            LaneChange::Right => self.player.lane_index + 1 < self.lane_count,
        }
    }

    /// Advance the simulation by `delta_time` and report any collision.
    ///
    /// The single per-frame entry point. Internal effect order:
    /// cooldown decay → lane-change gate → opponent translation →
    /// collision detection → despawn culling. Culling runs after collision
    /// detection, so an opponent that collides this step is never silently
    /// removed in the same step.
    ///
    /// At most one collision is reported per step: the first overlapping
    /// opponent in spawn order wins.
    ///
    /// # Errors
    ///
    /// - [`StepError::InvalidDeltaTime`] if `delta_time` is negative or not
    ///   finite.
    /// - [`StepError::InvalidOpponentSpeed`] if `opponent_speed` is negative
    ///   or not finite.
    ///
    /// Validation precedes all mutation; on error the world is untouched.
    pub fn advance(
        &mut self,
        delta_time: f64,
        opponent_speed: f64,
        command: LaneChange,
    ) -> Result<Option<CollisionEvent>, StepError> {
        if !delta_time.is_finite() || delta_time < 0.0 {
            return Err(StepError::InvalidDeltaTime { value: delta_time });
        }
        if !opponent_speed.is_finite() || opponent_speed < 0.0 {
            return Err(StepError::InvalidOpponentSpeed {
                value: opponent_speed,
            });
        }

        let started = Instant::now();

        self.tick_cooldown(delta_time);
        self.apply_lane_change(command);
        self.advance_opponents(delta_time, opponent_speed);
        let collision = self.detect_collision();
        let culled = self.cull_passed_opponents();

        self.current_tick = TickId(self.current_tick.0 + 1);
        if collision.is_some() {
            self.collisions += 1;
        }
        self.last_metrics = StepMetrics {
            total_us: started.elapsed().as_micros() as u64,
            opponent_count: self.opponents.len(),
            culled,
        };

        Ok(collision)
    }

    /// Report the first same-lane overlap between the player and an opponent.
    ///
    /// Pure query over current state; calling it repeatedly without an
    /// intervening [`advance()`](Self::advance) returns the same result.
    /// Candidates are scanned in spawn order and the first one with positive
    /// overlap wins; the scan does not look for the deepest overlap.
    /// Exactly touching (`overlap == 0`) is not a collision.
    pub fn detect_collision(&self) -> Option<CollisionEvent> {
        let player_center = self.player.position;
        let player_half = self.player.half_length();
        for (&id, opponent) in &self.opponents {
            if opponent.lane_index != self.player.lane_index {
                continue;
            }
            let overlap =
                player_half + opponent.half_length() - (player_center - opponent.position).abs();
            if overlap > 0.0 {
                return Some(CollisionEvent {
                    opponent: id,
                    lane_index: self.player.lane_index,
                    overlap,
                    opponent_center: opponent.position,
                });
            }
        }
        None
    }

    /// Restore the world to its initial state.
    ///
    /// The player returns to its configured starting state, all opponents
    /// are removed, the cooldown timer is cleared, and the tick and
    /// cumulative counters return to zero. The opponent-handle counter is
    /// not rewound, so handles from before the reset never alias a new
    /// opponent.
    pub fn reset(&mut self) {
        self.player = self.initial_player;
        self.opponents.clear();
        self.lane_timer = 0.0;
        self.current_tick = TickId(0);
        self.lane_changes = 0;
        self.collisions = 0;
        self.last_metrics = StepMetrics::default();
    }

    // ── Step phases ─────────────────────────────────────────────

    fn tick_cooldown(&mut self, delta_time: f64) {
        if self.lane_timer > 0.0 {
            self.lane_timer = (self.lane_timer - delta_time).max(0.0);
        }
    }

    fn apply_lane_change(&mut self, command: LaneChange) {
        if !self.can_change_lane(command) {
            return;
        }
        match command {
            LaneChange::Left => self.player.lane_index -= 1,
            LaneChange::Right => self.player.lane_index += 1,
            LaneChange::None => return,
        }
        self.lane_timer = self.lane_change_cooldown;
        self.lane_changes += 1;
    }

    fn advance_opponents(&mut self, delta_time: f64, opponent_speed: f64) {
        if self.opponents.is_empty() || opponent_speed == 0.0 || delta_time == 0.0 {
            return;
        }
        let distance = opponent_speed * delta_time;
        for opponent in self.opponents.values_mut() {
            opponent.position -= distance;
        }
    }

    /// Remove opponents whose trailing edge has passed the despawn cutoff.
    ///
    /// Returns how many were removed. Survivors keep their relative order.
    fn cull_passed_opponents(&mut self) -> usize {
        if self.opponents.is_empty() {
            return 0;
        }
        let cutoff = self.player.position - self.despawn_margin;
        let before = self.opponents.len();
        self.opponents
            .retain(|_, opponent| opponent.position + opponent.half_length() >= cutoff);
        before - self.opponents.len()
    }

    // ── Read accessors ──────────────────────────────────────────

    /// The player vehicle.
    pub fn player(&self) -> &Car {
        &self.player
    }

    /// Number of configured lanes.
    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    /// The configured minimum time between accepted lane changes.
    pub fn lane_change_cooldown(&self) -> f64 {
        self.lane_change_cooldown
    }

    /// The configured despawn margin.
    pub fn despawn_margin(&self) -> f64 {
        self.despawn_margin
    }

    /// Time left on the lane-change cooldown. Zero when a change is allowed.
    pub fn cooldown_remaining(&self) -> f64 {
        self.lane_timer
    }

    /// Live opponents in spawn order.
    pub fn opponents(&self) -> impl Iterator<Item = (OpponentId, &Car)> {
        self.opponents.iter().map(|(&id, car)| (id, car))
    }

    /// Look up a single opponent by handle. `None` once it has been culled.
    pub fn opponent(&self, id: OpponentId) -> Option<&Car> {
        self.opponents.get(&id)
    }

    /// Number of live opponents.
    pub fn opponent_count(&self) -> usize {
        self.opponents.len()
    }

    /// Current step counter (0 after construction or reset).
    pub fn current_tick(&self) -> TickId {
        self.current_tick
    }

    /// Cumulative number of accepted lane changes since construction/reset.
    pub fn lane_changes(&self) -> u64 {
        self.lane_changes
    }

    /// Cumulative number of steps that reported a collision.
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    /// Metrics from the most recent successful step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}

impl fmt::Debug for RaceWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RaceWorld")
            .field("current_tick", &self.current_tick)
            .field("player_lane", &self.player.lane_index)
            .field("opponent_count", &self.opponents.len())
            .field("cooldown_remaining", &self.lane_timer)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OpponentSeed;

    fn three_lanes() -> RaceWorld {
        let config = RaceConfig {
            player: Car::new(1, 0.0),
            ..RaceConfig::new(3)
        };
        RaceWorld::new(config).unwrap()
    }

    // ── Construction ─────────────────────────────────────────

    #[test]
    fn new_world_starts_at_tick_zero_with_expired_cooldown() {
        let world = three_lanes();
        assert_eq!(world.current_tick(), TickId(0));
        assert_eq!(world.cooldown_remaining(), 0.0);
        assert_eq!(world.opponent_count(), 0);
        assert_eq!(world.player().lane_index, 1);
    }

    #[test]
    fn new_world_rejects_bad_config() {
        match RaceWorld::new(RaceConfig::new(0)) {
            Err(ConfigError::InvalidLaneCount { .. }) => {}
            other => panic!("expected InvalidLaneCount, got {other:?}"),
        }
    }

    #[test]
    fn new_world_spawns_seed_opponents_in_order() {
        let config = RaceConfig {
            opponents: vec![
                OpponentSeed::new(0, 10.0),
                OpponentSeed::new(1, 20.0),
                OpponentSeed::new(2, 30.0),
            ],
            ..RaceConfig::new(3)
        };
        let world = RaceWorld::new(config).unwrap();
        let lanes: Vec<usize> = world.opponents().map(|(_, car)| car.lane_index).collect();
        assert_eq!(lanes, vec![0, 1, 2]);
    }

    // ── Spawning ─────────────────────────────────────────────

    #[test]
    fn spawn_returns_distinct_handles_and_appends() {
        let mut world = three_lanes();
        let a = world.spawn_opponent(0, 10.0).unwrap();
        let b = world.spawn_opponent(2, 15.0).unwrap();
        assert_ne!(a, b);

        let ids: Vec<OpponentId> = world.opponents().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(world.opponent(a).unwrap().lane_index, 0);
        assert_eq!(world.opponent(b).unwrap().position, 15.0);
    }

    #[test]
    fn spawn_rejects_missing_lane() {
        let mut world = three_lanes();
        match world.spawn_opponent(3, 10.0) {
            Err(SpawnError::LaneOutOfRange {
                lane_index: 3,
                lane_count: 3,
            }) => {}
            other => panic!("expected LaneOutOfRange, got {other:?}"),
        }
        assert_eq!(world.opponent_count(), 0);
    }

    #[test]
    fn spawn_rejects_position_at_or_behind_player() {
        let mut world = three_lanes();
        // Exactly at the player's position is not strictly ahead.
        assert!(matches!(
            world.spawn_opponent(0, 0.0),
            Err(SpawnError::NotAhead { .. })
        ));
        assert!(matches!(
            world.spawn_opponent(0, -5.0),
            Err(SpawnError::NotAhead { .. })
        ));
        assert!(matches!(
            world.spawn_opponent(0, f64::NAN),
            Err(SpawnError::NotAhead { .. })
        ));
    }

    #[test]
    fn spawn_rejects_bad_length() {
        let mut world = three_lanes();
        assert!(matches!(
            world.spawn_opponent_with_length(0, 10.0, 0.0),
            Err(SpawnError::InvalidLength { .. })
        ));
    }

    // ── Feasibility query ────────────────────────────────────

    #[test]
    fn can_change_lane_none_is_never_satisfiable() {
        let world = three_lanes();
        assert!(!world.can_change_lane(LaneChange::None));
    }

    #[test]
    fn can_change_lane_respects_track_edges() {
        let config = RaceConfig {
            player: Car::new(0, 0.0),
            ..RaceConfig::new(2)
        };
        let world = RaceWorld::new(config).unwrap();
        assert!(!world.can_change_lane(LaneChange::Left));
        assert!(world.can_change_lane(LaneChange::Right));
    }

    #[test]
    fn can_change_lane_false_while_cooldown_runs() {
        let mut world = three_lanes();
        world.advance(0.016, 0.0, LaneChange::Left).unwrap();
        assert_eq!(world.player().lane_index, 0);
        assert!(world.cooldown_remaining() > 0.0);
        assert!(!world.can_change_lane(LaneChange::Right));
    }

    #[test]
    fn single_lane_world_refuses_every_direction() {
        let world = RaceWorld::new(RaceConfig::new(1)).unwrap();
        assert!(!world.can_change_lane(LaneChange::Left));
        assert!(!world.can_change_lane(LaneChange::Right));
        assert!(!world.can_change_lane(LaneChange::None));
    }

    // ── Stepping ─────────────────────────────────────────────

    #[test]
    fn advance_counts_ticks_and_lane_changes() {
        let mut world = three_lanes();
        world.advance(0.016, 0.0, LaneChange::Right).unwrap();
        world.advance(0.2, 0.0, LaneChange::Left).unwrap();
        assert_eq!(world.current_tick(), TickId(2));
        assert_eq!(world.lane_changes(), 2);
    }

    #[test]
    fn advance_moves_every_opponent_by_the_same_distance() {
        let mut world = three_lanes();
        let a = world.spawn_opponent(0, 10.0).unwrap();
        let b = world.spawn_opponent(2, 30.0).unwrap();

        world.advance(0.5, 8.0, LaneChange::None).unwrap();

        assert_eq!(world.opponent(a).unwrap().position, 6.0);
        assert_eq!(world.opponent(b).unwrap().position, 26.0);
    }

    #[test]
    fn advance_rejects_negative_and_non_finite_inputs() {
        let mut world = three_lanes();
        world.spawn_opponent(1, 10.0).unwrap();

        assert!(matches!(
            world.advance(-0.016, 0.0, LaneChange::None),
            Err(StepError::InvalidDeltaTime { .. })
        ));
        assert!(matches!(
            world.advance(f64::NAN, 0.0, LaneChange::None),
            Err(StepError::InvalidDeltaTime { .. })
        ));
        assert!(matches!(
            world.advance(0.016, -1.0, LaneChange::None),
            Err(StepError::InvalidOpponentSpeed { .. })
        ));
        assert!(matches!(
            world.advance(0.016, f64::INFINITY, LaneChange::None),
            Err(StepError::InvalidOpponentSpeed { .. })
        ));

        // Failed calls left everything untouched.
        assert_eq!(world.current_tick(), TickId(0));
        assert_eq!(world.opponents().next().unwrap().1.position, 10.0);
    }

    #[test]
    fn advance_updates_metrics() {
        let mut world = three_lanes();
        world.spawn_opponent(0, 10.0).unwrap();
        world.advance(0.016, 5.0, LaneChange::None).unwrap();

        let metrics = world.last_metrics();
        assert_eq!(metrics.opponent_count, 1);
        assert_eq!(metrics.culled, 0);
    }

    // ── Reset ────────────────────────────────────────────────

    #[test]
    fn reset_restores_initial_state() {
        let mut world = three_lanes();
        world.spawn_opponent(2, 10.0).unwrap();
        world.advance(0.016, 5.0, LaneChange::Right).unwrap();
        assert_eq!(world.player().lane_index, 2);

        world.reset();
        assert_eq!(world.player().lane_index, 1);
        assert_eq!(world.opponent_count(), 0);
        assert_eq!(world.current_tick(), TickId(0));
        assert_eq!(world.cooldown_remaining(), 0.0);
        assert_eq!(world.lane_changes(), 0);
        assert_eq!(world.collisions(), 0);
    }

    #[test]
    fn reset_does_not_reuse_opponent_handles() {
        let mut world = three_lanes();
        let before = world.spawn_opponent(0, 10.0).unwrap();
        world.reset();
        let after = world.spawn_opponent(0, 10.0).unwrap();
        assert_ne!(before, after);
        // The stale handle resolves to nothing.
        assert!(world.opponent(before).is_none());
    }

    // ── Debug impl ───────────────────────────────────────────

    #[test]
    fn debug_impl_reports_summary_fields() {
        let world = three_lanes();
        let debug = format!("{world:?}");
        assert!(debug.contains("RaceWorld"));
        assert!(debug.contains("current_tick"));
        assert!(debug.contains("opponent_count"));
    }
}
