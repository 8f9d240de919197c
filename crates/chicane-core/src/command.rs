//! Directional lane-change commands for the player vehicle.

/// A resolved lane-change command applied to the player for one step.
///
/// Commands arrive already resolved from whatever input layer the host
/// provides; the simulation only sees this closed three-valued enumeration.
/// `Left` moves toward lane 0, `Right` toward `lane_count - 1`.
///
/// # Examples
///
/// ```
/// use chicane_core::LaneChange;
///
/// let cmd = LaneChange::Left;
/// assert_ne!(cmd, LaneChange::None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaneChange {
    /// No lane change requested this step.
    None,
    /// Move one lane toward lane 0.
    Left,
    /// Move one lane toward `lane_count - 1`.
    Right,
}
