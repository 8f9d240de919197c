//! Collision event reporting.

use crate::id::OpponentId;

/// Result of a player/opponent overlap, produced fresh each step.
///
/// The world never retains events; each one is a plain value snapshot of
/// the overlap at detection time. `overlap` is strictly positive; exactly
/// touching vehicles do not collide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionEvent {
    /// Handle of the colliding opponent.
    pub opponent: OpponentId,
    /// The lane shared by the player and the opponent.
    pub lane_index: usize,
    /// Depth of longitudinal interpenetration. Always `> 0`.
    pub overlap: f64,
    /// The opponent's center position at detection time.
    pub opponent_center: f64,
}
