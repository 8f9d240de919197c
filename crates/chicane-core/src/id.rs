//! Strongly-typed identifiers.

use std::fmt;

/// Stable handle for a spawned opponent vehicle.
///
/// Handles are allocated from a per-world monotonic counter and are never
/// reused within that world, even across a reset. A handle stays valid for
/// the opponent's lifetime; once the opponent is culled, lookups with the
/// handle return `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OpponentId(pub u64);

impl fmt::Display for OpponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OpponentId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Monotonically increasing step counter.
///
/// Incremented each time the simulation advances one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_as_plain_numbers() {
        assert_eq!(OpponentId(7).to_string(), "7");
        assert_eq!(TickId(42).to_string(), "42");
    }

    #[test]
    fn ids_order_by_value() {
        assert!(OpponentId(1) < OpponentId(2));
        assert!(TickId(0) < TickId(1));
    }
}
