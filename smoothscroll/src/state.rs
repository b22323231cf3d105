use crate::{Direction, ScrollingMode};

/// Payload of `scroll` and `scrollend` events.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSnapshot {
    /// Observable position (wrapped into `[0, limit)` in loop mode).
    pub position: f64,
    pub velocity: f64,
    pub last_velocity: f64,
    pub direction: Direction,
}

/// The engine's full reconciliation state.
///
/// `animated_scroll` and `target_scroll` are unbounded in loop mode; they track total distance
/// travelled.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub animated_scroll: f64,
    pub target_scroll: f64,
    pub velocity: f64,
    pub last_velocity: f64,
    pub direction: Direction,
    pub mode: ScrollingMode,
}

impl ScrollState {
    pub(crate) fn at(position: f64) -> Self {
        Self {
            animated_scroll: position,
            target_scroll: position,
            ..Self::default()
        }
    }

    /// Moves `animated_scroll` to `position`, deriving velocity and direction from the step.
    pub(crate) fn step_to(&mut self, position: f64) {
        self.last_velocity = self.velocity;
        self.velocity = position - self.animated_scroll;
        self.direction = Direction::from_delta(self.velocity);
        self.animated_scroll = position;
    }

    /// Brings the motion to rest, keeping the last velocity for reference.
    pub(crate) fn settle(&mut self) {
        self.last_velocity = self.velocity;
        self.velocity = 0.0;
        self.direction = Direction::Still;
    }
}
