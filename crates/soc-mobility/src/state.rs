//! Per-agent journey state.

use soc_core::{Point, Tick};

/// The movement state for a single agent.
///
/// An agent is either **stationary** (`in_transit = false`, standing at
/// `destination`) or **walking** from `origin` to `destination`.
///
/// `arrival_tick` is the tick on which the engine will land the agent on
/// its destination, computed once when the journey begins.  Renderers use it
/// together with `departure_tick` for progress bars; movement itself is
/// driven by [`MobilityEngine::step`](crate::MobilityEngine::step).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementState {
    /// `true` while the agent is walking to `destination`.
    pub in_transit: bool,

    /// Where the journey started.
    pub origin: Point,

    /// Where the journey ends.  Equals `origin` for a stationary state.
    pub destination: Point,

    /// Tick on which the journey began.
    pub departure_tick: Tick,

    /// Tick on which the agent reaches `destination`.  Equals
    /// `departure_tick` when stationary.
    pub arrival_tick: Tick,
}

impl MovementState {
    /// Construct a stationary state at `at` at time `tick`.
    #[inline]
    pub fn stationary(at: Point, tick: Tick) -> Self {
        Self {
            in_transit:     false,
            origin:         at,
            destination:    at,
            departure_tick: tick,
            arrival_tick:   tick,
        }
    }

    /// Fraction of the journey completed at `now`, in `[0.0, 1.0]`.
    ///
    /// Returns `1.0` for stationary agents or when `now >= arrival_tick`.
    pub fn progress(&self, now: Tick) -> f64 {
        if !self.in_transit || self.arrival_tick <= self.departure_tick {
            return 1.0;
        }
        let elapsed = now.0.saturating_sub(self.departure_tick.0) as f64;
        let total   = (self.arrival_tick.0 - self.departure_tick.0) as f64;
        (elapsed / total).min(1.0)
    }

    /// Straight-line length of the journey.
    #[inline]
    pub fn length(&self) -> f64 {
        self.origin.distance(self.destination)
    }
}
