//! Fixed-speed straight-line walking.

use soc_core::{Point, SimConfig, Tick};
use tracing::trace;

use crate::{MobilityError, MobilityResult, MovementState};

/// Moves agents toward their destinations at a constant walking speed.
///
/// The engine is stateless apart from its two parameters; every agent owns
/// its own [`MovementState`] and position, and the engine is shared by
/// reference across all of them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MobilityEngine {
    walking_speed:   f64,
    arrival_epsilon: f64,
}

impl MobilityEngine {
    /// Create an engine, rejecting non-positive or non-finite parameters.
    pub fn new(walking_speed: f64, arrival_epsilon: f64) -> MobilityResult<Self> {
        if !(walking_speed.is_finite() && walking_speed > 0.0) {
            return Err(MobilityError::InvalidSpeed(walking_speed));
        }
        if !(arrival_epsilon.is_finite() && arrival_epsilon > 0.0) {
            return Err(MobilityError::InvalidEpsilon(arrival_epsilon));
        }
        Ok(Self { walking_speed, arrival_epsilon })
    }

    /// Engine using the walking speed and epsilon of `config`.
    pub fn from_config(config: &SimConfig) -> MobilityResult<Self> {
        Self::new(config.walking_speed, config.arrival_epsilon)
    }

    #[inline]
    pub fn walking_speed(&self) -> f64 {
        self.walking_speed
    }

    #[inline]
    pub fn arrival_epsilon(&self) -> f64 {
        self.arrival_epsilon
    }

    /// `true` when `position` is close enough to `destination` to count as
    /// being there.
    #[inline]
    pub fn has_arrived(&self, position: Point, destination: Point) -> bool {
        position.distance(destination) <= self.arrival_epsilon
    }

    /// Number of steps needed to cover `distance`.
    ///
    /// This is the smallest `k` with `distance - k * speed <= epsilon`, which
    /// equals `ceil(distance / speed)` whenever the final partial step is
    /// longer than the epsilon.  Zero when already within the epsilon.
    pub fn travel_ticks(&self, distance: f64) -> u64 {
        if distance <= self.arrival_epsilon {
            return 0;
        }
        ((distance - self.arrival_epsilon) / self.walking_speed).ceil() as u64
    }

    /// Start a journey from `from` to `to` at tick `now`.
    ///
    /// Returns a stationary state when `to` is within the epsilon of `from`.
    pub fn begin_travel(&self, from: Point, to: Point, now: Tick) -> MovementState {
        if self.has_arrived(from, to) {
            return MovementState::stationary(from, now);
        }
        let ticks = self.travel_ticks(from.distance(to));
        trace!(%from, %to, ticks, "journey started");
        MovementState {
            in_transit:     true,
            origin:         from,
            destination:    to,
            departure_tick: now,
            arrival_tick:   now + ticks,
        }
    }

    /// Advance `position` one step along `state`'s journey.
    ///
    /// Returns `true` if the agent is (now) at the destination.  On arrival
    /// `position` is set exactly to the destination and `state` becomes
    /// stationary.  A stationary state leaves `position` untouched.
    pub fn step(&self, state: &mut MovementState, position: &mut Point) -> bool {
        if !state.in_transit {
            return true;
        }
        *position = position.step_toward(state.destination, self.walking_speed);
        if self.has_arrived(*position, state.destination) {
            *position = state.destination;
            *state = MovementState::stationary(state.destination, state.arrival_tick);
            return true;
        }
        false
    }
}

impl Default for MobilityEngine {
    /// Speed 1.0, epsilon 0.01.
    fn default() -> Self {
        Self { walking_speed: 1.0, arrival_epsilon: 0.01 }
    }
}
