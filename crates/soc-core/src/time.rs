//! Simulation time model and run configuration.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! discrete step of every agent: need decay, then one step of whatever
//! action the agent is executing.  There is no mapping to wall-clock time;
//! pacing (e.g. a delay between ticks for animation) belongs to the driver.

use std::fmt;

use crate::{SocError, SocResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`, saturating at `u64::MAX`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0.saturating_add(n))
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

/// Saturates at `u64::MAX`; a journey too long to count never panics.
impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        self.offset(rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick of a running world.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick — advanced by `SimClock::advance()` after every
    /// completed world tick.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new() -> Self {
        Self { current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Number of completed ticks.
    #[inline]
    pub fn elapsed(&self) -> u64 {
        self.current_tick.0
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current_tick)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON file by the driver and passed to the world
/// builder.  Every field has a default, so partial files are accepted when
/// the `serde` feature is enabled.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Total ticks `World::run` simulates.
    pub total_ticks: u64,

    /// Distance (world units) a walking agent covers per tick.
    pub walking_speed: f64,

    /// An agent closer than this to its destination counts as arrived.
    pub arrival_epsilon: f64,

    /// Side length of the square world.  Only used by renderers.
    pub world_size: f64,

    /// Emit a snapshot every N ticks.  1 = every tick; 0 = never.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:           100,
            walking_speed:         1.0,
            arrival_epsilon:       0.01,
            world_size:            100.0,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Reject values that would stall or corrupt movement.
    pub fn validate(&self) -> SocResult<()> {
        if !(self.walking_speed.is_finite() && self.walking_speed > 0.0) {
            return Err(SocError::Config(format!(
                "walking_speed must be positive and finite, got {}",
                self.walking_speed
            )));
        }
        if !(self.arrival_epsilon.is_finite() && self.arrival_epsilon > 0.0) {
            return Err(SocError::Config(format!(
                "arrival_epsilon must be positive and finite, got {}",
                self.arrival_epsilon
            )));
        }
        if !(self.world_size.is_finite() && self.world_size > 0.0) {
            return Err(SocError::Config(format!(
                "world_size must be positive and finite, got {}",
                self.world_size
            )));
        }
        Ok(())
    }
}
