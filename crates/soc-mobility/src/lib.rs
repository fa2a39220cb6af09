//! `soc-mobility` — agent walking, arrival detection, and journey tracking.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`state`]   | `MovementState` — one agent's current journey              |
//! | [`engine`]  | `MobilityEngine` — fixed-speed stepping + arrival test     |
//! | [`error`]   | `MobilityError`, `MobilityResult<T>`                       |
//!
//! # Movement model (fixed-step straight line)
//!
//! 1. `MobilityEngine::begin_travel` records the origin, destination and the
//!    predicted `arrival_tick = now + travel_ticks(distance)`.  A destination
//!    within the arrival epsilon produces a stationary state.
//! 2. Every tick, `MobilityEngine::step` moves the agent `walking_speed`
//!    units along the straight line.  The last step is clamped so it never
//!    overshoots.
//! 3. Once the remaining distance is within the epsilon the agent is snapped
//!    onto the destination and the state becomes stationary.
//!
//! There are no obstacles, roads, or collisions.  Agents walk through each
//! other and through resource zones alike.

pub mod engine;
pub mod error;
pub mod state;


pub use engine::MobilityEngine;
pub use error::{MobilityError, MobilityResult};
pub use state::MovementState;
