//! `soc-agent` — human agents and their action state machine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`human`]     | `Human`, `ActionExecution`, `Phase`, `DoOutcome`, `TickEvent` |
//! | [`store`]     | `Population` — the ordered list of humans                     |
//! | [`builder`]   | `HumanBuilder` (fluent construction)                          |
//! | [`error`]     | `AgentError`, `AgentResult<T>`                                |
//!
//! # Action state machine
//!
//! ```text
//!            do_action                    arrived
//!   Idle ───────────────► Traveling ──────────────► Performing
//!     ▲        │ at destination                          │
//!     │        └────────────────────────────────────────►│
//!     │                  elapsed == duration             │
//!     └──────────────────────────────────────────────────┘
//! ```
//!
//! A busy human rejects `do_action` with [`DoOutcome::Busy`]; its current
//! execution is untouched.  Every tick first decays all needs, then advances
//! the current action by one step.

pub mod builder;
pub mod error;
pub mod human;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::HumanBuilder;
pub use error::{AgentError, AgentResult};
pub use human::{ActionExecution, DoOutcome, Human, Phase, TickEvent};
pub use store::Population;
