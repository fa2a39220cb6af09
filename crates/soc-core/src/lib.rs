//! `soc-core` — foundational types for the society simulation.
//!
//! This crate is a dependency of every other `soc-*` crate.  It has no
//! `soc-*` dependencies and a single required external one (`thiserror`),
//! plus optional `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `NeedId`, `ActionId`                       |
//! | [`geo`]         | `Point`, Euclidean distance, straight-line stepping   |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`error`]       | `SocError`, `SocResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SocError, SocResult};
pub use geo::Point;
pub use ids::{ActionId, AgentId, NeedId};
pub use time::{SimClock, SimConfig, Tick};
