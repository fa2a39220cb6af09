//! `soc-sim` — the world and its tick loop.
//!
//! # Tick loop
//!
//! ```text
//! for each tick until config.end_tick():
//!   ① Choose  — every idle human is offered to BehaviorModel::choose_action;
//!               a chosen action starts immediately (same rules as command).
//!   ② Advance — the clock moves forward one tick.
//!   ③ Agents  — every human, in construction order:
//!                 decay all needs → step its action (travel or perform).
//!   ④ Report  — busy/distressed counts, first-distress warnings,
//!               observer callbacks and snapshots.
//! ```
//!
//! Humans never interact, so the order in ③ only matters for determinism of
//! log output.  Geography and catalogs are read-only for the whole run.
//!
//! # Quick-start
//!
//! ```rust
//! use soc_agent::HumanBuilder;
//! use soc_behavior::ActionCatalog;
//! use soc_core::{AgentId, Point, SimConfig};
//! use soc_sim::{NoopObserver, WorldBuilder};
//! use soc_spatial::GeographyBuilder;
//!
//! let mut geo = GeographyBuilder::new(100.0);
//! geo.add_lake(40.0, 80.0, 5.0);
//!
//! let mut world = WorldBuilder::new(SimConfig::default(), geo.build()?)
//!     .human(HumanBuilder::new(Point::new(30.0, 20.0)))
//!     .build()?;
//! world.command(AgentId(0), ActionCatalog::DRINK)?;
//! world.run(&mut NoopObserver)?;
//! assert_eq!(world.clock().elapsed(), 100);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod render;
pub mod world;


pub use builder::WorldBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, Snapshot};
pub use render::RenderBuffer;
pub use world::{TickSummary, World};
