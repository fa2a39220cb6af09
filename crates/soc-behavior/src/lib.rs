//! `soc-behavior` — needs, actions, and the action-choice hook.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`need`]    | `Need`, `NeedCatalog`, `DEATH_COST`                             |
//! | [`action`]  | `Action`, `ActionCatalog`, `Destination`, `Transform`           |
//! | [`context`] | `ActionContext<'a>`, `AgentView<'a>` — read-only tick snapshot  |
//! | [`model`]   | `BehaviorModel` trait                                           |
//! | [`noop`]    | `NoopBehavior` — never chooses an action                        |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! Needs and actions are plain data.  They are built once, stored in
//! catalogs indexed by `NeedId` / `ActionId`, and shared read-only by every
//! agent.  Only the satisfaction *values* are per-agent.
//!
//! Every per-agent resolution (where to go, how long to take, what happens
//! on completion) goes through one fixed signature taking an
//! [`AgentView`] and an [`ActionContext`], so actions never reach into
//! mutable agent state.

pub mod action;
pub mod context;
pub mod error;
pub mod model;
pub mod need;
pub mod noop;


pub use action::{Action, ActionCatalog, Destination, Transform};
pub use context::{ActionContext, AgentView};
pub use error::{BehaviorError, BehaviorResult};
pub use model::BehaviorModel;
pub use need::{Need, NeedCatalog, COMFORT_LEVEL, DEATH_COST, FULL_SATISFACTION};
pub use noop::NoopBehavior;
