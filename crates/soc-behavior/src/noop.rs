//! A no-op behavior model — agents never choose an action on their own.

use soc_core::ActionId;

use crate::{ActionContext, AgentView, BehaviorModel};

/// A [`BehaviorModel`] that always returns `None`.
///
/// Agents driven by it only act when commanded through the world, and
/// otherwise just decay.
pub struct NoopBehavior;

impl BehaviorModel for NoopBehavior {
    fn choose_action(&self, _agent: &AgentView<'_>, _ctx: &ActionContext<'_>) -> Option<ActionId> {
        None
    }
}
