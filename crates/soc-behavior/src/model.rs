//! The `BehaviorModel` trait — the extension point for action choice.

use soc_core::ActionId;

use crate::{ActionContext, AgentView};

/// Pluggable action choice.
///
/// Before every tick the world asks the model what each *idle* agent should
/// do next.  Returning `Some(action)` starts that action exactly as
/// `World::command` would; `None` leaves the agent idle for the tick, so it
/// only decays.
///
/// Busy agents are never offered to the model.
///
/// # Example
///
/// ```rust,ignore
/// struct DrinkWhenThirsty;
///
/// impl BehaviorModel for DrinkWhenThirsty {
///     fn choose_action(&self, agent: &AgentView<'_>, _ctx: &ActionContext<'_>) -> Option<ActionId> {
///         (agent.satisfaction[NeedCatalog::WATER.index()] < 40.0).then_some(ActionCatalog::DRINK)
///     }
/// }
/// ```
pub trait BehaviorModel: Send + Sync + 'static {
    /// Pick the next action for an idle agent, or `None` to stay idle.
    fn choose_action(&self, agent: &AgentView<'_>, ctx: &ActionContext<'_>) -> Option<ActionId>;

    /// Called after an agent completes `action`.
    ///
    /// Default: does nothing.
    fn on_action_complete(&self, _agent: &AgentView<'_>, _action: ActionId, _ctx: &ActionContext<'_>) {}
}
