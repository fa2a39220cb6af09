//! Greedy need-driven behavior for the demo.

use soc_behavior::{ActionContext, AgentView, BehaviorModel};
use soc_core::ActionId;

/// Picks the action whose predicted outcome has the highest reward, once
/// any need has dropped below `threshold`.  Ties go to the earlier action.
pub struct Greedy {
    pub threshold: f64,
}

impl BehaviorModel for Greedy {
    fn choose_action(&self, agent: &AgentView<'_>, ctx: &ActionContext<'_>) -> Option<ActionId> {
        if agent.satisfaction.iter().all(|&v| v >= self.threshold) {
            return None;
        }
        let mut best: Option<(ActionId, f64)> = None;
        for action in ctx.actions.iter() {
            let reward = ctx.needs.reward(&action.predict(agent.satisfaction));
            if best.is_none_or(|(_, r)| reward > r) {
                best = Some((action.id, reward));
            }
        }
        best.map(|(id, _)| id)
    }
}
