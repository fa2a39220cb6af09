//! Read-only state passed to action resolution and behavior callbacks.

use soc_core::{AgentId, Point, Tick};
use soc_spatial::Geography;

use crate::{ActionCatalog, NeedCatalog};

/// A read-only snapshot of the world shared by every agent during a tick.
///
/// Built by soc-sim from the world's immutable parts; it never borrows any
/// agent mutably, so it can be handed to each agent in turn while that
/// agent's own state is being updated.
#[derive(Copy, Clone)]
pub struct ActionContext<'a> {
    /// The tick being simulated.
    pub tick: Tick,

    /// Static forests and lakes.
    pub geography: &'a Geography,

    pub needs: &'a NeedCatalog,

    pub actions: &'a ActionCatalog,
}

impl<'a> ActionContext<'a> {
    #[inline]
    pub fn new(
        tick:      Tick,
        geography: &'a Geography,
        needs:     &'a NeedCatalog,
        actions:   &'a ActionCatalog,
    ) -> Self {
        Self { tick, geography, needs, actions }
    }
}

/// What an action or behavior model may see of one agent.
#[derive(Copy, Clone, Debug)]
pub struct AgentView<'a> {
    pub id:           AgentId,
    pub position:     Point,
    /// Indexed like the need catalog.
    pub satisfaction: &'a [f64],
    /// `true` while the agent is executing an action.
    pub busy:         bool,
}

impl AgentView<'_> {
    /// Sum of need costs for this agent.
    pub fn reward(&self, needs: &NeedCatalog) -> f64 {
        needs.reward(self.satisfaction)
    }
}
