//! `Population` — every human in the world, in construction order.

use soc_behavior::NeedCatalog;
use soc_core::AgentId;

use crate::{AgentError, AgentResult, Human, HumanBuilder};

/// Owns all humans.  `AgentId(i)` is the human at position `i`; humans are
/// never removed, so ids stay valid for the whole run.
#[derive(Clone, Debug, Default)]
pub struct Population {
    humans: Vec<Human>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a human from `builder` with the next free id and append it.
    pub fn add(&mut self, builder: HumanBuilder, needs: &NeedCatalog) -> AgentResult<AgentId> {
        let id = AgentId::try_from(self.humans.len())
            .ok()
            .filter(|id| *id != AgentId::INVALID)
            .ok_or(AgentError::PopulationFull)?;
        self.humans.push(builder.build(id, needs)?);
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.humans.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.humans.is_empty()
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&Human> {
        self.humans.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Human> {
        self.humans.get_mut(id.index())
    }

    pub fn humans(&self) -> &[Human] {
        &self.humans
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Human> {
        self.humans.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Human> {
        self.humans.iter_mut()
    }

    /// Humans currently executing an action.
    pub fn busy_count(&self) -> usize {
        self.humans.iter().filter(|h| !h.is_idle()).count()
    }

    /// Humans with at least one need at or below zero.
    pub fn distressed_count(&self) -> usize {
        self.humans.iter().filter(|h| h.is_distressed()).count()
    }
}
