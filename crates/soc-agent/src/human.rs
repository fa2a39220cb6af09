//! A single human: owned state plus the action execution state machine.

use soc_behavior::{Action, ActionContext, AgentView, NeedCatalog};
use soc_core::{ActionId, AgentId, Point};
use soc_mobility::{MobilityEngine, MovementState};
use tracing::{debug, trace};

// ── Phase ─────────────────────────────────────────────────────────────────────

/// What a busy human is doing right now.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Walking to the action's destination.
    Traveling,
    /// At the destination, counting ticks toward the action's duration.
    Performing,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Traveling  => "traveling",
            Phase::Performing => "performing",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// Result of asking a human to start an action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DoOutcome {
    /// The action was accepted and begins in this phase.
    Started(Phase),
    /// The human is already executing an action; nothing changed.
    Busy,
}

/// What happened to one human during one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickEvent {
    /// No action; only decay.
    Idle,
    /// Took one step and is still on the way.
    Traveled,
    /// Took the final step and is now performing.
    Arrived,
    /// Spent the tick performing.
    Performed,
    /// Finished `ActionId` this tick and is idle again.
    Completed(ActionId),
}

// ── ActionExecution ───────────────────────────────────────────────────────────

/// Transient state of the action a human is executing.
///
/// Destination and duration are resolved once when the action starts and
/// never re-evaluated.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionExecution {
    pub action:      ActionId,
    pub destination: Point,
    /// Performing ticks needed to complete.
    pub duration:    u64,
    /// Performing ticks spent so far.  Travel does not count.
    pub elapsed:     u64,
    pub phase:       Phase,
    pub movement:    MovementState,
}

// ── Human ─────────────────────────────────────────────────────────────────────

/// One agent.  Owns its position and satisfaction vector outright; catalogs
/// and geography are borrowed per call.
///
/// Build with [`HumanBuilder`](crate::HumanBuilder).
#[derive(Clone, Debug)]
pub struct Human {
    pub(crate) id:           AgentId,
    pub(crate) position:     Point,
    pub(crate) satisfaction: Vec<f64>,
    pub(crate) current:      Option<ActionExecution>,
}

impl Human {
    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Satisfaction values, indexed like the need catalog.  May be negative.
    #[inline]
    pub fn satisfaction(&self) -> &[f64] {
        &self.satisfaction
    }

    /// The action being executed, if any.
    #[inline]
    pub fn current(&self) -> Option<&ActionExecution> {
        self.current.as_ref()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    #[inline]
    pub fn phase(&self) -> Option<Phase> {
        self.current.as_ref().map(|e| e.phase)
    }

    /// `true` when any need has reached zero or below.
    pub fn is_distressed(&self) -> bool {
        self.satisfaction.iter().any(|&v| v <= 0.0)
    }

    /// Sum of need costs at the current satisfaction.
    pub fn reward(&self, needs: &NeedCatalog) -> f64 {
        needs.reward(&self.satisfaction)
    }

    /// Read-only view handed to actions and behavior models.
    pub fn view(&self) -> AgentView<'_> {
        AgentView {
            id:           self.id,
            position:     self.position,
            satisfaction: &self.satisfaction,
            busy:         self.current.is_some(),
        }
    }

    /// Start `action`, unless already busy.
    ///
    /// Resolves destination and duration once, resets elapsed to zero, and
    /// begins in [`Phase::Performing`] when the destination is within the
    /// arrival epsilon, [`Phase::Traveling`] otherwise.
    pub fn do_action(
        &mut self,
        action:   &Action,
        ctx:      &ActionContext<'_>,
        mobility: &MobilityEngine,
    ) -> DoOutcome {
        if let Some(exec) = &self.current {
            debug!(agent = %self.id, current = %exec.action, requested = %action.id, "busy, action rejected");
            return DoOutcome::Busy;
        }

        let view = self.view();
        let destination = action.resolve_destination(&view, ctx);
        let duration = action.resolve_duration(&view, ctx);
        let movement = mobility.begin_travel(self.position, destination, ctx.tick);
        let phase = if movement.in_transit { Phase::Traveling } else { Phase::Performing };

        trace!(
            agent = %self.id,
            action = %action.name,
            %destination,
            duration,
            %phase,
            "action started"
        );
        self.current = Some(ActionExecution {
            action: action.id,
            destination,
            duration,
            elapsed: 0,
            phase,
            movement,
        });
        DoOutcome::Started(phase)
    }

    /// Advance one tick: decay every need, then step the current action.
    pub fn tick(&mut self, ctx: &ActionContext<'_>, mobility: &MobilityEngine) -> TickEvent {
        ctx.needs.decay_all(&mut self.satisfaction);

        let Some(exec) = self.current.as_mut() else {
            return TickEvent::Idle;
        };

        match exec.phase {
            Phase::Traveling => {
                if mobility.step(&mut exec.movement, &mut self.position) {
                    exec.phase = Phase::Performing;
                    trace!(agent = %self.id, action = %exec.action, position = %self.position, "arrived");
                    TickEvent::Arrived
                } else {
                    TickEvent::Traveled
                }
            }
            Phase::Performing => {
                exec.elapsed += 1;
                if exec.elapsed < exec.duration {
                    return TickEvent::Performed;
                }
                let id = exec.action;
                self.current = None;
                match ctx.actions.get(id) {
                    Some(action) => action.complete(&mut self.satisfaction),
                    None => debug!(agent = %self.id, action = %id, "completed action missing from catalog"),
                }
                trace!(agent = %self.id, action = %id, "action completed");
                TickEvent::Completed(id)
            }
        }
    }
}
