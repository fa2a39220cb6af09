//! The `World` struct and its tick loop.

use soc_agent::{DoOutcome, Human, Population, TickEvent};
use soc_behavior::{ActionCatalog, ActionContext, BehaviorModel, NeedCatalog};
use soc_core::{ActionId, AgentId, Point, SimClock, SimConfig, SocError, Tick};
use soc_mobility::MobilityEngine;
use soc_spatial::Geography;
use tracing::{debug, warn};

use crate::{RenderBuffer, SimObserver, SimResult, Snapshot};

// ── TickSummary ───────────────────────────────────────────────────────────────

/// Aggregate counts for one completed tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub tick:       Tick,
    /// Actions started by the behavior model before this tick.
    pub started:    usize,
    /// Humans that reached their destination this tick.
    pub arrivals:   usize,
    /// Actions completed this tick.
    pub completed:  usize,
    /// Humans still executing an action after this tick.
    pub busy:       usize,
    /// Humans with at least one need at or below zero after this tick.
    pub distressed: usize,
}

// ── World ─────────────────────────────────────────────────────────────────────

/// The simulation: humans plus the static world they live in.
///
/// Create via [`WorldBuilder`][crate::WorldBuilder].  Geography, catalogs
/// and the mobility engine are fixed at construction; only the humans
/// change, and only through [`tick`](Self::tick) and
/// [`command`](Self::command).
pub struct World<B: BehaviorModel> {
    pub(crate) config:     SimConfig,
    pub(crate) clock:      SimClock,
    pub(crate) geography:  Geography,
    pub(crate) needs:      NeedCatalog,
    pub(crate) actions:    ActionCatalog,
    pub(crate) mobility:   MobilityEngine,
    pub(crate) population: Population,
    pub(crate) behavior:   B,
    /// Whether each human's first distress has already been logged.
    pub(crate) distress_reported: Vec<bool>,
}

impl<B: BehaviorModel> World<B> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn geography(&self) -> &Geography {
        &self.geography
    }

    pub fn needs(&self) -> &NeedCatalog {
        &self.needs
    }

    pub fn actions(&self) -> &ActionCatalog {
        &self.actions
    }

    pub fn mobility(&self) -> &MobilityEngine {
        &self.mobility
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    /// All humans in construction order.
    pub fn humans(&self) -> &[Human] {
        self.population.humans()
    }

    pub fn human(&self, id: AgentId) -> Option<&Human> {
        self.population.get(id)
    }

    // ── Snapshots ─────────────────────────────────────────────────────────

    /// Every human's position, in construction order.
    pub fn positions(&self) -> Vec<Point> {
        self.population.iter().map(Human::position).collect()
    }

    /// Every human's satisfaction vector, in construction order.
    pub fn satisfactions(&self) -> Vec<Vec<f64>> {
        self.population.iter().map(|h| h.satisfaction().to_vec()).collect()
    }

    /// Copy positions and satisfaction into `buf`, reusing its allocations.
    pub fn fill_render_buffer(&self, buf: &mut RenderBuffer) {
        buf.fill(self.population.humans(), self.needs.len());
    }

    /// Read-only view handed to observers.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            tick:      self.clock.current_tick,
            humans:    self.population.humans(),
            needs:     &self.needs,
            actions:   &self.actions,
            geography: &self.geography,
        }
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Ask `agent` to start `action` now.
    ///
    /// # Errors
    ///
    /// Unknown agent or action ids.  A busy human is *not* an error: the
    /// result is `Ok(DoOutcome::Busy)` and nothing changes.
    pub fn command(&mut self, agent: AgentId, action: ActionId) -> SimResult<DoOutcome> {
        let action = self.actions.get(action).ok_or(SocError::ActionNotFound(action))?;
        let human = self.population.get_mut(agent).ok_or(SocError::AgentNotFound(agent))?;
        let ctx = ActionContext::new(self.clock.current_tick, &self.geography, &self.needs, &self.actions);
        Ok(human.do_action(action, &ctx, &self.mobility))
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Run until `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = self.config.end_tick();
        let remaining = end.0.saturating_sub(self.clock.current_tick.0);
        self.run_ticks(remaining, observer)?;
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        let interval = self.config.output_interval_ticks;
        for _ in 0..n {
            observer.on_tick_start(self.clock.current_tick + 1);
            let summary = self.tick();
            observer.on_tick_end(&summary);
            if interval > 0 && summary.tick.0.is_multiple_of(interval) {
                observer.on_snapshot(&self.snapshot());
            }
        }
        Ok(())
    }

    /// Advance the whole world by one tick.
    ///
    /// Never fails: every human is advanced exactly once, in construction
    /// order, whatever its state.
    pub fn tick(&mut self) -> TickSummary {
        let started = self.choose_actions();

        self.clock.advance();
        let now = self.clock.current_tick;
        let ctx = ActionContext::new(now, &self.geography, &self.needs, &self.actions);

        let mut summary = TickSummary { tick: now, started, ..TickSummary::default() };
        for (human, reported) in self.population.iter_mut().zip(self.distress_reported.iter_mut()) {
            match human.tick(&ctx, &self.mobility) {
                TickEvent::Arrived => summary.arrivals += 1,
                TickEvent::Completed(action) => {
                    summary.completed += 1;
                    self.behavior.on_action_complete(&human.view(), action, &ctx);
                }
                TickEvent::Idle | TickEvent::Traveled | TickEvent::Performed => {}
            }
            if !*reported && human.is_distressed() {
                *reported = true;
                warn!(
                    agent = %human.id(),
                    tick = %now,
                    satisfaction = ?human.satisfaction(),
                    "agent entered distress"
                );
            }
        }
        summary.busy = self.population.busy_count();
        summary.distressed = self.population.distressed_count();

        debug!(
            tick = %now,
            started = summary.started,
            arrivals = summary.arrivals,
            completed = summary.completed,
            busy = summary.busy,
            distressed = summary.distressed,
            "tick complete"
        );
        summary
    }

    /// Offer every idle human to the behavior model and start what it picks.
    ///
    /// Runs at the current (not yet advanced) tick, the same time a
    /// [`command`](Self::command) issued between ticks would use.
    fn choose_actions(&mut self) -> usize {
        let ctx = ActionContext::new(self.clock.current_tick, &self.geography, &self.needs, &self.actions);
        let mut started = 0;
        for human in self.population.iter_mut().filter(|h| h.is_idle()) {
            let Some(id) = self.behavior.choose_action(&human.view(), &ctx) else {
                continue;
            };
            match self.actions.get(id) {
                Some(action) => {
                    if let DoOutcome::Started(_) = human.do_action(action, &ctx, &self.mobility) {
                        started += 1;
                    }
                }
                None => warn!(agent = %human.id(), action = %id, "behavior chose an unknown action, ignored"),
            }
        }
        started
    }
}
